//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `memrepo_core` linkage and bootstrap wiring.
//! - Keep output deterministic for quick local sanity checks.

use log::error;
use memrepo_core::{CoreConfig, FeatureFlagService, UserRepository, UserService};
use std::process::ExitCode;

fn main() -> ExitCode {
    let config = match CoreConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("invalid configuration: {err}");
            return ExitCode::FAILURE;
        }
    };
    if let Err(err) = config.init_logging() {
        eprintln!("logging disabled: {err}");
    }

    println!("memrepo_core ping={}", memrepo_core::ping());
    println!("memrepo_core version={}", memrepo_core::core_version());

    match run_demo() {
        Ok((users, flags)) => {
            println!("demo users={users} enabled_flags={flags}");
            ExitCode::SUCCESS
        }
        Err(message) => {
            error!("event=cli_demo module=cli status=error");
            eprintln!("demo failed: {message}");
            ExitCode::FAILURE
        }
    }
}

fn run_demo() -> Result<(usize, usize), String> {
    let mut users = UserService::new(UserRepository::new());
    users
        .register("Ada", "ada@example.com")
        .map_err(|err| err.to_string())?;
    let grace = users
        .register("Grace", "grace@example.com")
        .map_err(|err| err.to_string())?;
    users.deactivate(grace.id).map_err(|err| err.to_string())?;

    let mut flags = FeatureFlagService::default();
    flags
        .register("dry.validator", true, Some("shared validation rules"))
        .map_err(|err| err.to_string())?;
    flags
        .register("kiss.simple_mode", false, None)
        .map_err(|err| err.to_string())?;
    flags.toggle("kiss.simple_mode").map_err(|err| err.to_string())?;

    Ok((users.list().len(), flags.enabled_keys().len()))
}
