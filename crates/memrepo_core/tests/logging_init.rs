use memrepo_core::{init_logging, logging_status, CoreConfig, LoggingError};

#[test]
fn init_logging_is_idempotent_for_same_config_and_rejects_conflicts() {
    let log_dir = tempfile::tempdir().unwrap();
    let other_dir = tempfile::tempdir().unwrap();
    let log_dir_str = log_dir.path().to_str().unwrap().to_string();
    let other_dir_str = other_dir.path().to_str().unwrap().to_string();

    let config = CoreConfig::from_lookup(|key| match key {
        "MEMREPO_LOG_LEVEL" => Some("info".to_string()),
        "MEMREPO_LOG_DIR" => Some(log_dir_str.clone()),
        _ => None,
    })
    .unwrap();
    assert_eq!(config.init_logging(), Ok(true));
    init_logging("info", &log_dir_str).expect("same config should be idempotent");

    let level_err = init_logging("debug", &log_dir_str).unwrap_err();
    assert!(matches!(level_err, LoggingError::Conflict { field: "level", .. }));
    assert!(level_err.to_string().contains("refusing to switch"));

    let dir_err = init_logging("info", &other_dir_str).unwrap_err();
    assert!(matches!(dir_err, LoggingError::Conflict { field: "log_dir", .. }));

    let (level, dir) = logging_status().expect("logging should be active");
    assert_eq!(level, "info");
    assert_eq!(dir, log_dir.path());
}
