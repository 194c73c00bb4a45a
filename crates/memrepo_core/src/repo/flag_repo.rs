//! Feature flag repository.

use crate::model::feature_flag::FeatureFlag;
use crate::repo::memory::{InMemoryRepository, RepoError, RepoResult, Repository};

/// In-memory feature flag store keyed by flag key.
#[derive(Debug, Clone, Default)]
pub struct FeatureFlagRepository {
    inner: InMemoryRepository<FeatureFlag>,
}

impl FeatureFlagRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Looks up a flag by key without allocating an owned key.
    pub fn find_by_key(&self, key: &str) -> RepoResult<FeatureFlag> {
        self.inner
            .get(key)
            .cloned()
            .ok_or_else(|| RepoError::not_found(&key))
    }

    /// Returns enabled flags in unspecified order.
    pub fn find_enabled(&self) -> Vec<FeatureFlag> {
        self.inner.iter().filter(|flag| flag.enabled).cloned().collect()
    }
}

impl Repository<FeatureFlag> for FeatureFlagRepository {
    fn create(&mut self, flag: FeatureFlag) -> RepoResult<FeatureFlag> {
        self.inner.create(flag)
    }

    fn find_all(&self) -> Vec<FeatureFlag> {
        self.inner.find_all()
    }

    fn find_by_id(&self, key: &String) -> RepoResult<FeatureFlag> {
        self.inner.find_by_id(key)
    }

    fn update(&mut self, flag: FeatureFlag) -> RepoResult<FeatureFlag> {
        self.inner.update(flag)
    }

    fn delete(&mut self, key: &String) -> RepoResult<()> {
        self.inner.delete(key)
    }
}

#[cfg(test)]
mod tests {
    use super::FeatureFlagRepository;
    use crate::model::feature_flag::FeatureFlag;
    use crate::repo::memory::{RepoError, Repository};

    #[test]
    fn find_by_key_matches_find_by_id() {
        let mut repo = FeatureFlagRepository::new();
        let flag = repo.create(FeatureFlag::new("beta.search", true)).unwrap();

        assert_eq!(repo.find_by_key("beta.search").unwrap(), flag);
        assert_eq!(repo.find_by_id(&"beta.search".to_string()).unwrap(), flag);
        assert_eq!(
            repo.find_by_key("missing"),
            Err(RepoError::NotFound("missing".to_string()))
        );
    }
}
