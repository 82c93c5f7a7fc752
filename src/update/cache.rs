//! On-disk cache of looked-up versions

use crate::error::AdvisoryError;
use crate::system::System;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Result of one version lookup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheEntry {
    /// When the lookup was performed
    pub checked_at: DateTime<Utc>,
    /// Newest version found, `None` when the lookup failed
    pub version: Option<String>,
}

/// Lookups keyed by package name
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VersionCache {
    entries: BTreeMap<String, CacheEntry>,
}

impl VersionCache {
    /// Load the cache from `path`
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read
    /// - The file is not a valid cache
    pub fn load(system: &dyn System, path: &Path) -> Result<Self, AdvisoryError> {
        let content = system.read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Write the cache to `path`, creating parent directories
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The parent directory cannot be created
    /// - The file cannot be written
    pub fn save(&self, system: &dyn System, path: &Path) -> Result<(), AdvisoryError> {
        if let Some(parent) = path.parent() {
            system.create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        system.write(path, content.as_bytes())?;
        Ok(())
    }

    /// Entry for `package` if it was recorded less than `max_age` before `now`
    #[must_use]
    pub fn fresh(&self, package: &str, now: DateTime<Utc>, max_age: Duration) -> Option<&CacheEntry> {
        self.entries
            .get(package)
            .filter(|entry| now.signed_duration_since(entry.checked_at) < max_age)
    }

    /// Record the outcome of a lookup
    pub fn insert(&mut self, package: &str, version: Option<String>, checked_at: DateTime<Utc>) {
        self.entries
            .insert(package.to_owned(), CacheEntry { checked_at, version });
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "This is a test module")]
mod tests {
    use super::*;
    use crate::system::MockSystem;

    #[test]
    fn test_freshness_window() {
        let now = Utc::now();
        let mut cache = VersionCache::default();
        cache.insert("oj-cli", Some("1.0.0".to_owned()), now - Duration::hours(9));
        cache.insert("other", Some("2.0.0".to_owned()), now - Duration::hours(1));

        let max_age = Duration::hours(8);
        assert!(cache.fresh("oj-cli", now, max_age).is_none());
        assert_eq!(
            cache.fresh("other", now, max_age).unwrap().version.as_deref(),
            Some("2.0.0")
        );
        assert!(cache.fresh("missing", now, max_age).is_none());
    }

    #[test]
    fn test_save_creates_parent_and_loads_back() {
        let system = MockSystem::new();
        let path = Path::new("/home/user/.cache/online-judge-tools/update.json");
        let mut cache = VersionCache::default();
        cache.insert("oj-cli", None, Utc::now());

        cache.save(&system, path).unwrap();
        assert_eq!(VersionCache::load(&system, path).unwrap(), cache);
    }
}
