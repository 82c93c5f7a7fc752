//! Update advisory
//!
//! Best-effort check of whether a newer release of the tool has been
//! published. The check is fail-open: any failure is logged at debug level
//! and reported as "current" so it can never block or fail a command.

pub mod cache;
pub mod crates_io;

pub use cache::{CacheEntry, VersionCache};
pub use crates_io::CratesIo;

use crate::error::AdvisoryError;
use crate::system::System;
use crate::utils::HINT;
use chrono::{Duration, Utc};
use semver::Version;
use std::path::PathBuf;
use tracing::{debug, info, warn};

/// How long a looked-up version stays valid in the cache
pub const CHECK_INTERVAL_HOURS: i64 = 8;

/// Answers whether the installed version is the newest one
pub trait UpdateAdvisory {
    /// `true` when no newer release is known, including when the check fails
    fn is_current(&self) -> bool;
}

/// Where the newest published version of a package comes from
pub trait VersionSource {
    /// Look up the newest stable version of `package`
    ///
    /// # Errors
    ///
    /// Returns an error if the lookup fails or the answer cannot be parsed
    fn latest_version(&self, package: &str) -> Result<Version, AdvisoryError>;
}

/// Compares installed package versions against a [`VersionSource`], with a
/// file cache so the network is consulted at most once per interval
pub struct UpdateChecker<'sys, S> {
    source: S,
    system: &'sys dyn System,
    cache_path: Option<PathBuf>,
    packages: Vec<(String, String)>,
    interval: Duration,
}

impl<'sys, S: VersionSource> UpdateChecker<'sys, S> {
    /// Create a checker for this tool's own package
    #[must_use]
    pub fn new(source: S, system: &'sys dyn System, cache_path: Option<PathBuf>) -> Self {
        Self {
            source,
            system,
            cache_path,
            packages: vec![(
                env!("CARGO_PKG_NAME").to_owned(),
                env!("CARGO_PKG_VERSION").to_owned(),
            )],
            interval: Duration::hours(CHECK_INTERVAL_HOURS),
        }
    }

    /// Replace the list of `(package, installed version)` pairs to check
    #[must_use]
    pub fn with_packages<I, N, V>(mut self, packages: I) -> Self
    where
        I: IntoIterator<Item = (N, V)>,
        N: Into<String>,
        V: Into<String>,
    {
        self.packages = packages
            .into_iter()
            .map(|(name, version)| (name.into(), version.into()))
            .collect();
        self
    }

    /// The underlying version source
    #[must_use]
    #[inline]
    pub const fn source(&self) -> &S {
        &self.source
    }

    fn check(&self) -> Result<bool, AdvisoryError> {
        let mut cache = self.load_cache();
        let mut is_current = true;

        for (name, installed) in &self.packages {
            let installed = Version::parse(installed)?;
            let Some(latest) = self.latest_version(&mut cache, name)? else {
                continue;
            };
            if installed < latest {
                warn!("update available for {name}: {installed} -> {latest}");
                info!("{HINT}run: $ cargo install --force {name}");
                is_current = false;
            }
        }

        self.store_cache(&cache);
        Ok(is_current)
    }

    /// Newest version of `name`, or `None` when the last lookup failed
    fn latest_version(
        &self,
        cache: &mut VersionCache,
        name: &str,
    ) -> Result<Option<Version>, AdvisoryError> {
        let now = Utc::now();
        if let Some(entry) = cache.fresh(name, now, self.interval) {
            debug!("using cached version of {name} from {}", entry.checked_at);
            return match entry.version.as_deref() {
                Some(version) => Ok(Some(Version::parse(version)?)),
                None => Ok(None),
            };
        }

        match self.source.latest_version(name) {
            Ok(latest) => {
                cache.insert(name, Some(latest.to_string()), now);
                Ok(Some(latest))
            }
            Err(err) => {
                // Remembered so that an unreachable index is not retried on every run
                debug!("failed to look up the latest version of {name}: {err}");
                cache.insert(name, None, now);
                Ok(None)
            }
        }
    }

    fn load_cache(&self) -> VersionCache {
        let Some(path) = self.cache_path.as_deref() else {
            return VersionCache::default();
        };
        if !self.system.is_file(path) {
            return VersionCache::default();
        }
        VersionCache::load(self.system, path).unwrap_or_else(|err| {
            debug!("ignoring update cache {}: {err}", path.display());
            VersionCache::default()
        })
    }

    fn store_cache(&self, cache: &VersionCache) {
        let Some(path) = self.cache_path.as_deref() else {
            return;
        };
        if let Err(err) = cache.save(self.system, path) {
            debug!("failed to write update cache {}: {err}", path.display());
        }
    }
}

impl<S: VersionSource> UpdateAdvisory for UpdateChecker<'_, S> {
    fn is_current(&self) -> bool {
        match self.check() {
            Ok(is_current) => is_current,
            Err(err) => {
                debug!("failed to check update: {err}");
                true
            }
        }
    }
}

/// Advisory with a fixed answer, for runs where checking makes no sense
#[derive(Debug, Clone, Copy)]
pub struct FixedAdvisory(pub bool);

impl UpdateAdvisory for FixedAdvisory {
    fn is_current(&self) -> bool {
        self.0
    }
}
