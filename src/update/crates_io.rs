//! crates.io as the source of published versions

use super::VersionSource;
use crate::error::AdvisoryError;
use crate::utils::NETWORK;
use semver::Version;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

/// Upper bound on one lookup, so an unreachable index never stalls a command
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

const DEFAULT_BASE_URL: &str = "https://crates.io";

const USER_AGENT: &str = concat!(
    env!("CARGO_PKG_NAME"),
    "/",
    env!("CARGO_PKG_VERSION"),
    " (+",
    env!("CARGO_PKG_REPOSITORY"),
    ")"
);

#[derive(Debug, Deserialize)]
struct CrateResponse {
    #[serde(rename = "crate")]
    krate: CrateInfo,
}

#[derive(Debug, Deserialize)]
struct CrateInfo {
    max_stable_version: String,
}

/// Looks up versions through the crates.io web API
#[derive(Debug, Clone)]
pub struct CratesIo {
    base_url: String,
    timeout: Duration,
}

impl CratesIo {
    #[must_use]
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Point the source at a different index host
    #[must_use]
    pub fn with_base_url<S: Into<String>>(mut self, base_url: S) -> Self {
        self.base_url = base_url.into();
        self
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn crate_url(&self, package: &str) -> String {
        format!(
            "{}/api/v1/crates/{package}",
            self.base_url.trim_end_matches('/')
        )
    }
}

impl Default for CratesIo {
    fn default() -> Self {
        Self::new()
    }
}

impl VersionSource for CratesIo {
    fn latest_version(&self, package: &str) -> Result<Version, AdvisoryError> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(self.timeout)
            .build()?;

        let url = self.crate_url(package);
        debug!("{NETWORK}GET: {url}");
        let response: CrateResponse = client.get(&url).send()?.error_for_status()?.json()?;
        Ok(Version::parse(&response.krate.max_stable_version)?)
    }
}
