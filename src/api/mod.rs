//! Judge-site API client surface
//!
//! Identifies which online judge a URL belongs to. Scraping, authentication
//! and submission are not implemented by this client.

use std::fmt;
use url::Url;

/// Name of the API client reported in the version line
pub const NAME: &str = "online-judge-api";

/// Version of the API client, versioned independently of the CLI
pub const VERSION: &str = "0.1.0";

/// An online judge recognised from a URL
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Service {
    AtCoder,
    Codeforces,
    Yukicoder,
    AizuOnlineJudge,
    LibraryChecker,
    HackerRank,
    Kattis,
    Topcoder,
    CsAcademy,
}

impl Service {
    const ALL: [Self; 9] = [
        Self::AtCoder,
        Self::Codeforces,
        Self::Yukicoder,
        Self::AizuOnlineJudge,
        Self::LibraryChecker,
        Self::HackerRank,
        Self::Kattis,
        Self::Topcoder,
        Self::CsAcademy,
    ];

    /// Recognise the judge a problem, contest or login URL belongs to
    ///
    /// Returns `None` for malformed URLs and unknown hosts.
    #[must_use]
    pub fn from_url(url: &str) -> Option<Self> {
        let parsed = Url::parse(url).ok()?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return None;
        }
        let host = parsed.host_str()?;
        Self::ALL.into_iter().find(|service| {
            service
                .hosts()
                .iter()
                .any(|known| host == *known || host.ends_with(&format!(".{known}")))
        })
    }

    /// Hostnames served by this judge
    const fn hosts(self) -> &'static [&'static str] {
        match self {
            Self::AtCoder => &["atcoder.jp"],
            Self::Codeforces => &["codeforces.com"],
            Self::Yukicoder => &["yukicoder.me"],
            Self::AizuOnlineJudge => &["judge.u-aizu.ac.jp", "onlinejudge.u-aizu.ac.jp"],
            Self::LibraryChecker => &["judge.yosupo.jp"],
            Self::HackerRank => &["hackerrank.com"],
            Self::Kattis => &["open.kattis.com", "kattis.com"],
            Self::Topcoder => &["topcoder.com"],
            Self::CsAcademy => &["csacademy.com"],
        }
    }

    /// Human-readable name of the judge
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::AtCoder => "AtCoder",
            Self::Codeforces => "Codeforces",
            Self::Yukicoder => "yukicoder",
            Self::AizuOnlineJudge => "Aizu Online Judge",
            Self::LibraryChecker => "Library Checker",
            Self::HackerRank => "HackerRank",
            Self::Kattis => "Kattis",
            Self::Topcoder => "Topcoder",
            Self::CsAcademy => "CS Academy",
        }
    }
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
