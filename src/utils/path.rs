//! Default locations of the tool's files

use std::path::PathBuf;

/// Directory name used under the platform data and cache directories
pub const APP_DIR_NAME: &str = "online-judge-tools";

/// Per-user data directory of the tool, falling back to the working directory
#[must_use]
pub fn user_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR_NAME)
}

/// Per-user cache directory of the tool, if the platform has one
#[must_use]
pub fn user_cache_dir() -> Option<PathBuf> {
    dirs::cache_dir().map(|dir| dir.join(APP_DIR_NAME))
}

/// Cookie jar used when `--cookie` is omitted
#[must_use]
pub fn default_cookie_path() -> PathBuf {
    user_data_dir().join("cookie.jar")
}

/// Location of the update-check cache
#[must_use]
pub fn default_update_cache_path() -> Option<PathBuf> {
    user_cache_dir().map(|dir| dir.join("update.json"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_cookie_path() {
        let path = default_cookie_path();
        assert!(path.ends_with("online-judge-tools/cookie.jar"));
    }

    #[test]
    fn test_update_cache_lives_in_app_dir() {
        if let Some(path) = default_update_cache_path() {
            assert!(path.ends_with("online-judge-tools/update.json"));
        }
    }
}
