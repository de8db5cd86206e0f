//! Store directory resolution.

use std::ffi::OsString;
use std::path::PathBuf;

use venues_sdk::DEFAULT_STORE_DIR;

/// Environment variable selecting the storage root
pub const STORE_ENV_VAR: &str = "MINIONS_STORE";

/// Where the JSON file store lives, and how that was decided.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub dir: PathBuf,
    pub source: StoreSource,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreSource {
    Flag,
    Env,
    Default,
}

impl StoreConfig {
    /// Resolve `--store` > `MINIONS_STORE` > `.minions`. An empty env value counts as unset.
    pub fn resolve(flag: Option<PathBuf>, env: Option<OsString>) -> Self {
        if let Some(dir) = flag {
            return Self {
                dir,
                source: StoreSource::Flag,
            };
        }
        match env.filter(|v| !v.is_empty()) {
            Some(value) => Self {
                dir: PathBuf::from(value),
                source: StoreSource::Env,
            },
            None => Self {
                dir: PathBuf::from(DEFAULT_STORE_DIR),
                source: StoreSource::Default,
            },
        }
    }

    /// Resolve against the current process environment
    pub fn from_env(flag: Option<PathBuf>) -> Self {
        let config = Self::resolve(flag, std::env::var_os(STORE_ENV_VAR));
        tracing::debug!(dir = %config.dir.display(), source = ?config.source, "store resolved");
        config
    }
}
