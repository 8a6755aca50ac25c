//! Configuration for kvpath
//!
//! Centralized configuration with sensible defaults.

use std::path::PathBuf;

/// Default storage directory, used whenever no directory is configured
pub const DEFAULT_DATA_DIR: &str = "/var/lib/kvpath";

/// Configuration for one kvpath invocation
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Storage Configuration
    // -------------------------------------------------------------------------
    /// Directory holding the embedded database
    /// Internal structure:
    ///   {data_dir}/
    ///     └── data.redb        (engine-owned database file)
    pub data_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Effective storage directory: an empty configured path falls back to
    /// the default directory.
    pub fn effective_data_dir(&self) -> PathBuf {
        if self.data_dir.as_os_str().is_empty() {
            PathBuf::from(DEFAULT_DATA_DIR)
        } else {
            self.data_dir.clone()
        }
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the storage directory
    pub fn data_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.data_dir = path.into();
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
