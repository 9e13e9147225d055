//! Configuration for MimeKV
//!
//! Centralized configuration with sensible defaults.

use std::path::PathBuf;

use crate::error::{MimeError, Result};

/// Main configuration for a MimeKV store
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Persistence Configuration
    // -------------------------------------------------------------------------
    /// Snapshot file the store is bound to for its whole lifetime
    pub snapshot_path: PathBuf,

    /// fsync the temporary snapshot file before renaming it into place
    pub sync_on_save: bool,

    // -------------------------------------------------------------------------
    // Map Configuration
    // -------------------------------------------------------------------------
    /// Number of independently locked shards (power of two)
    pub shard_count: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            snapshot_path: PathBuf::from("./mimekv.snapshot"),
            sync_on_save: true,
            shard_count: 16,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Check invariants that the store relies on
    pub fn validate(&self) -> Result<()> {
        if self.shard_count == 0 || !self.shard_count.is_power_of_two() {
            return Err(MimeError::Config(format!(
                "shard_count must be a non-zero power of two, got {}",
                self.shard_count
            )));
        }
        if self.snapshot_path.as_os_str().is_empty() {
            return Err(MimeError::Config("snapshot_path cannot be empty".to_string()));
        }
        Ok(())
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the snapshot file path
    pub fn snapshot_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.snapshot_path = path.into();
        self
    }

    /// Enable or disable fsync on save
    pub fn sync_on_save(mut self, sync: bool) -> Self {
        self.config.sync_on_save = sync;
        self
    }

    /// Set the number of map shards
    pub fn shard_count(mut self, count: usize) -> Self {
        self.config.shard_count = count;
        self
    }

    pub fn build(self) -> Result<Config> {
        self.config.validate()?;
        Ok(self.config)
    }
}
