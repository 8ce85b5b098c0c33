//! Build configuration.

use serde::{Deserialize, Serialize};

/// Resource limits handed to an [`EngineBuilder`](crate::EngineBuilder).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildConfig {
    /// Scratch memory ceiling for the build, in bytes (default: 1MB).
    pub max_workspace_bytes: u64,

    /// Largest batch size the built engine must support (default: 1).
    pub max_batch_size: u32,
}

impl Default for BuildConfig {
    fn default() -> Self {
        BuildConfig {
            max_workspace_bytes: 1 << 20, // 1MB
            max_batch_size: 1,
        }
    }
}

impl BuildConfig {
    /// Create a configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the workspace ceiling (builder pattern).
    pub fn with_max_workspace_bytes(mut self, bytes: u64) -> Self {
        self.max_workspace_bytes = bytes;
        self
    }

    /// Set the maximum batch size (builder pattern).
    pub fn with_max_batch_size(mut self, batch: u32) -> Self {
        self.max_batch_size = batch;
        self
    }
}
