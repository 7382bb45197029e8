//! Engine configuration, loadable from TOML.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::EngineError;

/// Largest depth accepted from the outside (UCI option range).
pub const MAX_DEPTH: u8 = 8;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Search depth in plies
    pub depth: u8,
    /// Perspective handed to the root search
    pub maximizing_at_root: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            depth: 3,
            maximizing_at_root: true,
        }
    }
}

impl EngineConfig {
    pub fn from_toml_str(contents: &str) -> Result<Self, EngineError> {
        let mut config: EngineConfig = toml::from_str(contents)?;
        config.depth = clamp_depth(config.depth);
        Ok(config)
    }

    /// Load config from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, EngineError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    pub fn set_depth(&mut self, depth: u8) {
        self.depth = clamp_depth(depth);
    }
}

fn clamp_depth(depth: u8) -> u8 {
    depth.clamp(1, MAX_DEPTH)
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
