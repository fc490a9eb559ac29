//! # Simulation Configuration
//!
//! TOML-backed settings, loaded once at startup. Every field has a default,
//! so a partial (or empty) file is valid.

use serde::Deserialize;
use thiserror::Error;

/// Errors produced while loading configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The TOML text failed to parse or had the wrong shape.
    #[error("invalid configuration: {0}")]
    Invalid(#[from] toml::de::Error),
}

/// Simulation settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimConfig {
    /// Map width in tiles.
    pub map_size_x: usize,
    /// Map height in tiles.
    pub map_size_y: usize,
    /// World generation seed.
    pub seed: u64,
    /// Wall-clock seconds per game tick (one tick = one in-game hour).
    pub tick_seconds: f64,
    /// Number of agents spawned at world creation.
    pub starting_population: usize,
    /// Number of tree placements attempted at world creation.
    pub tree_attempts: usize,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            map_size_x: 64,
            map_size_y: 64,
            seed: 0,
            tick_seconds: 0.2,
            starting_population: 10,
            tree_attempts: 200,
        }
    }
}

impl SimConfig {
    /// Parses a configuration from TOML text.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Invalid`] if the text is not valid TOML or contains
    /// unknown fields.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }
}
