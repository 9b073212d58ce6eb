//! Generator configuration
//!
//! Describes how a generator should be created: which seed to use and,
//! optionally, a saved state to resume from. Parsed from JSON.
//!
//! ```json
//! { "seed": { "lo": 3418323524, "hi": 20529293 }, "state": "0x0c2ea4bab1fa6908" }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::rng::{RandomGenerator, Seed, StateParseError};

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid config JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("Invalid initial state: {0}")]
    InvalidState(#[from] StateParseError),
}

/// Seed as written in configuration: one integer or two 32-bit words
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SeedConfig {
    Value(u64),
    Parts { lo: u32, hi: u32 },
}

impl From<SeedConfig> for Seed {
    fn from(config: SeedConfig) -> Self {
        match config {
            SeedConfig::Value(value) => Seed::from(value),
            SeedConfig::Parts { lo, hi } => Seed::from_parts(lo, hi),
        }
    }
}

/// Random generator configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Seed for the generator (default seed when absent)
    #[serde(default)]
    pub seed: Option<SeedConfig>,

    /// Exported state to resume from, applied after seeding
    #[serde(default)]
    pub state: Option<String>,
}

impl GeneratorConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Create the configured generator
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidState`] if `state` is not a valid hex
    /// state string.
    pub fn build(&self) -> Result<RandomGenerator, ConfigError> {
        let seed = self.seed.map(Seed::from).unwrap_or_default();
        let mut rng = RandomGenerator::with_seed(seed);

        if let Some(state) = &self.state {
            rng.set_state(state)?;
        }

        debug!(
            seed = seed.as_u64(),
            state = rng.raw_state(),
            "built random generator from config"
        );
        Ok(rng)
    }
}
