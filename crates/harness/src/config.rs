use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::HarnessError;

pub const DEFAULT_REPETITIONS: u32 = 100;

/// Registry settings: repetition count and random seed.
///
/// Loaded from JSON, e.g. `{"repetitions": 250, "seed": 42}`. Missing fields
/// take their defaults; a missing seed means a fresh seed per registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HarnessConfig {
    /// Trials per claim (must be at least 1).
    pub repetitions: u32,
    /// Seed for the registry's random source.
    pub seed: Option<u64>,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        HarnessConfig {
            repetitions: DEFAULT_REPETITIONS,
            seed: None,
        }
    }
}

impl HarnessConfig {
    pub fn with_repetitions(mut self, repetitions: u32) -> Self {
        self.repetitions = repetitions;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn validate(&self) -> Result<(), HarnessError> {
        if self.repetitions == 0 {
            return Err(HarnessError::InvalidRepetitions(self.repetitions));
        }
        Ok(())
    }

    /// Parse and validate a config from JSON.
    pub fn from_json(json: &str) -> Result<Self, HarnessError> {
        let config: HarnessConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read a JSON config file.
    pub fn load(path: &Path) -> Result<Self, HarnessError> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json).map_err(|e| match e {
            HarnessError::Json(err) => {
                HarnessError::Config(format!("{}: {err}", path.display()))
            }
            other => other,
        })
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}
