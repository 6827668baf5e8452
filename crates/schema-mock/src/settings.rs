//! Generator configuration loaded via OrthoConfig.
//!
//! Every field may be set through `SCHEMA_MOCK_*` environment variables or an
//! OrthoConfig configuration file. Command-line flags of the `schema-mock`
//! binary take precedence over these values.

use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::resolver::{DEFAULT_MAX_DEPTH, DEFAULT_MAX_UNIQUE_ATTEMPTS, GenerationOptions};

/// Configuration values controlling generation.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "SCHEMA_MOCK")]
pub struct GeneratorSettings {
    /// Seed for deterministic output; unseeded when absent.
    pub seed: Option<u64>,
    /// Draws allowed per unique array item.
    pub max_unique_attempts: Option<usize>,
    /// Maximum nested resolutions per request.
    pub max_depth: Option<usize>,
    /// Pretty-print generated JSON.
    #[ortho_config(default = false)]
    pub pretty: bool,
}

impl GeneratorSettings {
    /// Return the configured seed, if any.
    #[must_use]
    pub const fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Return the configured unique-item attempt budget, at least one.
    #[must_use]
    pub fn max_unique_attempts(&self) -> usize {
        self.max_unique_attempts
            .unwrap_or(DEFAULT_MAX_UNIQUE_ATTEMPTS)
            .max(1)
    }

    /// Return the configured depth limit, falling back to the default.
    #[must_use]
    pub fn max_depth(&self) -> usize {
        self.max_depth.unwrap_or(DEFAULT_MAX_DEPTH)
    }

    /// Build generation limits from the configured values.
    #[must_use]
    pub fn options(&self) -> GenerationOptions {
        GenerationOptions {
            max_unique_attempts: self.max_unique_attempts(),
            max_depth: self.max_depth(),
        }
    }
}
