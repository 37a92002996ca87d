//! Configuration errors.

use thiserror::Error;

/// Errors that can occur when building or loading an engine configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Chunk fraction {value} at position {index} must lie in (0, 1]")]
    FractionOutOfRange { index: usize, value: f64 },

    #[error("Chunk fractions must strictly increase (position {index}: {value} after {previous})")]
    FractionsNotIncreasing {
        index: usize,
        previous: f64,
        value: f64,
    },

    #[error("Configuration could not be parsed: {0}")]
    Parse(#[from] serde_json::Error),
}
