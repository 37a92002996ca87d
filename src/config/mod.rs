//! Engine configuration.
//!
//! The distribution stage splits the rank domain into chunks at fixed
//! fractions of N. Those fractions, and the size below which chunking is
//! skipped, are tuned by measurement rather than derived, so they live here
//! as data instead of being baked into the engine.
//!
//! # Example
//!
//! ```rust
//! use stacksort::config::EngineConfigBuilder;
//!
//! let config = EngineConfigBuilder::new()
//!     .chunk_fractions(vec![0.4, 0.8])
//!     .chunk_threshold(50)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.chunk_bounds(100), vec![(1, 40), (41, 80)]);
//! assert!(config.chunk_bounds(50).is_empty());
//! ```

pub mod error;

pub use error::ConfigError;

use serde::{Deserialize, Serialize};

/// Default cumulative chunk boundaries. The final 100% boundary is the flush pass.
pub const DEFAULT_CHUNK_FRACTIONS: [f64; 3] = [0.5, 0.7, 0.85];

/// Inputs at or below this size skip chunking.
pub const DEFAULT_CHUNK_THRESHOLD: usize = 20;

/// Tunable parameters of the sorting engine.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Cumulative fractions of N at which chunk passes end, strictly increasing in (0, 1].
    pub chunk_fractions: Vec<f64>,

    /// Inputs with N at or below this go straight to the flush pass.
    pub chunk_threshold: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            chunk_fractions: DEFAULT_CHUNK_FRACTIONS.to_vec(),
            chunk_threshold: DEFAULT_CHUNK_THRESHOLD,
        }
    }
}

impl EngineConfig {
    /// Load a configuration from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the fractions are in range and strictly increasing.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut previous: Option<f64> = None;
        for (index, &value) in self.chunk_fractions.iter().enumerate() {
            if !(value > 0.0 && value <= 1.0) {
                return Err(ConfigError::FractionOutOfRange { index, value });
            }
            if let Some(previous) = previous {
                if value <= previous {
                    return Err(ConfigError::FractionsNotIncreasing {
                        index,
                        previous,
                        value,
                    });
                }
            }
            previous = Some(value);
        }
        Ok(())
    }

    /// Inclusive rank ranges of the chunk passes for an input of size `n`.
    ///
    /// Boundary `f` lands on `floor(n * f)`. Boundaries that do not move past
    /// the previous one are dropped, and no chunks are produced at or below
    /// the threshold.
    pub fn chunk_bounds(&self, n: usize) -> Vec<(u32, u32)> {
        if n <= self.chunk_threshold {
            return Vec::new();
        }

        let mut bounds = Vec::with_capacity(self.chunk_fractions.len());
        let mut lo = 1u32;
        for fraction in &self.chunk_fractions {
            let hi = (n as f64 * fraction).floor() as u32;
            if hi >= lo {
                bounds.push((lo, hi));
                lo = hi + 1;
            }
        }
        bounds
    }
}

/// Builder for [`EngineConfig`] with a fluent API.
#[derive(Clone, Debug, Default)]
pub struct EngineConfigBuilder {
    config: EngineConfig,
}

impl EngineConfigBuilder {
    /// Start from the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the chunk boundary fractions.
    pub fn chunk_fractions(mut self, fractions: Vec<f64>) -> Self {
        self.config.chunk_fractions = fractions;
        self
    }

    /// Set the size at or below which chunking is skipped.
    pub fn chunk_threshold(mut self, threshold: usize) -> Self {
        self.config.chunk_threshold = threshold;
        self
    }

    /// Build the configuration.
    /// Returns an error if the fractions are invalid.
    pub fn build(self) -> Result<EngineConfig, ConfigError> {
        self.config.validate()?;
        Ok(self.config)
    }
}
