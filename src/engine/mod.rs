//! The sorting engine.
//!
//! A sort runs four stages over one [`StackModel`], strictly in order:
//!
//! 1. **Normalize**: map input values to ranks `1..=N`
//! 2. **Distribute**: push all but three ranks to B, grouped by range
//! 3. **Insert**: bring every rank back to A at its sorted slot, cheapest first
//! 4. **Align**: rotate A so rank 1 is on top
//!
//! The engine is a pure function of its input: the same sequence always
//! yields the same log.
//!
//! # Example
//!
//! ```rust
//! use stacksort::engine::Engine;
//! use stacksort::core::StackModel;
//!
//! let engine = Engine::default();
//! let log = engine.sort(&[5, 4, 2, 1, 3]).unwrap();
//!
//! let replayed = StackModel::replay(&[5, 4, 2, 1, 3], log.iter());
//! assert!(replayed.is_sorted());
//! assert_eq!(log.len(), 8);
//! ```

mod align;
mod cost;
mod distribute;
mod insert;

pub use align::align;
pub use cost::{op_cost, shortest_rotation, target_rotation, CostPair};
pub use distribute::{distribute, settle_residual, RESIDUAL};
pub use insert::{execute, find_cheapest, insert_all};

use crate::config::EngineConfig;
use crate::core::{OperationLog, StackModel};
use crate::input::{parse_args, InputError, InputErrors, Ranks};
use tracing::debug;

/// Sorting engine with a fixed configuration.
#[derive(Clone, Debug, Default)]
pub struct Engine {
    config: EngineConfig,
}

impl Engine {
    /// Create an engine using `config`.
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Sort distinct integers, returning the operation log.
    ///
    /// Fails before emitting anything if a value repeats.
    pub fn sort(&self, values: &[i32]) -> Result<OperationLog, InputError> {
        let ranks = Ranks::from_values(values)?;
        Ok(self.sort_ranks(ranks.ranks()))
    }

    /// Validate raw argument strings, then sort them.
    pub fn sort_args<S: AsRef<str>>(&self, args: &[S]) -> Result<OperationLog, InputErrors> {
        let values = parse_args(args)?;
        self.sort(&values).map_err(InputErrors::from)
    }

    /// Sort a permutation of `1..=N`.
    ///
    /// Distinct ranks outside that domain still produce a correct log, but
    /// the chunk passes are planned for dense ranks.
    ///
    /// Ranks already in ascending order yield an empty log.
    pub fn sort_ranks(&self, ranks: &[u32]) -> OperationLog {
        let n = ranks.len();
        let mut model = StackModel::new(ranks);
        if n <= 1 || model.is_sorted() {
            return model.into_log();
        }

        distribute(&mut model, &self.config);
        settle_residual(&mut model);
        debug!(n, stage = "distribute", ops = model.log().len(), "stage complete");

        insert_all(&mut model);
        debug!(n, stage = "insert", ops = model.log().len(), "stage complete");

        align(&mut model);
        debug!(n, stage = "align", ops = model.log().len(), "stage complete");

        debug_assert!(model.is_sorted());
        model.into_log()
    }
}
