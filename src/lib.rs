//! Stacksort: sort integers with two stacks and a tiny instruction set
//!
//! Given a sequence of distinct integers on stack A and an empty stack B,
//! stacksort computes a short sequence of stack operations that leaves A
//! sorted ascending (smallest on top) and B empty. The operations are:
//!
//! | token | effect |
//! |-------|--------|
//! | `pa` / `pb` | push the top of B onto A / of A onto B |
//! | `sa` / `sb` / `ss` | swap the two top elements of A / B / both |
//! | `ra` / `rb` / `rr` | rotate A / B / both: top goes to the bottom |
//! | `rra` / `rrb` / `rrr` | reverse-rotate A / B / both: bottom goes to the top |
//!
//! # Core Concepts
//!
//! - **Core**: the two-stack machine, [`StackModel`], and its [`OperationLog`]
//! - **Input**: validation of raw tokens and rank normalization
//! - **Engine**: distribution to B by value range, cheapest-first insertion back into A
//! - **Solution**: a portable record of input plus log, with text/JSON/binary codecs
//!
//! # Example
//!
//! ```rust
//! use stacksort::{sort, StackModel};
//!
//! let log = sort(&[5, 4, 2, 1, 3]).unwrap();
//! println!("{log}");
//!
//! let model = StackModel::replay(&[5, 4, 2, 1, 3], log.iter());
//! assert!(model.is_sorted());
//! assert_eq!(model.a().to_vec(), vec![1, 2, 3, 4, 5]);
//! ```

pub mod config;
pub mod core;
pub mod engine;
pub mod input;
pub mod solution;

// Re-export commonly used types
pub use config::{EngineConfig, EngineConfigBuilder};
pub use crate::core::{Op, OperationLog, StackModel};
pub use engine::Engine;
pub use input::{InputError, InputErrors};
pub use solution::Solution;

/// Sort distinct integers with the default engine.
pub fn sort(values: &[i32]) -> Result<OperationLog, InputError> {
    Engine::default().sort(values)
}

/// Validate raw argument strings and sort them with the default engine.
///
/// ```rust
/// let log = stacksort::sort_args(&["2 1"]).unwrap();
/// assert_eq!(log.to_string(), "sa\n");
///
/// assert!(stacksort::sort_args(&["1", "1"]).is_err());
/// ```
pub fn sort_args<S: AsRef<str>>(args: &[S]) -> Result<OperationLog, InputErrors> {
    Engine::default().sort_args(args)
}
