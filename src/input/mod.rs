//! Input validation and normalization.
//!
//! Raw arguments are validated in a single pass that collects every problem
//! instead of stopping at the first one, using Stillwater's `Validation`.
//! Validation is atomic: either every token is a distinct `i32`, or the
//! caller gets the full list of errors and no sort happens.
//!
//! # Example
//!
//! ```rust
//! use stacksort::input::{parse_args, InputError};
//!
//! let values = parse_args(&["3 1", "2"]).unwrap();
//! assert_eq!(values, vec![3, 1, 2]);
//!
//! let errors = parse_args(&["1", "x", "99999999999", "1"]).unwrap_err();
//! assert_eq!(errors.len(), 2);
//! assert!(matches!(errors.errors()[0], InputError::Parse { .. }));
//! assert!(matches!(errors.errors()[1], InputError::Range { .. }));
//! ```

pub mod error;
mod normalize;

pub use error::{InputError, InputErrors};
pub use normalize::Ranks;

use normalize::duplicate_values;
use std::num::IntErrorKind;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Validate one token as an `i32`.
pub fn parse_token(token: &str) -> Validation<i32, NonEmptyVec<InputError>> {
    match token.parse::<i32>() {
        Ok(value) => Validation::success(value),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
                Validation::fail(InputError::Range {
                    token: token.to_string(),
                })
            }
            _ => Validation::fail(InputError::Parse {
                token: token.to_string(),
            }),
        },
    }
}

/// Split arguments into tokens. An argument may hold several
/// whitespace-separated numbers; an argument that is empty or all blanks
/// is itself one (invalid) token.
fn tokens<S: AsRef<str>>(args: &[S]) -> Vec<&str> {
    let mut tokens = Vec::new();
    for arg in args {
        let arg = arg.as_ref();
        if arg.trim().is_empty() {
            tokens.push(arg);
        } else {
            tokens.extend(arg.split_whitespace());
        }
    }
    tokens
}

/// Validate `args` into a sequence of distinct integers.
///
/// All parse and range errors are reported together. Duplicates are checked
/// once every token is a valid integer, and each repeated value is reported
/// once.
pub fn parse_args<S: AsRef<str>>(args: &[S]) -> Result<Vec<i32>, InputErrors> {
    let checks: Vec<Validation<i32, NonEmptyVec<InputError>>> =
        tokens(args).into_iter().map(parse_token).collect();

    let values = match Validation::all_vec(checks) {
        Validation::Success(values) => values,
        Validation::Failure(errors) => {
            return Err(InputErrors::new(errors.iter().cloned().collect()));
        }
    };

    let mut sorted = values.clone();
    sorted.sort_unstable();
    let duplicates = duplicate_values(&sorted);
    if !duplicates.is_empty() {
        return Err(InputErrors::new(
            duplicates
                .into_iter()
                .map(|value| InputError::Duplicate { value })
                .collect(),
        ));
    }

    Ok(values)
}
