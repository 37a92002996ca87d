//! Input validation errors.

use thiserror::Error;

/// A single reason an input sequence was rejected.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("'{token}' is not a valid integer")]
    Parse { token: String },

    #[error("'{token}' is outside the 32-bit signed range")]
    Range { token: String },

    #[error("{value} appears more than once")]
    Duplicate { value: i32 },
}

/// Every problem found in one validation pass. Never empty.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid input: {}", join(.0))]
pub struct InputErrors(Vec<InputError>);

impl InputErrors {
    pub(crate) fn new(errors: Vec<InputError>) -> Self {
        debug_assert!(!errors.is_empty());
        Self(errors)
    }

    pub fn errors(&self) -> &[InputError] {
        &self.0
    }

    /// The first error found, in input order.
    pub fn first(&self) -> Option<&InputError> {
        self.0.first()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<InputError> for InputErrors {
    fn from(error: InputError) -> Self {
        Self(vec![error])
    }
}

fn join(errors: &[InputError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
