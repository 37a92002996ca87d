//! Operation log.
//!
//! The log is the only externally visible product of a sort. It grows by
//! appending and is never edited in place.

use super::op::Op;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Ordered, append-only record of emitted operations.
///
/// # Example
///
/// ```rust
/// use stacksort::core::{Op, OperationLog};
///
/// let mut log = OperationLog::new();
/// log.record(Op::PushB);
/// log.record(Op::RotateB);
///
/// assert_eq!(log.len(), 2);
/// assert_eq!(log.ops(), &[Op::PushB, Op::RotateB]);
/// assert_eq!(log.to_string(), "pb\nrb\n");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OperationLog {
    ops: Vec<Op>,
}

impl OperationLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self { ops: Vec::new() }
    }

    /// Create an empty log with room for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            ops: Vec::with_capacity(capacity),
        }
    }

    /// Append one operation.
    pub fn record(&mut self, op: Op) {
        self.ops.push(op);
    }

    /// All recorded operations in emission order.
    pub fn ops(&self) -> &[Op] {
        &self.ops
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Op> + '_ {
        self.ops.iter().copied()
    }

    /// Consume the log, returning the raw operations.
    pub fn into_ops(self) -> Vec<Op> {
        self.ops
    }
}

impl From<Vec<Op>> for OperationLog {
    fn from(ops: Vec<Op>) -> Self {
        Self { ops }
    }
}

impl FromIterator<Op> for OperationLog {
    fn from_iter<I: IntoIterator<Item = Op>>(iter: I) -> Self {
        Self {
            ops: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a OperationLog {
    type Item = Op;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, Op>>;

    fn into_iter(self) -> Self::IntoIter {
        self.ops.iter().copied()
    }
}

/// One mnemonic per line, each line newline-terminated.
impl fmt::Display for OperationLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for op in &self.ops {
            writeln!(f, "{op}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_log_is_empty() {
        let log = OperationLog::new();
        assert!(log.is_empty());
        assert_eq!(log.len(), 0);
        assert_eq!(log.to_string(), "");
    }

    #[test]
    fn record_appends_in_order() {
        let mut log = OperationLog::with_capacity(4);
        log.record(Op::PushB);
        log.record(Op::SwapA);
        log.record(Op::PushA);

        assert_eq!(log.ops(), &[Op::PushB, Op::SwapA, Op::PushA]);
        assert_eq!(log.iter().last(), Some(Op::PushA));
    }

    #[test]
    fn display_writes_one_mnemonic_per_line() {
        let log: OperationLog = vec![Op::RotateBoth, Op::ReverseRotateB].into();
        assert_eq!(log.to_string(), "rr\nrrb\n");
    }

    #[test]
    fn log_serializes_as_plain_array() {
        let log: OperationLog = [Op::PushB, Op::RotateB].into_iter().collect();
        let json = serde_json::to_string(&log).unwrap();
        assert_eq!(json, r#"["pb","rb"]"#);

        let back: OperationLog = serde_json::from_str(&json).unwrap();
        assert_eq!(back, log);
    }
}
