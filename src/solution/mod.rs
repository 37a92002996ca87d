//! Portable solutions and log codecs.
//!
//! A [`Solution`] pairs an input sequence with the log that sorts it, so a
//! result can be stored, shipped and checked later. Logs also have a plain
//! text form: one mnemonic per line, which is what external checkers read.

use crate::core::{Op, OperationLog, StackModel};
use crate::engine::Engine;
use crate::input::{InputError, Ranks};
use serde::{Deserialize, Serialize};

pub mod error;

pub use error::CodecError;

/// Version identifier for the solution format
pub const SOLUTION_VERSION: u32 = 1;

/// Render `log` as one mnemonic per line, each line newline-terminated.
///
/// An empty log renders as an empty string.
pub fn render_lines(log: &OperationLog) -> String {
    log.to_string()
}

/// Parse the line format produced by [`render_lines`].
///
/// Surrounding whitespace on a line is ignored; every line must hold one
/// mnemonic. Errors carry the 1-based line number.
///
/// # Example
///
/// ```rust
/// use stacksort::core::Op;
/// use stacksort::solution::parse_lines;
///
/// let log = parse_lines("pb\nrb\npa\n").unwrap();
/// assert_eq!(log.ops(), &[Op::PushB, Op::RotateB, Op::PushA]);
/// assert!(parse_lines("pb\npush\n").is_err());
/// ```
pub fn parse_lines(text: &str) -> Result<OperationLog, CodecError> {
    text.lines()
        .enumerate()
        .map(|(i, line)| {
            line.trim()
                .parse::<Op>()
                .map_err(|_| CodecError::UnknownOperation {
                    line: i + 1,
                    token: line.to_string(),
                })
        })
        .collect()
}

/// An input sequence together with the log that sorts it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Solution {
    /// Solution format version
    pub version: u32,

    /// Original values, first element on top of A
    pub input: Vec<i32>,

    /// Operations to apply, in order
    pub ops: OperationLog,
}

impl Solution {
    /// Wrap an existing log.
    pub fn new(input: Vec<i32>, ops: OperationLog) -> Self {
        Self {
            version: SOLUTION_VERSION,
            input,
            ops,
        }
    }

    /// Sort `input` with `engine` and record the result.
    pub fn solve(engine: &Engine, input: Vec<i32>) -> Result<Self, InputError> {
        let ops = engine.sort(&input)?;
        Ok(Self::new(input, ops))
    }

    /// Replay the log against the input and report whether it sorts it.
    ///
    /// Inputs with repeated values never verify.
    pub fn verify(&self) -> bool {
        match Ranks::from_values(&self.input) {
            Ok(ranks) => StackModel::replay(ranks.ranks(), self.ops.iter()).is_sorted(),
            Err(_) => false,
        }
    }

    /// Serialize to pretty JSON.
    pub fn to_json(&self) -> Result<String, CodecError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| CodecError::SerializationFailed(e.to_string()))
    }

    /// Deserialize from JSON, checking the version.
    pub fn from_json(json: &str) -> Result<Self, CodecError> {
        let solution: Self = serde_json::from_str(json)
            .map_err(|e| CodecError::DeserializationFailed(e.to_string()))?;
        solution.check_version()?;
        Ok(solution)
    }

    /// Serialize to the compact binary format.
    pub fn to_binary(&self) -> Result<Vec<u8>, CodecError> {
        bincode::serialize(self).map_err(|e| CodecError::SerializationFailed(e.to_string()))
    }

    /// Deserialize from the binary format, checking the version.
    pub fn from_binary(bytes: &[u8]) -> Result<Self, CodecError> {
        let solution: Self = bincode::deserialize(bytes)
            .map_err(|e| CodecError::DeserializationFailed(e.to_string()))?;
        solution.check_version()?;
        Ok(solution)
    }

    fn check_version(&self) -> Result<(), CodecError> {
        if self.version != SOLUTION_VERSION {
            return Err(CodecError::UnsupportedVersion {
                found: self.version,
                supported: SOLUTION_VERSION,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_then_parse_preserves_log() {
        let log = Engine::default().sort(&[9, -3, 4, 0, 12, 7]).unwrap();
        let text = render_lines(&log);
        assert_eq!(text.lines().count(), log.len());
        assert_eq!(parse_lines(&text).unwrap(), log);
    }

    #[test]
    fn empty_text_is_empty_log() {
        assert!(parse_lines("").unwrap().is_empty());
        assert_eq!(render_lines(&OperationLog::new()), "");
    }

    #[test]
    fn parse_lines_reports_line_number() {
        let err = parse_lines("pa\nrr\nswap\n").unwrap_err();
        match err {
            CodecError::UnknownOperation { line, token } => {
                assert_eq!(line, 3);
                assert_eq!(token, "swap");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn parse_lines_rejects_blank_lines() {
        assert!(matches!(
            parse_lines("pa\n\npb\n"),
            Err(CodecError::UnknownOperation { line: 2, .. })
        ));
    }

    #[test]
    fn solved_solution_verifies() {
        let solution = Solution::solve(&Engine::default(), vec![3, -8, 15, 2, 6]).unwrap();
        assert_eq!(solution.version, SOLUTION_VERSION);
        assert!(solution.verify());
    }

    #[test]
    fn tampered_solution_fails_verification() {
        let mut ops = Engine::default().sort(&[2, 1, 3]).unwrap().into_ops();
        ops.push(Op::RotateA);
        let solution = Solution::new(vec![2, 1, 3], ops.into());
        assert!(!solution.verify());

        let duplicated = Solution::new(vec![1, 1], OperationLog::new());
        assert!(!duplicated.verify());
    }

    #[test]
    fn json_roundtrip() {
        let solution = Solution::solve(&Engine::default(), vec![4, 1, 3, 2]).unwrap();
        let json = solution.to_json().unwrap();
        assert!(json.contains("\"ops\""));
        assert_eq!(Solution::from_json(&json).unwrap(), solution);
    }

    #[test]
    fn binary_roundtrip() {
        let solution = Solution::solve(&Engine::default(), vec![10, 30, 20]).unwrap();
        let bytes = solution.to_binary().unwrap();
        assert_eq!(Solution::from_binary(&bytes).unwrap(), solution);
    }

    #[test]
    fn unknown_version_is_rejected() {
        let mut solution = Solution::new(vec![1], OperationLog::new());
        solution.version = 99;
        let json = serde_json::to_string(&solution).unwrap();

        assert!(matches!(
            Solution::from_json(&json),
            Err(CodecError::UnsupportedVersion {
                found: 99,
                supported: SOLUTION_VERSION
            })
        ));
    }

    #[test]
    fn garbage_fails_to_deserialize() {
        assert!(matches!(
            Solution::from_json("{"),
            Err(CodecError::DeserializationFailed(_))
        ));
        assert!(matches!(
            Solution::from_binary(&[1, 2]),
            Err(CodecError::DeserializationFailed(_))
        ));
    }
}
