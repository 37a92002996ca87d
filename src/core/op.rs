//! The operation vocabulary shared by both stacks.
//!
//! Every primitive the engine can emit is one [`Op`]. Ops are plain values:
//! they carry no operands, they print as their mnemonic, and they parse back
//! from it.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// One primitive stack operation.
///
/// The serialized form of each variant is its mnemonic, so a log encoded as
/// JSON reads the same as the line format.
///
/// # Example
///
/// ```rust
/// use stacksort::core::Op;
///
/// let op: Op = "rrr".parse().unwrap();
/// assert_eq!(op, Op::ReverseRotateBoth);
/// assert_eq!(op.to_string(), "rrr");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Op {
    /// Take the top of B and put it on top of A.
    #[serde(rename = "pa")]
    PushA,
    /// Take the top of A and put it on top of B.
    #[serde(rename = "pb")]
    PushB,
    #[serde(rename = "sa")]
    SwapA,
    #[serde(rename = "sb")]
    SwapB,
    #[serde(rename = "ss")]
    SwapBoth,
    #[serde(rename = "ra")]
    RotateA,
    #[serde(rename = "rb")]
    RotateB,
    #[serde(rename = "rr")]
    RotateBoth,
    #[serde(rename = "rra")]
    ReverseRotateA,
    #[serde(rename = "rrb")]
    ReverseRotateB,
    #[serde(rename = "rrr")]
    ReverseRotateBoth,
}

impl Op {
    /// Every operation, in mnemonic table order.
    pub const ALL: [Op; 11] = [
        Op::PushA,
        Op::PushB,
        Op::SwapA,
        Op::SwapB,
        Op::SwapBoth,
        Op::RotateA,
        Op::RotateB,
        Op::RotateBoth,
        Op::ReverseRotateA,
        Op::ReverseRotateB,
        Op::ReverseRotateBoth,
    ];

    /// The token this operation is written as.
    pub fn mnemonic(&self) -> &'static str {
        match self {
            Self::PushA => "pa",
            Self::PushB => "pb",
            Self::SwapA => "sa",
            Self::SwapB => "sb",
            Self::SwapBoth => "ss",
            Self::RotateA => "ra",
            Self::RotateB => "rb",
            Self::RotateBoth => "rr",
            Self::ReverseRotateA => "rra",
            Self::ReverseRotateB => "rrb",
            Self::ReverseRotateBoth => "rrr",
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}

/// Returned when a token is not one of the eleven mnemonics.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown operation '{0}'")]
pub struct UnknownOp(pub String);

impl FromStr for Op {
    type Err = UnknownOp;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Op::ALL
            .iter()
            .copied()
            .find(|op| op.mnemonic() == s)
            .ok_or_else(|| UnknownOp(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mnemonics_are_unique() {
        let mut seen: Vec<&str> = Op::ALL.iter().map(Op::mnemonic).collect();
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), Op::ALL.len());
    }

    #[test]
    fn every_mnemonic_parses_back() {
        for op in Op::ALL {
            assert_eq!(op.mnemonic().parse::<Op>(), Ok(op));
        }
    }

    #[test]
    fn unknown_tokens_are_rejected() {
        assert_eq!("rrrr".parse::<Op>(), Err(UnknownOp("rrrr".to_string())));
        assert!("".parse::<Op>().is_err());
        assert!("PA".parse::<Op>().is_err());
    }

    #[test]
    fn unknown_op_names_the_token() {
        let err = "push".parse::<Op>().unwrap_err();
        assert_eq!(err.to_string(), "unknown operation 'push'");

        let boxed: Box<dyn std::error::Error> = Box::new(err);
        assert!(boxed.source().is_none());
    }

    #[test]
    fn op_serializes_as_mnemonic() {
        let json = serde_json::to_string(&Op::ReverseRotateA).unwrap();
        assert_eq!(json, "\"rra\"");
        let back: Op = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Op::ReverseRotateA);
    }
}
