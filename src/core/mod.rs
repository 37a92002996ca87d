//! Core two-stack machine.
//!
//! This module contains the pieces every sort is built from:
//! - The operation vocabulary via [`Op`]
//! - Rotation-aware stack storage via [`Ring`]
//! - The append-only [`OperationLog`]
//! - [`StackModel`], which applies operations and records them
//!
//! Nothing here makes decisions; the engine decides which operations to run.

mod log;
mod model;
mod op;
mod ring;

pub use log::OperationLog;
pub use model::StackModel;
pub use op::{Op, UnknownOp};
pub use ring::Ring;
