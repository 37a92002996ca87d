//! Final rotation of A.

use super::cost::shortest_rotation;
use crate::core::{Op, StackModel};

/// Rotate A, by the shorter direction, until its minimum is on top.
pub fn align(model: &mut StackModel) {
    let Some(min_position) = model.a().min_position() else {
        return;
    };
    let rotation = shortest_rotation(min_position, model.a().len());
    let op = if rotation > 0 {
        Op::RotateA
    } else {
        Op::ReverseRotateA
    };
    model.repeat(op, rotation.unsigned_abs());
}
