//! B→A insertion.
//!
//! Each round picks the element of B that is cheapest to drop into its
//! sorted slot in A, lines both stacks up (sharing rotations where the
//! directions agree) and pushes it. A stays cyclically sorted throughout.

use super::cost::{shortest_rotation, target_rotation, CostPair};
use crate::core::{Op, StackModel};
use tracing::trace;

/// Cheapest rotation pair over all candidates in B.
///
/// Candidates are visited outward from B's top in both directions at once.
/// Reaching a candidate `i` steps away costs at least `i` operations on B
/// alone, so the scan stops as soon as `i` meets the best total found.
///
/// Returns `None` when B is empty.
pub fn find_cheapest(model: &StackModel) -> Option<CostPair> {
    let (a, b) = (model.a(), model.b());
    if b.is_empty() {
        return None;
    }

    let min_position = a.min_position().unwrap_or(0);
    let candidate = |index: usize| -> Option<CostPair> {
        let value = b.get(index)?;
        Some(CostPair::new(
            target_rotation(a, min_position, value),
            shortest_rotation(index, b.len()),
        ))
    };

    let mut best = CostPair::new(-(a.len() as isize), b.len() as isize);
    let mut best_total = best.total();
    let mut offset = 0;
    while offset < best_total && offset <= b.len() / 2 {
        let front = candidate(offset);
        let back = if offset > 0 {
            candidate(b.len() - offset)
        } else {
            None
        };
        for pair in [front, back].into_iter().flatten() {
            let total = pair.total();
            if total < best_total {
                best = pair;
                best_total = total;
            }
        }
        offset += 1;
    }
    Some(best)
}

/// Perform the rotations described by `cost`, then push B's top onto A.
pub fn execute(model: &mut StackModel, cost: CostPair) {
    let CostPair { mut a, mut b } = cost;

    if cost.is_aligned() {
        let shared = a.unsigned_abs().min(b.unsigned_abs());
        let both = if a > 0 || b > 0 {
            Op::RotateBoth
        } else {
            Op::ReverseRotateBoth
        };
        model.repeat(both, shared);
        a -= a.signum() * shared as isize;
        b -= b.signum() * shared as isize;
    }

    let a_op = if a > 0 {
        Op::RotateA
    } else {
        Op::ReverseRotateA
    };
    let b_op = if b > 0 {
        Op::RotateB
    } else {
        Op::ReverseRotateB
    };
    model.repeat(a_op, a.unsigned_abs());
    model.repeat(b_op, b.unsigned_abs());
    model.pa();
}

/// Empty B into A, cheapest element first.
pub fn insert_all(model: &mut StackModel) {
    while let Some(cost) = find_cheapest(model) {
        trace!(cost_a = cost.a, cost_b = cost.b, total = cost.total(), "insert");
        execute(model, cost);
    }
}
