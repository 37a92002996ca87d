//! Rotation cost model.
//!
//! Costs are signed rotation counts: positive means rotate (top to bottom),
//! negative means reverse-rotate. Two counts with the same sign can share
//! combined `rr`/`rrr` operations.

use crate::core::Ring;

/// Rotations needed on A and on B to line up one insertion.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CostPair {
    pub a: isize,
    pub b: isize,
}

impl CostPair {
    pub fn new(a: isize, b: isize) -> Self {
        Self { a, b }
    }

    /// Operations this pair costs, combined rotations included.
    pub fn total(&self) -> usize {
        op_cost(self.a, self.b)
    }

    /// Whether both sides rotate the same way and can share operations.
    pub fn is_aligned(&self) -> bool {
        same_direction(self.a, self.b)
    }
}

fn same_direction(a: isize, b: isize) -> bool {
    (a >= 0 && b >= 0) || (a <= 0 && b <= 0)
}

/// Number of primitive operations needed to rotate A by `a` and B by `b`.
///
/// Same-direction rotations overlap, so they cost the larger magnitude;
/// opposite directions cost the sum.
///
/// # Example
///
/// ```rust
/// use stacksort::engine::op_cost;
///
/// assert_eq!(op_cost(3, 5), 5);
/// assert_eq!(op_cost(-3, -5), 5);
/// assert_eq!(op_cost(3, -5), 8);
/// assert_eq!(op_cost(0, -5), 5);
/// ```
pub fn op_cost(a: isize, b: isize) -> usize {
    if same_direction(a, b) {
        a.unsigned_abs().max(b.unsigned_abs())
    } else {
        a.unsigned_abs() + b.unsigned_abs()
    }
}

/// Signed shortest rotation bringing position `index` of a stack of `len` to the top.
pub fn shortest_rotation(index: usize, len: usize) -> isize {
    if index <= len / 2 {
        index as isize
    } else {
        -((len - index) as isize)
    }
}

/// Signed rotation of A that exposes the slot where `value` belongs.
///
/// A must be cyclically sorted with its minimum at `min_position`. The
/// search treats A as if it were rotated to start at its minimum, without
/// touching the stack.
pub fn target_rotation(a: &Ring, min_position: usize, value: u32) -> isize {
    let len = a.len();
    if len == 0 {
        return 0;
    }

    let (mut lo, mut hi) = (0, len);
    while lo < hi {
        let mid = (lo + hi) / 2;
        let current = a.get((min_position + mid) % len).unwrap_or(u32::MAX);
        if current < value {
            lo = mid + 1;
        } else {
            hi = mid;
        }
    }

    shortest_rotation((lo + min_position) % len, len)
}
