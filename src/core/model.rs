//! The two-stack machine the engine drives.
//!
//! [`StackModel`] owns stacks A and B and the operation log. Every primitive
//! mutates exactly the stacks it names and appends exactly one log entry.

use super::log::OperationLog;
use super::op::Op;
use super::ring::Ring;

/// Stacks A and B plus the log of everything done to them.
///
/// Primitives do not check preconditions beyond what keeps the rings
/// consistent: a push from an empty stack, or a swap or rotation of a stack
/// with fewer than two elements, leaves the stacks unchanged. The engine never
/// relies on that; it exists so arbitrary logs can be replayed.
///
/// # Example
///
/// ```rust
/// use stacksort::core::{Op, StackModel};
///
/// let mut model = StackModel::new(&[2, 1, 3]);
/// model.sa();
/// assert!(model.is_sorted());
/// assert_eq!(model.log().ops(), &[Op::SwapA]);
/// ```
#[derive(Clone, Debug)]
pub struct StackModel {
    a: Ring,
    b: Ring,
    log: OperationLog,
}

impl StackModel {
    /// Create a model with `ranks` in A (first element on top) and B empty.
    pub fn new(ranks: &[u32]) -> Self {
        let capacity = ranks.len();
        Self {
            a: Ring::from_slice(ranks, capacity),
            b: Ring::with_capacity(capacity),
            log: OperationLog::new(),
        }
    }

    /// Run `ops` against a fresh model holding `ranks`.
    ///
    /// The returned model's log is exactly `ops`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use stacksort::core::{Op, StackModel};
    ///
    /// let model = StackModel::replay(&[3, 1, 2], [Op::RotateA]);
    /// assert_eq!(model.a().to_vec(), vec![1, 2, 3]);
    /// ```
    pub fn replay<I>(ranks: &[u32], ops: I) -> Self
    where
        I: IntoIterator<Item = Op>,
    {
        let mut model = Self::new(ranks);
        for op in ops {
            model.apply(op);
        }
        model
    }

    pub fn a(&self) -> &Ring {
        &self.a
    }

    pub fn b(&self) -> &Ring {
        &self.b
    }

    pub fn log(&self) -> &OperationLog {
        &self.log
    }

    /// Consume the model, keeping only its log.
    pub fn into_log(self) -> OperationLog {
        self.log
    }

    /// B is empty and A reads ascending from top to bottom.
    pub fn is_sorted(&self) -> bool {
        self.b.is_empty() && self.a.iter().zip(self.a.iter().skip(1)).all(|(x, y)| x < y)
    }

    /// Execute `op` and record it.
    pub fn apply(&mut self, op: Op) {
        match op {
            Op::PushA => transfer(&mut self.b, &mut self.a),
            Op::PushB => transfer(&mut self.a, &mut self.b),
            Op::SwapA => self.a.swap_top(),
            Op::SwapB => self.b.swap_top(),
            Op::SwapBoth => {
                self.a.swap_top();
                self.b.swap_top();
            }
            Op::RotateA => self.a.rotate(),
            Op::RotateB => self.b.rotate(),
            Op::RotateBoth => {
                self.a.rotate();
                self.b.rotate();
            }
            Op::ReverseRotateA => self.a.reverse_rotate(),
            Op::ReverseRotateB => self.b.reverse_rotate(),
            Op::ReverseRotateBoth => {
                self.a.reverse_rotate();
                self.b.reverse_rotate();
            }
        }
        self.log.record(op);
    }

    /// Apply `op` `times` times.
    pub fn repeat(&mut self, op: Op, times: usize) {
        for _ in 0..times {
            self.apply(op);
        }
    }

    pub fn pa(&mut self) {
        self.apply(Op::PushA);
    }

    pub fn pb(&mut self) {
        self.apply(Op::PushB);
    }

    pub fn sa(&mut self) {
        self.apply(Op::SwapA);
    }

    pub fn sb(&mut self) {
        self.apply(Op::SwapB);
    }

    pub fn ss(&mut self) {
        self.apply(Op::SwapBoth);
    }

    pub fn ra(&mut self) {
        self.apply(Op::RotateA);
    }

    pub fn rb(&mut self) {
        self.apply(Op::RotateB);
    }

    pub fn rr(&mut self) {
        self.apply(Op::RotateBoth);
    }

    pub fn rra(&mut self) {
        self.apply(Op::ReverseRotateA);
    }

    pub fn rrb(&mut self) {
        self.apply(Op::ReverseRotateB);
    }

    pub fn rrr(&mut self) {
        self.apply(Op::ReverseRotateBoth);
    }
}

fn transfer(from: &mut Ring, to: &mut Ring) {
    if let Some(value) = from.pop_top() {
        let pushed = to.push_top(value);
        debug_assert!(pushed);
    }
}
