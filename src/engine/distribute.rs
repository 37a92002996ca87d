//! A→B distribution.
//!
//! Pushes everything but three elements from A to B, one rank range at a
//! time, so that B ends up loosely grouped by value. Within a range the
//! upper half is sunk to B's bottom, folded into the next A rotation as a
//! combined `rr` whenever possible.

use crate::config::EngineConfig;
use crate::core::StackModel;
use tracing::trace;

/// Elements left in A after distribution.
pub const RESIDUAL: usize = 3;

/// Pending "sink the value just pushed" between pushes.
#[derive(Debug, Default)]
struct Distributor {
    sink_pending: bool,
}

impl Distributor {
    /// Push ranks in `[lo, hi]` from A until A has shrunk to `target` elements.
    fn pass(&mut self, model: &mut StackModel, lo: u32, hi: u32, target: usize) {
        let mid = lo + (hi - lo) / 2;
        while model.a().len() > target {
            let Some(top) = model.a().top() else {
                break;
            };
            if (lo..=hi).contains(&top) {
                if self.sink_pending {
                    model.rb();
                    self.sink_pending = false;
                }
                model.pb();
                self.sink_pending = top > mid;
            } else if self.sink_pending {
                model.rr();
                self.sink_pending = false;
            } else {
                model.ra();
            }
        }
    }
}

/// Move all but [`RESIDUAL`] elements of A into B.
///
/// Chunk passes run first (none for small inputs), each ending once every
/// rank of its range has left A. A flush pass then covers whatever remains.
/// A sink still pending after the flush is dropped; the inserter does not
/// need it.
pub fn distribute(model: &mut StackModel, config: &EngineConfig) {
    let n = model.a().len() + model.b().len();
    if model.a().len() <= RESIDUAL {
        return;
    }

    let mut distributor = Distributor::default();
    for (lo, hi) in config.chunk_bounds(n) {
        let count = model.a().iter().filter(|v| (lo..=hi).contains(v)).count();
        let target = model.a().len().saturating_sub(count).max(RESIDUAL);
        trace!(lo, hi, target, "chunk pass");
        distributor.pass(model, lo, hi, target);
    }

    if model.a().len() > RESIDUAL {
        let lo = model.a().iter().min().unwrap_or(0);
        let hi = model.a().iter().max().unwrap_or(0);
        trace!(lo, hi, "flush pass");
        distributor.pass(model, lo, hi, RESIDUAL);
    }
}

/// Order the residual of A with at most one swap.
///
/// Two elements are swapped if descending. Three elements are swapped when
/// they are not already in cyclic ascending order, i.e. when the element
/// after the maximum (wrapping around) is not the minimum. Rotation is left
/// to later stages.
pub fn settle_residual(model: &mut StackModel) {
    let a = model.a().to_vec();
    match a.as_slice() {
        [first, second] if first > second => model.sa(),
        [_, _, _] => {
            let (max_at, _) = a
                .iter()
                .enumerate()
                .max_by_key(|&(_, v)| v)
                .unwrap_or((0, &0));
            let min = a.iter().copied().min().unwrap_or(0);
            if a[(max_at + 1) % 3] != min {
                model.sa();
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Op;

    fn is_cyclically_sorted(values: &[u32]) -> bool {
        let descents = (0..values.len())
            .filter(|&i| values[i] > values[(i + 1) % values.len()])
            .count();
        descents <= 1
    }

    #[test]
    fn distribute_leaves_three_in_a() {
        let ranks: Vec<u32> = (1..=50).rev().collect();
        let mut model = StackModel::new(&ranks);
        distribute(&mut model, &EngineConfig::default());

        assert_eq!(model.a().len(), RESIDUAL);
        assert_eq!(model.b().len(), 47);
    }

    #[test]
    fn distribute_ignores_tiny_inputs() {
        let mut model = StackModel::new(&[3, 1, 2]);
        distribute(&mut model, &EngineConfig::default());
        assert!(model.log().is_empty());
    }

    #[test]
    fn flush_sinks_upper_half_with_next_rotation() {
        let mut model = StackModel::new(&[5, 4, 2, 1, 3]);
        distribute(&mut model, &EngineConfig::default());

        assert_eq!(model.log().ops(), &[Op::PushB, Op::RotateB, Op::PushB]);
        assert_eq!(model.a().to_vec(), vec![2, 1, 3]);
        assert_eq!(model.b().to_vec(), vec![4, 5]);
    }

    #[test]
    fn pending_sink_folds_into_rotate_both() {
        let config = crate::config::EngineConfigBuilder::new()
            .chunk_fractions(vec![0.5])
            .chunk_threshold(0)
            .build()
            .unwrap();
        // First chunk is ranks 1..=4, mid 2: pushing 4 sets a sink, 7 is out of range.
        let mut model = StackModel::new(&[4, 7, 1, 2, 3, 5, 6, 8]);
        distribute(&mut model, &config);

        assert_eq!(&model.log().ops()[..2], &[Op::PushB, Op::RotateBoth]);
        assert_eq!(model.a().len(), RESIDUAL);
    }

    #[test]
    fn chunk_passes_push_lower_ranges_first() {
        let ranks: Vec<u32> = (1..=40).collect();
        let config = crate::config::EngineConfigBuilder::new()
            .chunk_fractions(vec![0.5])
            .build()
            .unwrap();
        let mut model = StackModel::new(&ranks);
        distribute(&mut model, &config);

        // After the 1..=20 pass, the flush only sees 21..=40.
        let pushed_first: Vec<u32> = model.b().iter().filter(|&v| v <= 20).collect();
        assert_eq!(pushed_first.len(), 20);
        assert_eq!(model.a().to_vec(), vec![38, 39, 40]);
    }

    #[test]
    fn settle_swaps_two_descending() {
        let mut model = StackModel::new(&[2, 1]);
        settle_residual(&mut model);
        assert_eq!(model.log().ops(), &[Op::SwapA]);

        let mut model = StackModel::new(&[1, 2]);
        settle_residual(&mut model);
        assert!(model.log().is_empty());
    }

    #[test]
    fn settle_leaves_every_triple_cyclically_sorted() {
        let triples = [
            [1, 2, 3],
            [1, 3, 2],
            [2, 1, 3],
            [2, 3, 1],
            [3, 1, 2],
            [3, 2, 1],
        ];
        for triple in triples {
            let mut model = StackModel::new(&triple);
            settle_residual(&mut model);
            assert!(model.log().len() <= 1);
            assert!(
                is_cyclically_sorted(&model.a().to_vec()),
                "{triple:?} -> {:?}",
                model.a().to_vec()
            );
        }
    }

    #[test]
    fn settle_skips_cyclically_sorted_triples() {
        for triple in [[1, 2, 3], [2, 3, 1], [3, 1, 2]] {
            let mut model = StackModel::new(&triple);
            settle_residual(&mut model);
            assert!(model.log().is_empty());
        }
    }
}
