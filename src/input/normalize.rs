//! Dense rank normalization.
//!
//! The engine works on ranks `1..=N` rather than raw values. Ranking keeps
//! relative order, so a log computed on ranks sorts the raw values too.

use super::error::InputError;

/// Order-preserving bijection between distinct `i32` values and `1..=N`.
///
/// # Example
///
/// ```rust
/// use stacksort::input::Ranks;
///
/// let ranks = Ranks::from_values(&[40, -7, 12]).unwrap();
/// assert_eq!(ranks.ranks(), &[3, 1, 2]);
/// assert_eq!(ranks.value_of(1), Some(-7));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ranks {
    ranks: Vec<u32>,
    sorted: Vec<i32>,
}

impl Ranks {
    /// Rank `values`, failing on the smallest value that occurs twice.
    pub fn from_values(values: &[i32]) -> Result<Self, InputError> {
        let mut sorted = values.to_vec();
        sorted.sort_unstable();

        if let Some(value) = duplicate_values(&sorted).first() {
            return Err(InputError::Duplicate { value: *value });
        }

        let ranks = values
            .iter()
            .map(|v| match sorted.binary_search(v) {
                Ok(index) | Err(index) => index as u32 + 1,
            })
            .collect();

        Ok(Self { ranks, sorted })
    }

    /// Rank of each input value, in input order.
    pub fn ranks(&self) -> &[u32] {
        &self.ranks
    }

    /// Original value carrying `rank`.
    pub fn value_of(&self, rank: u32) -> Option<i32> {
        let index = (rank as usize).checked_sub(1)?;
        self.sorted.get(index).copied()
    }

    /// Rank assigned to `value`, if it was part of the input.
    pub fn rank_of(&self, value: i32) -> Option<u32> {
        self.sorted
            .binary_search(&value)
            .ok()
            .map(|index| index as u32 + 1)
    }

    pub fn len(&self) -> usize {
        self.ranks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranks.is_empty()
    }
}

/// Each value that repeats in an already sorted slice, reported once.
pub(crate) fn duplicate_values(sorted: &[i32]) -> Vec<i32> {
    let mut duplicates: Vec<i32> = sorted
        .windows(2)
        .filter(|pair| pair[0] == pair[1])
        .map(|pair| pair[0])
        .collect();
    duplicates.dedup();
    duplicates
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranks_are_dense_and_order_preserving() {
        let ranks = Ranks::from_values(&[100, i32::MIN, 0, i32::MAX, -5]).unwrap();
        assert_eq!(ranks.ranks(), &[4, 1, 3, 5, 2]);
        assert_eq!(ranks.len(), 5);
    }

    #[test]
    fn value_of_inverts_rank() {
        let values = [9, 3, 7];
        let ranks = Ranks::from_values(&values).unwrap();
        for (value, rank) in values.iter().zip(ranks.ranks()) {
            assert_eq!(ranks.value_of(*rank), Some(*value));
            assert_eq!(ranks.rank_of(*value), Some(*rank));
        }
        assert_eq!(ranks.value_of(0), None);
        assert_eq!(ranks.value_of(4), None);
        assert_eq!(ranks.rank_of(8), None);
    }

    #[test]
    fn empty_input_normalizes_to_nothing() {
        let ranks = Ranks::from_values(&[]).unwrap();
        assert!(ranks.is_empty());
    }

    #[test]
    fn duplicate_value_is_rejected() {
        let result = Ranks::from_values(&[4, 2, 4, 1, 2]);
        assert_eq!(result, Err(InputError::Duplicate { value: 2 }));
    }

    #[test]
    fn duplicate_values_reports_each_value_once() {
        assert_eq!(duplicate_values(&[1, 1, 1, 2, 3, 3]), vec![1, 3]);
        assert!(duplicate_values(&[1, 2, 3]).is_empty());
        assert!(duplicate_values(&[]).is_empty());
    }
}
