use arrayvec::ArrayVec;
use bitvec::prelude::*;

use crate::L_MAX;

/// An ordered partition of a target length into positive parts, e.g. `(1, 2, 1)` for `4`.
pub type Composition = ArrayVec<u8, { L_MAX as usize }>;

/// Enumerates every composition of `len` in ascending bitmap order.
///
/// A composition of `len` with `k` parts corresponds to a choice of `k - 1` cut points
/// among the `len - 1` positions between consecutive characters. Treating a `(len - 1)`-bit
/// integer as a bitmap of cut points yields exactly `2^(len - 1)` compositions: scanning bits
/// from the least significant, a set bit closes the current part and starts a new one, a clear
/// bit extends the current part by one, and a final implicit close emits the last part.
pub struct CompositionIter {
    len: u8,
    next: u32,
    end: u32,
}

impl CompositionIter {
    /// Creates an iterator over every composition of `len`.
    ///
    /// `len` must be in `[1, L_MAX]`.
    pub fn new(len: u8) -> Self {
        debug_assert!((1..=L_MAX).contains(&len));

        Self {
            len,
            next: 0,
            end: 1u32 << (len - 1),
        }
    }

    /// The number of compositions this iterator will yield, `2^(len - 1)`.
    pub fn count_for(len: u8) -> u64 {
        1u64 << (len - 1)
    }
}

impl Iterator for CompositionIter {
    type Item = Composition;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next == self.end {
            return None;
        }

        let bits = self.next.view_bits::<Lsb0>();
        let mut parts = Composition::new();
        let mut current: u8 = 1;

        for bit_idx in 0..(self.len - 1) {
            if bits[bit_idx as usize] {
                parts.push(current);
                current = 1;
            } else {
                current += 1;
            }
        }
        parts.push(current);

        self.next += 1;
        Some(parts)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.end - self.next) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for CompositionIter {}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::*;

    #[test]
    fn composition_count_matches_two_pow() {
        for len in 1..=L_MAX {
            assert_eq!(
                CompositionIter::count_for(len) as usize,
                CompositionIter::new(len).len()
            );
            assert_eq!(
                1u64 << (len - 1),
                CompositionIter::new(len).count() as u64
            );
        }
    }

    #[test]
    fn every_composition_sums_to_len() {
        for len in 1..=8 {
            for composition in CompositionIter::new(len) {
                assert_eq!(len as u32, composition.iter().map(|&p| p as u32).sum());
            }
        }
    }

    #[test]
    fn length_one_has_single_composition() {
        let compositions = CompositionIter::new(1).collect_vec();
        assert_eq!(vec![Composition::from_iter([1])], compositions);
    }

    #[test]
    fn length_three_enumerates_all_four_compositions() {
        let compositions = CompositionIter::new(3).collect_vec();

        let expected: Vec<Composition> = vec![
            Composition::from_iter([3]),
            Composition::from_iter([1, 2]),
            Composition::from_iter([2, 1]),
            Composition::from_iter([1, 1, 1]),
        ];

        assert_eq!(expected, compositions);
    }

    #[test]
    fn compositions_are_distinct() {
        for len in 1..=8 {
            let compositions = CompositionIter::new(len).collect_vec();
            let unique: std::collections::HashSet<_> = compositions.iter().cloned().collect();
            assert_eq!(compositions.len(), unique.len());
        }
    }
}
