use crate::data::sequence_set::SequenceSet;
use std::{
    fmt,
    ops::{Deref, DerefMut},
};

/// One candidate alignment: a start offset into each sequence, in sequence
/// order. A vector may cover only a prefix of a [`SequenceSet`], as the
/// greedy search scores partial alignments while it extends them.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct PositionVector(pub(crate) Vec<usize>);

impl PositionVector {
    /// The all-zero vector of length `n`, the first vector in odometer order.
    #[inline]
    #[must_use]
    pub fn zeros(n: usize) -> Self {
        PositionVector(vec![0; n])
    }

    #[inline]
    #[must_use]
    pub fn into_inner(self) -> Vec<usize> {
        self.0
    }

    /// Whether the vector has one offset per sequence of `set` and each
    /// window fits inside its sequence.
    #[must_use]
    pub fn is_valid_for(&self, set: &SequenceSet) -> bool {
        self.len() == set.len() && self.iter().enumerate().all(|(i, &p)| p <= set.max_offset(i))
    }
}

impl Deref for PositionVector {
    type Target = [usize];

    #[inline]
    fn deref(&self) -> &[usize] {
        &self.0
    }
}

impl DerefMut for PositionVector {
    #[inline]
    fn deref_mut(&mut self) -> &mut [usize] {
        &mut self.0
    }
}

impl From<Vec<usize>> for PositionVector {
    #[inline]
    fn from(v: Vec<usize>) -> Self {
        PositionVector(v)
    }
}

impl<const N: usize> From<[usize; N]> for PositionVector {
    #[inline]
    fn from(v: [usize; N]) -> Self {
        PositionVector(v.to_vec())
    }
}

impl fmt::Display for PositionVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut buff = itoa::Buffer::new();
        f.write_str("[")?;
        for (i, &p) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(buff.format(p))?;
        }
        f.write_str("]")
    }
}

/// Advance `positions` in place to the next vector in odometer order, where
/// digit `i` runs over `0..=bounds[i]`.
///
/// The rightmost digit below its bound is incremented and every digit after
/// it is reset to zero. Returns `false`, leaving `positions` untouched, when
/// every digit is already at its bound.
///
/// ## Panics
/// `bounds` must be at least as long as `positions`.
#[inline]
pub fn advance_position(positions: &mut [usize], bounds: &[usize]) -> bool {
    let Some(pos) = (0..positions.len()).rev().find(|&i| positions[i] < bounds[i]) else {
        return false;
    };

    positions[pos] += 1;
    positions[pos + 1..].fill(0);
    true
}

/// The vector following `current` in odometer order, or `None` once
/// `current` is the last one.
#[must_use]
pub fn next_position(current: &PositionVector, bounds: &[usize]) -> Option<PositionVector> {
    let mut next = current.clone();
    advance_position(&mut next, bounds).then_some(next)
}

/// An iterator over every valid [`PositionVector`] of a [`SequenceSet`],
/// starting at the all-zero vector and counting in mixed radix, where digit
/// `i` has radix `max_offset(i) + 1`.
///
/// Vectors are produced exactly once each, in strictly increasing
/// lexicographic order. There are
/// [`search_space_size`](SequenceSet::search_space_size) of them, which is
/// exponential in the number of sequences.
#[derive(Debug, Clone)]
pub struct PositionOdometer {
    bounds:  Vec<usize>,
    current: Option<PositionVector>,
}

impl PositionOdometer {
    #[must_use]
    pub fn new(set: &SequenceSet) -> Self {
        Self::from_bounds(set.bounds())
    }

    /// An odometer over arbitrary digit bounds (inclusive).
    #[must_use]
    pub fn from_bounds(bounds: Vec<usize>) -> Self {
        let current = Some(PositionVector::zeros(bounds.len()));
        PositionOdometer { bounds, current }
    }

    #[inline]
    #[must_use]
    pub fn bounds(&self) -> &[usize] {
        &self.bounds
    }
}

impl Iterator for PositionOdometer {
    type Item = PositionVector;

    fn next(&mut self) -> Option<Self::Item> {
        let out = self.current.take()?;
        self.current = next_position(&out, &self.bounds);
        Some(out)
    }
}

impl std::iter::FusedIterator for PositionOdometer {}
