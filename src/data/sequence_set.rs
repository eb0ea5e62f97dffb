use crate::{data::alphabet::Alphabet, motif::MotifError};
use std::ops::Index;

/// A set of sequences searched for a shared motif of length `motif_size`.
///
/// Construction guarantees at least one sequence and
/// `1 <= motif_size <= shortest sequence length`, so every sequence has at
/// least one valid window. The set is immutable afterwards. Symbols are not
/// checked until a profile is built; see
/// [`validate_symbols`](SequenceSet::validate_symbols) for eager checking.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SequenceSet {
    pub(crate) sequences:  Vec<Vec<u8>>,
    pub(crate) motif_size: usize,
}

impl SequenceSet {
    /// Create a new [`SequenceSet`].
    ///
    /// ## Errors
    ///
    /// * [`MotifError::InsufficientInput`] if `sequences` is empty
    /// * [`MotifError::InvalidMotifSize`] if `motif_size` is zero or longer
    ///   than the shortest sequence
    pub fn new<I, Q>(sequences: I, motif_size: usize) -> Result<Self, MotifError>
    where
        I: IntoIterator<Item = Q>,
        Q: AsRef<[u8]>, {
        let sequences: Vec<Vec<u8>> = sequences.into_iter().map(|s| s.as_ref().to_vec()).collect();

        let Some(shortest) = sequences.iter().map(Vec::len).min() else {
            return Err(MotifError::InsufficientInput { required: 1, found: 0 });
        };

        if motif_size == 0 || motif_size > shortest {
            return Err(MotifError::InvalidMotifSize { motif_size, shortest });
        }

        Ok(SequenceSet { sequences, motif_size })
    }

    /// The number of sequences.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.sequences.len()
    }

    /// Always `false` for a constructed set; provided for API completeness.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sequences.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn motif_size(&self) -> usize {
        self.motif_size
    }

    #[inline]
    #[must_use]
    pub fn get(&self, i: usize) -> Option<&[u8]> {
        self.sequences.get(i).map(Vec::as_slice)
    }

    #[inline]
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &[u8]> {
        self.sequences.iter().map(Vec::as_slice)
    }

    /// Length of sequence `i`.
    ///
    /// ## Panics
    /// `i` must be less than [`len`](SequenceSet::len).
    #[inline]
    #[must_use]
    pub fn seq_size(&self, i: usize) -> usize {
        self.sequences[i].len()
    }

    /// The largest valid start offset for sequence `i`, i.e.
    /// `seq_size(i) - motif_size`.
    ///
    /// ## Panics
    /// `i` must be less than [`len`](SequenceSet::len).
    #[inline]
    #[must_use]
    pub fn max_offset(&self, i: usize) -> usize {
        self.seq_size(i) - self.motif_size
    }

    /// The largest valid start offset of every sequence, in order. These are
    /// the digit bounds of [`PositionOdometer`].
    ///
    /// [`PositionOdometer`]: crate::motif::PositionOdometer
    #[must_use]
    pub fn bounds(&self) -> Vec<usize> {
        (0..self.len()).map(|i| self.max_offset(i)).collect()
    }

    /// The number of distinct position vectors, `∏(max_offset(i) + 1)`, or
    /// `None` if it does not fit in a `u128`. Exhaustive search scores every
    /// one of them, so its cost grows exponentially with the number of
    /// sequences.
    #[must_use]
    pub fn search_space_size(&self) -> Option<u128> {
        self.bounds()
            .into_iter()
            .try_fold(1u128, |acc, b| acc.checked_mul(b as u128 + 1))
    }

    /// The window of sequence `i` starting at `offset`.
    ///
    /// ## Errors
    ///
    /// [`MotifError::OutOfRange`] if the window does not fit inside the
    /// sequence. A missing sequence is reported the same way with `seq_len`
    /// zero.
    #[inline]
    pub fn window(&self, i: usize, offset: usize) -> Result<&[u8], MotifError> {
        let seq = self.get(i).unwrap_or_default();
        offset
            .checked_add(self.motif_size)
            .and_then(|end| seq.get(offset..end))
            .ok_or(MotifError::OutOfRange {
                sequence:   i,
                offset,
                motif_size: self.motif_size,
                seq_len:    seq.len(),
            })
    }

    /// Check every byte of every sequence against `alphabet`.
    ///
    /// ## Errors
    ///
    /// [`MotifError::InvalidSymbol`] for the first offending byte.
    pub fn validate_symbols<const S: usize>(&self, alphabet: &Alphabet<S>) -> Result<(), MotifError> {
        for (sequence, seq) in self.iter().enumerate() {
            if let Some(position) = seq.iter().position(|&b| !alphabet.contains(b)) {
                return Err(MotifError::InvalidSymbol {
                    sequence,
                    position,
                    symbol: seq[position],
                });
            }
        }
        Ok(())
    }
}

impl Index<usize> for SequenceSet {
    type Output = [u8];

    #[inline]
    fn index(&self, index: usize) -> &[u8] {
        &self.sequences[index]
    }
}
