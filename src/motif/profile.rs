use crate::{
    data::{alphabet::Alphabet, sequence_set::SequenceSet},
    motif::MotifError,
};

/// Symbol counts per motif column for one alignment.
///
/// Conceptually an `S × motif_size` table with rows in alphabet order; it is
/// stored column-major since scoring reduces over columns. Each column sums
/// to [`sequences_covered`](ProfileMatrix::sequences_covered).
///
/// ## Type Parameters
/// * `S` - The size of the alphabet
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProfileMatrix<const S: usize> {
    pub(crate) columns: Vec<[usize; S]>,
    pub(crate) covered: usize,
}

impl<const S: usize> ProfileMatrix<S> {
    /// An all-zero profile with `motif_size` columns.
    #[must_use]
    pub fn new(motif_size: usize) -> Self {
        ProfileMatrix {
            columns: vec![[0; S]; motif_size],
            covered: 0,
        }
    }

    /// Count the symbols of `window` into the matrix. `window` is expected to
    /// start at `offset` within sequence `sequence`; both are only used for
    /// reporting.
    ///
    /// ## Errors
    ///
    /// [`MotifError::InvalidSymbol`] if a byte is outside `alphabet`, with its
    /// position given relative to the start of the sequence. The matrix is
    /// left unchanged.
    ///
    /// ## Panics
    /// `window` must have exactly [`n_columns`](ProfileMatrix::n_columns)
    /// bytes.
    pub fn add_window(
        &mut self, window: &[u8], alphabet: &Alphabet<S>, sequence: usize, offset: usize,
    ) -> Result<(), MotifError> {
        assert_eq!(window.len(), self.columns.len(), "The window must match the motif size.");

        if let Some(j) = window.iter().position(|&b| !alphabet.contains(b)) {
            return Err(MotifError::InvalidSymbol {
                sequence,
                position: offset + j,
                symbol: window[j],
            });
        }

        for (column, &b) in self.columns.iter_mut().zip(window) {
            if let Some(k) = alphabet.to_index(b) {
                column[k] += 1;
            }
        }
        self.covered += 1;
        Ok(())
    }

    /// The count of symbol index `symbol` at column `column`.
    ///
    /// ## Panics
    /// Both indices must be in range.
    #[inline]
    #[must_use]
    pub fn get(&self, symbol: usize, column: usize) -> usize {
        self.columns[column][symbol]
    }

    #[inline]
    #[must_use]
    pub fn column(&self, column: usize) -> Option<&[usize; S]> {
        self.columns.get(column)
    }

    /// The counts of one symbol across all columns.
    ///
    /// ## Panics
    /// `symbol` must be less than `S`.
    #[must_use]
    pub fn row(&self, symbol: usize) -> Vec<usize> {
        self.columns.iter().map(|c| c[symbol]).collect()
    }

    #[inline]
    #[must_use]
    pub fn columns(&self) -> &[[usize; S]] {
        &self.columns
    }

    /// The motif length.
    #[inline]
    #[must_use]
    pub fn n_columns(&self) -> usize {
        self.columns.len()
    }

    /// How many windows have been counted.
    #[inline]
    #[must_use]
    pub fn sequences_covered(&self) -> usize {
        self.covered
    }

    /// The largest count in each column.
    #[must_use]
    pub fn column_maxima(&self) -> Vec<usize> {
        self.columns
            .iter()
            .map(|c| c.iter().copied().max().unwrap_or_default())
            .collect()
    }

    /// The consensus motif: the most frequent symbol of each column. Ties go
    /// to the symbol that comes first in `alphabet`.
    #[must_use]
    pub fn consensus(&self, alphabet: &Alphabet<S>) -> Vec<u8> {
        self.columns
            .iter()
            .map(|c| {
                let mut best = 0;
                for k in 1..S {
                    if c[k] > c[best] {
                        best = k;
                    }
                }
                alphabet.symbols()[best]
            })
            .collect()
    }
}

/// Build the profile of the windows selected by `positions`.
///
/// Offset `i` of `positions` selects the window of sequence `i`, so the
/// vector may cover only a prefix of `set`.
///
/// ## Errors
///
/// * [`MotifError::OutOfRange`] if a window extends past its sequence, or
///   `positions` is longer than `set`
/// * [`MotifError::InvalidSymbol`] if a window contains a byte outside
///   `alphabet`
pub fn build_profile<const S: usize>(
    set: &SequenceSet, alphabet: &Alphabet<S>, positions: &[usize],
) -> Result<ProfileMatrix<S>, MotifError> {
    let mut profile = ProfileMatrix::new(set.motif_size());
    for (i, &offset) in positions.iter().enumerate() {
        profile.add_window(set.window(i, offset)?, alphabet, i, offset)?;
    }
    Ok(profile)
}
