use crate::{
    data::{alphabet::Alphabet, sequence_set::SequenceSet},
    motif::{MotifError, ProfileMatrix, build_profile},
};

/// The consensus score of a profile: the sum over columns of the largest
/// symbol count in that column.
///
/// A fully conserved column contributes the number of sequences covered, so
/// the score lies in `0..=sequences_covered * n_columns`.
#[inline]
#[must_use]
pub fn score<const S: usize>(profile: &ProfileMatrix<S>) -> usize {
    sum_column_maxima(&profile.columns)
}

/// Build the profile for `positions` and score it.
///
/// ## Errors
///
/// Any error from [`build_profile`].
#[inline]
pub fn score_vector<const S: usize>(
    set: &SequenceSet, alphabet: &Alphabet<S>, positions: &[usize],
) -> Result<usize, MotifError> {
    build_profile(set, alphabet, positions).map(|p| score(&p))
}

#[must_use]
#[cfg_attr(feature = "multiversion", multiversion::multiversion(targets = "simd"))]
fn sum_column_maxima<const S: usize>(columns: &[[usize; S]]) -> usize {
    columns.iter().map(|c| c.iter().copied().max().unwrap_or(0)).sum()
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::data::alphabet::DNA_ALPHABET;

    #[test]
    fn column_maxima_sum() {
        let profile = ProfileMatrix::<4> {
            columns: vec![[2, 1, 0, 0], [1, 1, 1, 0], [0, 0, 0, 3]],
            covered: 3,
        };
        assert_eq!(score(&profile), 2 + 1 + 3);
        assert_eq!(score(&ProfileMatrix::<4>::new(5)), 0);
    }

    #[test]
    fn conserved_and_divergent() {
        let set = SequenceSet::new(["ACGTAC", "ACGTCA", "TTACGT", "ACGAAA"], 4).unwrap();

        assert_eq!(score_vector(&set, &DNA_ALPHABET, &[0, 0, 2]).unwrap(), 12);
        assert_eq!(score_vector(&set, &DNA_ALPHABET, &[0, 0, 2, 0]).unwrap(), 15);
        assert_eq!(score_vector(&set, &DNA_ALPHABET, &[0]).unwrap(), 4);
        assert!(score_vector(&set, &DNA_ALPHABET, &[3]).is_err());
    }
}
