use crate::{
    data::{alphabet::Alphabet, sequence_set::SequenceSet},
    motif::{MotifError, PositionVector, score_vector},
};
use log::{debug, trace};

/// Find an alignment greedily.
///
/// The offsets of the first two sequences are chosen jointly by scoring every
/// pair. Each further sequence `k` is then added by trying every offset for it
/// while the offsets of sequences `0..k` stay fixed, scoring only the
/// `k + 1` sequences placed so far. Ties at every step go to the first
/// candidate in ascending offset order.
///
/// The returned score is the one computed for the winning candidate of the
/// final step. Since that step covers every sequence, it equals the score of
/// the returned vector. The number of scoring calls is linear in the number
/// of sequences beyond the first pair, and the result need not be optimal.
///
/// ## Errors
///
/// * [`MotifError::InsufficientInput`] if `set` has fewer than two sequences
/// * [`MotifError::InvalidSymbol`] if any window visited contains a byte
///   outside `alphabet`
pub fn heuristic_consensus<const S: usize>(
    set: &SequenceSet, alphabet: &Alphabet<S>,
) -> Result<(PositionVector, usize), MotifError> {
    if set.len() < 2 {
        return Err(MotifError::InsufficientInput {
            required: 2,
            found:    set.len(),
        });
    }

    debug!(
        "Heuristic consensus over {} sequences, motif size {}",
        set.len(),
        set.motif_size()
    );

    // Offsets placed so far, followed by the candidate being tried.
    let mut partial = PositionVector::zeros(set.len());
    let mut max_score = None;

    for i in 0..=set.max_offset(0) {
        for j in 0..=set.max_offset(1) {
            let candidate = [i, j];
            let sc = score_vector(set, alphabet, &candidate)?;
            if max_score.is_none_or(|m| sc > m) {
                max_score = Some(sc);
                partial[..2].copy_from_slice(&candidate);
            }
        }
    }
    trace!("Seed pair {:?} with score {max_score:?}", &partial[..2]);

    for k in 2..set.len() {
        let mut best_offset = 0;
        max_score = None;

        for i in 0..=set.max_offset(k) {
            partial[k] = i;
            let sc = score_vector(set, alphabet, &partial[..=k])?;
            if max_score.is_none_or(|m| sc > m) {
                max_score = Some(sc);
                best_offset = i;
            }
        }

        partial[k] = best_offset;
        trace!("Sequence {k} placed at offset {best_offset} with score {max_score:?}");
    }

    let max_score = max_score.unwrap_or_default();
    debug!("Heuristic consensus finished: {partial} with score {max_score}");
    Ok((partial, max_score))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{data::alphabet::DNA_ALPHABET, motif::exhaustive_search};

    #[test]
    fn needs_two_sequences() {
        let set = SequenceSet::new(["ACGTACGT"], 4).unwrap();
        assert_eq!(
            heuristic_consensus(&set, &DNA_ALPHABET),
            Err(MotifError::InsufficientInput { required: 2, found: 1 })
        );
    }

    #[test]
    fn two_sequences_match_exhaustive() {
        let set = SequenceSet::new(["GGTACCA", "TACCAGG"], 5).unwrap();
        let greedy = heuristic_consensus(&set, &DNA_ALPHABET).unwrap();
        assert_eq!(greedy, (PositionVector::from([2, 0]), 10));
        assert_eq!(greedy, exhaustive_search(&set, &DNA_ALPHABET).unwrap());
    }

    #[test]
    fn extends_one_sequence_at_a_time() {
        let set = SequenceSet::new(["TTTACGTA", "ACGTATTT", "GGACGTAG", "CACGTAAA"], 5).unwrap();
        let (positions, sc) = heuristic_consensus(&set, &DNA_ALPHABET).unwrap();
        assert_eq!(positions, PositionVector::from([3, 0, 2, 1]));
        assert_eq!(sc, 20);
    }

    #[test]
    fn reported_score_matches_final_vector() {
        let set = SequenceSet::new(["ATCGATCGA", "GCTCGATCG", "TATCGTATC", "CGATCGTCA"], 6).unwrap();
        let (positions, sc) = heuristic_consensus(&set, &DNA_ALPHABET).unwrap();
        assert!(positions.is_valid_for(&set));
        assert_eq!(sc, score_vector(&set, &DNA_ALPHABET, &positions).unwrap());
    }
}
