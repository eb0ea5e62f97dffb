use crate::{
    data::{alphabet::Alphabet, sequence_set::SequenceSet},
    motif::{MotifError, PositionVector, advance_position, score_vector},
};
use log::{debug, trace};

/// Find the globally best-scoring alignment by scoring every position vector
/// of `set` in odometer order.
///
/// Only a strictly greater score replaces the incumbent, so among equally
/// scoring vectors the lexicographically smallest is returned. The number of
/// vectors scored is [`SequenceSet::search_space_size`], exponential in the
/// number of sequences, so this is only practical for small inputs.
///
/// ## Errors
///
/// [`MotifError::InvalidSymbol`] if any window visited contains a byte
/// outside `alphabet`.
pub fn exhaustive_search<const S: usize>(
    set: &SequenceSet, alphabet: &Alphabet<S>,
) -> Result<(PositionVector, usize), MotifError> {
    debug!(
        "Exhaustive search over {} sequences, motif size {}, {:?} position vectors",
        set.len(),
        set.motif_size(),
        set.search_space_size()
    );

    let bounds = set.bounds();
    let mut current = PositionVector::zeros(set.len());
    let mut best = current.clone();
    let mut best_score = score_vector(set, alphabet, &current)?;

    while advance_position(&mut current, &bounds) {
        let sc = score_vector(set, alphabet, &current)?;
        if sc > best_score {
            trace!("New best score {sc} at {current}");
            best_score = sc;
            best.copy_from_slice(&current);
        }
    }

    debug!("Exhaustive search finished: {best} with score {best_score}");
    Ok((best, best_score))
}
