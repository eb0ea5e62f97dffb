use super::*;
use crate::data::{DNA_ALPHABET, SequenceSet};

const REFERENCE: [&str; 4] = ["ATCGATCGA", "GCTCGATCG", "TATCGTATC", "CGATCGTCA"];

/// The best score over every vector, and the first vector reaching it.
fn brute_force(set: &SequenceSet) -> (PositionVector, usize) {
    let mut best: Option<(PositionVector, usize)> = None;
    for v in PositionOdometer::new(set) {
        let sc = score_vector(set, &DNA_ALPHABET, &v).unwrap();
        if best.as_ref().is_none_or(|(_, b)| sc > *b) {
            best = Some((v, sc));
        }
    }
    best.unwrap()
}

#[test]
fn reference_scenario() {
    let set = SequenceSet::new(REFERENCE, 6).unwrap();

    let exhaustive = exhaustive_search(&set, &DNA_ALPHABET).unwrap();
    assert_eq!(exhaustive, (PositionVector::from([2, 3, 3, 0]), 20));
    assert_eq!(exhaustive, exhaustive_search(&set, &DNA_ALPHABET).unwrap());

    let heuristic = heuristic_consensus(&set, &DNA_ALPHABET).unwrap();
    assert_eq!(heuristic, (PositionVector::from([1, 2, 2, 3]), 18));
    assert_eq!(heuristic, heuristic_consensus(&set, &DNA_ALPHABET).unwrap());

    assert!(heuristic.1 <= exhaustive.1);
    assert_eq!(exhaustive, brute_force(&set));
}

#[test]
fn root_entry_points() {
    assert_eq!(
        crate::exhaustive_search(REFERENCE, 6),
        Ok((PositionVector::from([2, 3, 3, 0]), 20))
    );
    assert_eq!(
        crate::heuristic_consensus(REFERENCE, 6),
        Ok((PositionVector::from([1, 2, 2, 3]), 18))
    );
}

#[test]
fn motif_fills_shortest_sequence() {
    let set = SequenceSet::new(["ACGTAC", "TTGA", "CAGTTA"], 4).unwrap();
    assert_eq!(set.bounds()[1], 0);

    let set = SequenceSet::new(["ACGT", "TTGA", "CAGT"], 4).unwrap();
    assert_eq!(set.search_space_size(), Some(1));
    assert_eq!(exhaustive_search(&set, &DNA_ALPHABET).unwrap().0, PositionVector::zeros(3));
    assert_eq!(heuristic_consensus(&set, &DNA_ALPHABET).unwrap().0, PositionVector::zeros(3));
}

#[test]
fn single_column_motif() {
    let set = SequenceSet::new(["ACGT", "CCAT", "GTCA"], 1).unwrap();
    assert_eq!(
        exhaustive_search(&set, &DNA_ALPHABET),
        Ok((PositionVector::from([0, 2, 3]), 3))
    );
    assert_eq!(
        heuristic_consensus(&set, &DNA_ALPHABET),
        Ok((PositionVector::from([0, 2, 3]), 3))
    );
}

#[test]
fn odometer_covers_sequence_set() {
    let set = SequenceSet::new(REFERENCE, 6).unwrap();
    let all: Vec<_> = PositionOdometer::new(&set).collect();
    assert_eq!(Some(all.len() as u128), set.search_space_size());
    assert!(all.iter().all(|v| v.is_valid_for(&set)));
    assert!(all.windows(2).all(|w| w[0] < w[1]));
}

#[cfg(feature = "rand")]
mod random {
    use super::*;
    use crate::generate::{rand_sequence, rand_sequences_with_motif};

    /// Small random sets of differing lengths.
    fn random_sets() -> impl Iterator<Item = SequenceSet> {
        (0..40u64).map(|seed| {
            let n = 2 + (seed % 3) as usize;
            let seqs: Vec<_> = (0..n as u64)
                .map(|i| rand_sequence(b"ACGT", 5 + ((seed + i) % 4) as usize, seed * 10 + i))
                .collect();
            SequenceSet::new(seqs, 2 + (seed % 3) as usize).unwrap()
        })
    }

    #[test]
    fn exhaustive_is_optimal() {
        for set in random_sets() {
            let (best, sc) = exhaustive_search(&set, &DNA_ALPHABET).unwrap();
            assert_eq!((best, sc), brute_force(&set));
        }
    }

    #[test]
    fn score_bounds() {
        for set in random_sets() {
            let max = set.len() * set.motif_size();
            for v in PositionOdometer::new(&set) {
                assert!(score_vector(&set, &DNA_ALPHABET, &v).unwrap() <= max);

                let profile = build_profile(&set, &DNA_ALPHABET, &v).unwrap();
                assert!(profile.columns().iter().all(|c| c.iter().sum::<usize>() == set.len()));
            }
        }
    }

    #[test]
    fn heuristic_is_feasible() {
        for set in random_sets() {
            let (positions, sc) = heuristic_consensus(&set, &DNA_ALPHABET).unwrap();
            let (_, best) = exhaustive_search(&set, &DNA_ALPHABET).unwrap();

            assert!(positions.is_valid_for(&set));
            assert!(sc <= best);
            assert_eq!(sc, score_vector(&set, &DNA_ALPHABET, &positions).unwrap());
            assert_eq!((positions, sc), heuristic_consensus(&set, &DNA_ALPHABET).unwrap());
        }
    }

    #[test]
    fn planted_motif_is_optimal() {
        let (seqs, _) = rand_sequences_with_motif(b"ACGT", 4, 12, b"GATTAC", 11);
        let set = SequenceSet::new(&seqs, 6).unwrap();

        let (best, sc) = exhaustive_search(&set, &DNA_ALPHABET).unwrap();
        assert_eq!(sc, 24);
        assert_eq!(build_profile(&set, &DNA_ALPHABET, &best).unwrap().consensus(&DNA_ALPHABET), b"GATTAC");
    }
}
