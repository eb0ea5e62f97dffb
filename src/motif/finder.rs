use crate::{
    data::{
        alphabet::{Alphabet, DNA_ALPHABET},
        sequence_set::SequenceSet,
    },
    motif::{MotifError, PositionVector, ProfileMatrix, build_profile, exhaustive_search, heuristic_consensus, score_vector},
};
use std::{fmt, str::FromStr};

/// Which search to run in [`MotifFinder::search`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SearchStrategy {
    /// Score every alignment; always optimal
    #[default]
    Exhaustive,
    /// Greedy extension from the best pair of the first two sequences
    HeuristicConsensus,
}

impl FromStr for SearchStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "exhaustive" | "brute-force" => Ok(SearchStrategy::Exhaustive),
            "heuristic" | "heuristic-consensus" | "greedy" => Ok(SearchStrategy::HeuristicConsensus),
            _ => Err(format!("Unknown search strategy: {s}")),
        }
    }
}

impl fmt::Display for SearchStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchStrategy::Exhaustive => f.write_str("exhaustive"),
            SearchStrategy::HeuristicConsensus => f.write_str("heuristic-consensus"),
        }
    }
}

/// A [`SequenceSet`] bound to the [`Alphabet`] it is searched with.
///
/// ## Type Parameters
/// * `S` - The size of the alphabet
#[derive(Debug, Clone)]
pub struct MotifFinder<'a, const S: usize> {
    set:      &'a SequenceSet,
    alphabet: &'a Alphabet<S>,
}

impl<'a, const S: usize> MotifFinder<'a, S> {
    #[must_use]
    pub fn new(set: &'a SequenceSet, alphabet: &'a Alphabet<S>) -> Self {
        MotifFinder { set, alphabet }
    }

    #[inline]
    #[must_use]
    pub fn sequences(&self) -> &'a SequenceSet {
        self.set
    }

    #[inline]
    #[must_use]
    pub fn alphabet(&self) -> &'a Alphabet<S> {
        self.alphabet
    }

    /// See [`build_profile`].
    ///
    /// ## Errors
    ///
    /// Any error from [`build_profile`].
    #[inline]
    pub fn profile(&self, positions: &[usize]) -> Result<ProfileMatrix<S>, MotifError> {
        build_profile(self.set, self.alphabet, positions)
    }

    /// See [`score_vector`].
    ///
    /// ## Errors
    ///
    /// Any error from [`build_profile`].
    #[inline]
    pub fn score(&self, positions: &[usize]) -> Result<usize, MotifError> {
        score_vector(self.set, self.alphabet, positions)
    }

    /// The consensus motif of the alignment given by `positions`.
    ///
    /// ## Errors
    ///
    /// Any error from [`build_profile`].
    pub fn consensus(&self, positions: &[usize]) -> Result<Vec<u8>, MotifError> {
        self.profile(positions).map(|p| p.consensus(self.alphabet))
    }

    /// See [`exhaustive_search`].
    ///
    /// ## Errors
    ///
    /// Any error from [`exhaustive_search`].
    #[inline]
    pub fn exhaustive_search(&self) -> Result<(PositionVector, usize), MotifError> {
        exhaustive_search(self.set, self.alphabet)
    }

    /// See [`heuristic_consensus`].
    ///
    /// ## Errors
    ///
    /// Any error from [`heuristic_consensus`].
    #[inline]
    pub fn heuristic_consensus(&self) -> Result<(PositionVector, usize), MotifError> {
        heuristic_consensus(self.set, self.alphabet)
    }

    /// Run the search selected by `strategy`.
    ///
    /// ## Errors
    ///
    /// Any error from the chosen search.
    pub fn search(&self, strategy: SearchStrategy) -> Result<(PositionVector, usize), MotifError> {
        match strategy {
            SearchStrategy::Exhaustive => self.exhaustive_search(),
            SearchStrategy::HeuristicConsensus => self.heuristic_consensus(),
        }
    }
}

/// Exhaustively search DNA `sequences` for the best-conserved window of length
/// `motif_size`, using the case-sensitive [`DNA_ALPHABET`].
///
/// ## Errors
///
/// * [`MotifError::InsufficientInput`] if `sequences` is empty
/// * [`MotifError::InvalidMotifSize`] if `motif_size` is zero or longer than
///   the shortest sequence
/// * [`MotifError::InvalidSymbol`] if a sequence contains a byte other than
///   `A`, `C`, `G`, or `T`
pub fn exhaustive_search_dna<I, Q>(sequences: I, motif_size: usize) -> Result<(PositionVector, usize), MotifError>
where
    I: IntoIterator<Item = Q>,
    Q: AsRef<[u8]>, {
    let set = SequenceSet::new(sequences, motif_size)?;
    exhaustive_search(&set, &DNA_ALPHABET)
}

/// Greedily search DNA `sequences` for a well-conserved window of length
/// `motif_size`, using the case-sensitive [`DNA_ALPHABET`].
///
/// ## Errors
///
/// * [`MotifError::InsufficientInput`] if fewer than two sequences are given
/// * [`MotifError::InvalidMotifSize`] if `motif_size` is zero or longer than
///   the shortest sequence
/// * [`MotifError::InvalidSymbol`] if a sequence contains a byte other than
///   `A`, `C`, `G`, or `T`
pub fn heuristic_consensus_dna<I, Q>(sequences: I, motif_size: usize) -> Result<(PositionVector, usize), MotifError>
where
    I: IntoIterator<Item = Q>,
    Q: AsRef<[u8]>, {
    let set = SequenceSet::new(sequences, motif_size)?;
    heuristic_consensus(&set, &DNA_ALPHABET)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::data::alphabet::NUCLEOTIDE_ALPHABET;

    #[test]
    fn strategy_parsing() {
        assert_eq!("Exhaustive".parse::<SearchStrategy>(), Ok(SearchStrategy::Exhaustive));
        assert_eq!("greedy".parse::<SearchStrategy>(), Ok(SearchStrategy::HeuristicConsensus));
        assert!("median".parse::<SearchStrategy>().is_err());
        assert_eq!(
            SearchStrategy::HeuristicConsensus.to_string().parse::<SearchStrategy>(),
            Ok(SearchStrategy::HeuristicConsensus)
        );
    }

    #[test]
    fn finder_dispatch() {
        let set = SequenceSet::new(["ttTACGTA", "ACGUAttt", "ggACGTAG"], 5).unwrap();
        let finder = MotifFinder::new(&set, &NUCLEOTIDE_ALPHABET);

        let (best, sc) = finder.search(SearchStrategy::Exhaustive).unwrap();
        assert_eq!(sc, 15);
        assert_eq!(finder.consensus(&best).unwrap(), b"ACGTA");
        assert_eq!(finder.score(&best), Ok(sc));
        assert_eq!(finder.search(SearchStrategy::HeuristicConsensus).unwrap().1, 15);

        assert!(exhaustive_search_dna(set.iter(), 5).is_err());
    }

    #[test]
    fn entry_point_errors() {
        assert_eq!(
            heuristic_consensus_dna(["ACGT"], 2),
            Err(MotifError::InsufficientInput { required: 2, found: 1 })
        );
        assert!(matches!(
            exhaustive_search_dna(["ACGT", "AC"], 3),
            Err(MotifError::InvalidMotifSize { .. })
        ));
    }
}
