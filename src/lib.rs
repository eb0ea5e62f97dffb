#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/README.md"))]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::wildcard_imports)]

/// Input sequences, alphabets, and error handling.
pub mod data;
/// Consensus scoring and motif search.
pub mod motif;

/// Generate random sequences and planted-motif instances.
#[cfg(feature = "rand")]
pub mod generate;

/// Exhaustive search over DNA sequences given as anything byte-like. See
/// [`motif::exhaustive_search`] for other alphabets.
pub use motif::exhaustive_search_dna as exhaustive_search;
/// Greedy consensus search over DNA sequences given as anything byte-like.
/// See [`motif::heuristic_consensus`] for other alphabets.
pub use motif::heuristic_consensus_dna as heuristic_consensus;

/// Common structures and traits re-exported
pub mod prelude {
    pub use crate::data::{Alphabet, DNA_ALPHABET, NUCLEOTIDE_ALPHABET, SequenceSet, err::OrFail};
    #[cfg(feature = "rand")]
    pub use crate::generate::{rand_sequence, rand_sequences_with_motif};
    pub use crate::motif::{
        MotifError, MotifFinder, PositionOdometer, PositionVector, ProfileMatrix, SearchStrategy, build_profile,
        exhaustive_search, heuristic_consensus, score, score_vector,
    };
}
