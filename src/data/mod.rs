//! ## Input sequences, alphabets, and error handling.
//!
//! A [`SequenceSet`] holds the sequences to be aligned together with the
//! motif size. It is validated once at construction: there must be at least
//! one sequence and every sequence must be at least `motif_size` long, so
//! each one has at least one window.
//!
//! An [`Alphabet`] maps bytes to dense row indices of a
//! [`ProfileMatrix`](crate::motif::ProfileMatrix) through a 256-entry lookup
//! table built at compile time. [`DNA_ALPHABET`] matches `ACGT` exactly,
//! while [`NUCLEOTIDE_ALPHABET`] also accepts lowercase bases and `U`. Other
//! alphabets only need a different symbol array:
//! ```
//! # use motif_search::prelude::*;
//! const BINARY: Alphabet<2> = Alphabet::new(*b"01");
//!
//! let set = SequenceSet::new(["0110100", "1101001"], 3).unwrap();
//! let (positions, score) = exhaustive_search(&set, &BINARY).unwrap();
//! assert_eq!(positions, PositionVector::from([1, 0]));
//! assert_eq!(score, 6);
//! ```
//!
//! ## Errors
//!
//! Every fallible operation returns a [`MotifError`](crate::motif::MotifError).
//! Symbols are only checked when a window is counted into a profile, so a
//! search fails with [`MotifError::InvalidSymbol`] as soon as it visits a
//! window containing a foreign byte. [`SequenceSet::validate_symbols`] checks
//! the whole set up front instead. Command line drivers can use
//! [`unwrap_or_die`] to exit with the code given by [`GetCode`].
//!
//! [`MotifError::InvalidSymbol`]: crate::motif::MotifError::InvalidSymbol
//! [`unwrap_or_die`]: err::OrFail::unwrap_or_die
//! [`GetCode`]: err::GetCode

#[cfg(feature = "fuzzing")]
pub mod arbitrary;
/// A module with error types and convenience traits for handling [`Result`].
pub mod err;

pub(crate) mod alphabet;
pub(crate) mod sequence_set;

pub use alphabet::{Alphabet, DNA_ALPHABET, NUCLEOTIDE_ALPHABET};
pub use sequence_set::SequenceSet;
