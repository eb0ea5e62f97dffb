//! Consensus motif search.
//!
//! An alignment of a [`SequenceSet`] is a [`PositionVector`] holding one
//! window start per sequence. Its [`ProfileMatrix`] counts the symbols in
//! each motif column, and its consensus [`score`] sums the largest count of
//! every column. Two searches maximise that score:
//!
//! * [`exhaustive_search`] walks every alignment with a
//!   [`PositionOdometer`] and returns the global optimum.
//! * [`heuristic_consensus`] fixes offsets one sequence at a time and returns
//!   a feasible, usually good, alignment in linear time.
//!
//! Both resolve ties in favour of the alignment visited first.
//!
//! [`SequenceSet`]: crate::data::SequenceSet

mod errors;
mod exhaustive;
mod finder;
mod heuristic;
mod position;
mod profile;
mod score;

#[cfg(test)]
mod test;

pub use errors::*;
pub use exhaustive::*;
pub use finder::*;
pub use heuristic::*;
pub use position::*;
pub use profile::*;
pub use score::*;
