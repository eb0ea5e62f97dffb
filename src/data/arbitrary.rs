//! Implementations of
//! [`Arbitrary`](https://docs.rs/arbitrary/latest/arbitrary/trait.Arbitrary.html)
//! for the inputs of a motif search, for use in fuzz targets.
//!
//! <div class="warning note">
//!
//! **Note**
//!
//! You must enable the *fuzzing* feature in your `Cargo.toml` to use these
//! functions.
//!
//! </div>

use crate::{data::SequenceSet, motif::PositionVector};
use arbitrary::{Arbitrary, Result, Unstructured};

/// Upper limit on the number of sequences, keeping exhaustive searches over
/// arbitrary sets tractable.
const MAX_SEQUENCES: usize = 5;
/// Upper limit on the length of each sequence.
const MAX_LENGTH: usize = 16;

impl<'a> Arbitrary<'a> for SequenceSet {
    /// Generates a valid set of canonical uppercase DNA.
    fn arbitrary(u: &mut Unstructured<'a>) -> Result<Self> {
        let n = u.int_in_range(1..=MAX_SEQUENCES)?;
        let mut sequences = Vec::with_capacity(n);
        for _ in 0..n {
            let len = u.int_in_range(1..=MAX_LENGTH)?;
            let seq = (0..len).map(|_| u.choose(b"ACGT").copied()).collect::<Result<Vec<u8>>>()?;
            sequences.push(seq);
        }

        let shortest = sequences.iter().map(Vec::len).min().unwrap_or(1);
        let motif_size = u.int_in_range(1..=shortest)?;

        Ok(SequenceSet { sequences, motif_size })
    }
}

impl<'a> Arbitrary<'a> for PositionVector {
    fn arbitrary(u: &mut Unstructured<'a>) -> Result<Self> {
        u.arbitrary().map(PositionVector)
    }
}

impl PositionVector {
    /// Generates a vector that is valid for `set`.
    ///
    /// ## Errors
    ///
    /// Fails if `u` runs out of data.
    pub fn arbitrary_for(u: &mut Unstructured<'_>, set: &SequenceSet) -> Result<Self> {
        (0..set.len())
            .map(|i| u.int_in_range(0..=set.max_offset(i)))
            .collect::<Result<Vec<usize>>>()
            .map(PositionVector)
    }
}
