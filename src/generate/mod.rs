use crate::motif::PositionVector;
use rand_xoshiro::{
    Xoshiro256PlusPlus,
    rand_core::{RngCore, SeedableRng},
};

/// A random sequence of `length` bytes drawn uniformly from `alpha`.
///
/// ## Panics
/// `alpha` must not be empty.
#[must_use]
pub fn rand_sequence(alpha: &[u8], length: usize, seed: u64) -> Vec<u8> {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
    draw(&mut rng, alpha, length)
}

/// Generate `count` random sequences of `length` bytes from `alpha`, and
/// overwrite a window of each with `motif` at a random offset.
///
/// Returns the sequences and the offsets where the motif was planted, which
/// is an alignment scoring `count * motif.len()`, the maximum possible.
///
/// ## Panics
/// `alpha` must not be empty and `motif` must not be longer than `length`.
#[must_use]
pub fn rand_sequences_with_motif(
    alpha: &[u8], count: usize, length: usize, motif: &[u8], seed: u64,
) -> (Vec<Vec<u8>>, PositionVector) {
    assert!(motif.len() <= length, "The motif must fit inside each sequence.");
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
    let offsets = length - motif.len() + 1;

    let mut planted = Vec::with_capacity(count);
    let sequences = (0..count)
        .map(|_| {
            let mut seq = draw(&mut rng, alpha, length);
            let at = rng.next_u64() as usize % offsets;
            seq[at..at + motif.len()].copy_from_slice(motif);
            planted.push(at);
            seq
        })
        .collect();

    (sequences, PositionVector(planted))
}

fn draw(rng: &mut Xoshiro256PlusPlus, alpha: &[u8], length: usize) -> Vec<u8> {
    (0..length).map(|_| alpha[rng.next_u32() as usize % alpha.len()]).collect()
}
