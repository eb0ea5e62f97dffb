/// Sentinel stored in the lookup table for bytes outside the alphabet.
const NOT_IN_ALPHABET: u8 = u8::MAX;

/// An ordered, fixed-size set of symbols together with a lookup table mapping
/// every byte to its dense index within the alphabet. The ordering determines
/// the row order of a [`ProfileMatrix`] and the tie-break order of
/// [`ProfileMatrix::consensus`].
///
/// ## Type Parameters
/// * `S` - The number of symbols (4 for [`DNA_ALPHABET`])
///
/// [`ProfileMatrix`]: crate::motif::ProfileMatrix
/// [`ProfileMatrix::consensus`]: crate::motif::ProfileMatrix::consensus
#[derive(Debug, PartialEq, Eq, Clone, Hash)]
pub struct Alphabet<const S: usize> {
    pub(crate) index_map: [u8; 256],
    pub(crate) symbols:   [u8; S],
}

/// The canonical DNA alphabet, `ACGT`, matched case sensitively.
pub const DNA_ALPHABET: Alphabet<4> = Alphabet::new(*b"ACGT");

/// Nucleotides `ACGT` in either case, with `U` treated as `T`.
pub const NUCLEOTIDE_ALPHABET: Alphabet<4> = Alphabet::new_ignoring_case(*b"ACGT").add_synonym_ignoring_case(b'U', b'T');

impl<const S: usize> Alphabet<S> {
    /// Create a new [`Alphabet`] from `symbols`, matched case sensitively. Any
    /// byte not listed is rejected by [`to_index`](Alphabet::to_index).
    ///
    /// ## Panics
    /// `symbols` must not be empty, must not contain duplicates, and may hold
    /// at most 255 entries.
    #[allow(clippy::cast_possible_truncation)]
    #[must_use]
    pub const fn new(symbols: [u8; S]) -> Self {
        assert!(S > 0, "An alphabet needs at least one symbol.");
        assert!(S < NOT_IN_ALPHABET as usize, "An alphabet may hold at most 255 symbols.");
        assert!(all_unique(&symbols), "Alphabet symbols must be unique.");

        let mut out = Alphabet {
            index_map: [NOT_IN_ALPHABET; 256],
            symbols,
        };

        let mut i = 0;
        while i < S {
            out.index_map[symbols[i] as usize] = i as u8;
            i += 1;
        }
        out
    }

    /// Create a new [`Alphabet`] where both cases of each symbol map to the
    /// same index. The stored symbols are uppercase.
    ///
    /// ## Panics
    /// The uppercased `symbols` must not be empty, must not contain
    /// duplicates, and may hold at most 255 entries.
    #[allow(clippy::cast_possible_truncation)]
    #[must_use]
    pub const fn new_ignoring_case(symbols: [u8; S]) -> Self {
        let symbols = uppercased(symbols);
        let mut out = Self::new(symbols);

        let mut i = 0;
        while i < S {
            out.index_map[symbols[i].to_ascii_lowercase() as usize] = i as u8;
            i += 1;
        }
        out
    }

    /// Make `new_key` an alias of the already present `existing` symbol.
    ///
    /// ## Panics
    /// `existing` must be part of the alphabet.
    #[must_use]
    pub const fn add_synonym(mut self, new_key: u8, existing: u8) -> Self {
        let index = self.index_map[existing as usize];
        assert!(index != NOT_IN_ALPHABET, "A synonym must refer to an existing symbol.");
        self.index_map[new_key as usize] = index;
        self
    }

    /// Same as [`add_synonym`](Alphabet::add_synonym) for both cases of
    /// `new_key`.
    ///
    /// ## Panics
    /// `existing` must be part of the alphabet.
    #[must_use]
    pub const fn add_synonym_ignoring_case(self, new_key: u8, existing: u8) -> Self {
        self.add_synonym(new_key.to_ascii_uppercase(), existing)
            .add_synonym(new_key.to_ascii_lowercase(), existing)
    }

    /// The number of symbols.
    #[inline]
    #[must_use]
    #[allow(clippy::len_without_is_empty)]
    pub const fn len(&self) -> usize {
        S
    }

    #[inline]
    #[must_use]
    pub const fn symbols(&self) -> &[u8; S] {
        &self.symbols
    }

    /// The dense index of byte `b`, or `None` if it is not in the alphabet.
    #[inline]
    #[must_use]
    pub const fn to_index(&self, b: u8) -> Option<usize> {
        match self.index_map[b as usize] {
            NOT_IN_ALPHABET => None,
            i => Some(i as usize),
        }
    }

    #[inline]
    #[must_use]
    pub const fn contains(&self, b: u8) -> bool {
        self.index_map[b as usize] != NOT_IN_ALPHABET
    }

    /// The symbol stored at `index`, if any.
    #[inline]
    #[must_use]
    pub fn symbol(&self, index: usize) -> Option<u8> {
        self.symbols.get(index).copied()
    }
}

const fn uppercased<const N: usize>(mut a: [u8; N]) -> [u8; N] {
    let mut i = 0;
    while i < N {
        a[i] = a[i].to_ascii_uppercase();
        i += 1;
    }
    a
}

const fn all_unique<const N: usize>(a: &[u8; N]) -> bool {
    let mut i = 0;
    while i < N {
        let mut j = i + 1;
        while j < N {
            if a[i] == a[j] {
                return false;
            }
            j += 1;
        }
        i += 1;
    }
    true
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn dna_is_case_sensitive() {
        assert_eq!(DNA_ALPHABET.to_index(b'A'), Some(0));
        assert_eq!(DNA_ALPHABET.to_index(b'T'), Some(3));
        assert_eq!(DNA_ALPHABET.to_index(b'a'), None);
        assert_eq!(DNA_ALPHABET.to_index(b'N'), None);
    }

    #[test]
    fn nucleotides_ignore_case_and_accept_u() {
        assert_eq!(NUCLEOTIDE_ALPHABET.to_index(b'g'), Some(2));
        assert_eq!(NUCLEOTIDE_ALPHABET.to_index(b'u'), Some(3));
        assert_eq!(NUCLEOTIDE_ALPHABET.to_index(b'U'), Some(3));
        assert_eq!(NUCLEOTIDE_ALPHABET.symbols(), b"ACGT");
        assert!(!NUCLEOTIDE_ALPHABET.contains(b'-'));
    }

    #[test]
    fn other_alphabets() {
        const BINARY: Alphabet<2> = Alphabet::new(*b"01");
        assert_eq!(BINARY.len(), 2);
        assert_eq!(BINARY.to_index(b'1'), Some(1));
        assert_eq!(BINARY.symbol(0), Some(b'0'));
        assert_eq!(BINARY.symbol(2), None);
    }

    #[test]
    #[should_panic(expected = "unique")]
    fn duplicates_rejected() {
        let _ = Alphabet::new(*b"ACGA");
    }

    #[test]
    #[should_panic(expected = "at least one symbol")]
    fn empty_rejected() {
        let _ = Alphabet::<0>::new([]);
    }

    #[test]
    fn uniqueness() {
        assert!(all_unique(b"ACGT"));
        assert!(!all_unique(b"ACGTA"));
    }
}
