use crate::data::err::GetCode;
use std::{error::Error, fmt};

/// An enum representing the ways a motif search can fail. Every error is
/// fatal to the search call that produced it.
#[derive(Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum MotifError {
    /// A window starting at `offset` would read past the end of sequence
    /// `sequence`
    OutOfRange {
        sequence:   usize,
        offset:     usize,
        motif_size: usize,
        seq_len:    usize,
    },
    /// A window contained a byte outside the alphabet
    InvalidSymbol { sequence: usize, position: usize, symbol: u8 },
    /// Too few sequences were supplied for the requested operation
    InsufficientInput { required: usize, found: usize },
    /// The motif size was zero or exceeded the shortest sequence
    InvalidMotifSize { motif_size: usize, shortest: usize },
}

impl fmt::Display for MotifError {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MotifError::OutOfRange {
                sequence,
                offset,
                motif_size,
                seq_len,
            } => write!(
                f,
                "A motif of size {motif_size} at offset {offset} extends past the end of sequence {sequence} (length {seq_len})"
            ),
            MotifError::InvalidSymbol {
                sequence,
                position,
                symbol,
            } => write!(
                f,
                "Sequence {sequence} has the symbol {sym:?} at position {position}, which is not in the alphabet",
                sym = char::from(*symbol)
            ),
            MotifError::InsufficientInput { required, found } => {
                write!(f, "At least {required} sequence(s) are required but {found} were supplied")
            }
            MotifError::InvalidMotifSize { motif_size, shortest } => write!(
                f,
                "The motif size must be between 1 and the shortest sequence length ({shortest}), but was {motif_size}"
            ),
        }
    }
}

impl fmt::Debug for MotifError {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{self}")
    }
}

impl Error for MotifError {}

impl GetCode for MotifError {
    fn get_code(&self) -> i32 {
        match self {
            MotifError::InsufficientInput { .. } | MotifError::InvalidMotifSize { .. } => 2,
            MotifError::OutOfRange { .. } | MotifError::InvalidSymbol { .. } => 1,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn messages() {
        let e = MotifError::InvalidSymbol {
            sequence: 1,
            position: 4,
            symbol:   b'N',
        };
        assert_eq!(
            e.to_string(),
            "Sequence 1 has the symbol 'N' at position 4, which is not in the alphabet"
        );
        assert_eq!(format!("{e:?}"), e.to_string());

        let e = MotifError::InsufficientInput { required: 2, found: 1 };
        assert_eq!(e.get_code(), 2);
    }
}
