use std::{fmt, io};

/// Errors surfaced by coding sessions and the models driving them.
///
/// None of these are recoverable mid-stream: a failed session must be
/// discarded, the coder does not resynchronize.
#[derive(Debug)]
pub enum Error {
    /// The decoder needed a byte past the end of its input. The stream is
    /// truncated or corrupted.
    OutOfData,
    /// A symbol handed to a bit-tree doesn't fit its alphabet.
    OutOfRange { value: u16, num_bits: u32 },
    /// A probability of exactly 0 or `PROB_MAX` makes one of the two
    /// outcomes uncodeable.
    InvalidProbability(u16),
    /// The underlying reader or writer failed.
    Io(io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfData => write!(f, "input ended mid-stream"),
            Self::OutOfRange { value, num_bits } => {
                write!(f, "symbol {value} doesn't fit in {num_bits} bits")
            }
            Self::InvalidProbability(p) => {
                write!(f, "probability {p} makes one outcome uncodeable")
            }
            Self::Io(err) => write!(f, "io error: {err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}
