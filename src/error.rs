//! The crate's error type.
//!
//! Everything in here is a programming-contract violation on the caller's
//! side; nothing is transient and nothing is retried internally. Callers
//! that check `len()` before extracting never see `NotEnoughBits`.
use std::fmt;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the bit sequence types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// An argument outside its documented domain: a bit count outside
    /// `1..=width`, a divide count past the end of the sequence, an
    /// unparsable character in a bit pattern.
    InvalidArgument(String),

    /// The operation needs more bits than the sequence currently holds
    /// (e.g. dequeuing 8 bits from a 5-bit sequence).
    NotEnoughBits {
        /// how many bits the call asked for
        requested: usize,
        /// how many bits were actually there
        available: usize,
    },

    /// A narrowing conversion on data that exists but does not fit the
    /// target width (e.g. `to_u32` on a 40-bit sequence).
    Overflow {
        /// bits that would have to fit
        len: usize,
        /// bits the target can carry
        capacity: usize,
    },

    /// Indexed access outside `[0, len)`.
    IndexOutOfRange {
        /// the offending index
        index: usize,
        /// length of the sequence at the time of the call
        len: usize,
    },

    /// Unrecognized rendering format; only `"R"` and `"G"` exist.
    BadFormat(String),

    /// Pop on an empty [`WordQueue`](crate::word_queue::WordQueue).
    EmptyQueue,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidArgument(what) => write!(f, "invalid argument: {what}"),
            Error::NotEnoughBits {
                requested,
                available,
            } => write!(f, "requested {requested} bits, only {available} available"),
            Error::Overflow { len, capacity } => {
                write!(f, "{len} bits do not fit into {capacity}")
            }
            Error::IndexOutOfRange { index, len } => {
                write!(f, "index {index} out of range for length {len}")
            }
            Error::BadFormat(name) => write!(f, "unknown format {name:?} (expected \"R\" or \"G\")"),
            Error::EmptyQueue => write!(f, "dequeue from an empty queue"),
        }
    }
}

impl std::error::Error for Error {}
