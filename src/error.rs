use std::io;

use crate::buffer::BufferFull;

/// Errors that end a collection session.
///
/// Malformed lines never show up here: they are reported to the user and retried.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The input closed before a usable count was read.
    #[error("input closed before a count was read")]
    CountUnavailable,
    /// The input closed while slots were still waiting for a value.
    #[error("input closed after {filled} of {expected} numbers")]
    InputClosed { filled: usize, expected: usize },
    /// A buffer of the requested length could not be reserved.
    #[error("cannot allocate room for {len} numbers")]
    Allocation { len: u64 },
    #[error("sum does not fit in a 64-bit signed integer")]
    SumOverflow,
    #[error(transparent)]
    BufferFull(#[from] BufferFull),
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
}

impl Error {
    /// Process exit status for this error.
    ///
    /// A missing count gets its own status so callers can tell "nothing was
    /// collected" apart from everything else.
    pub fn exit_code(&self) -> u8 {
        match self {
            Error::CountUnavailable => 2,
            Error::InputClosed { .. } => 3,
            Error::Allocation { .. }
            | Error::SumOverflow
            | Error::BufferFull(_)
            | Error::Io(_) => 1,
        }
    }
}
