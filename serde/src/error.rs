use thiserror::Error;

use crate::constants::HEADER_SIZE_BYTES;

/// The error returned when a typed read against a bit stream fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BitStreamError {
    /// Fewer bits remain before the end of the stream than the read requires
    #[error("bit stream is too short for the requested read")]
    TooShort,
    /// The bits were present but did not decode to a valid value
    #[error("bit stream contained a value that could not be decoded")]
    EncodingError,
}

/// The error returned when received bytes do not form a valid envelope.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnvelopeError {
    #[error("envelope needs a {HEADER_SIZE_BYTES}-byte bit count header, got {length} bytes")]
    MissingHeader { length: usize },
    #[error("envelope header declares {declared} bits but the payload only holds {available}")]
    BitCountOverrun { declared: usize, available: usize },
}

/// Any failure while decoding a whole packed message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error(transparent)]
    Envelope(#[from] EnvelopeError),
    #[error(transparent)]
    Stream(#[from] BitStreamError),
}
