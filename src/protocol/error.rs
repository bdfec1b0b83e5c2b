use std::io;
use thiserror::Error;

/// Top-level error type covering both directions of the codec.
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("decode error: {source}")]
    Decode {
        #[from]
        source: DecodeError,
    },

    #[error("encode error: {source}")]
    Encode {
        #[from]
        source: EncodeError,
    },
}

/// Errors produced while decoding a chunked byte stream.
///
/// All framing errors are non-retryable: once the decoder has rejected
/// input, the stream cannot be resynchronized and the caller must abort
/// the connection.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// The chunk size line is not valid hexadecimal, overflows, or exceeds
    /// the configured maximum chunk size.
    #[error("malformed chunk size line: {reason}")]
    MalformedSize { reason: &'static str },

    /// The chunk framing around the payload bytes is broken, typically a
    /// missing or wrong terminator after the declared data bytes.
    #[error("malformed chunk: {reason}")]
    MalformedChunk { reason: &'static str },

    /// A trailer line after the terminal chunk could not be parsed as a
    /// `key: value` field.
    #[error("malformed trailer: {reason}")]
    MalformedTrailer { reason: &'static str },

    /// Input arrived after the stream already terminated.
    #[error("chunked stream already closed")]
    StreamClosed,
}

/// Plumbing only: `tokio_util::codec::Decoder` requires its error type to
/// absorb transport-level `io::Error`s raised by the underlying stream.
/// The decoder itself never produces one, so the conversion collapses the
/// error into a generic framing failure.
impl From<io::Error> for DecodeError {
    fn from(_: io::Error) -> Self {
        Self::MalformedChunk { reason: "underlying io error" }
    }
}

impl DecodeError {
    pub fn malformed_size(reason: &'static str) -> Self {
        Self::MalformedSize { reason }
    }

    pub fn malformed_chunk(reason: &'static str) -> Self {
        Self::MalformedChunk { reason }
    }

    pub fn malformed_trailer(reason: &'static str) -> Self {
        Self::MalformedTrailer { reason }
    }
}

/// Errors produced while encoding a chunked byte stream.
#[derive(Error, Debug)]
pub enum EncodeError {
    /// The data path was asked to write a chunk it must not frame, such as
    /// an empty buffer (the zero-size chunk is reserved for termination).
    #[error("invalid chunk: {reason}")]
    InvalidChunk { reason: &'static str },

    /// A trailer field cannot be represented on the wire.
    #[error("invalid trailer: {reason}")]
    InvalidTrailer { reason: &'static str },

    /// A write was attempted after the terminal chunk was emitted.
    #[error("chunked stream already closed")]
    StreamClosed,

    /// Plumbing only: the encoder writes the size line through an
    /// `io::Write` adapter over the destination buffer, which cannot fail.
    /// This variant exists to propagate that `Result` without panicking
    /// and is never produced in practice.
    #[error("io error: {source}")]
    Io {
        #[from]
        source: io::Error,
    },
}

impl EncodeError {
    pub fn invalid_chunk(reason: &'static str) -> Self {
        Self::InvalidChunk { reason }
    }

    pub fn invalid_trailer(reason: &'static str) -> Self {
        Self::InvalidTrailer { reason }
    }
}
