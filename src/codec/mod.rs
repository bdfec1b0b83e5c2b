//! Chunked transfer encoding codec implementation
//!
//! This module provides the encoder/decoder pair for `Transfer-Encoding:
//! chunked` message bodies:
//!
//! - [`ChunkedEncoder`]: frames raw byte buffers into the chunked wire form
//! - [`ChunkedDecoder`]: reconstructs payload bytes and trailers from a
//!   chunked byte stream
//!
//! Both implement the [`tokio_util::codec`] traits over `BytesMut`, so they
//! plug into `FramedRead`/`FramedWrite` on any transport. Each instance
//! serves exactly one message body; create a fresh one per stream.
//!
//! # Features
//!
//! - Streaming processing: decoded payload bytes are yielded as they
//!   arrive, encoded bytes go straight into the destination buffer
//! - Arbitrary input fragmentation on decode
//! - Trailer fields after the terminal zero chunk, both directions
//! - State machine based processing with bounded buffering

mod chunked_decoder;
mod chunked_encoder;

pub use chunked_decoder::ChunkedDecoder;
pub use chunked_decoder::DEFAULT_MAX_CHUNK_SIZE;
pub use chunked_encoder::ChunkedEncoder;
