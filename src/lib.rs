//! An incremental codec for HTTP chunked transfer encoding
//!
//! This crate provides the framing layer for `Transfer-Encoding: chunked`
//! message bodies: an encoder that turns raw byte buffers into a valid
//! chunked byte stream, and a decoder that reconstructs the payload and
//! trailer fields from a chunked byte stream. Both sides are synchronous
//! state machines driven through the [`tokio_util::codec`] `Encoder` and
//! `Decoder` traits, so they compose directly with `FramedRead` and
//! `FramedWrite` on any transport.
//!
//! # Features
//!
//! - Streaming decoding: payload bytes are handed to the caller as they
//!   arrive, never accumulated into a whole-body buffer
//! - Tolerates arbitrary fragmentation of the input (byte-at-a-time feeds
//!   decode identically to a single whole-stream feed)
//! - Trailer fields captured on decode and emitted on encode, in insertion
//!   order
//! - A configurable chunk-size limit that rejects hostile size lines before
//!   any payload is buffered
//! - Clean error handling through [`protocol::DecodeError`] and
//!   [`protocol::EncodeError`]
//!
//! # Example
//!
//! ```
//! use bytes::{Bytes, BytesMut};
//! use chunked_codec::codec::{ChunkedDecoder, ChunkedEncoder};
//! use chunked_codec::protocol::{PayloadItem, Trailers};
//! use tokio_util::codec::{Decoder, Encoder};
//!
//! let mut encoder = ChunkedEncoder::new();
//! let mut wire = BytesMut::new();
//! encoder.encode(PayloadItem::Chunk(Bytes::from_static(b"hello")), &mut wire).unwrap();
//! encoder.encode(PayloadItem::<Bytes>::Eof(Trailers::new()), &mut wire).unwrap();
//! assert_eq!(&wire[..], b"5\r\nhello\r\n0\r\n\r\n");
//!
//! let mut decoder = ChunkedDecoder::new();
//! let chunk = decoder.decode(&mut wire).unwrap().unwrap();
//! assert_eq!(chunk.as_bytes().unwrap(), &Bytes::from_static(b"hello"));
//! let eof = decoder.decode(&mut wire).unwrap().unwrap();
//! assert!(eof.is_eof());
//! ```
//!
//! # Architecture
//!
//! - [`codec`]: the [`codec::ChunkedEncoder`] / [`codec::ChunkedDecoder`]
//!   pair
//! - [`protocol`]: shared types — [`protocol::PayloadItem`],
//!   [`protocol::Trailers`], and the error enums
//! - [`inspect`]: a small capability interface for reading a process's
//!   resident memory, used by external test harnesses that watch a server's
//!   memory while streaming a large chunked body through it
//!
//! # Limitations
//!
//! - Framing only: this crate does not parse headers, open connections, or
//!   manage request/response lifecycles
//! - Chunk extensions are validated and skipped on decode, never emitted on
//!   encode
//! - Framing errors are not recoverable; after an error the stream must be
//!   abandoned

pub mod codec;
pub mod inspect;
pub mod protocol;

mod utils;
pub(crate) use utils::ensure;
