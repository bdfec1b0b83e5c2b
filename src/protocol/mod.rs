//! Shared protocol types for the chunked codec.
//!
//! This module holds everything the encoder and decoder exchange with their
//! caller:
//!
//! - [`PayloadItem`]: one unit of a streamed body — a data chunk or the
//!   end-of-stream marker carrying the trailer set
//! - [`Trailers`]: ordered trailer fields with last-write-wins insertion
//! - [`DecodeError`] / [`EncodeError`] / [`CodecError`]: the error surface
//!
//! A chunked stream is constructed fresh per message body. One decoder (or
//! encoder) instance serves exactly one stream and is discarded afterwards;
//! dropping an instance in any state is safe and requires no teardown.

mod error;
pub use error::CodecError;
pub use error::DecodeError;
pub use error::EncodeError;

mod message;
pub use message::PayloadItem;

mod trailer;
pub use trailer::Trailers;
