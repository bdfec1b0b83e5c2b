//! Encoder implementation for HTTP chunked transfer encoding.
//!
//! Frames outgoing byte buffers according to the chunked format: each chunk
//! is written as its size in hexadecimal, CRLF, the raw bytes, and CRLF.
//! The stream is terminated by a zero-size chunk, optional trailer fields,
//! and a final CRLF.
//!
//! Writes go straight into the destination buffer, so the encoder holds no
//! state beyond whether the terminal chunk has been written; memory use is
//! bounded by the size of the chunk currently being encoded.

use crate::ensure;
use crate::protocol::{EncodeError, PayloadItem};
use bytes::{Buf, BufMut, BytesMut};
use std::io::Write;

use tokio_util::codec::Encoder;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChunkedEncoder {
    eof: bool,
}

impl ChunkedEncoder {
    pub fn new() -> Self {
        Self { eof: false }
    }

    /// Returns true once the terminal zero chunk has been written.
    pub fn is_finish(&self) -> bool {
        self.eof
    }
}

impl<D: Buf> Encoder<PayloadItem<D>> for ChunkedEncoder {
    type Error = EncodeError;

    /// Encodes one payload item into the chunked wire form.
    ///
    /// # Returns
    /// - `Ok(())` after writing the framed chunk, or the terminator for
    ///   [`PayloadItem::Eof`]
    /// - `Err(EncodeError::InvalidChunk)` for an empty data buffer (the
    ///   zero-size chunk is reserved for stream termination)
    /// - `Err(EncodeError::StreamClosed)` when called after `Eof`
    fn encode(&mut self, item: PayloadItem<D>, dst: &mut BytesMut) -> Result<(), Self::Error> {
        ensure!(!self.eof, EncodeError::StreamClosed);

        match item {
            PayloadItem::Chunk(data) => {
                ensure!(
                    data.has_remaining(),
                    EncodeError::invalid_chunk("empty chunk, terminate the stream with Eof instead")
                );

                write!(helper::Writer(dst), "{:X}\r\n", data.remaining())?;
                dst.reserve(data.remaining() + 2);
                dst.put(data);
                dst.extend_from_slice(b"\r\n");
                Ok(())
            }

            PayloadItem::Eof(trailers) => {
                for (name, value) in trailers.iter() {
                    validate_trailer(name, value)?;
                }

                self.eof = true;
                dst.extend_from_slice(b"0\r\n");
                for (name, value) in trailers.iter() {
                    write!(helper::Writer(dst), "{name}: {value}\r\n")?;
                }
                dst.extend_from_slice(b"\r\n");
                Ok(())
            }
        }
    }
}

/// Rejects trailer fields that cannot be framed as a `key: value` line.
fn validate_trailer(name: &str, value: &str) -> Result<(), EncodeError> {
    ensure!(!name.is_empty(), EncodeError::invalid_trailer("empty trailer name"));
    ensure!(
        name.bytes().all(|b| b > b' ' && b != b':' && b != 0x7f),
        EncodeError::invalid_trailer("trailer name contains separator or control byte")
    );
    ensure!(
        !value.bytes().any(|b| b == b'\r' || b == b'\n'),
        EncodeError::invalid_trailer("trailer value contains line terminator")
    );
    Ok(())
}

mod helper {
    use bytes::{BufMut, BytesMut};
    use std::io;

    pub struct Writer<'a>(pub &'a mut BytesMut);

    impl io::Write for Writer<'_> {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.put_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }
}
