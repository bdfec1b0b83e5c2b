//! Decoder implementation for HTTP chunked transfer encoding.
//!
//! This module provides functionality to decode message bodies that use
//! chunked transfer encoding as specified in
//! [RFC 7230 Section 4.1](https://tools.ietf.org/html/rfc7230#section-4.1).
//!
//! The decoder is a byte-at-a-time state machine, so the input may arrive
//! in any fragmentation: partial size lines and trailer lines are carried
//! in decoder state between calls, and payload bytes are yielded to the
//! caller as they are consumed rather than accumulated.

use crate::protocol::{DecodeError, PayloadItem, Trailers};
use bytes::{Buf, Bytes, BytesMut};
use std::mem;
use std::task::Poll;
use tokio_util::codec::Decoder;
use tracing::trace;
use ChunkedState::*;

/// Upper bound on a declared chunk size unless overridden with
/// [`ChunkedDecoder::with_max_chunk_size`]. Guards against a hostile size
/// line requesting an unbounded allocation.
pub const DEFAULT_MAX_CHUNK_SIZE: u64 = 16 * 1024 * 1024;

/// Upper bound on a single trailer line.
const MAX_TRAILER_LINE: usize = 8 * 1024;

/// A decoder for handling HTTP chunked transfer encoding.
///
/// The decoder processes incoming bytes according to the chunked format:
/// - Each chunk starts with its size in hexadecimal
/// - Followed by optional extensions (skipped) and CRLF
/// - Then the chunk data and CRLF
/// - A zero-size chunk ends the data, followed by optional trailer fields
///   and a final CRLF
///
/// The trailer set is delivered once, inside [`PayloadItem::Eof`]. After
/// that the stream is closed and any further input is an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChunkedDecoder {
    state: ChunkedState,
    remaining_size: u64,
    size_digits: usize,
    max_chunk_size: u64,
    trailer_line: Vec<u8>,
    trailers: Trailers,
}

impl ChunkedDecoder {
    /// Creates a decoder with [`DEFAULT_MAX_CHUNK_SIZE`].
    pub fn new() -> Self {
        Self {
            state: Size,
            remaining_size: 0,
            size_digits: 0,
            max_chunk_size: DEFAULT_MAX_CHUNK_SIZE,
            trailer_line: Vec::new(),
            trailers: Trailers::new(),
        }
    }

    /// Sets the largest declared chunk size the decoder will accept.
    ///
    /// A size line exceeding the limit fails with
    /// [`DecodeError::MalformedSize`] before any payload is buffered.
    pub fn with_max_chunk_size(mut self, max_chunk_size: u64) -> Self {
        self.max_chunk_size = max_chunk_size;
        self
    }
}

impl Default for ChunkedDecoder {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ChunkedState {
    /// Read the chunk size in hex
    Size,
    /// Handle whitespace after size
    SizeLws,
    /// Skip chunk extensions
    Extension,
    /// Read LF after chunk size
    SizeLf,
    /// Read chunk data
    Body,
    /// Read CR after chunk data
    BodyCr,
    /// Read LF after chunk data
    BodyLf,
    /// Accumulate one trailer line
    Trailer,
    /// Read LF after a trailer line, then parse it
    TrailerLf,
    /// Read final CR (or the first byte of a trailer line)
    EndCr,
    /// Read final LF
    EndLf,
    /// Terminal chunk and trailers fully read, Eof not yet delivered
    End,
    /// Eof delivered, stream closed
    Closed,
}

impl Decoder for ChunkedDecoder {
    type Item = PayloadItem;
    type Error = DecodeError;

    /// Decodes chunked transfer encoded data from the input buffer.
    ///
    /// # Returns
    /// - `Ok(Some(PayloadItem::Chunk(bytes)))` when payload bytes are decoded
    /// - `Ok(Some(PayloadItem::Eof(trailers)))` exactly once, when the
    ///   terminal chunk and trailers have been fully read
    /// - `Ok(None)` when more data is needed
    /// - `Err(DecodeError)` if the chunked framing is invalid, or if input
    ///   arrives after the stream terminated
    fn decode(&mut self, src: &mut BytesMut) -> Result<Option<Self::Item>, Self::Error> {
        loop {
            match self.state {
                End => {
                    self.state = Closed;
                    trace!(trailers = self.trailers.len(), "finished reading chunked stream");
                    return Ok(Some(PayloadItem::Eof(mem::take(&mut self.trailers))));
                }
                Closed if !src.is_empty() => return Err(DecodeError::StreamClosed),
                _ => {}
            }

            if src.is_empty() {
                // need more data
                return Ok(None);
            }

            let mut buf = None;

            self.state = match self.state.step(
                src,
                &mut self.remaining_size,
                &mut self.size_digits,
                self.max_chunk_size,
                &mut self.trailer_line,
                &mut self.trailers,
                &mut buf,
            ) {
                Poll::Pending => return Ok(None),
                Poll::Ready(Ok(new_state)) => new_state,
                Poll::Ready(Err(e)) => return Err(e),
            };

            if let Some(bytes) = buf {
                trace!(len = bytes.len(), "read chunked bytes");
                return Ok(Some(PayloadItem::Chunk(bytes)));
            }
        }
    }
}

macro_rules! try_next_byte {
    ($src:ident) => {{
        if $src.len() > 0 {
            $src.get_u8()
        } else {
            return Poll::Pending;
        }
    }};
}

impl ChunkedState {
    /// Processes the next step in the chunked decoding state machine.
    ///
    /// # Arguments
    /// * `src` - Source buffer containing the chunked data
    /// * `remaining_size` - Remaining bytes in the current chunk
    /// * `size_digits` - Hex digits consumed so far on the size line
    /// * `max_chunk_size` - Largest declared chunk size accepted
    /// * `trailer_line` - Carry buffer for a partially received trailer line
    /// * `trailers` - Trailer fields parsed so far
    /// * `buf` - Receives decoded payload bytes
    #[allow(clippy::too_many_arguments, reason = "internal dispatch over decoder state")]
    fn step(
        &self,
        src: &mut BytesMut,
        remaining_size: &mut u64,
        size_digits: &mut usize,
        max_chunk_size: u64,
        trailer_line: &mut Vec<u8>,
        trailers: &mut Trailers,
        buf: &mut Option<Bytes>,
    ) -> Poll<Result<ChunkedState, DecodeError>> {
        match self {
            Size => ChunkedState::read_size(src, remaining_size, size_digits, max_chunk_size),
            SizeLws => ChunkedState::read_size_lws(src),
            Extension => ChunkedState::read_extension(src),
            SizeLf => ChunkedState::read_size_lf(src, remaining_size, size_digits),
            Body => ChunkedState::read_body(src, remaining_size, buf),
            BodyCr => ChunkedState::read_body_cr(src),
            BodyLf => ChunkedState::read_body_lf(src),
            Trailer => ChunkedState::read_trailer(src, trailer_line),
            TrailerLf => ChunkedState::read_trailer_lf(src, trailer_line, trailers),
            EndCr => ChunkedState::read_end_cr(src, trailer_line),
            EndLf => ChunkedState::read_end_lf(src),
            End | Closed => Poll::Ready(Ok(*self)),
        }
    }

    /// Reads and parses the chunk size in hexadecimal format.
    ///
    /// The size is folded digit by digit, with both overflow and the
    /// configured maximum checked on every digit so an oversized chunk is
    /// rejected before any of its data arrives.
    ///
    /// # State Transitions
    /// - On hex digit (0-9, a-f, A-F): stay in Size
    /// - On tab/space: SizeLws (requires at least one digit)
    /// - On semicolon: Extension (requires at least one digit)
    /// - On CR: SizeLf (requires at least one digit)
    /// - On anything else: error
    fn read_size(
        src: &mut BytesMut,
        size_per_chunk: &mut u64,
        size_digits: &mut usize,
        max_chunk_size: u64,
    ) -> Poll<Result<ChunkedState, DecodeError>> {
        macro_rules! or_overflow {
            ($e:expr) => {
                match $e {
                    Some(val) => val,
                    None => {
                        return Poll::Ready(Err(DecodeError::malformed_size("chunk size overflow")))
                    }
                }
            };
        }

        macro_rules! ensure_digits {
            () => {
                if *size_digits == 0 {
                    return Poll::Ready(Err(DecodeError::malformed_size("empty chunk size token")));
                }
            };
        }

        let radix = 16;
        let digit = match try_next_byte!(src) {
            b @ b'0'..=b'9' => b - b'0',
            b @ b'a'..=b'f' => b + 10 - b'a',
            b @ b'A'..=b'F' => b + 10 - b'A',

            b'\t' | b' ' => {
                ensure_digits!();
                return Poll::Ready(Ok(SizeLws));
            }
            b';' => {
                ensure_digits!();
                return Poll::Ready(Ok(Extension));
            }
            b'\r' => {
                ensure_digits!();
                return Poll::Ready(Ok(SizeLf));
            }

            _ => {
                return Poll::Ready(Err(DecodeError::malformed_size(
                    "chunk size is not valid hex",
                )))
            }
        };

        *size_per_chunk = or_overflow!(size_per_chunk.checked_mul(radix));
        *size_per_chunk = or_overflow!(size_per_chunk.checked_add(u64::from(digit)));
        *size_digits += 1;

        if *size_per_chunk > max_chunk_size {
            return Poll::Ready(Err(DecodeError::malformed_size(
                "chunk size exceeds the configured maximum",
            )));
        }

        Poll::Ready(Ok(Size))
    }

    /// Processes linear whitespace after the chunk size. Only tabs and
    /// spaces may follow the size; no further digits are accepted.
    fn read_size_lws(src: &mut BytesMut) -> Poll<Result<ChunkedState, DecodeError>> {
        match try_next_byte!(src) {
            b'\t' | b' ' => Poll::Ready(Ok(SizeLws)),
            b';' => Poll::Ready(Ok(Extension)),
            b'\r' => Poll::Ready(Ok(SizeLf)),
            _ => Poll::Ready(Err(DecodeError::malformed_size(
                "invalid byte after chunk size whitespace",
            ))),
        }
    }

    /// Skips chunk extensions. Extensions end at the next CRLF and are
    /// never interpreted; a bare LF inside an extension is rejected so a
    /// sloppy peer cannot smuggle a line ending past the framing.
    fn read_extension(src: &mut BytesMut) -> Poll<Result<ChunkedState, DecodeError>> {
        match try_next_byte!(src) {
            b'\r' => Poll::Ready(Ok(SizeLf)),
            b'\n' => Poll::Ready(Err(DecodeError::malformed_size("bare LF in chunk extension"))),
            _ => Poll::Ready(Ok(Extension)), // no supported extensions
        }
    }

    /// Validates the LF completing the size line and branches on the
    /// declared size: zero means the terminal chunk.
    fn read_size_lf(
        src: &mut BytesMut,
        size_per_chunk: &mut u64,
        size_digits: &mut usize,
    ) -> Poll<Result<ChunkedState, DecodeError>> {
        match try_next_byte!(src) {
            b'\n' => {
                // fresh accumulator for the next size line
                *size_digits = 0;
                if *size_per_chunk == 0 {
                    Poll::Ready(Ok(EndCr))
                } else {
                    Poll::Ready(Ok(Body))
                }
            }

            _ => Poll::Ready(Err(DecodeError::malformed_size("chunk size CR not followed by LF"))),
        }
    }

    /// Reads chunk data, yielding whatever contiguous bytes are available
    /// up to the declared size. The payload is handed out immediately; the
    /// decoder never accumulates it.
    fn read_body(
        src: &mut BytesMut,
        size_per_chunk: &mut u64,
        buf: &mut Option<Bytes>,
    ) -> Poll<Result<ChunkedState, DecodeError>> {
        if src.is_empty() {
            return Poll::Ready(Ok(Body));
        }

        if *size_per_chunk == 0 {
            return Poll::Ready(Ok(BodyCr));
        }

        // cap remaining bytes at the max capacity of usize
        let remaining = match *size_per_chunk {
            r if r > usize::MAX as u64 => usize::MAX,
            r => r as usize,
        };

        let read_size = std::cmp::min(remaining, src.len());

        *size_per_chunk -= read_size as u64;
        let bytes = src.split_to(read_size).freeze();
        *buf = Some(bytes);

        if *size_per_chunk > 0 {
            Poll::Ready(Ok(Body))
        } else {
            Poll::Ready(Ok(BodyCr))
        }
    }

    /// Validates the CR after the declared data bytes. Any other byte means
    /// the chunk carried more data than its size line declared.
    fn read_body_cr(src: &mut BytesMut) -> Poll<Result<ChunkedState, DecodeError>> {
        match try_next_byte!(src) {
            b'\r' => Poll::Ready(Ok(BodyLf)),
            _ => Poll::Ready(Err(DecodeError::malformed_chunk(
                "chunk data not terminated by CRLF",
            ))),
        }
    }

    /// Validates the LF completing the chunk and returns to size parsing.
    fn read_body_lf(src: &mut BytesMut) -> Poll<Result<ChunkedState, DecodeError>> {
        match try_next_byte!(src) {
            b'\n' => Poll::Ready(Ok(Size)),
            _ => Poll::Ready(Err(DecodeError::malformed_chunk("chunk data CR not followed by LF"))),
        }
    }

    /// Accumulates one trailer line into the carry buffer, up to CR.
    fn read_trailer(
        src: &mut BytesMut,
        trailer_line: &mut Vec<u8>,
    ) -> Poll<Result<ChunkedState, DecodeError>> {
        match try_next_byte!(src) {
            b'\r' => Poll::Ready(Ok(TrailerLf)),
            b'\n' => Poll::Ready(Err(DecodeError::malformed_trailer("bare LF in trailer line"))),
            b => {
                if trailer_line.len() >= MAX_TRAILER_LINE {
                    return Poll::Ready(Err(DecodeError::malformed_trailer(
                        "trailer line exceeds the limit",
                    )));
                }
                trailer_line.push(b);
                Poll::Ready(Ok(Trailer))
            }
        }
    }

    /// Validates the LF after a trailer line, then parses and records the
    /// field. Duplicate names are last-write-wins.
    fn read_trailer_lf(
        src: &mut BytesMut,
        trailer_line: &mut Vec<u8>,
        trailers: &mut Trailers,
    ) -> Poll<Result<ChunkedState, DecodeError>> {
        match try_next_byte!(src) {
            b'\n' => {
                let (name, value) = match parse_trailer_line(trailer_line) {
                    Ok(field) => field,
                    Err(e) => return Poll::Ready(Err(e)),
                };
                trailers.insert(name, value);
                trailer_line.clear();
                Poll::Ready(Ok(EndCr))
            }
            _ => Poll::Ready(Err(DecodeError::malformed_trailer(
                "trailer line CR not followed by LF",
            ))),
        }
    }

    /// Reads the byte after the terminal chunk (or after a trailer line):
    /// CR starts the final CRLF, anything else starts a trailer line.
    fn read_end_cr(
        src: &mut BytesMut,
        trailer_line: &mut Vec<u8>,
    ) -> Poll<Result<ChunkedState, DecodeError>> {
        match try_next_byte!(src) {
            b'\r' => Poll::Ready(Ok(EndLf)),
            b'\n' => {
                Poll::Ready(Err(DecodeError::malformed_trailer("bare LF after terminal chunk")))
            }
            b => {
                trailer_line.push(b);
                Poll::Ready(Ok(Trailer))
            }
        }
    }

    /// Validates the LF of the final CRLF, completing the stream.
    fn read_end_lf(src: &mut BytesMut) -> Poll<Result<ChunkedState, DecodeError>> {
        match try_next_byte!(src) {
            b'\n' => Poll::Ready(Ok(End)),
            _ => Poll::Ready(Err(DecodeError::malformed_chunk("final CR not followed by LF"))),
        }
    }
}

/// Parses one accumulated trailer line as a `key: value` field, trimming
/// optional whitespace around the value.
fn parse_trailer_line(line: &[u8]) -> Result<(String, String), DecodeError> {
    let Ok(line) = std::str::from_utf8(line) else {
        return Err(DecodeError::malformed_trailer("trailer line is not valid UTF-8"));
    };

    let (name, value) = line
        .split_once(':')
        .ok_or(DecodeError::malformed_trailer("trailer line has no colon"))?;

    if name.is_empty() {
        return Err(DecodeError::malformed_trailer("empty trailer name"));
    }
    if !name.bytes().all(|b| b > b' ' && b != 0x7f) {
        return Err(DecodeError::malformed_trailer(
            "trailer name contains separator or control byte",
        ));
    }

    Ok((name.to_string(), value.trim_matches([' ', '\t']).to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic() {
        let mut buffer: BytesMut = BytesMut::from(&b"10\r\n1234567890abcdef\r\n0\r\n\r\n"[..]);
        let mut decoder = ChunkedDecoder::new();
        {
            let item = decoder.decode(&mut buffer).unwrap().unwrap();
            assert!(item.is_chunk());
            assert_eq!(item.as_bytes().unwrap().len(), 16);

            let str = std::str::from_utf8(&item.as_bytes().unwrap()[..]).unwrap();
            assert_eq!(str, "1234567890abcdef");
        }

        {
            let item = decoder.decode(&mut buffer).unwrap().unwrap();
            assert!(item.is_eof());
            assert!(item.trailers().unwrap().is_empty());
        }
    }

    #[test]
    fn test_multiple_chunks() {
        let mut buffer: BytesMut = BytesMut::from(&b"5\r\nhello\r\n7\r\n, world\r\n0\r\n\r\n"[..]);
        let mut decoder = ChunkedDecoder::new();

        // First chunk
        let chunk = decoder.decode(&mut buffer).unwrap().unwrap();
        assert_eq!(chunk.as_bytes().unwrap(), &Bytes::copy_from_slice(b"hello"));

        // Second chunk
        let chunk = decoder.decode(&mut buffer).unwrap().unwrap();
        assert_eq!(chunk.as_bytes().unwrap(), &Bytes::copy_from_slice(b", world"));

        // EOF
        let eof = decoder.decode(&mut buffer).unwrap().unwrap();
        assert!(eof.is_eof());
    }

    #[test]
    fn test_chunks_with_extensions() {
        let mut buffer: BytesMut = BytesMut::from(&b"5;chunk-ext=value\r\nhello\r\n0\r\n\r\n"[..]);
        let mut decoder = ChunkedDecoder::new();

        let chunk = decoder.decode(&mut buffer).unwrap().unwrap();
        assert_eq!(chunk.as_bytes().unwrap(), &Bytes::copy_from_slice(b"hello"));

        let eof = decoder.decode(&mut buffer).unwrap().unwrap();
        assert!(eof.is_eof());
    }

    #[test]
    fn test_trailers_captured() {
        let mut buffer: BytesMut = BytesMut::from(
            &b"5\r\nhello\r\n0\r\nX-Checksum: abc123\r\nX-Chunk-Count: 1\r\n\r\n"[..],
        );
        let mut decoder = ChunkedDecoder::new();

        let chunk = decoder.decode(&mut buffer).unwrap().unwrap();
        assert_eq!(chunk.as_bytes().unwrap(), &Bytes::copy_from_slice(b"hello"));

        let eof = decoder.decode(&mut buffer).unwrap().unwrap();
        let trailers = eof.trailers().unwrap();
        assert_eq!(trailers.len(), 2);
        assert_eq!(trailers.get("X-Checksum"), Some("abc123"));
        assert_eq!(trailers.get("x-chunk-count"), Some("1"));

        let fields: Vec<_> = trailers.iter().collect();
        assert_eq!(fields, vec![("X-Checksum", "abc123"), ("X-Chunk-Count", "1")]);
    }

    #[test]
    fn test_duplicate_trailer_key_last_write_wins() {
        let mut buffer: BytesMut =
            BytesMut::from(&b"0\r\nX-Dup: first\r\nX-Dup: second\r\n\r\n"[..]);
        let mut decoder = ChunkedDecoder::new();

        let eof = decoder.decode(&mut buffer).unwrap().unwrap();
        let trailers = eof.trailers().unwrap();
        assert_eq!(trailers.len(), 1);
        assert_eq!(trailers.get("X-Dup"), Some("second"));
    }

    #[test]
    fn test_incomplete_chunk() {
        let mut buffer: BytesMut = BytesMut::from(&b"5\r\nhel"[..]);
        let mut decoder = ChunkedDecoder::new();

        // Should return Some when received partial chunk
        let chunk = decoder.decode(&mut buffer).unwrap();
        assert!(chunk.is_some());
        assert_eq!(chunk.unwrap().as_bytes().unwrap(), &Bytes::copy_from_slice(b"hel"));

        // Add the rest of the chunk
        buffer.extend_from_slice(b"lo\r\n0\r\n\r\n");

        let chunk = decoder.decode(&mut buffer).unwrap().unwrap();
        assert_eq!(chunk.as_bytes().unwrap(), &Bytes::copy_from_slice(b"lo"));

        let eof = decoder.decode(&mut buffer).unwrap().unwrap();
        assert!(eof.is_eof());
    }

    #[test]
    fn test_byte_at_a_time() {
        let stream = b"6\r\nchunky\r\n4\r\ndata\r\n0\r\nX-Done: yes\r\n\r\n";
        let mut decoder = ChunkedDecoder::new();
        let mut buffer = BytesMut::new();

        let mut payload = Vec::new();
        let mut eofs = 0;

        for &b in stream.iter() {
            buffer.extend_from_slice(&[b]);
            while let Some(item) = decoder.decode(&mut buffer).unwrap() {
                match item {
                    PayloadItem::Chunk(bytes) => payload.extend_from_slice(&bytes),
                    PayloadItem::Eof(trailers) => {
                        eofs += 1;
                        assert_eq!(trailers.get("X-Done"), Some("yes"));
                    }
                }
            }
        }

        assert_eq!(&payload[..], b"chunkydata");
        assert_eq!(eofs, 1);
    }

    #[test]
    fn test_invalid_chunk_size() {
        let mut buffer: BytesMut = BytesMut::from(&b"zz\r\n"[..]);
        let mut decoder = ChunkedDecoder::new();

        let result = decoder.decode(&mut buffer);
        assert!(matches!(result, Err(DecodeError::MalformedSize { .. })));
    }

    #[test]
    fn test_empty_size_line() {
        let mut buffer: BytesMut = BytesMut::from(&b"\r\nhello"[..]);
        let mut decoder = ChunkedDecoder::new();

        let result = decoder.decode(&mut buffer);
        assert!(matches!(result, Err(DecodeError::MalformedSize { .. })));
    }

    #[test]
    fn test_oversized_chunk_rejected_before_data() {
        // 0x11 == 17 exceeds the 16 byte limit; no data follows yet
        let mut buffer: BytesMut = BytesMut::from(&b"11"[..]);
        let mut decoder = ChunkedDecoder::new().with_max_chunk_size(16);

        let result = decoder.decode(&mut buffer);
        assert!(matches!(result, Err(DecodeError::MalformedSize { .. })));
    }

    #[test]
    fn test_size_overflow_rejected() {
        let mut buffer: BytesMut = BytesMut::from(&b"fffffffffffffffff\r\n"[..]);
        let mut decoder = ChunkedDecoder::new().with_max_chunk_size(u64::MAX);

        let result = decoder.decode(&mut buffer);
        assert!(matches!(result, Err(DecodeError::MalformedSize { .. })));
    }

    #[test]
    fn test_missing_crlf() {
        let mut buffer: BytesMut = BytesMut::from(&b"5\r\nhelloBad"[..]);
        let mut decoder = ChunkedDecoder::new();

        let chunk = decoder.decode(&mut buffer).unwrap().unwrap();
        assert_eq!(chunk.as_bytes().unwrap(), &Bytes::copy_from_slice(b"hello"));

        let result = decoder.decode(&mut buffer);
        assert!(matches!(result, Err(DecodeError::MalformedChunk { .. })));
    }

    #[test]
    fn test_bare_lf_in_extension_rejected() {
        let mut buffer: BytesMut = BytesMut::from(&b"5;ext=value\nhello\r\n0\r\n\r\n"[..]);
        let mut decoder = ChunkedDecoder::new();

        let result = decoder.decode(&mut buffer);
        assert!(matches!(result, Err(DecodeError::MalformedSize { .. })));
    }

    #[test]
    fn test_bare_lf_after_terminal_chunk_rejected() {
        let mut buffer: BytesMut = BytesMut::from(&b"0\r\n\n"[..]);
        let mut decoder = ChunkedDecoder::new();

        let result = decoder.decode(&mut buffer);
        assert!(matches!(result, Err(DecodeError::MalformedTrailer { .. })));
    }

    #[test]
    fn test_bare_lf_in_trailer_line_rejected() {
        let mut buffer: BytesMut = BytesMut::from(&b"0\r\nX-Bad: value\nrest\r\n\r\n"[..]);
        let mut decoder = ChunkedDecoder::new();

        let result = decoder.decode(&mut buffer);
        assert!(matches!(result, Err(DecodeError::MalformedTrailer { .. })));
    }

    #[test]
    fn test_trailer_line_limit_enforced() {
        let mut data = Vec::from(&b"0\r\nX-Big: "[..]);
        data.extend(vec![b'a'; MAX_TRAILER_LINE + 1]);
        data.extend(b"\r\n\r\n");

        let mut buffer = BytesMut::from(&data[..]);
        let mut decoder = ChunkedDecoder::new();

        let result = decoder.decode(&mut buffer);
        assert!(matches!(result, Err(DecodeError::MalformedTrailer { .. })));
    }

    #[test]
    fn test_malformed_trailer_line() {
        let mut buffer: BytesMut = BytesMut::from(&b"0\r\nno colon here\r\n\r\n"[..]);
        let mut decoder = ChunkedDecoder::new();

        let result = decoder.decode(&mut buffer);
        assert!(matches!(result, Err(DecodeError::MalformedTrailer { .. })));
    }

    #[test]
    fn test_large_chunk() {
        // Create a large chunk (1MB)
        let size = 1024 * 1024;
        let mut data = Vec::with_capacity(size + 16);
        let headers = format!("{size:x}\r\n").into_bytes();
        data.extend(headers);
        data.extend(vec![b'A'; size]);
        data.extend(b"\r\n0\r\n\r\n");

        let mut buffer = BytesMut::from(&data[..]);
        let mut decoder = ChunkedDecoder::new();

        let chunk = decoder.decode(&mut buffer).unwrap().unwrap();
        assert_eq!(chunk.as_bytes().unwrap().len(), size);
        assert!(chunk.as_bytes().unwrap().iter().all(|&b| b == b'A'));

        let eof = decoder.decode(&mut buffer).unwrap().unwrap();
        assert!(eof.is_eof());
    }

    #[test]
    fn test_zero_size_chunk() {
        let mut buffer: BytesMut = BytesMut::from(&b"0\r\n\r\n"[..]);
        let mut decoder = ChunkedDecoder::new();

        let eof = decoder.decode(&mut buffer).unwrap().unwrap();
        assert!(eof.is_eof());
    }

    #[test]
    fn test_input_after_termination_rejected() {
        let mut buffer: BytesMut = BytesMut::from(&b"0\r\n\r\n"[..]);
        let mut decoder = ChunkedDecoder::new();

        let eof = decoder.decode(&mut buffer).unwrap().unwrap();
        assert!(eof.is_eof());

        // quiescent without input
        assert_eq!(decoder.decode(&mut buffer).unwrap(), None);

        buffer.extend_from_slice(b"5\r\nlate!\r\n");
        let result = decoder.decode(&mut buffer);
        assert!(matches!(result, Err(DecodeError::StreamClosed)));
    }
}
