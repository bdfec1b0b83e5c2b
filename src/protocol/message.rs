use crate::protocol::Trailers;
use bytes::{Buf, Bytes};

/// Represents one item in a streamed chunked body.
///
/// The decoder produces these as the stream is consumed; the encoder takes
/// them to build the wire form. The generic parameter `Data` is the payload
/// buffer type (defaults to `Bytes`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PayloadItem<Data: Buf = Bytes> {
    /// A chunk of payload data
    Chunk(Data),
    /// Marks the end of the stream, carrying any trailer fields
    Eof(Trailers),
}

impl<D: Buf> PayloadItem<D> {
    /// Returns true if this item represents the end of the stream
    #[inline]
    pub fn is_eof(&self) -> bool {
        matches!(self, PayloadItem::Eof(_))
    }

    /// Returns true if this item contains chunk data
    #[inline]
    pub fn is_chunk(&self) -> bool {
        matches!(self, PayloadItem::Chunk(_))
    }

    /// Returns the trailer set if this is the end-of-stream marker
    pub fn trailers(&self) -> Option<&Trailers> {
        match self {
            PayloadItem::Chunk(_) => None,
            PayloadItem::Eof(trailers) => Some(trailers),
        }
    }
}

impl PayloadItem {
    /// Returns a reference to the contained bytes if this is a chunk
    pub fn as_bytes(&self) -> Option<&Bytes> {
        match self {
            PayloadItem::Chunk(bytes) => Some(bytes),
            PayloadItem::Eof(_) => None,
        }
    }

    /// Consumes the item and returns the contained bytes if this is a chunk
    pub fn into_bytes(self) -> Option<Bytes> {
        match self {
            PayloadItem::Chunk(bytes) => Some(bytes),
            PayloadItem::Eof(_) => None,
        }
    }
}

impl<D: Buf> From<D> for PayloadItem<D> {
    fn from(data: D) -> Self {
        Self::Chunk(data)
    }
}
