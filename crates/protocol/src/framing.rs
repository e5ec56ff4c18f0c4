//! Chunked message framing.
//!
//! Payloads larger than one frame are split into consecutive slices of at
//! most [`CHUNK_SIZE`] bytes. When a derivation path is supplied it travels
//! alone in the first frame. Frame position tags are assigned by the sender,
//! not here.

use crate::instructions::CHUNK_SIZE;

/// One frame of a chunked exchange, ready to be sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// Position tag.
    pub p1: u8,
    /// Curve selector on the first frame, zero elsewhere.
    pub p2: u8,
    /// At most [`CHUNK_SIZE`] bytes.
    pub payload: Vec<u8>,
}

impl Frame {
    /// Create a frame.
    pub fn new(p1: u8, p2: u8, payload: Vec<u8>) -> Self {
        Self { p1, p2, payload }
    }
}

/// Split `message` into frames, preceded by the serialized path if given.
///
/// Concatenating every element after the path reproduces `message`. An
/// empty message contributes no chunks.
pub fn prepare_chunks(message: &[u8], serialized_path: Option<&[u8]>) -> Vec<Vec<u8>> {
    let mut chunks = Vec::with_capacity(1 + chunk_count(message.len()));
    if let Some(path) = serialized_path {
        chunks.push(path.to_vec());
    }
    chunks.extend(message.chunks(CHUNK_SIZE).map(<[u8]>::to_vec));
    chunks
}

/// Number of message chunks for a payload of `len` bytes.
#[inline]
pub fn chunk_count(len: usize) -> usize {
    len.div_ceil(CHUNK_SIZE)
}
