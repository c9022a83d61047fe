//! Streaming base64 codec.
//!
//! Base64 turns 3 raw bytes into 4 characters without `=` padding only when
//! the input length is a multiple of 3. Encoding therefore rechunks to a
//! multiple of 3 so only the final chunk of the stream can carry padding;
//! decoding rechunks to a multiple of 4 so every textual chunk is
//! standalone-valid.

use base64::{engine::general_purpose::STANDARD, Engine};
use bytes::Bytes;

use crate::constants::{BASE64_RAW_GROUP, BASE64_TEXT_GROUP, DEFAULT_CHUNK_SIZE};
use crate::stream::combinators::MapChunks;
use crate::stream::rechunk::Rechunk;
use crate::types::{ChunkResult, ChunkStream};

/// Largest multiple of `multiple` not above `size`, and never below `multiple`.
#[inline]
pub fn to_nearest_multiple(size: usize, multiple: usize) -> usize {
    if size < multiple {
        return multiple;
    }
    size - size % multiple
}

fn encode_chunk(chunk: Bytes) -> ChunkResult {
    Ok(Bytes::from(STANDARD.encode(&chunk)))
}

fn decode_chunk(chunk: Bytes) -> ChunkResult {
    Ok(Bytes::from(STANDARD.decode(&chunk)?))
}

/// Transform base64-encoding a raw stream in chunks of about `size` bytes.
pub fn base64_encode_stream<'a>(size: usize) -> impl FnOnce(ChunkStream<'a>) -> ChunkStream<'a> + 'a {
    let size = to_nearest_multiple(size, BASE64_RAW_GROUP);
    move |chunks: ChunkStream<'a>| -> ChunkStream<'a> {
        Box::new(MapChunks::new(Rechunk::sized(chunks, size), encode_chunk))
    }
}

/// Transform decoding a base64 text stream in chunks of about `size` chars.
/// Malformed input yields `StreamError::Decode` and ends the sequence.
pub fn base64_decode_stream<'a>(size: usize) -> impl FnOnce(ChunkStream<'a>) -> ChunkStream<'a> + 'a {
    let size = to_nearest_multiple(size, BASE64_TEXT_GROUP);
    move |chunks: ChunkStream<'a>| -> ChunkStream<'a> {
        Box::new(MapChunks::new(Rechunk::sized(chunks, size), decode_chunk))
    }
}

/// Reusable codec value carrying one chunk size for both directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Base64Stream {
    chunk_size: usize,
}

impl Default for Base64Stream {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }
}

impl Base64Stream {
    pub fn new(chunk_size: usize) -> Self {
        Self { chunk_size }
    }

    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    pub fn encode<'a>(&self) -> impl FnOnce(ChunkStream<'a>) -> ChunkStream<'a> + 'a {
        base64_encode_stream(self.chunk_size)
    }

    pub fn decode<'a>(&self) -> impl FnOnce(ChunkStream<'a>) -> ChunkStream<'a> + 'a {
        base64_decode_stream(self.chunk_size)
    }
}
