use bytes::{BufMut, Bytes, BytesMut};

use crate::stream::combinators::MapChunks;
use crate::stream::framing::types::{ChunkHeader, FramingError};
use crate::types::{ChunkResult, ChunkStream};

/// Encode the 4-byte little-endian header for a `len`-byte record.
#[inline]
pub fn encode_chunk_header(len: usize) -> Result<[u8; ChunkHeader::LEN], FramingError> {
    Ok(ChunkHeader::for_payload(len)?.to_le_bytes())
}

fn frame_record(chunk: Bytes) -> ChunkResult {
    let header = encode_chunk_header(chunk.len())?;
    let mut out = BytesMut::with_capacity(ChunkHeader::LEN + chunk.len());
    out.put_slice(&header);
    out.put_slice(&chunk);
    Ok(out.freeze())
}

/// Prefix every chunk of `chunks` with its length header.
///
/// Chunk count and order are preserved; an empty chunk becomes a bare
/// zero-length header.
pub fn add_chunk_header_stream<'a>(chunks: ChunkStream<'a>) -> ChunkStream<'a> {
    Box::new(MapChunks::new(chunks, frame_record))
}
