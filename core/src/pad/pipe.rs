//! Padding pipes over raw `Read`/`Write` resources.
//!
//! Data is copied in chunks aligned to the block size; only the final chunk
//! is padded (or stripped). An input whose length is an exact multiple of the
//! chunk size still gets a full padding block, so the stripping side can
//! always recover it.

use std::io::{Read, Write};

use crate::constants::DEFAULT_PIPE_CHUNK_SIZE;
use crate::pad::types::Pad;
use crate::stream::io::read_exact_or_eof;
use crate::types::StreamError;

/// Round `chunk_size` down to a multiple of `block_size` (at least one block).
/// A `chunk_size` of 0 selects `DEFAULT_PIPE_CHUNK_SIZE`.
pub fn normalize_chunk_size(chunk_size: usize, block_size: usize) -> Result<usize, StreamError> {
    if block_size == 0 {
        return Err(StreamError::Validation("block size must be positive".into()));
    }
    let chunk_size = if chunk_size == 0 { DEFAULT_PIPE_CHUNK_SIZE } else { chunk_size };
    Ok((chunk_size - chunk_size % block_size).max(block_size))
}

/// Copy `src` into `dst`, padding the final chunk. Returns bytes written.
pub fn pipe_pad<P, R, W>(
    pad: &P,
    block_size: usize,
    chunk_size: usize,
    src: &mut R,
    dst: &mut W,
) -> Result<u64, StreamError>
where
    P: Pad + ?Sized,
    R: Read + ?Sized,
    W: Write + ?Sized,
{
    let chunk_size = normalize_chunk_size(chunk_size, block_size)?;
    let mut written = 0u64;

    loop {
        let chunk = read_exact_or_eof(src, chunk_size)?;

        // A short read only happens at EOF: this is the final chunk.
        if chunk.len() < chunk_size {
            let padded = pad.pad(&chunk, block_size)?;
            dst.write_all(&padded)?;
            written += padded.len() as u64;
            break;
        }

        dst.write_all(&chunk)?;
        written += chunk.len() as u64;
    }

    dst.flush()?;
    tracing::debug!(written, chunk_size, block_size, "pipe_pad finished");
    Ok(written)
}

/// Copy `src` into `dst`, stripping the padding from the final chunk.
/// Returns bytes written.
pub fn pipe_strip<P, R, W>(
    pad: &P,
    block_size: usize,
    chunk_size: usize,
    src: &mut R,
    dst: &mut W,
) -> Result<u64, StreamError>
where
    P: Pad + ?Sized,
    R: Read + ?Sized,
    W: Write + ?Sized,
{
    let chunk_size = normalize_chunk_size(chunk_size, block_size)?;
    let mut written = 0u64;

    // One chunk of look-ahead: the final chunk may be exactly `chunk_size`.
    let mut current = read_exact_or_eof(src, chunk_size)?;
    loop {
        let next = if current.len() < chunk_size {
            None
        } else {
            Some(read_exact_or_eof(src, chunk_size)?).filter(|n| !n.is_empty())
        };

        match next {
            Some(next) => {
                dst.write_all(&current)?;
                written += current.len() as u64;
                current = next;
            }
            None => {
                let stripped = pad.strip(&current, block_size)?;
                dst.write_all(&stripped)?;
                written += stripped.len() as u64;
                break;
            }
        }
    }

    dst.flush()?;
    tracing::debug!(written, chunk_size, block_size, "pipe_strip finished");
    Ok(written)
}
