//! Fixed-size rechunking: the primitive every framing codec is built on.

use bytes::BytesMut;

use crate::types::{ChunkResult, ChunkStream, StreamError};

/// Iterator that regroups arbitrary input chunks into chunks of exactly
/// `size` bytes, followed by at most one shorter tail chunk.
///
/// The buffer never holds more than `size` bytes plus one input chunk.
#[derive(Debug)]
pub struct Rechunk<I> {
    inner: I,
    size: usize,
    buf: BytesMut,
    done: bool,
}

fn check_size(size: usize) -> Result<(), StreamError> {
    if size == 0 {
        return Err(StreamError::Validation("chunk size must be positive".into()));
    }
    Ok(())
}

impl<I> Rechunk<I>
where
    I: Iterator<Item = ChunkResult>,
{
    /// Fails with `StreamError::Validation` when `size == 0`.
    pub fn new(inner: I, size: usize) -> Result<Self, StreamError> {
        check_size(size)?;
        Ok(Self::sized(inner, size))
    }

    /// Caller has already checked `size > 0`.
    pub(crate) fn sized(inner: I, size: usize) -> Self {
        Self {
            inner,
            size,
            buf: BytesMut::with_capacity(size),
            done: false,
        }
    }
}

impl<I> Iterator for Rechunk<I>
where
    I: Iterator<Item = ChunkResult>,
{
    type Item = ChunkResult;

    fn next(&mut self) -> Option<ChunkResult> {
        loop {
            // Strictly greater: a buffer of exactly `size` waits for either
            // more input or exhaustion before it is released.
            if self.buf.len() > self.size {
                return Some(Ok(self.buf.split_to(self.size).freeze()));
            }

            if self.done {
                return None;
            }

            match self.inner.next() {
                Some(Ok(chunk)) => self.buf.extend_from_slice(&chunk),
                Some(Err(e)) => {
                    self.done = true;
                    self.buf.clear();
                    return Some(Err(e));
                }
                None => {
                    self.done = true;
                    if self.buf.is_empty() {
                        return None;
                    }
                    return Some(Ok(self.buf.split().freeze()));
                }
            }
        }
    }
}

/// Transform that rechunks a stream to `size`-byte chunks.
///
/// Fails with `StreamError::Validation` when `size == 0`.
pub fn chunk_stream<'a>(
    size: usize,
) -> Result<impl FnOnce(ChunkStream<'a>) -> ChunkStream<'a> + 'a, StreamError> {
    check_size(size)?;
    Ok(move |chunks: ChunkStream<'a>| -> ChunkStream<'a> { Box::new(Rechunk::sized(chunks, size)) })
}

/// Convenience: rechunk an owned iterator directly.
pub fn rechunk<'a, I>(chunks: I, size: usize) -> Result<ChunkStream<'a>, StreamError>
where
    I: Iterator<Item = ChunkResult> + 'a,
{
    Ok(Box::new(Rechunk::new(chunks, size)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;

    fn chunks(parts: &[&'static [u8]]) -> Vec<ChunkResult> {
        parts.iter().map(|p| Ok(Bytes::from_static(*p))).collect()
    }

    #[test]
    fn exact_multiple_keeps_last_full_chunk() {
        let out: Vec<Bytes> = Rechunk::sized(chunks(&[b"abcd", b"efgh"]).into_iter(), 4)
            .map(Result::unwrap)
            .collect();
        assert_eq!(out, vec![Bytes::from_static(b"abcd"), Bytes::from_static(b"efgh")]);
    }

    #[test]
    fn empty_input_chunks_emit_nothing() {
        let mut it = Rechunk::sized(chunks(&[b"", b""]).into_iter(), 3);
        assert!(it.next().is_none());
    }

    #[test]
    fn upstream_error_ends_the_sequence() {
        let input = vec![
            Ok(Bytes::from_static(b"ab")),
            Err(StreamError::Validation("boom".into())),
            Ok(Bytes::from_static(b"cd")),
        ];
        let mut it = Rechunk::sized(input.into_iter(), 1);
        assert_eq!(it.next().unwrap().unwrap(), Bytes::from_static(b"a"));
        assert!(it.next().unwrap().is_err());
        assert!(it.next().is_none());
    }
}
