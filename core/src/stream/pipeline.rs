//! `StreamPipe`: a value wrapper for building chunk pipelines fluently.

use std::io::Write;

use crate::stream::io::{stream_to_vec, write_stream};
use crate::types::{ChunkResult, ChunkStream, StreamError};

/// Holds one lazy chunk sequence.
///
/// `pipe` consumes the wrapper and returns a new one around the transformed
/// sequence, so a sequence can be traversed at most once.
pub struct StreamPipe<'a> {
    stream: ChunkStream<'a>,
}

impl<'a> StreamPipe<'a> {
    pub fn new<I>(chunks: I) -> Self
    where
        I: IntoIterator<Item = ChunkResult>,
        I::IntoIter: 'a,
    {
        Self {
            stream: Box::new(chunks.into_iter()),
        }
    }

    pub fn from_stream(stream: ChunkStream<'a>) -> Self {
        Self { stream }
    }

    /// Wrap `transform(self)` in a new pipe.
    pub fn pipe<T>(self, transform: T) -> Self
    where
        T: FnOnce(ChunkStream<'a>) -> ChunkStream<'a>,
    {
        Self {
            stream: transform(self.stream),
        }
    }

    pub fn into_stream(self) -> ChunkStream<'a> {
        self.stream
    }

    /// Drain the pipe into one buffer.
    pub fn collect_bytes(self) -> Result<Vec<u8>, StreamError> {
        stream_to_vec(self.stream)
    }

    /// Drain the pipe into a writer; returns bytes written.
    pub fn write_to<W: Write + ?Sized>(self, writer: &mut W) -> Result<u64, StreamError> {
        write_stream(writer, self.stream)
    }
}

impl<'a> IntoIterator for StreamPipe<'a> {
    type Item = ChunkResult;
    type IntoIter = ChunkStream<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.stream
    }
}

impl std::fmt::Debug for StreamPipe<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StreamPipe").finish_non_exhaustive()
    }
}
