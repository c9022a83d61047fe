//! Boundary adapters between raw I/O resources and chunk sequences.
//!
//! These are the only places the engine touches real I/O; everything else is
//! pure transform logic.

use std::io::{self, Cursor, Read, Write};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use bytes::Bytes;

use crate::types::{ChunkResult, ChunkStream, StreamError};

/// Canonical input abstraction
pub enum InputSource {
    Reader(Box<dyn Read + Send>),
    File(PathBuf),
    Memory(Vec<u8>),
}

/// Canonical output abstraction
pub enum OutputSink {
    Writer(Box<dyn Write + Send>),
    File(PathBuf),
    /// Capture output in a shared in-memory buffer.
    Memory,
}

/// Shared buffer behind `OutputSink::Memory`.
pub type SharedBuffer = Arc<Mutex<Vec<u8>>>;

/// Normalize input source into a boxed reader
pub fn open_input(src: InputSource) -> Result<Box<dyn Read + Send>, StreamError> {
    let reader: Box<dyn Read + Send> = match src {
        InputSource::Reader(r) => r,
        InputSource::File(p) => Box::new(std::fs::File::open(p)?),
        InputSource::Memory(b) => Box::new(Cursor::new(b)),
    };
    Ok(reader)
}

/// Normalize output sink into a boxed writer, plus the capture buffer for
/// `OutputSink::Memory`.
pub fn open_output(
    sink: OutputSink,
) -> Result<(Box<dyn Write + Send>, Option<SharedBuffer>), StreamError> {
    match sink {
        OutputSink::Writer(w) => Ok((w, None)),
        OutputSink::File(p) => Ok((Box::new(std::fs::File::create(p)?), None)),
        OutputSink::Memory => {
            let buf: SharedBuffer = Arc::new(Mutex::new(Vec::new()));
            let writer = SharedBufferWriter { buf: buf.clone() };
            Ok((Box::new(writer), Some(buf)))
        }
    }
}

pub struct SharedBufferWriter {
    buf: SharedBuffer,
}

impl Write for SharedBufferWriter {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        let mut guard = self
            .buf
            .lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "output buffer poisoned"))?;
        guard.extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Read up to `len` bytes, looping over short reads. Returns fewer than
/// `len` bytes only at EOF.
pub fn read_exact_or_eof<R: Read + ?Sized>(r: &mut R, len: usize) -> Result<Bytes, StreamError> {
    let mut buf = vec![0u8; len];
    let mut off = 0;

    while off < len {
        let n = match r.read(&mut buf[off..]) {
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        };
        if n == 0 {
            break;
        }
        off += n;
    }

    buf.truncate(off);
    Ok(Bytes::from(buf))
}

/// Chunk sequence over a `Read`: reads of `size` bytes until exhaustion.
#[derive(Debug)]
pub struct ReadChunks<R> {
    reader: R,
    size: usize,
    done: bool,
}

impl<R: Read> ReadChunks<R> {
    pub fn new(reader: R, size: usize) -> Self {
        Self {
            reader,
            size: size.max(1),
            done: false,
        }
    }
}

impl<R: Read> Iterator for ReadChunks<R> {
    type Item = ChunkResult;

    fn next(&mut self) -> Option<ChunkResult> {
        if self.done {
            return None;
        }

        match read_exact_or_eof(&mut self.reader, self.size) {
            Ok(chunk) if chunk.is_empty() => {
                self.done = true;
                None
            }
            Ok(chunk) => {
                if chunk.len() < self.size {
                    self.done = true;
                }
                Some(Ok(chunk))
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

/// Lazily read `reader` in chunks of `size` bytes.
pub fn read_stream<'a, R: Read + 'a>(reader: R, size: usize) -> ChunkStream<'a> {
    Box::new(ReadChunks::new(reader, size))
}

/// Split an in-memory value into chunks of `chunk_size` (zero-copy slices).
/// `None` (or `Some(0)`) yields the whole value as one chunk. An empty value
/// yields nothing.
pub fn str_stream(data: impl Into<Bytes>, chunk_size: Option<usize>) -> ChunkStream<'static> {
    let data: Bytes = data.into();
    let len = data.len();
    let step = match chunk_size {
        Some(n) if n > 0 => n,
        _ => len.max(1),
    };

    Box::new(
        (0..len)
            .step_by(step)
            .map(move |start| -> ChunkResult { Ok(data.slice(start..(start + step).min(len))) }),
    )
}

/// Drain a chunk sequence into one buffer, stopping at the first error.
pub fn stream_to_vec<I>(chunks: I) -> Result<Vec<u8>, StreamError>
where
    I: IntoIterator<Item = ChunkResult>,
{
    let mut out = Vec::new();
    for chunk in chunks {
        out.extend_from_slice(&chunk?);
    }
    Ok(out)
}

/// Write every chunk in order; terminal stage of a pipeline.
/// Returns bytes written.
pub fn write_stream<W, I>(writer: &mut W, chunks: I) -> Result<u64, StreamError>
where
    W: Write + ?Sized,
    I: IntoIterator<Item = ChunkResult>,
{
    let mut written = 0u64;
    for chunk in chunks {
        let chunk = chunk?;
        writer.write_all(&chunk)?;
        written += chunk.len() as u64;
    }
    writer.flush()?;
    Ok(written)
}
