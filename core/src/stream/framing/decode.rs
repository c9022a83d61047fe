use bytes::{Buf, BytesMut};
use tracing::{trace, warn};

use crate::stream::framing::types::{ChunkHeader, FramingError};
use crate::types::{ChunkResult, ChunkStream};

/// Splits a header-framed byte stream back into its records.
///
/// Input chunk boundaries are arbitrary: a header or record body may be split
/// across any number of input chunks. The stream must end exactly on a
/// record boundary.
#[derive(Debug)]
pub struct HeaderChunker<I> {
    inner: I,
    buf: BytesMut,
    /// Payload length of the record currently being accumulated.
    pending: Option<usize>,
    max_record_len: Option<usize>,
    done: bool,
}

impl<I> HeaderChunker<I>
where
    I: Iterator<Item = ChunkResult>,
{
    pub fn new(inner: I, max_record_len: Option<usize>) -> Self {
        Self {
            inner,
            buf: BytesMut::new(),
            pending: None,
            max_record_len,
            done: false,
        }
    }

    fn fail(&mut self, err: FramingError) -> Option<ChunkResult> {
        warn!(error = %err, "rejecting header-framed stream");
        self.done = true;
        self.buf.clear();
        self.pending = None;
        Some(Err(err.into()))
    }
}

impl<I> Iterator for HeaderChunker<I>
where
    I: Iterator<Item = ChunkResult>,
{
    type Item = ChunkResult;

    fn next(&mut self) -> Option<ChunkResult> {
        loop {
            if self.done {
                return None;
            }

            if self.pending.is_none() && self.buf.len() >= ChunkHeader::LEN {
                let header = match ChunkHeader::parse(&self.buf) {
                    Ok(h) => h,
                    Err(e) => return self.fail(e),
                };
                self.buf.advance(ChunkHeader::LEN);
                let len = header.payload_len();

                if let Some(max) = self.max_record_len {
                    if len > max {
                        return self.fail(FramingError::RecordTooLarge { len, max });
                    }
                }
                if len == 0 {
                    trace!("skipping zero-length record");
                    continue;
                }
                self.pending = Some(len);
                continue;
            }

            if let Some(len) = self.pending {
                if self.buf.len() >= len {
                    self.pending = None;
                    trace!(len, "emitting record");
                    return Some(Ok(self.buf.split_to(len).freeze()));
                }
            }

            match self.inner.next() {
                Some(Ok(chunk)) => self.buf.extend_from_slice(&chunk),
                Some(Err(e)) => {
                    self.done = true;
                    self.buf.clear();
                    return Some(Err(e));
                }
                None => {
                    if self.buf.is_empty() && self.pending.is_none() {
                        self.done = true;
                        return None;
                    }
                    let err = FramingError::Truncated {
                        buffered: self.buf.len(),
                        expected: self.pending,
                    };
                    return self.fail(err);
                }
            }
        }
    }
}

/// Recover records from a header-framed stream.
pub fn header_chunk_stream<'a>(chunks: ChunkStream<'a>) -> ChunkStream<'a> {
    Box::new(HeaderChunker::new(chunks, None))
}

/// Like [`header_chunk_stream`], rejecting any record longer than
/// `max_record_len` as soon as its header is read.
pub fn header_chunk_stream_with_limit<'a>(
    max_record_len: Option<usize>,
) -> impl FnOnce(ChunkStream<'a>) -> ChunkStream<'a> + 'a {
    move |chunks: ChunkStream<'a>| -> ChunkStream<'a> {
        Box::new(HeaderChunker::new(chunks, max_record_len))
    }
}
