//! Wiring a `Crypt` capability into encrypt/decrypt stream transforms.
//!
//! Two framings are supported:
//! - Fixed: plaintext is rechunked to `chunk_size`; the decoder must know
//!   the per-record `overhead` to rechunk ciphertext to `chunk_size + overhead`.
//! - Header: every record carries a 4-byte little-endian length prefix, so
//!   the decoder needs no size knowledge.

use std::cell::Cell;
use std::io::{Read, Write};
use std::rc::Rc;

use bytes::Bytes;
use tracing::debug;

use crate::constants::{DEFAULT_CHUNK_SIZE, DEFAULT_READ_SIZE};
use crate::crypto::Crypt;
use crate::stream::combinators::{skip_empty, MapChunks};
use crate::stream::framing::{add_chunk_header_stream, HeaderChunker};
use crate::stream::io::read_stream;
use crate::stream::rechunk::Rechunk;
use crate::telemetry::{Stage, StreamCounters, TelemetrySnapshot, TelemetryTimer};
use crate::types::{ChunkResult, ChunkStream, StreamError};

/// How the decrypting side recovers record boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecryptFraming {
    /// Records of exactly `chunk_size + overhead` bytes, last one may be short.
    Fixed { chunk_size: usize, overhead: usize },
    /// Length-prefixed records, optionally capped at `max_record_len`.
    Header { max_record_len: Option<usize> },
}

/// Framing selection for a [`CryptStream`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FramingMode {
    /// Fixed-size records; `overhead` is what one `encrypt` call adds.
    Fixed { overhead: usize },
    Header,
}

impl Default for FramingMode {
    fn default() -> Self {
        FramingMode::Header
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CryptStreamConfig {
    /// Plaintext bytes per encrypted record.
    pub chunk_size: usize,
    pub framing: FramingMode,
    /// Bytes per read from a raw source.
    pub read_size: usize,
    /// Header mode only: reject records declaring more than this.
    pub max_record_len: Option<usize>,
}

impl Default for CryptStreamConfig {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            framing: FramingMode::Header,
            read_size: DEFAULT_READ_SIZE,
            max_record_len: None,
        }
    }
}

impl CryptStreamConfig {
    pub fn header(chunk_size: usize) -> Self {
        Self {
            chunk_size,
            ..Self::default()
        }
    }

    pub fn fixed(chunk_size: usize, overhead: usize) -> Self {
        Self {
            chunk_size,
            framing: FramingMode::Fixed { overhead },
            ..Self::default()
        }
    }

    pub fn with_read_size(mut self, read_size: usize) -> Self {
        self.read_size = read_size;
        self
    }

    pub fn with_max_record_len(mut self, max: usize) -> Self {
        self.max_record_len = Some(max);
        self
    }

    pub fn validate(&self) -> Result<(), StreamError> {
        if self.chunk_size == 0 {
            return Err(StreamError::Validation("chunk size must be positive".into()));
        }
        if self.read_size == 0 {
            return Err(StreamError::Validation("read size must be positive".into()));
        }
        if let FramingMode::Fixed { overhead } = self.framing {
            if self.chunk_size.checked_add(overhead).is_none() {
                return Err(StreamError::Validation(format!(
                    "chunk size {} plus overhead {overhead} overflows",
                    self.chunk_size
                )));
            }
            if self.max_record_len.is_some() {
                return Err(StreamError::Validation(
                    "max record length applies to header framing only".into(),
                ));
            }
        }
        if self.max_record_len == Some(0) {
            return Err(StreamError::Validation("max record length must be positive".into()));
        }
        Ok(())
    }

    fn decrypt_framing(&self) -> DecryptFraming {
        match self.framing {
            FramingMode::Fixed { overhead } => DecryptFraming::Fixed {
                chunk_size: self.chunk_size,
                overhead,
            },
            FramingMode::Header => DecryptFraming::Header {
                max_record_len: self.max_record_len,
            },
        }
    }
}

fn encrypt_transform<'a, C>(
    crypt: C,
    chunk_size: usize,
    header: bool,
) -> impl FnOnce(ChunkStream<'a>) -> ChunkStream<'a> + 'a
where
    C: Crypt + 'a,
{
    move |chunks: ChunkStream<'a>| -> ChunkStream<'a> {
        let encrypt_chunk = move |chunk: Bytes| -> ChunkResult {
            Ok(Bytes::from(crypt.encrypt(&chunk)?))
        };
        let records = skip_empty(Box::new(MapChunks::new(
            Rechunk::sized(chunks, chunk_size),
            encrypt_chunk,
        )));
        if header {
            add_chunk_header_stream(records)
        } else {
            records
        }
    }
}

fn decrypt_transform<'a, C>(
    crypt: C,
    framing: DecryptFraming,
) -> impl FnOnce(ChunkStream<'a>) -> ChunkStream<'a> + 'a
where
    C: Crypt + 'a,
{
    move |chunks: ChunkStream<'a>| -> ChunkStream<'a> {
        let records: ChunkStream<'a> = match framing {
            DecryptFraming::Fixed { chunk_size, overhead } => {
                Box::new(Rechunk::sized(chunks, chunk_size + overhead))
            }
            DecryptFraming::Header { max_record_len } => {
                Box::new(HeaderChunker::new(chunks, max_record_len))
            }
        };
        // A record may decrypt to nothing (e.g. all-zero data under NullBytePad).
        skip_empty(Box::new(MapChunks::new(records, move |chunk: Bytes| -> ChunkResult {
            Ok(Bytes::from(crypt.decrypt(&chunk)?))
        })))
    }
}

/// Transform encrypting a plaintext stream record by record.
///
/// Plaintext is rechunked to `chunk_size` and each chunk is encrypted
/// independently. `FramingMode::Header` prefixes each record with its length;
/// the `overhead` of `FramingMode::Fixed` only matters to the decrypting side.
pub fn encrypt_stream<'a, C>(
    crypt: C,
    chunk_size: usize,
    framing: FramingMode,
) -> Result<impl FnOnce(ChunkStream<'a>) -> ChunkStream<'a> + 'a, StreamError>
where
    C: Crypt + 'a,
{
    if chunk_size == 0 {
        return Err(StreamError::Validation("chunk size must be positive".into()));
    }
    debug!(chunk_size, ?framing, "building encrypt stream");
    Ok(encrypt_transform(crypt, chunk_size, framing == FramingMode::Header))
}

/// Transform decrypting a record stream produced by [`encrypt_stream`].
pub fn decrypt_stream<'a, C>(
    crypt: C,
    framing: DecryptFraming,
) -> Result<impl FnOnce(ChunkStream<'a>) -> ChunkStream<'a> + 'a, StreamError>
where
    C: Crypt + 'a,
{
    match framing {
        DecryptFraming::Fixed { chunk_size, overhead } => match chunk_size.checked_add(overhead) {
            Some(0) | None => {
                return Err(StreamError::Validation(format!(
                    "invalid fixed record size: {chunk_size} + {overhead}"
                )))
            }
            Some(_) => {}
        },
        DecryptFraming::Header { max_record_len: Some(0) } => {
            return Err(StreamError::Validation("max record length must be positive".into()))
        }
        DecryptFraming::Header { .. } => {}
    }
    debug!(?framing, "building decrypt stream");
    Ok(decrypt_transform(crypt, framing))
}

/// Whole-stream encryption between a raw reader and writer.
pub trait StreamCrypt {
    fn stream_encrypt(
        &self,
        src: &mut dyn Read,
        dst: &mut dyn Write,
    ) -> Result<TelemetrySnapshot, StreamError>;

    fn stream_decrypt(
        &self,
        src: &mut dyn Read,
        dst: &mut dyn Write,
    ) -> Result<TelemetrySnapshot, StreamError>;
}

/// A `Crypt` capability bound to one validated stream configuration.
#[derive(Debug, Clone)]
pub struct CryptStream<C> {
    crypt: C,
    config: CryptStreamConfig,
}

impl<C: Crypt> CryptStream<C> {
    pub fn new(crypt: C, config: CryptStreamConfig) -> Result<Self, StreamError> {
        config.validate()?;
        Ok(Self { crypt, config })
    }

    pub fn config(&self) -> &CryptStreamConfig {
        &self.config
    }

    pub fn crypt(&self) -> &C {
        &self.crypt
    }

    pub fn into_inner(self) -> C {
        self.crypt
    }

    pub fn encrypt<'a>(&'a self) -> impl FnOnce(ChunkStream<'a>) -> ChunkStream<'a> + 'a {
        let header = self.config.framing == FramingMode::Header;
        encrypt_transform(&self.crypt, self.config.chunk_size, header)
    }

    pub fn decrypt<'a>(&'a self) -> impl FnOnce(ChunkStream<'a>) -> ChunkStream<'a> + 'a {
        decrypt_transform(&self.crypt, self.config.decrypt_framing())
    }
}

/// Pull `transform(read_stream(src))` to completion into `dst`.
fn drain<'a, R, T>(
    src: &'a mut R,
    dst: &mut dyn Write,
    read_size: usize,
    transform: T,
) -> Result<TelemetrySnapshot, StreamError>
where
    R: Read + ?Sized,
    T: FnOnce(ChunkStream<'a>) -> ChunkStream<'a>,
{
    let mut timer = TelemetryTimer::new();
    let counters = Rc::new(Cell::new(StreamCounters::default()));

    let seen = Rc::clone(&counters);
    let source: ChunkStream<'a> = Box::new(read_stream(src, read_size).inspect(move |item| {
        if let Ok(chunk) = item {
            let mut c = seen.get();
            c.record_in(chunk.len());
            seen.set(c);
        }
    }));

    let mut out = transform(source);
    loop {
        let chunk = match timer.time(Stage::Process, || out.next()) {
            Some(item) => item?,
            None => break,
        };
        timer.time(Stage::Write, || dst.write_all(&chunk))?;
        let mut c = counters.get();
        c.record_out(chunk.len());
        counters.set(c);
    }
    timer.time(Stage::Write, || dst.flush())?;
    timer.finish();

    Ok(TelemetrySnapshot::from(&counters.get(), &timer))
}

impl<C: Crypt> StreamCrypt for CryptStream<C> {
    fn stream_encrypt(
        &self,
        src: &mut dyn Read,
        dst: &mut dyn Write,
    ) -> Result<TelemetrySnapshot, StreamError> {
        debug!(config = ?self.config, "stream encrypt start");
        let snapshot = drain(src, dst, self.config.read_size, self.encrypt())?;
        debug!(bytes_in = snapshot.bytes_in, bytes_out = snapshot.bytes_out, "stream encrypt done");
        Ok(snapshot)
    }

    fn stream_decrypt(
        &self,
        src: &mut dyn Read,
        dst: &mut dyn Write,
    ) -> Result<TelemetrySnapshot, StreamError> {
        debug!(config = ?self.config, "stream decrypt start");
        let snapshot = drain(src, dst, self.config.read_size, self.decrypt())?;
        debug!(bytes_in = snapshot.bytes_in, bytes_out = snapshot.bytes_out, "stream decrypt done");
        Ok(snapshot)
    }
}
