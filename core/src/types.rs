use std::io;

use bytes::Bytes;

use crate::{
    crypto::CryptoError,
    pad::PadError,
    stream::framing::FramingError,
};

/// Unified stream error covering I/O, padding, crypto, framing, decoding and
/// configuration validation.
/// - `From<T>` impls enable `?` across the pipeline.
/// - Messages are stable so they can be matched in logs.
#[derive(Debug, thiserror::Error)]
pub enum StreamError {
    /// I/O error from a raw source or sink.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Padding could not be applied or stripped.
    #[error("pad error: {0}")]
    Pad(#[from] PadError),

    /// A `Crypt` capability rejected the chunk.
    #[error("crypto error: {0}")]
    Crypto(#[from] CryptoError),

    /// Header-framed stream ended off a record boundary or declared a bad length.
    #[error("framing error: {0}")]
    Framing(#[from] FramingError),

    /// Malformed base64 inside a textual chunk.
    #[error("decode error: {0}")]
    Decode(#[from] base64::DecodeError),

    /// Generic configuration validation with a descriptive message.
    #[error("validation error: {0}")]
    Validation(String),
}

/// One pulled element of a chunk sequence.
pub type ChunkResult = Result<Bytes, StreamError>;

/// Lazy, forward-only, single-traversal sequence of byte chunks.
///
/// Iterating moves the value, so the underlying source can only be
/// traversed once.
pub type ChunkStream<'a> = Box<dyn Iterator<Item = ChunkResult> + 'a>;

/// A boxed transform from one chunk sequence to another.
pub type BoxTransform<'a> = Box<dyn FnOnce(ChunkStream<'a>) -> ChunkStream<'a> + 'a>;
