//! Lazy chunk-stream engine.
//!
//! Responsibilities:
//! - Rechunk, map, filter and compose lazy chunk sequences
//! - Base64 text framing and length-prefixed record framing
//! - Bind a `Crypt` capability to encrypt/decrypt transforms
//! - Adapt raw readers and writers at the boundary
//!
//! Non-responsibilities:
//! - Cipher internals (see `crypto`)
//! - Padding policy (see `pad`)

pub mod rechunk;
pub mod combinators;
pub mod pipeline;
pub mod io;
pub mod base64;
pub mod framing;
pub mod crypt_stream;
pub mod core;

pub use rechunk::{chunk_stream, rechunk, Rechunk};
pub use combinators::{boxed, filter_stream, map_stream, pipe_stream, skip_empty, MapChunks};
pub use pipeline::StreamPipe;
pub use io::{
    open_input, open_output, read_stream, str_stream, stream_to_vec, write_stream, InputSource,
    OutputSink,
};
pub use self::base64::{base64_decode_stream, base64_encode_stream, to_nearest_multiple, Base64Stream};
pub use framing::{add_chunk_header_stream, header_chunk_stream, FramingError};
pub use crypt_stream::{
    decrypt_stream, encrypt_stream, CryptStream, CryptStreamConfig, DecryptFraming, FramingMode,
    StreamCrypt,
};
pub use self::core::{decrypt_source, encrypt_source};
