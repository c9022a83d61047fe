//! stream-crypt
//!
//! Lazy, pull-based streaming encryption engine.
//! Chunk sequences are iterators; every transform is a function from one
//! sequence to another.

#![forbid(unsafe_code)]

// Shared and top level
pub mod constants;
pub mod types;

// Capabilities
pub mod pad;
pub mod crypto;

// Stream engine
pub mod stream;
pub mod telemetry;

// -----------------------------------------------------------------------------
// Prelude (Rust users)
// -----------------------------------------------------------------------------
pub mod prelude {
    pub use crate::crypto::{
        AesCbcCrypt, Base64Crypt, Crypt, CryptoError, EncryptOnlyCrypt, HmacAlg, HmacCrypt,
        IvSource, NullCrypt,
    };
    pub use crate::pad::{NoPad, NullBytePad, Pad, PadError, Pkcs7Pad};
    pub use crate::stream::{
        chunk_stream, decrypt_source, decrypt_stream, encrypt_source, encrypt_stream,
        filter_stream, map_stream, pipe_stream, str_stream, stream_to_vec, Base64Stream,
        CryptStream, CryptStreamConfig, DecryptFraming, FramingMode, InputSource, OutputSink,
        StreamCrypt, StreamPipe,
    };
    pub use crate::telemetry::TelemetrySnapshot;
    pub use crate::types::{ChunkStream, StreamError};
}
