//! Block-alignment padding.
//!
//! Responsibilities:
//! - Define the `Pad` capability consumed by block-cipher `Crypt` backends
//! - Provide the PKCS#7, null-byte and no-op policies
//! - Pad/strip raw `Read`/`Write` streams
//!
//! Non-responsibilities:
//! - Cryptography
//! - Chunk framing

pub mod types;
pub mod pkcs7;
pub mod null_byte;
pub mod no_pad;
pub mod pipe;

pub use types::{Pad, PadError};
pub use pkcs7::Pkcs7Pad;
pub use null_byte::NullBytePad;
pub use no_pad::NoPad;
pub use pipe::{pipe_pad, pipe_strip};
