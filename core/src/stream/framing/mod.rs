//! Record framing for encrypted chunk streams.
//!
//! Responsibilities:
//! - Prefix each record with its 4-byte little-endian length
//! - Split a header-framed stream back into whole records
//! - Reject streams that end inside a header or a record body
//!
//! Non-responsibilities:
//! - Cryptography
//! - Fixed-size framing (see `stream::rechunk`)
//! - IO

pub mod types;
pub mod encode;
pub mod decode;

pub use types::{ChunkHeader, FramingError};
pub use encode::{add_chunk_header_stream, encode_chunk_header};
pub use decode::{header_chunk_stream, header_chunk_stream_with_limit, HeaderChunker};
