use byteorder::{ByteOrder, LittleEndian};

use crate::constants::CHUNK_HEADER_LEN;

/// Length prefix in front of every header-framed record.
///
/// Wire layout: `u32` little-endian payload length, followed by the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkHeader {
    pub len: u32,
}

impl ChunkHeader {
    pub const LEN: usize = CHUNK_HEADER_LEN;

    /// Header for a payload of `len` bytes. Payloads above `u32::MAX` have no
    /// encoding.
    pub fn for_payload(len: usize) -> Result<Self, FramingError> {
        let len = u32::try_from(len).map_err(|_| FramingError::RecordTooLarge {
            len,
            max: u32::MAX as usize,
        })?;
        Ok(Self { len })
    }

    #[inline]
    pub fn to_le_bytes(self) -> [u8; CHUNK_HEADER_LEN] {
        let mut out = [0u8; CHUNK_HEADER_LEN];
        LittleEndian::write_u32(&mut out, self.len);
        out
    }

    /// Parse the first four bytes of `wire`.
    #[inline]
    pub fn parse(wire: &[u8]) -> Result<Self, FramingError> {
        if wire.len() < CHUNK_HEADER_LEN {
            return Err(FramingError::Truncated {
                buffered: wire.len(),
                expected: None,
            });
        }
        Ok(Self {
            len: LittleEndian::read_u32(&wire[..CHUNK_HEADER_LEN]),
        })
    }

    #[inline]
    pub fn payload_len(self) -> usize {
        self.len as usize
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FramingError {
    /// Stream ended inside a header (`expected == None`) or a record body.
    #[error("truncated stream: {buffered} bytes buffered, expected {expected:?}")]
    Truncated {
        buffered: usize,
        expected: Option<usize>,
    },

    #[error("record of {len} bytes exceeds limit of {max}")]
    RecordTooLarge { len: usize, max: usize },
}
