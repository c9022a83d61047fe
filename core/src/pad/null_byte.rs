use crate::pad::types::{ensure_aligned, pad_len, Pad, PadError};

/// Zero-byte padding.
///
/// `strip` removes *every* trailing `0x00`, so a value that legitimately
/// ends in zero bytes loses them. Streams written with this policy depend on
/// that behavior, so it is kept as is.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NullBytePad;

impl Pad for NullBytePad {
    fn pad(&self, value: &[u8], block_size: usize) -> Result<Vec<u8>, PadError> {
        if block_size == 0 {
            return Err(PadError::InvalidBlockSize { block_size });
        }

        let mut out = value.to_vec();
        out.resize(value.len() + pad_len(value.len(), block_size), 0);
        Ok(out)
    }

    fn strip(&self, value: &[u8], block_size: usize) -> Result<Vec<u8>, PadError> {
        ensure_aligned(value, block_size)?;

        let end = value
            .iter()
            .rposition(|&b| b != 0)
            .map_or(0, |i| i + 1);
        Ok(value[..end].to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pads_with_zero_bytes() {
        assert_eq!(NullBytePad.pad(b"a", 2).unwrap(), b"a\0");
        assert_eq!(NullBytePad.strip(b"a\0", 2).unwrap(), b"a");
    }

    #[test]
    fn trailing_zero_plaintext_is_lost() {
        let padded = NullBytePad.pad(b"ab\0", 4).unwrap();
        assert_eq!(NullBytePad.strip(&padded, 4).unwrap(), b"ab");
    }
}
