use crate::constants::PKCS7_MAX_BLOCK;
use crate::pad::types::{ensure_aligned, pad_len, Pad, PadError};

/// PKCS#7 padding: every pad byte carries the pad length.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Pkcs7Pad;

impl Pad for Pkcs7Pad {
    fn pad(&self, value: &[u8], block_size: usize) -> Result<Vec<u8>, PadError> {
        if block_size == 0 || block_size > PKCS7_MAX_BLOCK {
            return Err(PadError::InvalidBlockSize { block_size });
        }

        let n = pad_len(value.len(), block_size);
        let mut out = Vec::with_capacity(value.len() + n);
        out.extend_from_slice(value);
        out.resize(value.len() + n, n as u8);
        Ok(out)
    }

    fn strip(&self, value: &[u8], block_size: usize) -> Result<Vec<u8>, PadError> {
        ensure_aligned(value, block_size)?;

        let Some(&last) = value.last() else {
            return Err(PadError::InvalidPadding("empty value carries no padding".into()));
        };

        let n = last as usize;
        if n == 0 || n > block_size || n > value.len() {
            return Err(PadError::InvalidPadding(format!(
                "pad length {n} out of range for block size {block_size}"
            )));
        }

        let (body, trailer) = value.split_at(value.len() - n);
        if trailer.iter().any(|&b| b != last) {
            return Err(PadError::InvalidPadding(format!(
                "expected {n} trailing bytes of value {n}"
            )));
        }

        Ok(body.to_vec())
    }
}
