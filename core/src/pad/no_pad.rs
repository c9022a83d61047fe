use crate::pad::types::{Pad, PadError};

/// Identity padding for callers that guarantee block alignment themselves.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoPad;

impl Pad for NoPad {
    fn pad(&self, value: &[u8], _block_size: usize) -> Result<Vec<u8>, PadError> {
        Ok(value.to_vec())
    }

    fn strip(&self, value: &[u8], _block_size: usize) -> Result<Vec<u8>, PadError> {
        Ok(value.to_vec())
    }
}
