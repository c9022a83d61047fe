/// Reversible block-alignment padding.
///
/// `pad` returns a value whose length is a positive multiple of `block_size`
/// and strictly longer than the input, so stripping is never ambiguous about
/// whether padding was added. `strip` is the exact left inverse of `pad` and
/// must fail rather than truncate when the trailer is malformed.
pub trait Pad {
    fn pad(&self, value: &[u8], block_size: usize) -> Result<Vec<u8>, PadError>;
    fn strip(&self, value: &[u8], block_size: usize) -> Result<Vec<u8>, PadError>;
}

impl<P: Pad + ?Sized> Pad for &P {
    fn pad(&self, value: &[u8], block_size: usize) -> Result<Vec<u8>, PadError> {
        (**self).pad(value, block_size)
    }

    fn strip(&self, value: &[u8], block_size: usize) -> Result<Vec<u8>, PadError> {
        (**self).strip(value, block_size)
    }
}

impl<P: Pad + ?Sized> Pad for Box<P> {
    fn pad(&self, value: &[u8], block_size: usize) -> Result<Vec<u8>, PadError> {
        (**self).pad(value, block_size)
    }

    fn strip(&self, value: &[u8], block_size: usize) -> Result<Vec<u8>, PadError> {
        (**self).strip(value, block_size)
    }
}

/// Number of pad bytes `pad` appends: always in `1..=block_size`.
#[inline]
pub fn pad_len(value_len: usize, block_size: usize) -> usize {
    block_size - value_len % block_size
}

/// Shared alignment check used by every `strip`.
#[inline]
pub(crate) fn ensure_aligned(value: &[u8], block_size: usize) -> Result<(), PadError> {
    if block_size == 0 {
        return Err(PadError::InvalidBlockSize { block_size });
    }
    if value.len() % block_size != 0 {
        return Err(PadError::Misaligned {
            len: value.len(),
            block_size,
        });
    }
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PadError {
    /// Value length is not a multiple of the block size.
    #[error("value of {len} bytes is not padded to block size {block_size}")]
    Misaligned { len: usize, block_size: usize },

    /// Trailer does not describe valid padding.
    #[error("invalid padding: {0}")]
    InvalidPadding(String),

    /// Block size is zero or out of range for the policy.
    #[error("invalid block size: {block_size}")]
    InvalidBlockSize { block_size: usize },
}
