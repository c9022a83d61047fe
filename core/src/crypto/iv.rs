use rand::rngs::OsRng;
use rand::RngCore;

use crate::constants::AES_IV_LEN;
use crate::crypto::types::CryptoError;

/// Where a block-cipher backend takes its per-call IV from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum IvSource {
    /// Fresh IV from the OS random source on every call.
    #[default]
    Random,
    /// The same IV on every call. Deterministic; only for tests and vectors.
    Static([u8; AES_IV_LEN]),
}

impl IvSource {
    pub fn generate(&self) -> Result<[u8; AES_IV_LEN], CryptoError> {
        match self {
            IvSource::Random => {
                let mut iv = [0u8; AES_IV_LEN];
                OsRng
                    .try_fill_bytes(&mut iv)
                    .map_err(|e| CryptoError::Random(e.to_string()))?;
                Ok(iv)
            }
            IvSource::Static(iv) => Ok(*iv),
        }
    }
}
