use crate::crypto::types::{Crypt, CryptoError};

/// Identity capability for exercising pipeline plumbing without a cipher.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NullCrypt;

impl Crypt for NullCrypt {
    fn encrypt(&self, data: &[u8]) -> Result<Vec<u8>, CryptoError> {
        Ok(data.to_vec())
    }

    fn decrypt(&self, data: &[u8]) -> Result<Vec<u8>, CryptoError> {
        Ok(data.to_vec())
    }
}
