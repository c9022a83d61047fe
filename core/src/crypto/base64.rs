use base64::{engine::general_purpose::STANDARD, Engine};

use crate::crypto::types::{Crypt, CryptoError};

/// Wraps a capability so its ciphertext travels as standard base64 text.
#[derive(Debug, Clone)]
pub struct Base64Crypt<C> {
    inner: C,
}

impl<C: Crypt> Base64Crypt<C> {
    pub fn new(inner: C) -> Self {
        Self { inner }
    }

    pub fn into_inner(self) -> C {
        self.inner
    }
}

impl<C: Crypt> Crypt for Base64Crypt<C> {
    fn encrypt(&self, data: &[u8]) -> Result<Vec<u8>, CryptoError> {
        let ciphertext = self.inner.encrypt(data)?;
        Ok(STANDARD.encode(ciphertext).into_bytes())
    }

    fn decrypt(&self, data: &[u8]) -> Result<Vec<u8>, CryptoError> {
        let ciphertext = STANDARD.decode(data)?;
        self.inner.decrypt(&ciphertext)
    }
}
