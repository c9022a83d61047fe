use crate::crypto::types::{Crypt, CryptoError};

/// Restricts a capability to encryption, e.g. when only a public key exists.
#[derive(Debug, Clone)]
pub struct EncryptOnlyCrypt<C> {
    inner: C,
}

impl<C: Crypt> EncryptOnlyCrypt<C> {
    pub fn new(inner: C) -> Self {
        Self { inner }
    }
}

impl<C: Crypt> Crypt for EncryptOnlyCrypt<C> {
    fn encrypt(&self, data: &[u8]) -> Result<Vec<u8>, CryptoError> {
        self.inner.encrypt(data)
    }

    fn decrypt(&self, _data: &[u8]) -> Result<Vec<u8>, CryptoError> {
        Err(CryptoError::UnsupportedOperation(
            "this crypt can only be used for encrypting",
        ))
    }
}
