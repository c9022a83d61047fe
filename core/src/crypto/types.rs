//! crypto/types.rs
//! The `Crypt` capability and its error type.

use std::rc::Rc;
use std::sync::Arc;

use crate::pad::PadError;

/// Encrypt/decrypt contract shared by cipher backends and decorators.
///
/// Contract:
/// - `decrypt(encrypt(x)) == x` for any `x` on the *same configured instance*.
/// - Implementations are stateless across calls; per-call randomness (IVs)
///   travels inside the returned ciphertext.
/// - Cross-instance compatibility holds only when key, cipher and IV policy
///   match exactly.
pub trait Crypt {
    fn encrypt(&self, data: &[u8]) -> Result<Vec<u8>, CryptoError>;
    fn decrypt(&self, data: &[u8]) -> Result<Vec<u8>, CryptoError>;
}

impl<C: Crypt + ?Sized> Crypt for &C {
    fn encrypt(&self, data: &[u8]) -> Result<Vec<u8>, CryptoError> {
        (**self).encrypt(data)
    }

    fn decrypt(&self, data: &[u8]) -> Result<Vec<u8>, CryptoError> {
        (**self).decrypt(data)
    }
}

impl<C: Crypt + ?Sized> Crypt for Box<C> {
    fn encrypt(&self, data: &[u8]) -> Result<Vec<u8>, CryptoError> {
        (**self).encrypt(data)
    }

    fn decrypt(&self, data: &[u8]) -> Result<Vec<u8>, CryptoError> {
        (**self).decrypt(data)
    }
}

impl<C: Crypt + ?Sized> Crypt for Rc<C> {
    fn encrypt(&self, data: &[u8]) -> Result<Vec<u8>, CryptoError> {
        (**self).encrypt(data)
    }

    fn decrypt(&self, data: &[u8]) -> Result<Vec<u8>, CryptoError> {
        (**self).decrypt(data)
    }
}

impl<C: Crypt + ?Sized> Crypt for Arc<C> {
    fn encrypt(&self, data: &[u8]) -> Result<Vec<u8>, CryptoError> {
        (**self).encrypt(data)
    }

    fn decrypt(&self, data: &[u8]) -> Result<Vec<u8>, CryptoError> {
        (**self).decrypt(data)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CryptoError {
    /// Padding failed inside a block-cipher backend.
    #[error(transparent)]
    Pad(#[from] PadError),

    /// Keyed signature did not verify (tamper or corruption).
    #[error("signature mismatch")]
    Signature,

    /// Operation not available on this capability.
    #[error("unsupported operation: {0}")]
    UnsupportedOperation(&'static str),

    /// Input was not valid base64.
    #[error("base64 decode failed: {0}")]
    Decode(#[from] base64::DecodeError),

    /// Invalid key length provided to cipher.
    #[error("invalid key length: expected one of {expected:?}, actual={actual}")]
    InvalidKeyLen { expected: &'static [usize], actual: usize },

    /// Invalid key material for a MAC.
    #[error("invalid MAC key")]
    InvalidMacKey,

    /// Ciphertext is too short or not block-aligned.
    #[error("invalid ciphertext: {0}")]
    InvalidCiphertext(String),

    /// Randomness source failed.
    #[error("random source failure: {0}")]
    Random(String),
}
