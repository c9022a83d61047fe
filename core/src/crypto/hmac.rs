//! Keyed-signature decorator (HMAC-SHA2).
//!
//! Ciphertext layout: `inner.encrypt(data) ‖ tag`, where the tag covers the
//! inner ciphertext only. The tag length is fixed by the configured
//! algorithm, so producer and consumer must agree on it.

use hmac::digest::KeyInit;
use hmac::{Hmac, Mac};
use sha2::{Sha256, Sha512};

use crate::constants::{HMAC_SHA256_LEN, HMAC_SHA512_LEN};
use crate::crypto::types::{Crypt, CryptoError};

pub type HmacSha256 = Hmac<Sha256>;
pub type HmacSha512 = Hmac<Sha512>;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HmacAlg {
    #[default]
    Sha256,
    Sha512,
}

impl HmacAlg {
    /// Signature length appended to every ciphertext.
    pub const fn tag_len(self) -> usize {
        match self {
            HmacAlg::Sha256 => HMAC_SHA256_LEN,
            HmacAlg::Sha512 => HMAC_SHA512_LEN,
        }
    }
}

#[derive(Clone)]
pub struct HmacCrypt<C> {
    inner: C,
    key: Vec<u8>,
    alg: HmacAlg,
}

impl<C: Crypt> HmacCrypt<C> {
    /// HMAC-SHA256 over the inner ciphertext.
    pub fn new(inner: C, key: impl Into<Vec<u8>>) -> Self {
        Self::with_alg(inner, key, HmacAlg::Sha256)
    }

    pub fn with_alg(inner: C, key: impl Into<Vec<u8>>, alg: HmacAlg) -> Self {
        Self {
            inner,
            key: key.into(),
            alg,
        }
    }

    pub fn alg(&self) -> HmacAlg {
        self.alg
    }

    /// Bytes this decorator adds to each ciphertext.
    pub fn overhead(&self) -> usize {
        self.alg.tag_len()
    }

    fn sign(&self, ciphertext: &[u8]) -> Result<Vec<u8>, CryptoError> {
        match self.alg {
            HmacAlg::Sha256 => Ok(keyed::<HmacSha256>(&self.key, ciphertext)?
                .finalize()
                .into_bytes()
                .to_vec()),
            HmacAlg::Sha512 => Ok(keyed::<HmacSha512>(&self.key, ciphertext)?
                .finalize()
                .into_bytes()
                .to_vec()),
        }
    }

    /// Constant-time comparison via `Mac::verify_slice`.
    fn verify(&self, ciphertext: &[u8], tag: &[u8]) -> Result<(), CryptoError> {
        let verified = match self.alg {
            HmacAlg::Sha256 => keyed::<HmacSha256>(&self.key, ciphertext)?.verify_slice(tag),
            HmacAlg::Sha512 => keyed::<HmacSha512>(&self.key, ciphertext)?.verify_slice(tag),
        };
        verified.map_err(|_| CryptoError::Signature)
    }
}

fn keyed<M: Mac + KeyInit>(key: &[u8], data: &[u8]) -> Result<M, CryptoError> {
    let mut mac = <M as Mac>::new_from_slice(key).map_err(|_| CryptoError::InvalidMacKey)?;
    mac.update(data);
    Ok(mac)
}

impl<C: Crypt> Crypt for HmacCrypt<C> {
    fn encrypt(&self, data: &[u8]) -> Result<Vec<u8>, CryptoError> {
        let mut out = self.inner.encrypt(data)?;
        let tag = self.sign(&out)?;
        out.extend_from_slice(&tag);
        Ok(out)
    }

    fn decrypt(&self, data: &[u8]) -> Result<Vec<u8>, CryptoError> {
        let tag_len = self.alg.tag_len();
        if data.len() < tag_len {
            tracing::warn!(len = data.len(), tag_len, "ciphertext shorter than signature");
            return Err(CryptoError::Signature);
        }

        let (ciphertext, tag) = data.split_at(data.len() - tag_len);
        if let Err(e) = self.verify(ciphertext, tag) {
            tracing::warn!("hmac signature did not match");
            return Err(e);
        }

        self.inner.decrypt(ciphertext)
    }
}

impl<C> std::fmt::Debug for HmacCrypt<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Never print the key.
        f.debug_struct("HmacCrypt").field("alg", &self.alg).finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::NullCrypt;

    #[test]
    fn appends_tag_of_configured_length() {
        let c = HmacCrypt::with_alg(NullCrypt, b"key".to_vec(), HmacAlg::Sha512);
        let ct = c.encrypt(b"abc").unwrap();
        assert_eq!(ct.len(), 3 + 64);
        assert_eq!(&ct[..3], b"abc");
    }

    #[test]
    fn wrong_key_fails_verification() {
        let a = HmacCrypt::new(NullCrypt, b"key-a".to_vec());
        let b = HmacCrypt::new(NullCrypt, b"key-b".to_vec());
        let ct = a.encrypt(b"abc").unwrap();
        assert!(matches!(b.decrypt(&ct), Err(CryptoError::Signature)));
    }
}
