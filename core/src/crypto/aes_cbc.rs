//! AES-CBC reference backend.
//!
//! Ciphertext layout for each call:
//!
//! ```text
//! [ iv (16) ][ CBC(pad(plaintext, 16)) ]
//! ```
//!
//! The padding policy is pluggable; with `NoPad` the caller must supply
//! block-aligned plaintext or encryption fails.

use aes::cipher::{BlockDecrypt, BlockEncrypt, KeyInit};
use aes::{Aes128, Aes192, Aes256, Block};

use crate::constants::{AES_BLOCK_LEN, AES_IV_LEN, AES_KEY_LENGTHS};
use crate::crypto::iv::IvSource;
use crate::crypto::types::{Crypt, CryptoError};
use crate::pad::{Pad, PadError, Pkcs7Pad};

#[derive(Clone)]
enum AesCipher {
    Aes128(Aes128),
    Aes192(Aes192),
    Aes256(Aes256),
}

impl AesCipher {
    fn from_key(key: &[u8]) -> Result<Self, CryptoError> {
        let invalid = |_| CryptoError::InvalidKeyLen {
            expected: AES_KEY_LENGTHS,
            actual: key.len(),
        };
        match key.len() {
            16 => Aes128::new_from_slice(key).map(Self::Aes128).map_err(invalid),
            24 => Aes192::new_from_slice(key).map(Self::Aes192).map_err(invalid),
            32 => Aes256::new_from_slice(key).map(Self::Aes256).map_err(invalid),
            actual => Err(CryptoError::InvalidKeyLen {
                expected: AES_KEY_LENGTHS,
                actual,
            }),
        }
    }

    fn encrypt_block(&self, block: &mut Block) {
        match self {
            AesCipher::Aes128(c) => c.encrypt_block(block),
            AesCipher::Aes192(c) => c.encrypt_block(block),
            AesCipher::Aes256(c) => c.encrypt_block(block),
        }
    }

    fn decrypt_block(&self, block: &mut Block) {
        match self {
            AesCipher::Aes128(c) => c.decrypt_block(block),
            AesCipher::Aes192(c) => c.decrypt_block(block),
            AesCipher::Aes256(c) => c.decrypt_block(block),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            AesCipher::Aes128(_) => "aes-128-cbc",
            AesCipher::Aes192(_) => "aes-192-cbc",
            AesCipher::Aes256(_) => "aes-256-cbc",
        }
    }
}

#[inline]
fn xor_in_place(dst: &mut [u8], src: &[u8]) {
    for (d, s) in dst.iter_mut().zip(src) {
        *d ^= s;
    }
}

pub struct AesCbcCrypt {
    cipher: AesCipher,
    pad: Box<dyn Pad + Send + Sync>,
    iv: IvSource,
}

impl AesCbcCrypt {
    /// AES-CBC with PKCS#7 padding and random IVs. Key length picks the
    /// variant: 16 → AES-128, 24 → AES-192, 32 → AES-256.
    pub fn new(key: &[u8]) -> Result<Self, CryptoError> {
        Ok(Self {
            cipher: AesCipher::from_key(key)?,
            pad: Box::new(Pkcs7Pad),
            iv: IvSource::default(),
        })
    }

    pub fn with_pad<P: Pad + Send + Sync + 'static>(mut self, pad: P) -> Self {
        self.pad = Box::new(pad);
        self
    }

    pub fn with_iv_source(mut self, iv: IvSource) -> Self {
        self.iv = iv;
        self
    }

    /// Bytes added to a plaintext of `plaintext_len` (IV + padding).
    pub fn overhead(&self, plaintext_len: usize) -> Result<usize, CryptoError> {
        let tail = plaintext_len % AES_BLOCK_LEN;
        let padded = self.pad.pad(&vec![0u8; tail], AES_BLOCK_LEN)?;
        Ok(AES_IV_LEN + padded.len() - tail)
    }
}

impl Crypt for AesCbcCrypt {
    fn encrypt(&self, data: &[u8]) -> Result<Vec<u8>, CryptoError> {
        let iv = self.iv.generate()?;
        let mut body = self.pad.pad(data, AES_BLOCK_LEN)?;
        if body.len() % AES_BLOCK_LEN != 0 {
            return Err(PadError::Misaligned {
                len: body.len(),
                block_size: AES_BLOCK_LEN,
            }
            .into());
        }

        let mut prev = iv;
        for block in body.chunks_exact_mut(AES_BLOCK_LEN) {
            xor_in_place(block, &prev);
            self.cipher.encrypt_block(Block::from_mut_slice(block));
            prev.copy_from_slice(block);
        }

        let mut out = Vec::with_capacity(AES_IV_LEN + body.len());
        out.extend_from_slice(&iv);
        out.extend_from_slice(&body);
        Ok(out)
    }

    fn decrypt(&self, data: &[u8]) -> Result<Vec<u8>, CryptoError> {
        if data.len() < AES_IV_LEN || (data.len() - AES_IV_LEN) % AES_BLOCK_LEN != 0 {
            return Err(CryptoError::InvalidCiphertext(format!(
                "{} bytes is not an IV followed by whole {}-byte blocks",
                data.len(),
                AES_BLOCK_LEN
            )));
        }

        let (iv, body) = data.split_at(AES_IV_LEN);
        let mut prev = [0u8; AES_BLOCK_LEN];
        prev.copy_from_slice(iv);

        let mut out = body.to_vec();
        for block in out.chunks_exact_mut(AES_BLOCK_LEN) {
            let mut saved = [0u8; AES_BLOCK_LEN];
            saved.copy_from_slice(block);
            self.cipher.decrypt_block(Block::from_mut_slice(block));
            xor_in_place(block, &prev);
            prev = saved;
        }

        Ok(self.pad.strip(&out, AES_BLOCK_LEN)?)
    }
}

impl std::fmt::Debug for AesCbcCrypt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AesCbcCrypt")
            .field("cipher", &self.cipher.name())
            .field("iv", &self.iv)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pad::NoPad;

    #[test]
    fn rejects_bad_key_length() {
        assert!(matches!(
            AesCbcCrypt::new(&[0u8; 10]),
            Err(CryptoError::InvalidKeyLen { actual: 10, .. })
        ));
    }

    #[test]
    fn pkcs7_overhead_is_iv_plus_pad() {
        let c = AesCbcCrypt::new(&[1u8; 16]).unwrap();
        assert_eq!(c.overhead(16).unwrap(), 32);
        assert_eq!(c.overhead(14).unwrap(), 18);
    }

    #[test]
    fn static_iv_is_deterministic() {
        let c = AesCbcCrypt::new(&[2u8; 32])
            .unwrap()
            .with_iv_source(IvSource::Static([9u8; 16]));
        assert_eq!(c.encrypt(b"abc").unwrap(), c.encrypt(b"abc").unwrap());
    }

    #[test]
    fn nopad_requires_aligned_plaintext() {
        let c = AesCbcCrypt::new(&[3u8; 24]).unwrap().with_pad(NoPad);
        assert!(matches!(c.encrypt(b"abc"), Err(CryptoError::Pad(PadError::Misaligned { .. }))));
        let ct = c.encrypt(&[b'a'; 16]).unwrap();
        assert_eq!(c.decrypt(&ct).unwrap(), vec![b'a'; 16]);
    }

    #[test]
    fn truncated_ciphertext_is_rejected() {
        let c = AesCbcCrypt::new(&[4u8; 16]).unwrap();
        let ct = c.encrypt(b"hello").unwrap();
        assert!(matches!(
            c.decrypt(&ct[..ct.len() - 1]),
            Err(CryptoError::InvalidCiphertext(_))
        ));
    }
}
