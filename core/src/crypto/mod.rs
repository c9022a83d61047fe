//! The `Crypt` capability, its decorators and reference backends.
//!
//! Decorators own their wrapped capability and preserve the round-trip
//! contract while adding one concern each (text encoding, signatures,
//! encrypt-only restriction).

pub mod types;
pub mod null;
pub mod base64;
pub mod hmac;
pub mod encrypt_only;
pub mod iv;
pub mod aes_cbc;

pub use types::{Crypt, CryptoError};
pub use null::NullCrypt;
pub use self::base64::Base64Crypt;
pub use self::hmac::{HmacAlg, HmacCrypt};
pub use encrypt_only::EncryptOnlyCrypt;
pub use iv::IvSource;
pub use aes_cbc::AesCbcCrypt;
