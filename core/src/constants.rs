/// Defaults when a size is not supplied.
pub const DEFAULT_CHUNK_SIZE: usize = 1024; // 1 KiB plaintext per encrypted record
/// Size of each read pulled from a raw `Read` source.
pub const DEFAULT_READ_SIZE: usize = 1024;
/// Default raw-stream chunk size for the padding pipes.
pub const DEFAULT_PIPE_CHUNK_SIZE: usize = 32 * 1024; // 32 KiB

/// Length of the little-endian record header in header-framed mode.
pub const CHUNK_HEADER_LEN: usize = 4;

/// Base64 maps 3 raw bytes onto 4 output characters.
pub const BASE64_RAW_GROUP: usize = 3;
pub const BASE64_TEXT_GROUP: usize = 4;

/// AES block and CBC IV length (bytes).
pub const AES_BLOCK_LEN: usize = 16;
pub const AES_IV_LEN: usize = 16;
/// Accepted AES key lengths: AES-128, AES-192, AES-256.
pub const AES_KEY_LENGTHS: &[usize] = &[16, 24, 32];

/// HMAC tag lengths (bytes).
pub const HMAC_SHA256_LEN: usize = 32;
pub const HMAC_SHA512_LEN: usize = 64;

/// Largest value a PKCS#7 pad byte can carry.
pub const PKCS7_MAX_BLOCK: usize = 255;
