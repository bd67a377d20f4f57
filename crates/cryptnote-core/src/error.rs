//! Error types for Cryptnote core operations.
//!
//! Errors are descriptive at the core level; the CLI layer maps these to
//! user-friendly messages and exit codes. No variant ever carries a
//! password, derived key, or plaintext.

use thiserror::Error;

/// Result type alias for Cryptnote operations.
pub type Result<T> = std::result::Result<T, CryptnoteError>;

/// Core error type for Cryptnote operations.
#[derive(Debug, Error)]
pub enum CryptnoteError {
    /// A cryptographic primitive failed while sealing
    #[error("Encryption failed: {0}")]
    EncryptionFailure(String),

    /// The wire string (or the decrypted document) does not have the expected structure
    #[error("Malformed envelope: {0}")]
    MalformedEnvelope(String),

    /// Decryption produced unusable output, most likely a wrong key
    #[error("Wrong key or corrupted data")]
    InvalidKeyOrCorruptData,

    /// Invalid caller input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// File payload exceeds the size policy
    #[error("Payload too large: {size} bytes (limit {limit} bytes)")]
    PayloadTooLarge { size: usize, limit: usize },

    /// A message opened as a file is not a file payload
    #[error("Not a file payload: {0}")]
    NotAFilePayload(String),

    /// The secure random source failed
    #[error("Random source failure: {0}")]
    Random(String),
}

impl From<getrandom::Error> for CryptnoteError {
    fn from(err: getrandom::Error) -> Self {
        CryptnoteError::Random(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrong_key_message_is_fixed() {
        let err = CryptnoteError::InvalidKeyOrCorruptData;
        assert_eq!(err.to_string(), "Wrong key or corrupted data");
    }

    #[test]
    fn test_payload_too_large_message() {
        let err = CryptnoteError::PayloadTooLarge {
            size: 10,
            limit: 5,
        };
        assert!(err.to_string().contains("10 bytes"));
        assert!(err.to_string().contains("limit 5 bytes"));
    }
}
