//! AES-256-CBC encryption and HMAC-SHA256 tagging.
//!
//! The wire format composes these two primitives itself (encrypt the JSON,
//! tag the same JSON) rather than using an AEAD mode, so both are exposed
//! here as thin wrappers keyed by a [`DerivedKey`].

use aes::cipher::block_padding::Pkcs7;
use aes::cipher::{BlockDecryptMut, BlockEncryptMut, KeyIvInit};
use hmac::{Hmac, Mac};
use sha2::Sha256;

use super::key::DerivedKey;
use crate::error::{CryptnoteError, Result};

type Aes256CbcEnc = cbc::Encryptor<aes::Aes256>;
type Aes256CbcDec = cbc::Decryptor<aes::Aes256>;
type HmacSha256 = Hmac<Sha256>;

/// Length of the CBC initialization vector in bytes.
pub const IV_LENGTH: usize = 16;

/// Encrypt `plaintext` with AES-256-CBC and PKCS#7 padding.
///
/// # Errors
///
/// Returns `CryptnoteError::EncryptionFailure` if the cipher cannot be
/// initialized (wrong IV length).
pub fn encrypt(key: &DerivedKey, iv: &[u8], plaintext: &[u8]) -> Result<Vec<u8>> {
    let cipher = Aes256CbcEnc::new_from_slices(key.as_bytes(), iv)
        .map_err(|e| CryptnoteError::EncryptionFailure(format!("Cipher setup failed: {}", e)))?;

    Ok(cipher.encrypt_padded_vec_mut::<Pkcs7>(plaintext))
}

/// Decrypt AES-256-CBC ciphertext and strip PKCS#7 padding.
///
/// # Errors
///
/// Returns `CryptnoteError::InvalidKeyOrCorruptData` when the padding is
/// invalid or the ciphertext is not a whole number of blocks. With a wrong
/// key this is by far the most common outcome.
pub fn decrypt(key: &DerivedKey, iv: &[u8], ciphertext: &[u8]) -> Result<Vec<u8>> {
    let cipher = Aes256CbcDec::new_from_slices(key.as_bytes(), iv)
        .map_err(|e| CryptnoteError::MalformedEnvelope(format!("Invalid IV: {}", e)))?;

    cipher
        .decrypt_padded_vec_mut::<Pkcs7>(ciphertext)
        .map_err(|_| CryptnoteError::InvalidKeyOrCorruptData)
}

/// Compute the hex-encoded HMAC-SHA256 of `data` under the derived key.
pub fn hmac_hex(key: &DerivedKey, data: &[u8]) -> Result<String> {
    let mut mac = HmacSha256::new_from_slice(key.as_bytes())
        .map_err(|e| CryptnoteError::EncryptionFailure(format!("HMAC setup failed: {}", e)))?;
    mac.update(data);
    Ok(hex::encode(mac.finalize().into_bytes()))
}
