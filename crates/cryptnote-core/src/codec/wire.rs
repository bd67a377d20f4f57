//! Wire envelope parsing and formatting.
//!
//! Current format (v2):
//!
//! ```text
//! hex(salt)[32] || hex(iv)[32] || base64(metadata_json) ":" hmac_hex ":" base64(ciphertext)
//! ```
//!
//! Legacy format (v1), accepted on read only:
//!
//! ```text
//! hex(salt)[32] || hex(iv)[32] || base64(ciphertext)
//! ```
//!
//! A message is treated as v2 whenever a `:` appears after the 64-character
//! hex prefix. Base64 never produces `:`, so v1 strings never match.
// TODO: a v3 layout should carry an explicit version tag instead of relying on the colon heuristic.

use std::fmt;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use super::types::{Metadata, WireFormat};
use crate::crypto::cipher::IV_LENGTH;
use crate::crypto::key::SALT_LENGTH;
use crate::crypto::{DEFAULT_ITERATIONS, HIGH_SECURITY_ITERATIONS};
use crate::error::{CryptnoteError, Result};

const SALT_HEX_LENGTH: usize = SALT_LENGTH * 2;
const IV_HEX_LENGTH: usize = IV_LENGTH * 2;
const PREFIX_LENGTH: usize = SALT_HEX_LENGTH + IV_HEX_LENGTH;
const FIELD_SEPARATOR: char = ':';

/// What the metadata block says about key derivation.
///
/// An unreadable block is not an error: the defaults (1000 iterations, not
/// high security) are used and `readable` is false. A bad block then shows
/// up later as a decryption failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetadataHint {
    pub version: Option<u64>,
    pub iterations: u32,
    pub high_security: bool,
    pub readable: bool,
}

impl MetadataHint {
    /// More derivation rounds than this codec ever writes. Such counts are
    /// still honored, but opening may take a long time.
    pub fn exceeds_high_security(&self) -> bool {
        self.iterations > HIGH_SECURITY_ITERATIONS
    }

    fn defaults() -> Self {
        Self {
            version: None,
            iterations: DEFAULT_ITERATIONS,
            high_security: false,
            readable: false,
        }
    }

    fn read(encoded: &str) -> Self {
        let value = STANDARD
            .decode(encoded)
            .ok()
            .and_then(|bytes| String::from_utf8(bytes).ok())
            .and_then(|text| serde_json::from_str::<serde_json::Value>(&text).ok());

        let Some(value) = value.filter(|v| v.is_object()) else {
            tracing::warn!("metadata block unreadable, using default key derivation parameters");
            return Self::defaults();
        };

        let iterations = value
            .get("it")
            .and_then(|v| v.as_u64())
            .filter(|it| *it > 0)
            .and_then(|it| u32::try_from(it).ok())
            .unwrap_or(DEFAULT_ITERATIONS);

        Self {
            version: value.get("v").and_then(|v| v.as_u64()),
            iterations,
            high_security: value.get("hs").and_then(|v| v.as_u64()) == Some(1),
            readable: true,
        }
    }
}

/// A parsed (not yet decrypted) wire envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WireEnvelope {
    format: WireFormat,
    salt: [u8; SALT_LENGTH],
    iv: [u8; IV_LENGTH],
    metadata: Option<String>,
    hmac: Option<String>,
    ciphertext: String,
}

impl WireEnvelope {
    /// Build a current-format envelope from freshly sealed parts.
    pub(crate) fn current(
        salt: [u8; SALT_LENGTH],
        iv: [u8; IV_LENGTH],
        metadata: &Metadata,
        hmac: String,
        ciphertext: &[u8],
    ) -> Result<Self> {
        let metadata_json = serde_json::to_string(metadata).map_err(|e| {
            CryptnoteError::EncryptionFailure(format!("Metadata serialization failed: {}", e))
        })?;

        Ok(Self {
            format: WireFormat::Current,
            salt,
            iv,
            metadata: Some(STANDARD.encode(metadata_json)),
            hmac: Some(hmac),
            ciphertext: STANDARD.encode(ciphertext),
        })
    }

    /// Parse a wire string without decrypting it.
    ///
    /// # Errors
    ///
    /// Returns `CryptnoteError::MalformedEnvelope` if the hex prefix is short
    /// or not hex, or if a v2 body does not split into exactly three fields.
    pub fn parse(wire: &str) -> Result<Self> {
        let (salt_hex, iv_hex, body) = match (
            wire.get(..SALT_HEX_LENGTH),
            wire.get(SALT_HEX_LENGTH..PREFIX_LENGTH),
            wire.get(PREFIX_LENGTH..),
        ) {
            (Some(salt), Some(iv), Some(body)) => (salt, iv, body),
            _ => {
                return Err(CryptnoteError::MalformedEnvelope(format!(
                    "expected at least {} hex characters of salt and IV",
                    PREFIX_LENGTH
                )))
            }
        };

        let mut salt = [0u8; SALT_LENGTH];
        hex::decode_to_slice(salt_hex, &mut salt)
            .map_err(|_| CryptnoteError::MalformedEnvelope("salt is not valid hex".to_string()))?;

        let mut iv = [0u8; IV_LENGTH];
        hex::decode_to_slice(iv_hex, &mut iv)
            .map_err(|_| CryptnoteError::MalformedEnvelope("IV is not valid hex".to_string()))?;

        if !body.contains(FIELD_SEPARATOR) {
            return Ok(Self {
                format: WireFormat::Legacy,
                salt,
                iv,
                metadata: None,
                hmac: None,
                ciphertext: body.to_string(),
            });
        }

        let fields: Vec<&str> = body.split(FIELD_SEPARATOR).collect();
        let [metadata, hmac, ciphertext] = fields.as_slice() else {
            return Err(CryptnoteError::MalformedEnvelope(format!(
                "expected 3 colon-separated fields, found {}",
                fields.len()
            )));
        };

        Ok(Self {
            format: WireFormat::Current,
            salt,
            iv,
            metadata: Some(metadata.to_string()),
            hmac: Some(hmac.to_string()),
            ciphertext: ciphertext.to_string(),
        })
    }

    pub fn format(&self) -> WireFormat {
        self.format
    }

    pub fn salt(&self) -> &[u8; SALT_LENGTH] {
        &self.salt
    }

    pub fn iv(&self) -> &[u8; IV_LENGTH] {
        &self.iv
    }

    /// The embedded integrity tag, if the format carries one.
    pub fn hmac(&self) -> Option<&str> {
        self.hmac.as_deref()
    }

    /// The base64 ciphertext field as it appears on the wire.
    pub fn ciphertext(&self) -> &str {
        &self.ciphertext
    }

    /// Key derivation parameters for this message.
    ///
    /// Legacy messages always use the defaults and report `readable: false`.
    pub fn metadata(&self) -> MetadataHint {
        match &self.metadata {
            Some(encoded) => MetadataHint::read(encoded),
            None => MetadataHint::defaults(),
        }
    }

    /// Decode the ciphertext field.
    ///
    /// Undecodable base64 is reported as corrupt data, not a structural
    /// error: it is what a flipped character inside the ciphertext looks like.
    pub(crate) fn ciphertext_bytes(&self) -> Result<Vec<u8>> {
        STANDARD
            .decode(&self.ciphertext)
            .map_err(|_| CryptnoteError::InvalidKeyOrCorruptData)
    }
}

impl fmt::Display for WireEnvelope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", hex::encode(self.salt), hex::encode(self.iv))?;
        match (&self.metadata, &self.hmac) {
            (Some(metadata), Some(hmac)) => write!(
                f,
                "{}{}{}{}{}",
                metadata, FIELD_SEPARATOR, hmac, FIELD_SEPARATOR, self.ciphertext
            ),
            _ => write!(f, "{}", self.ciphertext),
        }
    }
}
