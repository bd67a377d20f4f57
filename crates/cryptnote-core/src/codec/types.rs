//! Data types for the message codec.

use serde::{Deserialize, Serialize};

use crate::crypto::{DEFAULT_ITERATIONS, HIGH_SECURITY_ITERATIONS};

/// Current wire format version written into the metadata block.
pub const FORMAT_VERSION: u32 = 2;

/// The authenticated plaintext record, serialized to JSON before encryption.
///
/// Field order is fixed by the struct layout, so the same message always
/// serializes to the same string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Envelope {
    /// The user's message
    pub content: String,
    /// Seal time as an ISO-8601 string (informational only)
    #[serde(default)]
    pub created: String,
    /// Whether the sender chose high security mode
    #[serde(rename = "highSecurity", default)]
    pub high_security: bool,
}

/// Metadata block embedded (base64 JSON) in current-format messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    /// Format version
    pub v: u32,
    /// High security flag (0 or 1)
    pub hs: u8,
    /// PBKDF2 iteration count
    pub it: u32,
}

impl Metadata {
    /// Metadata for a message sealed now with the given options.
    pub fn for_options(options: &SealOptions) -> Self {
        Self {
            v: FORMAT_VERSION,
            hs: u8::from(options.high_security),
            it: options.iterations(),
        }
    }
}

/// Options accepted by `seal`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SealOptions {
    /// Use 10x the PBKDF2 iterations
    pub high_security: bool,
}

impl SealOptions {
    /// Options for high security mode.
    pub fn high_security() -> Self {
        Self {
            high_security: true,
        }
    }

    /// PBKDF2 iteration count implied by these options.
    pub fn iterations(&self) -> u32 {
        if self.high_security {
            HIGH_SECURITY_ITERATIONS
        } else {
            DEFAULT_ITERATIONS
        }
    }
}

/// Which wire layout a message uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WireFormat {
    /// `salt || iv || ciphertext`, fixed 1000 iterations, no tag. Read only.
    Legacy,
    /// `salt || iv || meta ":" hmac ":" ciphertext`
    Current,
}

impl WireFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Legacy => "v1",
            Self::Current => "v2",
        }
    }
}

/// The result of opening a message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OpenedMessage {
    /// Recovered message content
    pub message: String,
    /// Seal time recorded by the sender
    pub created: String,
    /// High security flag recorded inside the envelope
    pub is_high_security: bool,
    /// True when an integrity tag was present and did not match
    pub tampered: bool,
    /// PBKDF2 iterations actually used to derive the key
    pub iterations: u32,
    /// Wire layout the message was read from
    pub format: WireFormat,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_json_layout() {
        let envelope = Envelope {
            content: "hi".to_string(),
            created: "2024-01-02T03:04:05.006Z".to_string(),
            high_security: true,
        };
        let json = serde_json::to_string(&envelope).unwrap();
        assert_eq!(
            json,
            r#"{"content":"hi","created":"2024-01-02T03:04:05.006Z","highSecurity":true}"#
        );
    }

    #[test]
    fn test_envelope_tolerates_missing_optional_fields() {
        let envelope: Envelope = serde_json::from_str(r#"{"content":"old"}"#).unwrap();
        assert_eq!(envelope.content, "old");
        assert_eq!(envelope.created, "");
        assert!(!envelope.high_security);
    }

    #[test]
    fn test_envelope_requires_content() {
        let result: Result<Envelope, _> = serde_json::from_str(r#"{"created":"x"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_metadata_json_layout() {
        let normal = Metadata::for_options(&SealOptions::default());
        assert_eq!(
            serde_json::to_string(&normal).unwrap(),
            r#"{"v":2,"hs":0,"it":1000}"#
        );

        let high = Metadata::for_options(&SealOptions::high_security());
        assert_eq!(
            serde_json::to_string(&high).unwrap(),
            r#"{"v":2,"hs":1,"it":10000}"#
        );
    }
}
