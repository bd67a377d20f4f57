//! JSON output shapes for the CLI.

use cryptnote_core::codec::{OpenedMessage, WireEnvelope};
use cryptnote_core::file::OpenedFile;

/// JSON for a freshly sealed message.
pub fn sealed_json(wire: &str, iterations: u32, link: Option<&str>) -> serde_json::Value {
    serde_json::json!({
        "ciphertext": wire,
        "format": "v2",
        "high_security": iterations > cryptnote_core::crypto::DEFAULT_ITERATIONS,
        "iterations": iterations,
        "link": link,
    })
}

/// JSON for an opened message.
pub fn opened_json(opened: &OpenedMessage) -> serde_json::Value {
    serde_json::json!({
        "message": opened.message,
        "created": opened.created,
        "high_security": opened.is_high_security,
        "tampered": opened.tampered,
        "iterations": opened.iterations,
        "format": opened.format.as_str(),
    })
}

/// JSON describing a wire string's structure.
pub fn inspect_json(envelope: &WireEnvelope) -> serde_json::Value {
    let hint = envelope.metadata();
    serde_json::json!({
        "format": envelope.format().as_str(),
        "salt": hex::encode(envelope.salt()),
        "iv": hex::encode(envelope.iv()),
        "iterations": hint.iterations,
        "high_security": hint.high_security,
        "metadata_version": hint.version,
        "metadata_readable": hint.readable,
        "has_hmac": envelope.hmac().is_some(),
        "ciphertext_length": envelope.ciphertext().len(),
    })
}

/// JSON for a recovered file.
pub fn opened_file_json(opened: &OpenedFile, size: usize, output: &str) -> serde_json::Value {
    serde_json::json!({
        "name": opened.payload.name,
        "type": opened.payload.mime_type,
        "last_modified": opened.payload.last_modified,
        "size": size,
        "output": output,
        "created": opened.created,
        "tampered": opened.tampered,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use cryptnote_core::codec::{seal, SealOptions};

    #[test]
    fn test_inspect_json_fields() {
        let wire = seal("x", "pw", SealOptions::high_security()).unwrap();
        let envelope = WireEnvelope::parse(&wire).unwrap();
        let json = inspect_json(&envelope);

        assert_eq!(json["format"], "v2");
        assert_eq!(json["iterations"], 10_000);
        assert_eq!(json["high_security"], true);
        assert_eq!(json["metadata_version"], 2);
        assert_eq!(json["has_hmac"], true);
        assert_eq!(json["salt"].as_str().unwrap(), &wire[..32]);
        assert_eq!(json["iv"].as_str().unwrap(), &wire[32..64]);
    }

    #[test]
    fn test_sealed_json_without_link() {
        let json = sealed_json("abc", 1000, None);
        assert_eq!(json["high_security"], false);
        assert!(json["link"].is_null());
    }
}
