//! Sealing whole files.
//!
//! A file travels as an ordinary sealed message whose plaintext is the JSON
//! document `{"name", "type", "lastModified", "content"}`, where `content`
//! is a `data:` URL holding the base64 file bytes.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::{Deserialize, Serialize};

use crate::codec::{open, seal, SealOptions};
use crate::error::{CryptnoteError, Result};

/// Largest file accepted for sealing, in bytes (5 MiB).
pub const MAX_FILE_SIZE: usize = 5 * 1024 * 1024;

const DEFAULT_MIME_TYPE: &str = "application/octet-stream";

/// A file and its descriptive attributes, as sealed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilePayload {
    /// Original file name
    pub name: String,
    /// MIME type, possibly empty
    #[serde(rename = "type", default)]
    pub mime_type: String,
    /// Last modification time in milliseconds since the Unix epoch
    #[serde(rename = "lastModified", default)]
    pub last_modified: i64,
    /// `data:` URL with the file contents
    pub content: String,
}

impl FilePayload {
    /// Build a payload from raw file bytes.
    ///
    /// # Errors
    ///
    /// Returns `CryptnoteError::PayloadTooLarge` above [`MAX_FILE_SIZE`].
    pub fn from_bytes(
        name: impl Into<String>,
        mime_type: impl Into<String>,
        last_modified: i64,
        bytes: &[u8],
    ) -> Result<Self> {
        check_file_size(bytes.len() as u64)?;

        let mime_type = mime_type.into();
        let data_url_type = if mime_type.is_empty() {
            DEFAULT_MIME_TYPE
        } else {
            mime_type.as_str()
        };
        let content = format!("data:{};base64,{}", data_url_type, STANDARD.encode(bytes));

        Ok(Self {
            name: name.into(),
            mime_type,
            last_modified,
            content,
        })
    }

    /// Decode the `data:` URL back into file bytes.
    ///
    /// # Errors
    ///
    /// Returns `CryptnoteError::InvalidInput` if `content` is not a data URL
    /// or its payload does not decode.
    pub fn bytes(&self) -> Result<Vec<u8>> {
        let rest = self
            .content
            .strip_prefix("data:")
            .ok_or_else(|| CryptnoteError::InvalidInput("content is not a data URL".to_string()))?;
        let (header, data) = rest.split_once(',').ok_or_else(|| {
            CryptnoteError::InvalidInput("data URL has no payload separator".to_string())
        })?;

        if header.ends_with(";base64") {
            STANDARD.decode(data).map_err(|e| {
                CryptnoteError::InvalidInput(format!("data URL payload is not base64: {}", e))
            })
        } else {
            Ok(urlencoding::decode_binary(data.as_bytes()).into_owned())
        }
    }
}

/// An opened file payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenedFile {
    pub payload: FilePayload,
    pub created: String,
    pub tampered: bool,
}

/// Seal a file payload as a message.
pub fn seal_file(payload: &FilePayload, password: &str, options: SealOptions) -> Result<String> {
    check_file_size(payload.bytes()?.len() as u64)?;

    let json = serde_json::to_string(payload).map_err(|e| {
        CryptnoteError::EncryptionFailure(format!("File payload serialization failed: {}", e))
    })?;
    seal(&json, password, options)
}

/// Open a message that is expected to contain a file payload.
///
/// # Errors
///
/// Besides the errors of [`open`], returns `CryptnoteError::NotAFilePayload`
/// if the message is plain text, not JSON, or lacks a name or content.
pub fn open_file(wire: &str, password: &str) -> Result<OpenedFile> {
    let opened = open(wire, password)?;
    let message = opened.message.as_str();

    let looks_like_file = message.starts_with('{')
        || message.contains("\"name\"")
        || message.contains("\"content\"");
    if !looks_like_file {
        return Err(CryptnoteError::NotAFilePayload(
            "this is a text message, not a file".to_string(),
        ));
    }

    let payload: FilePayload = serde_json::from_str(message)
        .map_err(|e| CryptnoteError::NotAFilePayload(format!("invalid file document: {}", e)))?;
    if payload.name.is_empty() || payload.content.is_empty() {
        return Err(CryptnoteError::NotAFilePayload(
            "file document is missing a name or content".to_string(),
        ));
    }

    Ok(OpenedFile {
        payload,
        created: opened.created,
        tampered: opened.tampered,
    })
}

/// Check a file size against [`MAX_FILE_SIZE`].
///
/// Callers holding only a path should run this on the file's metadata
/// length before reading it.
pub fn check_file_size(size: u64) -> Result<()> {
    if size > MAX_FILE_SIZE as u64 {
        return Err(CryptnoteError::PayloadTooLarge {
            size: usize::try_from(size).unwrap_or(usize::MAX),
            limit: MAX_FILE_SIZE,
        });
    }
    Ok(())
}
