//! # Cryptnote Core
//!
//! Core library for Cryptnote - password-sealed messages that travel as
//! plain text.
//!
//! This crate provides the message codec and its helpers, independent of
//! any user interface.
//!
//! ## Architecture
//!
//! - **codec**: `seal` / `open` and the wire format (current v2, legacy v1)
//! - **crypto**: key derivation, cipher and MAC wrappers, key generation,
//!   strength scoring, random and clock capabilities
//! - **share**: share links carrying a sealed message
//! - **file**: sealing whole files as data-URL payloads

pub mod codec;
pub mod crypto;
pub mod error;
pub mod file;
pub mod share;

pub use codec::{open, seal, seal_with, OpenedMessage, SealOptions, WireEnvelope, WireFormat};
pub use crypto::{generate_key, score_strength};
pub use error::{CryptnoteError, Result};
pub use file::{check_file_size, open_file, seal_file, FilePayload, OpenedFile, MAX_FILE_SIZE};
pub use share::{build_share_link, extract_share_from_url, SharedContent};

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
