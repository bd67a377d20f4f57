//! Cryptographic building blocks for Cryptnote.
//!
//! - **PBKDF2-HMAC-SHA256**: password-based key derivation
//! - **AES-256-CBC / PKCS#7**: message encryption
//! - **HMAC-SHA256**: integrity tag over the serialized envelope
//!
//! ## Threat Model
//!
//! We defend against:
//! - Reading a sealed message without the password
//! - Undetected modification of a current-format message
//!
//! We do NOT defend against:
//! - Unlimited offline guessing of a weak password (only slowed by iterations)
//! - Timing side channels on tag comparison
//! - Key compromise affecting past messages (no forward secrecy)

pub mod cipher;
pub mod key;
pub mod passphrase;
pub mod random;

pub use key::{derive_key, DerivedKey, DEFAULT_ITERATIONS, HIGH_SECURITY_ITERATIONS};
pub use passphrase::{
    generate_key, generate_key_with, score_strength, validate_password, DEFAULT_KEY_LENGTH,
    KEY_ALPHABET,
};
pub use random::{Clock, OsRandom, RandomSource, SystemClock};
