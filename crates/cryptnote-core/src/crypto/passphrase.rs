//! Password generation and strength scoring.

use super::random::{OsRandom, RandomSource};
use crate::error::{CryptnoteError, Result};

/// Alphabet used by [`generate_key`]: 26 upper, 26 lower, 10 digits, 30 symbols.
pub const KEY_ALPHABET: &[u8; 92] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789!@#$%^&*()-_=+[]{}|;:,.<>?~`'/";

/// Default generated key length in characters.
pub const DEFAULT_KEY_LENGTH: usize = 16;

/// Passwords shorter than this only earn a partial length score.
const MIN_SCORED_LENGTH: usize = 8;

/// Generate a random password of `length` characters from [`KEY_ALPHABET`].
///
/// Each character consumes one byte from the OS CSPRNG, reduced modulo the
/// alphabet size. Because 256 is not a multiple of 92, the first 72
/// characters of the alphabet are drawn with probability 3/256 and the
/// remaining 20 with probability 2/256. That bias is accepted.
///
/// # Examples
///
/// ```
/// use cryptnote_core::crypto::{generate_key, KEY_ALPHABET};
///
/// let key = generate_key(16).unwrap();
/// assert_eq!(key.chars().count(), 16);
/// assert!(key.bytes().all(|b| KEY_ALPHABET.contains(&b)));
/// ```
pub fn generate_key(length: usize) -> Result<String> {
    generate_key_with(length, &mut OsRandom)
}

/// Same as [`generate_key`] with an explicit random source.
pub fn generate_key_with(length: usize, rng: &mut dyn RandomSource) -> Result<String> {
    if length == 0 {
        return Err(CryptnoteError::InvalidInput(
            "Key length must be at least 1".to_string(),
        ));
    }

    let mut bytes = vec![0u8; length];
    rng.fill_bytes(&mut bytes)?;

    Ok(bytes
        .iter()
        .map(|b| KEY_ALPHABET[*b as usize % KEY_ALPHABET.len()] as char)
        .collect())
}

/// Score a password from 0 to 100.
///
/// Below 8 characters the score is `min(25, length * 3)`. Otherwise 25
/// points each for: the length itself, mixed lower/upper case, a digit, and
/// a character outside `[A-Za-z0-9]`.
///
/// Length is counted in Unicode scalar values (`char`s), not bytes and not
/// UTF-16 code units. A character outside the Basic Multilingual Plane,
/// such as most emoji, counts once, so `"🔑🔑🔑🔑"` has length 4 and scores
/// 12, where a UTF-16 count would give 8 and score 50.
pub fn score_strength(password: &str) -> u8 {
    let length = password.chars().count();
    if length < MIN_SCORED_LENGTH {
        return (length * 3).min(25) as u8;
    }

    let mut score = 25;

    let has_lower = password.chars().any(|c| c.is_ascii_lowercase());
    let has_upper = password.chars().any(|c| c.is_ascii_uppercase());
    if has_lower && has_upper {
        score += 25;
    }
    if password.chars().any(|c| c.is_ascii_digit()) {
        score += 25;
    }
    if password.chars().any(|c| !c.is_ascii_alphanumeric()) {
        score += 25;
    }

    score
}

/// Validate that a password can be used to seal or open a message.
///
/// The only hard requirement is that it is non-empty; weak passwords are
/// reported through [`score_strength`] rather than rejected.
pub fn validate_password(password: &str) -> Result<()> {
    if password.is_empty() {
        return Err(CryptnoteError::InvalidInput(
            "Password cannot be empty".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct CountingRandom(u8);

    impl RandomSource for CountingRandom {
        fn fill_bytes(&mut self, dest: &mut [u8]) -> Result<()> {
            for byte in dest.iter_mut() {
                *byte = self.0;
                self.0 = self.0.wrapping_add(1);
            }
            Ok(())
        }
    }

    #[test]
    fn test_alphabet_has_92_distinct_characters() {
        let mut seen = KEY_ALPHABET.to_vec();
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), 92);
        assert!(KEY_ALPHABET.iter().all(|b| b.is_ascii_graphic()));
    }

    #[test]
    fn test_generate_key_length_and_charset() {
        for length in [1, 8, 16, 64] {
            let key = generate_key(length).unwrap();
            assert_eq!(key.chars().count(), length);
            assert!(key.bytes().all(|b| KEY_ALPHABET.contains(&b)));
        }
    }

    #[test]
    fn test_generate_key_zero_length_rejected() {
        assert!(matches!(
            generate_key(0),
            Err(CryptnoteError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_generate_key_reduces_modulo_alphabet() {
        // Bytes 90, 91, 92, 93 map to the last two symbols, then wrap to 'A', 'B'
        let key = generate_key_with(4, &mut CountingRandom(90)).unwrap();
        assert_eq!(key, "'/AB");
    }

    #[test]
    fn test_generate_key_modulo_bias() {
        // Every byte value once: first 72 characters appear 3 times, the rest twice
        let key = generate_key_with(256, &mut CountingRandom(0)).unwrap();
        let count = |c: u8| key.bytes().filter(|b| *b == c).count();
        assert_eq!(count(KEY_ALPHABET[0]), 3);
        assert_eq!(count(KEY_ALPHABET[71]), 3);
        assert_eq!(count(KEY_ALPHABET[72]), 2);
        assert_eq!(count(KEY_ALPHABET[91]), 2);
    }

    #[test]
    fn test_score_short_passwords() {
        assert_eq!(score_strength(""), 0);
        assert_eq!(score_strength("a"), 3);
        assert_eq!(score_strength("aB1!"), 12);
        assert_eq!(score_strength("aB1!xyz"), 21);
    }

    #[test]
    fn test_score_length_only() {
        assert_eq!(score_strength("abcdefgh"), 25);
    }

    #[test]
    fn test_score_partial_mixes() {
        assert_eq!(score_strength("Abcdefgh"), 50);
        assert_eq!(score_strength("abcdefg1"), 50);
        assert_eq!(score_strength("abcdefg!"), 50);
        assert_eq!(score_strength("ABCDEFG1"), 50);
    }

    #[test]
    fn test_score_full_marks() {
        assert_eq!(score_strength("Abcdefg1!"), 100);
    }

    #[test]
    fn test_score_counts_characters_not_bytes() {
        // Seven two-byte characters are still a short password
        assert_eq!(score_strength("ééééééé"), 21);
        // Non-ASCII letters count as symbols
        assert_eq!(score_strength("abcdefgé"), 50);
    }

    #[test]
    fn test_score_counts_emoji_once() {
        assert_eq!(score_strength("\u{1F511}\u{1F511}\u{1F511}\u{1F511}"), 12);
        // Eight emoji reach the length threshold; each is a symbol
        assert_eq!(score_strength(&"\u{1F511}".repeat(8)), 50);
    }

    #[test]
    fn test_validate_password() {
        assert!(validate_password("x").is_ok());
        assert!(validate_password("").is_err());
    }
}
