//! Entropy and time capabilities.
//!
//! Sealing needs fresh random bytes (salt, IV) and the current time. Both are
//! passed in as traits so callers can substitute deterministic sources when
//! they need to pin down exact output.

use chrono::{DateTime, Utc};

use crate::error::Result;

/// A cryptographically secure source of random bytes.
pub trait RandomSource {
    /// Fill `dest` entirely with random bytes.
    fn fill_bytes(&mut self, dest: &mut [u8]) -> Result<()>;
}

/// Operating-system CSPRNG via `getrandom`.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsRandom;

impl RandomSource for OsRandom {
    fn fill_bytes(&mut self, dest: &mut [u8]) -> Result<()> {
        getrandom::getrandom(dest)?;
        Ok(())
    }
}

/// A wall clock.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// The system clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Draw a fixed-size array from a random source.
pub(crate) fn random_array<const N: usize>(rng: &mut dyn RandomSource) -> Result<[u8; N]> {
    let mut bytes = [0u8; N];
    rng.fill_bytes(&mut bytes)?;
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_os_random_fills_buffer() {
        let mut rng = OsRandom;
        let a: [u8; 32] = random_array(&mut rng).unwrap();
        let b: [u8; 32] = random_array(&mut rng).unwrap();

        // 2^-256 chance of a false failure
        assert_ne!(a, b);
    }

    #[test]
    fn test_system_clock_is_recent() {
        let now = SystemClock.now();
        assert!(now.timestamp() > 1_600_000_000);
    }
}
