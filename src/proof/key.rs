//! Round Secret Keys
//!
//! A fresh 256-bit key per round, drawn from the operating system CSPRNG.

use std::fmt;

use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};

use super::commitment::CommitmentError;

/// Key length in bytes (256 bits).
pub const KEY_LEN: usize = 32;

/// Length of the hex display form.
pub const KEY_HEX_LEN: usize = KEY_LEN * 2;

/// Per-round secret key.
///
/// Owned by the round that created it and revealed once the human has
/// moved. `Debug` never prints the bytes.
#[derive(Clone, PartialEq, Eq)]
pub struct SecretKey([u8; KEY_LEN]);

impl SecretKey {
    /// Wrap raw key bytes.
    pub const fn from_bytes(bytes: [u8; KEY_LEN]) -> Self {
        Self(bytes)
    }

    /// Parse the hex display form (case-insensitive).
    pub fn from_hex(s: &str) -> Result<Self, CommitmentError> {
        if s.len() != KEY_HEX_LEN {
            return Err(CommitmentError::MalformedKey {
                reason: format!("expected {} hex digits, got {}", KEY_HEX_LEN, s.len()),
            });
        }
        let mut bytes = [0u8; KEY_LEN];
        // The hex error names the offending character; keep it out of the message
        hex::decode_to_slice(s, &mut bytes).map_err(|_| CommitmentError::MalformedKey {
            reason: "invalid hex digit".to_string(),
        })?;
        Ok(Self(bytes))
    }

    /// Raw bytes.
    pub fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.0
    }

    /// Lowercase hex display form.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SecretKey(..)")
    }
}

/// Generate a fresh key from the OS CSPRNG.
pub fn generate_key() -> SecretKey {
    generate_key_with(&mut OsRng)
}

/// Generate a key from a caller-supplied cryptographic RNG.
pub fn generate_key_with<R: RngCore + CryptoRng>(rng: &mut R) -> SecretKey {
    let mut bytes = [0u8; KEY_LEN];
    rng.fill_bytes(&mut bytes);
    SecretKey(bytes)
}
