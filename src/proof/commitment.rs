//! Commit-Reveal Protocol
//!
//! Commit to the computer's move before the human picks theirs.
//! Reveal the key afterwards so anyone can recompute the tag.
//!
//! The tag is HMAC-SHA256 keyed with the **hex text** of the round key, the
//! same string the human is shown. Any stock HMAC calculator reproduces it
//! by pasting the displayed key and the revealed move name.

use std::fmt;

use hmac::{Hmac, Mac};
use serde::{Serialize, Deserialize};
use sha2::Sha256;
use thiserror::Error;

use super::key::SecretKey;

type HmacSha256 = Hmac<Sha256>;

/// Length of a hex-encoded commitment (SHA-256 output).
pub const COMMITMENT_HEX_LEN: usize = 64;

/// Published commitment: lowercase hex HMAC tag.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Commitment(String);

impl Commitment {
    /// Parse a claimed commitment (case-insensitive, stored lowercase).
    pub fn from_hex(s: &str) -> Result<Self, CommitmentError> {
        let s = s.trim();
        if s.len() != COMMITMENT_HEX_LEN || !s.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(CommitmentError::MalformedCommitment);
        }
        Ok(Self(s.to_ascii_lowercase()))
    }

    /// Hex text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn to_bytes(&self) -> Result<Vec<u8>, CommitmentError> {
        hex::decode(&self.0).map_err(|_| CommitmentError::MalformedCommitment)
    }
}

impl fmt::Display for Commitment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Commitment {
    type Error = CommitmentError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::from_hex(&s)
    }
}

impl From<Commitment> for String {
    fn from(c: Commitment) -> Self {
        c.0
    }
}

/// Commit to `message` under `key`.
pub fn commit(key: &SecretKey, message: &str) -> Result<Commitment, CommitmentError> {
    mac_hex(key.to_hex().as_bytes(), message)
}

/// Commit using the hex display form of a key, as a verifier holds it.
pub fn commit_with_hex_key(key_hex: &str, message: &str) -> Result<Commitment, CommitmentError> {
    let key_text = normalize_key_hex(key_hex)?;
    mac_hex(key_text.as_bytes(), message)
}

/// Check a revealed `(key, message)` against a published commitment.
///
/// Comparison is constant-time.
pub fn verify_reveal(
    key_hex: &str,
    message: &str,
    claimed: &Commitment,
) -> Result<(), CommitmentError> {
    let key_text = normalize_key_hex(key_hex)?;
    let tag = claimed.to_bytes()?;

    let mut mac = keyed_mac(key_text.as_bytes())?;
    mac.update(message.as_bytes());
    mac.verify_slice(&tag).map_err(|_| CommitmentError::Mismatch)
}

/// Raw HMAC-SHA256 over arbitrary key bytes, hex encoded.
pub fn mac_hex(key: &[u8], message: &str) -> Result<Commitment, CommitmentError> {
    let mut mac = keyed_mac(key)?;
    mac.update(message.as_bytes());
    Ok(Commitment(hex::encode(mac.finalize().into_bytes())))
}

fn keyed_mac(key: &[u8]) -> Result<HmacSha256, CommitmentError> {
    HmacSha256::new_from_slice(key).map_err(|_| CommitmentError::KeyRejected)
}

/// Validate a hex key and return its lowercase text.
fn normalize_key_hex(key_hex: &str) -> Result<String, CommitmentError> {
    let key_hex = key_hex.trim();
    // Parsing validates length and digits
    SecretKey::from_hex(key_hex)?;
    Ok(key_hex.to_ascii_lowercase())
}

/// Commitment failures. Messages never include key or move contents.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommitmentError {
    /// Key is not a valid hex-encoded 256-bit key.
    #[error("malformed key: {reason}")]
    MalformedKey {
        /// What was wrong with the encoding.
        reason: String,
    },

    /// The MAC primitive refused the key.
    #[error("key rejected by MAC")]
    KeyRejected,

    /// Claimed commitment is not 64 hex digits.
    #[error("malformed commitment")]
    MalformedCommitment,

    /// Revealed key and move do not reproduce the commitment.
    #[error("commitment does not match revealed key and move")]
    Mismatch,
}
