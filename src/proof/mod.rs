//! Fairness Proof
//!
//! The computer commits to its move before the human chooses, then reveals
//! the key so the human can check the commitment.
//!
//! ## Protocol
//!
//! ```text
//! 1. key        <- generate_key()          (OS CSPRNG, 256 bits)
//! 2. move       <- uniform choice           (independent of key)
//! 3. commitment <- HMAC-SHA256(hex(key), move)
//! 4. publish commitment
//! 5. human picks a move
//! 6. reveal key + move; anyone can run verify_reveal()
//! ```

pub mod key;
pub mod commitment;

// Re-export key types
pub use key::{SecretKey, generate_key, generate_key_with, KEY_LEN, KEY_HEX_LEN};
pub use commitment::{
    Commitment, CommitmentError, COMMITMENT_HEX_LEN,
    commit, commit_with_hex_key, verify_reveal, mac_hex,
};
