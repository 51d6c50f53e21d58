//! Rounds
//!
//! A round is opened with a published commitment and closed by the reveal.
//! The computer's move and key stay private inside [`PendingRound`] until
//! [`PendingRound::reveal`] consumes it, so there is no way to read them
//! before the human has moved.

use std::fmt;

use rand::Rng;
use serde::{Serialize, Deserialize};

use crate::core::catalog::{MoveCatalog, MoveIndex};
use crate::core::rules::{resolve, Outcome};
use crate::proof::commitment::{verify_reveal, Commitment, CommitmentError};
use crate::proof::key::SecretKey;

/// Round number within a session, starting at 1.
pub type RoundNumber = u32;

/// Signature of the commitment function used to open rounds.
pub type CommitFn = fn(&SecretKey, &str) -> Result<Commitment, CommitmentError>;

/// Committed but not yet revealed round.
pub struct PendingRound {
    number: RoundNumber,
    opponent: MoveIndex,
    key: SecretKey,
    commitment: Commitment,
}

impl PendingRound {
    /// Pick the computer's move with `rng` and commit to it under `key`.
    pub fn open<R: Rng + ?Sized>(
        number: RoundNumber,
        catalog: &MoveCatalog,
        key: SecretKey,
        rng: &mut R,
        commit: CommitFn,
    ) -> Result<Self, CommitmentError> {
        let opponent = rng.gen_range(0..catalog.len());
        Self::with_choice(number, catalog, opponent, key, commit)
    }

    /// Commit to a known move. `opponent` must be a valid catalog index.
    pub fn with_choice(
        number: RoundNumber,
        catalog: &MoveCatalog,
        opponent: MoveIndex,
        key: SecretKey,
        commit: CommitFn,
    ) -> Result<Self, CommitmentError> {
        let commitment = commit(&key, &catalog[opponent])?;
        Ok(Self {
            number,
            opponent,
            key,
            commitment,
        })
    }

    /// Round number.
    pub fn number(&self) -> RoundNumber {
        self.number
    }

    /// The published commitment.
    pub fn commitment(&self) -> &Commitment {
        &self.commitment
    }

    /// Close the round with the human's move.
    ///
    /// A name outside the catalog is recorded with [`Outcome::Invalid`].
    pub fn reveal(self, human_move: &str, catalog: &MoveCatalog) -> RoundResult {
        let opponent_move = catalog[self.opponent].to_string();
        let outcome = resolve(human_move, &opponent_move, catalog);

        RoundResult {
            round: self.number,
            human_move: human_move.to_string(),
            opponent_move,
            outcome,
            commitment: self.commitment,
            key: self.key.to_hex(),
        }
    }
}

impl fmt::Debug for PendingRound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PendingRound")
            .field("number", &self.number)
            .field("commitment", &self.commitment)
            .finish_non_exhaustive()
    }
}

/// A completed round, as appended to session history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundResult {
    /// Round number.
    pub round: RoundNumber,
    /// Computer's move.
    pub opponent_move: String,
    /// Human's move.
    pub human_move: String,
    /// Outcome for the human.
    pub outcome: Outcome,
    /// Commitment published before the human moved.
    pub commitment: Commitment,
    /// Revealed key (hex).
    pub key: String,
}

impl RoundResult {
    /// Recompute the commitment from the revealed key and move.
    pub fn verify(&self) -> Result<(), CommitmentError> {
        verify_reveal(&self.key, &self.opponent_move, &self.commitment)
    }
}
