//! Winner Resolution
//!
//! Generalized rock-paper-scissors over any odd-sized catalog.
//!
//! The catalog is treated as a ring. With `n` moves and `h = n / 2`, the move
//! at index `i` beats the next `h` moves (`i+1 ..= i+h`, mod `n`) and loses to
//! the other `h`. Everything here is a pure function of indices.

use std::fmt;

use serde::{Serialize, Deserialize};
use tracing::debug;

use super::catalog::{MoveCatalog, MoveIndex};

/// Result of a pairing, from the first move's point of view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// First move beats the second.
    Win,
    /// Second move beats the first.
    Lose,
    /// Same move.
    Draw,
    /// At least one move is not in the catalog.
    Invalid,
}

impl Outcome {
    /// The same pairing seen from the other side.
    pub const fn flip(self) -> Self {
        match self {
            Self::Win => Self::Lose,
            Self::Lose => Self::Win,
            other => other,
        }
    }

    /// Display label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Win => "Win",
            Self::Lose => "Lose",
            Self::Draw => "Draw",
            Self::Invalid => "Invalid",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // `pad` so table code can use width specifiers
        f.pad(self.label())
    }
}

/// Resolve a pairing by move name.
///
/// Names outside the catalog yield [`Outcome::Invalid`]; this is a normal
/// result, not an error.
pub fn resolve(player_move: &str, opponent_move: &str, catalog: &MoveCatalog) -> Outcome {
    match (catalog.index_of(player_move), catalog.index_of(opponent_move)) {
        (Some(player), Some(opponent)) => resolve_index(player, opponent, catalog.len()),
        _ => {
            debug!(player_move, opponent_move, "move not in catalog");
            Outcome::Invalid
        }
    }
}

/// Resolve a pairing by catalog index for a catalog of `len` moves.
///
/// Out-of-range indices yield [`Outcome::Invalid`].
#[inline]
pub fn resolve_index(player: MoveIndex, opponent: MoveIndex, len: usize) -> Outcome {
    if player >= len || opponent >= len {
        return Outcome::Invalid;
    }
    if player == opponent {
        return Outcome::Draw;
    }

    // Forward distance around the ring
    let offset = (opponent + len - player) % len;
    if offset <= len / 2 {
        Outcome::Win
    } else {
        Outcome::Lose
    }
}

/// Indices beaten by `index`, in ring order.
pub fn beats_set(index: MoveIndex, len: usize) -> Vec<MoveIndex> {
    if index >= len {
        return Vec::new();
    }
    (1..=len / 2).map(|step| (index + step) % len).collect()
}

/// Indices that beat `index`, in ring order.
pub fn loses_set(index: MoveIndex, len: usize) -> Vec<MoveIndex> {
    if index >= len {
        return Vec::new();
    }
    (len / 2 + 1..len).map(|step| (index + step) % len).collect()
}
