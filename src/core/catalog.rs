//! Move Catalog
//!
//! The ordered, immutable list of move names a session is played with.
//! Order matters: the winner relation is computed from catalog positions.

use serde::{Serialize, Deserialize};
use thiserror::Error;

/// Minimum number of moves in a playable catalog.
pub const MIN_MOVES: usize = 3;

/// Position of a move inside a [`MoveCatalog`].
pub type MoveIndex = usize;

/// Ordered sequence of distinct move names.
///
/// # Invariants
///
/// - At least [`MIN_MOVES`] entries
/// - Odd length (the beats/loses split is only balanced for odd counts)
/// - No duplicate names (case-sensitive, exact match)
/// - No empty names
///
/// Once built, a catalog is never mutated.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct MoveCatalog {
    moves: Vec<String>,
}

impl MoveCatalog {
    /// Validate and build a catalog from move names.
    pub fn new<I, S>(moves: I) -> Result<Self, CatalogError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let moves: Vec<String> = moves.into_iter().map(Into::into).collect();

        if moves.len() < MIN_MOVES {
            return Err(CatalogError::TooFewMoves {
                got: moves.len(),
                min: MIN_MOVES,
            });
        }

        for (position, name) in moves.iter().enumerate() {
            if name.is_empty() {
                return Err(CatalogError::EmptyMoveName { position: position + 1 });
            }
            if moves[..position].contains(name) {
                return Err(CatalogError::DuplicateMove { name: name.clone() });
            }
        }

        if moves.len() % 2 == 0 {
            return Err(CatalogError::EvenMoveCount { got: moves.len() });
        }

        Ok(Self { moves })
    }

    /// Number of moves.
    #[inline]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// Always false; a valid catalog has at least [`MIN_MOVES`] entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Number of moves each move beats (and loses to).
    #[inline]
    pub fn half(&self) -> usize {
        self.moves.len() / 2
    }

    /// Name at `index`, if in range.
    #[inline]
    pub fn get(&self, index: MoveIndex) -> Option<&str> {
        self.moves.get(index).map(String::as_str)
    }

    /// Position of `name`, if it belongs to the catalog.
    pub fn index_of(&self, name: &str) -> Option<MoveIndex> {
        self.moves.iter().position(|m| m == name)
    }

    /// Check membership.
    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.index_of(name).is_some()
    }

    /// Iterate move names in catalog order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.moves.iter().map(String::as_str)
    }

    /// Length of the longest move name (in chars).
    pub fn longest_name(&self) -> usize {
        self.moves.iter().map(|m| m.chars().count()).max().unwrap_or(0)
    }
}

impl std::ops::Index<MoveIndex> for MoveCatalog {
    type Output = str;

    /// Panics if `index` is out of range, like slice indexing.
    fn index(&self, index: MoveIndex) -> &str {
        &self.moves[index]
    }
}

impl TryFrom<Vec<String>> for MoveCatalog {
    type Error = CatalogError;

    fn try_from(moves: Vec<String>) -> Result<Self, Self::Error> {
        Self::new(moves)
    }
}

impl From<MoveCatalog> for Vec<String> {
    fn from(catalog: MoveCatalog) -> Self {
        catalog.moves
    }
}

/// Reasons a catalog is rejected before any round starts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// Fewer than the minimum number of moves.
    #[error("at least {min} moves are required, got {got}")]
    TooFewMoves {
        /// Moves supplied.
        got: usize,
        /// Minimum accepted.
        min: usize,
    },

    /// Even number of moves; the winner relation would be unbalanced.
    #[error("the number of moves must be odd, got {got}")]
    EvenMoveCount {
        /// Moves supplied.
        got: usize,
    },

    /// The same name appears twice.
    #[error("duplicate move: {name}")]
    DuplicateMove {
        /// The repeated name.
        name: String,
    },

    /// A move name is the empty string.
    #[error("move #{position} has an empty name")]
    EmptyMoveName {
        /// 1-based position of the empty name.
        position: usize,
    },
}
