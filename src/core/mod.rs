//! Core game primitives.
//!
//! Everything in this module is pure: no I/O, no randomness, no session
//! state. Safe to call from any thread.

pub mod catalog;
pub mod rules;
pub mod matchup;

// Re-export core types
pub use catalog::{MoveCatalog, MoveIndex, CatalogError, MIN_MOVES};
pub use rules::{resolve, resolve_index, beats_set, loses_set, Outcome};
pub use matchup::MatchupTable;
