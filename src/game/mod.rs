//! Game Module
//!
//! Round protocol and session bookkeeping.
//!
//! ## Module Structure
//!
//! - `input`: Parse typed lines into events
//! - `round`: Commit, then reveal, one round
//! - `session`: History, tallies and the round state machine

pub mod input;
pub mod round;
pub mod session;

// Re-export key types
pub use input::{InputEvent, InvalidMoveSelection, parse_input};
pub use round::{PendingRound, RoundResult, RoundNumber};
pub use session::{Game, GamePhase, GameError, Session, Statistics, Step};
