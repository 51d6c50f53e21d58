//! # HMAC Rock-Paper-Scissors
//!
//! Rock-paper-scissors generalized to any odd number of moves, played against
//! a computer that commits to its move before you choose yours.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                       HMAC RPS                              │
//! ├─────────────────────────────────────────────────────────────┤
//! │  core/           - Pure game rules                          │
//! │  ├── catalog.rs  - Validated, ordered move list             │
//! │  ├── rules.rs    - Ring-offset winner resolution            │
//! │  └── matchup.rs  - Full pairwise outcome matrix             │
//! │                                                              │
//! │  proof/          - Fairness proof                           │
//! │  ├── key.rs      - 256-bit per-round keys (OS CSPRNG)       │
//! │  └── commitment.rs- HMAC-SHA256 commit / verify             │
//! │                                                              │
//! │  game/           - Round protocol                           │
//! │  ├── input.rs    - Line -> event parsing                    │
//! │  ├── round.rs    - Pending round and its reveal             │
//! │  └── session.rs  - History, tallies, state machine          │
//! │                                                              │
//! │  terminal/       - Front end (I/O)                          │
//! │  ├── config.rs   - Env + CLI configuration                  │
//! │  ├── render.rs   - Tables and messages                      │
//! │  ├── console.rs  - Interactive loop                         │
//! │  └── export.rs   - JSON history export                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Fairness Guarantee
//!
//! Every round publishes `HMAC-SHA256(key, computer_move)` before reading
//! the human's move, and reveals `key` afterwards. The state machine in
//! [`game::session`] has no path that accepts a move before the commitment
//! exists, and no accessor exposes the computer's move before the reveal.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod core;
pub mod game;
pub mod proof;
pub mod terminal;

// Re-export commonly used types
pub use crate::core::{MoveCatalog, CatalogError, MatchupTable, Outcome, resolve};
pub use crate::proof::{SecretKey, Commitment, CommitmentError, generate_key, commit, verify_reveal};
pub use crate::game::{Game, GamePhase, Session, RoundResult, InputEvent};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
