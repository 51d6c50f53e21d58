//! Game Session
//!
//! Session history and tallies, plus the state machine that drives rounds.
//!
//! ```text
//!                 begin_round()
//! AwaitingCommitment ─────────► AwaitingMove ──Select──► RoundComplete
//!                                │  ▲   │                    │
//!                      Help/History ┘   └──Exit──► Exited     │ begin_round()
//!                                ▲                           │
//!                                └───────────────────────────┘
//! ```
//!
//! The commitment exists before [`GamePhase::AwaitingMove`] is entered, so a
//! move can only be accepted after it has been published.

use rand::Rng;
use serde::{Serialize, Deserialize};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::core::catalog::MoveCatalog;
use crate::core::matchup::MatchupTable;
use crate::core::rules::Outcome;
use crate::game::input::InputEvent;
use crate::game::round::{CommitFn, PendingRound, RoundNumber, RoundResult};
use crate::proof::commitment::{commit, Commitment, CommitmentError};
use crate::proof::key::generate_key;

/// Default bound on fresh-key retries when a commitment cannot be computed.
pub const DEFAULT_MAX_COMMIT_ATTEMPTS: u32 = 3;

// =============================================================================
// SESSION STATE
// =============================================================================

/// Running win/loss/draw counts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statistics {
    /// Rounds won by the human.
    pub wins: u32,
    /// Rounds lost by the human.
    pub losses: u32,
    /// Drawn rounds.
    pub draws: u32,
}

impl Statistics {
    /// Count one outcome. `Invalid` is not counted.
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Win => self.wins += 1,
            Outcome::Lose => self.losses += 1,
            Outcome::Draw => self.draws += 1,
            Outcome::Invalid => {}
        }
    }

    /// Total counted rounds.
    pub fn total(&self) -> u32 {
        self.wins + self.losses + self.draws
    }

    /// Tallies implied by a round history.
    pub fn from_history(history: &[RoundResult]) -> Self {
        let mut stats = Self::default();
        for result in history {
            stats.record(result.outcome);
        }
        stats
    }
}

/// Per-session state: catalog, append-only history and tallies.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Session {
    /// Session identifier.
    pub id: Uuid,
    /// Moves in play.
    pub catalog: MoveCatalog,
    history: Vec<RoundResult>,
    statistics: Statistics,
}

impl Session {
    /// Start an empty session.
    pub fn new(catalog: MoveCatalog) -> Self {
        Self {
            id: Uuid::new_v4(),
            catalog,
            history: Vec::new(),
            statistics: Statistics::default(),
        }
    }

    /// Append a completed round and return the updated session.
    #[must_use]
    pub fn record(mut self, result: RoundResult) -> Self {
        self.append(result);
        self
    }

    pub(crate) fn append(&mut self, result: RoundResult) {
        self.statistics.record(result.outcome);
        self.history.push(result);
    }

    /// Completed rounds, oldest first.
    pub fn history(&self) -> &[RoundResult] {
        &self.history
    }

    /// Current tallies.
    pub fn statistics(&self) -> Statistics {
        self.statistics
    }

    /// Number of the next round to open.
    pub fn next_round(&self) -> RoundNumber {
        self.history.len() as RoundNumber + 1
    }

    /// True when the stored tallies match the history.
    pub fn statistics_consistent(&self) -> bool {
        self.statistics == Statistics::from_history(&self.history)
    }
}

// =============================================================================
// STATE MACHINE
// =============================================================================

/// Where the session is in the round protocol.
#[derive(Debug)]
pub enum GamePhase {
    /// No open round.
    AwaitingCommitment,
    /// Commitment published; waiting for the human.
    AwaitingMove(PendingRound),
    /// Last round revealed.
    RoundComplete(RoundResult),
    /// Session over.
    Exited,
}

impl GamePhase {
    /// Short name for errors and logs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::AwaitingCommitment => "AwaitingCommitment",
            Self::AwaitingMove(_) => "AwaitingMove",
            Self::RoundComplete(_) => "RoundComplete",
            Self::Exited => "Exited",
        }
    }
}

/// What handling an input event produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Show the matchup table; round stays open.
    ShowTable,
    /// Show history; round stays open.
    ShowHistory,
    /// Round closed.
    Revealed(RoundResult),
    /// Session ended.
    Exited,
}

/// Drives rounds for one session.
pub struct Game<R> {
    table: MatchupTable,
    session: Session,
    phase: GamePhase,
    rng: R,
    commit_fn: CommitFn,
    max_commit_attempts: u32,
}

impl<R: Rng> Game<R> {
    /// Create a game over `catalog`, drawing computer moves from `rng`.
    pub fn new(catalog: MoveCatalog, rng: R) -> Self {
        let table = MatchupTable::build(&catalog);
        let session = Session::new(catalog);
        info!(session_id = %session.id, moves = session.catalog.len(), "session started");

        Self {
            table,
            session,
            phase: GamePhase::AwaitingCommitment,
            rng,
            commit_fn: commit,
            max_commit_attempts: DEFAULT_MAX_COMMIT_ATTEMPTS,
        }
    }

    /// Bound fresh-key retries (at least one attempt is always made).
    pub fn with_max_commit_attempts(mut self, attempts: u32) -> Self {
        self.max_commit_attempts = attempts.max(1);
        self
    }

    /// Replace the commitment function.
    pub fn with_commit_fn(mut self, commit_fn: CommitFn) -> Self {
        self.commit_fn = commit_fn;
        self
    }

    /// Open a new round and publish its commitment.
    ///
    /// A failed commitment abandons the key and starts over with a fresh one.
    pub fn begin_round(&mut self) -> Result<Commitment, GameError> {
        match self.phase {
            GamePhase::AwaitingCommitment | GamePhase::RoundComplete(_) => {}
            ref other => return Err(GameError::InvalidPhase { phase: other.name() }),
        }

        let number = self.session.next_round();
        let mut attempt = 0;
        let round = loop {
            attempt += 1;
            match PendingRound::open(
                number,
                &self.session.catalog,
                generate_key(),
                &mut self.rng,
                self.commit_fn,
            ) {
                Ok(round) => break round,
                Err(e) if attempt < self.max_commit_attempts => {
                    warn!(round = number, attempt, error = %e, "commitment failed, retrying with a fresh key");
                }
                Err(e) => {
                    warn!(round = number, attempt, error = %e, "commitment failed, giving up");
                    return Err(GameError::CommitmentExhausted {
                        attempts: attempt,
                        last: e,
                    });
                }
            }
        };

        let commitment = round.commitment().clone();
        debug!(round = number, commitment = %commitment, "round committed");
        self.phase = GamePhase::AwaitingMove(round);
        Ok(commitment)
    }

    /// Apply one input event to the open round.
    pub fn handle(&mut self, event: InputEvent) -> Result<Step, GameError> {
        if !matches!(self.phase, GamePhase::AwaitingMove(_)) {
            return Err(GameError::InvalidPhase { phase: self.phase.name() });
        }

        match event {
            InputEvent::Help => Ok(Step::ShowTable),
            InputEvent::History => Ok(Step::ShowHistory),
            InputEvent::Exit => {
                self.phase = GamePhase::Exited;
                let stats = self.session.statistics();
                info!(
                    session_id = %self.session.id,
                    rounds = self.session.history().len(),
                    wins = stats.wins,
                    losses = stats.losses,
                    draws = stats.draws,
                    "session ended"
                );
                Ok(Step::Exited)
            }
            InputEvent::Select(index) => {
                let human_move = self
                    .session
                    .catalog
                    .get(index)
                    .ok_or(GameError::UnknownMove { index })?
                    .to_string();

                let round = match std::mem::replace(&mut self.phase, GamePhase::AwaitingCommitment) {
                    GamePhase::AwaitingMove(round) => round,
                    other => {
                        let phase = other.name();
                        self.phase = other;
                        return Err(GameError::InvalidPhase { phase });
                    }
                };

                let result = round.reveal(&human_move, &self.session.catalog);
                debug!(
                    round = result.round,
                    human = %result.human_move,
                    computer = %result.opponent_move,
                    outcome = %result.outcome,
                    "round revealed"
                );

                self.session.append(result.clone());
                self.phase = GamePhase::RoundComplete(result.clone());
                Ok(Step::Revealed(result))
            }
        }
    }

    /// Commitment of the open round, if any.
    pub fn commitment(&self) -> Option<&Commitment> {
        match &self.phase {
            GamePhase::AwaitingMove(round) => Some(round.commitment()),
            _ => None,
        }
    }

    /// Current phase.
    pub fn phase(&self) -> &GamePhase {
        &self.phase
    }

    /// True once the human has exited.
    pub fn is_exited(&self) -> bool {
        matches!(self.phase, GamePhase::Exited)
    }

    /// Matchup table for the catalog.
    pub fn table(&self) -> &MatchupTable {
        &self.table
    }

    /// Session state.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Consume the game and keep the session.
    pub fn into_session(self) -> Session {
        self.session
    }
}

/// Session state machine errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    /// Operation not allowed in the current phase.
    #[error("not allowed while {phase}")]
    InvalidPhase {
        /// Current phase name.
        phase: &'static str,
    },

    /// Selected index is not in the catalog.
    #[error("no move at index {index}")]
    UnknownMove {
        /// Offending index.
        index: usize,
    },

    /// Every fresh key failed to produce a commitment.
    #[error("could not commit after {attempts} attempts: {last}")]
    CommitmentExhausted {
        /// Attempts made.
        attempts: u32,
        /// Last failure.
        last: CommitmentError,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::proof::key::SecretKey;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn new_game() -> Game<StdRng> {
        let catalog = MoveCatalog::new(["Rock", "Paper", "Scissors"]).unwrap();
        Game::new(catalog, StdRng::seed_from_u64(42))
    }

    #[test]
    fn test_statistics_ignore_invalid() {
        let mut stats = Statistics::default();
        stats.record(Outcome::Win);
        stats.record(Outcome::Win);
        stats.record(Outcome::Lose);
        stats.record(Outcome::Draw);
        stats.record(Outcome::Invalid);
        assert_eq!(stats, Statistics { wins: 2, losses: 1, draws: 1 });
        assert_eq!(stats.total(), 4);
    }

    #[test]
    fn test_statistics_from_history() {
        let mut game = new_game();
        for pick in [0, 1, 2, 1] {
            game.begin_round().unwrap();
            assert!(matches!(game.handle(InputEvent::Select(pick)), Ok(Step::Revealed(_))));
        }
        let session = game.into_session();
        assert_eq!(Statistics::from_history(session.history()), session.statistics());
        assert_eq!(session.statistics().total(), 4);
        assert!(session.statistics_consistent());
    }

    #[test]
    fn test_move_rejected_before_commitment() {
        let mut game = new_game();
        assert_eq!(
            game.handle(InputEvent::Select(0)),
            Err(GameError::InvalidPhase { phase: "AwaitingCommitment" })
        );
        assert!(game.session().history().is_empty());
    }

    #[test]
    fn test_full_round() {
        let mut game = new_game();
        let published = game.begin_round().unwrap();

        // Meta-commands keep the same commitment
        assert_eq!(game.handle(InputEvent::Help), Ok(Step::ShowTable));
        assert_eq!(game.handle(InputEvent::History), Ok(Step::ShowHistory));
        assert_eq!(game.commitment(), Some(&published));

        let result = match game.handle(InputEvent::Select(1)).unwrap() {
            Step::Revealed(result) => result,
            other => panic!("unexpected step {:?}", other),
        };

        assert_eq!(result.round, 1);
        assert_eq!(result.human_move, "Paper");
        assert_eq!(result.commitment, published);
        assert_eq!(result.verify(), Ok(()));
        assert!(matches!(game.phase(), GamePhase::RoundComplete(_)));
        assert_eq!(game.session().history().len(), 1);
        assert_eq!(game.session().statistics().total(), 1);
    }

    #[test]
    fn test_cannot_begin_twice() {
        let mut game = new_game();
        game.begin_round().unwrap();
        assert_eq!(
            game.begin_round().unwrap_err(),
            GameError::InvalidPhase { phase: "AwaitingMove" }
        );
    }

    #[test]
    fn test_rounds_number_sequentially() {
        let mut game = new_game();
        for expected in 1..=4 {
            game.begin_round().unwrap();
            match game.handle(InputEvent::Select(0)).unwrap() {
                Step::Revealed(result) => assert_eq!(result.round, expected),
                other => panic!("unexpected step {:?}", other),
            }
        }
        let rounds: Vec<u32> = game.session().history().iter().map(|r| r.round).collect();
        assert_eq!(rounds, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_exit() {
        let mut game = new_game();
        game.begin_round().unwrap();
        assert_eq!(game.handle(InputEvent::Exit), Ok(Step::Exited));
        assert!(game.is_exited());
        assert!(game.begin_round().is_err());
        assert!(game.session().history().is_empty());
    }

    #[test]
    fn test_unknown_index_keeps_round_open() {
        let mut game = new_game();
        let published = game.begin_round().unwrap();
        assert_eq!(
            game.handle(InputEvent::Select(9)),
            Err(GameError::UnknownMove { index: 9 })
        );
        assert_eq!(game.commitment(), Some(&published));
    }

    #[test]
    fn test_commitment_failure_exhausts() {
        fn broken(_: &SecretKey, _: &str) -> Result<Commitment, CommitmentError> {
            Err(CommitmentError::KeyRejected)
        }
        let mut game = new_game().with_commit_fn(broken).with_max_commit_attempts(2);
        assert_eq!(
            game.begin_round().unwrap_err(),
            GameError::CommitmentExhausted {
                attempts: 2,
                last: CommitmentError::KeyRejected,
            }
        );
        assert!(matches!(game.phase(), GamePhase::AwaitingCommitment));
    }

    #[test]
    fn test_commitment_failure_retries_with_fresh_key() {
        use std::sync::atomic::{AtomicUsize, Ordering};

        static CALLS: AtomicUsize = AtomicUsize::new(0);
        fn flaky(key: &SecretKey, message: &str) -> Result<Commitment, CommitmentError> {
            if CALLS.fetch_add(1, Ordering::SeqCst) == 0 {
                Err(CommitmentError::KeyRejected)
            } else {
                commit(key, message)
            }
        }

        let mut game = new_game().with_commit_fn(flaky);
        let published = game.begin_round().unwrap();
        assert_eq!(CALLS.load(Ordering::SeqCst), 2);
        assert!(matches!(game.phase(), GamePhase::AwaitingMove(_)));
        assert_eq!(game.commitment(), Some(&published));

        let result = match game.handle(InputEvent::Select(0)).unwrap() {
            Step::Revealed(result) => result,
            other => panic!("unexpected step {:?}", other),
        };
        assert_eq!(result.round, 1);
        assert_eq!(result.commitment, published);
        assert_eq!(result.verify(), Ok(()));
    }

    #[test]
    fn test_session_record_is_append_only() {
        let catalog = MoveCatalog::new(["Rock", "Paper", "Scissors"]).unwrap();
        let session = Session::new(catalog.clone());
        let round = PendingRound::with_choice(1, &catalog, 0, generate_key(), commit).unwrap();
        let session = session.record(round.reveal("Paper", &catalog));
        let round = PendingRound::with_choice(2, &catalog, 0, generate_key(), commit).unwrap();
        let session = session.record(round.reveal("Rock", &catalog));

        let outcomes: Vec<Outcome> = session.history().iter().map(|r| r.outcome).collect();
        assert_eq!(outcomes, vec![Outcome::Lose, Outcome::Draw]);
        assert_eq!(session.next_round(), 3);
    }
}
