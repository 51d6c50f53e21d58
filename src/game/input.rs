//! Interactive Input
//!
//! Turns one line typed by the human into a discrete event for the
//! session state machine.

use thiserror::Error;

use crate::core::catalog::MoveIndex;

/// Exit command.
pub const CMD_EXIT: &str = "0";
/// Show the matchup table.
pub const CMD_HELP: &str = "?";
/// Show round history.
pub const CMD_HISTORY: &str = "!";

/// One parsed line of input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputEvent {
    /// Pick a move (0-based catalog index).
    Select(MoveIndex),
    /// Show the matchup table.
    Help,
    /// Show the round history.
    History,
    /// Leave the session.
    Exit,
}

/// Parse a line against a catalog of `move_count` moves.
///
/// Moves are numbered from 1 on screen.
pub fn parse_input(line: &str, move_count: usize) -> Result<InputEvent, InvalidMoveSelection> {
    let line = line.trim();
    match line {
        "" => Err(InvalidMoveSelection::Empty),
        CMD_EXIT => Ok(InputEvent::Exit),
        CMD_HELP => Ok(InputEvent::Help),
        CMD_HISTORY => Ok(InputEvent::History),
        _ => {
            let number: usize = line.parse().map_err(|_| InvalidMoveSelection::NotANumber {
                input: line.to_string(),
            })?;
            if number == 0 || number > move_count {
                return Err(InvalidMoveSelection::OutOfRange {
                    got: number,
                    max: move_count,
                });
            }
            Ok(InputEvent::Select(number - 1))
        }
    }
}

/// Input that is neither a move number nor a command.
///
/// Recovered by prompting again; no state changes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidMoveSelection {
    /// Blank line.
    #[error("no move entered")]
    Empty,

    /// Not a number or a known command.
    #[error("'{input}' is not a move number or command")]
    NotANumber {
        /// Trimmed input.
        input: String,
    },

    /// Number outside `1..=max`.
    #[error("move {got} is out of range 1..={max}")]
    OutOfRange {
        /// Number entered.
        got: usize,
        /// Highest valid number.
        max: usize,
    },
}
