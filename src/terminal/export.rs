//! History Export
//!
//! Session history and tallies as pretty JSON, for auditing rounds later.
//! Imports are rejected when the tallies disagree with the recorded rounds.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use thiserror::Error;

use crate::game::session::{Session, Statistics};

/// Serialize `session` to a JSON string.
pub fn session_to_json(session: &Session) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(session)
}

/// Parse a previously exported session.
pub fn session_from_json(s: &str) -> Result<Session, ExportError> {
    let session: Session = serde_json::from_str(s)?;
    if !session.statistics_consistent() {
        return Err(ExportError::Inconsistent {
            recorded: session.statistics(),
            computed: Statistics::from_history(session.history()),
        });
    }
    Ok(session)
}

/// Write `session` to `path`, replacing any existing file.
pub fn write_history(session: &Session, path: &Path) -> Result<(), ExportError> {
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, session)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}

/// Export errors.
#[derive(Debug, Error)]
pub enum ExportError {
    /// File could not be written.
    #[error("failed to write history: {0}")]
    Io(#[from] std::io::Error),

    /// Session could not be encoded or decoded.
    #[error("invalid history JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Stored tallies do not match the recorded rounds.
    #[error("statistics {recorded:?} do not match history {computed:?}")]
    Inconsistent {
        /// Tallies found in the file.
        recorded: Statistics,
        /// Tallies recomputed from the history.
        computed: Statistics,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::MoveCatalog;
    use crate::game::input::InputEvent;
    use crate::game::session::{Game, Step};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn played_session() -> Session {
        let catalog = MoveCatalog::new(["Rock", "Paper", "Scissors", "Lizard", "Spock"]).unwrap();
        let mut game = Game::new(catalog, StdRng::seed_from_u64(11));
        for pick in [0, 4, 2] {
            game.begin_round().unwrap();
            assert!(matches!(game.handle(InputEvent::Select(pick)), Ok(Step::Revealed(_))));
        }
        game.into_session()
    }

    #[test]
    fn test_exported_rounds_still_verify() {
        let session = played_session();
        let json = session_to_json(&session).unwrap();
        let restored = session_from_json(&json).unwrap();

        assert_eq!(restored.id, session.id);
        assert_eq!(restored.history(), session.history());
        assert_eq!(restored.statistics(), session.statistics());
        for round in restored.history() {
            assert_eq!(round.verify(), Ok(()));
        }
    }

    #[test]
    fn test_import_rejects_tampered_statistics() {
        let session = played_session();
        let mut value: serde_json::Value =
            serde_json::from_str(&session_to_json(&session).unwrap()).unwrap();
        value["statistics"]["wins"] = serde_json::json!(99);

        match session_from_json(&value.to_string()) {
            Err(ExportError::Inconsistent { recorded, computed }) => {
                assert_eq!(recorded.wins, 99);
                assert_eq!(computed, session.statistics());
            }
            other => panic!("expected inconsistent tallies, got {:?}", other.map(|s| s.id)),
        }
    }

    #[test]
    fn test_import_rejects_malformed_json() {
        assert!(matches!(session_from_json("{\"id\": 1"), Err(ExportError::Json(_))));
    }

    #[test]
    fn test_write_history_file() {
        let session = played_session();
        let path = std::env::temp_dir().join(format!("hmac-rps-{}.json", session.id));

        write_history(&session, &path).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["history"].as_array().map(Vec::len), Some(3));
        assert_eq!(value["catalog"][4], "Spock");
    }
}
