//! Interactive Console
//!
//! Line-based loop over any reader/writer pair. Each round: publish the
//! commitment, read until a move or exit, print the reveal.

use std::io::{self, BufRead, Write};

use rand::Rng;
use tracing::debug;

use crate::game::input::{parse_input, InputEvent};
use crate::game::session::{Game, GameError, Step};
use crate::terminal::render::{
    render_history, render_reveal, render_round_header, render_statistics, render_table,
    INVALID_SELECTION, PROMPT,
};

/// Console loop errors.
#[derive(Debug, thiserror::Error)]
pub enum ConsoleError {
    /// Reading input or writing output failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The round state machine refused to continue.
    #[error("game error: {0}")]
    Game(#[from] GameError),
}

/// Play until the human exits or input ends.
///
/// End of input is treated as an exit command. Lines that are not valid
/// UTF-8 are rejected like any other bad selection.
pub fn run<R, I, O>(game: &mut Game<R>, mut input: I, output: &mut O) -> Result<(), ConsoleError>
where
    R: Rng,
    I: BufRead,
    O: Write,
{
    let mut buf = Vec::new();

    while !game.is_exited() {
        let commitment = game.begin_round()?;
        let header = render_round_header(&commitment, &game.session().catalog);
        output.write_all(header.as_bytes())?;

        loop {
            output.write_all(PROMPT.as_bytes())?;
            output.flush()?;

            buf.clear();
            let event = if input.read_until(b'\n', &mut buf)? == 0 {
                debug!("input closed");
                InputEvent::Exit
            } else {
                let line = String::from_utf8_lossy(&buf);
                match parse_input(&line, game.session().catalog.len()) {
                    Ok(event) => event,
                    Err(e) => {
                        debug!(error = %e, "invalid selection");
                        writeln!(output, "{}", INVALID_SELECTION)?;
                        continue;
                    }
                }
            };

            match game.handle(event)? {
                Step::ShowTable => {
                    output.write_all(render_table(game.table()).as_bytes())?;
                    output.write_all(header.as_bytes())?;
                }
                Step::ShowHistory => {
                    output.write_all(render_history(game.session().history()).as_bytes())?;
                    output.write_all(header.as_bytes())?;
                }
                Step::Revealed(result) => {
                    output.write_all(render_reveal(&result).as_bytes())?;
                    output.write_all(render_statistics(&game.session().statistics()).as_bytes())?;
                    break;
                }
                Step::Exited => break,
            }
        }
    }

    output.flush()?;
    Ok(())
}
