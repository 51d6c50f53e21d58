//! HMAC Rock-Paper-Scissors
//!
//! Interactive game. Moves are given as command line arguments.

use std::io;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use hmac_rps::{
    MoveCatalog, VERSION,
    game::Game,
    terminal::{self, Cli, GameConfig},
};

const USAGE: &str = "Usage: hmac-rps <MOVE> <MOVE> <MOVE> [MOVE...]\n\
                     Provide an odd number (at least 3) of unique moves.\n\
                     Example: hmac-rps Rock Paper Scissors";

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match GameConfig::from_env().and_then(|c| c.apply_cli(cli)) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::from(1);
        }
    };

    init_logging(config.log_level);

    let catalog = match MoveCatalog::new(config.moves.clone()) {
        Ok(catalog) => catalog,
        Err(e) => {
            eprintln!("Invalid input: {}", e);
            eprintln!("{}", USAGE);
            return ExitCode::from(1);
        }
    };

    info!("HMAC RPS v{}", VERSION);

    match play(catalog, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::from(2)
        }
    }
}

fn init_logging(level: Level) {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(io::stderr)
        .finish();
    if tracing::subscriber::set_global_default(subscriber).is_err() {
        eprintln!("logging already initialized");
    }
}

fn play(catalog: MoveCatalog, config: &GameConfig) -> anyhow::Result<()> {
    let mut game = Game::new(catalog, rand::thread_rng())
        .with_max_commit_attempts(config.max_commit_attempts);

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let outcome = terminal::run(&mut game, stdin.lock(), &mut stdout);

    // Export whatever was played, even if the loop failed
    let session = game.into_session();
    if let Some(path) = &config.history_file {
        terminal::write_history(&session, path)
            .with_context(|| format!("writing {}", path.display()))?;
        info!(path = %path.display(), rounds = session.history().len(), "history written");
    }

    outcome?;
    Ok(())
}
