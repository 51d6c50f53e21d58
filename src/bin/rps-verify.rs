//! Offline Round Verifier
//!
//! Recomputes a round's commitment from the revealed key and computer move
//! and compares it with the HMAC shown before the round.

use std::process::ExitCode;

use clap::Parser;

use hmac_rps::proof::{verify_reveal, Commitment, CommitmentError};

#[derive(Parser, Debug)]
#[command(
    name = "rps-verify",
    version,
    about = "Check that a revealed key and move reproduce a published HMAC"
)]
struct Args {
    /// Revealed key (64 hex digits).
    #[arg(long)]
    key: String,

    /// Revealed computer move.
    #[arg(long = "move", value_name = "MOVE")]
    move_name: String,

    /// HMAC published before the round.
    #[arg(long)]
    hmac: String,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let claimed = match Commitment::from_hex(&args.hmac) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::from(2);
        }
    };

    match verify_reveal(&args.key, &args.move_name, &claimed) {
        Ok(()) => {
            println!("OK");
            ExitCode::SUCCESS
        }
        Err(CommitmentError::Mismatch) => {
            println!("MISMATCH");
            ExitCode::from(1)
        }
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::from(2)
        }
    }
}
