//! Text Rendering
//!
//! Plain-text tables and messages for the interactive console.

use std::fmt::Write as _;

use crate::core::catalog::MoveCatalog;
use crate::core::matchup::MatchupTable;
use crate::core::rules::Outcome;
use crate::game::input::{CMD_EXIT, CMD_HELP, CMD_HISTORY};
use crate::game::round::RoundResult;
use crate::game::session::Statistics;
use crate::proof::commitment::Commitment;

/// Corner cell of the matchup table. Rows are your move, columns the computer's.
pub const TABLE_CORNER: &str = " v You\\PC > ";

/// Prompt shown before each read.
pub const PROMPT: &str = "Enter your move: ";

/// Printed when a line is neither a move number nor a command.
pub const INVALID_SELECTION: &str = "Invalid move. Please choose a valid move.";

/// Commitment line and numbered menu.
pub fn render_round_header(commitment: &Commitment, catalog: &MoveCatalog) -> String {
    let mut out = format!("\nHMAC: {}\n", commitment);
    out.push_str(&render_menu(catalog));
    out
}

/// Numbered move list plus commands.
pub fn render_menu(catalog: &MoveCatalog) -> String {
    let mut out = String::new();
    for (i, name) in catalog.iter().enumerate() {
        let _ = writeln!(out, "{} - {}", i + 1, name);
    }
    let _ = writeln!(out, "{} - exit", CMD_EXIT);
    let _ = writeln!(out, "{} - help", CMD_HELP);
    let _ = writeln!(out, "{} - history game", CMD_HISTORY);
    out
}

/// Reveal lines for a finished round.
pub fn render_reveal(result: &RoundResult) -> String {
    let verdict = match result.outcome {
        Outcome::Win => "You Win!",
        Outcome::Lose => "You Lose!",
        Outcome::Draw => "Draw!",
        Outcome::Invalid => "Invalid round.",
    };
    format!(
        "Your move: {}\nComputer move: {}\nHMAC key: {}\n{}\n",
        result.human_move, result.opponent_move, result.key, verdict
    )
}

/// `Wins: W, Losses: L, Draws: D`
pub fn render_statistics(stats: &Statistics) -> String {
    format!("Wins: {}, Losses: {}, Draws: {}\n", stats.wins, stats.losses, stats.draws)
}

/// Bordered matchup table.
pub fn render_table(table: &MatchupTable) -> String {
    let catalog = table.catalog();
    let cell_width = catalog.longest_name().max(Outcome::Invalid.label().len());
    let corner_width = catalog.longest_name().max(TABLE_CORNER.chars().count());

    let mut widths = vec![corner_width];
    widths.extend(std::iter::repeat(cell_width).take(table.size()));

    let mut header = vec![TABLE_CORNER.to_string()];
    header.extend(catalog.iter().map(str::to_string));

    let rows: Vec<Vec<String>> = table
        .rows()
        .map(|(name, cells)| {
            std::iter::once(name.to_string())
                .chain(cells.iter().map(|o| o.label().to_string()))
                .collect()
        })
        .collect();

    grid(&widths, &header, &rows)
}

/// Round history table.
pub fn render_history(history: &[RoundResult]) -> String {
    if history.is_empty() {
        return "Game History: no rounds played yet.\n".to_string();
    }

    let header: Vec<String> = ["#", "Computer move", "Your move", "Result"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    let rows: Vec<Vec<String>> = history
        .iter()
        .map(|r| {
            vec![
                r.round.to_string(),
                r.opponent_move.clone(),
                r.human_move.clone(),
                r.outcome.label().to_string(),
            ]
        })
        .collect();

    let mut widths: Vec<usize> = header.iter().map(|h| h.chars().count()).collect();
    for row in &rows {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.chars().count());
        }
    }

    let mut out = String::from("Game History:\n");
    out.push_str(&grid(&widths, &header, &rows));
    out
}

fn grid(widths: &[usize], header: &[String], rows: &[Vec<String>]) -> String {
    let rule = rule(widths);
    let mut out = String::new();
    out.push_str(&rule);
    out.push_str(&line(widths, header));
    out.push_str(&rule);
    for row in rows {
        out.push_str(&line(widths, row));
    }
    out.push_str(&rule);
    out
}

fn rule(widths: &[usize]) -> String {
    let mut out = String::from("+");
    for w in widths {
        out.push_str(&"-".repeat(w + 2));
        out.push('+');
    }
    out.push('\n');
    out
}

fn line(widths: &[usize], cells: &[String]) -> String {
    let mut out = String::from("|");
    for (w, cell) in widths.iter().zip(cells) {
        let _ = write!(out, " {:<width$} |", cell, width = *w);
    }
    out.push('\n');
    out
}
