//! Text output for the terminal.

use chess_core::{sq, Position};
use game_session::MoveRecord;
use minimax_engine::{is_mate_score, MATE};

/// Board diagram, white at the bottom unless `flipped`.
pub fn render_board(pos: &Position, flipped: bool) -> String {
    let mut out = String::new();
    let rows: Vec<i8> = if flipped {
        (0..8).rev().collect()
    } else {
        (0..8).collect()
    };
    let files: Vec<i8> = if flipped {
        (0..8).rev().collect()
    } else {
        (0..8).collect()
    };

    for &row in &rows {
        out.push_str(&format!("{} ", 8 - row));
        for &file in &files {
            let symbol = sq(file, row)
                .and_then(|s| pos.piece_at(s))
                .map_or('.', |p| p.symbol());
            out.push(' ');
            out.push(symbol);
        }
        out.push('\n');
    }
    out.push_str("  ");
    for &file in &files {
        out.push(' ');
        out.push((b'a' + file as u8) as char);
    }
    out.push('\n');
    out
}

/// Centipawns as pawns ("+0.35"), or "+M3" for a mate three plies away.
pub fn format_score(score: i32) -> String {
    if is_mate_score(score) {
        let plies = (MATE - score.abs()) / 100;
        let sign = if score > 0 { '+' } else { '-' };
        return format!("{sign}M{plies}");
    }
    format!("{:+.2}", score as f64 / 100.0)
}

/// Numbered move list: "1. e2e4 e7e5 2. g1f3".
pub fn format_history(history: &[MoveRecord]) -> String {
    history
        .chunks(2)
        .enumerate()
        .map(|(i, pair)| {
            let moves: Vec<&str> = pair.iter().map(|r| r.text.as_str()).collect();
            format!("{}. {}", i + 1, moves.join(" "))
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
#[path = "display_tests.rs"]
mod display_tests;
