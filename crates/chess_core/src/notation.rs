//! Coordinate move notation: `e2e4`, `e7e8=Q`, `O-O`, `O-O-O`.

use crate::{board::Position, error::ChessError, movegen::all_legal_moves, types::*};

/// Describe a move for move lists and hints.
pub fn describe(mv: Move) -> String {
    if mv.is_castle() {
        return if file_of(mv.to) == 6 {
            "O-O".to_string()
        } else {
            "O-O-O".to_string()
        };
    }
    let mut s = format!("{}{}", sq_to_coord(mv.from), sq_to_coord(mv.to));
    if let Some(kind) = mv.promo {
        s.push('=');
        s.push(kind.letter());
    }
    s
}

/// Resolve text against the legal moves of `pos`.
///
/// Accepts what [`describe`] produces, plus the UCI-style `e7e8q` and a bare
/// `e7e8` for a promotion. Castling may also be given as the king's
/// coordinates (`e1g1`).
pub fn parse_move(pos: &Position, text: &str) -> Result<Move, ChessError> {
    let text = text.trim();
    let legal = all_legal_moves(pos);

    let castle_to_file = match text {
        "O-O" | "0-0" => Some(6),
        "O-O-O" | "0-0-0" => Some(2),
        _ => None,
    };
    if let Some(file) = castle_to_file {
        return legal
            .into_iter()
            .find(|mv| mv.is_castle() && file_of(mv.to) == file)
            .ok_or_else(|| ChessError::IllegalMove(text.to_string()));
    }

    if !text.is_ascii() || text.len() < 4 {
        return Err(ChessError::UnparsableMove(text.to_string()));
    }
    let from = coord_to_sq(&text[0..2])
        .ok_or_else(|| ChessError::InvalidSquare(text[0..2].to_string()))?;
    let to = coord_to_sq(&text[2..4])
        .ok_or_else(|| ChessError::InvalidSquare(text[2..4].to_string()))?;

    let promo = match text[4..].trim_start_matches('=') {
        "" => None,
        p if p.len() == 1 => Some(
            p.chars()
                .next()
                .and_then(PieceKind::from_letter)
                .ok_or_else(|| ChessError::UnparsableMove(text.to_string()))?,
        ),
        _ => return Err(ChessError::UnparsableMove(text.to_string())),
    };

    legal
        .into_iter()
        .find(|mv| mv.from == from && mv.to == to && (promo.is_none() || mv.promo == promo))
        .ok_or_else(|| ChessError::IllegalMove(text.to_string()))
}

#[cfg(test)]
#[path = "notation_tests.rs"]
mod notation_tests;
