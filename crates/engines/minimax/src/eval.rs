//! Static position evaluation

use chess_core::{count_legal_moves_for, file_of, row_of, Color, Piece, PieceKind, Position};

/// Score of a forced mate at the root. Mates found deeper in the tree score
/// `MATE - 100 * ply`.
pub const MATE: i32 = 100_000;

/// Bonus for giving check, penalty for standing in it.
pub const CHECK_BONUS: i32 = 30;

/// Flat bonus per pawn on the board.
pub const PAWN_ACTIVITY: i32 = 5;

/// Evaluates the position from `perspective`'s point of view.
///
/// Returns a score in centipawns:
/// - Positive = good for `perspective`
/// - Negative = bad for `perspective`
///
/// Per piece: material, proximity to the center and (pawns only) distance
/// advanced from the home row. On top of that the check state of both kings
/// and the difference in legal move counts.
pub fn evaluate(pos: &Position, perspective: Color) -> i32 {
    let opponent = perspective.other();
    let mut score = 0i32;

    for sq in 0..64u8 {
        if let Some(pc) = pos.piece_at(sq) {
            let v = piece_score(pc, sq);
            score += if pc.color == perspective { v } else { -v };
        }
    }

    if pos.in_check(perspective) {
        score -= CHECK_BONUS;
    }
    if pos.in_check(opponent) {
        score += CHECK_BONUS;
    }

    // mobility
    let mine = count_legal_moves_for(pos, perspective) as i32;
    let theirs = count_legal_moves_for(pos, opponent) as i32;
    score + (mine - theirs)
}

/// Returns the material value of a piece in centipawns.
#[inline]
pub fn piece_value(kind: PieceKind) -> i32 {
    match kind {
        PieceKind::Pawn => 100,
        PieceKind::Knight => 300,
        PieceKind::Bishop => 300,
        PieceKind::Rook => 500,
        PieceKind::Queen => 900,
        PieceKind::King => 10_000,
    }
}

/// Everything a single piece contributes, independent of the rest of the board.
pub fn piece_score(pc: Piece, sq: u8) -> i32 {
    let mut v = piece_value(pc.kind) + center_bonus(sq);
    if pc.kind == PieceKind::Pawn {
        v += 10 * pawn_advancement(pc.color, sq) + PAWN_ACTIVITY;
    }
    v
}

/// 40 on the four central squares, falling by 20 per step of Manhattan
/// distance from the center, down to -80 in the corners.
#[inline]
pub fn center_bonus(sq: u8) -> i32 {
    let x = file_of(sq) as i32;
    let y = row_of(sq) as i32;
    10 * (6 - (7 - 2 * x).abs() - (7 - 2 * y).abs())
}

/// Rows a pawn has moved away from its home row.
#[inline]
fn pawn_advancement(color: Color, sq: u8) -> i32 {
    let row = row_of(sq) as i32;
    (row - color.pawn_home_row() as i32) * color.pawn_dir() as i32
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
