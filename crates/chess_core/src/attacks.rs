//! Attack oracle: "is square S attacked by color C".
//!
//! Each piece type is checked through the reverse relation from the target
//! square (where would an attacker have to stand?) instead of generating the
//! attacker's moves. The same offsets drive the move generator, so the two
//! always agree. Used for check detection and for castling-path safety.

use crate::{board::Position, types::*};

pub(crate) const KNIGHT_DELTAS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (-1, 2),
    (-2, 1),
    (1, -2),
    (2, -1),
    (-1, -2),
    (-2, -1),
];

pub(crate) const KING_DELTAS: [(i8, i8); 8] = [
    (1, 1),
    (1, 0),
    (1, -1),
    (0, 1),
    (0, -1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
];

pub(crate) const DIAGONALS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
pub(crate) const ORTHOGONALS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

pub fn is_square_attacked(pos: &Position, target: u8, by: Color) -> bool {
    let tf = file_of(target);
    let tr = row_of(target);
    let holds = |s: u8, kind: PieceKind| pos.piece_at(s) == Some(Piece::new(by, kind));

    // An attacking pawn stands one step "behind" the target from its own
    // point of view, on an adjacent file.
    let pawn_row = tr - by.pawn_dir();
    for df in [-1, 1] {
        if let Some(s) = sq(tf + df, pawn_row)
            && holds(s, PieceKind::Pawn)
        {
            return true;
        }
    }

    for (df, dr) in KNIGHT_DELTAS {
        if let Some(s) = sq(tf + df, tr + dr)
            && holds(s, PieceKind::Knight)
        {
            return true;
        }
    }

    for (df, dr) in KING_DELTAS {
        if let Some(s) = sq(tf + df, tr + dr)
            && holds(s, PieceKind::King)
        {
            return true;
        }
    }

    ray_hits(pos, target, by, &DIAGONALS, PieceKind::Bishop)
        || ray_hits(pos, target, by, &ORTHOGONALS, PieceKind::Rook)
}

/// Walks each ray outwards from `target`; the first occupied square decides.
fn ray_hits(pos: &Position, target: u8, by: Color, dirs: &[(i8, i8)], slider: PieceKind) -> bool {
    let tf = file_of(target);
    let tr = row_of(target);
    for (df, dr) in dirs {
        let mut f = tf + df;
        let mut r = tr + dr;
        while let Some(s) = sq(f, r) {
            if let Some(pc) = pos.piece_at(s) {
                if pc.color == by && (pc.kind == slider || pc.kind == PieceKind::Queen) {
                    return true;
                }
                break;
            }
            f += df;
            r += dr;
        }
    }
    false
}

/// Every square attacked by `by`, indexed by square. Slow; meant for
/// diagnostics and for cross-checking the oracle in tests.
pub fn attacked_squares(pos: &Position, by: Color) -> [bool; 64] {
    let mut out = [false; 64];
    for (s, slot) in out.iter_mut().enumerate() {
        *slot = is_square_attacked(pos, s as u8, by);
    }
    out
}

#[cfg(test)]
#[path = "attacks_tests.rs"]
mod attacks_tests;
