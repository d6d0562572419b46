use crate::{
    attacks::{DIAGONALS, KING_DELTAS, KNIGHT_DELTAS, ORTHOGONALS, is_square_attacked},
    board::Position,
    types::*,
};

const ALL_DIRS: [(i8, i8); 8] = [
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
];

/// Legal moves for the piece on `from`.
///
/// Empty when the square is empty, holds a piece of the side not to move, or
/// the piece has nowhere to go.
pub fn legal_moves(pos: &Position, from: u8) -> Vec<Move> {
    let mut out = Vec::with_capacity(28);
    match pos.piece_at(from) {
        Some(pc) if pc.color == pos.side_to_move => {
            pseudo_moves_from(pos, from, pc, &mut out);
            out.retain(|&mv| leaves_king_safe(pos, mv, pc.color));
        }
        _ => {}
    }
    out
}

/// Generate all legal moves for the side to move, returning a freshly allocated vector.
pub fn all_legal_moves(pos: &Position) -> Vec<Move> {
    let mut out = Vec::with_capacity(64);
    legal_moves_into(pos, &mut out);
    out
}

/// Generate all legal moves for the side to move into the provided buffer,
/// reusing it across calls.
pub fn legal_moves_into(pos: &Position, out: &mut Vec<Move>) {
    out.clear();
    pseudo_moves(pos, pos.side_to_move, out);

    let mover = pos.side_to_move;
    // Each candidate is played on a scratch copy; `pos` never changes.
    out.retain(|&mv| leaves_king_safe(pos, mv, mover));
}

/// True if the side to move has at least one legal move. Stops at the first.
pub fn has_legal_move(pos: &Position) -> bool {
    let mover = pos.side_to_move;
    let mut buf = Vec::with_capacity(28);
    for from in 0..64u8 {
        let Some(pc) = pos.piece_at(from) else {
            continue;
        };
        if pc.color != mover {
            continue;
        }
        buf.clear();
        pseudo_moves_from(pos, from, pc, &mut buf);
        if buf.iter().any(|&mv| leaves_king_safe(pos, mv, mover)) {
            return true;
        }
    }
    false
}

/// Number of legal moves `color` would have in this placement, whether or not
/// it is that color's turn. En passant only exists for the side to move.
pub fn count_legal_moves_for(pos: &Position, color: Color) -> usize {
    let mut buf = Vec::with_capacity(64);
    pseudo_moves(pos, color, &mut buf);
    buf.iter()
        .filter(|&&mv| leaves_king_safe(pos, mv, color))
        .count()
}

/// Pseudo-legal moves for the piece on `from`, ignoring own-king safety.
pub fn pseudo_legal_moves(pos: &Position, from: u8) -> Vec<Move> {
    let mut out = Vec::new();
    if let Some(pc) = pos.piece_at(from) {
        pseudo_moves_from(pos, from, pc, &mut out);
    }
    out
}

fn leaves_king_safe(pos: &Position, mv: Move, mover: Color) -> bool {
    !pos.make_move(mv).in_check(mover)
}

fn pseudo_moves(pos: &Position, color: Color, out: &mut Vec<Move>) {
    for from in 0..64u8 {
        if let Some(pc) = pos.piece_at(from)
            && pc.color == color
        {
            pseudo_moves_from(pos, from, pc, out);
        }
    }
}

fn pseudo_moves_from(pos: &Position, from: u8, pc: Piece, out: &mut Vec<Move>) {
    match pc.kind {
        PieceKind::Pawn => gen_pawn(pos, from, pc.color, out),
        PieceKind::Knight => gen_steps(pos, from, pc.color, &KNIGHT_DELTAS, out),
        PieceKind::Bishop => gen_slider(pos, from, pc.color, &DIAGONALS, out),
        PieceKind::Rook => gen_slider(pos, from, pc.color, &ORTHOGONALS, out),
        PieceKind::Queen => gen_slider(pos, from, pc.color, &ALL_DIRS, out),
        PieceKind::King => {
            gen_steps(pos, from, pc.color, &KING_DELTAS, out);
            gen_castle(pos, from, pc.color, out);
        }
    }
}

fn push_pawn_move(out: &mut Vec<Move>, mut mv: Move, promo_row: i8) {
    // Promotion is always to a queen.
    if row_of(mv.to) == promo_row {
        mv.promo = Some(PieceKind::Queen);
    }
    out.push(mv);
}

fn gen_pawn(pos: &Position, from: u8, c: Color, out: &mut Vec<Move>) {
    let f = file_of(from);
    let r = row_of(from);
    let dir = c.pawn_dir();
    let promo_row = c.promotion_row();

    // forward 1
    if let Some(to) = sq(f, r + dir)
        && pos.piece_at(to).is_none()
    {
        push_pawn_move(out, Move::new(from, to), promo_row);

        // forward 2 from start
        if r == c.pawn_home_row()
            && let Some(to2) = sq(f, r + 2 * dir)
            && pos.piece_at(to2).is_none()
        {
            out.push(Move::new(from, to2));
        }
    }

    // captures + en-passant
    for df in [-1, 1] {
        let Some(to) = sq(f + df, r + dir) else {
            continue;
        };
        match pos.piece_at(to) {
            Some(tpc) if tpc.color != c => {
                push_pawn_move(out, Move::capture(from, to), promo_row);
            }
            Some(_) => {}
            None if pos.en_passant == Some(to) && pos.side_to_move == c => {
                // The victim sits beside the capturing pawn, one row behind the target.
                if let Some(victim) = sq(file_of(to), r)
                    && pos.piece_at(victim) == Some(Piece::new(c.other(), PieceKind::Pawn))
                {
                    let mut mv = Move::capture(from, to);
                    mv.en_passant_capture = Some(victim);
                    out.push(mv);
                }
            }
            None => {}
        }
    }
}

/// Single-step pieces (knight, king).
fn gen_steps(pos: &Position, from: u8, c: Color, deltas: &[(i8, i8)], out: &mut Vec<Move>) {
    let f = file_of(from);
    let r = row_of(from);
    for (df, dr) in deltas {
        if let Some(to) = sq(f + df, r + dr) {
            match pos.piece_at(to) {
                None => out.push(Move::new(from, to)),
                Some(pc) if pc.color != c => out.push(Move::capture(from, to)),
                _ => {}
            }
        }
    }
}

fn gen_slider(pos: &Position, from: u8, c: Color, dirs: &[(i8, i8)], out: &mut Vec<Move>) {
    let f0 = file_of(from);
    let r0 = row_of(from);
    for (df, dr) in dirs {
        let mut f = f0 + df;
        let mut r = r0 + dr;
        while let Some(to) = sq(f, r) {
            match pos.piece_at(to) {
                None => out.push(Move::new(from, to)),
                Some(pc) if pc.color != c => {
                    out.push(Move::capture(from, to));
                    break;
                }
                _ => break,
            }
            f += df;
            r += dr;
        }
    }
}

fn gen_castle(pos: &Position, from: u8, c: Color, out: &mut Vec<Move>) {
    let row = c.back_row();
    // Must be on the home square
    if sq(4, row) != Some(from) {
        return;
    }

    let enemy = c.other();
    // Can't castle out of check.
    if is_square_attacked(pos, from, enemy) {
        return;
    }

    let (king_side, queen_side) = pos.castling.for_color(c);
    let rook = Some(Piece::new(c, PieceKind::Rook));
    let at = |file: i8| row as u8 * 8 + file as u8;
    let empty = |files: &[i8]| files.iter().all(|&file| pos.piece_at(at(file)).is_none());
    let safe = |files: &[i8]| files.iter().all(|&file| !is_square_attacked(pos, at(file), enemy));

    // King side: e->g, f and g empty and not attacked.
    if king_side && pos.piece_at(at(7)) == rook && empty(&[5, 6]) && safe(&[5, 6]) {
        let mut mv = Move::new(from, at(6));
        mv.castle_rook = Some((at(7), at(5)));
        out.push(mv);
    }
    // Queen side: e->c, d c b empty; d and c not attacked.
    if queen_side && pos.piece_at(at(0)) == rook && empty(&[3, 2, 1]) && safe(&[3, 2]) {
        let mut mv = Move::new(from, at(2));
        mv.castle_rook = Some((at(0), at(3)));
        out.push(mv);
    }
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
