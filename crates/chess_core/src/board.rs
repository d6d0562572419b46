use serde::{Deserialize, Serialize};

use crate::attacks::is_square_attacked;
use crate::error::ChessError;
use crate::movegen::legal_moves;
use crate::notation::describe;
use crate::types::*;

/// Placement of the standard starting position.
pub const START_LAYOUT: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

// Home squares (a8 = 0).
pub const WHITE_KING_HOME: u8 = 60; // e1
pub const BLACK_KING_HOME: u8 = 4; // e8
const WHITE_ROOK_QUEENSIDE: u8 = 56; // a1
const WHITE_ROOK_KINGSIDE: u8 = 63; // h1
const BLACK_ROOK_QUEENSIDE: u8 = 0; // a8
const BLACK_ROOK_KINGSIDE: u8 = 7; // h8

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CastlingRights {
    pub wk: bool,
    pub wq: bool,
    pub bk: bool,
    pub bq: bool,
}

impl CastlingRights {
    pub fn all() -> Self {
        Self {
            wk: true,
            wq: true,
            bk: true,
            bq: true,
        }
    }

    pub fn none() -> Self {
        Self {
            wk: false,
            wq: false,
            bk: false,
            bq: false,
        }
    }

    /// (king_side, queen_side) for one color.
    pub fn for_color(&self, c: Color) -> (bool, bool) {
        match c {
            Color::White => (self.wk, self.wq),
            Color::Black => (self.bk, self.bq),
        }
    }

    fn clear_color(&mut self, c: Color) {
        match c {
            Color::White => {
                self.wk = false;
                self.wq = false;
            }
            Color::Black => {
                self.bk = false;
                self.bq = false;
            }
        }
    }

    /// Drop whichever right belongs to a rook standing on `home`.
    fn clear_rook_home(&mut self, c: Color, home: u8) {
        match (c, home) {
            (Color::White, WHITE_ROOK_KINGSIDE) => self.wk = false,
            (Color::White, WHITE_ROOK_QUEENSIDE) => self.wq = false,
            (Color::Black, BLACK_ROOK_KINGSIDE) => self.bk = false,
            (Color::Black, BLACK_ROOK_QUEENSIDE) => self.bq = false,
            _ => {}
        }
    }
}

/// A complete game position. Never mutated once handed out; transitions go
/// through [`Position::make_move`] / [`Position::apply_move`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    #[serde(with = "serde_board")]
    pub board: [Option<Piece>; 64],
    pub side_to_move: Color,
    pub castling: CastlingRights,
    pub en_passant: Option<u8>, // square behind a pawn that just advanced 2
    pub halfmove_clock: u32,
    pub fullmove_number: u32,
}

impl Default for Position {
    fn default() -> Self {
        Self::startpos()
    }
}

impl Position {
    pub fn startpos() -> Self {
        let board = match parse_layout(START_LAYOUT) {
            Ok(b) => b,
            Err(_) => unreachable!("start layout is well formed"),
        };
        Position {
            board,
            side_to_move: Color::White,
            castling: CastlingRights::all(),
            en_passant: None,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    /// Position from a bare piece placement: white to move, full castling
    /// rights, no en passant target, fresh clocks.
    pub fn from_layout(layout: &str) -> Result<Self, ChessError> {
        Ok(Position {
            board: parse_layout(layout)?,
            side_to_move: Color::White,
            castling: CastlingRights::all(),
            en_passant: None,
            halfmove_clock: 0,
            fullmove_number: 1,
        })
    }

    pub fn from_fen(fen: &str) -> Result<Self, ChessError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();
        if parts.len() < 4 || parts.len() > 6 {
            return Err(ChessError::InvalidFen(format!(
                "expected 4 to 6 fields, got {}",
                parts.len()
            )));
        }

        let board = parse_layout(parts[0])?;

        let side_to_move = match parts[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => {
                return Err(ChessError::InvalidFen(format!(
                    "invalid side to move '{other}'"
                )));
            }
        };

        let mut castling = CastlingRights::none();
        if parts[2] != "-" {
            for c in parts[2].chars() {
                match c {
                    'K' => castling.wk = true,
                    'Q' => castling.wq = true,
                    'k' => castling.bk = true,
                    'q' => castling.bq = true,
                    _ => {
                        return Err(ChessError::InvalidFen(format!(
                            "invalid castling flag '{c}'"
                        )));
                    }
                }
            }
        }

        let en_passant = match parts[3] {
            "-" => None,
            coord => Some(
                coord_to_sq(coord).ok_or_else(|| ChessError::InvalidSquare(coord.to_string()))?,
            ),
        };

        let halfmove_clock = parse_counter(parts.get(4).copied().unwrap_or("0"), "halfmove clock")?;
        let fullmove_number =
            parse_counter(parts.get(5).copied().unwrap_or("1"), "fullmove number")?;

        Ok(Position {
            board,
            side_to_move,
            castling,
            en_passant,
            halfmove_clock,
            fullmove_number,
        })
    }

    /// Placement field only (ranks 8..1).
    pub fn layout(&self) -> String {
        format_layout(&self.board)
    }

    pub fn to_fen(&self) -> String {
        let mut out = format_layout(&self.board);
        out.push(' ');
        out.push(match self.side_to_move {
            Color::White => 'w',
            Color::Black => 'b',
        });

        out.push(' ');
        let before = out.len();
        for (flag, ch) in [
            (self.castling.wk, 'K'),
            (self.castling.wq, 'Q'),
            (self.castling.bk, 'k'),
            (self.castling.bq, 'q'),
        ] {
            if flag {
                out.push(ch);
            }
        }
        if out.len() == before {
            out.push('-');
        }

        out.push(' ');
        match self.en_passant {
            Some(ep) => out.push_str(&sq_to_coord(ep)),
            None => out.push('-'),
        }

        out.push_str(&format!(" {} {}", self.halfmove_clock, self.fullmove_number));
        out
    }

    pub fn king_sq(&self, c: Color) -> Option<u8> {
        (0..64u8).find(|&i| {
            self.board[i as usize] == Some(Piece::new(c, PieceKind::King))
        })
    }

    pub fn piece_at(&self, sq: u8) -> Option<Piece> {
        self.board[sq as usize]
    }
    fn set_piece(&mut self, sq: u8, pc: Option<Piece>) {
        self.board[sq as usize] = pc;
    }

    /// True when `c` has a king and it is attacked. A missing king is never in check.
    pub fn in_check(&self, c: Color) -> bool {
        match self.king_sq(c) {
            Some(ksq) => is_square_attacked(self, ksq, c.other()),
            None => false,
        }
    }

    /// Applies a generated move and returns the resulting position.
    ///
    /// Performs no legality check: `mv` must come from the move generator for
    /// this exact position. Collaborators holding untrusted moves use
    /// [`Position::apply_move`].
    pub fn make_move(&self, mv: Move) -> Position {
        let mut next = self.clone();
        let Some(moved) = self.piece_at(mv.from) else {
            debug_assert!(false, "no piece on {}", sq_to_coord(mv.from));
            return next;
        };
        let captured = self.piece_at(mv.to);

        if let Some(cs) = mv.en_passant_capture {
            next.set_piece(cs, None);
        }

        if let Some((rf, rt)) = mv.castle_rook {
            let rook = next.piece_at(rf);
            next.set_piece(rf, None);
            next.set_piece(rt, rook);
        }

        let placed = Piece::new(moved.color, mv.promo.unwrap_or(moved.kind));
        next.set_piece(mv.from, None);
        next.set_piece(mv.to, Some(placed));

        next.en_passant = None;
        if moved.kind == PieceKind::Pawn {
            let fr = row_of(mv.from);
            let tr = row_of(mv.to);
            if (fr - tr).abs() == 2 {
                next.en_passant = sq(file_of(mv.from), (fr + tr) / 2);
            }
        }

        if moved.kind == PieceKind::King {
            next.castling.clear_color(moved.color);
        }
        if moved.kind == PieceKind::Rook {
            next.castling.clear_rook_home(moved.color, mv.from);
        }
        if let Some(cp) = captured
            && cp.kind == PieceKind::Rook
        {
            next.castling.clear_rook_home(cp.color, mv.to);
        }

        next.halfmove_clock = if moved.kind == PieceKind::Pawn || mv.is_capture || captured.is_some()
        {
            0
        } else {
            self.halfmove_clock + 1
        };

        if self.side_to_move == Color::Black {
            next.fullmove_number += 1;
        }
        next.side_to_move = self.side_to_move.other();
        next
    }

    /// Applies `mv` only if it is one of this position's legal moves.
    pub fn apply_move(&self, mv: Move) -> Result<Position, ChessError> {
        if !legal_moves(self, mv.from).contains(&mv) {
            return Err(ChessError::IllegalMove(describe(mv)));
        }
        Ok(self.make_move(mv))
    }
}

fn parse_counter(field: &str, what: &str) -> Result<u32, ChessError> {
    field
        .parse()
        .map_err(|_| ChessError::InvalidFen(format!("invalid {what} '{field}'")))
}

/// Parses the placement field: ranks 8..1 separated by '/', digits for runs
/// of empty squares. Either the whole board parses or nothing is returned.
fn parse_layout(layout: &str) -> Result<[Option<Piece>; 64], ChessError> {
    let invalid = |reason: String| ChessError::InvalidLayout {
        layout: layout.to_string(),
        reason,
    };

    let ranks: Vec<&str> = layout.split('/').collect();
    if ranks.len() != 8 {
        return Err(invalid(format!("expected 8 ranks, found {}", ranks.len())));
    }

    let mut board = [None; 64];
    for (row, rank_str) in ranks.iter().enumerate() {
        let mut file: usize = 0;
        for ch in rank_str.chars() {
            if let Some(d) = ch.to_digit(10) {
                if !(1..=8).contains(&d) {
                    return Err(invalid(format!("empty-run digit '{ch}' out of range")));
                }
                file += d as usize;
            } else {
                let pc = Piece::from_symbol(ch).ok_or(ChessError::UnknownPiece(ch))?;
                if file < 8 {
                    board[row * 8 + file] = Some(pc);
                }
                file += 1;
            }
            if file > 8 {
                return Err(invalid(format!("rank {} has more than 8 squares", 8 - row)));
            }
        }
        if file != 8 {
            return Err(invalid(format!(
                "rank {} has {} squares, expected 8",
                8 - row,
                file
            )));
        }
    }
    Ok(board)
}

fn format_layout(board: &[Option<Piece>; 64]) -> String {
    let mut out = String::with_capacity(72);
    for row in 0..8 {
        let mut empty = 0u8;
        for file in 0..8 {
            match board[row * 8 + file] {
                Some(pc) => {
                    if empty > 0 {
                        out.push(char::from(b'0' + empty));
                        empty = 0;
                    }
                    out.push(pc.symbol());
                }
                None => empty += 1,
            }
        }
        if empty > 0 {
            out.push(char::from(b'0' + empty));
        }
        if row < 7 {
            out.push('/');
        }
    }
    out
}

/// Serializes the board as its placement string.
mod serde_board {
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    use crate::types::Piece;

    pub fn serialize<S: Serializer>(
        board: &[Option<Piece>; 64],
        s: S,
    ) -> Result<S::Ok, S::Error> {
        s.serialize_str(&super::format_layout(board))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<[Option<Piece>; 64], D::Error> {
        let layout = String::deserialize(d)?;
        super::parse_layout(&layout).map_err(D::Error::custom)
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
