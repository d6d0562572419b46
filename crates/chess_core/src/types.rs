use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    White,
    Black,
}
impl Color {
    pub fn other(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
    /// Row (0 = rank 8) pawns of this color start on.
    pub fn pawn_home_row(self) -> i8 {
        match self {
            Color::White => 6,
            Color::Black => 1,
        }
    }
    /// Row a pawn of this color promotes on.
    pub fn promotion_row(self) -> i8 {
        match self {
            Color::White => 0,
            Color::Black => 7,
        }
    }
    /// Row delta of a single pawn step.
    pub fn pawn_dir(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }
    /// Row holding this color's king and rooks at the start.
    pub fn back_row(self) -> i8 {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    pub fn letter(self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Rook => 'R',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        }
    }

    pub fn from_letter(ch: char) -> Option<PieceKind> {
        match ch.to_ascii_lowercase() {
            'p' => Some(PieceKind::Pawn),
            'n' => Some(PieceKind::Knight),
            'b' => Some(PieceKind::Bishop),
            'r' => Some(PieceKind::Rook),
            'q' => Some(PieceKind::Queen),
            'k' => Some(PieceKind::King),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

impl Piece {
    pub fn new(color: Color, kind: PieceKind) -> Self {
        Self { color, kind }
    }

    /// FEN symbol: uppercase for white, lowercase for black.
    pub fn symbol(self) -> char {
        let ch = self.kind.letter();
        match self.color {
            Color::White => ch,
            Color::Black => ch.to_ascii_lowercase(),
        }
    }

    pub fn from_symbol(ch: char) -> Option<Piece> {
        let kind = PieceKind::from_letter(ch)?;
        let color = if ch.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        Some(Piece { color, kind })
    }
}

/// Description of a transition between two positions.
///
/// Moves are only ever produced by the generator; applying one yields a new
/// [`Position`](crate::Position) and never touches the source position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub from: u8, // 0..63, a8 = 0
    pub to: u8,
    pub is_capture: bool,
    pub promo: Option<PieceKind>,
    /// Square of the pawn removed by an en passant capture.
    pub en_passant_capture: Option<u8>,
    /// (rook_from, rook_to) for castling.
    pub castle_rook: Option<(u8, u8)>,
}

impl Move {
    pub fn new(from: u8, to: u8) -> Self {
        Self {
            from,
            to,
            is_capture: false,
            promo: None,
            en_passant_capture: None,
            castle_rook: None,
        }
    }

    pub fn capture(from: u8, to: u8) -> Self {
        Self {
            is_capture: true,
            ..Self::new(from, to)
        }
    }

    pub fn is_en_passant(&self) -> bool {
        self.en_passant_capture.is_some()
    }

    pub fn is_castle(&self) -> bool {
        self.castle_rook.is_some()
    }
}

// Helpers
pub fn file_of(sq: u8) -> i8 {
    (sq % 8) as i8
}
/// Board row, 0 = rank 8 (black's back rank), 7 = rank 1.
pub fn row_of(sq: u8) -> i8 {
    (sq / 8) as i8
}
pub fn sq(file: i8, row: i8) -> Option<u8> {
    if (0..8).contains(&file) && (0..8).contains(&row) {
        Some((row as u8) * 8 + (file as u8))
    } else {
        None
    }
}

pub fn sq_to_coord(sq: u8) -> String {
    let f = (b'a' + (sq % 8)) as char;
    let r = (b'8' - (sq / 8)) as char;
    format!("{f}{r}")
}

pub fn coord_to_sq(c: &str) -> Option<u8> {
    let b = c.as_bytes();
    if b.len() != 2 {
        return None;
    }
    let f = b[0];
    let r = b[1];
    if !(b'a'..=b'h').contains(&f) || !(b'1'..=b'8').contains(&r) {
        return None;
    }
    let file = f - b'a';
    let row = b'8' - r;
    Some(row * 8 + file)
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
