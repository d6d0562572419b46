//! Error type shared by parsing and move-application entry points.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChessError {
    /// Board placement did not describe exactly 8 ranks of 8 squares.
    #[error("invalid board layout '{layout}': {reason}")]
    InvalidLayout { layout: String, reason: String },

    #[error("unknown piece symbol '{0}'")]
    UnknownPiece(char),

    #[error("invalid FEN: {0}")]
    InvalidFen(String),

    #[error("invalid square '{0}'")]
    InvalidSquare(String),

    /// The move is not one of the legal moves of the position it was applied to.
    #[error("illegal move {0}")]
    IllegalMove(String),

    #[error("cannot parse move '{0}'")]
    UnparsableMove(String),
}
