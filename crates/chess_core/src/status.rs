use serde::{Deserialize, Serialize};

use crate::{board::Position, movegen::has_legal_move};

/// Classification of a position for the side to move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    Normal,
    Check,
    Checkmate,
    Stalemate,
}

impl GameStatus {
    /// Checkmate or stalemate: the side to move has no legal move.
    pub fn is_terminal(self) -> bool {
        matches!(self, GameStatus::Checkmate | GameStatus::Stalemate)
    }

    pub fn in_check(self) -> bool {
        matches!(self, GameStatus::Check | GameStatus::Checkmate)
    }
}

pub fn status(pos: &Position) -> GameStatus {
    let in_check = pos.in_check(pos.side_to_move);
    match (in_check, has_legal_move(pos)) {
        (true, false) => GameStatus::Checkmate,
        (false, false) => GameStatus::Stalemate,
        (true, true) => GameStatus::Check,
        (false, true) => GameStatus::Normal,
    }
}

#[cfg(test)]
#[path = "status_tests.rs"]
mod status_tests;
