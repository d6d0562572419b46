pub mod attacks;
pub mod board;
pub mod error;
pub mod movegen;
pub mod notation;
pub mod perft;
pub mod status;
pub mod types;

// Re-export core game logic (not engine-specific)
pub use attacks::*;
pub use board::*;
pub use error::ChessError;
pub use movegen::*;
pub use notation::*;
pub use perft::{perft, perft_divide};
pub use status::*;
pub use types::*;

// =============================================================================
// Engine trait — implemented by move-choosing bots
// =============================================================================

/// Result of a search operation
#[derive(Debug, Clone, Default)]
pub struct SearchResult {
    /// The chosen move (None if no legal moves)
    pub best_move: Option<Move>,
    /// Score of the chosen move in centipawns from the mover's perspective
    pub score: i32,
    /// Every root move that reached `score`; `best_move` is one of them
    pub candidates: Vec<Move>,
    /// Search depth used
    pub depth: u8,
    /// Number of nodes searched (for stats)
    pub nodes: u64,
}

/// Trait that all move-choosing engines implement.
pub trait Engine: Send {
    /// Search the position to a fixed depth.
    ///
    /// # Arguments
    /// * `pos` - The current position to analyze
    /// * `depth` - Search depth in plies
    ///
    /// # Returns
    /// SearchResult containing the chosen move, score, and statistics
    fn search(&mut self, pos: &Position, depth: u8) -> SearchResult;

    /// Returns the engine's name
    fn name(&self) -> &str;

    /// Returns the engine's author
    fn author(&self) -> &str {
        "chess-lab"
    }

    /// Reset internal state for a new game
    fn new_game(&mut self) {}
}
