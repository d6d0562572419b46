//! Minimax Chess Engine
//!
//! Fixed-depth minimax with alpha-beta pruning over a hand-written
//! evaluation. When several moves share the best score one of them is picked
//! at random, so the bot does not replay the same game every time.

mod eval;
mod search;

use chess_core::{Color, Engine, Move, Position, SearchResult};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;

/// Deepest search the engine will run, in plies.
pub const MAX_DEPTH: u8 = 6;

/// Clamps a requested depth into `1..=MAX_DEPTH`.
pub fn clamp_depth(depth: u8) -> u8 {
    depth.clamp(1, MAX_DEPTH)
}

/// Chess engine using minimax with alpha-beta pruning.
///
/// This engine uses:
/// - Minimax search with alpha-beta pruning and mate-distance scoring
/// - Material, center, pawn-advancement, check and mobility evaluation
/// - A seedable RNG for choosing among equally scored moves
#[derive(Debug, Clone)]
pub struct MinimaxEngine {
    rng: StdRng,
    /// Node counter for statistics
    nodes: u64,
}

impl MinimaxEngine {
    /// Engine seeded from the operating system.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
            nodes: 0,
        }
    }

    /// Engine whose tie-breaks are reproducible.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            nodes: 0,
        }
    }

    /// Picks a move for `color`.
    ///
    /// Returns `None` when `color` has no legal move or it is not `color`'s
    /// turn in `pos`.
    pub fn choose_move(&mut self, pos: &Position, color: Color, depth: u8) -> Option<Move> {
        if pos.side_to_move != color {
            debug!(%color, to_move = %pos.side_to_move, "not this color's turn");
            return None;
        }
        self.search(pos, depth).best_move
    }

    /// Best move for the side to move together with its score, as a hint.
    pub fn suggest(&mut self, pos: &Position, depth: u8) -> Option<(Move, i32)> {
        let result = self.search(pos, depth);
        result.best_move.map(|mv| (mv, result.score))
    }

    /// Nodes visited by the most recent search.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }
}

impl Default for MinimaxEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for MinimaxEngine {
    fn search(&mut self, pos: &Position, depth: u8) -> SearchResult {
        let depth = clamp_depth(depth);
        let outcome = search::pick_best_move(pos, depth, &mut self.rng);
        self.nodes = outcome.nodes;

        debug!(
            depth,
            nodes = outcome.nodes,
            score = outcome.score,
            ties = outcome.ties.len(),
            best = ?outcome.best_move.map(chess_core::describe),
            "search finished"
        );

        SearchResult {
            best_move: outcome.best_move,
            score: outcome.score,
            candidates: outcome.ties,
            depth,
            nodes: outcome.nodes,
        }
    }

    fn name(&self) -> &str {
        "Minimax v1.0"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}

// Re-export for direct use if needed
pub use eval::{evaluate, piece_value, MATE};
pub use search::{is_mate_score, mate_score, minimax, pick_best_move, RootOutcome, INF};

#[cfg(test)]
#[path = "lib_tests.rs"]
mod lib_tests;
