//! Minimax search with alpha-beta pruning

use chess_core::{legal_moves_into, Color, Move, Position};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::eval::{evaluate, MATE};

/// Larger than any reachable score, mates included.
pub const INF: i32 = i32::MAX / 2;

/// Mate scores shrink by this much per ply from the root.
const MATE_PLY_PENALTY: i32 = 100;

/// Result of a root search.
#[derive(Debug, Clone, Default)]
pub struct RootOutcome {
    /// Randomly picked member of `ties` (None if no legal moves)
    pub best_move: Option<Move>,
    /// Best score from the mover's perspective
    pub score: i32,
    /// Every root move that reached `score`, in generation order
    pub ties: Vec<Move>,
    /// Positions visited
    pub nodes: u64,
}

/// Scores every root move and picks one of the best at random.
///
/// Each root move gets a full window of its own, so `ties` holds every move
/// whose true minimax value equals the best.
///
/// # Arguments
/// * `pos` - The position to search; the side to move is the maximizing side
/// * `depth` - Search depth in plies (at least 1)
/// * `rng` - Source of randomness for the tie-break
pub fn pick_best_move<R: Rng + ?Sized>(pos: &Position, depth: u8, rng: &mut R) -> RootOutcome {
    let mut moves = Vec::with_capacity(64);
    legal_moves_into(pos, &mut moves);

    if moves.is_empty() {
        return RootOutcome::default();
    }

    let color = pos.side_to_move;
    let mut nodes = 0u64;
    let mut best_score = -INF;
    let mut ties = Vec::new();

    for mv in moves {
        let child = pos.make_move(mv);
        let score = minimax(
            &child,
            depth.saturating_sub(1),
            color,
            -INF,
            INF,
            1,
            &mut nodes,
        );

        if score > best_score {
            best_score = score;
            ties.clear();
            ties.push(mv);
        } else if score == best_score {
            ties.push(mv);
        }
    }

    RootOutcome {
        best_move: ties.choose(rng).copied(),
        score: best_score,
        ties,
        nodes,
    }
}

/// Recursive minimax with alpha-beta pruning.
///
/// Scores are always from `maximizing`'s point of view; whichever side is to
/// move in `pos` maximizes or minimizes accordingly. `ply` is the distance
/// from the root and only affects mate scores, so that quicker mates rank
/// above slower ones.
pub fn minimax(
    pos: &Position,
    depth: u8,
    maximizing: Color,
    mut alpha: i32,
    mut beta: i32,
    ply: u32,
    nodes: &mut u64,
) -> i32 {
    *nodes += 1;

    if depth == 0 {
        return evaluate(pos, maximizing);
    }

    let mut moves = Vec::with_capacity(64);
    legal_moves_into(pos, &mut moves);

    if moves.is_empty() {
        let mover = pos.side_to_move;
        if pos.in_check(mover) {
            let mate = mate_score(ply);
            return if mover == maximizing { -mate } else { mate };
        }
        return 0; // Stalemate
    }

    if pos.side_to_move == maximizing {
        let mut best = -INF;
        for mv in moves {
            let score = minimax(&pos.make_move(mv), depth - 1, maximizing, alpha, beta, ply + 1, nodes);
            best = best.max(score);
            alpha = alpha.max(best);
            if alpha >= beta {
                break; // Beta cutoff
            }
        }
        best
    } else {
        let mut best = INF;
        for mv in moves {
            let score = minimax(&pos.make_move(mv), depth - 1, maximizing, alpha, beta, ply + 1, nodes);
            best = best.min(score);
            beta = beta.min(best);
            if alpha >= beta {
                break; // Alpha cutoff
            }
        }
        best
    }
}

/// Value of delivering mate `ply` half-moves from the root.
#[inline]
pub fn mate_score(ply: u32) -> i32 {
    MATE - MATE_PLY_PENALTY * ply as i32
}

/// True if `score` can only come from a forced mate.
#[inline]
pub fn is_mate_score(score: i32) -> bool {
    score.abs() > MATE / 2
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
