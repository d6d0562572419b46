use super::*;
use chess_core::{all_legal_moves, parse_move};

#[test]
fn minimax_engine_returns_legal_move() {
    let mut engine = MinimaxEngine::with_seed(11);
    let pos = Position::startpos();

    let result = engine.search(&pos, 2);

    let mv = result.best_move.unwrap();
    assert!(all_legal_moves(&pos).contains(&mv));
    assert!(result.candidates.contains(&mv));
    assert_eq!(result.depth, 2);
    assert_eq!(engine.nodes(), result.nodes);
}

#[test]
fn minimax_engine_clamps_depth() {
    assert_eq!(clamp_depth(0), 1);
    assert_eq!(clamp_depth(3), 3);
    assert_eq!(clamp_depth(40), MAX_DEPTH);

    let mut engine = MinimaxEngine::with_seed(1);
    let result = engine.search(&Position::startpos(), 0);
    assert_eq!(result.depth, 1);
    assert!(result.best_move.is_some());
}

#[test]
fn minimax_engine_handles_checkmate() {
    let mut engine = MinimaxEngine::with_seed(2);
    let pos =
        Position::from_fen("r1bqkbnr/pppp1Qpp/2n5/4p3/2B1P3/8/PPPP1PPP/RNB1K1NR b KQkq - 0 1")
            .unwrap();

    assert!(engine.search(&pos, 2).best_move.is_none());
    assert!(engine.choose_move(&pos, Color::Black, 2).is_none());
    assert!(engine.suggest(&pos, 2).is_none());
}

#[test]
fn minimax_engine_handles_stalemate() {
    let mut engine = MinimaxEngine::with_seed(3);
    let pos = Position::from_fen("k7/8/1Q6/8/8/8/8/1K6 b - - 0 1").unwrap();

    assert!(engine.choose_move(&pos, Color::Black, 2).is_none());
}

#[test]
fn choose_move_only_for_side_to_move() {
    let mut engine = MinimaxEngine::with_seed(4);
    let pos = Position::startpos();
    assert!(engine.choose_move(&pos, Color::Black, 1).is_none());
    assert!(engine.choose_move(&pos, Color::White, 1).is_some());
}

#[test]
fn seeded_engines_agree() {
    let pos = Position::startpos();
    let pos = pos.apply_move(parse_move(&pos, "e2e4").unwrap()).unwrap();
    let a = MinimaxEngine::with_seed(99).choose_move(&pos, Color::Black, 2);
    let b = MinimaxEngine::with_seed(99).choose_move(&pos, Color::Black, 2);
    assert_eq!(a, b);
}

#[test]
fn suggest_reports_mate() {
    let mut engine = MinimaxEngine::with_seed(5);
    let pos = Position::from_fen("6k1/5ppp/8/8/8/8/5PPP/4Q1K1 w - - 0 1").unwrap();
    let (mv, score) = engine.suggest(&pos, 2).unwrap();
    assert_eq!(chess_core::describe(mv), "e1e8");
    assert!(is_mate_score(score));
    assert_eq!(score, mate_score(1));
}

#[test]
fn engine_trait_metadata() {
    let engine = MinimaxEngine::default();
    assert_eq!(engine.name(), "Minimax v1.0");
    assert_eq!(engine.author(), "chess-lab");
}
