use super::*;
use crate::notation::parse_move;
use crate::types::Color;

fn fen(s: &str) -> Position {
    Position::from_fen(s).expect("valid FEN")
}

#[test]
fn test_startpos_is_normal() {
    assert_eq!(status(&Position::startpos()), GameStatus::Normal);
}

#[test]
fn test_fools_mate() {
    let mut pos = Position::startpos();
    for text in ["f2f3", "e7e5", "g2g4", "d8h4"] {
        let mv = parse_move(&pos, text).unwrap();
        pos = pos.apply_move(mv).unwrap();
    }
    assert_eq!(pos.side_to_move, Color::White);
    assert_eq!(status(&pos), GameStatus::Checkmate);
    assert!(crate::movegen::all_legal_moves(&pos).is_empty());
    assert!(status(&pos).is_terminal());
}

#[test]
fn test_stalemate() {
    let pos = fen("k7/8/1Q6/8/8/8/8/1K6 b - - 0 1");
    assert_eq!(status(&pos), GameStatus::Stalemate);
    assert!(!status(&pos).in_check());
}

#[test]
fn test_check_with_escape() {
    let pos = fen("4k3/8/8/8/8/8/8/4R2K b - - 0 1");
    assert_eq!(status(&pos), GameStatus::Check);
    assert!(!status(&pos).is_terminal());
}

#[test]
fn test_kingless_positions() {
    // No king: never in check.
    assert_eq!(status(&fen("8/8/8/8/8/8/8/R7 w - - 0 1")), GameStatus::Normal);
    assert_eq!(status(&fen("8/8/8/8/8/8/8/8 w - - 0 1")), GameStatus::Stalemate);
}

#[test]
fn test_back_rank_mate() {
    let pos = fen("4Q1k1/5ppp/8/8/8/8/5PPP/6K1 b - - 1 1");
    assert_eq!(status(&pos), GameStatus::Checkmate);
}
