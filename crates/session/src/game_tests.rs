use super::*;
use chess_core::coord_to_sq;

fn at(c: &str) -> u8 {
    coord_to_sq(c).unwrap()
}

fn human_only() -> BotSettings {
    BotSettings {
        enabled: false,
        ..BotSettings::default()
    }
}

#[test]
fn test_new_session_starts_fresh() {
    let session = GameSession::default();
    assert_eq!(session.position(), &Position::startpos());
    assert!(session.history().is_empty());
    assert_eq!(session.outcome(), GameOutcome::InProgress);
    assert_eq!(session.outcome().result_str(), "*");
    assert_eq!(session.status_line(), "White to move");
    assert!(!session.is_bot_turn());
}

#[test]
fn test_play_records_and_replaces_position() {
    let mut session = GameSession::with_seed(human_only(), 1);
    let before = session.position().clone();
    let mv = session.legal_moves_from(at("e2"))[1];
    let record = session.play(mv).unwrap().clone();

    assert_eq!(record.color, Color::White);
    assert_eq!(record.mv, mv);
    assert_eq!(session.history(), &[record]);
    assert_eq!(session.position(), &before.make_move(mv));
    assert_eq!(session.position().side_to_move, Color::Black);
}

#[test]
fn test_rejected_move_changes_nothing() {
    let mut session = GameSession::with_seed(human_only(), 1);
    let err = session.play(chess_core::Move::new(at("e2"), at("e5"))).unwrap_err();
    assert!(matches!(err, SessionError::Chess(chess_core::ChessError::IllegalMove(_))));
    assert!(matches!(session.play_text("e9e4"), Err(SessionError::Chess(_))));
    assert_eq!(session.position(), &Position::startpos());
    assert!(session.history().is_empty());
    assert_eq!(session.generation, 0);
}

#[test]
fn test_fools_mate_ends_the_game() {
    let mut session = GameSession::with_seed(human_only(), 1);
    for text in ["f2f3", "e7e5", "g2g4", "d8h4"] {
        session.play_text(text).unwrap();
    }
    assert_eq!(session.status(), GameStatus::Checkmate);
    assert_eq!(session.outcome(), GameOutcome::BlackWins);
    assert_eq!(session.outcome().result_str(), "0-1");
    assert_eq!(session.status_line(), "Black wins by checkmate");
    assert!(session.legal_moves_from(at("e1")).is_empty());

    assert!(matches!(
        session.play_text("a2a3"),
        Err(SessionError::GameOver(GameStatus::Checkmate))
    ));
    assert!(matches!(session.suggest(), Err(SessionError::GameOver(_))));

    let texts: Vec<&str> = session.history().iter().map(|r| r.text.as_str()).collect();
    assert_eq!(texts, ["f2f3", "e7e5", "g2g4", "d8h4"]);
    let colors: Vec<Color> = session.history().iter().map(|r| r.color).collect();
    assert_eq!(colors, [Color::White, Color::Black, Color::White, Color::Black]);
}

#[test]
fn test_outcome_mapping() {
    assert_eq!(
        GameOutcome::from_status(GameStatus::Checkmate, Color::Black),
        GameOutcome::WhiteWins
    );
    assert_eq!(
        GameOutcome::from_status(GameStatus::Stalemate, Color::White),
        GameOutcome::Draw
    );
    assert_eq!(
        GameOutcome::from_status(GameStatus::Check, Color::White),
        GameOutcome::InProgress
    );
    assert_eq!(GameOutcome::WhiteWins.result_str(), "1-0");
    assert_eq!(GameOutcome::Draw.result_str(), "1/2-1/2");
    assert!(GameOutcome::Draw.is_over());
    assert!(!GameOutcome::InProgress.is_over());
}

#[test]
fn test_check_status_line() {
    let mut session = GameSession::with_seed(human_only(), 1);
    for text in ["e2e4", "f7f6", "d2d4", "g7g5", "d1h5"] {
        session.play_text(text).unwrap();
    }
    assert_eq!(session.status(), GameStatus::Checkmate);

    session.reset();
    for text in ["e2e4", "f7f5", "d1h5"] {
        session.play_text(text).unwrap();
    }
    assert_eq!(session.status_line(), "Black to move (in check)");
}

#[test]
fn test_reset_keeps_bot_settings() {
    let bot = BotSettings {
        enabled: true,
        color: Color::White,
        depth: 3,
    };
    let mut session = GameSession::with_seed(bot, 5);
    session.set_bot_enabled(false);
    session.play_text("d2d4").unwrap();
    session.reset();

    assert_eq!(session.position(), &Position::startpos());
    assert!(session.history().is_empty());
    assert_eq!(session.bot().color, Color::White);
    assert_eq!(session.bot().depth, 3);
    assert!(!session.bot().enabled);
}

#[test]
fn test_bot_turn_and_settings() {
    let mut session = GameSession::with_seed(BotSettings::default(), 2);
    assert!(!session.is_bot_turn());
    session.play_text("e2e4").unwrap();
    assert!(session.is_bot_turn());

    session.set_bot_enabled(false);
    assert!(!session.is_bot_turn());
    session.set_bot_enabled(true);
    session.set_bot_color(Color::White);
    assert!(!session.is_bot_turn());

    session.set_bot_depth(0);
    assert_eq!(session.bot().depth, 1);
    session.set_bot_depth(99);
    assert_eq!(session.bot().depth, minimax_engine::MAX_DEPTH);
}

#[test]
fn test_depth_clamped_on_construction() {
    let session = GameSession::new(BotSettings {
        depth: 12,
        ..BotSettings::default()
    });
    assert_eq!(session.bot().depth, minimax_engine::MAX_DEPTH);
}

#[test]
fn test_suggest_finds_legal_move() {
    let mut session = GameSession::with_seed(human_only(), 9);
    let (mv, _score) = session.suggest().unwrap();
    assert!(session.legal_moves_from(mv.from).contains(&mv));
    // Hints do not touch the game.
    assert!(session.history().is_empty());
}

#[test]
fn test_seeded_sessions_give_same_hint() {
    let mut a = GameSession::with_seed(human_only(), 77);
    let mut b = GameSession::with_seed(human_only(), 77);
    assert_eq!(a.suggest().unwrap(), b.suggest().unwrap());
}

#[test]
fn test_records_serialize() {
    let mut session = GameSession::with_seed(human_only(), 1);
    let record = session.play_text("g1f3").unwrap().clone();
    let json = serde_json::to_string(&record).unwrap();
    assert!(json.contains("\"white\""));
    let back: MoveRecord = serde_json::from_str(&json).unwrap();
    assert_eq!(back, record);
}

#[test]
fn test_load_position() {
    let mut session = GameSession::with_seed(BotSettings::default(), 1);
    session.play_text("e2e4").unwrap();
    let pos = Position::from_fen("k7/8/1Q6/8/8/8/8/1K6 b - - 0 1").unwrap();
    session.load_position(pos.clone());

    assert_eq!(session.position(), &pos);
    assert!(session.history().is_empty());
    assert_eq!(session.outcome(), GameOutcome::Draw);
    assert_eq!(session.status_line(), "Draw by stalemate");
    assert!(!session.is_bot_turn(), "no bot move in a finished game");
}
