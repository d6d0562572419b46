//! Game state management

use chess_core::{
    describe, legal_moves, parse_move, status, Color, GameStatus, Move, Position,
};
use minimax_engine::{clamp_depth, MinimaxEngine};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::SessionError;

/// A move as it appears in the game record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// Side that played the move
    pub color: Color,
    /// Text form, see [`chess_core::describe`]
    pub text: String,
    pub mv: Move,
}

/// Game result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOutcome {
    InProgress,
    WhiteWins,
    BlackWins,
    Draw,
}

impl GameOutcome {
    /// Outcome of a position with the given status. A mated side to move
    /// has lost.
    pub fn from_status(status: GameStatus, side_to_move: Color) -> Self {
        match (status, side_to_move) {
            (GameStatus::Checkmate, Color::White) => GameOutcome::BlackWins,
            (GameStatus::Checkmate, Color::Black) => GameOutcome::WhiteWins,
            (GameStatus::Stalemate, _) => GameOutcome::Draw,
            _ => GameOutcome::InProgress,
        }
    }

    /// Result token as written at the end of a game score.
    pub fn result_str(self) -> &'static str {
        match self {
            GameOutcome::WhiteWins => "1-0",
            GameOutcome::BlackWins => "0-1",
            GameOutcome::Draw => "1/2-1/2",
            GameOutcome::InProgress => "*",
        }
    }

    pub fn is_over(self) -> bool {
        self != GameOutcome::InProgress
    }
}

/// Who the bot plays and how hard it thinks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BotSettings {
    pub enabled: bool,
    pub color: Color,
    /// Search depth in plies, clamped to the engine's range
    pub depth: u8,
}

impl Default for BotSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            color: Color::Black,
            depth: 2,
        }
    }
}

/// Represents the current state of a chess game
#[derive(Debug, Clone)]
pub struct GameSession {
    /// Current position, replaced on every move
    position: Position,
    /// Move history
    history: Vec<MoveRecord>,
    bot: BotSettings,
    /// Bumped whenever the position changes; stale bot answers are dropped
    pub(crate) generation: u64,
    /// Seeds each bot search
    rng: StdRng,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(BotSettings::default())
    }
}

impl GameSession {
    pub fn new(bot: BotSettings) -> Self {
        Self::with_rng(bot, StdRng::from_entropy())
    }

    /// Session whose bot moves and hints are reproducible.
    pub fn with_seed(bot: BotSettings, seed: u64) -> Self {
        Self::with_rng(bot, StdRng::seed_from_u64(seed))
    }

    fn with_rng(bot: BotSettings, rng: StdRng) -> Self {
        Self {
            position: Position::startpos(),
            history: Vec::new(),
            bot: BotSettings {
                depth: clamp_depth(bot.depth),
                ..bot
            },
            generation: 0,
            rng,
        }
    }

    pub fn position(&self) -> &Position {
        &self.position
    }

    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    pub fn bot(&self) -> BotSettings {
        self.bot
    }

    pub fn set_bot_enabled(&mut self, enabled: bool) {
        self.bot.enabled = enabled;
    }

    pub fn set_bot_color(&mut self, color: Color) {
        self.bot.color = color;
    }

    pub fn set_bot_depth(&mut self, depth: u8) {
        self.bot.depth = clamp_depth(depth);
    }

    pub fn status(&self) -> GameStatus {
        status(&self.position)
    }

    pub fn outcome(&self) -> GameOutcome {
        GameOutcome::from_status(self.status(), self.position.side_to_move)
    }

    /// True if the bot should move now.
    pub fn is_bot_turn(&self) -> bool {
        self.bot.enabled
            && self.position.side_to_move == self.bot.color
            && !self.status().is_terminal()
    }

    /// One-line description of the game state for display.
    pub fn status_line(&self) -> String {
        let to_move = self.position.side_to_move;
        match self.status() {
            GameStatus::Checkmate => format!("{} wins by checkmate", to_move.other()),
            GameStatus::Stalemate => "Draw by stalemate".to_string(),
            GameStatus::Check => format!("{to_move} to move (in check)"),
            GameStatus::Normal => format!("{to_move} to move"),
        }
    }

    /// Legal moves of the piece on `square`.
    pub fn legal_moves_from(&self, square: u8) -> Vec<Move> {
        legal_moves(&self.position, square)
    }

    /// Plays `mv` for the side to move.
    ///
    /// The move must be one of the current legal moves; nothing is changed
    /// when it is rejected.
    pub fn play(&mut self, mv: Move) -> Result<&MoveRecord, SessionError> {
        let st = self.status();
        if st.is_terminal() {
            return Err(SessionError::GameOver(st));
        }

        let mover = self.position.side_to_move;
        let next = self.position.apply_move(mv).inspect_err(|e| {
            warn!(error = %e, "rejected move");
        })?;

        let record = MoveRecord {
            color: mover,
            text: describe(mv),
            mv,
        };
        info!(color = %mover, mv = %record.text, "move played");

        self.position = next;
        self.generation += 1;
        self.history.push(record);
        Ok(&self.history[self.history.len() - 1])
    }

    /// Parses `text` against the current position and plays it.
    pub fn play_text(&mut self, text: &str) -> Result<&MoveRecord, SessionError> {
        let st = self.status();
        if st.is_terminal() {
            return Err(SessionError::GameOver(st));
        }
        let mv = parse_move(&self.position, text).inspect_err(|e| {
            warn!(input = text, error = %e, "could not read move");
        })?;
        self.play(mv)
    }

    /// Best move for the side to move and its score, at the bot's depth.
    pub fn suggest(&mut self) -> Result<(Move, i32), SessionError> {
        let st = self.status();
        if st.is_terminal() {
            return Err(SessionError::GameOver(st));
        }
        let mut engine = MinimaxEngine::with_seed(self.next_seed());
        let hint = engine.suggest(&self.position, self.bot.depth);
        debug!(nodes = engine.nodes(), "hint search finished");
        // A non-terminal position always has a move.
        hint.ok_or(SessionError::GameOver(st))
    }

    /// Starts a new game. Bot settings are kept.
    pub fn reset(&mut self) {
        self.position = Position::startpos();
        self.history.clear();
        self.generation += 1;
        info!("new game");
    }

    /// Starts a new game from `position` instead of the initial layout.
    pub fn load_position(&mut self, position: Position) {
        info!(fen = %position.to_fen(), "loaded position");
        self.position = position;
        self.history.clear();
        self.generation += 1;
    }

    pub(crate) fn next_seed(&mut self) -> u64 {
        self.rng.gen()
    }
}

#[cfg(test)]
#[path = "game_tests.rs"]
mod game_tests;
