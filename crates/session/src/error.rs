use chess_core::{ChessError, GameStatus};
use thiserror::Error;

/// Errors returned by [`GameSession`](crate::GameSession).
#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Chess(#[from] ChessError),

    #[error("game is over ({0:?})")]
    GameOver(GameStatus),

    #[error("it is not the bot's turn")]
    NotBotsTurn,

    #[error("bot is disabled")]
    BotDisabled,

    #[error("bot worker failed: {0}")]
    Worker(String),
}
