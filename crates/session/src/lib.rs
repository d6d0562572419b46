//! Game session: the single owned "current game".
//!
//! A [`GameSession`] holds the position, the move history and the bot
//! settings. Every accepted move replaces the position with a new value; the
//! bot searches on a snapshot off the async executor and hands back one move.

mod error;
mod game;
mod worker;

pub use error::SessionError;
pub use game::{BotSettings, GameOutcome, GameSession, MoveRecord};
pub use worker::BotRequest;
