//! Off-executor bot searches.
//!
//! The search is CPU-bound, so it runs on Tokio's blocking pool with its own
//! copy of the position. The session stays free to answer queries while the
//! bot thinks, and an answer that arrives after the position changed is
//! dropped.

use chess_core::{Color, Move, Position};
use minimax_engine::MinimaxEngine;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::error::SessionError;
use crate::game::{GameSession, MoveRecord};

/// A bot search in flight.
#[derive(Debug)]
pub struct BotRequest {
    /// Session generation the snapshot was taken at
    generation: u64,
    color: Color,
    task: JoinHandle<Option<Move>>,
}

impl BotRequest {
    pub fn color(&self) -> Color {
        self.color
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

fn spawn_search(
    handle: &Handle,
    position: Position,
    color: Color,
    depth: u8,
    seed: u64,
) -> JoinHandle<Option<Move>> {
    handle.spawn_blocking(move || {
        let mut engine = MinimaxEngine::with_seed(seed);
        engine.choose_move(&position, color, depth)
    })
}

impl GameSession {
    /// Starts a bot search on a snapshot of the current position.
    ///
    /// Must be called from inside a Tokio runtime.
    pub fn request_bot_move(&mut self) -> Result<BotRequest, SessionError> {
        let bot = self.bot();
        if !bot.enabled {
            return Err(SessionError::BotDisabled);
        }
        let st = self.status();
        if st.is_terminal() {
            return Err(SessionError::GameOver(st));
        }
        if self.position().side_to_move != bot.color {
            return Err(SessionError::NotBotsTurn);
        }

        let handle = Handle::try_current().map_err(|e| SessionError::Worker(e.to_string()))?;
        let seed = self.next_seed();
        debug!(color = %bot.color, depth = bot.depth, generation = self.generation, "bot thinking");

        Ok(BotRequest {
            generation: self.generation,
            color: bot.color,
            task: spawn_search(&handle, self.position().clone(), bot.color, bot.depth, seed),
        })
    }

    /// Waits for `request` and plays its move.
    ///
    /// Returns `Ok(None)` when the position changed since the request was made
    /// (the answer is discarded) or the bot found no move.
    pub async fn finish_bot_move(
        &mut self,
        request: BotRequest,
    ) -> Result<Option<MoveRecord>, SessionError> {
        let BotRequest {
            generation, task, ..
        } = request;
        let mv = task.await.map_err(|e| SessionError::Worker(e.to_string()))?;

        if generation != self.generation {
            debug!(generation, current = self.generation, "discarding stale bot move");
            return Ok(None);
        }
        match mv {
            Some(mv) => Ok(Some(self.play(mv)?.clone())),
            None => Ok(None),
        }
    }

    /// Searches and plays a bot move in one go.
    pub async fn play_bot_move(&mut self) -> Result<Option<MoveRecord>, SessionError> {
        let request = self.request_bot_move()?;
        self.finish_bot_move(request).await
    }
}
