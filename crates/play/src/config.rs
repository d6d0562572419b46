//! `chess_play.toml` settings.

use std::path::Path;

use anyhow::{Context, Result};
use chess_core::Color;
use game_session::BotSettings;
use minimax_engine::clamp_depth;
use serde::{Deserialize, Serialize};

/// Config file picked up from the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_PATH: &str = "chess_play.toml";

/// Front-end configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlayConfig {
    /// Bot search depth in plies (1..=6)
    pub depth: u8,
    /// Side the bot plays
    pub bot_color: Color,
    pub bot_enabled: bool,
    /// Fixed seed for the bot's tie-breaks; random when absent
    pub seed: Option<u64>,
    /// `tracing` filter used when `RUST_LOG` is not set
    pub log_filter: String,
}

impl Default for PlayConfig {
    fn default() -> Self {
        Self {
            depth: 2,
            bot_color: Color::Black,
            bot_enabled: true,
            seed: None,
            log_filter: "info".to_string(),
        }
    }
}

impl PlayConfig {
    /// Parses TOML text. Missing keys take their defaults.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let mut config: Self = toml::from_str(text).context("invalid config")?;
        config.depth = clamp_depth(config.depth);
        Ok(config)
    }

    /// Load config from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::from_toml_str(&text).with_context(|| format!("in {}", path.display()))
    }

    /// Loads `path` if given (it must exist), else [`DEFAULT_CONFIG_PATH`]
    /// if present, else the defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => {
                let default = Path::new(DEFAULT_CONFIG_PATH);
                if default.is_file() {
                    Self::load(default)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn bot_settings(&self) -> BotSettings {
        BotSettings {
            enabled: self.bot_enabled,
            color: self.bot_color,
            depth: self.depth,
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
