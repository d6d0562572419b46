//! Command-line arguments

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use chess_core::Color;

use crate::config::PlayConfig;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Interactive game against the bot
    Play,
    /// Print the bot's choice for one position
    Suggest,
    /// Count leaf nodes to the given depth
    Perft(u8),
    Help,
}

/// Parsed command line. Flags left out fall back to the config file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    pub command: Command,
    pub config: Option<PathBuf>,
    pub depth: Option<u8>,
    pub color: Option<Color>,
    pub seed: Option<u64>,
    pub no_bot: bool,
    pub fen: Option<String>,
}

pub fn print_usage() {
    println!("chess_play - play chess against a minimax bot");
    println!();
    println!("Usage:");
    println!("  chess_play [play] [--color white|black] [--depth N] [--seed S] [--no-bot] [--fen FEN]");
    println!("  chess_play suggest [--fen FEN] [--depth N] [--seed S]");
    println!("  chess_play perft <depth> [--fen FEN]");
    println!();
    println!("Options:");
    println!("  --config PATH   TOML config (default: ./chess_play.toml if present)");
    println!("  --depth, -d N   bot search depth, 1-6");
    println!("  --color, -c C   color the bot plays");
    println!("  --seed S        fixed seed for the bot's tie-breaks");
    println!("  --fen FEN       start from this position instead of the initial one");
    println!();
    println!("Examples:");
    println!("  chess_play --color white --depth 3");
    println!("  chess_play perft 4");
}

fn parse_color(text: &str) -> Result<Color> {
    match text.to_ascii_lowercase().as_str() {
        "white" | "w" => Ok(Color::White),
        "black" | "b" => Ok(Color::Black),
        _ => bail!("unknown color '{text}' (expected white or black)"),
    }
}

pub fn parse_args(args: &[String]) -> Result<Options> {
    let mut options = Options {
        command: Command::Play,
        config: None,
        depth: None,
        color: None,
        seed: None,
        no_bot: false,
        fen: None,
    };

    let mut i = 0;
    if let Some(first) = args.first() {
        match first.as_str() {
            "play" => i = 1,
            "suggest" | "hint" => {
                options.command = Command::Suggest;
                i = 1;
            }
            "perft" => {
                let depth = args.get(1).context("perft requires a depth")?;
                let depth = depth
                    .parse()
                    .with_context(|| format!("invalid perft depth '{depth}'"))?;
                options.command = Command::Perft(depth);
                i = 2;
            }
            "help" | "--help" | "-h" => {
                options.command = Command::Help;
                return Ok(options);
            }
            _ => {}
        }
    }

    while i < args.len() {
        let flag = args[i].as_str();
        let value = || {
            args.get(i + 1)
                .map(String::as_str)
                .with_context(|| format!("{flag} needs a value"))
        };
        match flag {
            "--config" => {
                options.config = Some(PathBuf::from(value()?));
                i += 1;
            }
            "--depth" | "-d" => {
                let v = value()?;
                options.depth = Some(v.parse().with_context(|| format!("invalid depth '{v}'"))?);
                i += 1;
            }
            "--color" | "-c" => {
                options.color = Some(parse_color(value()?)?);
                i += 1;
            }
            "--seed" => {
                let v = value()?;
                options.seed = Some(v.parse().with_context(|| format!("invalid seed '{v}'"))?);
                i += 1;
            }
            "--fen" => {
                options.fen = Some(value()?.to_string());
                i += 1;
            }
            "--no-bot" => options.no_bot = true,
            other => bail!("unknown argument '{other}'"),
        }
        i += 1;
    }

    Ok(options)
}

impl Options {
    /// Applies command-line overrides on top of the config file.
    pub fn apply(&self, config: &mut PlayConfig) {
        if let Some(depth) = self.depth {
            config.depth = minimax_engine::clamp_depth(depth);
        }
        if let Some(color) = self.color {
            config.bot_color = color;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if self.no_bot {
            config.bot_enabled = false;
        }
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod cli_tests;
