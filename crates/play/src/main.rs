//! Terminal chess front-end
//!
//! Play against the minimax bot, ask for a hint on any position, or run
//! perft against the move generator.

mod cli;
mod config;
mod display;

use std::io::Write;
use std::process::ExitCode;
use std::time::Instant;

use anyhow::{Context, Result};
use chess_core::{all_legal_moves, describe, perft_divide, status, Color, Position};
use game_session::GameSession;
use minimax_engine::MinimaxEngine;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::cli::{parse_args, print_usage, Command, Options};
use crate::config::PlayConfig;
use crate::display::{format_history, format_score, render_board};

/// Logs go to stderr so stdout only carries the game.
fn init_logging(default_filter: &str) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(default_filter)
            .with_context(|| format!("invalid log filter '{default_filter}'"))?,
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
    Ok(())
}

fn start_position(options: &Options) -> Result<Position> {
    match &options.fen {
        Some(fen) => Position::from_fen(fen).with_context(|| format!("bad --fen '{fen}'")),
        None => Ok(Position::startpos()),
    }
}

fn run_perft(depth: u8, pos: &Position) {
    println!("{}", render_board(pos, false));
    let start = Instant::now();
    let divide = perft_divide(pos, depth);
    let total: u64 = if depth == 0 {
        1
    } else {
        divide.iter().map(|(_, n)| n).sum()
    };
    for (mv, nodes) in &divide {
        println!("{mv}: {nodes}");
    }
    let elapsed = start.elapsed();
    println!();
    println!("Nodes: {total}");
    let nps = total as f64 / elapsed.as_secs_f64().max(1e-9);
    info!(depth, total, ?elapsed, nps = nps as u64, "perft finished");
}

fn run_suggest(config: &PlayConfig, pos: &Position) {
    let mut engine = match config.seed {
        Some(seed) => MinimaxEngine::with_seed(seed),
        None => MinimaxEngine::new(),
    };
    println!("{}", render_board(pos, false));
    match engine.suggest(pos, config.depth) {
        Some((mv, score)) => println!(
            "Best: {} (score {}, depth {}, {} nodes)",
            describe(mv),
            format_score(score),
            config.depth,
            engine.nodes()
        ),
        None => println!("No legal moves ({:?})", status(pos)),
    }
}

fn print_play_help() {
    println!("Enter moves as e2e4, e7e8=Q or O-O. Other commands:");
    println!("  moves          list legal moves");
    println!("  hint           ask the bot for the best move");
    println!("  board          show the board");
    println!("  history        show the moves played");
    println!("  fen            show the position as FEN");
    println!("  bot on|off     enable or disable the bot");
    println!("  bot white|black  choose the bot's color");
    println!("  depth N        bot search depth (1-6)");
    println!("  new            start a new game");
    println!("  quit           leave");
}

fn show(session: &GameSession) {
    let flipped = session.bot().enabled && session.bot().color == Color::White;
    println!("{}", render_board(session.position(), flipped));
    let outcome = session.outcome();
    if outcome.is_over() {
        println!("{}  {}", session.status_line(), outcome.result_str());
    } else {
        println!("{}", session.status_line());
    }
}

/// Handles one line of input. Returns false to leave the game.
fn handle_command(session: &mut GameSession, line: &str) -> bool {
    let mut words = line.split_whitespace();
    let Some(first) = words.next() else {
        return true;
    };
    let arg = words.next();

    match (first, arg) {
        ("quit" | "exit", _) => return false,
        ("help" | "?", _) => print_play_help(),
        ("board", _) => show(session),
        ("new", _) => {
            session.reset();
            show(session);
        }
        ("fen", _) => println!("{}", session.position().to_fen()),
        ("history", _) => println!("{}", format_history(session.history())),
        ("moves", _) => {
            let moves: Vec<String> = all_legal_moves(session.position())
                .into_iter()
                .map(describe)
                .collect();
            println!("{}", moves.join(" "));
        }
        ("hint", _) => match session.suggest() {
            Ok((mv, score)) => println!("Best: {} (score {})", describe(mv), format_score(score)),
            Err(e) => println!("{e}"),
        },
        ("bot", Some("on")) => session.set_bot_enabled(true),
        ("bot", Some("off")) => session.set_bot_enabled(false),
        ("bot", Some("white")) => session.set_bot_color(Color::White),
        ("bot", Some("black")) => session.set_bot_color(Color::Black),
        ("depth", Some(n)) => match n.parse::<u8>() {
            Ok(depth) => {
                session.set_bot_depth(depth);
                println!("Depth {}", session.bot().depth);
            }
            Err(_) => println!("Depth must be a number from 1 to 6"),
        },
        _ => match session.play_text(line) {
            Ok(record) => {
                println!("{} plays {}", record.color, record.text);
                show(session);
            }
            Err(e) => println!("{e}"),
        },
    }
    true
}

async fn run_play(config: &PlayConfig, start: Position) -> Result<()> {
    let bot = config.bot_settings();
    let mut session = match config.seed {
        Some(seed) => GameSession::with_seed(bot, seed),
        None => GameSession::new(bot),
    };
    if start != Position::startpos() {
        session.load_position(start);
    }
    info!(?bot, seed = ?config.seed, "starting game");

    println!("Type 'help' for commands.");
    show(&session);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        if session.is_bot_turn() {
            println!("Bot thinking...");
            if let Some(record) = session.play_bot_move().await? {
                println!("Bot plays {}", record.text);
                show(&session);
                continue;
            }
        }

        print!("> ");
        std::io::stdout().flush().context("failed to write prompt")?;
        let Some(line) = lines.next_line().await.context("failed to read input")? else {
            break;
        };
        if !handle_command(&mut session, line.trim()) {
            break;
        }
    }

    let outcome = session.outcome();
    println!("{} {}", format_history(session.history()), outcome.result_str());
    Ok(())
}

async fn run() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let options = parse_args(&args)?;
    if options.command == Command::Help {
        print_usage();
        return Ok(());
    }

    let mut config = PlayConfig::load_or_default(options.config.as_deref())?;
    options.apply(&mut config);
    init_logging(&config.log_filter)?;

    match options.command {
        Command::Play => run_play(&config, start_position(&options)?).await,
        Command::Suggest => {
            run_suggest(&config, &start_position(&options)?);
            Ok(())
        }
        Command::Perft(depth) => {
            run_perft(depth, &start_position(&options)?);
            Ok(())
        }
        Command::Help => Ok(()),
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
