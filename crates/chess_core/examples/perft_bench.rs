//! Perft timing over a handful of reference positions.
//!
//! Usage:
//!   cargo run --release --example perft_bench -p chess_core -- [depth] [fen]
//!
//! With a FEN the per-root-move breakdown is printed as well, which is the
//! quickest way to locate a move generation bug against another engine.

use chess_core::{Position, perft, perft_divide};
use std::env;
use std::process::ExitCode;
use std::time::{Duration, Instant};

const TEST_POSITIONS: &[(&str, &str)] = &[
    (
        "Starting position",
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
    ),
    (
        "Kiwipete",
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq -",
    ),
    ("Position 3", "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - -"),
    (
        "Position 6",
        "r4rk1/1pp1qppp/p1np1n2/2b1p1B1/2B1P1b1/P1NP1N2/1PP1QPPP/R4RK1 w - -",
    ),
];

fn nps(nodes: u64, elapsed: Duration) -> f64 {
    if elapsed.as_secs_f64() > 0.0 {
        nodes as f64 / elapsed.as_secs_f64()
    } else {
        0.0
    }
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();
    let depth: u8 = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(4);

    match args.get(2) {
        Some(fen) => match Position::from_fen(fen) {
            Ok(pos) => {
                run_divide(&pos, depth);
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("{e}");
                ExitCode::FAILURE
            }
        },
        None => {
            run_all_positions(depth);
            ExitCode::SUCCESS
        }
    }
}

fn run_divide(pos: &Position, depth: u8) {
    println!("Position: {}", pos.to_fen());
    println!("Depth: {depth}");
    println!();

    let start = Instant::now();
    let mut total = 0u64;
    for (mv, nodes) in perft_divide(pos, depth) {
        println!("{mv}: {nodes}");
        total += nodes;
    }
    let elapsed = start.elapsed();

    println!();
    println!("Nodes: {total}");
    println!("Time: {elapsed:.3?}");
    println!("NPS: {:.0}", nps(total, elapsed));
}

fn run_all_positions(depth: u8) {
    println!("=== Perft Benchmark Suite ===");
    println!("Depth: {depth}");
    println!();

    let mut total_nodes = 0u64;
    let mut total_time = Duration::ZERO;

    for (name, fen) in TEST_POSITIONS {
        let Ok(pos) = Position::from_fen(fen) else {
            eprintln!("{name}: bad FEN");
            continue;
        };

        print!("{name:.<30}");

        let start = Instant::now();
        let nodes = perft(&pos, depth);
        let elapsed = start.elapsed();

        total_nodes += nodes;
        total_time += elapsed;

        println!(
            " {nodes:>12} nodes in {elapsed:>8.3?} ({:>10.0} nps)",
            nps(nodes, elapsed)
        );
    }

    println!();
    println!("{:=<70}", "");
    println!(
        "TOTAL: {total_nodes} nodes in {total_time:.3?} ({:.0} nps)",
        nps(total_nodes, total_time)
    );
}
