use std::time::Instant;

use rayon::prelude::*;

use chess_core::{Position, perft, perft_divide};

const FULL_PERFT_ENV: &str = "FULL_PERFT";
const NODE_LIMIT: u64 = 250_000;

/// (name, FEN, [(depth, nodes)]). Only promotion-free depths are listed:
/// promotions always go to a queen here, so deeper published counts that
/// include underpromotions would not match.
const CASES: &[(&str, &str, &[(u8, u64)])] = &[
    (
        "startpos",
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
        &[(1, 20), (2, 400), (3, 8_902), (4, 197_281)],
    ),
    (
        "kiwipete",
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
        &[(1, 48), (2, 2_039), (3, 97_862)],
    ),
    (
        "position 3",
        "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
        &[(1, 14), (2, 191), (3, 2_812), (4, 43_238), (5, 674_624)],
    ),
    (
        "position 6",
        "r4rk1/1pp1qppp/p1np1n2/2b1p1B1/2B1P1b1/P1NP1N2/1PP1QPPP/R4RK1 w - - 0 10",
        &[(1, 46), (2, 2_079), (3, 89_890)],
    ),
];

#[test]
fn perft_startpos_shallow() {
    let pos = Position::startpos();
    assert_eq!(perft(&pos, 0), 1);
    assert_eq!(perft(&pos, 1), 20);
    assert_eq!(perft(&pos, 2), 400);
}

#[test]
fn perft_divide_sums_to_perft() {
    let pos = Position::startpos();
    let divide = perft_divide(&pos, 2);
    assert_eq!(divide.len(), 20);
    assert!(divide.iter().all(|(_, n)| *n == 20));
    assert_eq!(divide.iter().map(|(_, n)| n).sum::<u64>(), 400);
}

#[test]
fn perft_reference_positions() {
    let full = std::env::var(FULL_PERFT_ENV).is_ok();

    CASES.par_iter().for_each(|(name, fen, depths)| {
        let pos = Position::from_fen(fen).expect("reference FEN parses");
        let case_start = Instant::now();
        let mut ran_depths = Vec::new();

        for &(depth, expected) in depths.iter() {
            if !full && expected > NODE_LIMIT {
                eprintln!(
                    "Skipping {name} depth {depth} (expected {expected} nodes) — set {FULL_PERFT_ENV}=1 to run all."
                );
                continue;
            }
            let got = perft(&pos, depth);
            assert!(
                got == expected,
                "Perft mismatch for {name} '{fen}' at depth {depth}: expected {expected}, got {got}"
            );
            ran_depths.push(depth);
        }

        println!(
            "{name}: depths {ran_depths:?} in {:.3?}",
            case_start.elapsed()
        );
    });
}
