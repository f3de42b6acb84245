//! Standalone engine-vs-engine series runner.
//!
//! Run with:
//! `cargo run --release --bin engine_match_series`
//! `cargo run --release --bin engine_match_series -- vector greedy --games 50 --seed 7 --verbose`

use plum_mancala::board::mancala_rules::BoardConfig;
use plum_mancala::engines::engine_select::engine_factory;
use plum_mancala::utils::engine_match_harness::{
    play_engine_match_series, MatchConfig, MatchSeriesConfig,
};

const VALUE_FLAGS: [&str; 4] = ["--games", "--seed", "--pits", "--stones"];

fn parse_arg<T: std::str::FromStr>(args: &[String], flag: &str, default: T) -> T {
    for i in 0..args.len() {
        if args[i] == flag && i + 1 < args.len() {
            if let Ok(v) = args[i + 1].parse::<T>() {
                return v;
            }
        }
    }
    default
}

/// Arguments that are neither flags nor flag values.
fn positional_args(args: &[String]) -> Vec<&str> {
    let mut out = Vec::new();
    let mut i = 0;
    while i < args.len() {
        if VALUE_FLAGS.contains(&args[i].as_str()) {
            i += 2;
            continue;
        }
        if !args[i].starts_with('-') {
            out.push(args[i].as_str());
        }
        i += 1;
    }
    out
}

fn main() -> Result<(), String> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let verbose = args.iter().any(|a| a == "--verbose" || a == "-v");
    let games = parse_arg(&args, "--games", 20u16);
    let base_seed = parse_arg(&args, "--seed", 1234u64);
    let board = BoardConfig {
        pit_count: parse_arg(&args, "--pits", BoardConfig::default().pit_count),
        stones_per_pit: parse_arg(&args, "--stones", BoardConfig::default().stones_per_pit),
    };

    let names = positional_args(&args);
    let player1_name = names.first().copied().unwrap_or("vector").to_owned();
    let player2_name = names.get(1).copied().unwrap_or("random").to_owned();

    let player1_factory = engine_factory(&player1_name)?;
    let player2_factory = engine_factory(&player2_name)?;
    let player1 = || player1_factory(base_seed, board.pit_count);
    let player2 = || player2_factory(base_seed.wrapping_add(1), board.pit_count);

    let started_at = chrono::Local::now();
    let stats = play_engine_match_series(
        player1,
        player2,
        MatchSeriesConfig {
            games,
            base_seed,
            per_game: MatchConfig {
                board,
                ..MatchConfig::default()
            },
            verbose,
        },
    )?;

    println!(
        "[{}] {} vs {} ({} pits x {} stones)",
        started_at.format("%Y-%m-%d %H:%M:%S"),
        player1_name,
        player2_name,
        board.pit_count,
        board.stones_per_pit
    );
    println!("{}", stats.report());
    println!("outcomes: {:?}", stats.outcomes);
    Ok(())
}

