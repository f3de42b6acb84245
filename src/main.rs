//! Plays one game between two built-in engines and prints every move.
//!
//! Usage:
//! `cargo run --release -- [player1-engine] [player2-engine] [--seed N] [--pits N] [--stones N]`
//!
//! Engines: random, vector, greedy, model.

use plum_mancala::board::mancala_rules::BoardConfig;
use plum_mancala::engines::engine_select::engine_from_name;
use plum_mancala::utils::engine_match_harness::{play_engine_match, MatchConfig, MatchOutcome};
use plum_mancala::utils::render_board::render_board;

const VALUE_FLAGS: [&str; 3] = ["--seed", "--pits", "--stones"];

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
    let seed = parse_arg(&args, "--seed", 7u64);
    let board = BoardConfig {
        pit_count: parse_arg(&args, "--pits", BoardConfig::default().pit_count),
        stones_per_pit: parse_arg(&args, "--stones", BoardConfig::default().stones_per_pit),
    };

    let names = positional_args(&args);
    let player1 = names.first().copied().unwrap_or("vector");
    let player2 = names.get(1).copied().unwrap_or("random");

    let result = play_engine_match(
        engine_from_name(player1, seed, board.pit_count)?,
        engine_from_name(player2, seed.wrapping_add(1), board.pit_count)?,
        MatchConfig {
            board,
            verbose: true,
            ..MatchConfig::default()
        },
    )?;

    println!("{}", render_board(&result.final_board));
    let (one, two) = result.final_board.get_scores();
    let verdict = match result.outcome {
        MatchOutcome::PlayerOneWin => format!("Player 1 ({player1}) wins"),
        MatchOutcome::PlayerTwoWin => format!("Player 2 ({player2}) wins"),
        MatchOutcome::Draw => "Draw".to_owned(),
        MatchOutcome::DrawMaxTurns => "Draw (turn limit reached)".to_owned(),
    };
    println!("{verdict}: {one} - {two}");
    println!(
        "moves {:?} free turns {:?} captures {:?}",
        result.move_counts, result.free_turns, result.captures
    );
    Ok(())
}
