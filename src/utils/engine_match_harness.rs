//! Head-to-head engine match harness.
//!
//! Drives the turn loop the board itself knows nothing about: player 1 opens,
//! a move whose last stone lands in the mover's own store earns another
//! move, and the game ends as soon as either pit row is empty, at which
//! point the remaining stones are swept into their owners' stores.

use rand::{rngs::StdRng, Rng, SeedableRng};
use std::time::Instant;

use crate::board::board_state::Board;
use crate::board::mancala_rules::BoardConfig;
use crate::board::player::Player;
use crate::engines::engine_trait::Engine;
use crate::engines::player_view::PlayerView;
use crate::utils::render_board::render_board;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    PlayerOneWin,
    PlayerTwoWin,
    Draw,
    DrawMaxTurns,
}

/// Series participant, independent of which seat it plays from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerId {
    Player1,
    Player2,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesOutcome {
    PlayerWin { player: PlayerId, seat: Player },
    Draw,
    DrawMaxTurns,
}

#[derive(Debug, Clone)]
pub struct MatchConfig {
    pub board: BoardConfig,
    pub max_turns: u32,
    pub verbose: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            board: BoardConfig::default(),
            max_turns: 500,
            verbose: false,
        }
    }
}

/// Per-seat counters are indexed by `Player::index()`.
#[derive(Debug, Clone)]
pub struct MatchResult {
    pub outcome: MatchOutcome,
    pub final_board: Board,
    pub move_counts: [u32; 2],
    pub free_turns: [u32; 2],
    pub captures: [u32; 2],
    pub total_time_ns: [u128; 2],
}

#[derive(Debug, Clone)]
pub struct MatchSeriesConfig {
    pub games: u16,
    pub base_seed: u64,
    pub per_game: MatchConfig,
    pub verbose: bool,
}

impl Default for MatchSeriesConfig {
    fn default() -> Self {
        Self {
            games: 9,
            base_seed: 0,
            per_game: MatchConfig::default(),
            verbose: false,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct MatchSeriesStats {
    pub games: u16,
    pub player1_wins: u16,
    pub player2_wins: u16,
    pub draws: u16,
    pub outcomes: Vec<SeriesOutcome>,
    pub player1_moves: u32,
    pub player2_moves: u32,
    pub player1_captures: u32,
    pub player2_captures: u32,
    pub player1_total_time_ns: u128,
    pub player2_total_time_ns: u128,
    pub player1_avg_move_time_ms: f64,
    pub player2_avg_move_time_ms: f64,
    pub overall_avg_move_time_ms: f64,
}

impl MatchSeriesStats {
    pub fn report(&self) -> String {
        format!(
            "games={} player1_wins={} player2_wins={} draws={} p1_captures={} p2_captures={} p1_avg_ms={:.3} p2_avg_ms={:.3} overall_avg_ms={:.3}",
            self.games,
            self.player1_wins,
            self.player2_wins,
            self.draws,
            self.player1_captures,
            self.player2_captures,
            self.player1_avg_move_time_ms,
            self.player2_avg_move_time_ms,
            self.overall_avg_move_time_ms
        )
    }
}

#[derive(Debug, Default)]
struct MatchTally {
    move_counts: [u32; 2],
    free_turns: [u32; 2],
    captures: [u32; 2],
    total_time_ns: [u128; 2],
}

impl MatchTally {
    fn finish(self, outcome: MatchOutcome, final_board: Board) -> MatchResult {
        MatchResult {
            outcome,
            final_board,
            move_counts: self.move_counts,
            free_turns: self.free_turns,
            captures: self.captures,
            total_time_ns: self.total_time_ns,
        }
    }
}

/// Play a single engine-vs-engine game from the configured opening position.
///
/// `engine_one` sits as player 1 and moves first.
pub fn play_engine_match(
    engine_one: Box<dyn Engine>,
    engine_two: Box<dyn Engine>,
    config: MatchConfig,
) -> Result<MatchResult, String> {
    let board = Board::from_config(&config.board).map_err(|e| e.to_string())?;
    play_engine_match_from_board(engine_one, engine_two, board, Player::One, config)
}

/// Play a game from a caller-provided board with `first_mover` to move.
///
/// Intended for curated positions; `config.board` is ignored.
pub fn play_engine_match_from_board(
    mut engine_one: Box<dyn Engine>,
    mut engine_two: Box<dyn Engine>,
    mut board: Board,
    first_mover: Player,
    config: MatchConfig,
) -> Result<MatchResult, String> {
    engine_one.new_game();
    engine_two.new_game();

    let mut tally = MatchTally::default();
    let mut mover = first_mover;

    for turn in 1..=config.max_turns {
        if let Some(outcome) = end_if_row_empty(&mut board, config.verbose) {
            return Ok(tally.finish(outcome, board));
        }

        let engine = match mover {
            Player::One => &mut engine_one,
            Player::Two => &mut engine_two,
        };

        let started = Instant::now();
        let out = engine.choose_move(&board, mover)?;
        let elapsed_ns = started.elapsed().as_nanos();

        let idx = mover.index();
        tally.move_counts[idx] = tally.move_counts[idx].saturating_add(1);
        tally.total_time_ns[idx] = tally.total_time_ns[idx].saturating_add(elapsed_ns);

        let chosen = out
            .best_move
            .ok_or_else(|| format!("{} returned no move for {mover}", engine.name()))?;
        if !PlayerView::new(&board, mover).eligible_moves().contains(&chosen) {
            return Err(format!(
                "{} returned ineligible pit {chosen} for {mover}",
                engine.name()
            ));
        }

        let report = board
            .apply_move(mover, chosen)
            .map_err(|e| e.to_string())?;

        if config.verbose {
            println!("[game] turn {turn} {mover} sows pit {chosen}");
            if let Some(announcement) = report.announcement() {
                println!("[game] {announcement}");
            }
            println!("{}\n", render_board(&board));
        }

        if report.capture.is_some() {
            tally.captures[idx] = tally.captures[idx].saturating_add(1);
        }
        if report.is_free_turn() {
            tally.free_turns[idx] = tally.free_turns[idx].saturating_add(1);
        } else {
            mover = mover.opponent();
        }
    }

    // The last allowed move may itself have ended the game.
    let outcome = end_if_row_empty(&mut board, config.verbose)
        .unwrap_or(MatchOutcome::DrawMaxTurns);
    Ok(tally.finish(outcome, board))
}

/// If either row is empty, sweep the remaining stones and score the game.
fn end_if_row_empty(board: &mut Board, verbose: bool) -> Option<MatchOutcome> {
    if !board.is_row_empty(Player::One) && !board.is_row_empty(Player::Two) {
        return None;
    }
    let swept = board.collect_remaining();
    if verbose {
        println!(
            "[game] row emptied; swept p1={} p2={} final scores {:?}",
            swept[0],
            swept[1],
            board.get_scores()
        );
    }
    Some(outcome_from_scores(board))
}

/// Play a series of games and aggregate win/loss/draw statistics.
///
/// Seats are assigned by a coin flip per game, deterministic from `base_seed`.
pub fn play_engine_match_series<F1, F2>(
    player1_factory: F1,
    player2_factory: F2,
    config: MatchSeriesConfig,
) -> Result<MatchSeriesStats, String>
where
    F1: Fn() -> Box<dyn Engine>,
    F2: Fn() -> Box<dyn Engine>,
{
    let mut stats = MatchSeriesStats {
        games: config.games,
        ..MatchSeriesStats::default()
    };
    let mut seat_rng = StdRng::seed_from_u64(config.base_seed ^ 0xA5A5_5A5A_0123_4567);

    for i in 0..config.games {
        let player1_moves_first = seat_rng.random_bool(0.5);
        if config.verbose {
            let (first, second) = if player1_moves_first {
                ("Player1", "Player2")
            } else {
                ("Player2", "Player1")
            };
            println!(
                "[series] game {}/{} first={} second={}",
                i + 1,
                config.games,
                first,
                second
            );
        }

        let result = if player1_moves_first {
            play_engine_match(player1_factory(), player2_factory(), config.per_game.clone())?
        } else {
            play_engine_match(player2_factory(), player1_factory(), config.per_game.clone())?
        };

        let (p1_seat, p2_seat) = if player1_moves_first {
            (Player::One, Player::Two)
        } else {
            (Player::Two, Player::One)
        };

        stats.player1_moves = stats
            .player1_moves
            .saturating_add(result.move_counts[p1_seat.index()]);
        stats.player2_moves = stats
            .player2_moves
            .saturating_add(result.move_counts[p2_seat.index()]);
        stats.player1_captures = stats
            .player1_captures
            .saturating_add(result.captures[p1_seat.index()]);
        stats.player2_captures = stats
            .player2_captures
            .saturating_add(result.captures[p2_seat.index()]);
        stats.player1_total_time_ns = stats
            .player1_total_time_ns
            .saturating_add(result.total_time_ns[p1_seat.index()]);
        stats.player2_total_time_ns = stats
            .player2_total_time_ns
            .saturating_add(result.total_time_ns[p2_seat.index()]);

        let winning_seat = match result.outcome {
            MatchOutcome::PlayerOneWin => Some(Player::One),
            MatchOutcome::PlayerTwoWin => Some(Player::Two),
            MatchOutcome::Draw | MatchOutcome::DrawMaxTurns => None,
        };
        let mapped = match winning_seat {
            Some(seat) if seat == p1_seat => {
                stats.player1_wins += 1;
                SeriesOutcome::PlayerWin {
                    player: PlayerId::Player1,
                    seat,
                }
            }
            Some(seat) => {
                stats.player2_wins += 1;
                SeriesOutcome::PlayerWin {
                    player: PlayerId::Player2,
                    seat,
                }
            }
            None => {
                stats.draws += 1;
                if result.outcome == MatchOutcome::DrawMaxTurns {
                    SeriesOutcome::DrawMaxTurns
                } else {
                    SeriesOutcome::Draw
                }
            }
        };
        stats.outcomes.push(mapped);

        if config.verbose {
            println!(
                "[series] game {}/{} result={:?} scores={:?} p1_wins={} p2_wins={} draws={}\n",
                i + 1,
                config.games,
                mapped,
                result.final_board.get_scores(),
                stats.player1_wins,
                stats.player2_wins,
                stats.draws
            );
        }
    }

    stats.player1_avg_move_time_ms =
        avg_ns_per_move_ms(stats.player1_total_time_ns, stats.player1_moves);
    stats.player2_avg_move_time_ms =
        avg_ns_per_move_ms(stats.player2_total_time_ns, stats.player2_moves);

    let total_ns = stats
        .player1_total_time_ns
        .saturating_add(stats.player2_total_time_ns);
    let total_moves = stats.player1_moves.saturating_add(stats.player2_moves);
    stats.overall_avg_move_time_ms = avg_ns_per_move_ms(total_ns, total_moves);

    Ok(stats)
}

fn outcome_from_scores(board: &Board) -> MatchOutcome {
    let (one, two) = board.get_scores();
    match one.cmp(&two) {
        std::cmp::Ordering::Greater => MatchOutcome::PlayerOneWin,
        std::cmp::Ordering::Less => MatchOutcome::PlayerTwoWin,
        std::cmp::Ordering::Equal => MatchOutcome::Draw,
    }
}

#[inline]
fn avg_ns_per_move_ms(total_ns: u128, moves: u32) -> f64 {
    if moves == 0 {
        0.0
    } else {
        (total_ns as f64) / (moves as f64) / 1_000_000.0
    }
}

#[cfg(test)]
mod tests {
    use super::{
        play_engine_match, play_engine_match_from_board, play_engine_match_series, MatchConfig,
        MatchOutcome, MatchSeriesConfig, SeriesOutcome,
    };
    use crate::board::board_state::Board;
    use crate::board::player::Player;
    use crate::engines::engine_greedy::GreedyEngine;
    use crate::engines::engine_random::RandomEngine;
    use crate::engines::engine_trait::{Engine, EngineOutput};
    use crate::engines::engine_vector::VectorEngine;

    /// Always plays the given pit, eligible or not.
    struct FixedPitEngine(usize);

    impl Engine for FixedPitEngine {
        fn name(&self) -> &str {
            "fixed"
        }

        fn choose_move(&mut self, _board: &Board, _player: Player) -> Result<EngineOutput, String> {
            Ok(EngineOutput {
                best_move: Some(self.0),
                info_lines: Vec::new(),
            })
        }
    }

    #[test]
    fn engine_match_harness_runs_random_vs_vector_to_completion() {
        let result = play_engine_match(
            Box::new(RandomEngine::with_seed(42)),
            Box::new(VectorEngine::with_seed(43)),
            MatchConfig::default(),
        )
        .expect("match should run");

        let board = &result.final_board;
        assert_eq!(board.total_stones(), 48);
        assert!(result.move_counts[0] + result.move_counts[1] > 0);
        assert_ne!(result.outcome, MatchOutcome::DrawMaxTurns);
        assert!(board.is_row_empty(Player::One) && board.is_row_empty(Player::Two));

        let (one, two) = board.get_scores();
        let expected = match one.cmp(&two) {
            std::cmp::Ordering::Greater => MatchOutcome::PlayerOneWin,
            std::cmp::Ordering::Less => MatchOutcome::PlayerTwoWin,
            std::cmp::Ordering::Equal => MatchOutcome::Draw,
        };
        assert_eq!(result.outcome, expected);
    }

    #[test]
    fn free_turn_keeps_the_mover() {
        // Player 1's single stone ends in the store, then player 1 moves again
        // from an empty row and the game ends with the sweep.
        let board = Board::from_state(&[vec![0, 0, 1], vec![0], vec![2, 0, 0], vec![0]])
            .expect("state");
        let result = play_engine_match_from_board(
            Box::new(FixedPitEngine(2)),
            Box::new(FixedPitEngine(0)),
            board,
            Player::One,
            MatchConfig::default(),
        )
        .expect("match should run");

        assert_eq!(result.move_counts, [1, 0]);
        assert_eq!(result.free_turns, [1, 0]);
        assert_eq!(result.final_board.get_scores(), (1, 2));
        assert_eq!(result.outcome, MatchOutcome::PlayerTwoWin);
    }

    #[test]
    fn row_emptied_by_the_last_allowed_move_still_ends_the_game() {
        let board = Board::from_state(&[vec![0, 0, 1], vec![0], vec![2, 0, 0], vec![0]])
            .expect("state");
        let result = play_engine_match_from_board(
            Box::new(FixedPitEngine(2)),
            Box::new(FixedPitEngine(0)),
            board,
            Player::One,
            MatchConfig {
                max_turns: 1,
                ..MatchConfig::default()
            },
        )
        .expect("match should run");

        assert_eq!(result.move_counts, [1, 0]);
        assert_eq!(result.final_board.get_scores(), (1, 2));
        assert!(result.final_board.is_row_empty(Player::Two));
        assert_eq!(result.outcome, MatchOutcome::PlayerTwoWin);
    }

    #[test]
    fn ineligible_engine_move_is_an_error() {
        let err = play_engine_match_from_board(
            Box::new(FixedPitEngine(0)),
            Box::new(FixedPitEngine(0)),
            Board::from_state(&[vec![0, 3], vec![0], vec![1, 1], vec![0]]).expect("state"),
            Player::One,
            MatchConfig::default(),
        )
        .err()
        .expect("empty pit should be rejected");
        assert!(err.contains("ineligible pit 0"));
    }

    #[test]
    fn max_turns_cap_yields_draw() {
        let result = play_engine_match(
            Box::new(RandomEngine::with_seed(1)),
            Box::new(RandomEngine::with_seed(2)),
            MatchConfig {
                max_turns: 3,
                ..MatchConfig::default()
            },
        )
        .expect("match should run");
        assert_eq!(result.outcome, MatchOutcome::DrawMaxTurns);
        assert_eq!(result.move_counts[0] + result.move_counts[1], 3);
    }

    #[test]
    fn engine_match_series_aggregates_every_game() {
        let stats = play_engine_match_series(
            || Box::new(GreedyEngine::with_seed(7)),
            || Box::new(RandomEngine::with_seed(8)),
            MatchSeriesConfig {
                games: 4,
                base_seed: 777,
                ..MatchSeriesConfig::default()
            },
        )
        .expect("series should run");

        assert_eq!(stats.games, 4);
        assert_eq!(stats.outcomes.len(), 4);
        assert_eq!(stats.player1_wins + stats.player2_wins + stats.draws, 4);
        assert!(stats.player1_moves > 0 && stats.player2_moves > 0);
        assert!(stats.overall_avg_move_time_ms >= 0.0);
        assert!(stats.outcomes.iter().all(|o| matches!(
            o,
            SeriesOutcome::PlayerWin { .. } | SeriesOutcome::Draw | SeriesOutcome::DrawMaxTurns
        )));
        assert!(stats.report().starts_with("games=4 "));
    }
}
