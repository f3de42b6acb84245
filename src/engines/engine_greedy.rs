//! One-ply greedy engine.
//!
//! Every eligible pit is tried on a cloned board. The pit with the largest
//! store gain wins, free turns break ties, and remaining ties are random.

use rand::prelude::IndexedRandom;
use rand::{rngs::StdRng, SeedableRng};

use crate::board::board_state::Board;
use crate::board::player::Player;
use crate::engines::engine_trait::{Engine, EngineOutput};
use crate::engines::player_view::PlayerView;

/// One-ply engine: plays the move with the largest immediate store gain.
pub struct GreedyEngine {
    rng: StdRng,
}

impl GreedyEngine {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for GreedyEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for GreedyEngine {
    fn name(&self) -> &str {
        "PlumMancala Greedy"
    }

    fn choose_move(&mut self, board: &Board, player: Player) -> Result<EngineOutput, String> {
        let eligible = PlayerView::new(board, player).eligible_moves();

        let mut out = EngineOutput::default();
        out.info_lines.push(format!(
            "info string greedy_engine eligible_moves {}",
            eligible.len()
        ));

        if eligible.is_empty() {
            return Ok(out);
        }

        let before = board.get_score(player);
        // (store gain, free turn) ordered lexicographically.
        let mut best_key = (0u32, false);
        let mut best_moves = Vec::new();

        for &pit in &eligible {
            let mut trial = board.clone();
            let report = trial.apply_move(player, pit).map_err(|e| e.to_string())?;
            let key = (trial.get_score(player) - before, report.is_free_turn());

            if best_moves.is_empty() || key > best_key {
                best_key = key;
                best_moves.clear();
                best_moves.push(pit);
            } else if key == best_key {
                best_moves.push(pit);
            }
        }

        let picked = best_moves
            .as_slice()
            .choose(&mut self.rng)
            .ok_or("failed to choose greedy best move")?;

        out.info_lines.push(format!(
            "info string greedy_engine store_gain {} free_turn {}",
            best_key.0, best_key.1
        ));
        out.best_move = Some(*picked);
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::GreedyEngine;
    use crate::board::board_state::Board;
    use crate::board::player::Player;
    use crate::engines::engine_trait::Engine;

    #[test]
    fn greedy_prefers_capture_over_free_turn() {
        // Pit 5 (1 stone) is a free turn worth 1; pit 1 captures 5 + 1.
        let board = Board::from_state(&[
            vec![0, 1, 0, 0, 0, 1],
            vec![0],
            vec![0, 0, 0, 5, 0, 0],
            vec![0],
        ])
        .expect("state");
        let out = GreedyEngine::with_seed(3)
            .choose_move(&board, Player::One)
            .expect("engine should answer");
        assert_eq!(out.best_move, Some(1));
        assert!(out
            .info_lines
            .iter()
            .any(|l| l.contains("greedy_engine store_gain 6")));
    }

    #[test]
    fn greedy_breaks_equal_gain_toward_free_turn() {
        // Opening position: pit 2 ends in the store, pits 3..=5 also add 1 but pass it.
        let out = GreedyEngine::with_seed(3)
            .choose_move(&Board::default(), Player::One)
            .expect("engine should answer");
        assert_eq!(out.best_move, Some(2));
    }
}
