//! Random-move engine.
//!
//! Selects uniformly from the eligible pits and is mostly used as a baseline
//! opponent and for exercising the match harness.

use rand::prelude::IndexedRandom;
use rand::{rngs::StdRng, SeedableRng};

use crate::board::board_state::Board;
use crate::board::player::Player;
use crate::engines::engine_trait::{Engine, EngineOutput};
use crate::engines::player_view::PlayerView;

pub struct RandomEngine {
    rng: StdRng,
}

impl RandomEngine {
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

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "PlumMancala Random"
    }

    fn choose_move(&mut self, board: &Board, player: Player) -> Result<EngineOutput, String> {
        let eligible = PlayerView::new(board, player).eligible_moves();

        let mut out = EngineOutput::default();
        out.info_lines.push(format!(
            "info string random_engine eligible_moves {}",
            eligible.len()
        ));

        if eligible.is_empty() {
            return Ok(out);
        }

        let picked = eligible
            .as_slice()
            .choose(&mut self.rng)
            .ok_or("failed to choose a random move")?;

        out.best_move = Some(*picked);
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::RandomEngine;
    use crate::board::board_state::Board;
    use crate::board::player::Player;
    use crate::engines::engine_trait::Engine;

    #[test]
    fn random_engine_only_picks_non_empty_pits() {
        let board = Board::from_state(&[vec![0, 3, 0, 0, 2, 0], vec![0], vec![4; 6], vec![0]])
            .expect("state");
        let mut engine = RandomEngine::with_seed(11);
        for _ in 0..32 {
            let out = engine.choose_move(&board, Player::One).expect("engine should answer");
            assert!(matches!(out.best_move, Some(1) | Some(4)));
        }
    }

    #[test]
    fn random_engine_reports_no_move_on_empty_row() {
        let board = Board::from_state(&[vec![0; 6], vec![10], vec![4; 6], vec![0]])
            .expect("state");
        let out = RandomEngine::with_seed(1)
            .choose_move(&board, Player::One)
            .expect("engine should answer");
        assert_eq!(out.best_move, None);
        assert!(out
            .info_lines
            .iter()
            .any(|l| l.contains("random_engine eligible_moves 0")));
    }

    #[test]
    fn seeded_random_engines_agree() {
        let board = Board::default();
        let mut a = RandomEngine::with_seed(99);
        let mut b = RandomEngine::with_seed(99);
        for _ in 0..8 {
            assert_eq!(
                a.choose_move(&board, Player::Two).expect("a").best_move,
                b.choose_move(&board, Player::Two).expect("b").best_move
            );
        }
    }
}
