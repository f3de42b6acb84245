//! Store-distance heuristic engine.
//!
//! Scans pits from the store-adjacent end backwards and plays, in order of
//! preference:
//! 1. a pit whose stones end exactly in the own store (free turn),
//! 2. a pit holding more stones than its store distance (spills over),
//! 3. any eligible pit at random.

use rand::prelude::IndexedRandom;
use rand::{rngs::StdRng, SeedableRng};

use crate::board::board_state::Board;
use crate::board::player::Player;
use crate::engines::engine_trait::{Engine, EngineOutput};
use crate::engines::player_view::PlayerView;

pub struct VectorEngine {
    rng: StdRng,
}

impl VectorEngine {
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

impl Default for VectorEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for VectorEngine {
    fn name(&self) -> &str {
        "PlumMancala Vector"
    }

    fn choose_move(&mut self, board: &Board, player: Player) -> Result<EngineOutput, String> {
        let view = PlayerView::new(board, player);
        let pits = view.pits();
        let free_turns = view.eligible_free_turns();
        let mut out = EngineOutput::default();

        if let Some(pit) = (0..pits.len()).rev().find(|&pit| free_turns[pit]) {
            out.info_lines
                .push(format!("info string vector_engine mode free_turn pit {pit}"));
            out.best_move = Some(pit);
            return Ok(out);
        }

        if let Some(pit) = (0..pits.len())
            .rev()
            .find(|&pit| pits[pit] as usize > view.store_distance(pit))
        {
            out.info_lines
                .push(format!("info string vector_engine mode overflow pit {pit}"));
            out.best_move = Some(pit);
            return Ok(out);
        }

        let eligible = view.eligible_moves();
        out.info_lines.push(format!(
            "info string vector_engine mode random eligible_moves {}",
            eligible.len()
        ));
        out.best_move = eligible.as_slice().choose(&mut self.rng).copied();
        Ok(out)
    }
}
