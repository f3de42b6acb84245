//! Engine abstraction shared by the built-in opponents and the match harness.
//!
//! Engines only read the board; the harness applies the move they pick.

use crate::board::board_state::Board;
use crate::board::player::Player;

#[derive(Debug, Clone, Default)]
pub struct EngineOutput {
    /// Pit index in the mover's own row, `None` when no pit holds stones.
    pub best_move: Option<usize>,
    pub info_lines: Vec<String>,
}

pub trait Engine: Send {
    fn name(&self) -> &str;

    fn new_game(&mut self) {}

    fn choose_move(&mut self, board: &Board, player: Player) -> Result<EngineOutput, String>;
}
