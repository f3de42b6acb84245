//! Side-relative views of the board used by the engines.
//!
//! Nothing here is stored on the board; every view is derived from the
//! board's read accessors for one player.

use crate::board::board_state::Board;
use crate::board::player::Player;

#[derive(Debug, Clone, Copy)]
pub struct PlayerView<'a> {
    board: &'a Board,
    player: Player,
}

impl<'a> PlayerView<'a> {
    pub fn new(board: &'a Board, player: Player) -> Self {
        Self { board, player }
    }

    #[inline]
    pub fn player(&self) -> Player {
        self.player
    }

    #[inline]
    pub fn pits(&self) -> &'a [u32] {
        self.board.pits(self.player)
    }

    /// Own row followed by the opponent's row.
    pub fn allpits(&self) -> Vec<u32> {
        let mut all = self.pits().to_vec();
        all.extend_from_slice(self.board.pits(self.player.opponent()));
        all
    }

    /// Stones needed for the last one sown from `pit` to land in the own store.
    #[inline]
    pub fn store_distance(&self, pit: usize) -> usize {
        self.board.pit_count() - pit
    }

    pub fn eligible_moves(&self) -> Vec<usize> {
        self.pits()
            .iter()
            .enumerate()
            .filter(|(_, &stones)| stones > 0)
            .map(|(pit, _)| pit)
            .collect()
    }

    /// Per pit, whether sowing it ends exactly in the own store.
    pub fn eligible_free_turns(&self) -> Vec<bool> {
        self.pits()
            .iter()
            .enumerate()
            .map(|(pit, &stones)| stones as usize == self.store_distance(pit))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::PlayerView;
    use crate::board::board_state::Board;
    use crate::board::player::Player;

    #[test]
    fn allpits_puts_own_row_first() {
        let board = Board::from_state(&[vec![1, 2, 3], vec![0], vec![4, 5, 6], vec![0]])
            .expect("state");
        assert_eq!(PlayerView::new(&board, Player::One).allpits(), vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(PlayerView::new(&board, Player::Two).allpits(), vec![4, 5, 6, 1, 2, 3]);
    }

    #[test]
    fn eligible_moves_skip_empty_pits() {
        let board = Board::from_state(&[vec![0, 2, 0, 1], vec![0], vec![0; 4], vec![0]])
            .expect("state");
        assert_eq!(PlayerView::new(&board, Player::One).eligible_moves(), vec![1, 3]);
        assert!(PlayerView::new(&board, Player::Two).eligible_moves().is_empty());
    }

    #[test]
    fn free_turns_match_store_distance() {
        let board = Board::default();
        let view = PlayerView::new(&board, Player::One);
        assert_eq!(
            view.eligible_free_turns(),
            vec![false, false, true, false, false, false]
        );

        let mut check = board.clone();
        let report = check.apply_move(Player::One, 2).expect("move");
        assert!(report.is_free_turn());
    }
}
