//! Terminal-oriented board renderer.
//!
//! Player 2's row is printed right-to-left across the top so the board reads
//! as a loop: bottom row left-to-right into player 1's store on the right,
//! top row right-to-left into player 2's store on the left.

use crate::board::board_state::Board;
use crate::board::player::Player;

const CELL_WIDTH: usize = 3;

pub fn render_board(board: &Board) -> String {
    let pit_count = board.pit_count();
    let mut out = String::new();

    out.push_str(&pit_row(board.pits(Player::Two).iter().rev()));
    out.push('\n');

    let middle = format!(
        "{:>w$} {} {}",
        board.store(Player::Two),
        " ".repeat(CELL_WIDTH * pit_count),
        board.store(Player::One),
        w = CELL_WIDTH
    );
    out.push_str(middle.trim_end());
    out.push('\n');

    out.push_str(&pit_row(board.pits(Player::One).iter()));
    out
}

fn pit_row<'a>(pits: impl Iterator<Item = &'a u32>) -> String {
    let mut row = " ".repeat(CELL_WIDTH + 1);
    for stones in pits {
        row.push_str(&format!("{:>w$}", stones, w = CELL_WIDTH));
    }
    row
}

#[cfg(test)]
mod tests {
    use super::render_board;
    use crate::board::board_state::Board;

    #[test]
    fn renders_opening_position() {
        let rendered = render_board(&Board::default());
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "      4  4  4  4  4  4");
        assert_eq!(lines[1], format!("  0{}0", " ".repeat(20)));
        assert_eq!(lines[2], "      4  4  4  4  4  4");
    }

    #[test]
    fn mirrors_player_two_row_and_places_stores() {
        let board = Board::from_state(&[vec![1, 2, 3], vec![12], vec![4, 5, 6], vec![7]])
            .expect("state");
        let rendered = render_board(&board);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "      6  5  4");
        assert_eq!(lines[1], format!("  7{}12", " ".repeat(11)));
        assert_eq!(lines[2], "      1  2  3");
    }
}
