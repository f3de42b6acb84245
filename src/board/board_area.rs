//! The four board areas and the cycle stones are sown along.
//!
//! Sowing walks `PlayerOnePits -> PlayerOneStore -> PlayerTwoPits ->
//! PlayerTwoStore -> PlayerOnePits`. Pit rows hold `pit_count` cells, stores
//! hold exactly one.

use crate::board::errors::MancalaError;
use crate::board::player::Player;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoardArea {
    PlayerOnePits,
    PlayerOneStore,
    PlayerTwoPits,
    PlayerTwoStore,
}

impl BoardArea {
    #[inline]
    pub const fn pits_of(player: Player) -> Self {
        match player {
            Player::One => BoardArea::PlayerOnePits,
            Player::Two => BoardArea::PlayerTwoPits,
        }
    }

    #[inline]
    pub const fn store_of(player: Player) -> Self {
        match player {
            Player::One => BoardArea::PlayerOneStore,
            Player::Two => BoardArea::PlayerTwoStore,
        }
    }

    #[inline]
    pub const fn owner(self) -> Player {
        match self {
            BoardArea::PlayerOnePits | BoardArea::PlayerOneStore => Player::One,
            BoardArea::PlayerTwoPits | BoardArea::PlayerTwoStore => Player::Two,
        }
    }

    #[inline]
    pub const fn is_store(self) -> bool {
        matches!(self, BoardArea::PlayerOneStore | BoardArea::PlayerTwoStore)
    }

    /// Next area along the sowing cycle.
    #[inline]
    pub const fn next(self) -> Self {
        match self {
            BoardArea::PlayerOnePits => BoardArea::PlayerOneStore,
            BoardArea::PlayerOneStore => BoardArea::PlayerTwoPits,
            BoardArea::PlayerTwoPits => BoardArea::PlayerTwoStore,
            BoardArea::PlayerTwoStore => BoardArea::PlayerOnePits,
        }
    }

    /// Area on the geometrically opposite side: rows mirror rows, stores mirror stores.
    #[inline]
    pub const fn opposing(self) -> Self {
        match self {
            BoardArea::PlayerOnePits => BoardArea::PlayerTwoPits,
            BoardArea::PlayerTwoPits => BoardArea::PlayerOnePits,
            BoardArea::PlayerOneStore => BoardArea::PlayerTwoStore,
            BoardArea::PlayerTwoStore => BoardArea::PlayerOneStore,
        }
    }

    #[inline]
    pub const fn cell_count(self, pit_count: usize) -> usize {
        if self.is_store() {
            1
        } else {
            pit_count
        }
    }
}

/// A single cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub area: BoardArea,
    pub index: usize,
}

impl Position {
    #[inline]
    pub const fn new(area: BoardArea, index: usize) -> Self {
        Self { area, index }
    }

    #[inline]
    pub const fn store_of(player: Player) -> Self {
        Self::new(BoardArea::store_of(player), 0)
    }

    /// Step one cell along the sowing cycle, rolling into index 0 of the next area.
    #[inline]
    pub fn advance(self, pit_count: usize) -> Self {
        if self.index + 1 < self.area.cell_count(pit_count) {
            Self::new(self.area, self.index + 1)
        } else {
            Self::new(self.area.next(), 0)
        }
    }

    /// Mirror cell across the board, used only for capture resolution.
    pub fn opposing(self, pit_count: usize) -> Result<Self, MancalaError> {
        self.check_bounds(pit_count)?;
        let index = if self.area.is_store() {
            0
        } else {
            pit_count - 1 - self.index
        };
        Ok(Self::new(self.area.opposing(), index))
    }

    #[inline]
    pub fn check_bounds(self, pit_count: usize) -> Result<(), MancalaError> {
        if self.index < self.area.cell_count(pit_count) {
            Ok(())
        } else {
            Err(MancalaError::InvalidBoardArea {
                area: self.area,
                index: self.index,
            })
        }
    }
}
