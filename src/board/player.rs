//! The two sides of the board.
//!
//! Players are numbered 1 and 2 at the edges of the crate (binaries, engine
//! output, error messages) and indexed 0 and 1 internally.

use std::fmt;

use crate::board::errors::{InvalidMoveReason, MancalaError};

/// Side that owns a pit row and a store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    One,
    Two,
}

impl Player {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Player::One => 0,
            Player::Two => 1,
        }
    }

    #[inline]
    pub const fn number(self) -> u8 {
        match self {
            Player::One => 1,
            Player::Two => 2,
        }
    }

    #[inline]
    pub const fn opponent(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Resolve a 1-based player number.
    pub fn from_number(number: u8) -> Result<Self, MancalaError> {
        match number {
            1 => Ok(Player::One),
            2 => Ok(Player::Two),
            other => Err(MancalaError::InvalidMove(
                InvalidMoveReason::UnknownPlayer(other),
            )),
        }
    }
}

impl TryFrom<u8> for Player {
    type Error = MancalaError;

    fn try_from(number: u8) -> Result<Self, Self::Error> {
        Player::from_number(number)
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Player {}", self.number())
    }
}
