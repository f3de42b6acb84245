//! Errors raised by the board state machine.
//!
//! `MancalaError` is the single error type of the rules core:
//! - `InvalidMove` is a caller mistake (unknown player, pit out of range,
//!   empty pit). It is detected before any stone is picked up, so the board
//!   is left untouched and the caller can simply ask for another move.
//! - `InvalidBoardArea` means the area cycle or the opposing-pit lookup was
//!   handed a position that does not exist. This is a bug, not user input,
//!   and should not be recovered from.
//! - `InvalidInitialState` rejects a malformed injected board.

use crate::board::board_area::BoardArea;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MancalaError {
    #[error("invalid move: {0}")]
    InvalidMove(InvalidMoveReason),

    #[error("invalid board area {area:?} at index {index}")]
    InvalidBoardArea { area: BoardArea, index: usize },

    #[error("invalid initial state: {0}")]
    InvalidInitialState(String),
}

/// Why a requested move was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum InvalidMoveReason {
    #[error("unknown player number {0}")]
    UnknownPlayer(u8),

    #[error("pit {pit} is outside 0..{pit_count}")]
    PitOutOfRange { pit: usize, pit_count: usize },

    #[error("pit {0} holds no stones")]
    EmptyPit(usize),
}
