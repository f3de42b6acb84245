//! Move application: sowing, opponent-store skipping and capture.
//!
//! A move picks up every stone in one of the mover's pits and drops them one
//! at a time along the area cycle, starting with the cell after the source
//! pit. The mover's own store is on the path; the opponent's store is
//! stepped over. If the last stone lands in a previously empty pit of the
//! mover's own row and the mirror pit across the board holds stones, both
//! pits are emptied into the mover's store.
//!
//! Validation happens before pickup, so a rejected move never mutates the board.

use crate::board::board_area::{BoardArea, Position};
use crate::board::board_state::{Board, BoardState};
use crate::board::errors::{InvalidMoveReason, MancalaError};
use crate::board::player::Player;

/// Stones taken from the opponent by a capture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capture {
    /// Mover's pit where the last stone landed.
    pub pit: usize,
    /// Opponent's mirror pit that was emptied.
    pub opposing_pit: usize,
    /// Stones taken from the opposing pit.
    pub captured: u32,
    /// Stones added to the mover's store (`captured` plus the landing stone).
    pub banked: u32,
}

/// Everything the game loop and engines need to know about an applied move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveReport {
    pub player: Player,
    pub start_pit: usize,
    pub stones_sown: u32,
    pub landing: Position,
    pub capture: Option<Capture>,
    pub state: BoardState,
}

impl MoveReport {
    /// The last stone landed in the mover's own store.
    #[inline]
    pub fn is_free_turn(&self) -> bool {
        self.landing == Position::store_of(self.player)
    }

    /// Human-readable capture notice, if a capture happened.
    pub fn announcement(&self) -> Option<String> {
        self.capture
            .map(|capture| format!("{} stones captured!", capture.captured))
    }
}

impl Board {
    /// Apply `player`'s move from `start_pit` and report the outcome.
    pub fn apply_move(
        &mut self,
        player: Player,
        start_pit: usize,
    ) -> Result<MoveReport, MancalaError> {
        let stones = self.stones_for_move(player, start_pit)?;
        let landing = self.sow(player, start_pit, stones)?;

        let capture = if self.earned_capture(player, landing)? {
            Some(self.process_capture(player, landing)?)
        } else {
            None
        };

        Ok(MoveReport {
            player,
            start_pit,
            stones_sown: stones,
            landing,
            capture,
            state: self.state().clone(),
        })
    }

    /// Same as `apply_move`, taking the 1-based player number used at the edges.
    pub fn apply_move_for(
        &mut self,
        player_num: u8,
        start_pit: usize,
    ) -> Result<MoveReport, MancalaError> {
        self.apply_move(Player::from_number(player_num)?, start_pit)
    }

    fn stones_for_move(&self, player: Player, start_pit: usize) -> Result<u32, MancalaError> {
        let pit_count = self.pit_count();
        if start_pit >= pit_count {
            return Err(MancalaError::InvalidMove(InvalidMoveReason::PitOutOfRange {
                pit: start_pit,
                pit_count,
            }));
        }
        match self.pits(player)[start_pit] {
            0 => Err(MancalaError::InvalidMove(InvalidMoveReason::EmptyPit(
                start_pit,
            ))),
            stones => Ok(stones),
        }
    }

    /// Distribute the source pit's stones and return where the last one landed.
    fn sow(
        &mut self,
        player: Player,
        start_pit: usize,
        stones: u32,
    ) -> Result<Position, MancalaError> {
        let pit_count = self.pit_count();
        let skipped_store = BoardArea::store_of(player.opponent());

        let mut position = Position::new(BoardArea::pits_of(player), start_pit);
        *self.cell_mut(position)? = 0;

        for _ in 0..stones {
            position = position.advance(pit_count);
            if position.area == skipped_store {
                position = position.advance(pit_count);
            }
            *self.cell_mut(position)? += 1;
        }

        Ok(position)
    }

    fn earned_capture(&self, player: Player, landing: Position) -> Result<bool, MancalaError> {
        if landing.area != BoardArea::pits_of(player) {
            return Ok(false);
        }
        if self.cell(landing)? != 1 {
            return Ok(false);
        }
        let opposing = landing.opposing(self.pit_count())?;
        Ok(self.cell(opposing)? > 0)
    }

    fn process_capture(
        &mut self,
        player: Player,
        landing: Position,
    ) -> Result<Capture, MancalaError> {
        let opposing = landing.opposing(self.pit_count())?;
        let captured = self.cell(opposing)?;

        *self.cell_mut(landing)? = 0;
        *self.cell_mut(opposing)? = 0;

        let banked = captured + 1;
        *self.cell_mut(Position::store_of(player))? += banked;

        Ok(Capture {
            pit: landing.index,
            opposing_pit: opposing.index,
            captured,
            banked,
        })
    }
}
