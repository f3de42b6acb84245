//! Authoritative board model.
//!
//! `Board` owns two pit rows and two stores. The only way to move stones is
//! `Board::apply_move` (see `apply_move.rs`); everything here is construction
//! and read-only access, plus the end-of-game sweep used by the game loop.

use crate::board::board_area::{BoardArea, Position};
use crate::board::errors::MancalaError;
use crate::board::mancala_rules::{BoardConfig, RAW_AREA_COUNT};
use crate::board::player::Player;

/// Snapshot of every cell on the board, indexed by `Player::index()`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BoardState {
    pub pits: [Vec<u32>; 2],
    pub stores: [u32; 2],
}

impl BoardState {
    #[inline]
    pub fn pit_count(&self) -> usize {
        self.pits[0].len()
    }

    #[inline]
    pub fn pits(&self, player: Player) -> &[u32] {
        &self.pits[player.index()]
    }

    #[inline]
    pub fn store(&self, player: Player) -> u32 {
        self.stores[player.index()]
    }

    pub fn total_stones(&self) -> u32 {
        self.pits.iter().flatten().sum::<u32>() + self.stores.iter().sum::<u32>()
    }
}

/// Constructors reject any board whose total stone count does not fit in a
/// `u32`; moves conserve that total, so no single cell can overflow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    state: BoardState,
}

impl Default for Board {
    fn default() -> Self {
        Self::from_validated(&BoardConfig::default())
    }
}

impl Board {
    /// Fresh board with `stones_per_pit` stones in every pit and empty stores.
    pub fn new(pit_count: usize, stones_per_pit: u32) -> Result<Self, MancalaError> {
        Self::from_config(&BoardConfig {
            pit_count,
            stones_per_pit,
        })
    }

    pub fn from_config(config: &BoardConfig) -> Result<Self, MancalaError> {
        if config.pit_count == 0 {
            return Err(MancalaError::InvalidInitialState(
                "pit_count must be at least 1".to_owned(),
            ));
        }
        let total = u32::try_from(config.pit_count)
            .ok()
            .and_then(|pits| pits.checked_mul(2))
            .and_then(|cells| cells.checked_mul(config.stones_per_pit));
        if total.is_none() {
            return Err(MancalaError::InvalidInitialState(format!(
                "{} pits of {} stones per side exceeds the u32 stone limit",
                config.pit_count, config.stones_per_pit
            )));
        }
        Ok(Self::from_validated(config))
    }

    fn from_validated(config: &BoardConfig) -> Self {
        let row = vec![config.stones_per_pit; config.pit_count];
        Self {
            state: BoardState {
                pits: [row.clone(), row],
                stores: [0, 0],
            },
        }
    }

    /// Build a board from the raw four-area layout
    /// `[player 1 pits, [player 1 store], player 2 pits, [player 2 store]]`.
    pub fn from_state(raw: &[Vec<u32>]) -> Result<Self, MancalaError> {
        if raw.len() != RAW_AREA_COUNT {
            return Err(MancalaError::InvalidInitialState(format!(
                "expected {RAW_AREA_COUNT} areas, found {}",
                raw.len()
            )));
        }

        let (one_pits, one_store, two_pits, two_store) = (&raw[0], &raw[1], &raw[2], &raw[3]);
        if one_pits.is_empty() {
            return Err(MancalaError::InvalidInitialState(
                "pit rows must not be empty".to_owned(),
            ));
        }
        if one_pits.len() != two_pits.len() {
            return Err(MancalaError::InvalidInitialState(format!(
                "pit rows differ in length ({} vs {})",
                one_pits.len(),
                two_pits.len()
            )));
        }
        for (player, store) in [(Player::One, one_store), (Player::Two, two_store)] {
            if store.len() != 1 {
                return Err(MancalaError::InvalidInitialState(format!(
                    "{player} store must hold exactly one cell, found {}",
                    store.len()
                )));
            }
        }

        let total = raw
            .iter()
            .flatten()
            .try_fold(0u32, |sum, &stones| sum.checked_add(stones));
        if total.is_none() {
            return Err(MancalaError::InvalidInitialState(
                "total stone count exceeds the u32 stone limit".to_owned(),
            ));
        }

        Ok(Self {
            state: BoardState {
                pits: [one_pits.clone(), two_pits.clone()],
                stores: [one_store[0], two_store[0]],
            },
        })
    }

    #[inline]
    pub fn state(&self) -> &BoardState {
        &self.state
    }

    #[inline]
    pub fn pit_count(&self) -> usize {
        self.state.pit_count()
    }

    #[inline]
    pub fn pits(&self, player: Player) -> &[u32] {
        self.state.pits(player)
    }

    #[inline]
    pub fn store(&self, player: Player) -> u32 {
        self.state.store(player)
    }

    #[inline]
    pub fn get_score(&self, player: Player) -> u32 {
        self.store(player)
    }

    /// Both stores, player 1 first.
    #[inline]
    pub fn get_scores(&self) -> (u32, u32) {
        (self.state.stores[0], self.state.stores[1])
    }

    #[inline]
    pub fn total_stones(&self) -> u32 {
        self.state.total_stones()
    }

    pub fn is_row_empty(&self, player: Player) -> bool {
        self.pits(player).iter().all(|&stones| stones == 0)
    }

    /// Sweep every stone left in a pit row into that row owner's store.
    ///
    /// Returns the stones banked per player (indexed by `Player::index()`).
    pub fn collect_remaining(&mut self) -> [u32; 2] {
        let mut swept = [0; 2];
        for player in [Player::One, Player::Two] {
            let idx = player.index();
            swept[idx] = self.state.pits[idx].iter().sum();
            self.state.pits[idx].iter_mut().for_each(|stones| *stones = 0);
            self.state.stores[idx] += swept[idx];
        }
        swept
    }

    pub(crate) fn cell(&self, position: Position) -> Result<u32, MancalaError> {
        position.check_bounds(self.pit_count())?;
        Ok(match position.area {
            BoardArea::PlayerOnePits => self.state.pits[0][position.index],
            BoardArea::PlayerTwoPits => self.state.pits[1][position.index],
            BoardArea::PlayerOneStore => self.state.stores[0],
            BoardArea::PlayerTwoStore => self.state.stores[1],
        })
    }

    pub(crate) fn cell_mut(&mut self, position: Position) -> Result<&mut u32, MancalaError> {
        position.check_bounds(self.pit_count())?;
        Ok(match position.area {
            BoardArea::PlayerOnePits => &mut self.state.pits[0][position.index],
            BoardArea::PlayerTwoPits => &mut self.state.pits[1][position.index],
            BoardArea::PlayerOneStore => &mut self.state.stores[0],
            BoardArea::PlayerTwoStore => &mut self.state.stores[1],
        })
    }
}
