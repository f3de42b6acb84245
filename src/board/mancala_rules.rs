//! Rule constants and the dimensions of a fresh board.

/// Standard Kalah layout: six pits per side, four stones in each.
pub const DEFAULT_PIT_COUNT: usize = 6;
pub const DEFAULT_STONES_PER_PIT: u32 = 4;

/// Number of cells in the raw four-area layout (pits, store, pits, store).
pub const RAW_AREA_COUNT: usize = 4;

/// Board dimensions used when starting a fresh game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardConfig {
    pub pit_count: usize,
    pub stones_per_pit: u32,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            pit_count: DEFAULT_PIT_COUNT,
            stones_per_pit: DEFAULT_STONES_PER_PIT,
        }
    }
}
