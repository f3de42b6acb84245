//! Crate root module declarations for the Plum Mancala rules engine.
//!
//! This file exposes the board state machine (areas, sowing, capture), the
//! built-in engines, and the utility layer (rendering and the engine match
//! harness) so binaries, benches, and external tooling can import stable
//! module paths.

pub mod board {
    pub mod apply_move;
    pub mod board_area;
    pub mod board_state;
    pub mod errors;
    pub mod mancala_rules;
    pub mod player;
}

pub mod engines {
    pub mod engine_greedy;
    pub mod engine_model;
    pub mod engine_random;
    pub mod engine_select;
    pub mod engine_trait;
    pub mod engine_vector;
    pub mod player_view;
}

pub mod utils {
    pub mod engine_match_harness;
    pub mod render_board;
}
