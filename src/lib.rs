#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)] // may be revisited
#![allow(
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss
)] // board coordinates fit in u8/i8

pub mod types;
pub mod board;
pub mod rules;
pub mod config;

pub mod engine {
    pub mod apply;
    pub mod score;
}

pub mod solver;

// Re-exports: stable minimal API surface for external callers
pub use crate::board::Board;
pub use crate::config::{load_config_from_json, parse_config};
pub use crate::engine::apply::{apply_move, apply_move_or_pass};
pub use crate::engine::score::{evaluate, square_class, SquareClass, Weights};
pub use crate::rules::{
    check_move, check_move_or_pass, has_moves, is_terminal, legal_moves, winner, Move,
};
pub use crate::solver::{SearchConfig, SearchResult, Solver};
pub use crate::types::{GameError, Side};
