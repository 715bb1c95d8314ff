use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One of the two competing sides. Black moves first in a standard game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Black,
    White,
}

impl Side {
    #[inline]
    pub fn other(self) -> Self {
        match self {
            Side::Black => Side::White,
            Side::White => Side::Black,
        }
    }
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    #[error("coordinate ({x}, {y}) is off the board")]
    OutOfRange { x: u8, y: u8 },
    #[error("illegal move at ({x}, {y})")]
    IllegalMove { x: u8, y: u8 },
    #[error("invalid grid cell {0:?} (expected '.', 'B' or 'W')")]
    InvalidCell(char),
    #[error("invalid grid: expected 64 cells, got {0}")]
    InvalidGridLen(usize),
}

/// Board indexing helpers (8x8 board, idx = x + 8*y)
#[inline]
pub fn idx_to_xy(idx: u8) -> (u8, u8) {
    debug_assert!(idx < 64);
    (idx % 8, idx / 8)
}

#[inline]
pub fn xy_to_idx(x: u8, y: u8) -> Option<u8> {
    if x < 8 && y < 8 {
        Some(x + 8 * y)
    } else {
        None
    }
}

#[inline]
pub fn on_board(x: i8, y: i8) -> bool {
    (0..8).contains(&x) && (0..8).contains(&y)
}
