use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::types::Side;

/// Positional category of a board square. Corners are permanently stable,
/// their border and diagonal neighbors risk handing the corner over, plain
/// border squares are harder to flip than open interior ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SquareClass {
    Corner,
    Danger,
    Edge,
    Interior,
}

/// Category of the square at (x, y), x and y in [0, 7].
pub fn square_class(x: u8, y: u8) -> SquareClass {
    debug_assert!(x < 8 && y < 8);
    let x_corner = x == 0 || x == 7;
    let y_corner = y == 0 || y == 7;
    let x_near = x == 1 || x == 6;
    let y_near = y == 1 || y == 6;
    if x_corner && y_corner {
        SquareClass::Corner
    } else if (x_corner && y_near) || (y_corner && x_near) || (x_near && y_near) {
        SquareClass::Danger
    } else if x_corner || y_corner {
        SquareClass::Edge
    } else {
        SquareClass::Interior
    }
}

/// Per-category square weights for the static evaluator. Runtime values
/// rather than constants so they stay testable and tunable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Weights {
    pub corner: i16,
    pub edge: i16,
    pub danger: i16,
    pub interior: i16,
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            corner: 5,
            edge: 3,
            danger: -4,
            interior: 1,
        }
    }
}

impl Weights {
    #[inline]
    pub fn for_class(&self, class: SquareClass) -> i16 {
        match class {
            SquareClass::Corner => self.corner,
            SquareClass::Danger => self.danger,
            SquareClass::Edge => self.edge,
            SquareClass::Interior => self.interior,
        }
    }
}

fn weighted_total(board: &Board, side: Side, weights: &Weights) -> i16 {
    let mut total = 0i16;
    for y in 0..8u8 {
        for x in 0..8u8 {
            if board.disc_at(x + 8 * y) == Some(side) {
                total += weights.for_class(square_class(x, y));
            }
        }
    }
    total
}

/// Static positional heuristic from `side`'s perspective:
/// (weighted sum for `side`) - (weighted sum for the opponent).
/// Not a disc count.
pub fn evaluate(board: &Board, side: Side, weights: &Weights) -> i16 {
    weighted_total(board, side, weights) - weighted_total(board, side.other(), weights)
}
