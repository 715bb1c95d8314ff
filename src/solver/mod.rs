use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::engine::score::Weights;
use crate::rules::Move;
use crate::types::Side;

pub mod minimax;

pub use minimax::search_root;

/// Search parameters. Depth is a fixed ply budget, never derived from a
/// clock; weights feed the static evaluator at the leaves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    pub depth: u8,
    #[serde(default)]
    pub weights: Weights,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: 4,
            weights: Weights::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// Chosen square, or `None` for a forced pass.
    pub best_move: Option<Move>,
    /// Minimax value of the position from the searching side's
    /// perspective.
    pub value: i16,
    /// Nodes visited, root children included.
    pub nodes: u64,
}

/// Fixed-depth minimax searcher. Stateless across calls apart from its
/// configuration; concurrent searches on different boards are
/// independent.
#[derive(Debug, Clone, Copy)]
pub struct Solver {
    config: SearchConfig,
}

impl Solver {
    #[inline]
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    #[inline]
    pub fn with_depth(depth: u8) -> Self {
        Self::new(SearchConfig {
            depth,
            ..SearchConfig::default()
        })
    }

    #[inline]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Select the move for `side` on `board`. Returns a pass (best_move
    /// `None`) when `side` cannot move; the search itself never runs in
    /// that case.
    pub fn search(&self, board: &Board, side: Side) -> SearchResult {
        search_root(board, side, &self.config)
    }
}
