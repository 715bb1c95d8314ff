use crate::board::Board;
use crate::engine::apply::apply_move;
use crate::engine::score::{evaluate, Weights};
use crate::rules::{has_moves, legal_moves};
use crate::types::Side;

use super::{SearchConfig, SearchResult};

/// Plain fixed-depth minimax with strict level alternation and no
/// pruning: every node within the ply budget is visited.
///
/// Conventions:
/// - Values are always from `root_side`'s perspective, even at
///   minimizing nodes; the opponent picks the adversarially smallest of
///   those values rather than optimizing a heuristic of its own.
/// - A node where the side to move has no legal square is a leaf; pass
///   chains are not searched through.
fn minimax(
    board: &Board,
    root_side: Side,
    weights: &Weights,
    plies_remaining: u8,
    maximizing: bool,
    nodes: &mut u64,
) -> i16 {
    *nodes += 1;

    let mover = if maximizing {
        root_side
    } else {
        root_side.other()
    };
    if plies_remaining == 0 || !has_moves(board, mover) {
        return evaluate(board, root_side, weights);
    }

    let mut best = if maximizing { i16::MIN } else { i16::MAX };
    for mv in legal_moves(board, mover) {
        // Moves come from the enumeration, so this never fails; each
        // child owns an independent board for its subtree.
        if let Ok(child) = apply_move(board, mv, mover) {
            let value = minimax(
                &child,
                root_side,
                weights,
                plies_remaining - 1,
                !maximizing,
                nodes,
            );
            best = if maximizing {
                best.max(value)
            } else {
                best.min(value)
            };
        }
    }
    best
}

/// Root search for `side`: explores every legal root move to the
/// configured depth and keeps the first strictly-greater value, so ties
/// resolve to the earliest move in enumeration order. A depth below 1 is
/// treated as 1.
pub fn search_root(board: &Board, side: Side, config: &SearchConfig) -> SearchResult {
    let depth = config.depth.max(1);
    let mut nodes = 1u64;

    let moves = legal_moves(board, side);
    if moves.is_empty() {
        return SearchResult {
            best_move: None,
            value: evaluate(board, side, &config.weights),
            nodes,
        };
    }

    let mut best_value = i16::MIN;
    let mut best_move = None;
    for mv in moves {
        if let Ok(child) = apply_move(board, mv, side) {
            let value = minimax(&child, side, &config.weights, depth - 1, false, &mut nodes);
            if value > best_value {
                best_value = value;
                best_move = Some(mv);
            }
        }
    }

    SearchResult {
        best_move,
        value: best_value,
        nodes,
    }
}
