use crate::board::Board;
use crate::rules::{check_move, ray_captures, Move, DIRECTIONS};
use crate::types::{on_board, GameError, Side};

/// Flip the run of opponent discs between `mv` and the terminating
/// same-side disc in direction (dx, dy). Caller has already established
/// that the direction captures.
fn flip_ray(board: &mut Board, mv: Move, side: Side, dx: i8, dy: i8) {
    let other = side.other();
    let mut cx = mv.x as i8 + dx;
    let mut cy = mv.y as i8 + dy;
    while on_board(cx, cy) && board.disc_at((cx + 8 * cy) as u8) == Some(other) {
        board.place((cx + 8 * cy) as u8, side);
        cx += dx;
        cy += dy;
    }
}

/// Apply a move as a pure transform: returns the successor board on
/// success. Validates: coordinates on-board, move captures for `side`.
/// Every capturing direction is flipped, then the played square itself is
/// set to `side`. The input board is never touched.
pub fn apply_move(board: &Board, mv: Move, side: Side) -> Result<Board, GameError> {
    if mv.x >= 8 || mv.y >= 8 {
        return Err(GameError::OutOfRange { x: mv.x, y: mv.y });
    }
    if !check_move(board, mv, side) {
        return Err(GameError::IllegalMove { x: mv.x, y: mv.y });
    }

    let mut next = *board;
    for (dx, dy) in DIRECTIONS {
        if ray_captures(board, side, mv.x, mv.y, dx, dy) {
            flip_ray(&mut next, mv, side, dx, dy);
        }
    }
    next.place(mv.index(), side);
    Ok(next)
}

/// Like `apply_move`, but a pass (`None`) returns the board unchanged.
/// Passing is only checked through `check_move_or_pass`; applying one is
/// always a no-op.
pub fn apply_move_or_pass(
    board: &Board,
    mv: Option<Move>,
    side: Side,
) -> Result<Board, GameError> {
    match mv {
        Some(m) => apply_move(board, m, side),
        None => Ok(*board),
    }
}
