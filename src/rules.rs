use crate::board::Board;
use crate::types::{idx_to_xy, on_board, Side};

/// The 8 ray directions used by the flip-capture rule.
pub const DIRECTIONS: [(i8, i8); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// A candidate square. A pass is represented by the absence of a move
/// (`Option<Move>` with `None`), never by an in-band sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub x: u8,
    pub y: u8,
}

impl Move {
    #[inline]
    pub fn new(x: u8, y: u8) -> Option<Self> {
        if x < 8 && y < 8 {
            Some(Self { x, y })
        } else {
            None
        }
    }

    #[inline]
    pub fn from_index(idx: u8) -> Self {
        let (x, y) = idx_to_xy(idx);
        Self { x, y }
    }

    #[inline]
    pub fn index(self) -> u8 {
        self.x + 8 * self.y
    }
}

/// True iff stepping from (x, y) in direction (dx, dy) immediately lands
/// on an opponent disc and the run of opponent discs ends on a disc owned
/// by `side` while still on-board.
pub(crate) fn ray_captures(board: &Board, side: Side, x: u8, y: u8, dx: i8, dy: i8) -> bool {
    let other = side.other();
    let mut cx = x as i8 + dx;
    let mut cy = y as i8 + dy;
    if !on_board(cx, cy) || board.disc_at((cx + 8 * cy) as u8) != Some(other) {
        return false;
    }
    while on_board(cx, cy) && board.disc_at((cx + 8 * cy) as u8) == Some(other) {
        cx += dx;
        cy += dy;
    }
    on_board(cx, cy) && board.disc_at((cx + 8 * cy) as u8) == Some(side)
}

/// True iff placing at `mv` is legal for `side`: the square is empty and
/// at least one direction yields a capture.
pub fn check_move(board: &Board, mv: Move, side: Side) -> bool {
    if mv.x >= 8 || mv.y >= 8 {
        return false;
    }
    if board.disc_at(mv.index()).is_some() {
        return false;
    }
    DIRECTIONS
        .iter()
        .any(|&(dx, dy)| ray_captures(board, side, mv.x, mv.y, dx, dy))
}

/// A pass is legal iff the side has no square to play; it is implied,
/// never independently chosen.
#[inline]
pub fn check_move_or_pass(board: &Board, mv: Option<Move>, side: Side) -> bool {
    match mv {
        Some(m) => check_move(board, m, side),
        None => !has_moves(board, side),
    }
}

pub fn has_moves(board: &Board, side: Side) -> bool {
    (0..64u8).any(|idx| check_move(board, Move::from_index(idx), side))
}

/// Ordered legal moves for `side`, in row-major scan order (linear index
/// ascending). The ordering is a contract: the search engine's tie-break
/// keeps the first-encountered best move.
pub fn legal_moves(board: &Board, side: Side) -> Vec<Move> {
    let mut moves = Vec::new();
    for idx in 0..64u8 {
        let mv = Move::from_index(idx);
        if check_move(board, mv, side) {
            moves.push(mv);
        }
    }
    moves
}

/// The game is finished iff neither side has a legal move.
#[inline]
pub fn is_terminal(board: &Board) -> bool {
    !(has_moves(board, Side::Black) || has_moves(board, Side::White))
}

/// Winner by disc count; `None` on a draw. Meaningful once the position
/// is terminal.
pub fn winner(board: &Board) -> Option<Side> {
    let black = board.count(Side::Black);
    let white = board.count(Side::White);
    if black > white {
        Some(Side::Black)
    } else if white > black {
        Some(Side::White)
    } else {
        None
    }
}
