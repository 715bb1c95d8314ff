use proptest::prelude::*;

use flipstone::{
    apply_move, check_move, evaluate, has_moves, is_terminal, legal_moves, Board, Move, Side,
    Weights,
};

/// Drive a playout from the starting position using `picks` to select
/// among the legal moves each ply, handling forced passes. Returns the
/// reached board and the side to move next.
fn playout(picks: &[usize]) -> (Board, Side) {
    let mut board = Board::new();
    let mut to_move = Side::Black;
    for &pick in picks {
        if is_terminal(&board) {
            break;
        }
        if !has_moves(&board, to_move) {
            to_move = to_move.other();
        }
        let moves = legal_moves(&board, to_move);
        let mv = moves[pick % moves.len()];
        board = apply_move(&board, mv, to_move).expect("enumerated move applies");
        to_move = to_move.other();
    }
    (board, to_move)
}

proptest! {
    /// Enumeration and the existence check always agree, for both sides.
    #[test]
    fn has_moves_iff_enumeration_nonempty(picks in prop::collection::vec(0usize..16, 0..30)) {
        let (board, _) = playout(&picks);
        for side in [Side::Black, Side::White] {
            prop_assert_eq!(has_moves(&board, side), !legal_moves(&board, side).is_empty());
        }
    }

    /// Every enumerated move passes the legality check and appears in
    /// strictly ascending row-major index order.
    #[test]
    fn enumeration_is_ordered_and_legal(picks in prop::collection::vec(0usize..16, 0..30)) {
        let (board, to_move) = playout(&picks);
        let moves = legal_moves(&board, to_move);
        for pair in moves.windows(2) {
            prop_assert!(pair[0].index() < pair[1].index());
        }
        for idx in 0..64u8 {
            let mv = Move::from_index(idx);
            prop_assert_eq!(check_move(&board, mv, to_move), moves.contains(&mv));
        }
    }

    /// A legal move adds exactly one disc overall; the mover gains the
    /// placed disc plus every flip, the opponent loses exactly the flips.
    #[test]
    fn capture_conserves_discs(picks in prop::collection::vec(0usize..16, 0..30)) {
        let (board, to_move) = playout(&picks);
        if !has_moves(&board, to_move) {
            return Ok(());
        }
        for mv in legal_moves(&board, to_move) {
            let next = apply_move(&board, mv, to_move).expect("legal move applies");
            prop_assert_eq!(next.filled_count(), board.filled_count() + 1);
            let gained = next.count(to_move) - board.count(to_move);
            let lost = board.count(to_move.other()) - next.count(to_move.other());
            prop_assert!(gained >= 2);
            prop_assert_eq!(lost, gained - 1);
        }
    }

    /// Applying a move never touches the input board, and an independent
    /// copy never observes later mutations.
    #[test]
    fn boards_are_value_semantics(picks in prop::collection::vec(0usize..16, 1..30)) {
        let (board, to_move) = playout(&picks);
        let snapshot = board;
        if has_moves(&board, to_move) {
            let mv = legal_moves(&board, to_move)[0];
            let _ = apply_move(&board, mv, to_move).expect("legal move applies");
        }
        prop_assert_eq!(board, snapshot);
    }

    /// The static evaluation is antisymmetric between the two sides.
    #[test]
    fn evaluation_antisymmetry(picks in prop::collection::vec(0usize..16, 0..30)) {
        let (board, _) = playout(&picks);
        let weights = Weights::default();
        prop_assert_eq!(
            evaluate(&board, Side::Black, &weights),
            -evaluate(&board, Side::White, &weights)
        );
    }

    /// Terminal means neither side can move, and vice versa.
    #[test]
    fn terminal_iff_both_blocked(picks in prop::collection::vec(0usize..16, 0..40)) {
        let (board, _) = playout(&picks);
        let blocked =
            legal_moves(&board, Side::Black).is_empty() && legal_moves(&board, Side::White).is_empty();
        prop_assert_eq!(is_terminal(&board), blocked);
    }
}
