use flipstone::{
    apply_move_or_pass, has_moves, is_terminal, winner, Board, SearchConfig, Side, Solver,
};

/// Self-play driver:
/// - Builds the standard starting position
/// - Runs two fixed-depth solvers against each other to the end
/// - Prints the final grid, disc counts and winner
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let depth: u8 = match std::env::args().nth(1) {
        Some(arg) => arg
            .parse()
            .map_err(|e| format!("Invalid depth '{arg}': {e}"))?,
        None => SearchConfig::default().depth,
    };
    println!("[selfplay] Search depth {depth} for both sides.");

    let solver = Solver::with_depth(depth);
    let mut board = Board::new();
    let mut to_move = Side::Black;
    let mut plies = 0u32;

    while !is_terminal(&board) {
        if !has_moves(&board, to_move) {
            println!("[selfplay] {to_move:?} passes.");
            to_move = to_move.other();
            continue;
        }

        let result = solver.search(&board, to_move);
        let Some(mv) = result.best_move else {
            // Unreachable: has_moves was checked above.
            break;
        };
        println!(
            "[selfplay] {:?} plays ({}, {}) value {} ({} nodes).",
            to_move, mv.x, mv.y, result.value, result.nodes
        );

        board = apply_move_or_pass(&board, result.best_move, to_move)?;
        to_move = to_move.other();
        plies += 1;
    }

    println!("[selfplay] Finished after {plies} plies.");
    print!("{board}");
    let black = board.count(Side::Black);
    let white = board.count(Side::White);
    match winner(&board) {
        Some(side) => println!("[selfplay] {side:?} wins {black}-{white}."),
        None => println!("[selfplay] Draw {black}-{white}."),
    }

    Ok(())
}
