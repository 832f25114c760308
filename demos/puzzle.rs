//! 8-puzzle solver demo.
//!
//! Run: cargo run --bin puzzle -- [t0 t1 ... t8]
//!
//! Without arguments, solves a few fixed boards and one random scramble.

use astra_demos::puzzle::{DEMO_BOARDS, parse_args, report};
use astra_problems::{EightPuzzle, scramble};

fn solve_and_print(puzzle: &EightPuzzle) {
    let solution = puzzle.solve();
    println!("{}", report(puzzle, &solution));
}

fn main() {
    astra_demos::init_logging();

    let board = match parse_args(std::env::args().skip(1)) {
        Ok(board) => board,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    if let Some(board) = board {
        solve_and_print(&EightPuzzle::from_board(board));
        return;
    }

    for (i, (title, tiles)) in DEMO_BOARDS.iter().enumerate() {
        println!();
        println!("EXAMPLE {}: {title}", i + 1);
        match EightPuzzle::new(tiles) {
            Ok(puzzle) => solve_and_print(&puzzle),
            Err(e) => eprintln!("Error: {e}"),
        }
    }

    println!();
    println!("EXAMPLE {}: Random scramble (20 slides)", DEMO_BOARDS.len() + 1);
    let board = scramble(&mut rand::rng(), 20);
    solve_and_print(&EightPuzzle::from_board(board));
}
