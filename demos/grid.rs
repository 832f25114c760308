//! Grid pathfinding demo.
//!
//! Run: cargo run --bin grid -- [WIDTH HEIGHT SX SY GX GY]

use astra_demos::grid::{GridArgs, format_path, render};
use astra_problems::find_path;

fn main() {
    astra_demos::init_logging();

    let args = GridArgs::parse(std::env::args().skip(1));
    let grid = args.problem();
    let outcome = find_path(&grid, args.start, args.goal);

    println!("{}", render(&grid, &outcome.path, args.start, args.goal));
    if outcome.is_found() {
        println!("Path: {}", format_path(&outcome.path));
    } else {
        println!("No path found");
    }
}
