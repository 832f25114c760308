//! Shared argument handling and text rendering for the astra demos.
//!
//! The `grid` binary draws a shortest path on a small grid; the `puzzle`
//! binary prints move-by-move 8-puzzle solutions.

pub mod grid;
pub mod puzzle;

/// Initialise `env_logger`, showing warnings unless `RUST_LOG` says otherwise.
pub fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
}
