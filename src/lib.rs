//! A terminal maze game.
//!
//! The core of this crate generates perfect mazes (every open cell reachable, no loops), computes
//! the optimal number of moves from start to end, and tracks a player moving through the maze. A
//! Ratatui interface sits on top and only ever calls into that core and renders its state.
//!
//! The core is usable on its own: look up a [`Difficulty`] to get a [`MazeConfig`], build a
//! [`Session`] from it, and feed it [`Direction`]s through [`Session::attempt_move`].

#![expect(
    clippy::cargo_common_metadata,
    reason = "Temporary allow during development."
)]

mod app;
mod cli;
mod difficulty;
mod events;
mod generator;
mod grid;
pub mod logging;
mod pathfinding;
mod session;
mod types;
mod ui;

pub use app::App;
pub use cli::Cli;
pub use difficulty::{Difficulty, MazeConfig};
pub use generator::{far_corner, generate, SEED_ROOM};
pub use grid::{Cell, Coordinate, Direction, Grid, MIN_SIZE};
pub use pathfinding::shortest_distance;
pub use session::{MoveOutcome, Session, Status};
