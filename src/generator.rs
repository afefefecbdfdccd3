//! Maze generation module.
//!
//! This module carves perfect mazes with a randomised depth-first backtracker working on a
//! half-resolution lattice: only cells with odd row and column act as rooms, and the cell between
//! two rooms is the wall that gets opened to join them.

use color_eyre::eyre::Result;
use log::debug;
use rand::{seq::SliceRandom as _, Rng};

use crate::grid::{Coordinate, Direction, Grid};

/// Room the carving always starts from.
pub const SEED_ROOM: Coordinate = Coordinate::new(1, 1);

/// Border cell opened above the seed room as the maze entrance.
const ENTRANCE: Coordinate = Coordinate::new(0, 1);

/// Returns the room closest to the bottom-right corner of a grid of side `size`.
///
/// Rooms sit on odd indices strictly inside the border, so this is `size - 2` for odd sizes and
/// `size - 3` for even ones. Sizes below three are clamped onto the seed room.
pub const fn far_corner(size: usize) -> Coordinate {
    let last = if size < 4 {
        1
    } else if size.is_multiple_of(2) {
        size - 3
    } else {
        size - 2
    };

    Coordinate::new(last, last)
}

/// Pending work for one room on the carving stack.
struct Frame {
    /// Room being expanded.
    room: Coordinate,
    /// Directions not yet tried from this room, in shuffled order.
    pending: Vec<Direction>,
}

impl Frame {
    /// Creates a frame for `room` with a fresh shuffle of the four directions.
    fn new<R: Rng + ?Sized>(room: Coordinate, rng: &mut R) -> Self {
        let mut pending = Direction::ALL.to_vec();
        pending.shuffle(rng);

        Self { room, pending }
    }
}

/// Generates a perfect maze of side `size`.
///
/// This function starts from [`SEED_ROOM`] and walks the room lattice depth-first. Every visited
/// room shuffles the four directions anew; each direction whose room two cells away is interior
/// and still a wall gets the connecting wall and the room opened, and is then expanded before the
/// remaining directions. An explicit stack stands in for recursion so large grids cannot overflow
/// the call stack.
///
/// Afterwards the entrance above the seed room, the seed room itself, the far-corner room and an
/// exit corridor from the far-corner room to the right border are opened. These are all leaves of
/// the carved tree, so the result stays loop-free and fully connected.
///
/// The same `rng` state always produces the same grid.
///
/// # Errors
///
/// This function fails if `size` is smaller than [`MIN_SIZE`](crate::MIN_SIZE).
pub fn generate<R: Rng + ?Sized>(size: usize, rng: &mut R) -> Result<Grid> {
    let mut grid = Grid::walled(size)?;
    let mut rooms = 1_usize;

    grid.open(SEED_ROOM)?;
    let mut stack = vec![Frame::new(SEED_ROOM, rng)];

    while let Some(frame) = stack.last_mut() {
        let Some(direction) = frame.pending.pop() else {
            let _ = stack.pop();
            continue;
        };
        let room = frame.room;

        let Some(target) = room
            .offset(direction, 2, size)
            .filter(|target| target.is_interior(size) && !grid.is_path(*target))
        else {
            continue;
        };
        let Some(between) = room.neighbour(direction, size) else {
            continue;
        };

        grid.open(between)?;
        grid.open(target)?;
        rooms += 1;

        stack.push(Frame::new(target, rng));
    }

    open_boundaries(&mut grid)?;

    debug!("carved {rooms} rooms in a {size}x{size} grid");

    Ok(grid)
}

/// Force-opens the entrance, the seed room, the far-corner room and the exit corridor.
fn open_boundaries(grid: &mut Grid) -> Result<()> {
    let size = grid.size();
    let exit_room = far_corner(size);

    grid.open(ENTRANCE)?;
    grid.open(SEED_ROOM)?;
    grid.open(exit_room)?;

    for col in exit_room.col + 1..size {
        grid.open(Coordinate::new(exit_room.row, col))?;
    }

    Ok(())
}
