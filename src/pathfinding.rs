//! Shortest path module.
//!
//! This module computes the optimal number of moves between two cells of a [`Grid`], which the
//! session keeps as the par score for the player.

use std::collections::VecDeque;

use crate::grid::{Coordinate, Direction, Grid};

/// Computes the length of the shortest path of path cells from `start` to `end`.
///
/// This function runs a breadth-first search over the 4-connected path cells of `grid`. Cells are
/// marked as visited when they are enqueued, so no cell is ever queued twice, and neighbours are
/// expanded in the fixed order of [`Direction::ALL`]. The distance returned is the one at which
/// `end` is first dequeued.
///
/// [`None`] means `end` cannot be reached from `start`, or either of them is not a path cell.
pub fn shortest_distance(grid: &Grid, start: Coordinate, end: Coordinate) -> Option<usize> {
    if !grid.is_path(start) || !grid.is_path(end) {
        return None;
    }

    let mut visited = vec![false; grid.size() * grid.size()];
    let mut frontier = VecDeque::from([(start, 0_usize)]);
    *visited.get_mut(grid.index(start)?)? = true;

    while let Some((current, distance)) = frontier.pop_front() {
        if current == end {
            return Some(distance);
        }

        for direction in Direction::ALL {
            let Some(next) = current.neighbour(direction, grid.size()) else {
                continue;
            };
            if !grid.is_path(next) {
                continue;
            }

            let Some(seen) = grid.index(next).and_then(|index| visited.get_mut(index)) else {
                continue;
            };
            if !*seen {
                *seen = true;
                frontier.push_back((next, distance + 1));
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng as _};

    use super::*;
    use crate::generator::{self, far_corner, SEED_ROOM};

    /// Creates a small maze with a dead end and a single route to the far corner.
    fn create_test_grid() -> Grid {
        Grid::parse(
            "
            #######
            #.....#
            #.###.#
            #.#...#
            #.#.###
            #.#...#
            #######
            ",
        )
        .expect("failed to parse test grid")
    }

    #[test]
    fn test_shortest_distance_same_cell() {
        let grid = create_test_grid();
        let start = Coordinate::new(1, 1);

        assert_eq!(shortest_distance(&grid, start, start), Some(0), "no moves needed");
    }

    #[test]
    fn test_shortest_distance_winding_route() {
        let grid = create_test_grid();

        assert_eq!(
            shortest_distance(&grid, Coordinate::new(1, 1), Coordinate::new(5, 5)),
            Some(12),
            "route along the top and down the middle takes twelve moves"
        );
    }

    #[test]
    fn test_shortest_distance_dead_end() {
        let grid = create_test_grid();

        assert_eq!(
            shortest_distance(&grid, Coordinate::new(1, 1), Coordinate::new(5, 1)),
            Some(4),
            "straight corridor down the left side"
        );
    }

    #[test]
    fn test_shortest_distance_unreachable() {
        let grid = Grid::parse("#####\n#.#.#\n#####\n#####\n#####\n").expect("failed to parse");

        assert_eq!(
            shortest_distance(&grid, Coordinate::new(1, 1), Coordinate::new(1, 3)),
            None,
            "cells separated by a wall are unreachable"
        );
    }

    #[test]
    fn test_shortest_distance_wall_endpoints() {
        let grid = create_test_grid();

        assert_eq!(
            shortest_distance(&grid, Coordinate::new(0, 0), Coordinate::new(1, 1)),
            None,
            "starting on a wall has no path"
        );
        assert_eq!(
            shortest_distance(&grid, Coordinate::new(1, 1), Coordinate::new(9, 9)),
            None,
            "ending outside the grid has no path"
        );
    }

    #[test]
    fn test_shortest_distance_prefers_shorter_branch() {
        let grid = Grid::parse(
            "
            #####
            #...#
            #.#.#
            #...#
            #####
            ",
        )
        .expect("failed to parse ring");

        assert_eq!(
            shortest_distance(&grid, Coordinate::new(1, 1), Coordinate::new(3, 3)),
            Some(4),
            "either way round the ring takes four moves"
        );
        assert_eq!(
            shortest_distance(&grid, Coordinate::new(1, 1), Coordinate::new(1, 3)),
            Some(2),
            "the short side of the ring should win"
        );
    }

    #[test]
    fn test_generated_mazes_are_solvable() {
        let mut rng = StdRng::seed_from_u64(11);

        for size in [3, 4, 10, 15, 25, 41, 61] {
            let grid = generator::generate(size, &mut rng).expect("failed to generate grid");
            let distance = shortest_distance(&grid, SEED_ROOM, far_corner(size));

            assert!(
                distance.is_some(),
                "far corner should be reachable in a {size}x{size} maze"
            );
        }
    }
}
