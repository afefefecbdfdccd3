//! Player session module.
//!
//! This module contains the [`Session`] struct, which owns a generated maze together with the
//! player's progress through it, and applies moves to it.

use color_eyre::eyre::{bail, Result};
use log::{debug, info, warn};
use rand::Rng;

use crate::{
    generator,
    grid::{Coordinate, Direction, Grid},
    pathfinding,
};

/// Lifecycle state of a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    /// The player is still looking for the end cell.
    Active,
    /// The player reached the end cell; no further moves are applied.
    Completed,
}

/// Result of a single move attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The player stepped onto a new path cell.
    Moved,
    /// The target was a wall or outside the grid, so nothing changed.
    Blocked,
    /// The player stepped onto the end cell and completed the maze.
    Completed,
    /// The session was already completed, so the move was discarded.
    Ignored,
}

/// A single game on a single maze.
///
/// This structure exclusively owns its [`Grid`] and all position state. It is created once per
/// maze, mutated only through [`attempt_move`](Session::attempt_move) and
/// [`reset`](Session::reset), and replaced wholesale when a new maze is wanted.
#[derive(Clone, Debug)]
pub struct Session {
    /// Maze being played.
    grid: Grid,
    /// Cell the player starts on.
    start: Coordinate,
    /// Cell the player has to reach.
    end: Coordinate,
    /// Current player position.
    player: Coordinate,
    /// Cells entered by the player, in order.
    footprints: Vec<Coordinate>,
    /// Number of counted steps; the move onto the end cell is not counted.
    steps: usize,
    /// Whether the end cell has been reached.
    completed: bool,
    /// Optimal number of moves from start to end, computed once per grid.
    min_steps: Option<usize>,
}

impl Session {
    /// Generates a new maze and builds a session on it.
    ///
    /// This function carves a maze of side `size` with [`generate`](crate::generate), force-opens
    /// the `start` and `end` cells and precomputes the shortest distance between them. Endpoints
    /// off the room lattice are accepted, but may end up unreachable; that shows up as
    /// [`min_steps`](Session::min_steps) being [`None`].
    ///
    /// # Errors
    ///
    /// This function may return errors if:
    /// - `size` is below [`MIN_SIZE`](crate::MIN_SIZE)
    /// - `start` or `end` lies outside the grid
    /// - `start` and `end` are the same cell
    pub fn new<R: Rng + ?Sized>(
        size: usize,
        start: Coordinate,
        end: Coordinate,
        rng: &mut R,
    ) -> Result<Self> {
        let mut grid = generator::generate(size, rng)?;
        check_endpoints(&grid, start, end)?;

        grid.open(start)?;
        grid.open(end)?;

        Ok(Self::build(grid, start, end))
    }

    /// Builds a session on an existing grid.
    ///
    /// # Errors
    ///
    /// This function may return errors if:
    /// - `start` or `end` lies outside the grid
    /// - `start` and `end` are the same cell
    /// - `start` or `end` is a wall
    pub fn from_grid(grid: Grid, start: Coordinate, end: Coordinate) -> Result<Self> {
        check_endpoints(&grid, start, end)?;

        if !grid.is_path(start) || !grid.is_path(end) {
            bail!("start {start} and end {end} must both be path cells");
        }

        Ok(Self::build(grid, start, end))
    }

    /// Assembles the session state and runs the shortest path precomputation.
    fn build(grid: Grid, start: Coordinate, end: Coordinate) -> Self {
        let min_steps = pathfinding::shortest_distance(&grid, start, end);

        match min_steps {
            Some(distance) => debug!("shortest path from {start} to {end} is {distance} moves"),
            None => warn!("end {end} is unreachable from start {start}"),
        }

        Self {
            grid,
            start,
            end,
            player: start,
            footprints: Vec::new(),
            steps: 0,
            completed: false,
            min_steps,
        }
    }

    /// Tries to move the player one cell in `direction`.
    ///
    /// The move is legal if the target cell lies inside the grid and is a path. An illegal move is
    /// silently dropped and leaves the session untouched. A legal move updates the position and
    /// records a footprint; it also counts a step, except for the move that lands on the end cell,
    /// which completes the session instead. Once completed, every further move is ignored.
    pub fn attempt_move(&mut self, direction: Direction) -> MoveOutcome {
        if self.completed {
            return MoveOutcome::Ignored;
        }

        let Some(target) = self
            .player
            .neighbour(direction, self.grid.size())
            .filter(|target| self.grid.is_path(*target))
        else {
            debug!("move {direction:?} from {} blocked", self.player);
            return MoveOutcome::Blocked;
        };

        self.player = target;
        self.footprints.push(target);

        if target == self.end {
            self.completed = true;
            info!(
                "maze completed in {} moves, optimal {:?}",
                self.moves(),
                self.min_steps
            );
            MoveOutcome::Completed
        } else {
            self.steps += 1;
            MoveOutcome::Moved
        }
    }

    /// Puts the player back on the start cell with a clean slate, keeping the same grid.
    ///
    /// A completed session goes straight back to [`Status::Active`] rather than to an idle state,
    /// so the player can replay the same maze right away. Idling is left to the owner, which drops
    /// the session instead.
    pub fn reset(&mut self) {
        self.player = self.start;
        self.footprints.clear();
        self.steps = 0;
        self.completed = false;
    }

    /// Returns the maze being played.
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Returns the start cell.
    pub const fn start(&self) -> Coordinate {
        self.start
    }

    /// Returns the end cell.
    pub const fn end(&self) -> Coordinate {
        self.end
    }

    /// Returns the current player position.
    pub const fn player(&self) -> Coordinate {
        self.player
    }

    /// Returns the cells entered so far, oldest first.
    pub fn footprints(&self) -> &[Coordinate] {
        &self.footprints
    }

    /// Returns the step counter.
    pub const fn steps(&self) -> usize {
        self.steps
    }

    /// Returns the number of legal moves made, including the one onto the end cell.
    pub const fn moves(&self) -> usize {
        self.footprints.len()
    }

    /// Returns the optimal number of moves, or [`None`] when the end is unreachable.
    pub const fn min_steps(&self) -> Option<usize> {
        self.min_steps
    }

    /// Checks whether the end cell has been reached.
    pub const fn is_completed(&self) -> bool {
        self.completed
    }

    /// Returns the lifecycle state of the session.
    pub const fn status(&self) -> Status {
        if self.completed {
            Status::Completed
        } else {
            Status::Active
        }
    }
}

/// Validates that both endpoints lie inside `grid` and differ from each other.
fn check_endpoints(grid: &Grid, start: Coordinate, end: Coordinate) -> Result<()> {
    if !grid.contains(start) {
        bail!("start {start} lies outside a grid of size {}", grid.size());
    }
    if !grid.contains(end) {
        bail!("end {end} lies outside a grid of size {}", grid.size());
    }
    if start == end {
        bail!("start and end must be different cells, both are {start}");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng as _};

    use super::*;
    use crate::difficulty::Difficulty;

    /// Creates a 10×10 session with a straight corridor from (1, 1) to the end at (1, 4).
    fn create_corridor_session() -> Session {
        let grid = Grid::parse(
            "
            ##########
            #....#####
            ##########
            ##########
            ##########
            ##########
            ##########
            ##########
            ##########
            ##########
            ",
        )
        .expect("failed to parse corridor grid");

        Session::from_grid(grid, Coordinate::new(1, 1), Coordinate::new(1, 4))
            .expect("failed to create corridor session")
    }

    /// Creates a session on a small maze with a branch, ending at (3, 3).
    fn create_branch_session() -> Session {
        let grid = Grid::parse(
            "
            #####
            #...#
            #.###
            #...#
            #####
            ",
        )
        .expect("failed to parse branch grid");

        Session::from_grid(grid, Coordinate::new(1, 1), Coordinate::new(3, 3))
            .expect("failed to create branch session")
    }

    #[test]
    fn test_from_grid_initial_state() {
        let session = create_corridor_session();

        assert_eq!(session.player(), Coordinate::new(1, 1), "player starts on start");
        assert_eq!(session.steps(), 0, "no steps yet");
        assert!(session.footprints().is_empty(), "no footprints yet");
        assert_eq!(session.min_steps(), Some(3), "corridor is three moves long");
        assert_eq!(session.status(), Status::Active, "new session is active");
    }

    #[test]
    fn test_final_move_does_not_count_a_step() {
        let mut session = create_corridor_session();

        assert_eq!(session.attempt_move(Direction::Right), MoveOutcome::Moved, "first move");
        assert_eq!(session.attempt_move(Direction::Right), MoveOutcome::Moved, "second move");
        assert_eq!(session.steps(), 2, "two legal moves count two steps");
        assert!(!session.is_completed(), "not there yet");

        assert_eq!(
            session.attempt_move(Direction::Right),
            MoveOutcome::Completed,
            "third move reaches the end"
        );
        assert!(session.is_completed(), "session should be completed");
        assert_eq!(session.steps(), 2, "winning move should not be counted");
        assert_eq!(session.moves(), 3, "winning move still leaves a footprint");
        assert_eq!(session.player(), Coordinate::new(1, 4), "player stands on the end");
    }

    #[test]
    fn test_blocked_moves_change_nothing() {
        let mut session = create_corridor_session();

        for direction in [Direction::Up, Direction::Down, Direction::Left] {
            assert_eq!(
                session.attempt_move(direction),
                MoveOutcome::Blocked,
                "{direction:?} runs into a wall"
            );
        }

        assert_eq!(session.player(), Coordinate::new(1, 1), "position unchanged");
        assert_eq!(session.steps(), 0, "steps unchanged");
        assert!(session.footprints().is_empty(), "footprints unchanged");
    }

    #[test]
    fn test_out_of_bounds_move_is_blocked() {
        let grid = Grid::parse("#.#\n#.#\n###\n").expect("failed to parse grid");
        let mut session = Session::from_grid(grid, Coordinate::new(0, 1), Coordinate::new(1, 1))
            .expect("failed to create session");

        assert_eq!(
            session.attempt_move(Direction::Up),
            MoveOutcome::Blocked,
            "moving off the top edge should be blocked"
        );
        assert_eq!(session.player(), Coordinate::new(0, 1), "position unchanged");
    }

    #[test]
    fn test_footprints_track_steps_while_active() {
        let mut session = create_branch_session();
        let route = [
            Direction::Right,
            Direction::Right,
            Direction::Left,
            Direction::Up,
            Direction::Left,
            Direction::Down,
            Direction::Down,
            Direction::Right,
        ];

        for direction in route {
            let before = session.footprints().len();
            let outcome = session.attempt_move(direction);

            if outcome == MoveOutcome::Moved {
                assert_eq!(session.footprints().len(), before + 1, "one footprint per move");
            }
            if !session.is_completed() {
                assert_eq!(
                    session.footprints().len(),
                    session.steps(),
                    "footprints should match steps while active"
                );
            }
        }

        assert_eq!(
            session.footprints(),
            &[
                Coordinate::new(1, 2),
                Coordinate::new(1, 3),
                Coordinate::new(1, 2),
                Coordinate::new(1, 1),
                Coordinate::new(2, 1),
                Coordinate::new(3, 1),
                Coordinate::new(3, 2),
            ],
            "footprints should record every legal move in order"
        );
    }

    #[test]
    fn test_completed_session_ignores_moves() {
        let mut session = create_corridor_session();
        for _ in 0..3 {
            let _ = session.attempt_move(Direction::Right);
        }
        assert!(session.is_completed(), "session should be completed");

        assert_eq!(
            session.attempt_move(Direction::Left),
            MoveOutcome::Ignored,
            "moves after completion are ignored"
        );
        assert_eq!(session.player(), Coordinate::new(1, 4), "player stays on the end");
        assert_eq!(session.status(), Status::Completed, "still completed");
    }

    #[test]
    fn test_reset_restores_start() {
        let mut session = create_corridor_session();
        let _ = session.attempt_move(Direction::Right);
        session.reset();

        assert_eq!(session.player(), session.start(), "player back on start");
        assert_eq!(session.steps(), 0, "steps cleared");
        assert!(session.footprints().is_empty(), "footprints cleared");

        for _ in 0..3 {
            let _ = session.attempt_move(Direction::Right);
        }
        let grid_before = session.grid().clone();
        session.reset();
        session.reset();

        assert_eq!(session.player(), session.start(), "player back on start");
        assert_eq!(session.steps(), 0, "steps cleared");
        assert!(session.footprints().is_empty(), "footprints cleared");
        assert_eq!(session.status(), Status::Active, "completion cleared");
        assert_eq!(session.grid(), &grid_before, "reset keeps the grid");
    }

    #[test]
    fn test_from_grid_rejects_bad_endpoints() {
        let grid = create_corridor_session().grid().clone();

        assert!(
            Session::from_grid(grid.clone(), Coordinate::new(1, 1), Coordinate::new(1, 1)).is_err(),
            "start and end must differ"
        );
        assert!(
            Session::from_grid(grid.clone(), Coordinate::new(1, 1), Coordinate::new(10, 1))
                .is_err(),
            "end must lie inside the grid"
        );
        assert!(
            Session::from_grid(grid, Coordinate::new(0, 0), Coordinate::new(1, 4)).is_err(),
            "start must be a path cell"
        );
    }

    #[test]
    fn test_new_session_for_every_difficulty() {
        let mut rng = StdRng::seed_from_u64(21);

        for difficulty in Difficulty::ALL {
            let config = difficulty.config();
            let session = Session::new(config.size, config.start, config.end, &mut rng)
                .expect("failed to create session");

            assert_eq!(session.grid().size(), config.size, "{difficulty} grid size");
            assert!(
                session.min_steps().is_some(),
                "{difficulty} maze should be solvable"
            );
            assert_eq!(
                session.grid().passage_count() + 1,
                session.grid().path_count(),
                "{difficulty} maze should be perfect"
            );
        }
    }

    #[test]
    fn test_new_session_opens_off_lattice_endpoints() {
        let mut rng = StdRng::seed_from_u64(22);
        let session = Session::new(10, Coordinate::new(1, 1), Coordinate::new(8, 8), &mut rng)
            .expect("failed to create session");

        assert!(session.grid().is_path(Coordinate::new(8, 8)), "end should be forced open");
    }

    #[test]
    fn test_new_session_rejects_outside_endpoints() {
        let mut rng = StdRng::seed_from_u64(23);

        assert!(
            Session::new(15, Coordinate::new(1, 1), Coordinate::new(15, 15), &mut rng).is_err(),
            "end outside the grid should fail"
        );
        assert!(
            Session::new(2, Coordinate::new(1, 1), Coordinate::new(0, 0), &mut rng).is_err(),
            "undersized grid should fail"
        );
    }

    #[test]
    fn test_shortest_route_counts_one_less_step() {
        let mut session = create_branch_session();
        let min_steps = session.min_steps().expect("branch maze should be solvable");

        for direction in [Direction::Down, Direction::Down, Direction::Right, Direction::Right] {
            let _ = session.attempt_move(direction);
        }

        assert!(session.is_completed(), "optimal route reaches the end");
        assert_eq!(session.moves(), min_steps, "optimal route uses the minimum moves");
        assert_eq!(session.steps(), min_steps - 1, "winning move is not counted");
    }
}
