//! Grid data model module.
//!
//! This module contains the [`Grid`] struct and the small value types used to address and move
//! around it: [`Cell`], [`Coordinate`] and [`Direction`].

use std::fmt;

use color_eyre::eyre::{bail, OptionExt as _, Result};

/// Smallest side length a grid may have.
///
/// Three cells is the smallest square that still has an interior cell surrounded by a border.
pub const MIN_SIZE: usize = 3;

/// State of a single grid cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cell {
    /// Impassable cell.
    Wall,
    /// Open cell the player may stand on.
    Path,
}

impl Cell {
    /// Returns the character used for this cell in the textual grid form.
    const fn symbol(self) -> char {
        match self {
            Self::Wall => '#',
            Self::Path => '.',
        }
    }
}

/// Logical movement direction.
///
/// This enumeration holds the four axis directions a player can move in and the generator can
/// carve in. It is decoupled from any physical key binding; the front end maps keys onto it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// Towards row zero.
    Up,
    /// Towards the last row.
    Down,
    /// Towards column zero.
    Left,
    /// Towards the last column.
    Right,
}

impl Direction {
    /// All four directions, in the fixed order used for breadth-first expansion.
    pub const ALL: [Self; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    /// Returns the `(row, col)` offset of a single step in this direction.
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Self::Up => (-1, 0),
            Self::Down => (1, 0),
            Self::Left => (0, -1),
            Self::Right => (0, 1),
        }
    }
}

/// Position of a cell within a grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Coordinate {
    /// Zero-based row index.
    pub row: usize,
    /// Zero-based column index.
    pub col: usize,
}

impl Coordinate {
    /// Builds a coordinate from a row and a column.
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Returns the coordinate `distance` cells away in `direction`.
    ///
    /// This function yields [`None`] if the resulting coordinate would fall outside a square grid
    /// of side `size`, either by going below zero or by reaching `size`.
    pub fn offset(self, direction: Direction, distance: usize, size: usize) -> Option<Self> {
        let (d_row, d_col) = direction.delta();
        let distance = isize::try_from(distance).ok()?;

        let row = self.row.checked_add_signed(d_row.checked_mul(distance)?)?;
        let col = self.col.checked_add_signed(d_col.checked_mul(distance)?)?;

        (row < size && col < size).then_some(Self { row, col })
    }

    /// Returns the adjacent coordinate in `direction`, if it lies within a grid of side `size`.
    pub fn neighbour(self, direction: Direction, size: usize) -> Option<Self> {
        self.offset(direction, 1, size)
    }

    /// Checks whether this coordinate lies strictly inside the border of a grid of side `size`.
    pub const fn is_interior(self, size: usize) -> bool {
        self.row > 0 && self.col > 0 && self.row + 1 < size && self.col + 1 < size
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Square matrix of wall and path cells.
///
/// This structure stores the cells of a `size × size` maze in row-major order. Once handed to a
/// [`Session`](crate::Session) it is never mutated again; the front end only reads it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    /// Side length of the grid.
    size: usize,
    /// Cell states in row-major order.
    cells: Vec<Cell>,
}

impl Grid {
    /// Builds a grid of side `size` where every cell is a wall.
    ///
    /// # Errors
    ///
    /// This function fails if `size` is smaller than [`MIN_SIZE`].
    pub fn walled(size: usize) -> Result<Self> {
        if size < MIN_SIZE {
            bail!("grid size must be at least {MIN_SIZE}, got {size}");
        }

        Ok(Self {
            size,
            cells: vec![Cell::Wall; size * size],
        })
    }

    /// Builds a grid from its textual form.
    ///
    /// This function parses rows of `#` (wall) and `.` (path) characters. Blank lines around the
    /// grid are ignored so that raw string literals can be used directly.
    ///
    /// # Errors
    ///
    /// This function may return errors if:
    /// - The input holds fewer than [`MIN_SIZE`] rows
    /// - Any row length differs from the number of rows
    /// - A character other than `#` or `.` is found
    pub fn parse(input: &str) -> Result<Self> {
        let lines: Vec<&str> = input
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();

        let size = lines.len();
        let mut grid = Self::walled(size)?;

        for (row, line) in lines.iter().enumerate() {
            if line.chars().count() != size {
                bail!("row {row} has {} cells, expected {size}", line.chars().count());
            }

            for (col, symbol) in line.chars().enumerate() {
                match symbol {
                    '#' => {}
                    '.' => grid.open(Coordinate::new(row, col))?,
                    other => bail!("unexpected character {other:?} at row {row}, column {col}"),
                }
            }
        }

        Ok(grid)
    }

    /// Returns the side length of the grid.
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Checks whether `coordinate` lies inside the grid.
    pub const fn contains(&self, coordinate: Coordinate) -> bool {
        coordinate.row < self.size && coordinate.col < self.size
    }

    /// Returns the row-major index of `coordinate`, if it lies inside the grid.
    pub(crate) const fn index(&self, coordinate: Coordinate) -> Option<usize> {
        if self.contains(coordinate) {
            Some(coordinate.row * self.size + coordinate.col)
        } else {
            None
        }
    }

    /// Returns the cell at `coordinate`, or [`None`] when it falls outside the grid.
    pub fn get(&self, coordinate: Coordinate) -> Option<Cell> {
        self.index(coordinate)
            .and_then(|index| self.cells.get(index).copied())
    }

    /// Checks whether the cell at `coordinate` exists and is a path.
    pub fn is_path(&self, coordinate: Coordinate) -> bool {
        self.get(coordinate) == Some(Cell::Path)
    }

    /// Turns the cell at `coordinate` into a path.
    ///
    /// # Errors
    ///
    /// This function fails if `coordinate` lies outside the grid.
    pub(crate) fn open(&mut self, coordinate: Coordinate) -> Result<()> {
        let index = self
            .index(coordinate)
            .ok_or_eyre("attempted to open a cell outside the grid")?;
        let cell = self
            .cells
            .get_mut(index)
            .ok_or_eyre("grid storage is smaller than its size")?;
        *cell = Cell::Path;

        Ok(())
    }

    /// Iterates over every cell along with its coordinate, row by row.
    pub fn cells(&self) -> impl Iterator<Item = (Coordinate, Cell)> + '_ {
        self.cells.iter().enumerate().map(|(index, cell)| {
            (
                Coordinate::new(index / self.size, index % self.size),
                *cell,
            )
        })
    }

    /// Returns the number of path cells.
    pub fn path_count(&self) -> usize {
        self.cells.iter().filter(|cell| **cell == Cell::Path).count()
    }

    /// Returns the number of passages, that is pairs of orthogonally adjacent path cells.
    ///
    /// For a perfect maze the open cells form a spanning tree, so this is exactly one less than
    /// [`path_count`](Grid::path_count).
    pub fn passage_count(&self) -> usize {
        self.cells()
            .filter(|(_, cell)| *cell == Cell::Path)
            .map(|(coordinate, _)| {
                [Direction::Down, Direction::Right]
                    .into_iter()
                    .filter_map(|direction| coordinate.neighbour(direction, self.size))
                    .filter(|neighbour| self.is_path(*neighbour))
                    .count()
            })
            .sum()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.size) {
            for cell in row {
                write!(f, "{}", cell.symbol())?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}
