//! Difficulty presets module.
//!
//! This module maps each difficulty onto the grid size and the start and end cells of a maze.

use std::{fmt, str::FromStr};

use color_eyre::eyre::{eyre, Report};

use crate::{
    generator::{far_corner, SEED_ROOM},
    grid::Coordinate,
};

/// Difficulty preset chosen by the player.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Difficulty {
    /// 15×15 maze.
    #[default]
    Easy,
    /// 25×25 maze.
    Medium,
    /// 41×41 maze.
    Hard,
    /// 61×61 maze.
    SuperHard,
}

/// Parameters for building a maze session.
///
/// This structure is the result of looking up a [`Difficulty`] and is consumed by
/// [`Session::new`](crate::Session::new).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MazeConfig {
    /// Side length of the grid.
    pub size: usize,
    /// Cell the player starts on.
    pub start: Coordinate,
    /// Cell the player has to reach.
    pub end: Coordinate,
}

impl Difficulty {
    /// All presets, from easiest to hardest.
    pub const ALL: [Self; 4] = [Self::Easy, Self::Medium, Self::Hard, Self::SuperHard];

    /// Returns the side length of the grid for this difficulty.
    pub const fn size(self) -> usize {
        match self {
            Self::Easy => 15,
            Self::Medium => 25,
            Self::Hard => 41,
            Self::SuperHard => 61,
        }
    }

    /// Looks up the maze parameters for this difficulty.
    ///
    /// The start is always the seed room and the end is the room nearest the bottom-right corner,
    /// so both are guaranteed to be carved.
    pub const fn config(self) -> MazeConfig {
        let size = self.size();

        MazeConfig {
            size,
            start: SEED_ROOM,
            end: far_corner(size),
        }
    }

    /// Returns the key used to name this difficulty on the command line.
    pub const fn key(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
            Self::SuperHard => "super-hard",
        }
    }

    /// Returns the next harder preset, staying on the hardest one.
    pub(crate) const fn harder(self) -> Self {
        match self {
            Self::Easy => Self::Medium,
            Self::Medium => Self::Hard,
            Self::Hard | Self::SuperHard => Self::SuperHard,
        }
    }

    /// Returns the next easier preset, staying on the easiest one.
    pub(crate) const fn easier(self) -> Self {
        match self {
            Self::Easy | Self::Medium => Self::Easy,
            Self::Hard => Self::Medium,
            Self::SuperHard => Self::Hard,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
            Self::SuperHard => "Super Hard",
        })
    }
}

impl FromStr for Difficulty {
    type Err = Report;

    fn from_str(key: &str) -> Result<Self, Self::Err> {
        let key = key.trim().to_ascii_lowercase();

        Self::ALL
            .into_iter()
            .find(|difficulty| difficulty.key() == key)
            .ok_or_else(|| eyre!("invalid difficulty {key:?}"))
    }
}
