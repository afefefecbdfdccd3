//! Command line arguments for the game binary.

use std::path::PathBuf;

use clap::Parser;

use crate::difficulty::Difficulty;

/// Command line arguments.
///
/// This structure holds everything the binary can be configured with before the interface takes
/// over the terminal.
#[derive(Debug, Parser)]
#[command(version, about)]
pub struct Cli {
    /// Difficulty preset used for the first maze.
    #[arg(short, long, value_enum, default_value_t = Difficulty::Easy)]
    pub difficulty: Difficulty,
    /// Seed for the maze generator; a random one is drawn when omitted.
    #[arg(short, long)]
    pub seed: Option<u64>,
    /// File to write logs to; logging stays off when omitted.
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Returns the seed given on the command line, or a freshly drawn random one.
    pub fn resolved_seed(&self) -> u64 {
        self.seed.unwrap_or_else(rand::random)
    }
}
