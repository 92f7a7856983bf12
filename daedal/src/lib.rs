//! Daedal — a maze-runner frontend for the labrys search crates.
//!
//! The library hosts the text decoder and the formatting helpers; the
//! binary stays a thin argument-and-I/O shell around them.

pub mod decode;

use clap::Parser;
use labrys_core::Point;

pub use decode::{DecodeError, decode};

/// Command-line arguments for the maze runner.
#[derive(Debug, Parser)]
#[command(about = "Finds the shortest path through an encoded maze")]
pub struct CliArgs {
    /// Maze encoding: rows separated by `;`, each cell `1` (open), `0`
    /// (wall) or `x` (goal). Read from stdin when omitted.
    pub encoding: Option<String>,
}

/// Render a path the way the runner prints it: comma-separated
/// coordinates in travel order.
pub fn format_path(path: &[Point]) -> String {
    path.iter()
        .map(|p| p.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use labrys_paths::Pathfinder;

    use super::*;

    const GOLDEN: &str = "1100001;0100111;1111101;1000111;1110100;1011110;111001x";

    #[test]
    fn solves_the_reference_maze_end_to_end() {
        let maze = decode(GOLDEN).unwrap();
        let mut pf = Pathfinder::new(maze.width(), maze.height());
        let path = pf.astar_path(&maze, maze.start(), maze.goal()).unwrap();
        assert_eq!(
            format_path(&path),
            "(0, 0), (0, 1), (1, 1), (2, 1), (2, 2), (2, 3), (2, 4), \
             (3, 4), (4, 4), (5, 4), (5, 5), (6, 5), (6, 6)"
        );
    }

    #[test]
    fn formats_a_single_cell_path() {
        assert_eq!(format_path(&[Point::ZERO]), "(0, 0)");
    }
}
