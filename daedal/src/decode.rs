//! Decoder for the compact maze text encoding.
//!
//! Rows are separated by `;`; within a row, `1` is an open cell, `0` a
//! wall, and `x` the goal (itself open). The row index advances along
//! `x` and the column index along `y`, so a seven-row encoding decodes
//! to a maze of width seven. The start is fixed at the origin by the
//! format.

use std::fmt;

use labrys_core::{Maze, MazeError, Point};

/// Errors that can occur while decoding a maze string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// The input contains no cells.
    Empty,
    /// A row's length differs from the first row's.
    RaggedRow {
        row: usize,
        expected: usize,
        got: usize,
    },
    /// A character other than `1`, `0`, or `x`.
    InvalidSymbol { ch: char, pos: Point },
    /// No goal cell in the input.
    NoGoal,
    /// More than one goal cell.
    DuplicateGoal { first: Point, second: Point },
    /// The decoded data failed maze validation.
    Maze(MazeError),
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "the maze encoding contains no cells"),
            Self::RaggedRow { row, expected, got } => {
                write!(f, "row {row} has {got} cells, expected {expected}")
            }
            Self::InvalidSymbol { ch, pos } => {
                write!(f, "invalid symbol {ch:?} at {pos}")
            }
            Self::NoGoal => write!(f, "the maze encoding has no goal cell"),
            Self::DuplicateGoal { first, second } => {
                write!(f, "more than one goal cell ({first} and {second})")
            }
            Self::Maze(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for DecodeError {}

impl From<MazeError> for DecodeError {
    fn from(err: MazeError) -> Self {
        Self::Maze(err)
    }
}

/// Decode a maze string into a validated [`Maze`].
///
/// Surrounding whitespace of the input and of each row is tolerated.
/// Exactly one goal cell is required; the start is the origin.
pub fn decode(input: &str) -> Result<Maze, DecodeError> {
    let mut walls = Vec::new();
    let mut goal: Option<Point> = None;
    let mut width = 0usize;
    let mut height = 0usize;

    for (x, row) in input.trim().split(';').enumerate() {
        let row = row.trim();
        let cells = row.chars().count();
        if x == 0 {
            if cells == 0 {
                return Err(DecodeError::Empty);
            }
            height = cells;
        } else if cells != height {
            return Err(DecodeError::RaggedRow {
                row: x,
                expected: height,
                got: cells,
            });
        }
        for (y, ch) in row.chars().enumerate() {
            let p = Point::new(x as i32, y as i32);
            match ch {
                '1' => {}
                '0' => walls.push(p),
                'x' => {
                    if let Some(first) = goal {
                        return Err(DecodeError::DuplicateGoal { first, second: p });
                    }
                    goal = Some(p);
                }
                other => return Err(DecodeError::InvalidSymbol { ch: other, pos: p }),
            }
        }
        width = x + 1;
    }

    let Some(goal) = goal else {
        return Err(DecodeError::NoGoal);
    };
    log::debug!(
        "decoded {width}x{height} maze, goal at {goal}, {} walls",
        walls.len()
    );
    Ok(Maze::new(width as i32, height as i32, &walls, Point::ZERO, goal)?)
}
