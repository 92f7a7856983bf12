//! The [`Maze`] grid model.
//!
//! A `Maze` is an immutable rectangular grid of open and wall cells with a
//! start and a goal coordinate. It answers reachability and adjacency
//! queries in O(1); all search bookkeeping lives in the engine, not here.

use std::fmt;

use crate::point::Point;

/// Cardinal step offsets in the fixed scan order: east, north, west, south.
///
/// The order is part of the model's contract — neighbor enumeration must be
/// deterministic because it feeds the search frontier downstream.
const DIRS: [Point; 4] = [
    Point::new(1, 0),
    Point::new(0, -1),
    Point::new(-1, 0),
    Point::new(0, 1),
];

/// An immutable maze: dimensions, per-cell reachability, start and goal.
///
/// Construction validates its inputs once; afterwards every coordinate in
/// `[0, width) × [0, height)` maps to exactly one cell. Walls are cells
/// whose `reachable` flag is false. A maze can be shared freely between
/// searches since it carries no mutable search state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    width: i32,
    height: i32,
    /// Row-major reachability map: `open[y * width + x]`.
    open: Vec<bool>,
    start: Point,
    goal: Point,
}

impl Maze {
    /// Build a maze from its dimensions, wall set, and endpoints.
    ///
    /// Fails fast on non-positive dimensions and on any wall, start, or
    /// goal coordinate outside `[0, width) × [0, height)`. `start == goal`
    /// is allowed (the trivial one-cell path), and a goal that is walled
    /// off is allowed too — unreachability is a search outcome, not a
    /// construction error.
    pub fn new(
        width: i32,
        height: i32,
        walls: &[Point],
        start: Point,
        goal: Point,
    ) -> Result<Self, MazeError> {
        if width <= 0 || height <= 0 {
            return Err(MazeError::BadDimensions { width, height });
        }
        let in_bounds =
            |p: Point| p.x >= 0 && p.x < width && p.y >= 0 && p.y < height;
        let mut open = vec![true; (width as usize) * (height as usize)];
        for &w in walls {
            if !in_bounds(w) {
                return Err(MazeError::WallOutOfBounds(w));
            }
            open[(w.y * width + w.x) as usize] = false;
        }
        if !in_bounds(start) {
            return Err(MazeError::StartOutOfBounds(start));
        }
        if !in_bounds(goal) {
            return Err(MazeError::GoalOutOfBounds(goal));
        }
        Ok(Self {
            width,
            height,
            open,
            start,
            goal,
        })
    }

    /// Width (extent of the `x` axis).
    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Height (extent of the `y` axis).
    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// The fixed starting coordinate.
    #[inline]
    pub fn start(&self) -> Point {
        self.start
    }

    /// The goal coordinate.
    #[inline]
    pub fn goal(&self) -> Point {
        self.goal
    }

    /// Whether `p` lies inside the maze bounds.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= 0 && p.x < self.width && p.y >= 0 && p.y < self.height
    }

    /// Whether the cell at `p` is open (not a wall).
    ///
    /// # Panics
    ///
    /// Panics if `p` is out of bounds. Answering for a coordinate the maze
    /// does not contain would silently alias a wrong cell, so this is a
    /// caller bug surfaced immediately.
    pub fn is_open(&self, p: Point) -> bool {
        assert!(
            self.contains(p),
            "coordinate {p} outside the {}x{} maze",
            self.width,
            self.height
        );
        self.open[(p.y * self.width + p.x) as usize]
    }

    /// Append the in-bounds cardinal neighbors of `p` to `buf`, in the
    /// fixed east, north, west, south order. The caller clears `buf`
    /// before calling.
    ///
    /// Walls are not filtered out here; passability is the search's
    /// concern, adjacency is the model's.
    pub fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        for d in DIRS {
            let n = p + d;
            if self.contains(n) {
                buf.push(n);
            }
        }
    }

    /// The wall coordinates, in row-major scan order.
    pub fn walls(&self) -> Vec<Point> {
        let mut walls = Vec::new();
        for y in 0..self.height {
            for x in 0..self.width {
                if !self.open[(y * self.width + x) as usize] {
                    walls.push(Point::new(x, y));
                }
            }
        }
        walls
    }
}

/// Errors that can occur when building a [`Maze`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MazeError {
    /// Width or height is zero or negative.
    BadDimensions { width: i32, height: i32 },
    /// A wall coordinate lies outside the grid.
    WallOutOfBounds(Point),
    /// The start coordinate lies outside the grid.
    StartOutOfBounds(Point),
    /// The goal coordinate lies outside the grid.
    GoalOutOfBounds(Point),
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BadDimensions { width, height } => {
                write!(f, "maze dimensions must be positive, got {width}x{height}")
            }
            Self::WallOutOfBounds(p) => write!(f, "wall {p} lies outside the maze"),
            Self::StartOutOfBounds(p) => write!(f, "start {p} lies outside the maze"),
            Self::GoalOutOfBounds(p) => write!(f, "goal {p} lies outside the maze"),
        }
    }
}

impl std::error::Error for MazeError {}

#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct MazeData {
    width: i32,
    height: i32,
    walls: Vec<Point>,
    start: Point,
    goal: Point,
}

#[cfg(feature = "serde")]
impl serde::Serialize for Maze {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let data = MazeData {
            width: self.width,
            height: self.height,
            walls: self.walls(),
            start: self.start,
            goal: self.goal,
        };
        serde::Serialize::serialize(&data, serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Maze {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let data: MazeData = serde::Deserialize::deserialize(deserializer)?;
        Maze::new(data.width, data.height, &data.walls, data.start, data.goal)
            .map_err(serde::de::Error::custom)
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn maze_round_trip() {
        let walls = [Point::new(1, 1)];
        let m = Maze::new(2, 3, &walls, Point::ZERO, Point::new(1, 2)).unwrap();
        let json = serde_json::to_string(&m).unwrap();
        let back: Maze = serde_json::from_str(&json).unwrap();
        assert_eq!(back.width(), 2);
        assert_eq!(back.height(), 3);
        assert_eq!(back.start(), Point::ZERO);
        assert_eq!(back.goal(), Point::new(1, 2));
        assert_eq!(back.walls(), m.walls());
    }

    #[test]
    fn maze_deserialization_revalidates() {
        // Goal outside the declared dimensions must be rejected.
        let json = r#"{"width":2,"height":2,"walls":[],"start":{"x":0,"y":0},"goal":{"x":5,"y":0}}"#;
        assert!(serde_json::from_str::<Maze>(json).is_err());
    }
}
