use labrys_core::{Maze, Point};

/// Grid query contract consumed by the search algorithms — provides
/// neighbor enumeration.
pub trait Pather {
    /// Append the traversable neighbors of `p` into `buf`. The caller
    /// clears `buf` before calling. Enumeration order must be
    /// deterministic; it feeds the search frontier.
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>);
}

impl Pather for Maze {
    /// In-bounds open neighbors, in the maze's fixed scan order.
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        Maze::neighbors(self, p, buf);
        buf.retain(|&n| self.is_open(n));
    }
}
