use labrys_core::Point;

/// A position with an associated cost, returned from BFS map queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathNode {
    pub pos: Point,
    pub cost: i32,
}

// ---------------------------------------------------------------------------
// Internal node for the A* search
// ---------------------------------------------------------------------------

#[derive(Clone)]
pub(crate) struct Node {
    /// Accumulated cost from the start along the best known path.
    pub(crate) g: i32,
    /// Heuristic estimate of the remaining cost to the goal.
    pub(crate) h: i32,
    /// Priority key `g + h`, rewritten whenever `g` changes.
    pub(crate) f: i32,
    /// Arena index of the predecessor, `usize::MAX` for none.
    pub(crate) parent: usize,
    pub(crate) generation: u32,
    pub(crate) open: bool,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            g: 0,
            h: 0,
            f: 0,
            parent: usize::MAX,
            generation: 0,
            open: false,
        }
    }
}

/// Reference into the node arena, ordered by `f` for use in `BinaryHeap`.
#[derive(Clone, Copy, Eq, PartialEq)]
pub(crate) struct NodeRef {
    pub(crate) idx: usize,
    pub(crate) f: i32,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest f first.
        other.f.cmp(&self.f)
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Uniform cost of one cardinal step. The heuristic is scaled by the same
/// constant so cost and estimate stay in one unit.
pub const STEP_COST: i32 = 10;

/// Sentinel value meaning "unreachable" in BFS distance maps.
pub const UNREACHABLE: i32 = i32::MAX;

// ---------------------------------------------------------------------------
// Pathfinder
// ---------------------------------------------------------------------------

/// Reusable search state for a `width × height` grid anchored at the
/// origin.
///
/// `Pathfinder` owns the node arena and result buffers so that repeated
/// queries incur no allocations after the first use. All transient search
/// bookkeeping (costs, parents, open/closed state) lives here; the grid
/// being searched stays immutable.
pub struct Pathfinder {
    pub(crate) width: usize,
    pub(crate) height: usize,
    // A* cache
    pub(crate) nodes: Vec<Node>,
    pub(crate) generation: u32,
    // BFS caches
    pub(crate) bfs_map: Vec<i32>,
    pub(crate) bfs_results: Vec<PathNode>,
    // shared scratch buffer for neighbor queries
    pub(crate) nbuf: Vec<Point>,
}

impl Pathfinder {
    /// Create a `Pathfinder` for a `width × height` grid.
    ///
    /// Dimensions are clamped at zero; validating them is the grid
    /// model's job, and a zero-area pathfinder simply treats every
    /// coordinate as out of bounds.
    pub fn new(width: i32, height: i32) -> Self {
        let w = width.max(0) as usize;
        let h = height.max(0) as usize;
        let len = w * h;
        Self {
            width: w,
            height: h,
            nodes: vec![Node::default(); len],
            generation: 0,
            bfs_map: vec![UNREACHABLE; len],
            bfs_results: Vec::new(),
            nbuf: Vec::with_capacity(4),
        }
    }

    /// Adopt new grid dimensions, reallocating caches as needed.
    ///
    /// If the new area fits within existing capacity, caches are preserved
    /// and only the generation counter is bumped so stale entries are
    /// ignored. Otherwise caches are reallocated.
    pub fn resize(&mut self, width: i32, height: i32) {
        let w = width.max(0) as usize;
        let h = height.max(0) as usize;
        let new_len = w * h;
        let old_capacity = self.nodes.len();
        self.width = w;
        self.height = h;

        if new_len <= old_capacity {
            self.generation = self.generation.wrapping_add(1);
            // Clear result vectors (they hold variable-length query output).
            self.bfs_results.clear();
            return;
        }

        // New area exceeds capacity — reallocate everything.
        self.nodes.clear();
        self.nodes.resize(new_len, Node::default());
        self.generation = 0;

        self.bfs_map.clear();
        self.bfs_map.resize(new_len, UNREACHABLE);
        self.bfs_results.clear();
    }

    /// Width of the search area.
    #[inline]
    pub fn width(&self) -> i32 {
        self.width as i32
    }

    /// Height of the search area.
    #[inline]
    pub fn height(&self) -> i32 {
        self.height as i32
    }

    // -----------------------------------------------------------------------
    // Coordinate helpers
    // -----------------------------------------------------------------------

    /// Convert a `Point` to a flat arena index. Returns `None` if out of
    /// bounds.
    #[inline]
    pub(crate) fn idx(&self, p: Point) -> Option<usize> {
        if p.x < 0 || p.y < 0 {
            return None;
        }
        let (x, y) = (p.x as usize, p.y as usize);
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(y * self.width + x)
    }

    /// Convert a flat arena index back to a `Point`.
    #[inline]
    pub(crate) fn point(&self, idx: usize) -> Point {
        Point::new((idx % self.width) as i32, (idx / self.width) as i32)
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn pathnode_round_trip() {
        let node = PathNode {
            pos: Point::new(3, 7),
            cost: 42,
        };
        let json = serde_json::to_string(&node).unwrap();
        let back: PathNode = serde_json::from_str(&json).unwrap();
        assert_eq!(node, back);
    }
}
