use std::collections::VecDeque;

use labrys_core::Point;

use crate::Pathfinder;
use crate::pathfinder::{PathNode, UNREACHABLE};
use crate::traits::Pather;

impl Pathfinder {
    /// Compute a breadth-first distance map from `source`.
    ///
    /// Each step has cost 1. Expansion stops when the distance exceeds
    /// `max_dist`. Returns the reached nodes in discovery order, so costs
    /// are non-decreasing along the slice.
    ///
    /// # Panics
    ///
    /// Panics if `source` lies outside the search area, same as the A*
    /// endpoints.
    pub fn bfs_map<P: Pather>(
        &mut self,
        pather: &P,
        source: Point,
        max_dist: i32,
    ) -> &[PathNode] {
        let Some(si) = self.idx(source) else {
            panic!(
                "source {source} lies outside the {}x{} search area",
                self.width, self.height
            );
        };

        // Reset.
        for v in self.bfs_map.iter_mut() {
            *v = UNREACHABLE;
        }
        self.bfs_results.clear();

        let mut queue: VecDeque<usize> = VecDeque::new();
        self.bfs_map[si] = 0;
        queue.push_back(si);
        self.bfs_results.push(PathNode {
            pos: source,
            cost: 0,
        });

        let mut nbuf = std::mem::take(&mut self.nbuf);

        while let Some(ci) = queue.pop_front() {
            let current_dist = self.bfs_map[ci];
            let cp = self.point(ci);

            nbuf.clear();
            pather.neighbors(cp, &mut nbuf);

            for &np in nbuf.iter() {
                let Some(ni) = self.idx(np) else {
                    continue;
                };
                if self.bfs_map[ni] != UNREACHABLE {
                    continue;
                }
                let nd = current_dist + 1;
                if nd > max_dist {
                    continue;
                }
                self.bfs_map[ni] = nd;
                queue.push_back(ni);
                self.bfs_results.push(PathNode { pos: np, cost: nd });
            }
        }

        self.nbuf = nbuf;
        &self.bfs_results
    }

    /// Query the BFS distance at a specific point.
    ///
    /// Returns [`UNREACHABLE`] if the point is outside the search area or
    /// was not reached by the last `bfs_map` call.
    pub fn bfs_at(&self, p: Point) -> i32 {
        match self.idx(p) {
            Some(i) => self.bfs_map[i],
            None => UNREACHABLE,
        }
    }
}

#[cfg(test)]
mod tests {
    use labrys_core::{Maze, Point};

    use crate::{PathNode, Pathfinder, UNREACHABLE};

    #[test]
    fn distances_radiate_from_the_source() {
        let maze = Maze::new(3, 3, &[], Point::ZERO, Point::new(2, 2)).unwrap();
        let mut pf = Pathfinder::new(3, 3);
        let reached = pf.bfs_map(&maze, Point::ZERO, i32::MAX).to_vec();
        assert_eq!(reached.len(), 9);
        assert_eq!(reached[0], PathNode { pos: Point::ZERO, cost: 0 });
        for pair in reached.windows(2) {
            assert!(pair[0].cost <= pair[1].cost);
        }
        assert_eq!(pf.bfs_at(Point::new(1, 0)), 1);
        assert_eq!(pf.bfs_at(Point::new(2, 2)), 4);
    }

    #[test]
    fn walls_block_expansion() {
        let maze = Maze::new(3, 1, &[Point::new(1, 0)], Point::ZERO, Point::new(2, 0)).unwrap();
        let mut pf = Pathfinder::new(3, 1);
        pf.bfs_map(&maze, Point::ZERO, i32::MAX);
        assert_eq!(pf.bfs_at(Point::new(1, 0)), UNREACHABLE);
        assert_eq!(pf.bfs_at(Point::new(2, 0)), UNREACHABLE);
    }

    #[test]
    fn max_dist_truncates_expansion() {
        let maze = Maze::new(5, 1, &[], Point::ZERO, Point::new(4, 0)).unwrap();
        let mut pf = Pathfinder::new(5, 1);
        let reached = pf.bfs_map(&maze, Point::ZERO, 2);
        assert_eq!(reached.len(), 3);
        assert_eq!(pf.bfs_at(Point::new(2, 0)), 2);
        assert_eq!(pf.bfs_at(Point::new(3, 0)), UNREACHABLE);
    }

    #[test]
    fn out_of_bounds_query_is_unreachable() {
        let maze = Maze::new(2, 2, &[], Point::ZERO, Point::new(1, 1)).unwrap();
        let mut pf = Pathfinder::new(2, 2);
        pf.bfs_map(&maze, Point::ZERO, i32::MAX);
        assert_eq!(pf.bfs_at(Point::new(9, 9)), UNREACHABLE);
    }

    #[test]
    #[should_panic(expected = "outside the 2x2 search area")]
    fn out_of_bounds_source_panics() {
        let maze = Maze::new(2, 2, &[], Point::ZERO, Point::new(1, 1)).unwrap();
        let mut pf = Pathfinder::new(2, 2);
        pf.bfs_map(&maze, Point::new(5, 5), i32::MAX);
    }
}
