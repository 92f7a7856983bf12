use std::collections::BinaryHeap;

use labrys_core::Point;

use crate::Pathfinder;
use crate::distance::manhattan;
use crate::pathfinder::{NodeRef, STEP_COST};
use crate::traits::Pather;

impl Pathfinder {
    /// Compute the shortest path from `from` to `to` using A*.
    ///
    /// Every step costs [`STEP_COST`] and the estimate is the Manhattan
    /// distance at the same scale, so the first time the goal is popped
    /// its cost is final. Closed cells are never reconsidered; that is
    /// sound for this consistent heuristic and constrains any future
    /// substitute to consistent ones. Ties on `f` fall to the heap's
    /// internal order: stable for identical inputs, but no particular
    /// route among equally short ones is promised.
    ///
    /// Returns the full path (including both endpoints) or `None` if no
    /// path exists. An unreachable goal is an expected outcome, not an
    /// error.
    ///
    /// # Panics
    ///
    /// Panics if `from` or `to` lies outside the search area. Endpoints
    /// come from a validated grid, so an out-of-bounds endpoint is a
    /// caller bug, kept distinct from the no-path outcome.
    pub fn astar_path<P: Pather>(
        &mut self,
        pather: &P,
        from: Point,
        to: Point,
    ) -> Option<Vec<Point>> {
        let Some(start_idx) = self.idx(from) else {
            panic!(
                "start {from} lies outside the {}x{} search area",
                self.width, self.height
            );
        };
        let Some(goal_idx) = self.idx(to) else {
            panic!(
                "goal {to} lies outside the {}x{} search area",
                self.width, self.height
            );
        };

        if start_idx == goal_idx {
            return Some(vec![from]);
        }

        // Bump generation to lazily invalidate all nodes.
        self.generation = self.generation.wrapping_add(1);
        let cur_gen = self.generation;

        // Initialise the start node.
        {
            let node = &mut self.nodes[start_idx];
            node.g = 0;
            node.h = STEP_COST * manhattan(from, to);
            node.f = node.h;
            node.parent = usize::MAX;
            node.generation = cur_gen;
            node.open = true;
        }

        let mut open: BinaryHeap<NodeRef> = BinaryHeap::new();
        open.push(NodeRef {
            idx: start_idx,
            f: self.nodes[start_idx].f,
        });

        let mut nbuf = std::mem::take(&mut self.nbuf);

        let found = 'search: loop {
            let Some(current) = open.pop() else {
                break 'search false;
            };

            let ci = current.idx;

            // Skip entries superseded by a cheaper duplicate.
            if self.nodes[ci].generation != cur_gen || !self.nodes[ci].open {
                continue;
            }

            if ci == goal_idx {
                break 'search true;
            }

            self.nodes[ci].open = false;
            let current_g = self.nodes[ci].g;
            let current_point = self.point(ci);

            nbuf.clear();
            pather.neighbors(current_point, &mut nbuf);

            for &np in nbuf.iter() {
                let Some(ni) = self.idx(np) else {
                    continue;
                };
                let tentative_g = current_g + STEP_COST;

                let n = &mut self.nodes[ni];
                if n.generation == cur_gen {
                    if !n.open {
                        // Closed: its cost from the start is final.
                        continue;
                    }
                    if tentative_g >= n.g {
                        // Only a strict improvement re-keys an open node.
                        continue;
                    }
                } else {
                    n.generation = cur_gen;
                    n.h = STEP_COST * manhattan(np, to);
                }

                n.g = tentative_g;
                n.f = tentative_g + n.h;
                n.parent = ci;
                n.open = true;

                open.push(NodeRef { idx: ni, f: n.f });
            }
        };

        self.nbuf = nbuf;

        if !found {
            return None;
        }

        // Walk parent indices from the goal back to the start.
        let mut path = Vec::new();
        let mut ci = goal_idx;
        while ci != usize::MAX {
            assert!(
                path.len() < self.nodes.len(),
                "parent chain does not terminate within the arena"
            );
            path.push(self.point(ci));
            ci = self.nodes[ci].parent;
        }
        path.reverse();
        Some(path)
    }
}
