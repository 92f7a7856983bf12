//! Shortest-path search for maze grids.
//!
//! This crate provides the search side of the *labrys* workspace:
//!
//! - **A\*** shortest-path search ([`Pathfinder::astar_path`])
//! - **BFS** unweighted distance maps ([`Pathfinder::bfs_map`])
//!
//! Both operate through [`Pathfinder`], which owns and reuses internal
//! caches so that repeated queries incur zero allocations after warm-up,
//! and consume grids through the [`Pather`] trait (implemented here for
//! [`labrys_core::Maze`]).

mod astar;
mod bfs;
mod distance;
mod pathfinder;
mod traits;

pub use distance::manhattan;
pub use pathfinder::{PathNode, Pathfinder, STEP_COST, UNREACHABLE};
pub use traits::Pather;
