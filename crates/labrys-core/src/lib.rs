//! **labrys-core** — Maze grid model and geometry (core types).
//!
//! This crate provides the foundational types shared across the *labrys*
//! workspace: the [`Point`] coordinate primitive and the validated [`Maze`]
//! grid model that search engines and frontends build on.

pub mod maze;
pub mod point;

pub use maze::{Maze, MazeError};
pub use point::Point;
