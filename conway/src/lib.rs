// lib.rs - Simulation core for Conway's Game of Life on a bounded grid
//
// The core only stores cell state and computes generations. Rendering,
// input and step timing belong to whoever owns the `Grid`.

pub mod error;
pub mod grid;

pub use error::{Error, Result};
pub use grid::Grid;
