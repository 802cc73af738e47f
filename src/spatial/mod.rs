//! Spatial partitioning

pub mod grid;

pub use grid::{BodyIndex, Cell, SpatialGrid};
