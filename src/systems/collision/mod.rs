//! Collision - uniform-grid broad phase and circle-circle narrow phase
//!
//! One relaxation pass:
//! 1. the caller rebuilds the [`SpatialGrid`](crate::spatial::grid::SpatialGrid) from current positions
//! 2. bodies are packed in column order ([`packed`])
//! 3. each interior cell is checked against its 3x3 neighbourhood, either as
//!    one sweep or as column bands ([`bands`]) spread over the worker pool
//! 4. results are written back to the body array
//!
//! The cell size is at least the largest body diameter, so every overlapping
//! pair lies within one cell of each other.

pub mod bands;
pub mod narrow;
pub mod packed;
mod resolver;

pub use bands::BandPlan;
pub use narrow::resolve_pair;
pub use packed::{ColumnSlice, PackedBodies, Span, SweepStats};
pub use resolver::{CollisionResolver, Execution};
