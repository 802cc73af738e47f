//! Core types shared by every system: vector math, bodies, configuration and errors.

pub mod body;
pub mod config;
pub mod error;
pub mod vec2;

pub use body::{Body, BodyId, Bounds};
pub use config::{BodyKind, SimConfig, SpawnerConfig};
pub use error::{Error, Result};
pub use vec2::Vec2;
