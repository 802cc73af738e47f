//! Systems - per-frame passes over the body set

pub mod collision;
pub mod integrator;
pub mod pool;
pub mod spawner;

pub use collision::{CollisionResolver, Execution, SweepStats};
pub use integrator::Integrator;
pub use pool::WorkerPool;
pub use spawner::{SpawnRequest, Spawner};
