use crate::core::{Result, SimConfig};
use crate::spatial::grid::SpatialGrid;
use crate::systems::{CollisionResolver, Execution, Integrator, Spawner, WorkerPool};

use super::perf_stats::PerfStats;
use super::RenderBuffers;
use super::SimulationCore;

const RNG_SEED: u32 = 12345;

pub(super) fn create_simulation_core(config: SimConfig) -> Result<SimulationCore> {
    config.validate()?;

    let workers = config.workers as usize;
    let grid = SpatialGrid::new(config.width, config.height, config.cell_size);
    let resolver = CollisionResolver::new(&grid, workers, Execution::Threaded);
    let pool = WorkerPool::new(workers)?;
    let integrator = Integrator {
        gravity: config.gravity,
        max_dt: config.max_dt,
        rest_speed: config.rest_speed,
    };
    let spawners = config.spawners.iter().cloned().map(Spawner::new).collect();

    log::debug!(
        "simulation {}x{}: {} workers, {} bands, {} spawners",
        config.width,
        config.height,
        pool.threads(),
        resolver.plan().len(),
        config.spawners.len()
    );

    Ok(SimulationCore {
        bounds: config.bounds(),
        bodies: Vec::with_capacity(config.max_bodies as usize),
        grid,
        resolver,
        integrator,
        pool,
        spawners,
        next_id: 0,
        hue: 0,
        frame: 0,
        rng_state: RNG_SEED,
        render: RenderBuffers::default(),
        perf_enabled: false,
        perf_stats: PerfStats::default(),
        config,
    })
}
