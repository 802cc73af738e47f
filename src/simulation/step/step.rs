use crate::systems::SweepStats;

use super::spawn::spawn_bodies;
use super::{PerfTimer, SimulationCore};

pub(super) fn step(sim: &mut SimulationCore, dt: f32) {
    let perf_on = sim.perf_enabled;
    if perf_on {
        sim.perf_stats.reset();
    }
    let step_start = if perf_on { Some(PerfTimer::start()) } else { None };

    let dt = sim.integrator.clamp_dt(dt);

    // === SPAWN ===
    if perf_on {
        let t0 = PerfTimer::start();
        sim.perf_stats.spawned = spawn_bodies(sim, dt);
        sim.perf_stats.spawn_ms = t0.elapsed_ms();
    } else {
        spawn_bodies(sim, dt);
    }

    // === INTEGRATE ===
    if perf_on {
        let t0 = PerfTimer::start();
        sim.integrator.integrate_all(&mut sim.bodies, dt, &sim.bounds, &sim.pool);
        sim.perf_stats.integrate_ms = t0.elapsed_ms();
    } else {
        sim.integrator.integrate_all(&mut sim.bodies, dt, &sim.bounds, &sim.pool);
    }

    // === RELAXATION ===
    // Every pass rebuilds the grid: the previous pass moved bodies across cells.
    let mut sweep = SweepStats::default();
    for _ in 0..sim.config.iterations {
        if perf_on {
            let t0 = PerfTimer::start();
            sim.grid.rebuild(&sim.bodies);
            sim.perf_stats.grid_ms += t0.elapsed_ms();

            let t0 = PerfTimer::start();
            sweep += sim.resolver.resolve(&sim.grid, &mut sim.bodies, &sim.bounds, &sim.pool);
            sim.perf_stats.collide_ms += t0.elapsed_ms();
        } else {
            sim.grid.rebuild(&sim.bodies);
            sim.resolver.resolve(&sim.grid, &mut sim.bodies, &sim.bounds, &sim.pool);
        }
    }

    if perf_on {
        let clamp = |v: u64| u32::try_from(v).unwrap_or(u32::MAX);
        sim.perf_stats.body_count = sim.bodies.len() as u32;
        sim.perf_stats.iterations = sim.config.iterations;
        sim.perf_stats.bands = sim.resolver.plan().len() as u32;
        sim.perf_stats.pair_checks = clamp(sweep.pair_checks);
        sim.perf_stats.contacts = clamp(sweep.contacts);
        sim.perf_stats.grid_cells = sim.grid.cell_count() as u32;
        if let Some(start) = step_start {
            sim.perf_stats.step_ms = start.elapsed_ms();
        }
    }

    sim.frame += 1;
}
