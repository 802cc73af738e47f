use crate::core::Vec2;
use crate::systems::Execution;

use super::perf_stats::PerfStats;
use super::SimulationCore;

pub(super) fn enable_perf_metrics(sim: &mut SimulationCore, enabled: bool) {
    sim.perf_enabled = enabled;
    if !enabled {
        sim.perf_stats.reset();
    }
}

pub(super) fn get_perf_stats(sim: &SimulationCore) -> PerfStats {
    sim.perf_stats.clone()
}

pub(super) fn set_gravity(sim: &mut SimulationCore, x: f32, y: f32) {
    let gravity = Vec2::new(x, y);
    if !gravity.is_finite() {
        log::warn!("ignoring non-finite gravity ({}, {})", x, y);
        return;
    }
    sim.integrator.gravity = gravity;
    sim.config.gravity = gravity;
}

pub(super) fn set_execution(sim: &mut SimulationCore, execution: Execution) {
    sim.resolver.set_execution(execution);
}
