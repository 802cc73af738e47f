use crate::core::Body;

use super::random::unit_f32;
use super::SimulationCore;

/// Tick every spawner; returns how many bodies were created.
///
/// Once the body cap is reached all spawners are stopped and stay stopped
/// until `start_spawners` is called.
pub(super) fn spawn_bodies(sim: &mut SimulationCore, dt: f32) -> u32 {
    let cap = sim.config.max_bodies as usize;
    let mut spawned = 0;

    for i in 0..sim.spawners.len() {
        if sim.bodies.len() >= cap {
            if sim.spawners.iter().any(|s| s.is_emitting()) {
                log::info!("body cap {} reached, stopping spawners", cap);
                super::commands::stop_spawners(sim);
            }
            break;
        }

        let Some(shot) = sim.spawners[i].tick(dt) else {
            continue;
        };
        let radius = shot.kind.sample_radius(unit_f32(&mut sim.rng_state));
        let added = Body::new(shot.position, radius, shot.velocity, sim.config.density)
            .and_then(|body| sim.add_body(body));
        match added {
            Ok(_) => spawned += 1,
            Err(e) => log::warn!("spawner {} misfired: {}", i, e),
        }
    }

    spawned
}
