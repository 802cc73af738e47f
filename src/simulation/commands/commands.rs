use crate::core::{Body, BodyId, Error, Result, SpawnerConfig};
use crate::core::body::DEFAULT_COLOR;
use crate::core::config::SPAWNER_ROW_OFFSET;
use crate::spatial::grid::BodyIndex;
use crate::systems::Spawner;

use super::palette::hue_color;
use super::SimulationCore;

pub(super) fn add_body(sim: &mut SimulationCore, mut body: Body) -> Result<BodyId> {
    if body.radius() * 2.0 > sim.config.cell_size {
        return Err(Error::BodyTooLarge {
            radius: body.radius(),
            cell_size: sim.config.cell_size,
        });
    }
    if sim.bodies.len() >= BodyIndex::MAX as usize {
        return Err(Error::InvalidParam("body arena is full".to_string()));
    }

    let id = BodyId(sim.next_id);
    sim.next_id = sim.next_id.wrapping_add(1);
    body.id = id;

    if body.color == DEFAULT_COLOR {
        body.color = hue_color(sim.hue);
        sim.hue = (sim.hue + 1) % 360;
    }

    // Grid insertion requires bodies inside the walls
    body.enforce_boundaries(&sim.bounds);
    sim.bodies.push(body);
    Ok(id)
}

pub(super) fn remove_body(sim: &mut SimulationCore, id: BodyId) -> Option<Body> {
    let index = sim.bodies.iter().position(|b| b.id() == id)?;
    Some(sim.bodies.remove(index))
}

pub(super) fn clear(sim: &mut SimulationCore) {
    sim.bodies.clear();
    sim.grid.clear();
    sim.hue = 0;
}

pub(super) fn start_spawners(sim: &mut SimulationCore) {
    for spawner in &mut sim.spawners {
        spawner.start();
    }
}

pub(super) fn stop_spawners(sim: &mut SimulationCore) {
    for spawner in &mut sim.spawners {
        spawner.stop();
    }
}

pub(super) fn add_spawner(sim: &mut SimulationCore, config: SpawnerConfig) -> Result<()> {
    config.validate(sim.config.cell_size)?;
    sim.config.spawners.push(config.clone());
    sim.spawners.push(Spawner::new(config));
    Ok(())
}

pub(super) fn add_spawner_row(sim: &mut SimulationCore, config: SpawnerConfig, n: u32) -> Result<()> {
    config.validate(sim.config.cell_size)?;
    let first = sim.spawners.len() as f32;
    for i in 0..n {
        let shifted = SpawnerConfig {
            position: config.position + SPAWNER_ROW_OFFSET * (first + i as f32),
            ..config.clone()
        };
        add_spawner(sim, shifted)?;
    }
    Ok(())
}
