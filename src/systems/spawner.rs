//! Spawner - timer-gated emitter of new bodies.
//!
//! A spawner does not own the body set; `tick` only says what to create and
//! the simulation builds the body (so ids, colors and RNG stay simulation-scoped).

use crate::core::{BodyKind, SpawnerConfig, Vec2};

/// What one shot asks the simulation to create.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpawnRequest {
    pub position: Vec2,
    pub velocity: Vec2,
    pub kind: BodyKind,
}

#[derive(Clone, Debug)]
pub struct Spawner {
    config: SpawnerConfig,
    exit_velocity: Vec2,
    since_last_shot: f32,
    emitting: bool,
}

impl Spawner {
    pub fn new(config: SpawnerConfig) -> Self {
        let exit_velocity = config.direction.normalize() * config.speed;
        Self {
            exit_velocity,
            // Primed so the first tick fires
            since_last_shot: config.interval,
            emitting: config.emitting,
            config,
        }
    }

    pub fn config(&self) -> &SpawnerConfig {
        &self.config
    }

    pub fn is_emitting(&self) -> bool {
        self.emitting
    }

    pub fn start(&mut self) {
        self.emitting = true;
    }

    pub fn stop(&mut self) {
        self.emitting = false;
    }

    /// Advance the timer; at most one shot per tick.
    pub fn tick(&mut self, dt: f32) -> Option<SpawnRequest> {
        if !self.emitting {
            return None;
        }
        self.since_last_shot += dt;
        if self.since_last_shot <= self.config.interval {
            return None;
        }
        self.since_last_shot -= self.config.interval;
        Some(SpawnRequest {
            position: self.config.position,
            velocity: self.exit_velocity,
            kind: self.config.kind,
        })
    }
}
