//! Simulation - fixed-timestep orchestration of the ball pit
//!
//! One frame: spawn, integrate, then `iterations` relaxation passes, each
//! rebuilding the grid from scratch before resolving collisions.
//!
//! The pieces live in `systems/`; this module only owns the state and wires
//! the passes together. `World` is the wasm-facing wrapper.

use crate::core::{Body, BodyId, Bounds, Result, SimConfig, SpawnerConfig, Vec2};
use crate::spatial::grid::SpatialGrid;
use crate::systems::{CollisionResolver, Execution, Integrator, Spawner, WorkerPool};

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "init/random.rs"]
mod random;
#[path = "step/step.rs"]
mod step;
#[path = "step/spawn.rs"]
mod spawn;
#[path = "commands/commands.rs"]
mod commands;
#[path = "render/palette.rs"]
mod palette;
#[path = "render/render_extract.rs"]
mod render_extract;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
mod facade;

pub use facade::{RenderLayout, World};
pub use perf_stats::PerfStats;

use perf_timer::PerfTimer;

/// Flat buffers handed to the renderer.
#[derive(Default)]
pub(crate) struct RenderBuffers {
    /// `[x, y, radius]` per body
    pub(crate) circles: Vec<f32>,
    /// ABGR per body
    pub(crate) colors: Vec<u32>,
}

/// The simulation state
pub struct SimulationCore {
    config: SimConfig,
    bounds: Bounds,
    bodies: Vec<Body>,
    grid: SpatialGrid,
    resolver: CollisionResolver,
    integrator: Integrator,
    pool: WorkerPool,
    spawners: Vec<Spawner>,

    // State
    next_id: u32,
    hue: u32,
    frame: u64,
    rng_state: u32,

    render: RenderBuffers,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl SimulationCore {
    /// Build a simulation from a validated config.
    pub fn new(config: SimConfig) -> Result<Self> {
        init::create_simulation_core(config)
    }

    /// Default config with the given extent (default spawners included).
    pub fn with_extent(width: f32, height: f32) -> Result<Self> {
        Self::new(SimConfig {
            width,
            height,
            ..SimConfig::default()
        })
    }

    pub fn from_config_json(json: &str) -> Result<Self> {
        Self::new(SimConfig::from_json(json)?)
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    pub fn width(&self) -> f32 { self.config.width }

    pub fn height(&self) -> f32 { self.config.height }

    pub fn body_count(&self) -> usize { self.bodies.len() }

    pub fn frame(&self) -> u64 { self.frame }

    /// Read-only view of every body, in insertion order.
    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn body(&self, id: BodyId) -> Option<&Body> {
        self.bodies.iter().find(|b| b.id() == id)
    }

    pub fn grid(&self) -> &SpatialGrid {
        &self.grid
    }

    pub fn spawners(&self) -> &[Spawner] {
        &self.spawners
    }

    pub fn gravity(&self) -> Vec2 {
        self.integrator.gravity
    }

    /// Advance by `dt` seconds (clamped to the configured max step).
    pub fn step(&mut self, dt: f32) {
        step::step(self, dt);
    }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        settings::get_perf_stats(self)
    }

    pub fn set_gravity(&mut self, x: f32, y: f32) {
        settings::set_gravity(self, x, y);
    }

    pub fn execution(&self) -> Execution {
        self.resolver.execution()
    }

    /// Choose how relaxation passes run. `Sequential` and `Threaded` give identical results.
    pub fn set_execution(&mut self, execution: Execution) {
        settings::set_execution(self, execution);
    }

    /// Add a body; it gets a fresh id and the next wheel color.
    pub fn add_body(&mut self, body: Body) -> Result<BodyId> {
        commands::add_body(self, body)
    }

    pub fn remove_body(&mut self, id: BodyId) -> Option<Body> {
        commands::remove_body(self, id)
    }

    /// Remove all bodies
    pub fn clear(&mut self) {
        commands::clear(self)
    }

    pub fn start_spawners(&mut self) {
        commands::start_spawners(self)
    }

    pub fn stop_spawners(&mut self) {
        commands::stop_spawners(self)
    }

    pub fn add_spawner(&mut self, config: SpawnerConfig) -> Result<()> {
        commands::add_spawner(self, config)
    }

    /// `n` spawners, each offset from the last one already present.
    pub fn add_spawner_row(&mut self, config: SpawnerConfig, n: u32) -> Result<()> {
        commands::add_spawner_row(self, config, n)
    }

    /// Fill the render buffers; returns the number of bodies written.
    pub fn extract_render(&mut self) -> usize {
        render_extract::extract(self)
    }

    /// Get pointer to the `[x, y, radius]` buffer (for JS rendering)
    pub fn circles_ptr(&self) -> *const f32 {
        self.render.circles.as_ptr()
    }

    pub fn circles_len(&self) -> usize {
        self.render.circles.len()
    }

    /// Get pointer to the ABGR color buffer (for JS rendering)
    pub fn colors_ptr(&self) -> *const u32 {
        self.render.colors.as_ptr()
    }

    pub fn colors_len(&self) -> usize {
        self.render.colors.len()
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
