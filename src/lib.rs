//! Ballpit Engine - grid-partitioned 2D ball physics in WASM
//!
//! Architecture:
//! - core/        - vectors, bodies, config, errors
//! - spatial/     - uniform cell grid (broad-phase)
//! - systems/     - integrator, collision resolver, spawners, worker pool
//! - simulation/  - frame orchestration, perf, render extraction, wasm facade

pub mod core;
pub mod spatial;
pub mod systems;
pub mod simulation;

pub use spatial::grid;

use wasm_bindgen::prelude::*;

// Re-export wasm-bindgen-rayon for thread pool initialization
#[cfg(all(feature = "parallel", target_arch = "wasm32", target_feature = "atomics"))]
pub use wasm_bindgen_rayon::init_thread_pool;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Routes `log` records to the browser console.
#[cfg(target_arch = "wasm32")]
struct ConsoleLogger;

#[cfg(target_arch = "wasm32")]
impl log::Log for ConsoleLogger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &log::Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = JsValue::from_str(&format!("[{}] {}", record.target(), record.args()));
        match record.level() {
            log::Level::Error => web_sys::console::error_1(&line),
            log::Level::Warn => web_sys::console::warn_1(&line),
            log::Level::Info => web_sys::console::info_1(&line),
            _ => web_sys::console::debug_1(&line),
        }
    }

    fn flush(&self) {}
}

#[cfg(target_arch = "wasm32")]
static LOGGER: ConsoleLogger = ConsoleLogger;

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    #[cfg(target_arch = "wasm32")]
    {
        if log::set_logger(&LOGGER).is_ok() {
            log::set_max_level(log::LevelFilter::Info);
        }
    }

    web_sys::console::log_1(&"🦀 Ballpit WASM Engine initialized!".into());
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use crate::core::{Body, BodyId, BodyKind, Bounds, Error, Result, SimConfig, SpawnerConfig, Vec2};
pub use simulation::{PerfStats, RenderLayout, SimulationCore, World};
pub use systems::{CollisionResolver, Execution, Integrator, WorkerPool};
