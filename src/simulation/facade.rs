use wasm_bindgen::prelude::*;

use crate::core::{Body, BodyId, SimConfig, SpawnerConfig, Vec2};
use crate::systems::Execution;

use super::perf_stats::PerfStats;
use super::SimulationCore;

fn to_js(e: crate::core::Error) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// Where the render buffers live in wasm memory after `extract_render`.
#[wasm_bindgen]
pub struct RenderLayout {
    circles_ptr: u32,
    circles_len_elements: u32,
    circles_len_bytes: u32,
    colors_ptr: u32,
    colors_len_elements: u32,
    colors_len_bytes: u32,
}

#[wasm_bindgen]
impl RenderLayout {
    #[wasm_bindgen(getter)]
    pub fn circles_ptr(&self) -> u32 { self.circles_ptr }
    #[wasm_bindgen(getter)]
    pub fn circles_len_elements(&self) -> u32 { self.circles_len_elements }
    #[wasm_bindgen(getter)]
    pub fn circles_len_bytes(&self) -> u32 { self.circles_len_bytes }

    #[wasm_bindgen(getter)]
    pub fn colors_ptr(&self) -> u32 { self.colors_ptr }
    #[wasm_bindgen(getter)]
    pub fn colors_len_elements(&self) -> u32 { self.colors_len_elements }
    #[wasm_bindgen(getter)]
    pub fn colors_len_bytes(&self) -> u32 { self.colors_len_bytes }
}

#[wasm_bindgen]
pub struct World {
    core: SimulationCore,
}

#[wasm_bindgen]
impl World {
    /// Create a world of the given size with the default spawner row
    #[wasm_bindgen(constructor)]
    pub fn new(width: f32, height: f32) -> Result<World, JsValue> {
        let core = SimulationCore::with_extent(width, height).map_err(to_js)?;
        Ok(Self { core })
    }

    /// Create a world from a JSON `SimConfig` (camelCase, every field optional)
    #[wasm_bindgen(js_name = fromConfigJson)]
    pub fn from_config_json(json: &str) -> Result<World, JsValue> {
        let core = SimulationCore::from_config_json(json).map_err(to_js)?;
        Ok(Self { core })
    }

    #[wasm_bindgen(js_name = defaultConfigJson)]
    pub fn default_config_json() -> Result<String, JsValue> {
        SimConfig::default().to_json().map_err(to_js)
    }

    pub fn config_json(&self) -> Result<String, JsValue> {
        self.core.config().to_json().map_err(to_js)
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> f32 { self.core.width() }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> f32 { self.core.height() }

    #[wasm_bindgen(getter)]
    pub fn body_count(&self) -> u32 { self.core.body_count() as u32 }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.core.frame() }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.get_perf_stats()
    }

    pub fn set_gravity(&mut self, x: f32, y: f32) {
        self.core.set_gravity(x, y);
    }

    /// Switch collision passes between the worker pool and the calling thread
    pub fn set_threaded(&mut self, threaded: bool) {
        let execution = if threaded { Execution::Threaded } else { Execution::Sequential };
        self.core.set_execution(execution);
    }

    /// Add a ball; returns its id
    pub fn add_body(&mut self, x: f32, y: f32, radius: f32, vx: f32, vy: f32) -> Result<u32, JsValue> {
        let body = Body::new(Vec2::new(x, y), radius, Vec2::new(vx, vy), self.core.config().density)
            .map_err(to_js)?;
        let id = self.core.add_body(body).map_err(to_js)?;
        Ok(id.0)
    }

    pub fn remove_body(&mut self, id: u32) -> bool {
        self.core.remove_body(BodyId(id)).is_some()
    }

    /// Remove all bodies
    pub fn clear(&mut self) {
        self.core.clear();
    }

    pub fn start_spawners(&mut self) {
        self.core.start_spawners();
    }

    pub fn stop_spawners(&mut self) {
        self.core.stop_spawners();
    }

    /// Add `n` default-ball spawners starting at (x, y), each offset from the last
    pub fn add_spawner_row(&mut self, x: f32, y: f32, dir_x: f32, dir_y: f32, speed: f32, n: u32) -> Result<(), JsValue> {
        let config = SpawnerConfig {
            position: Vec2::new(x, y),
            direction: Vec2::new(dir_x, dir_y),
            speed,
            ..SpawnerConfig::default()
        };
        self.core.add_spawner_row(config, n).map_err(to_js)
    }

    /// Step the simulation forward by `dt` seconds
    pub fn step(&mut self, dt: f32) {
        self.core.step(dt);
    }

    /// Refresh the render buffers; returns the body count
    pub fn extract_render(&mut self) -> usize {
        self.core.extract_render()
    }

    /// Get pointer to `[x, y, radius]` triples (for JS rendering)
    pub fn circles_ptr(&self) -> *const f32 {
        self.core.circles_ptr()
    }

    pub fn circles_len(&self) -> usize {
        self.core.circles_len()
    }

    /// Get pointer to ABGR colors (for JS rendering)
    pub fn colors_ptr(&self) -> *const u32 {
        self.core.colors_ptr()
    }

    pub fn colors_len(&self) -> usize {
        self.core.colors_len()
    }

    pub fn render_layout(&self) -> RenderLayout {
        let circles_len = self.core.circles_len();
        let colors_len = self.core.colors_len();
        RenderLayout {
            circles_ptr: self.core.circles_ptr() as usize as u32,
            circles_len_elements: circles_len as u32,
            circles_len_bytes: (circles_len * std::mem::size_of::<f32>()) as u32,
            colors_ptr: self.core.colors_ptr() as usize as u32,
            colors_len_elements: colors_len as u32,
            colors_len_bytes: (colors_len * std::mem::size_of::<u32>()) as u32,
        }
    }
}
