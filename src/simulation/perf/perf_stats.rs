use wasm_bindgen::prelude::*;

/// Timings and counters for the last step.
#[wasm_bindgen]
#[derive(Clone, Debug, Default)]
pub struct PerfStats {
    pub(super) step_ms: f64,
    pub(super) spawn_ms: f64,
    pub(super) integrate_ms: f64,
    /// Summed over all relaxation passes
    pub(super) grid_ms: f64,
    pub(super) collide_ms: f64,
    pub(super) body_count: u32,
    pub(super) spawned: u32,
    pub(super) iterations: u32,
    pub(super) bands: u32,
    pub(super) pair_checks: u32,
    pub(super) contacts: u32,
    pub(super) grid_cells: u32,
}

impl PerfStats {
    pub(crate) fn reset(&mut self) {
        *self = PerfStats::default();
    }
}

#[wasm_bindgen]
impl PerfStats {
    #[wasm_bindgen(getter)]
    pub fn step_ms(&self) -> f64 { self.step_ms }
    #[wasm_bindgen(getter)]
    pub fn spawn_ms(&self) -> f64 { self.spawn_ms }
    #[wasm_bindgen(getter)]
    pub fn integrate_ms(&self) -> f64 { self.integrate_ms }
    #[wasm_bindgen(getter)]
    pub fn grid_ms(&self) -> f64 { self.grid_ms }
    #[wasm_bindgen(getter)]
    pub fn collide_ms(&self) -> f64 { self.collide_ms }
    #[wasm_bindgen(getter)]
    pub fn body_count(&self) -> u32 { self.body_count }
    #[wasm_bindgen(getter)]
    pub fn spawned(&self) -> u32 { self.spawned }
    #[wasm_bindgen(getter)]
    pub fn iterations(&self) -> u32 { self.iterations }
    #[wasm_bindgen(getter)]
    pub fn bands(&self) -> u32 { self.bands }
    #[wasm_bindgen(getter)]
    pub fn pair_checks(&self) -> u32 { self.pair_checks }
    #[wasm_bindgen(getter)]
    pub fn contacts(&self) -> u32 { self.contacts }
    #[wasm_bindgen(getter)]
    pub fn grid_cells(&self) -> u32 { self.grid_cells }
}
