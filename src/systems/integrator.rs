//! Integrator - semi-implicit Euler step with boundary containment
//!
//! Per body: add gravity, `v += a*dt`, `p += v*dt`, clear the accumulated
//! acceleration, snap near-zero speeds to rest, then clamp into bounds.

use crate::core::{Body, Bounds, Vec2};

use super::pool::WorkerPool;

/// Speeds below this become exactly zero.
pub const DEFAULT_REST_SPEED: f32 = 0.01;
/// Longest step the integrator accepts, in seconds.
pub const DEFAULT_MAX_DT: f32 = 1.0 / 60.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Integrator {
    pub gravity: Vec2,
    pub max_dt: f32,
    pub rest_speed: f32,
}

impl Default for Integrator {
    fn default() -> Self {
        Self {
            gravity: Vec2::new(0.0, 45.0),
            max_dt: DEFAULT_MAX_DT,
            rest_speed: DEFAULT_REST_SPEED,
        }
    }
}

impl Integrator {
    /// Clamp a frame time into `[0, max_dt]`. NaN counts as zero.
    #[inline]
    pub fn clamp_dt(&self, dt: f32) -> f32 {
        if dt.is_nan() {
            return 0.0;
        }
        dt.clamp(0.0, self.max_dt)
    }

    /// Advance one body by an already clamped `dt`.
    #[inline]
    pub fn integrate(&self, body: &mut Body, dt: f32, bounds: &Bounds) {
        body.accelerate(self.gravity);
        body.velocity += body.acceleration * dt;
        body.position += body.velocity * dt;
        body.acceleration = Vec2::zero();
        if body.velocity.length() < self.rest_speed {
            body.velocity = Vec2::zero();
        }
        body.enforce_boundaries(bounds);
    }

    /// Advance every body, spread over the pool.
    pub fn integrate_all(&self, bodies: &mut [Body], dt: f32, bounds: &Bounds, pool: &WorkerPool) {
        pool.for_each_mut(bodies, |body| self.integrate(body, dt, bounds));
    }
}
