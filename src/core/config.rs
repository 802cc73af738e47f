//! Simulation configuration, loadable from JSON.
//!
//! Every field has a default, so a partial document such as
//! `{"iterations": 8, "workers": 2}` is a valid config.
//!
//! ```json
//! {
//!   "width": 800, "height": 600, "margin": 4,
//!   "cellSize": 8, "maxBodies": 2000,
//!   "restitution": 0.6, "gravity": { "x": 0, "y": 45 },
//!   "density": 2, "iterations": 5, "workers": 4,
//!   "maxDt": 0.016666668, "restSpeed": 0.01,
//!   "spawners": [
//!     { "position": { "x": 75, "y": 75 }, "direction": { "x": 1, "y": 0 },
//!       "speed": 160, "interval": 0.115,
//!       "kind": { "type": "ball", "radius": 4 } }
//!   ]
//! }
//! ```

use serde::{Deserialize, Serialize};

use super::error::{Error, Result};
use super::vec2::Vec2;
use super::body::Bounds;

pub const DEFAULT_RADIUS: f32 = 4.0;
pub const DEFAULT_CELL_SIZE: f32 = DEFAULT_RADIUS * 2.0;
pub const DEFAULT_SPAWN_SPEED: f32 = 160.0;
pub const DEFAULT_SPAWN_INTERVAL: f32 = 0.115;
pub const DEFAULT_SPAWNER_COUNT: u32 = 5;
/// Offset between consecutive spawners of a row
pub const SPAWNER_ROW_OFFSET: Vec2 = Vec2::new(-DEFAULT_RADIUS * 2.0, DEFAULT_RADIUS * 2.0 + 2.0);

/// What a spawner produces.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum BodyKind {
    /// Fixed radius.
    Ball { radius: f32 },
    /// Radius drawn uniformly from `[min_radius, max_radius]`.
    #[serde(rename_all = "camelCase")]
    Mixed { min_radius: f32, max_radius: f32 },
}

impl BodyKind {
    /// Largest radius this kind can produce.
    pub fn max_radius(&self) -> f32 {
        match *self {
            BodyKind::Ball { radius } => radius,
            BodyKind::Mixed { min_radius, max_radius } => min_radius.max(max_radius),
        }
    }

    /// Smallest radius this kind can produce.
    pub fn min_radius(&self) -> f32 {
        match *self {
            BodyKind::Ball { radius } => radius,
            BodyKind::Mixed { min_radius, max_radius } => min_radius.min(max_radius),
        }
    }

    /// Pick a radius; `unit` is a uniform sample in `[0, 1]`.
    pub fn sample_radius(&self, unit: f32) -> f32 {
        match *self {
            BodyKind::Ball { radius } => radius,
            BodyKind::Mixed { .. } => {
                let lo = self.min_radius();
                let hi = self.max_radius();
                lo + (hi - lo) * unit.clamp(0.0, 1.0)
            }
        }
    }
}

impl Default for BodyKind {
    fn default() -> Self {
        BodyKind::Ball { radius: DEFAULT_RADIUS }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SpawnerConfig {
    pub position: Vec2,
    /// Exit direction (normalized on use)
    pub direction: Vec2,
    pub speed: f32,
    /// Seconds between shots
    pub interval: f32,
    pub kind: BodyKind,
    pub emitting: bool,
}

impl Default for SpawnerConfig {
    fn default() -> Self {
        Self {
            position: Vec2::new(75.0, 75.0),
            direction: Vec2::new(1.0, 0.0),
            speed: DEFAULT_SPAWN_SPEED,
            interval: DEFAULT_SPAWN_INTERVAL,
            kind: BodyKind::default(),
            emitting: true,
        }
    }
}

impl SpawnerConfig {
    /// `n` copies of `self`, each shifted by [`SPAWNER_ROW_OFFSET`] from the previous one.
    pub fn row(&self, n: u32) -> Vec<SpawnerConfig> {
        (0..n)
            .map(|i| SpawnerConfig {
                position: self.position + SPAWNER_ROW_OFFSET * i as f32,
                ..self.clone()
            })
            .collect()
    }

    /// Check the spawner against a grid of `cell_size`.
    pub fn validate(&self, cell_size: f32) -> Result<()> {
        let invalid = |msg: &str| Err(Error::InvalidConfig(msg.to_string()));

        let (lo, hi) = (self.kind.min_radius(), self.kind.max_radius());
        if !(lo.is_finite() && lo > 0.0 && hi.is_finite()) {
            return invalid("spawner radius must be finite and > 0");
        }
        if hi * 2.0 > cell_size {
            return Err(Error::BodyTooLarge { radius: hi, cell_size });
        }
        if !(self.interval.is_finite() && self.interval > 0.0) {
            return invalid("spawner interval must be finite and > 0");
        }
        if !(self.speed.is_finite() && self.position.is_finite() && self.direction.is_finite()) {
            return invalid("spawner position, direction and speed must be finite");
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SimConfig {
    pub width: f32,
    pub height: f32,
    /// Visual inset from every wall
    pub margin: f32,
    /// Grid cell edge; must be >= the largest body diameter
    pub cell_size: f32,
    /// Spawners stop once this many bodies exist
    pub max_bodies: u32,
    pub restitution: f32,
    pub gravity: Vec2,
    pub density: f32,
    /// Relaxation passes per frame
    pub iterations: u32,
    pub workers: u32,
    pub max_dt: f32,
    /// Speeds below this snap to zero
    pub rest_speed: f32,
    pub spawners: Vec<SpawnerConfig>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            margin: 4.0,
            cell_size: DEFAULT_CELL_SIZE,
            max_bodies: 2000,
            restitution: 0.6,
            gravity: Vec2::new(0.0, 45.0),
            density: 2.0,
            iterations: 5,
            workers: 4,
            max_dt: 1.0 / 60.0,
            rest_speed: 0.01,
            spawners: SpawnerConfig::default().row(DEFAULT_SPAWNER_COUNT),
        }
    }
}

impl SimConfig {
    /// Same defaults, but with the given extent and no spawners.
    pub fn empty_with_extent(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            spawners: Vec::new(),
            ..Self::default()
        }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let config: SimConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn bounds(&self) -> Bounds {
        Bounds {
            width: self.width,
            height: self.height,
            margin: self.margin,
            restitution: self.restitution,
        }
    }

    pub fn validate(&self) -> Result<()> {
        let invalid = |msg: &str| Err(Error::InvalidConfig(msg.to_string()));

        if !(self.cell_size.is_finite() && self.cell_size > 0.0) {
            return invalid("cellSize must be finite and > 0");
        }
        if !(self.width.is_finite() && self.height.is_finite()) || self.width <= 0.0 || self.height <= 0.0 {
            return invalid("width and height must be finite and > 0");
        }
        if !(self.margin.is_finite() && self.margin >= 0.0) {
            return invalid("margin must be finite and >= 0");
        }
        if !(0.0..=1.0).contains(&self.restitution) {
            return invalid("restitution must be in [0, 1]");
        }
        if !self.gravity.is_finite() {
            return invalid("gravity must be finite");
        }
        if !(self.density.is_finite() && self.density > 0.0) {
            return invalid("density must be finite and > 0");
        }
        if self.iterations == 0 {
            return invalid("iterations must be >= 1");
        }
        if self.workers == 0 {
            return invalid("workers must be >= 1");
        }
        if !(self.max_dt.is_finite() && self.max_dt > 0.0) {
            return invalid("maxDt must be finite and > 0");
        }
        if !(self.rest_speed.is_finite() && self.rest_speed >= 0.0) {
            return invalid("restSpeed must be finite and >= 0");
        }

        for spawner in &self.spawners {
            spawner.validate(self.cell_size)?;
        }

        let min_extent = 2.0 * (self.margin + self.cell_size * 0.5);
        if self.width < min_extent || self.height < min_extent {
            return invalid("extent too small for the largest body plus margins");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let cfg = SimConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.spawners.len(), 5);
        assert_eq!(cfg.spawners[1].position, Vec2::new(67.0, 85.0));
    }

    #[test]
    fn partial_json_fills_defaults() -> Result<()> {
        let cfg = SimConfig::from_json(r#"{"iterations": 8, "workers": 2, "spawners": []}"#)?;
        assert_eq!(cfg.iterations, 8);
        assert_eq!(cfg.workers, 2);
        assert_eq!(cfg.cell_size, DEFAULT_CELL_SIZE);
        assert!(cfg.spawners.is_empty());
        Ok(())
    }

    #[test]
    fn mixed_kind_round_trips_through_json() -> Result<()> {
        let json = r#"{"spawners":[{"kind":{"type":"mixed","minRadius":2,"maxRadius":3}}]}"#;
        let cfg = SimConfig::from_json(json)?;
        assert_eq!(cfg.spawners[0].kind, BodyKind::Mixed { min_radius: 2.0, max_radius: 3.0 });
        assert_eq!(cfg.spawners[0].speed, DEFAULT_SPAWN_SPEED);
        let again = SimConfig::from_json(&cfg.to_json()?)?;
        assert_eq!(again, cfg);
        Ok(())
    }

    #[test]
    fn empty_with_extent_has_no_spawners() {
        let cfg = SimConfig::empty_with_extent(320.0, 240.0);
        assert_eq!((cfg.width, cfg.height), (320.0, 240.0));
        assert!(cfg.spawners.is_empty());
        assert_eq!(cfg.iterations, SimConfig::default().iterations);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn oversized_bodies_rejected() {
        let mut cfg = SimConfig::default();
        cfg.spawners[0].kind = BodyKind::Ball { radius: 5.0 };
        assert!(matches!(cfg.validate(), Err(Error::BodyTooLarge { .. })));
    }

    #[test]
    fn bad_restitution_rejected() {
        let err = SimConfig::from_json(r#"{"restitution": 1.5}"#).unwrap_err();
        assert!(err.to_string().contains("restitution"));
    }

    #[test]
    fn mixed_radius_sampling_stays_in_range() {
        let kind = BodyKind::Mixed { min_radius: 3.0, max_radius: 2.0 };
        assert_eq!(kind.sample_radius(0.0), 2.0);
        assert_eq!(kind.sample_radius(1.0), 3.0);
        assert_eq!(kind.sample_radius(7.0), 3.0);
        assert_eq!(kind.max_radius(), 3.0);
    }
}
