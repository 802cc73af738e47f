//! Body - a single circular particle.
//!
//! Radius and mass are fixed at construction (`mass = radius² × density`);
//! position, velocity and accumulated acceleration change every step.

use super::error::{Error, Result};
use super::vec2::Vec2;

/// Stable body handle, assigned by the simulation when a body is added.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyId(pub u32);

/// Opaque white, used until the simulation assigns a hue.
pub const DEFAULT_COLOR: u32 = 0xFFFF_FFFF;

#[derive(Clone, Copy, Debug)]
pub struct Body {
    pub(crate) id: BodyId,
    pub position: Vec2,
    pub velocity: Vec2,
    pub acceleration: Vec2,
    radius: f32,
    mass: f32,
    /// ABGR packed color (display only)
    pub color: u32,
}

/// Simulation rectangle a body must stay inside.
///
/// Bodies are kept within `[radius + margin, extent - radius - margin]` on both
/// axes; a crossed wall reflects the velocity component scaled by `restitution`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
    pub margin: f32,
    pub restitution: f32,
}

impl Body {
    /// Create a body after validating `radius > 0`, `density > 0` and finite vectors.
    pub fn new(position: Vec2, radius: f32, velocity: Vec2, density: f32) -> Result<Self> {
        if !radius.is_finite() || radius <= 0.0 {
            return Err(Error::InvalidParam("radius must be finite and > 0".into()));
        }
        if !density.is_finite() || density <= 0.0 {
            return Err(Error::InvalidParam("density must be finite and > 0".into()));
        }
        if !position.is_finite() {
            return Err(Error::InvalidParam("position must be finite".into()));
        }
        if !velocity.is_finite() {
            return Err(Error::InvalidParam("velocity must be finite".into()));
        }
        Ok(Self {
            id: BodyId::default(),
            position,
            velocity,
            acceleration: Vec2::zero(),
            radius,
            mass: radius * radius * density,
            color: DEFAULT_COLOR,
        })
    }

    #[inline]
    pub fn id(&self) -> BodyId {
        self.id
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    #[inline]
    pub fn mass(&self) -> f32 {
        self.mass
    }

    /// Accumulate an acceleration for the next integration step.
    #[inline]
    pub fn accelerate(&mut self, acc: Vec2) {
        self.acceleration += acc;
    }

    /// Clamp the body inside `bounds`, reflecting velocity on every crossed wall.
    pub fn enforce_boundaries(&mut self, bounds: &Bounds) {
        let inset = self.radius + bounds.margin;
        let e = bounds.restitution;

        if self.position.y > bounds.height - inset {
            self.position.y = bounds.height - inset;
            self.velocity.y *= -e;
        }
        if self.position.y < inset {
            self.position.y = inset;
            self.velocity.y *= -e;
        }
        if self.position.x > bounds.width - inset {
            self.position.x = bounds.width - inset;
            self.velocity.x *= -e;
        }
        if self.position.x < inset {
            self.position.x = inset;
            self.velocity.x *= -e;
        }
    }

    #[inline]
    pub fn momentum(&self) -> Vec2 {
        self.velocity * self.mass
    }
}

impl Bounds {
    /// True if `body` lies inside the clamped region (inclusive).
    pub fn contains(&self, body: &Body) -> bool {
        let inset = body.radius() + self.margin;
        let p = body.position;
        p.x >= inset && p.x <= self.width - inset && p.y >= inset && p.y <= self.height - inset
    }
}
