//! Narrow phase: circle-circle overlap test and response for one pair.

use crate::core::{Body, Bounds, Vec2};

/// Centre distances at or below this are treated as coincident.
pub const COINCIDENT_DISTANCE: f32 = 1e-6;

/// Axis used to separate bodies whose centres coincide.
const FALLBACK_NORMAL: Vec2 = Vec2::new(1.0, 0.0);

/// Resolve one candidate pair. Returns `true` if the bodies overlapped.
///
/// Overlapping bodies are pushed apart by half the penetration each along the
/// centre line, then, if they are closing, receive a mass-weighted 1D elastic
/// exchange along that line scaled by `bounds.restitution`. Both bodies are
/// clamped back inside `bounds` afterwards.
///
/// Two `&mut` can never alias, so the same-body skip lives with the callers
/// that index into shared storage.
pub fn resolve_pair(a: &mut Body, b: &mut Body, bounds: &Bounds) -> bool {
    let delta = a.position - b.position;
    let dist_sq = delta.length_squared();
    let min_dist = a.radius() + b.radius();
    if dist_sq >= min_dist * min_dist {
        return false;
    }

    let dist = dist_sq.sqrt();
    let normal = if dist > COINCIDENT_DISTANCE {
        delta * (1.0 / dist)
    } else {
        log::debug!("coincident centres at ({}, {}), separating along x", a.position.x, a.position.y);
        FALLBACK_NORMAL
    };

    // Position: split the penetration evenly
    let push = normal * (0.5 * (min_dist - dist));
    a.position += push;
    b.position -= push;

    // Velocity: only when the pair is closing along the normal. Each pair is
    // revisited every relaxation pass; a separating pair keeps its velocity
    // so later passes do not exchange it again.
    let closing = (a.velocity - b.velocity).dot(normal);
    if closing < 0.0 {
        let total = a.mass() + b.mass();
        let e = bounds.restitution;
        a.velocity -= normal * (2.0 * b.mass() / total * closing * e);
        b.velocity += normal * (2.0 * a.mass() / total * closing * e);
    }

    a.enforce_boundaries(bounds);
    b.enforce_boundaries(bounds);
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_bounds(restitution: f32) -> Bounds {
        Bounds { width: 400.0, height: 400.0, margin: 0.0, restitution }
    }

    fn body(x: f32, y: f32, r: f32, vx: f32, vy: f32) -> Body {
        Body::new(Vec2::new(x, y), r, Vec2::new(vx, vy), 2.0).unwrap()
    }

    #[test]
    fn overlapping_pair_ends_at_contact_distance() {
        let mut a = body(100.0, 100.0, 4.0, 0.0, 0.0);
        let mut b = body(103.0, 100.0, 4.0, 0.0, 0.0);
        assert!(resolve_pair(&mut a, &mut b, &open_bounds(0.6)));

        let d = (a.position - b.position).length();
        assert!((d - 8.0).abs() < 1e-4, "distance {}", d);
        assert!((a.position.x - 97.5).abs() < 1e-4);
        assert!((b.position.x - 105.5).abs() < 1e-4);
    }

    #[test]
    fn separated_pair_is_untouched() {
        let mut a = body(100.0, 100.0, 4.0, 1.0, 0.0);
        let mut b = body(108.5, 100.0, 4.0, -1.0, 0.0);
        assert!(!resolve_pair(&mut a, &mut b, &open_bounds(0.6)));
        assert_eq!(a.position, Vec2::new(100.0, 100.0));
        assert_eq!(b.velocity, Vec2::new(-1.0, 0.0));
    }

    #[test]
    fn equal_mass_elastic_collision_conserves_momentum() {
        let mut a = body(100.0, 100.0, 4.0, 3.0, 0.5);
        let mut b = body(106.0, 101.0, 4.0, -2.0, 0.0);
        let before = a.momentum() + b.momentum();

        assert!(resolve_pair(&mut a, &mut b, &open_bounds(1.0)));

        let after = a.momentum() + b.momentum();
        assert!((before - after).length() < 1e-3, "{:?} vs {:?}", before, after);
    }

    #[test]
    fn head_on_equal_masses_swap_velocities() {
        let mut a = body(100.0, 100.0, 4.0, 1.0, 0.0);
        let mut b = body(105.0, 100.0, 4.0, -1.0, 0.0);
        resolve_pair(&mut a, &mut b, &open_bounds(1.0));
        assert!((a.velocity.x + 1.0).abs() < 1e-5);
        assert!((b.velocity.x - 1.0).abs() < 1e-5);
    }

    #[test]
    fn unequal_masses_conserve_momentum_too() {
        let mut a = body(200.0, 200.0, 2.0, 5.0, 0.0);
        let mut b = body(205.0, 200.0, 4.0, 0.0, 0.0);
        let before = a.momentum() + b.momentum();
        resolve_pair(&mut a, &mut b, &open_bounds(1.0));
        let after = a.momentum() + b.momentum();
        assert!((before - after).length() < 1e-3);
        // Light body bounces back off the heavy one.
        assert!(a.velocity.x < 0.0);
        assert!(b.velocity.x > 0.0);
    }

    #[test]
    fn separating_pair_keeps_velocity() {
        let mut a = body(100.0, 100.0, 4.0, -1.0, 0.0);
        let mut b = body(105.0, 100.0, 4.0, 1.0, 0.0);
        resolve_pair(&mut a, &mut b, &open_bounds(1.0));
        assert_eq!(a.velocity, Vec2::new(-1.0, 0.0));
        assert_eq!(b.velocity, Vec2::new(1.0, 0.0));
    }

    #[test]
    fn second_pass_does_not_exchange_again() {
        let mut a = body(100.0, 100.0, 4.0, 1.0, 0.0);
        let mut b = body(106.0, 100.0, 4.0, -1.0, 0.0);
        resolve_pair(&mut a, &mut b, &open_bounds(1.0));
        let after_first = (a.velocity, b.velocity);

        // Pull them back into contact, still moving apart
        a.position.x = 100.0;
        b.position.x = 106.0;
        resolve_pair(&mut a, &mut b, &open_bounds(1.0));
        assert_eq!((a.velocity, b.velocity), after_first);
        assert!(a.velocity.x < 0.0 && b.velocity.x > 0.0);
    }

    #[test]
    fn coincident_centres_do_not_produce_nan() {
        let mut a = body(100.0, 100.0, 4.0, 0.0, 0.0);
        let mut b = body(100.0, 100.0, 4.0, 0.0, 0.0);
        assert!(resolve_pair(&mut a, &mut b, &open_bounds(0.6)));
        assert!(a.position.is_finite() && b.position.is_finite());
        assert!(a.velocity.is_finite() && b.velocity.is_finite());
        assert!(((a.position - b.position).length() - 8.0).abs() < 1e-4);
    }

    #[test]
    fn correction_is_clamped_by_walls() {
        let bounds = Bounds { width: 100.0, height: 100.0, margin: 4.0, restitution: 0.6 };
        let mut a = body(8.0, 50.0, 4.0, 0.0, 0.0);
        let mut b = body(10.0, 50.0, 4.0, 0.0, 0.0);
        resolve_pair(&mut a, &mut b, &bounds);
        assert!(bounds.contains(&a));
        assert!(bounds.contains(&b));
    }
}
