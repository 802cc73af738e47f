//! Collision pipeline properties over seeded random layouts.

use ballpit_engine::grid::SpatialGrid;
use ballpit_engine::systems::collision::resolve_pair;
use ballpit_engine::{Body, Bounds, CollisionResolver, Execution, Vec2, WorkerPool};

const WIDTH: f32 = 320.0;
const HEIGHT: f32 = 160.0;
const CELL: f32 = 8.0;

struct Rng(u32);

impl Rng {
    fn next(&mut self) -> u32 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.0 = x;
        x
    }

    fn unit(&mut self) -> f32 {
        (self.next() >> 8) as f32 / (1u32 << 24) as f32
    }

    fn range(&mut self, lo: f32, hi: f32) -> f32 {
        lo + (hi - lo) * self.unit()
    }
}

fn bounds() -> Bounds {
    Bounds { width: WIDTH, height: HEIGHT, margin: 4.0, restitution: 0.6 }
}

fn random_body(rng: &mut Rng, x: f32) -> Body {
    let radius = rng.range(1.5, 4.0);
    let inset = radius + 4.0;
    let x = x.clamp(inset, WIDTH - inset);
    let y = rng.range(inset, HEIGHT - inset);
    let v = Vec2::new(rng.range(-80.0, 80.0), rng.range(-80.0, 80.0));
    Body::new(Vec2::new(x, y), radius, v, 2.0).unwrap()
}

/// Half the bodies sit within a cell of a band edge, the rest anywhere.
fn layout(seed: u32, count: usize, edges: &[u32]) -> Vec<Body> {
    let mut rng = Rng(seed);
    (0..count)
        .map(|i| {
            let x = if i % 2 == 0 && !edges.is_empty() {
                let column = edges[rng.next() as usize % edges.len()];
                // Column c covers x in [(c - 1) * CELL, c * CELL)
                (column as f32 - 1.0) * CELL + rng.range(-CELL, CELL)
            } else {
                rng.range(0.0, WIDTH)
            };
            random_body(&mut rng, x)
        })
        .collect()
}

fn relax(bodies: &mut [Body], execution: Execution, workers: usize, passes: usize) {
    let pool = WorkerPool::new(workers).unwrap();
    let mut grid = SpatialGrid::new(WIDTH, HEIGHT, CELL);
    let mut resolver = CollisionResolver::new(&grid, workers, execution);
    for _ in 0..passes {
        grid.rebuild(bodies);
        resolver.resolve(&grid, bodies, &bounds(), &pool);
    }
}

#[test]
fn threaded_bands_match_sequential_bands() {
    for workers in [2usize, 3, 4, 7] {
        let grid = SpatialGrid::new(WIDTH, HEIGHT, CELL);
        let resolver = CollisionResolver::new(&grid, workers, Execution::Threaded);
        let edges: Vec<u32> = resolver
            .plan()
            .bands()
            .iter()
            .flat_map(|b| [b.start, b.end - 1])
            .collect();

        for seed in 1..=12u32 {
            let original = layout(seed * 7919, 600, &edges);
            let mut seq = original.clone();
            let mut par = original;
            relax(&mut seq, Execution::Sequential, workers, 5);
            relax(&mut par, Execution::Threaded, workers, 5);

            for (i, (a, b)) in seq.iter().zip(par.iter()).enumerate() {
                assert_eq!(a.position, b.position, "seed {} workers {} body {}", seed, workers, i);
                assert_eq!(a.velocity, b.velocity, "seed {} workers {} body {}", seed, workers, i);
            }
        }
    }
}

#[test]
fn relaxation_keeps_bodies_valid_and_inside() {
    for seed in 1..=8u32 {
        let mut bodies = layout(seed, 800, &[]);
        for execution in [Execution::Sweep, Execution::Threaded] {
            relax(&mut bodies, execution, 4, 5);
            for body in &bodies {
                assert!(body.radius() > 0.0 && body.mass() > 0.0);
                assert!(body.position.is_finite() && body.velocity.is_finite());
                assert!(bounds().contains(body), "seed {}: {:?}", seed, body.position);
            }
        }
    }
}

#[test]
fn reinsertion_population_matches_body_count() {
    let bodies = layout(42, 1000, &[]);
    let mut grid = SpatialGrid::new(WIDTH, HEIGHT, CELL);
    grid.rebuild(&bodies);
    assert_eq!(grid.population(), 1000);
    grid.clear();
    assert_eq!(grid.population(), 0);
    grid.rebuild(&bodies[..321]);
    assert_eq!(grid.population(), 321);
}

#[test]
fn overlapping_pair_resolves_to_contact() {
    let open = Bounds { width: 400.0, height: 400.0, margin: 0.0, restitution: 0.6 };
    let mut a = Body::new(Vec2::new(200.0, 200.0), 4.0, Vec2::zero(), 2.0).unwrap();
    let mut b = Body::new(Vec2::new(203.0, 200.0), 4.0, Vec2::zero(), 2.0).unwrap();
    assert!(resolve_pair(&mut a, &mut b, &open));
    let d = (a.position - b.position).length();
    assert!((d - 8.0).abs() < 1e-4);
    assert!(a.velocity.is_finite() && b.velocity.is_finite());
}

#[test]
fn elastic_pairs_conserve_momentum() {
    let open = Bounds { width: 1000.0, height: 1000.0, margin: 0.0, restitution: 1.0 };
    let mut rng = Rng(2024);
    for _ in 0..200 {
        let offset = Vec2::new(rng.range(-7.0, 7.0), rng.range(-7.0, 7.0));
        let mut a = Body::new(Vec2::new(500.0, 500.0), 4.0, Vec2::new(rng.range(-50.0, 50.0), rng.range(-50.0, 50.0)), 2.0).unwrap();
        let mut b = Body::new(Vec2::new(500.0, 500.0) + offset, 4.0, Vec2::new(rng.range(-50.0, 50.0), rng.range(-50.0, 50.0)), 2.0).unwrap();
        let before = a.momentum() + b.momentum();
        resolve_pair(&mut a, &mut b, &open);
        let after = a.momentum() + b.momentum();
        assert!((before - after).length() < 1e-2, "{:?} -> {:?}", before, after);
    }
}

#[test]
fn lone_body_is_untouched_by_every_mode() {
    for execution in [Execution::Sweep, Execution::Sequential, Execution::Threaded] {
        let mut bodies = vec![
            Body::new(Vec2::new(100.0, 80.0), 4.0, Vec2::new(12.0, -3.0), 2.0).unwrap(),
            Body::new(Vec2::new(260.0, 40.0), 3.0, Vec2::new(-5.0, 9.0), 2.0).unwrap(),
        ];
        let original = bodies.clone();
        relax(&mut bodies, execution, 4, 5);
        for (a, b) in bodies.iter().zip(original.iter()) {
            assert_eq!(a.position, b.position);
            assert_eq!(a.velocity, b.velocity);
        }
    }
}

#[test]
fn boundary_enforcement_always_lands_inside() {
    let mut rng = Rng(99);
    let b = bounds();
    for _ in 0..2000 {
        let radius = rng.range(0.5, 4.0);
        let p = Vec2::new(rng.range(-200.0, 600.0), rng.range(-200.0, 400.0));
        let mut body = Body::new(p, radius, Vec2::new(1.0, 1.0), 2.0).unwrap();
        body.enforce_boundaries(&b);
        assert!(b.contains(&body), "{:?} r={}", body.position, radius);
    }
}
