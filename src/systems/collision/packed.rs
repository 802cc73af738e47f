//! Column-major packed copy of the bodies for one relaxation pass.
//!
//! Bodies are copied out of the arena in grid column order, so every run of
//! whole columns is one contiguous slice. Bands split that buffer with
//! `split_at_mut` and each thread owns its slice outright; the results are
//! written back to the arena afterwards.

use std::ops::Range;

use crate::core::{Body, Bounds};
use crate::spatial::grid::{BodyIndex, SpatialGrid};

use super::narrow::resolve_pair;

/// Half-open range of one cell's bodies in the packed buffer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    #[inline]
    pub fn len(&self) -> usize {
        (self.end - self.start) as usize
    }
}

/// Counters from one or more sweeps.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SweepStats {
    pub pair_checks: u64,
    pub contacts: u64,
}

impl std::ops::AddAssign for SweepStats {
    fn add_assign(&mut self, rhs: Self) {
        self.pair_checks += rhs.pair_checks;
        self.contacts += rhs.contacts;
    }
}

impl std::iter::Sum for SweepStats {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(SweepStats::default(), |mut acc, s| {
            acc += s;
            acc
        })
    }
}

#[derive(Default)]
pub struct PackedBodies {
    pub(super) bodies: Vec<Body>,
    origin: Vec<BodyIndex>,
    // Column-major: index = x * rows + y
    pub(super) spans: Vec<Span>,
    pub(super) rows: u32,
}

impl PackedBodies {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy the arena into column order following the grid's cell membership.
    pub fn gather(&mut self, grid: &SpatialGrid, arena: &[Body]) {
        self.bodies.clear();
        self.origin.clear();
        self.spans.clear();
        self.rows = grid.height();

        for (_, _, cell) in grid.columns() {
            let start = self.bodies.len() as u32;
            for &i in cell.bodies() {
                self.bodies.push(arena[i as usize]);
                self.origin.push(i);
            }
            self.spans.push(Span { start, end: self.bodies.len() as u32 });
        }
    }

    /// Write every packed body back to its arena slot.
    pub fn scatter(&self, arena: &mut [Body]) {
        for (body, &i) in self.bodies.iter().zip(self.origin.iter()) {
            arena[i as usize] = *body;
        }
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// The whole buffer as one slice.
    pub fn full_slice(&mut self, bounds: Bounds) -> ColumnSlice<'_> {
        ColumnSlice {
            bodies: &mut self.bodies,
            offset: 0,
            spans: &self.spans,
            rows: self.rows,
            bounds,
        }
    }
}

/// Packed-buffer range covering columns `first..=last`.
pub(super) fn column_range(spans: &[Span], rows: u32, first: u32, last: u32) -> Range<usize> {
    let rows = rows as usize;
    let start = spans[first as usize * rows].start as usize;
    let end = spans[last as usize * rows + rows - 1].end as usize;
    start..end
}

/// Mutable view over the packed bodies of a run of columns.
///
/// Span indices are global; `offset` is where `bodies` starts in the full buffer.
pub struct ColumnSlice<'a> {
    pub(super) bodies: &'a mut [Body],
    pub(super) offset: usize,
    pub(super) spans: &'a [Span],
    pub(super) rows: u32,
    pub(super) bounds: Bounds,
}

impl<'a> ColumnSlice<'a> {
    #[inline]
    fn span(&self, x: u32, y: u32) -> Span {
        self.spans[(x * self.rows + y) as usize]
    }

    /// All pairs between two cells, skipping a body paired with itself.
    pub fn resolve_cell_pair(&mut self, a: Span, b: Span) -> SweepStats {
        let mut stats = SweepStats::default();
        for i in a.start..a.end {
            for j in b.start..b.end {
                if i == j {
                    continue;
                }
                stats.pair_checks += 1;
                let (p, q) = pair_mut(self.bodies, i as usize - self.offset, j as usize - self.offset);
                if resolve_pair(p, q, &self.bounds) {
                    stats.contacts += 1;
                }
            }
        }
        stats
    }

    /// Check every non-border cell of columns `lo..hi` against its 3x3 neighbourhood.
    ///
    /// Reads columns `lo - 1` and `hi`, so the slice must cover `lo - 1..=hi`.
    pub fn resolve_column_range(&mut self, lo: u32, hi: u32) -> SweepStats {
        debug_assert!(lo >= 1, "resolve_column_range: column {} has no left neighbour", lo);
        let mut stats = SweepStats::default();
        for y in 1..self.rows.saturating_sub(1) {
            for x in lo..hi {
                let current = self.span(x, y);
                if current.is_empty() {
                    continue;
                }
                for ny in y - 1..=y + 1 {
                    for nx in x - 1..=x + 1 {
                        let adjacent = self.span(nx, ny);
                        if adjacent.is_empty() {
                            continue;
                        }
                        stats += self.resolve_cell_pair(current, adjacent);
                    }
                }
            }
        }
        stats
    }
}

/// Two distinct elements of one slice, mutably.
#[inline]
fn pair_mut(bodies: &mut [Body], i: usize, j: usize) -> (&mut Body, &mut Body) {
    debug_assert_ne!(i, j);
    if i < j {
        let (lo, hi) = bodies.split_at_mut(j);
        (&mut lo[i], &mut hi[0])
    } else {
        let (lo, hi) = bodies.split_at_mut(i);
        (&mut hi[0], &mut lo[j])
    }
}
