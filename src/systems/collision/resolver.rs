use std::ops::Range;

use crate::core::{Body, Bounds};
use crate::spatial::grid::SpatialGrid;
use crate::systems::pool::WorkerPool;

use super::bands::BandPlan;
use super::packed::{column_range, ColumnSlice, PackedBodies, SweepStats};

/// How a relaxation pass walks the grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Execution {
    /// One single-threaded sweep over all interior columns, left to right.
    Sweep,
    /// The band plan, every band on the calling thread, in band order.
    Sequential,
    /// The band plan, bands of a phase spread over the worker pool.
    #[default]
    Threaded,
}

/// Broad phase plus narrow phase over a [`SpatialGrid`].
///
/// `Sequential` and `Threaded` visit bands in the same phase order and bands of
/// a phase never share a body, so both produce bit-identical results.
pub struct CollisionResolver {
    packed: PackedBodies,
    plan: BandPlan,
    interior: Range<u32>,
    execution: Execution,
}

struct BandJob<'a> {
    slice: ColumnSlice<'a>,
    columns: Range<u32>,
}

impl BandJob<'_> {
    fn run(mut self) -> SweepStats {
        self.slice.resolve_column_range(self.columns.start, self.columns.end)
    }
}

impl CollisionResolver {
    pub fn new(grid: &SpatialGrid, workers: usize, execution: Execution) -> Self {
        let interior = grid.interior_columns();
        let plan = BandPlan::new(interior.clone(), workers);
        log::debug!("collision bands: {:?}", plan.bands());
        Self {
            packed: PackedBodies::new(),
            plan,
            interior,
            execution,
        }
    }

    pub fn execution(&self) -> Execution {
        self.execution
    }

    pub fn set_execution(&mut self, execution: Execution) {
        self.execution = execution;
    }

    pub fn plan(&self) -> &BandPlan {
        &self.plan
    }

    /// One relaxation pass over the bodies currently binned in `grid`.
    ///
    /// `grid` must have been rebuilt from `bodies` since they last moved.
    pub fn resolve(
        &mut self,
        grid: &SpatialGrid,
        bodies: &mut [Body],
        bounds: &Bounds,
        pool: &WorkerPool,
    ) -> SweepStats {
        debug_assert_eq!(grid.interior_columns(), self.interior);
        self.packed.gather(grid, bodies);
        if self.packed.is_empty() {
            return SweepStats::default();
        }

        let stats = match self.execution {
            Execution::Sweep => {
                let (lo, hi) = (self.interior.start, self.interior.end);
                self.packed.full_slice(*bounds).resolve_column_range(lo, hi)
            }
            Execution::Sequential | Execution::Threaded => {
                let mut stats = self.resolve_phase(0, bounds, pool);
                stats += self.resolve_phase(1, bounds, pool);
                stats
            }
        };

        self.packed.scatter(bodies);
        stats
    }

    fn resolve_phase(&mut self, parity: usize, bounds: &Bounds, pool: &WorkerPool) -> SweepStats {
        let rows = self.packed.rows;
        let spans = &self.packed.spans;
        let mut rest: &mut [Body] = &mut self.packed.bodies;
        let mut consumed = 0usize;
        let mut jobs = Vec::with_capacity(self.plan.len().div_ceil(2));

        for band in self.plan.phase(parity) {
            // Columns start - 1 ..= end: the band plus its read halo
            let range = column_range(spans, rows, band.start - 1, band.end);
            let (_, tail) = std::mem::take(&mut rest).split_at_mut(range.start - consumed);
            let (mine, tail) = tail.split_at_mut(range.len());
            rest = tail;
            consumed = range.end;

            jobs.push(BandJob {
                slice: ColumnSlice {
                    bodies: mine,
                    offset: range.start,
                    spans,
                    rows,
                    bounds: *bounds,
                },
                columns: band.clone(),
            });
        }

        match self.execution {
            Execution::Threaded => pool.run_all(jobs, BandJob::run),
            _ => jobs.into_iter().map(BandJob::run).sum(),
        }
    }
}
