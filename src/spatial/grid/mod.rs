//! SpatialGrid - uniform cell grid for the collision broad-phase
//!
//! The simulation rectangle is cut into square cells of `cell_size`, padded by
//! one empty ring of cells on every side so a 3x3 neighbourhood read around any
//! occupied cell never leaves the array.
//!
//! Cells hold arena indices into the simulation's body array, not bodies.
//! Storage per cell is an unbounded list: a crowded cell never drops a body.
//! The grid is cleared and refilled every relaxation pass.

use crate::core::Body;

mod cell;
mod indexing;

pub use cell::{BodyIndex, Cell};

/// Width of the empty padding ring, in cells.
pub const BORDER: u32 = 1;

static EMPTY_CELL: Cell = Cell::new();

pub struct SpatialGrid {
    width: u32,
    height: u32,
    cell_size: f32,
    // Row-major: index = y * width + x
    cells: Vec<Cell>,
}

impl SpatialGrid {
    /// Grid covering `extent_width x extent_height` with cells of `cell_size`.
    ///
    /// `floor(extent / cell_size) + 1` cells cover the extent on each axis;
    /// the border ring adds two more.
    pub fn new(extent_width: f32, extent_height: f32, cell_size: f32) -> Self {
        let cells_along = |extent: f32| (extent / cell_size).floor().max(0.0) as u32 + 1 + 2 * BORDER;
        let width = cells_along(extent_width);
        let height = cells_along(extent_height);
        let mut cells = Vec::with_capacity((width * height) as usize);
        cells.resize_with((width * height) as usize, Cell::new);

        log::debug!("spatial grid {}x{} cells of {}", width, height, cell_size);

        Self {
            width,
            height,
            cell_size,
            cells,
        }
    }

    /// Empty every cell. Keeps each cell's allocation for the next fill.
    ///
    /// Runs on the calling thread; all parallel work goes through `WorkerPool`.
    pub fn clear(&mut self) {
        self.cells.iter_mut().for_each(Cell::clear);
    }

    /// Append `index` to the cell containing `body`'s centre and return that cell.
    ///
    /// Callers must keep bodies inside the simulation bounds. A body outside the
    /// addressable range trips a debug assertion; release builds clamp it into
    /// the nearest interior cell.
    pub fn insert(&mut self, index: BodyIndex, body: &Body) -> (u32, u32) {
        let (x, y) = self.cell_coords(body.position.x, body.position.y);
        let idx = self.index(x, y);
        self.cells[idx].push(index);
        (x, y)
    }

    /// Clear, then insert every body with its arena index.
    pub fn rebuild(&mut self, bodies: &[Body]) {
        self.clear();
        for (i, body) in bodies.iter().enumerate() {
            self.insert(i as BodyIndex, body);
        }
    }

    /// Cell at grid coordinates, or a shared empty cell when out of range.
    #[inline]
    pub fn cell_at(&self, x: i32, y: i32) -> &Cell {
        if self.in_bounds(x, y) {
            &self.cells[self.index(x as u32, y as u32)]
        } else {
            &EMPTY_CELL
        }
    }

    /// Total number of body entries across all cells.
    pub fn population(&self) -> usize {
        self.cells.iter().map(Cell::count).sum()
    }

    /// Column-major iteration over `(x, y, cell)`.
    pub fn columns(&self) -> impl Iterator<Item = (u32, u32, &Cell)> + '_ {
        (0..self.width).flat_map(move |x| {
            (0..self.height).map(move |y| (x, y, &self.cells[self.index(x, y)]))
        })
    }
}
