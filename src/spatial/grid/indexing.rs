use super::*;

impl SpatialGrid {
    // === Dimensions ===
    #[inline]
    pub fn width(&self) -> u32 { self.width }

    #[inline]
    pub fn height(&self) -> u32 { self.height }

    #[inline]
    pub fn cell_size(&self) -> f32 { self.cell_size }

    #[inline]
    pub fn cell_count(&self) -> usize { self.cells.len() }

    /// Columns that can hold bodies (everything but the border ring).
    #[inline]
    pub fn interior_columns(&self) -> std::ops::Range<u32> {
        BORDER..self.width - BORDER
    }

    // === Index conversion ===
    #[inline]
    pub fn index(&self, x: u32, y: u32) -> usize {
        (y * self.width + x) as usize
    }

    #[inline]
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32
    }

    /// Cell coordinates for a world position: `floor(p / cell_size) + BORDER`,
    /// clamped into the interior.
    pub fn cell_coords(&self, px: f32, py: f32) -> (u32, u32) {
        let raw_x = (px / self.cell_size).floor() as i64 + BORDER as i64;
        let raw_y = (py / self.cell_size).floor() as i64 + BORDER as i64;
        debug_assert!(
            raw_x >= 0
                && raw_x < self.width as i64
                && raw_y >= 0
                && raw_y < self.height as i64,
            "cell_coords: position ({}, {}) maps to ({}, {}) outside {}x{} grid",
            px,
            py,
            raw_x,
            raw_y,
            self.width,
            self.height
        );

        let x = raw_x.clamp(BORDER as i64, (self.width - 1 - BORDER) as i64) as u32;
        let y = raw_y.clamp(BORDER as i64, (self.height - 1 - BORDER) as i64) as u32;
        if x as i64 != raw_x || y as i64 != raw_y {
            log::warn!("body at ({}, {}) clamped into grid cell ({}, {})", px, py, x, y);
        }
        (x, y)
    }
}
