//! Column bands for the threaded broad phase.
//!
//! The interior columns are split into contiguous bands of at least
//! [`MIN_BAND_WIDTH`] columns. A band sweeping `start..end` touches bodies in
//! columns `start - 1..=end`, so two bands with another band of width >= 2
//! between them never share a body. Bands therefore run in two phases, even
//! indices first, then odd; bands inside a phase are independent.

use std::ops::Range;

pub const MIN_BAND_WIDTH: u32 = 2;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BandPlan {
    bands: Vec<Range<u32>>,
}

impl BandPlan {
    /// Split `interior` into at most `workers` bands.
    pub fn new(interior: Range<u32>, workers: usize) -> Self {
        let columns = interior.end.saturating_sub(interior.start);
        if columns == 0 {
            return Self { bands: Vec::new() };
        }

        let count = (workers as u32).min(columns / MIN_BAND_WIDTH).max(1);
        let base = columns / count;
        let extra = columns % count;

        let mut bands = Vec::with_capacity(count as usize);
        let mut start = interior.start;
        for i in 0..count {
            let width = base + u32::from(i < extra);
            bands.push(start..start + width);
            start += width;
        }
        debug_assert_eq!(start, interior.end);

        Self { bands }
    }

    pub fn bands(&self) -> &[Range<u32>] {
        &self.bands
    }

    pub fn len(&self) -> usize {
        self.bands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bands.is_empty()
    }

    /// Bands of one phase: `parity` 0 gives even indices, 1 odd.
    pub fn phase(&self, parity: usize) -> impl Iterator<Item = &Range<u32>> + '_ {
        self.bands.iter().skip(parity).step_by(2)
    }
}
