use std::num::NonZeroU32;

use image::Rgb;
use itertools::Itertools;

use crate::raster::Raster;
use crate::settings;

/// Sparse, deterministic grid of sample points
///
/// Visits every `stride`-th column starting at 0 and, inside each column, every `stride`-th row
/// starting at 0. The same raster always yields the same samples in the same order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SparseGrid {
    stride: NonZeroU32,
}

impl SparseGrid {
    /// Create a grid with the given stride
    pub fn new(stride: NonZeroU32) -> Self {
        Self { stride }
    }

    /// Distance between two sample points
    pub fn stride(&self) -> u32 {
        self.stride.get()
    }

    /// Number of sample points a raster of the given size produces
    pub fn sample_count(&self, width: u32, height: u32) -> usize {
        let along = |len: u32| len.div_ceil(self.stride()) as usize;
        along(width) * along(height)
    }

    /// Coordinates of all sample points, column-major
    pub fn points(&self, width: u32, height: u32) -> impl Iterator<Item = (u32, u32)> {
        let step = self.stride() as usize;
        (0..width)
            .step_by(step)
            .cartesian_product((0..height).step_by(step))
    }

    /// Colors at all sample points of `raster`
    pub fn sample<'a, R>(&self, raster: &'a R) -> impl Iterator<Item = Rgb<u8>> + 'a
    where
        R: Raster + ?Sized,
    {
        let (width, height) = raster.dimensions();
        self.points(width, height)
            .map(move |(x, y)| raster.pixel_at(x, y))
    }
}

impl Default for SparseGrid {
    fn default() -> Self {
        Self::new(settings::SAMPLE_STRIDE)
    }
}
