//! Find the most common colors of an image
//!
//! The image is decoded to RGB and sampled on a sparse grid (every 10th pixel in both dimensions).
//! Exact colors are counted, without any clustering, and the most frequent ones are ranked. The
//! sampling is deterministic, so the same image always gives the same answer.
//!
//! ```no_run
//! let palette = extract_colors::extract_top_colors("photo.png", 5)?;
//! for color in palette.iter() {
//!     println!("{}", color);
//! }
//! # Ok::<(), extract_colors::Error>(())
//! ```

#![deny(missing_docs)]

use std::num::NonZeroU32;
use std::path::Path;

use log::debug;

pub use cli::{Arguments, CLIParser};
pub use error::{Error, Result};
pub use palette::{Color, FrequencyTable, Palette, Report};
pub use raster::{open_image, Raster};
pub use sampler::SparseGrid;

mod cli;
mod error;
mod palette;
mod raster;
mod sampler;
pub mod settings;

/// Samples an image and ranks its colors by frequency
#[derive(Debug, Default, Clone, Copy)]
pub struct ColorSampler {
    grid: SparseGrid,
}

impl ColorSampler {
    /// Sampler visiting every `stride`-th pixel
    pub fn new(stride: NonZeroU32) -> Self {
        Self {
            grid: SparseGrid::new(stride),
        }
    }

    /// Decode the image at `path` and return its `num_colors` most frequent colors
    ///
    /// The file is closed before sampling starts. Nothing is returned if decoding fails.
    pub fn extract_top_colors<P: AsRef<Path>>(&self, path: P, num_colors: usize) -> Result<Palette> {
        let raster = open_image(path)?;
        Ok(self.rank(&raster, num_colors))
    }

    /// Return the `num_colors` most frequent colors of an already decoded raster
    pub fn rank<R: Raster + ?Sized>(&self, raster: &R, num_colors: usize) -> Palette {
        let table: FrequencyTable = self.grid.sample(raster).collect();
        debug!(
            "sampled {} pixels at stride {}, {} distinct colors",
            table.samples(),
            self.grid.stride(),
            table.len()
        );
        table.top(num_colors)
    }
}

/// Decode the image at `path` and return its `num_colors` most frequent colors, sampling every
/// 10th pixel
pub fn extract_top_colors<P: AsRef<Path>>(path: P, num_colors: usize) -> Result<Palette> {
    ColorSampler::default().extract_top_colors(path, num_colors)
}
