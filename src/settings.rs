//! Fixed sampling parameters

use std::num::NonZeroU32;

/// Distance between two sampled pixels, in both dimensions
pub const SAMPLE_STRIDE: NonZeroU32 = NonZeroU32::MIN.saturating_add(9);

/// Number of colors reported when none is requested explicitly
pub const DEFAULT_COLOR_COUNT: usize = 5;
