//! Threshold and distance types for background removal

use crate::image_pipeline::common::error::{PipelineError, Result};
use crate::image_pipeline::image::Pixel;

/// Sensitivity in percent of the metric's full range, `0..=100`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Threshold(u8);

impl Threshold {
    pub const MIN: Threshold = Threshold(0);
    pub const MAX: Threshold = Threshold(100);

    /// Rejects values outside `0..=100` instead of clamping them.
    pub fn new(value: i32) -> Result<Self> {
        if (0..=100).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(PipelineError::InvalidThreshold(value))
        }
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl Default for Threshold {
    fn default() -> Self {
        Threshold(10)
    }
}

impl TryFrom<i32> for Threshold {
    type Error = PipelineError;

    fn try_from(value: i32) -> Result<Self> {
        Self::new(value)
    }
}

/// How the three per-channel differences are folded into one distance.
///
/// A pixel is background when `distance <= threshold / 100 * max_distance`.
/// The comparison is exact integer arithmetic, so threshold 0 only matches
/// identical colors and threshold 100 matches everything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DistanceMetric {
    /// Largest absolute channel difference, `0..=255`
    #[default]
    Chebyshev,
    /// Sum of absolute channel differences, `0..=765`
    Manhattan,
    /// Straight-line distance in RGB space, `0..=255*sqrt(3)`
    Euclidean,
}

impl DistanceMetric {
    /// Distance in the metric's native scale. Euclidean reports the squared distance.
    #[inline]
    pub fn distance(self, a: Pixel, b: Pixel) -> u32 {
        let dr = a.red.abs_diff(b.red) as u32;
        let dg = a.green.abs_diff(b.green) as u32;
        let db = a.blue.abs_diff(b.blue) as u32;

        match self {
            DistanceMetric::Chebyshev => dr.max(dg).max(db),
            DistanceMetric::Manhattan => dr + dg + db,
            DistanceMetric::Euclidean => dr * dr + dg * dg + db * db,
        }
    }

    /// Whether `a` is within `threshold` of `b`.
    #[inline]
    pub fn within(self, a: Pixel, b: Pixel, threshold: Threshold) -> bool {
        let distance = self.distance(a, b) as u64;
        let t = threshold.value() as u64;

        match self {
            DistanceMetric::Chebyshev => distance * 100 <= t * 255,
            DistanceMetric::Manhattan => distance * 100 <= t * 765,
            DistanceMetric::Euclidean => distance * 10_000 <= t * t * 3 * 255 * 255,
        }
    }
}
