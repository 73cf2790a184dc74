use rayon::prelude::*;
use tracing::{debug, instrument};

use crate::image_pipeline::background::types::{DistanceMetric, Threshold};
use crate::image_pipeline::common::error::{PipelineError, Result};
use crate::image_pipeline::image::{Image, Pixel};

/// Replaces foreground pixels that match the backdrop with a flat marker color.
///
/// Each output pixel depends only on the two input pixels at the same position,
/// which keeps a full recompute cheap enough to follow a live threshold control.
#[derive(Debug, Clone, Copy, Default)]
pub struct BackgroundSubtractor {
    metric: DistanceMetric,
}

impl BackgroundSubtractor {
    pub fn new(metric: DistanceMetric) -> Self {
        Self { metric }
    }

    pub fn metric(&self) -> DistanceMetric {
        self.metric
    }

    #[instrument(skip_all, fields(width = foreground.width(), height = foreground.height(), threshold = threshold.value()))]
    pub fn process(
        &self,
        foreground: &Image,
        background: &Image,
        threshold: Threshold,
        marker: Pixel,
    ) -> Result<Image> {
        check_same_size(foreground, background)?;

        let width = foreground.width();
        let metric = self.metric;
        let mut pixels = foreground.pixels().to_vec();

        pixels
            .par_chunks_exact_mut(width)
            .zip(background.pixels().par_chunks_exact(width))
            .for_each(|(row, backdrop)| {
                for (pixel, &reference) in row.iter_mut().zip(backdrop) {
                    if metric.within(*pixel, reference, threshold) {
                        *pixel = marker;
                    }
                }
            });

        debug!("Background removed with {:?} metric", metric);
        Ok(Image::from_parts(width, foreground.height(), pixels))
    }

    /// Per-pixel classification, `true` where the pixel counts as background.
    pub fn mask(&self, foreground: &Image, background: &Image, threshold: Threshold) -> Result<Vec<bool>> {
        check_same_size(foreground, background)?;

        Ok(foreground
            .pixels()
            .par_iter()
            .zip(background.pixels().par_iter())
            .map(|(&fg, &bg)| self.metric.within(fg, bg, threshold))
            .collect())
    }

    pub fn count_background(&self, foreground: &Image, background: &Image, threshold: Threshold) -> Result<usize> {
        Ok(self
            .mask(foreground, background, threshold)?
            .into_iter()
            .filter(|&is_background| is_background)
            .count())
    }
}

/// Cuts the subject out of `foreground` using the default Chebyshev metric.
///
/// # Errors
///
/// * `InvalidThreshold` - `threshold` is outside `0..=100`
/// * `DimensionMismatch` - the two images differ in size
pub fn remove_background(
    foreground: &Image,
    background: &Image,
    threshold: i32,
    marker: Pixel,
) -> Result<Image> {
    let threshold = Threshold::new(threshold)?;
    BackgroundSubtractor::default().process(foreground, background, threshold, marker)
}

fn check_same_size(foreground: &Image, background: &Image) -> Result<()> {
    if foreground.dimensions() != background.dimensions() {
        return Err(PipelineError::DimensionMismatch {
            fg_width: foreground.width(),
            fg_height: foreground.height(),
            bg_width: background.width(),
            bg_height: background.height(),
        });
    }
    Ok(())
}
