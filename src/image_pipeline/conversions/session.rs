use tracing::{debug, warn};

use crate::image_pipeline::{
    background::{BackgroundSubtractor, DistanceMetric, Threshold},
    common::error::Result,
    image::{Image, Pixel, Rotation, rotate},
};

/// Everything an interactive viewer keeps between user actions: the current
/// subject image, the backdrop, the last cut-out and the control values.
///
/// The cut-out is recomputed whenever an input or a control changes and both
/// images are present. If a recompute fails the previous cut-out stays in place,
/// the image that caused it is discarded and the error is returned to the caller.
#[derive(Debug, Clone, Default)]
pub struct CutoutSession {
    input: Option<Image>,
    backdrop: Option<Image>,
    output: Option<Image>,
    rotation: Rotation,
    threshold: Threshold,
    marker: Option<Pixel>,
    metric: DistanceMetric,
}

impl CutoutSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_metric(metric: DistanceMetric) -> Self {
        Self {
            metric,
            ..Self::default()
        }
    }

    /// Stores a new subject image. It is rotated to the session's current orientation.
    ///
    /// If the new image cannot be paired with the backdrop, the previous input is restored.
    pub fn load_input(&mut self, image: Image) -> Result<()> {
        let previous = self.input.replace(rotate(&image, self.rotation));
        if let Err(e) = self.refresh() {
            self.input = previous;
            return Err(e);
        }
        Ok(())
    }

    /// Stores a new backdrop image. It is rotated to the session's current orientation.
    ///
    /// If the new image cannot be paired with the input, the previous backdrop is restored.
    pub fn load_backdrop(&mut self, image: Image) -> Result<()> {
        let previous = self.backdrop.replace(rotate(&image, self.rotation));
        if let Err(e) = self.refresh() {
            self.backdrop = previous;
            return Err(e);
        }
        Ok(())
    }

    /// Out-of-range values are rejected and leave the session untouched.
    pub fn set_threshold(&mut self, threshold: i32) -> Result<()> {
        self.threshold = Threshold::new(threshold)?;
        self.refresh()
    }

    pub fn set_marker(&mut self, marker: Pixel) -> Result<()> {
        self.marker = Some(marker);
        self.refresh()
    }

    /// Turns every held image a further 90 degrees clockwise so they stay aligned.
    pub fn rotate(&mut self) {
        self.rotation = self.rotation.next();
        for image in [&mut self.input, &mut self.backdrop, &mut self.output] {
            if let Some(current) = image.take() {
                *image = Some(rotate(&current, Rotation::Cw90));
            }
        }
        debug!("Session rotated to {} degrees", self.rotation.degrees());
    }

    pub fn input(&self) -> Option<&Image> {
        self.input.as_ref()
    }

    pub fn backdrop(&self) -> Option<&Image> {
        self.backdrop.as_ref()
    }

    pub fn output(&self) -> Option<&Image> {
        self.output.as_ref()
    }

    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    pub fn threshold(&self) -> Threshold {
        self.threshold
    }

    pub fn marker(&self) -> Pixel {
        self.marker.unwrap_or(Pixel::DEFAULT_MARKER)
    }

    fn refresh(&mut self) -> Result<()> {
        let (Some(input), Some(backdrop)) = (&self.input, &self.backdrop) else {
            return Ok(());
        };

        match BackgroundSubtractor::new(self.metric).process(input, backdrop, self.threshold, self.marker()) {
            Ok(output) => {
                self.output = Some(output);
                Ok(())
            }
            Err(e) => {
                warn!("Keeping previous cut-out: {}", e);
                Err(e)
            }
        }
    }
}
