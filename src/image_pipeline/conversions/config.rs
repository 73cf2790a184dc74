//! Cut-out pipeline configuration types

use crate::image_pipeline::background::{DistanceMetric, Threshold};
use crate::image_pipeline::image::{Pixel, Rotation};
use crate::image_pipeline::tiff_io::TiffCompression;

/// Configuration for a cut-out conversion
#[derive(Debug, Clone)]
pub struct ConversionConfig {
    /// Compression method to use
    pub compression: TiffCompression,
    /// Predictor value for compression (typically 2 for horizontal differencing)
    pub predictor: Option<u16>,
    /// Whether to validate image dimensions before processing
    pub validate_dimensions: bool,
    /// Largest accepted width or height of a loaded image
    pub max_dimension: Option<usize>,
    /// Whether loaded images are RGGB mosaics that must be demosaiced first
    pub debayer: bool,
    /// Background sensitivity
    pub threshold: Threshold,
    /// Color painted over background pixels
    pub marker: Pixel,
    /// Rotation applied to every loaded image after demosaicing
    pub rotation: Rotation,
    pub metric: DistanceMetric,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            compression: TiffCompression::None,
            predictor: None,
            validate_dimensions: true,
            max_dimension: Some(50000),
            debayer: true,
            threshold: Threshold::default(),
            marker: Pixel::DEFAULT_MARKER,
            rotation: Rotation::None,
            metric: DistanceMetric::default(),
        }
    }
}

impl ConversionConfig {
    pub fn builder() -> ConversionConfigBuilder {
        ConversionConfigBuilder::default()
    }
}

/// Builder for ConversionConfig
#[derive(Default)]
pub struct ConversionConfigBuilder {
    compression: Option<TiffCompression>,
    predictor: Option<Option<u16>>,
    validate_dimensions: Option<bool>,
    max_dimension: Option<Option<usize>>,
    debayer: Option<bool>,
    threshold: Option<Threshold>,
    marker: Option<Pixel>,
    rotation: Option<Rotation>,
    metric: Option<DistanceMetric>,
}

impl ConversionConfigBuilder {
    pub fn compression(mut self, compression: TiffCompression) -> Self {
        self.compression = Some(compression);
        self
    }

    pub fn predictor(mut self, predictor: Option<u16>) -> Self {
        self.predictor = Some(predictor);
        self
    }

    pub fn validate_dimensions(mut self, validate: bool) -> Self {
        self.validate_dimensions = Some(validate);
        self
    }

    pub fn max_dimension(mut self, max: Option<usize>) -> Self {
        self.max_dimension = Some(max);
        self
    }

    pub fn debayer(mut self, enable: bool) -> Self {
        self.debayer = Some(enable);
        self
    }

    pub fn threshold(mut self, threshold: Threshold) -> Self {
        self.threshold = Some(threshold);
        self
    }

    pub fn marker(mut self, marker: Pixel) -> Self {
        self.marker = Some(marker);
        self
    }

    pub fn rotation(mut self, rotation: Rotation) -> Self {
        self.rotation = Some(rotation);
        self
    }

    pub fn metric(mut self, metric: DistanceMetric) -> Self {
        self.metric = Some(metric);
        self
    }

    pub fn build(self) -> ConversionConfig {
        let default = ConversionConfig::default();
        ConversionConfig {
            compression: self.compression.unwrap_or(default.compression),
            predictor: self.predictor.unwrap_or(default.predictor),
            validate_dimensions: self.validate_dimensions.unwrap_or(default.validate_dimensions),
            max_dimension: self.max_dimension.unwrap_or(default.max_dimension),
            debayer: self.debayer.unwrap_or(default.debayer),
            threshold: self.threshold.unwrap_or(default.threshold),
            marker: self.marker.unwrap_or(default.marker),
            rotation: self.rotation.unwrap_or(default.rotation),
            metric: self.metric.unwrap_or(default.metric),
        }
    }
}
