//! RAW image data types

use crate::image_pipeline::common::error::{PipelineError, Result};
use crate::image_pipeline::image::Image;

/// Represents decoded RAW image data
#[derive(Debug, Clone)]
pub struct RawImageData {
    /// Width of the image in pixels
    pub width: usize,
    /// Height of the image in pixels
    pub height: usize,
    /// Raw pixel data (single channel Bayer pattern)
    pub data: Vec<u16>,
    /// Actual bits per sample from the sensor (e.g., 12, 14, or 16)
    pub bits_per_sample: u32,
    /// Color filter layout reported by the decoder, e.g. "RGGB"
    pub cfa: String,
}

impl RawImageData {
    /// Expands the sensor samples into an 8-bit mosaic [`Image`].
    ///
    /// Only RGGB sensors are accepted.
    pub fn to_mosaic(&self) -> Result<Image> {
        if !self.cfa.eq_ignore_ascii_case("RGGB") {
            return Err(PipelineError::UnsupportedFormat(format!(
                "color filter array {} (only RGGB is supported)",
                self.cfa
            )));
        }
        Image::from_mosaic(self.width, self.height, &self.data, self.bits_per_sample)
    }
}
