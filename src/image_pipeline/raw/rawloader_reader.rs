//! RAW image reader implementation using the rawloader library.
//!
//! This module provides support for reading various RAW image formats (ARW, CR2, NEF, DNG, etc.)
//! using the rawloader library. It handles decoding RAW sensor data and extracting metadata
//! to properly represent the image data.

use std::io::Cursor;

use tracing::debug;
use rawloader::RawImageData as RawloaderImageData;
use crate::image_pipeline::common::error::{Result, PipelineError};
use crate::image_pipeline::image::Image;
use crate::image_pipeline::raw::types::RawImageData;
use crate::image_pipeline::raw::reader::RawImageReader;
use crate::image_pipeline::tiff_io::ImageReader;

/// RAW image reader that uses the rawloader library for decoding.
pub struct RawLoaderReader;

/// Default bit depth when no white level information is available from the RAW file.
const DEFAULT_BITS_PER_SAMPLE: u32 = 16;

const U16_BITS: u32 = 16;

impl RawImageReader for RawLoaderReader {
    /// Decodes a RAW file into single-channel sensor samples.
    ///
    /// Float data (normalized 0.0-1.0) is scaled to the full u16 range. The bit
    /// depth of integer data is derived from the largest white level the decoder
    /// reports.
    fn read_raw(&self, data: &[u8]) -> Result<RawImageData> {
        debug!("Decoding RAW image, {} bytes", data.len());

        let decoded = rawloader::decode(&mut Cursor::new(data))
            .map_err(|e| PipelineError::DecodeError(e.to_string()))?;

        if decoded.cpp != 1 {
            return Err(PipelineError::UnsupportedFormat(format!(
                "{} components per pixel, expected a single-channel mosaic",
                decoded.cpp
            )));
        }

        let width = decoded.width;
        let height = decoded.height;
        debug!("Decoded image: {}x{} ({})", width, height, decoded.cfa.name);

        let is_float = matches!(decoded.data, RawloaderImageData::Float(_));
        let data: Vec<u16> = match decoded.data {
            RawloaderImageData::Integer(values) => values,
            RawloaderImageData::Float(values) => {
                values.iter().map(|&v| (v.clamp(0.0, 1.0) * u16::MAX as f32) as u16).collect()
            }
        };

        let bits_per_sample = bits_per_sample(is_float, &decoded.whitelevels);

        debug!("Calculated bits_per_sample: {} (white levels: {:?})", bits_per_sample, decoded.whitelevels);

        Ok(RawImageData {
            width,
            height,
            data,
            bits_per_sample,
            cfa: decoded.cfa.name.clone(),
        })
    }
}

impl ImageReader for RawLoaderReader {
    fn read_image(&self, data: &[u8]) -> Result<Image> {
        self.read_raw(data)?.to_mosaic()
    }
}

/// Significant bits per stored sample.
///
/// Float samples have already been scaled to the full u16 range, so their white
/// level no longer applies.
pub(super) fn bits_per_sample(is_float: bool, whitelevels: &[u16]) -> u32 {
    if is_float {
        return U16_BITS;
    }

    // e.g. white level 4095 -> 12 bits, 16383 -> 14 bits
    let max_white_level = whitelevels.iter().max().copied().unwrap_or(u16::MAX);
    if max_white_level == 0 {
        DEFAULT_BITS_PER_SAMPLE
    } else {
        U16_BITS - max_white_level.leading_zeros()
    }
}
