use std::io::Cursor;

use tiff::ColorType;
use tiff::decoder::{Decoder, DecodingResult};
use tracing::debug;

use crate::image_pipeline::common::error::{PipelineError, Result};
use crate::image_pipeline::image::Image;
use crate::image_pipeline::tiff_io::reader::ImageReader;

/// Reads 8-bit TIFF files.
///
/// RGB files load as-is. Grayscale files are taken to be an undemosaiced RGGB
/// capture and are expanded so each site holds its own channel.
pub struct TiffImageReader;

impl ImageReader for TiffImageReader {
    fn read_image(&self, data: &[u8]) -> Result<Image> {
        debug!("Decoding TIFF image, {} bytes", data.len());

        let mut decoder = Decoder::new(Cursor::new(data))
            .map_err(|e| PipelineError::DecodeError(e.to_string()))?;
        let (width, height) = decoder
            .dimensions()
            .map_err(|e| PipelineError::DecodeError(e.to_string()))?;
        let color_type = decoder
            .colortype()
            .map_err(|e| PipelineError::DecodeError(e.to_string()))?;
        let (width, height) = (width as usize, height as usize);

        debug!("TIFF is {}x{} {:?}", width, height, color_type);

        let samples = match decoder
            .read_image()
            .map_err(|e| PipelineError::DecodeError(e.to_string()))?
        {
            DecodingResult::U8(samples) => samples,
            _ => {
                return Err(PipelineError::UnsupportedFormat(format!(
                    "{color_type:?} samples, expected 8 bits per channel"
                )));
            }
        };

        match color_type {
            ColorType::RGB(8) => Image::from_rgb_bytes(width, height, &samples),
            ColorType::Gray(8) => {
                let wide: Vec<u16> = samples.iter().map(|&v| v as u16).collect();
                Image::from_mosaic(width, height, &wide, 8)
            }
            other => Err(PipelineError::UnsupportedFormat(format!("{other:?}"))),
        }
    }
}
