use std::io::Cursor;

use tracing::debug;

use crate::image_pipeline::common::error::{PipelineError, Result};
use crate::image_pipeline::image::Image;
use crate::image_pipeline::tiff_io::ImageReader;

/// Reads PNG files into 8-bit images.
///
/// Palette and low bit depths are expanded and 16-bit samples are reduced to
/// their high byte. RGB and RGBA files load as-is (alpha is dropped). Grayscale
/// files are taken to be an undemosaiced RGGB capture and are expanded so each
/// site holds its own channel, as with grayscale TIFF.
pub struct PngImageReader;

impl ImageReader for PngImageReader {
    fn read_image(&self, data: &[u8]) -> Result<Image> {
        debug!("Decoding PNG image, {} bytes", data.len());

        let mut decoder = png::Decoder::new(Cursor::new(data));
        decoder.set_transformations(png::Transformations::EXPAND | png::Transformations::STRIP_16);

        let mut reader = decoder
            .read_info()
            .map_err(|e| PipelineError::DecodeError(e.to_string()))?;

        let mut buf = vec![0u8; reader.output_buffer_size()];
        let frame = reader
            .next_frame(&mut buf)
            .map_err(|e| PipelineError::DecodeError(e.to_string()))?;
        let bytes = &buf[..frame.buffer_size()];

        let width = frame.width as usize;
        let height = frame.height as usize;
        debug!("PNG is {}x{} {:?}", width, height, frame.color_type);

        if frame.bit_depth != png::BitDepth::Eight {
            return Err(PipelineError::UnsupportedFormat(format!(
                "PNG bit depth {:?} after expansion",
                frame.bit_depth
            )));
        }

        match frame.color_type {
            png::ColorType::Rgb => Image::from_rgb_bytes(width, height, bytes),
            png::ColorType::Rgba => {
                let rgb: Vec<u8> = bytes
                    .chunks_exact(4)
                    .flat_map(|rgba| [rgba[0], rgba[1], rgba[2]])
                    .collect();
                Image::from_rgb_bytes(width, height, &rgb)
            }
            png::ColorType::Grayscale => {
                let wide: Vec<u16> = bytes.iter().map(|&v| v as u16).collect();
                Image::from_mosaic(width, height, &wide, 8)
            }
            png::ColorType::GrayscaleAlpha => {
                let wide: Vec<u16> = bytes.chunks_exact(2).map(|ga| ga[0] as u16).collect();
                Image::from_mosaic(width, height, &wide, 8)
            }
            other => Err(PipelineError::UnsupportedFormat(format!("PNG color type {other:?}"))),
        }
    }
}
