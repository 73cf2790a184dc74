use std::io::Write;

use tracing::debug;

use crate::image_pipeline::common::error::{PipelineError, Result};
use crate::image_pipeline::conversions::ConversionConfig;
use crate::image_pipeline::image::Image;
use crate::image_pipeline::tiff_io::{ImageWriter, TiffCompression};

/// Writes 8-bit RGB PNG files.
///
/// PNG is always deflated, so the configured compression only picks the effort level.
pub struct PngImageWriter;

impl ImageWriter for PngImageWriter {
    fn write_image(&self, image: &Image, output: &mut dyn Write, config: &ConversionConfig) -> Result<()> {
        debug!("Encoding PNG image: {}x{}", image.width(), image.height());

        let width = u32::try_from(image.width())
            .map_err(|_| PipelineError::InvalidDimensions(image.width(), image.height()))?;
        let height = u32::try_from(image.height())
            .map_err(|_| PipelineError::InvalidDimensions(image.width(), image.height()))?;

        let mut buffer = Vec::new();
        {
            let mut encoder = png::Encoder::new(&mut buffer, width, height);
            encoder.set_color(png::ColorType::Rgb);
            encoder.set_depth(png::BitDepth::Eight);
            encoder.set_compression(match config.compression {
                TiffCompression::None | TiffCompression::DeflateFast => png::Compression::Fast,
                TiffCompression::DeflateBest => png::Compression::Best,
                TiffCompression::Lzw | TiffCompression::DeflateBalanced => png::Compression::Default,
            });

            let mut writer = encoder
                .write_header()
                .map_err(|e| PipelineError::EncodeError(e.to_string()))?;
            writer
                .write_image_data(&image.to_rgb_bytes())
                .map_err(|e| PipelineError::EncodeError(e.to_string()))?;
            writer
                .finish()
                .map_err(|e| PipelineError::EncodeError(e.to_string()))?;
        }

        output.write_all(&buffer)?;

        debug!("PNG encoding complete, {} bytes", buffer.len());
        Ok(())
    }
}
