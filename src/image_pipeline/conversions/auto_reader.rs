use tracing::debug;

use crate::image_pipeline::{
    common::error::{PipelineError, Result},
    image::Image,
    png_io::{PNG_SIGNATURE, PngImageReader},
    raw::RawLoaderReader,
    tiff_io::{ImageReader, TiffImageReader},
};

const TIFF_LE: [u8; 4] = [b'I', b'I', 0x2A, 0x00];
const TIFF_BE: [u8; 4] = [b'M', b'M', 0x00, 0x2A];

/// Picks a decoder from the leading bytes of each file.
///
/// Most camera RAW formats are TIFF containers, so TIFF-signed data is offered to
/// the RAW decoder first and only read as a plain TIFF when no camera decoder
/// claims it. Anything that is neither PNG nor TIFF goes to the RAW decoder.
#[derive(Debug, Clone, Copy, Default)]
pub struct AutoImageReader;

impl ImageReader for AutoImageReader {
    fn read_image(&self, data: &[u8]) -> Result<Image> {
        if data.starts_with(&PNG_SIGNATURE) {
            debug!("Detected PNG data");
            return PngImageReader.read_image(data);
        }

        if data.starts_with(&TIFF_LE) || data.starts_with(&TIFF_BE) {
            return match RawLoaderReader.read_image(data) {
                Err(PipelineError::DecodeError(reason)) => {
                    debug!("No RAW decoder for TIFF data ({}), reading as plain TIFF", reason);
                    TiffImageReader.read_image(data)
                }
                other => other,
            };
        }

        debug!("Reading data as camera RAW");
        RawLoaderReader.read_image(data)
    }
}
