use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::image::Image;

/// Turns encoded file bytes into an [`Image`].
pub trait ImageReader {
    fn read_image(&self, data: &[u8]) -> Result<Image>;
}
