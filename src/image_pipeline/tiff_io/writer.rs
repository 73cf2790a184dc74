use std::io::Write;
use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::conversions::ConversionConfig;
use crate::image_pipeline::image::Image;

pub trait ImageWriter {
    fn write_image(&self, image: &Image, output: &mut dyn Write, config: &ConversionConfig) -> Result<()>;
}
