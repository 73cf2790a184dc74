//! TIFF reading and writing module
//!
//! Loads 8-bit RGB or grayscale TIFF files and saves cut-outs as 8-bit RGB TIFF
//! with various compression options.

mod reader;
mod writer;
mod standard_tiff_writer;
mod tiff_image_reader;
pub mod types;


pub use reader::ImageReader;
pub use writer::ImageWriter;
pub use standard_tiff_writer::StandardTiffWriter;
pub use tiff_image_reader::TiffImageReader;
pub use types::TiffCompression;
