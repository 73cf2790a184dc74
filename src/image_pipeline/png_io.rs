//! PNG reading and writing module
//!
//! PNG is the format captures and backdrops are usually exchanged in. Readers
//! and writers here plug into the same [`ImageReader`](crate::image_pipeline::tiff_io::ImageReader)
//! and [`ImageWriter`](crate::image_pipeline::tiff_io::ImageWriter) traits as the TIFF ones.

mod png_image_reader;
mod png_image_writer;


pub use png_image_reader::PngImageReader;
pub use png_image_writer::PngImageWriter;

/// First eight bytes of every PNG stream
pub const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];
