//! 8-bit RGB image types

use crate::image_pipeline::common::error::{PipelineError, Result};

/// A single 8-bit RGB sample
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Pixel {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Pixel {
    pub const BLACK: Pixel = Pixel::new(0, 0, 0);

    /// Dark neutral gray painted over background pixels when no marker is given.
    pub const DEFAULT_MARKER: Pixel = Pixel::new(32, 32, 32);

    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }
}

/// Number of pixels in a `width` x `height` buffer, rejecting empty images and
/// sizes that could not be allocated.
fn pixel_count(width: usize, height: usize) -> Result<usize> {
    if width == 0 || height == 0 {
        return Err(PipelineError::InvalidDimensions(width, height));
    }

    width
        .checked_mul(height)
        .filter(|&count| count <= isize::MAX as usize / std::mem::size_of::<Pixel>())
        .ok_or(PipelineError::InvalidDimensions(width, height))
}

/// Rectangular, row-major RGB buffer with the origin at the top-left.
///
/// An `Image` cannot be modified once built; transforms always return a new one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    width: usize,
    height: usize,
    pixels: Vec<Pixel>,
}

impl Image {
    /// Wraps a pixel buffer.
    ///
    /// # Errors
    ///
    /// * `InvalidDimensions` - either dimension is zero
    /// * `BufferSizeMismatch` - `pixels.len() != width * height`
    pub fn new(width: usize, height: usize, pixels: Vec<Pixel>) -> Result<Self> {
        let expected = pixel_count(width, height)?;
        if pixels.len() != expected {
            return Err(PipelineError::BufferSizeMismatch {
                expected,
                actual: pixels.len(),
            });
        }

        Ok(Self { width, height, pixels })
    }

    /// Used by transforms whose output size follows from an already valid input.
    pub(crate) fn from_parts(width: usize, height: usize, pixels: Vec<Pixel>) -> Self {
        debug_assert_eq!(pixels.len(), width * height);
        Self { width, height, pixels }
    }

    pub fn filled(width: usize, height: usize, pixel: Pixel) -> Result<Self> {
        let count = pixel_count(width, height)?;
        Ok(Self { width, height, pixels: vec![pixel; count] })
    }

    /// Builds an image from interleaved `[R, G, B, R, G, B, ...]` bytes.
    pub fn from_rgb_bytes(width: usize, height: usize, data: &[u8]) -> Result<Self> {
        if data.len() % 3 != 0 {
            return Err(PipelineError::BufferSizeMismatch {
                expected: width.saturating_mul(height).saturating_mul(3),
                actual: data.len(),
            });
        }

        let pixels = data
            .chunks_exact(3)
            .map(|rgb| Pixel::new(rgb[0], rgb[1], rgb[2]))
            .collect();
        Self::new(width, height, pixels)
    }

    /// Expands single-channel RGGB sensor samples into the positional RGB layout
    /// the demosaicer reads: each site carries its own channel, the other two are zero.
    ///
    /// Samples deeper than 8 bits are reduced by dropping their low bits.
    pub fn from_mosaic(width: usize, height: usize, data: &[u16], bits_per_sample: u32) -> Result<Self> {
        let shift = bits_per_sample.saturating_sub(8).min(8);

        let mut pixels = Vec::with_capacity(data.len());
        for (i, &sample) in data.iter().enumerate() {
            let value = (sample >> shift).min(u8::MAX as u16) as u8;
            let (x, y) = (i % width.max(1), i / width.max(1));
            let pixel = match (y % 2, x % 2) {
                (0, 0) => Pixel::new(value, 0, 0),
                (1, 1) => Pixel::new(0, 0, value),
                _ => Pixel::new(0, value, 0),
            };
            pixels.push(pixel);
        }

        Self::new(width, height, pixels)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    /// # Panics
    ///
    /// Panics if `(x, y)` lies outside the image.
    pub fn pixel(&self, x: usize, y: usize) -> Pixel {
        assert!(x < self.width && y < self.height, "pixel ({x}, {y}) out of bounds");
        self.pixels[y * self.width + x]
    }

    pub fn row(&self, y: usize) -> &[Pixel] {
        &self.pixels[y * self.width..(y + 1) * self.width]
    }

    pub fn rows(&self) -> std::slice::ChunksExact<'_, Pixel> {
        self.pixels.chunks_exact(self.width)
    }

    /// Interleaved `[R, G, B, ...]` bytes, the layout TIFF encoders expect.
    pub fn to_rgb_bytes(&self) -> Vec<u8> {
        self.pixels
            .iter()
            .flat_map(|p| [p.red, p.green, p.blue])
            .collect()
    }

    pub fn into_pixels(self) -> Vec<Pixel> {
        self.pixels
    }
}
