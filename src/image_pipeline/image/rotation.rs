//! Quarter-turn rotation

use tracing::debug;

use crate::image_pipeline::common::error::{PipelineError, Result};
use crate::image_pipeline::image::types::{Image, Pixel};

/// Clockwise rotation by a multiple of 90 degrees
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Rotation {
    #[default]
    None,
    Cw90,
    Cw180,
    Cw270,
}

impl Rotation {
    /// Accepts any multiple of 90, negative values turn counter-clockwise.
    pub fn from_degrees(degrees: i32) -> Result<Self> {
        if degrees % 90 != 0 {
            return Err(PipelineError::InvalidRotation(degrees));
        }
        Ok(match degrees.rem_euclid(360) {
            0 => Rotation::None,
            90 => Rotation::Cw90,
            180 => Rotation::Cw180,
            _ => Rotation::Cw270,
        })
    }

    pub fn degrees(self) -> i32 {
        match self {
            Rotation::None => 0,
            Rotation::Cw90 => 90,
            Rotation::Cw180 => 180,
            Rotation::Cw270 => 270,
        }
    }

    /// One more quarter turn clockwise.
    pub fn next(self) -> Self {
        match self {
            Rotation::None => Rotation::Cw90,
            Rotation::Cw90 => Rotation::Cw180,
            Rotation::Cw180 => Rotation::Cw270,
            Rotation::Cw270 => Rotation::None,
        }
    }
}

/// Returns a rotated copy of `image`. Quarter turns swap width and height.
pub fn rotate(image: &Image, rotation: Rotation) -> Image {
    let (width, height) = image.dimensions();
    if rotation == Rotation::None {
        return image.clone();
    }

    debug!("Rotating {}x{} image by {} degrees", width, height, rotation.degrees());

    let (out_width, out_height) = match rotation {
        Rotation::Cw90 | Rotation::Cw270 => (height, width),
        _ => (width, height),
    };

    let mut pixels: Vec<Pixel> = Vec::with_capacity(width * height);
    for y in 0..out_height {
        for x in 0..out_width {
            let source = match rotation {
                Rotation::Cw90 => image.pixel(y, height - 1 - x),
                Rotation::Cw180 => image.pixel(width - 1 - x, height - 1 - y),
                Rotation::Cw270 => image.pixel(width - 1 - y, x),
                Rotation::None => image.pixel(x, y),
            };
            pixels.push(source);
        }
    }

    Image::from_parts(out_width, out_height, pixels)
}
