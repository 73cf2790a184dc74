use rayon::prelude::*;
use tracing::{debug, instrument};

use crate::image_pipeline::common::error::{PipelineError, Result};
use crate::image_pipeline::image::{Image, Pixel};

/// Collapses every 2x2 RGGB block into one RGB pixel.
///
/// ```text
///  row y:    R  G
///  row y+1:  G  B
/// ```
///
/// Red comes from the top-left site, blue from the bottom-right one and green is
/// the floored mean of the two green sites. No neighbouring blocks are consulted,
/// so the output has half the resolution of the mosaic on both axes.
pub struct BinningDebayer;

impl BinningDebayer {
    pub fn new() -> Self {
        Self
    }

    #[instrument(skip(self, mosaic), fields(width = mosaic.width(), height = mosaic.height()))]
    pub fn process(&self, mosaic: &Image) -> Result<Image> {
        let (width, height) = mosaic.dimensions();
        check_even(width, height)?;

        let out_width = width / 2;
        let out_height = height / 2;
        debug!("Binning {}x{} mosaic into {}x{}", width, height, out_width, out_height);

        let mut pixels = vec![Pixel::BLACK; out_width * out_height];
        pixels
            .par_chunks_exact_mut(out_width)
            .enumerate()
            .for_each(|(out_y, out_row)| {
                let top = mosaic.row(out_y * 2);
                let bottom = mosaic.row(out_y * 2 + 1);

                for (out_x, out) in out_row.iter_mut().enumerate() {
                    let x = out_x * 2;
                    *out = bin_block(top[x], top[x + 1], bottom[x], bottom[x + 1]);
                }
            });

        Ok(Image::from_parts(out_width, out_height, pixels))
    }
}

impl Default for BinningDebayer {
    fn default() -> Self {
        Self::new()
    }
}

/// Demosaics an RGGB mosaic with [`BinningDebayer`].
///
/// # Errors
///
/// `OddDimensions` when the width or height cannot be tiled by 2x2 blocks.
pub fn demosaic(mosaic: &Image) -> Result<Image> {
    BinningDebayer::new().process(mosaic)
}

fn check_even(width: usize, height: usize) -> Result<()> {
    let which = match (width % 2 == 1, height % 2 == 1) {
        (false, false) => return Ok(()),
        (true, false) => "width",
        (false, true) => "height",
        (true, true) => "width and height",
    };
    Err(PipelineError::OddDimensions { which, width, height })
}

#[inline]
fn bin_block(red_site: Pixel, green_top: Pixel, green_bottom: Pixel, blue_site: Pixel) -> Pixel {
    let green = (green_top.green as u16 + green_bottom.green as u16) / 2;
    Pixel::new(red_site.red, green as u8, blue_site.blue)
}
