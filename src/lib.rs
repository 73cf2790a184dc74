//! Cut-out pipeline for raw RGGB captures: a 2x2 binning demosaic followed by
//! backdrop-referenced background removal.

pub mod image_pipeline;
pub mod logger;
