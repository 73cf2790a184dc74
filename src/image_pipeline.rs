//! Image processing pipeline module
//!
//! This module turns raw RGGB captures into subject cut-outs, with separate
//! modules for the image model, demosaicing, background removal, RAW, TIFF and
//! PNG loading and saving, and the orchestration that sequences them.

pub mod common;
pub mod image;
pub mod debayer;
pub mod background;
pub mod raw;
pub mod tiff_io;
pub mod png_io;
pub mod conversions;

pub use common::{
    PipelineError,
    Result,
};

pub use image::{
    Image,
    Pixel,
    Rotation,
    rotate,
};

pub use debayer::{
    BinningDebayer,
    demosaic,
};

pub use background::{
    BackgroundSubtractor,
    DistanceMetric,
    Threshold,
    remove_background,
};

pub use raw::{
    RawImageData,
    RawImageReader,
    RawLoaderReader,
};

pub use tiff_io::{
    ImageReader,
    ImageWriter,
    StandardTiffWriter,
    TiffCompression,
    TiffImageReader,
};

pub use png_io::{
    PngImageReader,
    PngImageWriter,
};

pub use conversions::{
    AutoImageReader,
    ConversionConfig,
    ConversionConfigBuilder,
    CutoutPipeline,
    CutoutSession,
    PipelineTimings,
};
