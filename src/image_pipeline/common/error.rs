use thiserror::Error;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Failed to read input file: {0}")]
    InputReadError(String),

    #[error("Failed to write output file: {0}")]
    OutputWriteError(String),

    #[error("Failed to decode image: {0}")]
    DecodeError(String),

    #[error("Failed to encode TIFF image: {0}")]
    EncodeError(String),

    #[error("Invalid image dimensions: width={0}, height={1}")]
    InvalidDimensions(usize, usize),

    #[error("Pixel buffer holds {actual} pixels, expected {expected}")]
    BufferSizeMismatch { expected: usize, actual: usize },

    #[error("Bayer mosaic must have even dimensions, got odd {which} ({width}x{height})")]
    OddDimensions {
        which: &'static str,
        width: usize,
        height: usize,
    },

    #[error("Foreground is {fg_width}x{fg_height} but background is {bg_width}x{bg_height}")]
    DimensionMismatch {
        fg_width: usize,
        fg_height: usize,
        bg_width: usize,
        bg_height: usize,
    },

    #[error("Threshold {0} is outside 0..=100")]
    InvalidThreshold(i32),

    #[error("Rotation of {0} degrees is not a multiple of 90")]
    InvalidRotation(i32),

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PipelineError>;
