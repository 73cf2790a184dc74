//! Pipeline conversions module
//!
//! This module contains the orchestration logic that sequences loading,
//! demosaicing, rotation, background removal and saving.

mod auto_reader;
mod config;
mod cutout;
mod session;
mod timing;


pub use auto_reader::AutoImageReader;
pub use config::{ConversionConfig, ConversionConfigBuilder};
pub use cutout::CutoutPipeline;
pub use session::CutoutSession;
pub use timing::{PipelineTimings, StepTiming, Timer};
