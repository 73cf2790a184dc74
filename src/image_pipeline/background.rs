//! Backdrop-referenced background removal

pub mod types;
mod subtractor;

#[cfg(test)]
mod tests;

pub use types::{DistanceMetric, Threshold};
pub use subtractor::{BackgroundSubtractor, remove_background};
