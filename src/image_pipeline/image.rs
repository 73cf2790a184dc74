//! In-memory image model shared by every stage of the pipeline

pub mod types;
mod rotation;

#[cfg(test)]
mod tests;

pub use types::{Image, Pixel};
pub use rotation::{Rotation, rotate};
