//! Debayering module for converting RGGB mosaics to RGB

pub mod binning_debayer;


pub use binning_debayer::{BinningDebayer, demosaic};
