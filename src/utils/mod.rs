//! Utility modules for grid_localization

pub mod visualization;

pub use visualization::{MapVisualizer, colors};
