// Mapping module: continuous obstacle map and its grid discretisation

pub mod line_map;
pub mod grid_map;

// Re-exports
pub use line_map::{LineMap, LineSegment};
pub use grid_map::DiscreteGridMap;
