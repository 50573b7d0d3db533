//! grid_localization - grid-based Bayesian localization building blocks
//!
//! This crate provides the action-model half of a grid-based Bayesian
//! localization filter: a discrete grid view over a continuous line-segment
//! obstacle map, a belief distribution over grid positions, and a
//! deterministic motion update that moves probability mass one cell per
//! commanded step, respecting which cells and transitions the map allows.

// Core modules
pub mod common;
pub mod utils;

// Algorithm modules
pub mod mapping;
pub mod localization;

// Re-export common types for convenience
pub use common::{Point2D, Pose2D, BoundingBox, Heading};
pub use common::{ObstacleMap, GridMap, ActionModel};
pub use common::{LocalizationError, LocalizationResult};
pub use mapping::{LineMap, LineSegment, DiscreteGridMap};
pub use localization::{BeliefGrid, DeterministicActionModel};
