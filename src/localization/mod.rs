// Grid localization module

pub mod grid_distribution;
pub mod action_model;

// Re-exports
pub use grid_distribution::BeliefGrid;
pub use action_model::DeterministicActionModel;
