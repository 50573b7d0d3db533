//! Common types, traits, and error definitions for grid_localization
//!
//! This module provides the foundational building blocks used across
//! the mapping and localization components of this crate.

pub mod types;
pub mod traits;
pub mod error;

pub use types::*;
pub use traits::*;
pub use error::*;
