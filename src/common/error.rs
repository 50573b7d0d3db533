//! Error types for grid_localization

use std::fmt;

/// Main error type for grid localization operations
#[derive(Debug)]
pub enum LocalizationError {
    /// A construction parameter violates its contract
    InvalidParameter(String),
    /// A belief grid does not match the grid map it is used with
    DimensionMismatch(String),
    /// Total probability mass is zero, so the distribution cannot be normalized
    UnnormalizableDistribution(String),
    /// Visualization error
    VisualizationError(String),
}

impl fmt::Display for LocalizationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LocalizationError::InvalidParameter(msg) => {
                write!(f, "Invalid parameter: {}", msg)
            }
            LocalizationError::DimensionMismatch(msg) => {
                write!(f, "Dimension mismatch: {}", msg)
            }
            LocalizationError::UnnormalizableDistribution(msg) => {
                write!(f, "Unnormalizable distribution: {}", msg)
            }
            LocalizationError::VisualizationError(msg) => {
                write!(f, "Visualization error: {}", msg)
            }
        }
    }
}

impl std::error::Error for LocalizationError {}

/// Result type alias for grid localization operations
pub type LocalizationResult<T> = Result<T, LocalizationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = LocalizationError::InvalidParameter("cell size must be positive".to_string());
        assert_eq!(format!("{}", err), "Invalid parameter: cell size must be positive");
    }

    #[test]
    fn test_unnormalizable_display() {
        let err = LocalizationError::UnnormalizableDistribution("total mass is zero".to_string());
        assert_eq!(
            format!("{}", err),
            "Unnormalizable distribution: total mass is zero"
        );
    }
}
