use thiserror::Error;

/// Errors raised while building coordinate models
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoordinateError {
    #[error("Invalid equatorial radius: {0} km (must be finite and positive)")]
    InvalidRadius(f64),

    #[error("Invalid eccentricity: {0} (must be in [0, 1))")]
    InvalidEccentricity(f64),
}

pub type Result<T> = std::result::Result<T, CoordinateError>;
