pub mod coordinate;
pub mod error;

pub use coordinate::{
    llh_to_ecef, llh_to_ecef_with, EcefCoordinate, EllipsoidModel, GeodeticCoordinate,
};
pub use error::{CoordinateError, Result};
