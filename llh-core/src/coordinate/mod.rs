//! Coordinate types and the geodetic to ECEF transform

mod ellipsoid;
mod transforms;

pub use ellipsoid::EllipsoidModel;
pub use transforms::{
    llh_to_ecef, llh_to_ecef_with,
    EcefCoordinate, GeodeticCoordinate,
};
