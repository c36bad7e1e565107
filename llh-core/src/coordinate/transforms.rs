use nalgebra::Vector3;
use tracing::trace;

use super::ellipsoid::EllipsoidModel;

/// Geodetic coordinates (Latitude, Longitude, Height above ellipsoid)
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeodeticCoordinate {
    pub lat_deg: f64,
    pub lon_deg: f64,
    pub height_km: f64,
}

impl GeodeticCoordinate {
    pub fn new(lat_deg: f64, lon_deg: f64, height_km: f64) -> Self {
        Self {
            lat_deg,
            lon_deg,
            height_km,
        }
    }

    /// Outward unit normal to the ellipsoid at this latitude/longitude
    pub fn surface_normal(&self) -> Vector3<f64> {
        let lat_rad = self.lat_deg.to_radians();
        let lon_rad = self.lon_deg.to_radians();

        Vector3::new(
            lat_rad.cos() * lon_rad.cos(),
            lat_rad.cos() * lon_rad.sin(),
            lat_rad.sin(),
        )
    }
}

/// ECEF coordinates (Earth-Centered, Earth-Fixed), kilometers
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EcefCoordinate {
    pub x_km: f64,
    pub y_km: f64,
    pub z_km: f64,
}

impl EcefCoordinate {
    /// Distance from Earth's center (km)
    pub fn norm_km(&self) -> f64 {
        Vector3::from(*self).norm()
    }
}

impl From<EcefCoordinate> for Vector3<f64> {
    fn from(ecef: EcefCoordinate) -> Self {
        Vector3::new(ecef.x_km, ecef.y_km, ecef.z_km)
    }
}

impl From<Vector3<f64>> for EcefCoordinate {
    fn from(v: Vector3<f64>) -> Self {
        Self {
            x_km: v.x,
            y_km: v.y,
            z_km: v.z,
        }
    }
}

/// Convert LLH to ECEF on the default Earth ellipsoid
pub fn llh_to_ecef(llh: &GeodeticCoordinate) -> EcefCoordinate {
    llh_to_ecef_with(llh, &EllipsoidModel::EARTH)
}

/// Convert LLH to ECEF on the given ellipsoid
///
/// Total over finite inputs. Latitude and longitude are not range checked,
/// and NaN or infinite inputs propagate into the result.
pub fn llh_to_ecef_with(llh: &GeodeticCoordinate, ellipsoid: &EllipsoidModel) -> EcefCoordinate {
    let lat_rad = llh.lat_deg.to_radians();
    let lon_rad = llh.lon_deg.to_radians();

    let sin_lat = lat_rad.sin();
    let cos_lat = lat_rad.cos();
    let sin_lon = lon_rad.sin();
    let cos_lon = lon_rad.cos();

    let c_e = ellipsoid.prime_vertical_radius(lat_rad);
    let e2 = ellipsoid.eccentricity_squared();

    let x = (c_e + llh.height_km) * cos_lat * cos_lon;
    let y = (c_e + llh.height_km) * cos_lat * sin_lon;
    let z = (c_e * (1.0 - e2) + llh.height_km) * sin_lat;

    trace!(?llh, x, y, z, "converted llh to ecef");

    EcefCoordinate {
        x_km: x,
        y_km: y,
        z_km: z,
    }
}
