use crate::error::{CoordinateError, Result};

/// Oblate-spheroid Earth model
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EllipsoidModel {
    pub equatorial_radius_km: f64,
    pub eccentricity: f64,
}

impl EllipsoidModel {
    /// Earth ellipsoid from Vallado, "Fundamentals of Astrodynamics and
    /// Applications" (4th ed.), pp. 174-175
    pub const EARTH: Self = Self {
        equatorial_radius_km: 6378.1363,
        eccentricity: 0.081819221456,
    };

    /// Create a validated ellipsoid model
    pub fn new(equatorial_radius_km: f64, eccentricity: f64) -> Result<Self> {
        if !(equatorial_radius_km.is_finite() && equatorial_radius_km > 0.0) {
            return Err(CoordinateError::InvalidRadius(equatorial_radius_km));
        }
        if !(eccentricity.is_finite() && (0.0..1.0).contains(&eccentricity)) {
            return Err(CoordinateError::InvalidEccentricity(eccentricity));
        }

        Ok(Self {
            equatorial_radius_km,
            eccentricity,
        })
    }

    pub fn eccentricity_squared(&self) -> f64 {
        self.eccentricity * self.eccentricity
    }

    /// `sqrt(1 - e^2 sin^2(lat))`
    pub fn curvature_denominator(&self, lat_rad: f64) -> f64 {
        let sin_lat = lat_rad.sin();
        (1.0 - self.eccentricity_squared() * (sin_lat * sin_lat)).sqrt()
    }

    /// Radius of curvature in the prime vertical at the given latitude (km)
    pub fn prime_vertical_radius(&self, lat_rad: f64) -> f64 {
        self.equatorial_radius_km / self.curvature_denominator(lat_rad)
    }

    /// Semi-minor axis (km)
    pub fn polar_radius_km(&self) -> f64 {
        self.equatorial_radius_km * (1.0 - self.eccentricity_squared()).sqrt()
    }
}

impl Default for EllipsoidModel {
    fn default() -> Self {
        Self::EARTH
    }
}
