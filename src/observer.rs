#[cfg(feature = "serde")]
use serde::Serialize;

use crate::error::Error;

/// Geodetic observation site. Immutable once constructed,
/// one instance per session.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Observer {
    /// Latitude, in degrees [-90, 90]
    pub latitude_deg: f64,
    /// Longitude, in degrees [-180, 180]
    pub longitude_deg: f64,
    /// Altitude above sea level, in meters
    pub altitude_m: f64,
}

impl Observer {
    /// Builds a new [Observer] from latitude [ddeg],
    /// longitude [ddeg] and altitude above sea level [m].
    /// Out of range coordinates are rejected.
    pub fn new(latitude_deg: f64, longitude_deg: f64, altitude_m: f64) -> Result<Self, Error> {
        if !(-90.0..=90.0).contains(&latitude_deg) {
            return Err(Error::InvalidLatitude(latitude_deg));
        }

        if !(-180.0..=180.0).contains(&longitude_deg) {
            return Err(Error::InvalidLongitude(longitude_deg));
        }

        Ok(Self {
            latitude_deg,
            longitude_deg,
            altitude_m,
        })
    }
}

impl std::fmt::Display for Observer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "lat={:.4}°, lon={:.4}°, alt={:.1}m",
            self.latitude_deg, self.longitude_deg, self.altitude_m
        )
    }
}
