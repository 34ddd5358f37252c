use thiserror::Error;

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::prelude::{CelestialBody, Epoch, Observer};

/// Provider side failure, reported by [SkySource] implementations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SourceError {
    /// This source does not track the requested body.
    /// Sources must support at least the seven planets,
    /// named stars are optional.
    #[error("body not supported by this source")]
    Unsupported,

    /// The source failed to produce a fix for this (body, instant,
    /// observer) triplet. Possibly transient.
    #[error("{0}")]
    Resolution(String),
}

/// One body resolved at one instant, in the local horizontal frame.
/// Ephemeral: recomputed on demand, never cached across calls.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct HorizontalFix {
    /// Angle above the local horizon, in degrees [-90, 90]
    pub altitude_deg: f64,
    /// Compass bearing, in degrees [0, 360), measured from north
    pub azimuth_deg: f64,
}

impl HorizontalFix {
    /// Builds a new [HorizontalFix] from altitude and azimuth, both in degrees.
    pub fn new(altitude_deg: f64, azimuth_deg: f64) -> Self {
        Self {
            altitude_deg,
            azimuth_deg,
        }
    }
}

impl std::fmt::Display for HorizontalFix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "alt={:.2}°, az={:.2}°",
            self.altitude_deg, self.azimuth_deg
        )
    }
}

/// Any position provider should implement the [SkySource] trait to serve
/// the sampling and search operations of this crate.
pub trait SkySource {
    /// Resolve one [CelestialBody] at [Epoch] `t`, as seen by `observer`,
    /// into local horizontal coordinates.
    ///
    /// `t` is always an absolute instant: implementations must not
    /// reinterpret it through a local wall clock. Calls are synchronous
    /// and the crate never retries: answer or fail, per request.
    ///
    /// Sampling loops tolerate isolated failures (see [SourceError]),
    /// a failing implementation degrades results but never aborts a batch.
    fn horizontal_at(
        &self,
        body: CelestialBody,
        t: Epoch,
        observer: &Observer,
    ) -> Result<HorizontalFix, SourceError>;
}
