use thiserror::Error;

use crate::{
    prelude::{CelestialBody, Epoch},
    source::SourceError,
};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Requested body is not part of the supported catalog.
    /// The message enumerates all valid identifiers: this error is
    /// always raised prior to any sampling attempt.
    #[error("'{name}' is not recognized, try one of: {catalog}")]
    UnknownBody {
        /// Identifier as typed by the user
        name: String,
        /// Comma separated list of supported identifiers
        catalog: String,
    },

    /// The position provider could not resolve this body at this instant.
    /// Possibly transient (missing ephemeris span, network backed sources..):
    /// scoped to one body and one query, never fatal to a batch.
    #[error("failed to resolve {body} at {t}: {source}")]
    Resolution {
        /// Requested [CelestialBody]
        body: CelestialBody,
        /// Requested [Epoch]
        t: Epoch,
        /// Provider side failure
        source: SourceError,
    },

    /// Latitude outside [-90°, 90°]
    #[error("invalid latitude: {0}°")]
    InvalidLatitude(f64),

    /// Longitude outside [-180°, 180°]
    #[error("invalid longitude: {0}°")]
    InvalidLongitude(f64),

    /// Timeline window must span a (strictly) positive number of days.
    #[error("timeline window must be positive")]
    EmptyTimeline,
}
