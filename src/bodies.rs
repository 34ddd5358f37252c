use itertools::Itertools;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Supported observation targets: the seven planets, plus a couple
/// of named bright stars. Fixed catalog, never extended at runtime.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum CelestialBody {
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    /// Alpha Canis Majoris, brightest star of the night sky
    Sirius,
    /// Alpha Lyrae
    Vega,
}

impl CelestialBody {
    /// The seven planets, in heliocentric order.
    pub fn planets() -> &'static [CelestialBody] {
        &[
            Self::Mercury,
            Self::Venus,
            Self::Mars,
            Self::Jupiter,
            Self::Saturn,
            Self::Uranus,
            Self::Neptune,
        ]
    }

    /// Complete catalog, planets first.
    pub fn all() -> &'static [CelestialBody] {
        &[
            Self::Mercury,
            Self::Venus,
            Self::Mars,
            Self::Jupiter,
            Self::Saturn,
            Self::Uranus,
            Self::Neptune,
            Self::Sirius,
            Self::Vega,
        ]
    }

    /// Lowercase identifier, as accepted by [CelestialBody::from_str].
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Mercury => "mercury",
            Self::Venus => "venus",
            Self::Mars => "mars",
            Self::Jupiter => "jupiter",
            Self::Saturn => "saturn",
            Self::Uranus => "uranus",
            Self::Neptune => "neptune",
            Self::Sirius => "sirius",
            Self::Vega => "vega",
        }
    }

    /// True for the seven planets.
    pub const fn is_planet(&self) -> bool {
        !matches!(self, Self::Sirius | Self::Vega)
    }

    /// Comma separated list of all supported identifiers,
    /// used in the [Error::UnknownBody] message.
    pub(crate) fn catalog_csv() -> String {
        Self::all().iter().map(|body| body.name()).join(", ")
    }
}

impl std::str::FromStr for CelestialBody {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.to_lowercase();
        let trimmed = s.trim();
        match trimmed {
            "mercury" => Ok(Self::Mercury),
            "venus" => Ok(Self::Venus),
            "mars" => Ok(Self::Mars),
            "jupiter" => Ok(Self::Jupiter),
            "saturn" => Ok(Self::Saturn),
            "uranus" => Ok(Self::Uranus),
            "neptune" => Ok(Self::Neptune),
            "sirius" => Ok(Self::Sirius),
            "vega" => Ok(Self::Vega),
            _ => Err(Error::UnknownBody {
                name: trimmed.to_string(),
                catalog: Self::catalog_csv(),
            }),
        }
    }
}

impl std::fmt::Display for CelestialBody {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Mercury => write!(f, "Mercury"),
            Self::Venus => write!(f, "Venus"),
            Self::Mars => write!(f, "Mars"),
            Self::Jupiter => write!(f, "Jupiter"),
            Self::Saturn => write!(f, "Saturn"),
            Self::Uranus => write!(f, "Uranus"),
            Self::Neptune => write!(f, "Neptune"),
            Self::Sirius => write!(f, "Sirius"),
            Self::Vega => write!(f, "Vega"),
        }
    }
}
