#[cfg(feature = "serde")]
use serde::Serialize;

use crate::prelude::CelestialBody;

/// Static observation metadata attached to one catalog body.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct BodyProfile {
    /// Described [CelestialBody]
    pub body: CelestialBody,
    /// Typical apparent magnitude (lower is brighter)
    pub magnitude: f64,
    /// Recommended equipment for a rewarding observation
    pub equipment: &'static str,
    /// Host constellation, for bodies that have a fixed one
    pub constellation: Option<&'static str>,
}

impl BodyProfile {
    /// Sky map label: `"Name (Constellation)"` when the catalog
    /// carries a constellation entry, plain name otherwise.
    pub fn label(&self) -> String {
        match self.constellation {
            Some(constellation) => format!("{} ({})", self.body, constellation),
            None => self.body.to_string(),
        }
    }
}

/// Read-only catalog: one [BodyProfile] per supported body,
/// in [CelestialBody::all] order. Loaded once per session.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    profiles: Vec<BodyProfile>,
}

fn profile_of(body: CelestialBody) -> BodyProfile {
    let (magnitude, equipment, constellation) = match body {
        CelestialBody::Mercury => (0.2, "naked eye, right after sunset or before sunrise", None),
        CelestialBody::Venus => (-4.4, "naked eye", None),
        CelestialBody::Mars => (0.7, "naked eye, 100 mm telescope for surface detail", None),
        CelestialBody::Jupiter => (-2.2, "binoculars reveal the Galilean moons", None),
        CelestialBody::Saturn => (0.5, "60 mm telescope or more for the rings", None),
        CelestialBody::Uranus => (5.7, "binoculars or small telescope", None),
        CelestialBody::Neptune => (7.8, "100 mm telescope or more", None),
        CelestialBody::Sirius => (-1.46, "naked eye", Some("Canis Major")),
        CelestialBody::Vega => (0.03, "naked eye", Some("Lyra")),
    };

    BodyProfile {
        body,
        magnitude,
        equipment,
        constellation,
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

impl Catalog {
    /// Builds the complete [Catalog], planets first.
    pub fn new() -> Self {
        Self {
            profiles: CelestialBody::all()
                .iter()
                .copied()
                .map(profile_of)
                .collect(),
        }
    }

    /// [BodyProfile] for this body. The catalog is complete:
    /// every supported body has a profile.
    pub fn profile(&self, body: CelestialBody) -> BodyProfile {
        profile_of(body)
    }

    /// Iterates all [BodyProfile]s in catalog order.
    pub fn profiles(&self) -> impl Iterator<Item = &BodyProfile> {
        self.profiles.iter()
    }
}
