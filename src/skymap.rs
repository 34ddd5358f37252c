//! 2D azimuth/altitude sky projection.
use rand::{rngs::SmallRng, Rng, SeedableRng};

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::{
    error::Error,
    prelude::{Catalog, CelestialBody, Config, Epoch, Observer, SkySource},
};

/// One catalog body placed on the sky map.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct SkyMark {
    /// Projected [CelestialBody]
    pub body: CelestialBody,
    /// Altitude in degrees
    pub altitude_deg: f64,
    /// Azimuth in degrees
    pub azimuth_deg: f64,
    /// Display label: name, with host constellation when the
    /// catalog has one
    pub label: String,
}

/// Decorative background point. Purely cosmetic, carries no
/// astronomical meaning.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct BackdropStar {
    /// Azimuth in degrees [0, 360)
    pub azimuth_deg: f64,
    /// Altitude in degrees [0, 90)
    pub altitude_deg: f64,
}

/// Complete projection at one instant: one [SkyMark] per requested
/// body, plus the decorative backdrop.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct SkyMap {
    /// Projection [Epoch]
    pub t: Epoch,
    /// One [SkyMark] per requested body, in request order
    pub marks: Vec<SkyMark>,
    /// Deterministic [BackdropStar] scatter
    pub backdrop: Vec<BackdropStar>,
}

/// Projects `bodies` onto the local horizontal plane at instant `t`.
///
/// The first provider failure aborts the whole projection: unlike the
/// sampling loops, the sky map is all-or-nothing for the requested set.
pub fn project<S: SkySource + ?Sized>(
    source: &S,
    bodies: &[CelestialBody],
    observer: &Observer,
    t: Epoch,
    catalog: &Catalog,
    cfg: &Config,
) -> Result<SkyMap, Error> {
    let mut marks = Vec::with_capacity(bodies.len());

    for body in bodies.iter().copied() {
        let fix = source
            .horizontal_at(body, t, observer)
            .map_err(|e| Error::Resolution { body, t, source: e })?;

        marks.push(SkyMark {
            body,
            altitude_deg: fix.altitude_deg,
            azimuth_deg: fix.azimuth_deg,
            label: catalog.profile(body).label(),
        });
    }

    Ok(SkyMap {
        t,
        marks,
        backdrop: backdrop(cfg.backdrop_stars, cfg.backdrop_seed),
    })
}

/// Uniform scatter over az [0, 360) x alt [0, 90), seeded so the
/// visual layer reproduces identically across runs.
fn backdrop(count: usize, seed: u64) -> Vec<BackdropStar> {
    let mut rng = SmallRng::seed_from_u64(seed);

    (0..count)
        .map(|_| BackdropStar {
            azimuth_deg: rng.random_range(0.0..360.0),
            altitude_deg: rng.random_range(0.0..90.0),
        })
        .collect()
}
