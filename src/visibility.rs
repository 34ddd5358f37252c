//! Single instant visibility verdict and best-time search.
use log::debug;

use hifitime::Unit;

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::{
    constants::{BEST_TIME_WINDOW_HOURS, LOWEST_ALTITUDE_DEG, MIN_OBSERVABLE_ALTITUDE_DEG},
    error::Error,
    prelude::{CelestialBody, Epoch, HorizontalFix, Observer, SkySource},
};

/// Outcome of one visibility query: fresh per query, discarded
/// after presentation.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct VisibilityVerdict {
    /// [HorizontalFix] at the query instant
    pub fix: HorizontalFix,
    /// True when the altitude exceeds
    /// [MIN_OBSERVABLE_ALTITUDE_DEG](crate::constants::MIN_OBSERVABLE_ALTITUDE_DEG)
    pub visible: bool,
    /// Best sampled instant within the next 24 hours
    pub best_instant: Epoch,
    /// Altitude at [Self::best_instant], in degrees. Maximum over the
    /// sampled window: may still sit below the observation threshold
    /// when no visibility window exists in the next 24 hours.
    pub best_altitude_deg: f64,
}

/// Resolves `body` at instant `t` and packages a [VisibilityVerdict],
/// including the best observation time over the next 24 hours.
///
/// A provider failure at the query instant surfaces as
/// [Error::Resolution], scoped to this body only. A degraded best-time
/// search does not fail the evaluation: see [find_best_time].
pub fn evaluate<S: SkySource + ?Sized>(
    source: &S,
    body: CelestialBody,
    t: Epoch,
    observer: &Observer,
) -> Result<VisibilityVerdict, Error> {
    let fix = source
        .horizontal_at(body, t, observer)
        .map_err(|e| Error::Resolution { body, t, source: e })?;

    let (best_instant, best_altitude_deg) = find_best_time(source, body, t, observer);

    Ok(VisibilityVerdict {
        fix,
        visible: fix.altitude_deg > MIN_OBSERVABLE_ALTITUDE_DEG,
        best_instant,
        best_altitude_deg,
    })
}

/// Searches the instant of maximum altitude over `[start, start +24h]`,
/// sampled at whole hour steps (25 candidates, both bounds included).
///
/// Failed samples are silently skipped (best effort policy: one bad
/// sample must not block discovery of the best time among the rest).
/// On exact altitude ties the earliest instant wins. If every single
/// sample fails, returns `(start, -90°)`.
pub fn find_best_time<S: SkySource + ?Sized>(
    source: &S,
    body: CelestialBody,
    start: Epoch,
    observer: &Observer,
) -> (Epoch, f64) {
    let mut best_t = start;
    let mut best_altitude_deg = LOWEST_ALTITUDE_DEG;

    for k in 0..=BEST_TIME_WINDOW_HOURS {
        let t = start + (k as f64) * Unit::Hour;

        match source.horizontal_at(body, t, observer) {
            Ok(fix) => {
                if fix.altitude_deg > best_altitude_deg {
                    best_altitude_deg = fix.altitude_deg;
                    best_t = t;
                }
            },
            Err(e) => {
                debug!("{} ({}) sample skipped: {}", t, body, e);
            },
        }
    }

    (best_t, best_altitude_deg)
}
