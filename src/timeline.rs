//! Altitude versus time series, for charting front ends.
use log::debug;

use hifitime::Unit;

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::{
    constants::HOURS_PER_DAY,
    error::Error,
    prelude::{CelestialBody, Epoch, Observer, SkySource},
};

/// One timeline slot.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct TimelineSample {
    /// Sampled [Epoch]
    pub t: Epoch,
    /// Altitude in degrees. Exactly 0.0 for slots whose resolution
    /// failed (see [sample_timeline]).
    pub altitude_deg: f64,
}

/// Chronological altitude series for one body, one per requested body.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct TimelineSeries {
    /// Charted [CelestialBody]
    pub body: CelestialBody,
    /// Hourly [TimelineSample]s, in chronological order
    pub samples: Vec<TimelineSample>,
}

impl TimelineSeries {
    /// Number of slots in the series.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// True when the series holds no slot.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Earliest sample of maximum altitude, None on an empty series.
    pub fn peak(&self) -> Option<&TimelineSample> {
        let mut peak: Option<&TimelineSample> = None;
        for sample in self.samples.iter() {
            match peak {
                Some(best) if sample.altitude_deg <= best.altitude_deg => {},
                _ => peak = Some(sample),
            }
        }
        peak
    }
}

/// Samples `body`'s altitude at whole hour steps over a multi day
/// window: `floor(days * 24) + 1` slots, from `start` included.
///
/// `days` must be strictly positive, fractional values are accepted.
///
/// A slot whose resolution fails is recorded at exactly 0.0° rather
/// than omitted, so the slot still occupies its place in the series
/// and chart continuity is preserved. Distinct policy from
/// [find_best_time](crate::prelude::find_best_time), which skips:
/// the asymmetry is intentional, do not unify.
pub fn sample_timeline<S: SkySource + ?Sized>(
    source: &S,
    body: CelestialBody,
    start: Epoch,
    observer: &Observer,
    days: f64,
) -> Result<TimelineSeries, Error> {
    if days <= 0.0 {
        return Err(Error::EmptyTimeline);
    }

    let hours = (days * HOURS_PER_DAY).floor() as u32;

    let mut samples = Vec::with_capacity(hours as usize + 1);

    for k in 0..=hours {
        let t = start + (k as f64) * Unit::Hour;

        let altitude_deg = match source.horizontal_at(body, t, observer) {
            Ok(fix) => fix.altitude_deg,
            Err(e) => {
                debug!("{} ({}) zero-filled slot: {}", t, body, e);
                0.0
            },
        };

        samples.push(TimelineSample { t, altitude_deg });
    }

    Ok(TimelineSeries { body, samples })
}
