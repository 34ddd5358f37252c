use std::collections::HashMap;

use hifitime::Unit;

use crate::prelude::{CelestialBody, Epoch, HorizontalFix, Observer, SkySource, SourceError};

/// Scripted [SkySource]: fixes keyed by (body, whole hours since `start`).
/// Unscripted pairs and off-grid instants fail with
/// [SourceError::Resolution].
pub struct ScriptedSky {
    start: Epoch,
    map: HashMap<(CelestialBody, u32), HorizontalFix>,
}

impl ScriptedSky {
    pub fn new(start: Epoch) -> Self {
        Self {
            start,
            map: HashMap::new(),
        }
    }

    /// Scripts hourly altitudes for one body, hour 0 first.
    /// Azimuth is synthesized as a 15°/h eastward sweep.
    pub fn with_altitudes(mut self, body: CelestialBody, altitudes: &[f64]) -> Self {
        for (k, altitude) in altitudes.iter().enumerate() {
            let azimuth = (k as f64 * 15.0) % 360.0;
            self.map
                .insert((body, k as u32), HorizontalFix::new(*altitude, azimuth));
        }
        self
    }

    /// Drops one scripted hour, making that single sample fail.
    pub fn without_hour(mut self, body: CelestialBody, hour: u32) -> Self {
        self.map.remove(&(body, hour));
        self
    }
}

impl SkySource for ScriptedSky {
    fn horizontal_at(
        &self,
        body: CelestialBody,
        t: Epoch,
        _observer: &Observer,
    ) -> Result<HorizontalFix, SourceError> {
        let elapsed_h = (t - self.start).to_unit(Unit::Hour);
        let k = elapsed_h.round();

        if (elapsed_h - k).abs() > 1.0E-9 || k < 0.0 {
            return Err(SourceError::Resolution(format!("off-grid instant {}", t)));
        }

        self.map
            .get(&(body, k as u32))
            .copied()
            .ok_or_else(|| SourceError::Resolution(format!("no sample for {} at {}", body, t)))
    }
}

/// Constant [SkySource]: every body sits at the same fix, forever.
pub struct ConstantSky {
    pub fix: HorizontalFix,
}

impl ConstantSky {
    pub fn new(altitude_deg: f64, azimuth_deg: f64) -> Self {
        Self {
            fix: HorizontalFix::new(altitude_deg, azimuth_deg),
        }
    }
}

impl SkySource for ConstantSky {
    fn horizontal_at(
        &self,
        _body: CelestialBody,
        _t: Epoch,
        _observer: &Observer,
    ) -> Result<HorizontalFix, SourceError> {
        Ok(self.fix)
    }
}

/// [SkySource] in permanent outage.
pub struct FailingSky {}

impl SkySource for FailingSky {
    fn horizontal_at(
        &self,
        _body: CelestialBody,
        _t: Epoch,
        _observer: &Observer,
    ) -> Result<HorizontalFix, SourceError> {
        Err(SourceError::Resolution("scripted outage".to_string()))
    }
}

/// [SkySource] that must never be reached: proves input validation
/// fails fast, prior to any sampling.
pub struct PanicSky {}

impl SkySource for PanicSky {
    fn horizontal_at(
        &self,
        body: CelestialBody,
        t: Epoch,
        _observer: &Observer,
    ) -> Result<HorizontalFix, SourceError> {
        panic!("source reached for {} at {}", body, t);
    }
}
