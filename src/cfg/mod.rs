#[cfg(feature = "serde")]
use serde::Deserialize;

fn default_timeline_days() -> f64 {
    1.0
}

fn default_backdrop_stars() -> usize {
    150
}

fn default_backdrop_seed() -> u64 {
    42
}

/// Session parametrization. All fields have sensible defaults,
/// front ends usually only override `timeline_days`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize))]
pub struct Config {
    /// Timeline window, in days. Practically bounded to 1-3 by front
    /// ends, any strictly positive value is accepted.
    #[cfg_attr(feature = "serde", serde(default = "default_timeline_days"))]
    pub timeline_days: f64,

    /// Number of decorative background points scattered on sky maps.
    #[cfg_attr(feature = "serde", serde(default = "default_backdrop_stars"))]
    pub backdrop_stars: usize,

    /// Seed of the backdrop scatter. Fixed, so the decorative layer
    /// reproduces identically across runs.
    #[cfg_attr(feature = "serde", serde(default = "default_backdrop_seed"))]
    pub backdrop_seed: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            timeline_days: default_timeline_days(),
            backdrop_stars: default_backdrop_stars(),
            backdrop_seed: default_backdrop_seed(),
        }
    }
}

impl Config {
    /// Returns [Config] preset for multi night planning, with desired
    /// window in days. You can then customize [Self] as you will.
    pub fn multi_night_preset(timeline_days: f64) -> Self {
        let mut s = Self::default();
        s.timeline_days = timeline_days;
        s
    }
}
