#![doc = include_str!("../README.md")]
#![cfg_attr(docrs, feature(doc_cfg))]

// private modules
mod bodies;
mod catalog;
mod cfg;
mod error;
mod observer;
mod planner;
mod skymap;
mod source;
mod timeline;
mod visibility;

pub mod constants;

#[cfg(test)]
mod tests;

// prelude
pub mod prelude {
    pub use crate::bodies::CelestialBody;
    pub use crate::catalog::{BodyProfile, Catalog};
    pub use crate::cfg::Config;
    pub use crate::constants::{
        BEST_TIME_WINDOW_HOURS, LOWEST_ALTITUDE_DEG, MIN_OBSERVABLE_ALTITUDE_DEG,
    };
    pub use crate::error::Error;
    pub use crate::observer::Observer;
    pub use crate::planner::{Batch, Planner, Report};
    pub use crate::skymap::{project, BackdropStar, SkyMap, SkyMark};
    pub use crate::source::{HorizontalFix, SkySource, SourceError};
    pub use crate::timeline::{sample_timeline, TimelineSample, TimelineSeries};
    pub use crate::visibility::{evaluate, find_best_time, VisibilityVerdict};
    // re-export
    pub use hifitime::{Duration, Epoch, TimeScale, Unit};
}

// pub export
pub use error::Error;
