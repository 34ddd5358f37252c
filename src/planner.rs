//! Observation planning facade.
use std::str::FromStr;

use itertools::{Either, Itertools};
use log::{debug, info};

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::{
    constants::MIN_OBSERVABLE_ALTITUDE_DEG,
    error::Error,
    prelude::{
        evaluate, project, sample_timeline, BodyProfile, Catalog, CelestialBody, Config, Epoch,
        Observer, SkyMap, SkySource, TimelineSeries, VisibilityVerdict,
    },
};

/// Visibility query result for one body: the [VisibilityVerdict]
/// merged with the static catalog metadata.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Report {
    /// Queried [CelestialBody]
    pub body: CelestialBody,
    /// [VisibilityVerdict] at the query instant
    pub verdict: VisibilityVerdict,
    /// Catalog [BodyProfile]
    pub profile: BodyProfile,
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.verdict.visible {
            writeln!(
                f,
                "{} is visible! altitude {:.2}°, azimuth {:.2}°",
                self.body, self.verdict.fix.altitude_deg, self.verdict.fix.azimuth_deg
            )?;
        } else {
            writeln!(
                f,
                "{} is not visible: altitude {:.2}° (below {}° or horizon)",
                self.body, self.verdict.fix.altitude_deg, MIN_OBSERVABLE_ALTITUDE_DEG
            )?;
        }

        writeln!(
            f,
            "best time (next 24h): {} at {:.2}°",
            self.verdict.best_instant, self.verdict.best_altitude_deg
        )?;

        write!(
            f,
            "magnitude {:.2}, {}",
            self.profile.magnitude, self.profile.equipment
        )
    }
}

/// Batched visibility query outcome: failures are collected,
/// never abort the surviving bodies.
#[derive(Debug, Clone, PartialEq)]
pub struct Batch {
    /// One [Report] per successfully resolved body, in request order
    pub reports: Vec<Report>,
    /// Per body failures, in request order
    pub failures: Vec<Error>,
}

/// [Planner] wraps a [SkySource] with the catalog and session
/// parametrization, and serves all front end queries. Synchronous:
/// one request at a time, batches iterate sequentially.
pub struct Planner<S: SkySource> {
    /// Session parametrization
    pub cfg: Config,
    /// Observation site
    observer: Observer,
    /// Static catalog
    catalog: Catalog,
    /// Position provider
    source: S,
}

impl<S: SkySource> Planner<S> {
    /// Builds a new [Planner].
    /// ## Inputs
    /// - cfg: session [Config]
    /// - observer: observation site, immutable for the whole session
    /// - source: [SkySource] the consumer provides, typically an adapter
    ///   over an ephemeris engine
    pub fn new(cfg: &Config, observer: Observer, source: S) -> Self {
        info!("observer at {}", observer);

        Self {
            observer,
            source,
            cfg: cfg.clone(),
            catalog: Catalog::new(),
        }
    }

    /// Observation site of this session.
    pub fn observer(&self) -> &Observer {
        &self.observer
    }

    /// Static [Catalog] served to front ends.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Resolves a user supplied identifier against the catalog.
    /// Fails with [Error::UnknownBody] (enumerating the catalog)
    /// before any provider call.
    pub fn resolve(&self, name: &str) -> Result<CelestialBody, Error> {
        CelestialBody::from_str(name)
    }

    /// Single body visibility query at instant `t`.
    pub fn check(&self, name: &str, t: Epoch) -> Result<Report, Error> {
        let body = self.resolve(name)?;

        let verdict = evaluate(&self.source, body, t, &self.observer)?;

        Ok(Report {
            body,
            verdict,
            profile: self.catalog.profile(body),
        })
    }

    /// Batched visibility query: each body is checked independently,
    /// failures are collected and do not abort the rest (dashboard
    /// front end policy).
    pub fn check_all<I>(&self, names: I, t: Epoch) -> Batch
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let (reports, failures): (Vec<_>, Vec<_>) = names
            .into_iter()
            .map(|name| self.check(name.as_ref(), t))
            .partition_map(|res| match res {
                Ok(report) => Either::Left(report),
                Err(e) => Either::Right(e),
            });

        debug!(
            "{} batch: {} resolved, {} failed",
            t,
            reports.len(),
            failures.len()
        );

        Batch { reports, failures }
    }

    /// Altitude timeline from `start`, over the [Config::timeline_days]
    /// window.
    pub fn timeline(&self, name: &str, start: Epoch) -> Result<TimelineSeries, Error> {
        self.timeline_over(name, start, self.cfg.timeline_days)
    }

    /// Altitude timeline from `start` over a custom window, in days.
    pub fn timeline_over(
        &self,
        name: &str,
        start: Epoch,
        days: f64,
    ) -> Result<TimelineSeries, Error> {
        let body = self.resolve(name)?;
        sample_timeline(&self.source, body, start, &self.observer, days)
    }

    /// Projects the requested bodies onto a [SkyMap] at instant `t`.
    /// All or nothing: the first failure aborts the projection.
    pub fn sky_map<I>(&self, names: I, t: Epoch) -> Result<SkyMap, Error>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let bodies = names
            .into_iter()
            .map(|name| self.resolve(name.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;

        project(
            &self.source,
            &bodies,
            &self.observer,
            t,
            &self.catalog,
            &self.cfg,
        )
    }
}
