use crate::{
    prelude::{sample_timeline, CelestialBody, Epoch, Error, Observer, Unit},
    tests::{
        data::{FailingSky, ScriptedSky},
        init_logger, new_delhi, t0,
    },
};

use rstest::*;

#[fixture]
fn build_observer() -> Observer {
    new_delhi()
}

#[fixture]
fn build_t0() -> Epoch {
    t0()
}

fn ramp(len: usize) -> Vec<f64> {
    (0..len).map(|k| k as f64).collect()
}

#[test]
fn test_one_day_window() {
    init_logger();

    let observer = build_observer();
    let t = build_t0();

    let sky = ScriptedSky::new(t).with_altitudes(CelestialBody::Saturn, &ramp(25));

    let series = sample_timeline(&sky, CelestialBody::Saturn, t, &observer, 1.0).unwrap();

    assert_eq!(series.body, CelestialBody::Saturn);
    assert_eq!(series.len(), 25);

    for (k, sample) in series.samples.iter().enumerate() {
        assert_eq!(sample.t, t + (k as f64) * Unit::Hour);
        assert_eq!(sample.altitude_deg, k as f64);
    }
}

#[test]
fn test_failed_slot_is_zero_filled() {
    init_logger();

    let observer = build_observer();
    let t = build_t0();

    let sky = ScriptedSky::new(t)
        .with_altitudes(CelestialBody::Saturn, &ramp(25))
        .without_hour(CelestialBody::Saturn, 5);

    let series = sample_timeline(&sky, CelestialBody::Saturn, t, &observer, 1.0).unwrap();

    // slot preserved, anchored at zero: never omitted
    assert_eq!(series.len(), 25);
    assert_eq!(series.samples[5].t, t + 5.0 * Unit::Hour);
    assert_eq!(series.samples[5].altitude_deg, 0.0);
    assert_eq!(series.samples[6].altitude_deg, 6.0);
}

#[test]
fn test_total_outage_still_fills_every_slot() {
    init_logger();

    let observer = build_observer();
    let t = build_t0();

    let sky = FailingSky {};

    let series = sample_timeline(&sky, CelestialBody::Mercury, t, &observer, 1.0).unwrap();

    assert_eq!(series.len(), 25);
    assert!(series.samples.iter().all(|s| s.altitude_deg == 0.0));
}

#[test]
fn test_fractional_days() {
    init_logger();

    let observer = build_observer();
    let t = build_t0();

    let sky = ScriptedSky::new(t).with_altitudes(CelestialBody::Saturn, &ramp(64));

    // floor(1.5 * 24) + 1 = 37 slots
    let series = sample_timeline(&sky, CelestialBody::Saturn, t, &observer, 1.5).unwrap();
    assert_eq!(series.len(), 37);

    let series = sample_timeline(&sky, CelestialBody::Saturn, t, &observer, 2.0).unwrap();
    assert_eq!(series.len(), 49);
}

#[test]
fn test_rejected_windows() {
    init_logger();

    let observer = build_observer();
    let t = build_t0();

    let sky = FailingSky {};

    for days in [0.0, -1.0] {
        assert_eq!(
            sample_timeline(&sky, CelestialBody::Saturn, t, &observer, days),
            Err(Error::EmptyTimeline)
        );
    }
}

#[test]
fn test_chronological_ordering() {
    init_logger();

    let observer = build_observer();
    let t = build_t0();

    let sky = ScriptedSky::new(t).with_altitudes(CelestialBody::Venus, &ramp(73));

    let series = sample_timeline(&sky, CelestialBody::Venus, t, &observer, 3.0).unwrap();

    for window in series.samples.windows(2) {
        assert!(window[0].t < window[1].t);
    }
}

#[test]
fn test_peak_resolves_to_earliest() {
    init_logger();

    let observer = build_observer();
    let t = build_t0();

    let mut altitudes = vec![0.0; 25];
    altitudes[2] = 30.0;
    altitudes[9] = 30.0;

    let sky = ScriptedSky::new(t).with_altitudes(CelestialBody::Venus, &altitudes);

    let series = sample_timeline(&sky, CelestialBody::Venus, t, &observer, 1.0).unwrap();

    let peak = series.peak().unwrap();
    assert_eq!(peak.t, t + 2.0 * Unit::Hour);
    assert_eq!(peak.altitude_deg, 30.0);
}
