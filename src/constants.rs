/// Altitude above which a body is considered practically observable, in degrees.
/// Below that, atmospheric extinction and ground obstruction make
/// observation pointless for casual equipment.
pub const MIN_OBSERVABLE_ALTITUDE_DEG: f64 = 10.0;

/// Lowest physically possible altitude (nadir), in degrees.
pub const LOWEST_ALTITUDE_DEG: f64 = -90.0;

/// Highest physically possible altitude (zenith), in degrees.
pub const HIGHEST_ALTITUDE_DEG: f64 = 90.0;

/// Rolling window explored by the best-time search, in whole hours.
/// The search samples `BEST_TIME_WINDOW_HOURS + 1` instants (both bounds included).
pub const BEST_TIME_WINDOW_HOURS: u32 = 24;

/// Hours per day, for timeline window conversion.
pub const HOURS_PER_DAY: f64 = 24.0;
