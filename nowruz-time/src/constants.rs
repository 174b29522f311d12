pub const J2000_JD: f64 = 2451545.0;

pub const UNIX_EPOCH_JD: f64 = 2440587.5;

pub const MJD_ZERO_POINT: f64 = 2_400_000.5;

pub const SECONDS_PER_DAY: i64 = 86_400;

pub const SECONDS_PER_DAY_F64: f64 = 86_400.0;

pub const SECONDS_TO_DAYS: f64 = 1.0 / 86_400.0;

pub const MINUTES_PER_DAY: i32 = 1440;

/// First Julian Day Number of the Gregorian calendar reform
/// (1582-10-15). Below this the Julian calendar rules apply when
/// converting a Julian Day to a civil date.
pub const GREGORIAN_REFORM_JD: i64 = 2_299_161;
