//! March-equinox instants.
//!
//! Two sources implement the same one-operation capability: a precise
//! finder that searches the Sun's apparent longitude for the equinox
//! crossing, and the Meeus low-precision polynomial. Which one an
//! estimator uses is fixed when it is built; a search failure downgrades
//! a single call, never the estimator.

use crate::solar::{apparent_longitude, wrap_signed};
use crate::terms::SolarEphemeris;
use crate::{EphemerisError, EphemerisResult};
use nowruz_time::{CivilDateTime, JulianDate};
use std::fmt;
use tracing::warn;

/// The search window opens at March 19 0h and spans three days.
const SEARCH_WINDOW_DAYS: f64 = 3.0;

const SCAN_STEP_DAYS: f64 = 0.25;

/// Bisection stops below a tenth of a second.
const BISECTION_TOLERANCE_DAYS: f64 = 1e-6;

/// Which source produced an instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Method {
    Ephemeris,
    Polynomial,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Ephemeris => "ephemeris",
            Method::Polynomial => "polynomial",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Method::Ephemeris => write!(f, "solar-longitude ephemeris (high accuracy)"),
            Method::Polynomial => write!(f, "polynomial approximation"),
        }
    }
}

/// Capability seam: one operation, find the March equinox of a year.
pub trait EquinoxSource {
    fn march_equinox(&self, year: i32) -> EphemerisResult<CivilDateTime>;
}

/// Searches `[March 19 0h, March 22 0h]` for the upward crossing of the
/// apparent solar longitude through 0 degrees, then bisects the bracket.
pub fn find_march_equinox(
    ephemeris: &SolarEphemeris,
    year: i32,
) -> EphemerisResult<JulianDate> {
    let start = JulianDate::from_calendar(year, 3, 19, 0, 0, 0.0);
    let offset_at = |days: f64| wrap_signed(apparent_longitude(ephemeris, start.add_days(days)));

    let mut lo = 0.0;
    let mut lo_offset = offset_at(lo);
    let mut bracket = None;
    let steps = (SEARCH_WINDOW_DAYS / SCAN_STEP_DAYS) as usize;
    for i in 1..=steps {
        let hi = i as f64 * SCAN_STEP_DAYS;
        let hi_offset = offset_at(hi);
        if lo_offset < 0.0 && hi_offset >= 0.0 {
            bracket = Some((lo, hi));
            break;
        }
        lo = hi;
        lo_offset = hi_offset;
    }

    let (mut lo, mut hi) = bracket.ok_or(EphemerisError::SearchFailed { year })?;
    while hi - lo > BISECTION_TOLERANCE_DAYS {
        let mid = 0.5 * (lo + hi);
        if offset_at(mid) < 0.0 {
            lo = mid;
        } else {
            hi = mid;
        }
    }

    Ok(start.add_days(0.5 * (lo + hi)))
}

/// Meeus low-precision vernal equinox, Julian Ephemeris Day.
pub fn meeus_equinox_jde(year: i32) -> f64 {
    let y = (year as f64 - 2000.0) / 1000.0;
    2451623.80984 + 365242.37404 * y + 0.05169 * y * y
        - 0.00411 * y * y * y
        - 0.00057 * y * y * y * y
}

/// Precise strategy over loaded reference data.
#[derive(Debug, Clone, Copy)]
pub struct PreciseFinder {
    ephemeris: &'static SolarEphemeris,
}

impl PreciseFinder {
    pub fn new(ephemeris: &'static SolarEphemeris) -> Self {
        Self { ephemeris }
    }
}

impl EquinoxSource for PreciseFinder {
    fn march_equinox(&self, year: i32) -> EphemerisResult<CivilDateTime> {
        let jd = find_march_equinox(self.ephemeris, year)?;
        Ok(CivilDateTime::from_julian_day(jd.to_f64()))
    }
}

/// Polynomial strategy; never fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct MeeusPolynomial;

impl MeeusPolynomial {
    pub fn equinox(&self, year: i32) -> CivilDateTime {
        CivilDateTime::from_julian_day(meeus_equinox_jde(year))
    }
}

impl EquinoxSource for MeeusPolynomial {
    fn march_equinox(&self, year: i32) -> EphemerisResult<CivilDateTime> {
        Ok(self.equinox(year))
    }
}

/// Equinox estimator with the strategy fixed at construction.
///
/// Build with [`with_default_source`](Self::with_default_source) to resolve
/// availability of the reference data once at startup, or pass the source
/// explicitly. The selected strategy is reported by
/// [`method`](Self::method); a per-call search failure falls back to the
/// polynomial and is reported through the returned [`Method`].
pub struct EquinoxEstimator {
    precise: Option<PreciseFinder>,
}

impl EquinoxEstimator {
    pub fn new(source: Option<&'static SolarEphemeris>) -> Self {
        Self {
            precise: source.map(PreciseFinder::new),
        }
    }

    pub fn with_default_source() -> Self {
        Self::new(SolarEphemeris::get())
    }

    /// Strategy selected at construction.
    pub fn method(&self) -> Method {
        if self.precise.is_some() {
            Method::Ephemeris
        } else {
            Method::Polynomial
        }
    }

    /// UTC instant of the March equinox, with the method that actually
    /// produced it.
    pub fn equinox_utc(&self, year: i32) -> (CivilDateTime, Method) {
        if let Some(finder) = &self.precise {
            match finder.march_equinox(year) {
                Ok(instant) => return (instant, Method::Ephemeris),
                Err(e) => {
                    warn!("precise equinox search failed for {year}: {e}; using polynomial");
                }
            }
        }
        (MeeusPolynomial.equinox(year), Method::Polynomial)
    }
}
