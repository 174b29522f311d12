//! Nowruz resolution from the equinox instant.
//!
//! A Shamsi year maps to the Gregorian year it begins in, the estimator
//! supplies the March equinox instant, and a noon cutoff in Tehran decides
//! whether Nowruz is proclaimed for the equinox day or the next one.

use crate::progress::{NoopObserver, Phase, PhaseObserver};
use nowruz_ephemeris::{EquinoxEstimator, Method};
use nowruz_time::{CivilDate, CivilDateTime, ZoneOffset};
use std::fmt;
use tracing::debug;

/// Offset between a Shamsi year and the Gregorian year it begins in.
pub const SHAMSI_TO_GREGORIAN_YEARS: i32 = 621;

/// Which side of the Tehran noon cutoff the equinox fell on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DayRule {
    SameDay,
    NextDay,
}

impl DayRule {
    pub fn as_str(&self) -> &'static str {
        match self {
            DayRule::SameDay => "same-day",
            DayRule::NextDay => "next-day",
        }
    }

    pub fn describe(&self) -> &'static str {
        match self {
            DayRule::SameDay => "before noon in Tehran - Nowruz falls on the equinox day",
            DayRule::NextDay => "afternoon in Tehran - Nowruz falls the next day",
        }
    }
}

impl fmt::Display for DayRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One prediction: the equinox instant in UTC and Tehran time, the
/// resolved Nowruz day, and how both were obtained. Immutable.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Prediction {
    pub shamsi_year: i32,
    pub equinox_utc: CivilDateTime,
    pub equinox_tehran: CivilDateTime,
    pub nowruz: CivilDate,
    pub rule: DayRule,
    pub method: Method,
}

/// Applies the noon cutoff to an equinox instant.
///
/// The hour test reads Tehran local time, but the next-day step advances
/// the *UTC* calendar day. That asymmetry is the resolver's historical
/// behavior and is kept as is; for equinox instants near Tehran noon the
/// two dates coincide anyway.
pub fn resolve_nowruz(equinox_utc: CivilDateTime) -> (CivilDate, DayRule) {
    let tehran = equinox_utc.to_offset(ZoneOffset::TEHRAN);
    if tehran.hour >= 12 {
        (equinox_utc.date.succ(), DayRule::NextDay)
    } else {
        (equinox_utc.date, DayRule::SameDay)
    }
}

/// Predicts Nowruz for Shamsi years.
///
/// The caller guarantees a plausible solar-calendar year; range policy
/// belongs to the shell, not here.
pub struct NowruzResolver {
    estimator: EquinoxEstimator,
}

impl NowruzResolver {
    pub fn new(estimator: EquinoxEstimator) -> Self {
        Self { estimator }
    }

    /// Resolver over the default reference data, falling back to the
    /// polynomial when the data is unavailable.
    pub fn with_default_source() -> Self {
        Self::new(EquinoxEstimator::with_default_source())
    }

    /// Strategy the estimator selected at construction.
    pub fn method(&self) -> Method {
        self.estimator.method()
    }

    pub fn predict(&self, shamsi_year: i32) -> Prediction {
        self.predict_observed(shamsi_year, &NoopObserver)
    }

    /// As [`predict`](Self::predict), reporting phase transitions to the
    /// observer.
    pub fn predict_observed(
        &self,
        shamsi_year: i32,
        observer: &dyn PhaseObserver,
    ) -> Prediction {
        observer.on_phase(Phase::Start);
        let gregorian_year = shamsi_year + SHAMSI_TO_GREGORIAN_YEARS;
        debug!("predicting Nowruz {shamsi_year} via Gregorian {gregorian_year}");

        observer.on_phase(Phase::Searching);
        let (equinox_utc, method) = self.estimator.equinox_utc(gregorian_year);

        observer.on_phase(Phase::Converting);
        let equinox_tehran = equinox_utc.to_offset(ZoneOffset::TEHRAN);
        let (nowruz, rule) = resolve_nowruz(equinox_utc);

        observer.on_phase(Phase::Done);
        Prediction {
            shamsi_year,
            equinox_utc,
            equinox_tehran,
            nowruz,
            rule,
            method,
        }
    }
}
