use crate::constants::{J2000_JD, MJD_ZERO_POINT, SECONDS_PER_DAY_F64, SECONDS_TO_DAYS};
use std::fmt;

/// Two-part Julian Date.
///
/// Splitting the date into `jd1 + jd2` keeps sub-second precision over the
/// full range of civil years handled here: `jd1` carries the big epoch
/// offset, `jd2` the small fraction being searched or stepped.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct JulianDate {
    pub jd1: f64,
    pub jd2: f64,
}

impl JulianDate {
    pub fn new(jd1: f64, jd2: f64) -> Self {
        Self { jd1, jd2 }
    }

    pub fn from_f64(jd: f64) -> Self {
        Self::new(jd, 0.0)
    }

    pub fn j2000() -> Self {
        Self::new(J2000_JD, 0.0)
    }

    pub fn to_f64(&self) -> f64 {
        self.jd1 + self.jd2
    }

    pub fn add_days(&self, days: f64) -> Self {
        Self::new(self.jd1, self.jd2 + days)
    }

    pub fn add_seconds(&self, seconds: f64) -> Self {
        self.add_days(seconds * SECONDS_TO_DAYS)
    }

    /// Julian Date for 0h of the given Gregorian calendar day plus the
    /// day fraction from the time components.
    ///
    /// Integer part follows the ERFA `eraCal2jd` convention: compute the
    /// Modified Julian Day with pure integer arithmetic, then shift by the
    /// MJD zero point so `jd1` is exact.
    pub fn from_calendar(year: i32, month: u8, day: u8, hour: u8, minute: u8, second: f64) -> Self {
        let my = (month as i32 - 14) / 12;
        let iypmy = year + my;

        let mjd = ((1461 * (iypmy + 4800)) / 4 + (367 * (month as i32 - 2 - 12 * my)) / 12
            - (3 * ((iypmy + 4900) / 100)) / 4
            + day as i32
            - 2432076) as f64;

        let jd1 = MJD_ZERO_POINT + mjd;
        let jd2 = (60.0 * (60 * hour as i32 + minute as i32) as f64 + second) / SECONDS_PER_DAY_F64;

        Self::new(jd1, jd2)
    }
}

impl fmt::Display for JulianDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "JD {:.9}", self.to_f64())
    }
}

impl From<f64> for JulianDate {
    fn from(jd: f64) -> Self {
        Self::from_f64(jd)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_creation_and_sum() {
        let jd = JulianDate::new(J2000_JD, 0.5);
        assert_eq!(jd.jd1, J2000_JD);
        assert_eq!(jd.jd2, 0.5);
        assert_eq!(jd.to_f64(), 2451545.5);
    }

    #[test]
    fn test_from_calendar_j2000() {
        // J2000.0 is 2000-01-01 12:00:00 TT; as a plain calendar reading
        // the same components give JD 2451545.0.
        let jd = JulianDate::from_calendar(2000, 1, 1, 12, 0, 0.0);
        assert_eq!(jd.to_f64(), J2000_JD);
    }

    #[test]
    fn test_from_calendar_unix_epoch() {
        let jd = JulianDate::from_calendar(1970, 1, 1, 0, 0, 0.0);
        assert_eq!(jd.to_f64(), crate::constants::UNIX_EPOCH_JD);
    }

    #[test]
    fn test_arithmetic() {
        let jd = JulianDate::new(J2000_JD, 0.0);
        assert_eq!(jd.add_days(1.0).to_f64(), 2451546.0);
        assert!((jd.add_seconds(3600.0).to_f64() - 2_451_545.041_666_666_5).abs() < 1e-15);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_round_trip() {
        let original = JulianDate::new(J2000_JD, 0.123456789);
        let json = serde_json::to_string(&original).unwrap();
        let deserialized: JulianDate = serde_json::from_str(&json).unwrap();
        assert_eq!(original, deserialized, "precision lost in serde round-trip");
    }
}
