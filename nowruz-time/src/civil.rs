//! Proleptic-Gregorian civil dates and wall-clock datetimes.
//!
//! [`CivilDate`] is a calendar day backed by integer Julian Day Number
//! arithmetic, so day differences and day offsets are exact. [`CivilDateTime`]
//! adds a wall-clock reading in whole seconds; it is the form every equinox
//! instant and every converted local time takes in this workspace.
//!
//! Conversion from a fractional Julian Date ([`CivilDateTime::from_julian_day`])
//! uses the standard Julian-Day-to-calendar algorithm with truncating
//! time-of-day extraction: seconds are cut, not rounded, so a result can sit
//! just under one second early. Downstream output depends on that exact
//! behavior; do not "fix" it here.

use crate::constants::{GREGORIAN_REFORM_JD, MINUTES_PER_DAY};
use crate::{TimeError, TimeResult};
use std::fmt;
use std::ops::Sub;

/// A proleptic-Gregorian calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CivilDate {
    pub year: i32,
    pub month: u8,
    pub day: u8,
}

impl CivilDate {
    /// Creates a date, validating month and day against the Gregorian
    /// month lengths.
    pub fn new(year: i32, month: u8, day: u8) -> TimeResult<Self> {
        if !(1..=12).contains(&month) || day < 1 || day > gregorian_month_length(year, month) {
            return Err(TimeError::InvalidDate { year, month, day });
        }
        Ok(Self { year, month, day })
    }

    /// Julian Day Number of this date (the JDN is the integer day count
    /// whose day starts at the preceding noon).
    pub fn julian_day_number(&self) -> i64 {
        let (y, m, d) = (self.year as i64, self.month as i64, self.day as i64);
        (1461 * (y + 4800 + (m - 14) / 12)) / 4 + (367 * (m - 2 - 12 * ((m - 14) / 12))) / 12
            - (3 * ((y + 4900 + (m - 14) / 12) / 100)) / 4
            + d
            - 32075
    }

    /// Reconstructs the date from a Julian Day Number.
    pub fn from_jdn(jdn: i64) -> Self {
        let f = jdn + 1401 + (((4 * jdn + 274277) / 146097) * 3) / 4 - 38;
        let e = 4 * f + 3;
        let g = (e % 1461) / 4;
        let h = 5 * g + 2;
        let day = (h % 153) / 5 + 1;
        let month = (h / 153 + 2) % 12 + 1;
        let year = e / 1461 - 4716 + (12 + 2 - month) / 12;
        Self {
            year: year as i32,
            month: month as u8,
            day: day as u8,
        }
    }

    pub fn add_days(&self, days: i64) -> Self {
        Self::from_jdn(self.julian_day_number() + days)
    }

    /// The next calendar day.
    pub fn succ(&self) -> Self {
        self.add_days(1)
    }
}

impl Sub for CivilDate {
    type Output = i64;

    /// Whole days between two dates.
    fn sub(self, rhs: Self) -> i64 {
        self.julian_day_number() - rhs.julian_day_number()
    }
}

impl fmt::Display for CivilDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// An immutable wall-clock reading: a [`CivilDate`] plus whole-second time
/// of day. Which offset it is read in (UTC, Tehran, ...) is the caller's
/// context; the value itself is plain calendar arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CivilDateTime {
    pub date: CivilDate,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
}

impl CivilDateTime {
    pub fn new(date: CivilDate, hour: u8, minute: u8, second: u8) -> TimeResult<Self> {
        if hour > 23 || minute > 59 || second > 59 {
            return Err(TimeError::InvalidTime {
                hour,
                minute,
                second,
            });
        }
        Ok(Self {
            date,
            hour,
            minute,
            second,
        })
    }

    pub fn from_components(
        year: i32,
        month: u8,
        day: u8,
        hour: u8,
        minute: u8,
        second: u8,
    ) -> TimeResult<Self> {
        Self::new(CivilDate::new(year, month, day)?, hour, minute, second)
    }

    /// Converts a fractional Julian Date to a civil datetime.
    ///
    /// Standard algorithm: split at `JD + 0.5`, apply the Gregorian
    /// correction only at or past the calendar reform, then derive the
    /// civil day through the `a..e` intermediate integers. The day
    /// fraction becomes hours/minutes/seconds by integer truncation.
    pub fn from_julian_day(jd: f64) -> Self {
        let shifted = jd + 0.5;
        let z = shifted as i64;
        let f = shifted - z as f64;

        let a = if z < GREGORIAN_REFORM_JD {
            z
        } else {
            let alpha = ((z as f64 - 1867216.25) / 36524.25) as i64;
            z + 1 + alpha - alpha / 4
        };

        let b = a + 1524;
        let c = ((b as f64 - 122.1) / 365.25) as i64;
        let d = (365.25 * c as f64) as i64;
        let e = ((b - d) as f64 / 30.6001) as i64;

        let day = b - d - (30.6001 * e as f64) as i64;
        let month = if e < 14 { e - 1 } else { e - 13 };
        let year = if month > 2 { c - 4716 } else { c - 4715 };

        let total_seconds = (f * 86400.0) as i64;
        let hour = total_seconds / 3600;
        let minute = (total_seconds % 3600) / 60;
        let second = total_seconds % 60;

        Self {
            date: CivilDate {
                year: year as i32,
                month: month as u8,
                day: day as u8,
            },
            hour: hour as u8,
            minute: minute as u8,
            second: second as u8,
        }
    }

    /// Shifts this reading by a fixed number of minutes, carrying into the
    /// date as needed. Pure integer arithmetic; the seconds field is
    /// untouched (offsets are whole minutes).
    pub fn shift_minutes(&self, minutes: i32) -> Self {
        let total = self.hour as i32 * 60 + self.minute as i32 + minutes;
        let day_shift = total.div_euclid(MINUTES_PER_DAY);
        let rem = total.rem_euclid(MINUTES_PER_DAY);
        Self {
            date: self.date.add_days(day_shift as i64),
            hour: (rem / 60) as u8,
            minute: (rem % 60) as u8,
            second: self.second,
        }
    }

    /// The reading expressed at a fixed UTC offset.
    pub fn to_offset(&self, offset: crate::ZoneOffset) -> Self {
        self.shift_minutes(offset.minutes())
    }

    /// 24-hour `HH:MM:SS`.
    pub fn time_string(&self) -> String {
        format!("{:02}:{:02}:{:02}", self.hour, self.minute, self.second)
    }
}

impl fmt::Display for CivilDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.date, self.time_string())
    }
}

fn gregorian_month_length(year: i32, month: u8) -> u8 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if year % 4 == 0 && year % 100 != 0 || year % 400 == 0 {
                29
            } else {
                28
            }
        }
        _ => 0,
    }
}
