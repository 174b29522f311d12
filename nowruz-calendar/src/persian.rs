//! Persian (Shamsi) calendar dates from Gregorian ones.
//!
//! The conversion anchors each Persian year at an *approximate* Nowruz:
//! March 20 when the Gregorian year is divisible by 4, March 21 otherwise.
//! That is a documented simplification, not an astronomical lookup; the
//! precise equinox lives in the ephemeris crate and feeds prediction, while
//! this converter only renders dates. Around the changeover days the
//! approximation can disagree with the true calendar by one day.
//!
//! Leap years follow the 2820-year cycle test `(year + 38) mod 2820 < 682`.
//! The test is reproduced exactly for compatibility with existing output;
//! it is known to disagree with the observational calendar in places.

use nowruz_time::{CivilDate, CivilDateTime};

/// Number of days in each Persian month of `year`.
///
/// The first six months have 31 days, the next five 30; Esfand has 30 days
/// in a leap year and 29 otherwise.
pub fn month_lengths(year: i32) -> [u8; 12] {
    let esfand = if is_leap_year(year) { 30 } else { 29 };
    [31, 31, 31, 31, 31, 31, 30, 30, 30, 30, 30, esfand]
}

/// 2820-year-cycle leap test.
pub fn is_leap_year(year: i32) -> bool {
    (year + 38).rem_euclid(2820) < 682
}

/// Approximate Nowruz day of a Gregorian year, used as the conversion epoch.
fn approximate_nowruz(gregorian_year: i32) -> CivilDate {
    let day = if gregorian_year.rem_euclid(4) == 0 {
        20
    } else {
        21
    };
    CivilDate {
        year: gregorian_year,
        month: 3,
        day,
    }
}

/// A date in the Persian solar calendar.
///
/// Always holds `1 <= month <= 12` and `day` within the month length for
/// `year` when produced by [`PersianDate::from_gregorian`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PersianDate {
    pub year: i32,
    pub month: u8,
    pub day: u8,
}

impl PersianDate {
    /// Converts a Gregorian calendar day.
    ///
    /// Picks the Persian year by comparing against the approximate Nowruz
    /// of the input's Gregorian year, then walks the month lengths with the
    /// whole-day offset from that epoch. An offset that runs past Esfand
    /// (possible only at the edges of the epoch approximation) falls
    /// through to month 1, day 1.
    pub fn from_gregorian(date: CivilDate) -> Self {
        let nowruz = approximate_nowruz(date.year);
        let (year, epoch) = if date >= nowruz {
            (date.year - 621, nowruz)
        } else {
            (date.year - 622, approximate_nowruz(date.year - 1))
        };

        let mut day_counter = date - epoch;
        let mut month = 1;
        let mut day = 1;
        for (index, length) in month_lengths(year).into_iter().enumerate() {
            if day_counter < length as i64 {
                month = index as u8 + 1;
                day = day_counter as u8 + 1;
                break;
            }
            day_counter -= length as i64;
        }

        Self { year, month, day }
    }

    /// Converts the calendar-day part of a wall-clock reading.
    pub fn from_datetime(datetime: &CivilDateTime) -> Self {
        Self::from_gregorian(datetime.date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn civil(y: i32, m: u8, d: u8) -> CivilDate {
        CivilDate::new(y, m, d).unwrap()
    }

    #[test]
    fn leap_formula() {
        for year in [-40, -38, 0, 100, 643, 644, 1300, 1403, 1500, 2782, 2820] {
            assert_eq!(
                is_leap_year(year),
                (year + 38).rem_euclid(2820) < 682,
                "year {year}"
            );
        }
        assert!(is_leap_year(100));
        assert!(is_leap_year(643));
        assert!(!is_leap_year(644));
        // The cycle test marks the whole 1300..=1500 range common.
        assert!(!is_leap_year(1403));
    }

    #[test]
    fn month_lengths_sum() {
        assert_eq!(month_lengths(644).iter().map(|&d| d as i32).sum::<i32>(), 365);
        assert_eq!(month_lengths(643).iter().map(|&d| d as i32).sum::<i32>(), 366);
        assert_eq!(month_lengths(643)[11], 30);
        assert_eq!(month_lengths(644)[11], 29);
    }

    #[test]
    fn nowruz_day_maps_to_first_of_farvardin() {
        assert_eq!(
            PersianDate::from_gregorian(civil(2024, 3, 20)),
            PersianDate {
                year: 1403,
                month: 1,
                day: 1
            }
        );
        assert_eq!(
            PersianDate::from_gregorian(civil(2025, 3, 21)),
            PersianDate {
                year: 1404,
                month: 1,
                day: 1
            }
        );
    }

    #[test]
    fn day_before_nowruz_is_end_of_esfand() {
        assert_eq!(
            PersianDate::from_gregorian(civil(2024, 3, 19)),
            PersianDate {
                year: 1402,
                month: 12,
                day: 29
            }
        );
    }

    #[test]
    fn mid_year_conversion() {
        // 2000-01-01 is 11 Dey 1378.
        assert_eq!(
            PersianDate::from_gregorian(civil(2000, 1, 1)),
            PersianDate {
                year: 1378,
                month: 10,
                day: 11
            }
        );
    }

    #[test]
    fn overflow_offset_falls_through_to_first_of_year() {
        // 2025-03-20 sits a full 365 days past the 2024 epoch while 1403
        // counts only 365 days under the cycle test, so the walk runs off
        // the end and yields 1/1. Kept for parity with existing output.
        assert_eq!(
            PersianDate::from_gregorian(civil(2025, 3, 20)),
            PersianDate {
                year: 1403,
                month: 1,
                day: 1
            }
        );
    }

    #[test]
    fn offset_reconstruction_within_year() {
        // epoch + dayOffset must reproduce the input day count for every
        // offset inside the Persian year.
        let epoch = civil(2024, 3, 20);
        let lengths = month_lengths(1403);
        for offset in 0..365i64 {
            let date = epoch.add_days(offset);
            let p = PersianDate::from_gregorian(date);
            assert_eq!(p.year, 1403, "offset {offset}");
            let reconstructed: i64 = lengths[..p.month as usize - 1]
                .iter()
                .map(|&d| d as i64)
                .sum::<i64>()
                + (p.day as i64 - 1);
            assert_eq!(reconstructed, offset, "offset {offset}");
            assert!((1..=12).contains(&p.month));
            assert!(p.day >= 1 && p.day <= lengths[p.month as usize - 1]);
        }
    }

    #[test]
    fn invariant_bounds_hold_for_arbitrary_days() {
        let start = civil(1999, 1, 1);
        for offset in (0..9000).step_by(17) {
            let p = PersianDate::from_gregorian(start.add_days(offset));
            assert!((1..=12).contains(&p.month));
            let max = month_lengths(p.year)[p.month as usize - 1];
            assert!(p.day >= 1 && p.day <= max, "{p:?}");
        }
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_round_trip() {
        let p = PersianDate {
            year: 1403,
            month: 1,
            day: 1,
        };
        let json = serde_json::to_string(&p).unwrap();
        assert_eq!(p, serde_json::from_str::<PersianDate>(&json).unwrap());
    }
}
