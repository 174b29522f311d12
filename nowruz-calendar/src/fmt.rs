//! Persian month names and display formatting.

use crate::persian::PersianDate;
use nowruz_time::CivilDateTime;

const MONTH_NAMES: [&str; 12] = [
    "فروردین",
    "اردیبهشت",
    "خرداد",
    "تیر",
    "مرداد",
    "شهریور",
    "مهر",
    "آبان",
    "آذر",
    "دی",
    "بهمن",
    "اسفند",
];

/// Canonical name of a Persian month, 1-based.
///
/// Out-of-range indices yield an empty string rather than an error; the
/// display layer treats a missing name as blank output.
pub fn month_name(month: u8) -> &'static str {
    match month {
        1..=12 => MONTH_NAMES[month as usize - 1],
        _ => "",
    }
}

/// Renders a wall-clock reading as `"{day} {month} {year} - HH:MM:SS"`.
pub fn format_persian_datetime(datetime: &CivilDateTime) -> String {
    let persian = PersianDate::from_datetime(datetime);
    format!(
        "{} {} {} - {}",
        persian.day,
        month_name(persian.month),
        persian.year,
        datetime.time_string()
    )
}

/// Renders just the Persian calendar day, `"{day} {month} {year}"`.
pub fn format_persian_date(persian: &PersianDate) -> String {
    format!(
        "{} {} {}",
        persian.day,
        month_name(persian.month),
        persian.year
    )
}
