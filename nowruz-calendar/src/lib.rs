pub mod fmt;
pub mod persian;

pub use fmt::{format_persian_datetime, month_name};
pub use persian::{is_leap_year, month_lengths, PersianDate};
