pub mod civil;
pub mod constants;
pub mod julian;
pub mod zones;

pub use civil::{CivilDate, CivilDateTime};
pub use julian::JulianDate;
pub use zones::ZoneOffset;

use thiserror::Error;

pub type TimeResult<T> = Result<T, TimeError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum TimeError {
    #[error("invalid date {year}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u8, day: u8 },

    #[error("invalid time {hour:02}:{minute:02}:{second:02}")]
    InvalidTime { hour: u8, minute: u8, second: u8 },
}
