//! Naive fixed UTC offsets.
//!
//! These are plain wall-clock deltas, not timezone-database zones: no
//! daylight-saving transitions, no historical rules. Tehran is exact
//! (Iran observes no DST); the other capitals are the fixed deltas the
//! display layer reports and are intentionally left that way.

use std::fmt;

/// A fixed offset from UTC in whole minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ZoneOffset {
    minutes: i32,
}

impl ZoneOffset {
    /// Iran Standard Time, UTC+3:30.
    pub const TEHRAN: Self = Self { minutes: 210 };

    /// UTC-4:00.
    pub const NEW_YORK: Self = Self { minutes: -240 };

    /// UTC+1:00.
    pub const LONDON: Self = Self { minutes: 60 };

    /// UTC+9:00.
    pub const TOKYO: Self = Self { minutes: 540 };

    pub const fn from_minutes(minutes: i32) -> Self {
        Self { minutes }
    }

    pub const fn minutes(&self) -> i32 {
        self.minutes
    }
}

impl fmt::Display for ZoneOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.minutes < 0 { '-' } else { '+' };
        let abs = self.minutes.unsigned_abs();
        write!(f, "UTC{}{}:{:02}", sign, abs / 60, abs % 60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_constants() {
        assert_eq!(ZoneOffset::TEHRAN.minutes(), 210);
        assert_eq!(ZoneOffset::NEW_YORK.minutes(), -240);
        assert_eq!(ZoneOffset::LONDON.minutes(), 60);
        assert_eq!(ZoneOffset::TOKYO.minutes(), 540);
    }

    #[test]
    fn display() {
        assert_eq!(ZoneOffset::TEHRAN.to_string(), "UTC+3:30");
        assert_eq!(ZoneOffset::NEW_YORK.to_string(), "UTC-4:00");
        assert_eq!(ZoneOffset::from_minutes(0).to_string(), "UTC+0:00");
    }
}
