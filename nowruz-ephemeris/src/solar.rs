//! Apparent geocentric solar longitude.
//!
//! Low-precision model: geometric mean longitude plus the equation of
//! center from the loaded reference series, corrected for aberration and
//! the dominant nutation-in-longitude term. Good to roughly 0.01 degrees,
//! about a quarter of a minute in the timing of an equinox.
//!
//! # Time argument
//!
//! All polynomials take Julian centuries from J2000.0. The caller hands in
//! a civil-scale Julian Date; the minutes-level difference between that
//! and dynamical time is ignored throughout this workspace.

use crate::terms::SolarEphemeris;
use nowruz_time::constants::J2000_JD;
use nowruz_time::JulianDate;

const DAYS_PER_JULIAN_CENTURY: f64 = 36525.0;

const DEG_TO_RAD: f64 = std::f64::consts::PI / 180.0;

/// Sun's apparent ecliptic longitude in degrees, normalized to `[0, 360)`.
pub fn apparent_longitude(ephemeris: &SolarEphemeris, jd: JulianDate) -> f64 {
    let t = ((jd.jd1 - J2000_JD) + jd.jd2) / DAYS_PER_JULIAN_CENTURY;

    // Geometric mean longitude and mean anomaly (Meeus, ch. 25).
    let l0 = 280.46646 + (36000.76983 + 0.0003032 * t) * t;
    let m = 357.52911 + (35999.05029 - 0.0001537 * t) * t;

    let center = ephemeris.equation_of_center(t, m * DEG_TO_RAD);
    let true_longitude = l0 + center;

    // Aberration and the principal nutation term, argued by the lunar
    // ascending node.
    let omega = 125.04 - 1934.136 * t;
    let apparent = true_longitude - 0.00569 - 0.00478 * libm::sin(omega * DEG_TO_RAD);

    wrap_degrees(apparent)
}

/// Normalizes an angle in degrees to `[0, 360)`.
pub fn wrap_degrees(degrees: f64) -> f64 {
    degrees.rem_euclid(360.0)
}

/// Normalizes an angle in degrees to `[-180, 180)`, the signed distance
/// from zero. Crossing detection works on this form.
pub fn wrap_signed(degrees: f64) -> f64 {
    (degrees + 180.0).rem_euclid(360.0) - 180.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ephemeris() -> SolarEphemeris {
        SolarEphemeris::load().unwrap()
    }

    #[test]
    fn wrapping() {
        assert_eq!(wrap_degrees(370.0), 10.0);
        assert_eq!(wrap_degrees(-10.0), 350.0);
        assert_eq!(wrap_signed(359.0), -1.0);
        assert_eq!(wrap_signed(1.0), 1.0);
        assert_eq!(wrap_signed(180.0), -180.0);
    }

    #[test]
    fn longitude_near_zero_at_march_equinox() {
        // 2024 March equinox was 03:06 UTC on March 20.
        let jd = JulianDate::from_calendar(2024, 3, 20, 3, 6, 0.0);
        let lon = apparent_longitude(&ephemeris(), jd);
        assert!(
            wrap_signed(lon).abs() < 0.05,
            "longitude {lon} should sit at the equinox threshold"
        );
    }

    #[test]
    fn longitude_near_ninety_at_june_solstice() {
        // 2024 June solstice was 20:51 UTC on June 20.
        let jd = JulianDate::from_calendar(2024, 6, 20, 20, 51, 0.0);
        let lon = apparent_longitude(&ephemeris(), jd);
        assert!((lon - 90.0).abs() < 0.05, "longitude {lon} should be ~90");
    }

    #[test]
    fn longitude_advances_about_a_degree_per_day() {
        let eph = ephemeris();
        let jd = JulianDate::from_calendar(2024, 3, 1, 0, 0, 0.0);
        let a = apparent_longitude(&eph, jd);
        let b = apparent_longitude(&eph, jd.add_days(1.0));
        let rate = wrap_signed(b - a);
        assert!(
            (0.9..1.1).contains(&rate),
            "daily motion {rate} out of range"
        );
    }
}
