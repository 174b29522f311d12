//! Equation-of-center reference data.
//!
//! The sine series for the Sun's equation of center is carried as an
//! embedded data table, parsed and validated once per process. If the
//! table fails to parse the precise equinox finder is simply unavailable
//! and callers fall back to the polynomial estimate; nothing here aborts.

use crate::{EphemerisError, EphemerisResult};
use std::sync::OnceLock;
use tracing::warn;

static RAW_DATA: &str = include_str!("../data/equation_of_center.txt");

static CACHE: OnceLock<Option<SolarEphemeris>> = OnceLock::new();

/// One sine term of the equation of center:
/// `(a0 + a1*T + a2*T^2) * sin(multiple * M)` degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CenterTerm {
    pub multiple: u8,
    pub a0: f64,
    pub a1: f64,
    pub a2: f64,
}

/// Loaded solar reference data, read-only after initialization.
#[derive(Debug, Clone)]
pub struct SolarEphemeris {
    center: Vec<CenterTerm>,
}

impl SolarEphemeris {
    /// Wraps an already-built series without validation. [`load`] is the
    /// checked entry point; this exists for callers supplying their own
    /// series.
    ///
    /// [`load`]: Self::load
    pub fn new(center: Vec<CenterTerm>) -> Self {
        Self { center }
    }

    /// Parses and validates the embedded series.
    pub fn load() -> EphemerisResult<Self> {
        let ephemeris = Self::new(parse_series(RAW_DATA)?);
        ephemeris.validate()?;
        Ok(ephemeris)
    }

    /// Process-wide cached handle.
    ///
    /// The first call parses the embedded table; a failure is logged as a
    /// warning and every later call sees `None`, pinning the polynomial
    /// strategy for the rest of the process.
    pub fn get() -> Option<&'static Self> {
        CACHE
            .get_or_init(|| match Self::load() {
                Ok(ephemeris) => Some(ephemeris),
                Err(e) => {
                    warn!("solar ephemeris unavailable: {e}");
                    None
                }
            })
            .as_ref()
    }

    pub fn center_terms(&self) -> &[CenterTerm] {
        &self.center
    }

    /// Equation of center in degrees for Julian centuries `t` and mean
    /// anomaly `m_rad` (radians).
    pub fn equation_of_center(&self, t: f64, m_rad: f64) -> f64 {
        self.center
            .iter()
            .map(|term| {
                (term.a0 + (term.a1 + term.a2 * t) * t) * libm::sin(term.multiple as f64 * m_rad)
            })
            .sum()
    }

    fn validate(&self) -> EphemerisResult<()> {
        if self.center.is_empty() {
            return Err(EphemerisError::Validation("empty series".into()));
        }
        let mut last_multiple = 0;
        for term in &self.center {
            if term.multiple <= last_multiple {
                return Err(EphemerisError::Validation(format!(
                    "multiples not strictly increasing at {}",
                    term.multiple
                )));
            }
            last_multiple = term.multiple;
            if ![term.a0, term.a1, term.a2].iter().all(|a| a.is_finite()) {
                return Err(EphemerisError::Validation(format!(
                    "non-finite coefficient in term {}",
                    term.multiple
                )));
            }
        }
        // The leading sin(M) amplitude is ~1.9146 degrees; anything far
        // off means the table is not an equation-of-center series.
        let leading = self.center[0].a0;
        if !(1.0..3.0).contains(&leading) {
            return Err(EphemerisError::Validation(format!(
                "leading amplitude {leading} out of range"
            )));
        }
        Ok(())
    }
}

fn parse_series(raw: &str) -> EphemerisResult<Vec<CenterTerm>> {
    let mut terms = Vec::new();
    for (line_num, line) in (1usize..).zip(raw.lines()) {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let mut fields = line.split_whitespace();
        let multiple = require_field(&mut fields, line_num, 1)?
            .parse::<u8>()
            .map_err(|e| data_error(line_num, 1, e.to_string()))?;
        let mut coeffs = [0.0f64; 3];
        for (i, coeff) in coeffs.iter_mut().enumerate() {
            *coeff = require_field(&mut fields, line_num, i + 2)?
                .parse()
                .map_err(|e: std::num::ParseFloatError| {
                    data_error(line_num, i + 2, e.to_string())
                })?;
        }
        if fields.next().is_some() {
            return Err(data_error(line_num, 5, "trailing fields".into()));
        }
        terms.push(CenterTerm {
            multiple,
            a0: coeffs[0],
            a1: coeffs[1],
            a2: coeffs[2],
        });
    }
    Ok(terms)
}

fn require_field<'a, I: Iterator<Item = &'a str>>(
    fields: &mut I,
    line: usize,
    field: usize,
) -> EphemerisResult<&'a str> {
    fields
        .next()
        .ok_or_else(|| data_error(line, field, "missing field".into()))
}

fn data_error(line: usize, field: usize, reason: String) -> EphemerisError {
    EphemerisError::Data {
        line,
        field,
        reason,
    }
}
