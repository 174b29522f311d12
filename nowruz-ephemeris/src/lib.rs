pub mod equinox;
pub mod solar;
pub mod terms;

pub use equinox::{EquinoxEstimator, EquinoxSource, MeeusPolynomial, Method, PreciseFinder};
pub use terms::SolarEphemeris;

use thiserror::Error;

pub type EphemerisResult<T> = Result<T, EphemerisError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum EphemerisError {
    #[error("ephemeris data: line {line}, field {field}: {reason}")]
    Data {
        line: usize,
        field: usize,
        reason: String,
    },

    #[error("ephemeris data failed validation: {0}")]
    Validation(String),

    #[error("no March equinox crossing found in the search window for {year}")]
    SearchFailed { year: i32 },
}
