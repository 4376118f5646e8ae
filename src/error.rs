//! Error types for pricing and sweep operations

use thiserror::Error;

/// Errors reported by the pricer, the sweep runner and the chart renderer.
///
/// Every failure is distinct from a valid result: a deep out-of-the-money option
/// can legitimately price at (or extremely close to) zero, so no variant is ever
/// collapsed into a sentinel price.
#[derive(Error, Debug)]
pub enum PricerError {
    /// Option side was neither "call" nor "put".
    #[error("Invalid option side: {0:?} (expected \"call\" or \"put\")")]
    InvalidSide(String),

    /// A contract field is outside the domain of the closed-form formula.
    #[error("Invalid domain: {field} = {value}")]
    InvalidDomain { field: &'static str, value: f64 },

    /// Inputs passed validation but the formula overflowed or produced NaN.
    #[error("Numerical error: {0}")]
    Numerical(String),

    #[error("Invalid sweep: {0}")]
    InvalidSweep(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Plot error: {0}")]
    Plot(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type PricerResult<T> = Result<T, PricerError>;

impl PricerError {
    pub fn invalid_side(side: impl Into<String>) -> Self {
        Self::InvalidSide(side.into())
    }

    pub fn invalid_domain(field: &'static str, value: f64) -> Self {
        Self::InvalidDomain { field, value }
    }

    pub fn numerical(msg: impl Into<String>) -> Self {
        Self::Numerical(msg.into())
    }

    pub fn invalid_sweep(msg: impl Into<String>) -> Self {
        Self::InvalidSweep(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn plot(msg: impl Into<String>) -> Self {
        Self::Plot(msg.into())
    }
}
