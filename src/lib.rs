//! # Pricer-Lib: Black-Scholes Option Pricing and Sensitivity Sweeps
//!
//! `pricer-lib` prices European call and put options with the Black-Scholes closed-form
//! formula and studies how that price responds when a single input is varied.
//!
//! ## Core Features
//!
//! - **Pricing**: closed-form European call/put values on a non-dividend-paying underlying
//! - **Greeks**: analytic delta, gamma, vega, theta and rho
//! - **Sensitivity Sweeps**: price vs. volatility, maturity, spot, strike or rate over a
//!   linearly spaced grid, eagerly or lazily
//! - **Charts**: SVG rendering of a sweep
//!
//! ## Quick Start
//!
//! ```rust
//! use pricer_lib::{price, default_configs, run_sweep};
//!
//! let call = price(100.0, 100.0, 1.0, 0.05, 0.2, "call")?;
//! let put = price(100.0, 100.0, 1.0, 0.05, 0.2, "put")?;
//! assert!((call - 10.45).abs() < 0.01);
//! assert!((put - 5.57).abs() < 0.01);
//!
//! // Price vs. volatility, σ ∈ [0.1, 0.5]
//! let base = default_configs::base_contract();
//! let sweep = run_sweep(&base, &default_configs::volatility_sweep())?;
//! assert_eq!(sweep.len(), 100);
//! # Ok::<(), pricer_lib::PricerError>(())
//! ```
//!
//! ## Error Handling
//!
//! Every operation returns [`PricerResult`]. An unrecognised option side fails with
//! [`PricerError::InvalidSide`]; a non-positive (or non-finite) spot, strike, maturity or
//! volatility, or a non-finite rate, fails with [`PricerError::InvalidDomain`]. Failures are
//! never reported as a zero or NaN price.

// ================================================================================================
// MODULES
// ================================================================================================

pub mod error;
pub mod models;
pub mod plot;
pub mod sweep;

// ================================================================================================
// PUBLIC RE-EXPORTS
// ================================================================================================

pub use error::{PricerError, PricerResult};

pub use models::bs::{bs_call_price, bs_price, bs_put_price, greeks, BlackScholes, Greeks};
pub use models::traits::PricingModel;
pub use models::types::{OptionContract, OptionSide};

pub use sweep::{
    linspace, run_sweep, run_sweep_with, sweep_iter, SweepConfig, SweepParameter, SweepPoint,
    SweepResult,
};

pub use plot::{render_sweep_svg, PlotConfig};

// ================================================================================================
// DEFAULT CONFIGURATIONS
// ================================================================================================

/// Preset contract and sweeps for the classic textbook example.
///
/// - [`base_contract()`]: at-the-money one-year call, S = K = 100, r = 5%, σ = 20%
/// - [`volatility_sweep()`]: price vs. volatility over σ ∈ [0.1, 0.5], 100 points
/// - [`maturity_sweep()`]: price vs. maturity over T ∈ [0.1, 2.0] years, 100 points
pub mod default_configs {
    use crate::models::types::{OptionContract, OptionSide};
    use crate::sweep::SweepConfig;

    /// At-the-money one-year call: S = 100, K = 100, T = 1, r = 0.05, σ = 0.2.
    ///
    /// # Example
    ///
    /// ```rust
    /// use pricer_lib::default_configs;
    ///
    /// let contract = default_configs::base_contract();
    /// let price = contract.price()?;
    /// assert!((price - 10.4506).abs() < 1e-4);
    /// # Ok::<(), pricer_lib::PricerError>(())
    /// ```
    pub fn base_contract() -> OptionContract {
        OptionContract {
            spot: 100.0,
            strike: 100.0,
            maturity: 1.0,
            rate: 0.05,
            volatility: 0.2,
            side: OptionSide::Call,
        }
    }

    /// Volatility sweep over σ ∈ linspace(0.1, 0.5, 100).
    pub fn volatility_sweep() -> SweepConfig {
        SweepConfig::volatility()
    }

    /// Maturity sweep over T ∈ linspace(0.1, 2.0, 100).
    pub fn maturity_sweep() -> SweepConfig {
        SweepConfig::maturity()
    }
}

/// Price a European option under Black-Scholes assumptions.
///
/// # Arguments
///
/// * `spot` - Current price of the underlying (> 0)
/// * `strike` - Exercise price (> 0)
/// * `maturity` - Time to expiration in years (> 0)
/// * `rate` - Continuously-compounded risk-free rate (may be negative)
/// * `volatility` - Annualized volatility as a decimal (> 0)
/// * `side` - `"call"` or `"put"` (case-insensitive)
///
/// # Errors
///
/// * [`PricerError::InvalidSide`] if `side` is anything other than call or put. The side
///   is checked before any other input.
/// * [`PricerError::InvalidDomain`] if an input is outside the formula's domain.
///
/// # Pricing Methodology
///
/// ```text
/// d1 = (ln(S/K) + (r + σ²/2)·T) / (σ·√T)
/// d2 = d1 − σ·√T
/// call = S·Φ(d1) − K·e^(−rT)·Φ(d2)
/// put  = K·e^(−rT)·Φ(−d2) − S·Φ(−d1)
/// ```
///
/// # Example
///
/// ```rust
/// use pricer_lib::{price, PricerError};
///
/// let call = price(100.0, 100.0, 1.0, 0.05, 0.2, "call")?;
/// assert!((call - 10.45).abs() < 0.01);
///
/// let err = price(100.0, 100.0, 1.0, 0.05, 0.2, "straddle").unwrap_err();
/// assert!(matches!(err, PricerError::InvalidSide(_)));
/// # Ok::<(), PricerError>(())
/// ```
pub fn price(
    spot: f64,
    strike: f64,
    maturity: f64,
    rate: f64,
    volatility: f64,
    side: &str,
) -> PricerResult<f64> {
    let side: OptionSide = side.parse()?;
    let contract = OptionContract::new(spot, strike, maturity, rate, volatility, side)?;
    bs_price(&contract)
}
