//! Analytic Black-Scholes sensitivities
//!
//! All Greeks are expressed per unit change of the input: vega per 1.00 of
//! volatility (not per vol point), theta per year, rho per 1.00 of rate.

use crate::error::{PricerError, PricerResult};
use crate::models::bs::d1_d2;
use crate::models::types::{OptionContract, OptionSide};
use crate::models::utils::{norm_cdf, norm_pdf};

/// First and second order sensitivities of the option price
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Greeks {
    /// ∂V/∂S
    pub delta: f64,
    /// ∂²V/∂S²
    pub gamma: f64,
    /// ∂V/∂σ
    pub vega: f64,
    /// ∂V/∂t (calendar time, so usually negative)
    pub theta: f64,
    /// ∂V/∂r
    pub rho: f64,
}

/// Compute the Black-Scholes Greeks for `contract`.
pub fn greeks(contract: &OptionContract) -> PricerResult<Greeks> {
    contract.validate()?;

    let OptionContract {
        spot,
        strike,
        maturity,
        rate,
        volatility,
        side,
    } = *contract;

    let (d1, d2) = d1_d2(contract)?;
    let sqrt_t = maturity.sqrt();
    let df = contract.discount_factor();
    let pdf_d1 = norm_pdf(d1);

    let gamma = pdf_d1 / (spot * volatility * sqrt_t);
    let vega = spot * pdf_d1 * sqrt_t;
    let time_decay = -spot * pdf_d1 * volatility / (2.0 * sqrt_t);

    let (delta, theta, rho) = match side {
        OptionSide::Call => (
            norm_cdf(d1),
            time_decay - rate * strike * df * norm_cdf(d2),
            strike * maturity * df * norm_cdf(d2),
        ),
        OptionSide::Put => (
            norm_cdf(d1) - 1.0,
            time_decay + rate * strike * df * norm_cdf(-d2),
            -strike * maturity * df * norm_cdf(-d2),
        ),
    };

    let result = Greeks {
        delta,
        gamma,
        vega,
        theta,
        rho,
    };
    for (name, value) in [
        ("delta", delta),
        ("gamma", gamma),
        ("vega", vega),
        ("theta", theta),
        ("rho", rho),
    ] {
        if !value.is_finite() {
            return Err(PricerError::numerical(format!(
                "{} is {} for {:?}",
                name, value, contract
            )));
        }
    }
    Ok(result)
}

impl OptionContract {
    /// Black-Scholes Greeks of this contract.
    pub fn greeks(&self) -> PricerResult<Greeks> {
        greeks(self)
    }
}
