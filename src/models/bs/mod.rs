// Black-Scholes closed-form pricing of European calls and puts on a
// non-dividend-paying underlying, plus the analytic Greeks in `greeks`.

pub mod greeks;

use crate::error::{PricerError, PricerResult};
use crate::models::traits::PricingModel;
use crate::models::types::{OptionContract, OptionSide};
use crate::models::utils::norm_cdf;

pub use greeks::{greeks, Greeks};

/// Black-Scholes `d1` and `d2` for a validated contract.
///
/// `σ·√T` can underflow to zero for tiny but positive inputs; that is reported as
/// a volatility outside the domain instead of dividing by zero.
pub(crate) fn d1_d2(contract: &OptionContract) -> PricerResult<(f64, f64)> {
    let sqrt_t = contract.maturity.sqrt();
    let vol_sqrt_t = contract.volatility * sqrt_t;
    if vol_sqrt_t <= 0.0 {
        return Err(PricerError::invalid_domain("volatility", contract.volatility));
    }
    let d1 = ((contract.spot / contract.strike).ln()
        + (contract.rate + 0.5 * contract.volatility.powi(2)) * contract.maturity)
        / vol_sqrt_t;
    if d1.is_nan() {
        return Err(PricerError::numerical(format!("d1 is NaN for {:?}", contract)));
    }
    Ok((d1, d1 - vol_sqrt_t))
}

/// Price a European option under Black-Scholes assumptions.
///
/// Fails with `InvalidDomain` when spot, strike, maturity or volatility are not
/// strictly positive and finite, or the rate is not finite, and with `Numerical`
/// when the inputs are valid but the result is not finite (e.g. a discount factor
/// that overflows for a large negative `r·T`).
pub fn bs_price(contract: &OptionContract) -> PricerResult<f64> {
    contract.validate()?;

    let (d1, d2) = d1_d2(contract)?;
    let df = contract.discount_factor();
    let price = match contract.side {
        OptionSide::Call => contract.spot * norm_cdf(d1) - contract.strike * df * norm_cdf(d2),
        OptionSide::Put => contract.strike * df * norm_cdf(-d2) - contract.spot * norm_cdf(-d1),
    };
    if !price.is_finite() {
        return Err(PricerError::numerical(format!(
            "{} price is {} for {:?}",
            contract.side, price, contract
        )));
    }
    Ok(price)
}

/// Price of a European call option under Black-Scholes assumptions.
#[allow(non_snake_case)]
pub fn bs_call_price(S: f64, K: f64, T: f64, r: f64, sigma: f64) -> PricerResult<f64> {
    bs_price(&OptionContract {
        spot: S,
        strike: K,
        maturity: T,
        rate: r,
        volatility: sigma,
        side: OptionSide::Call,
    })
}

/// Price of a European put option under Black-Scholes assumptions.
#[allow(non_snake_case)]
pub fn bs_put_price(S: f64, K: f64, T: f64, r: f64, sigma: f64) -> PricerResult<f64> {
    bs_price(&OptionContract {
        spot: S,
        strike: K,
        maturity: T,
        rate: r,
        volatility: sigma,
        side: OptionSide::Put,
    })
}

/// The Black-Scholes model as a [`PricingModel`].
#[derive(Debug, Clone, Copy, Default)]
pub struct BlackScholes;

impl PricingModel for BlackScholes {
    fn name(&self) -> &str {
        "black-scholes"
    }

    fn price(&self, contract: &OptionContract) -> PricerResult<f64> {
        bs_price(contract)
    }
}

impl OptionContract {
    /// Black-Scholes fair value of this contract.
    pub fn price(&self) -> PricerResult<f64> {
        bs_price(self)
    }
}
