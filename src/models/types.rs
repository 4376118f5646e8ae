use std::fmt;
use std::str::FromStr;

use crate::error::{PricerError, PricerResult};

/// Which payoff structure to price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum OptionSide {
    Call,
    Put,
}

impl OptionSide {
    /// Payoff at expiry for the given spot.
    pub fn intrinsic(&self, spot: f64, strike: f64) -> f64 {
        match self {
            OptionSide::Call => (spot - strike).max(0.0),
            OptionSide::Put => (strike - spot).max(0.0),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OptionSide::Call => "call",
            OptionSide::Put => "put",
        }
    }
}

impl FromStr for OptionSide {
    type Err = PricerError;

    fn from_str(s: &str) -> PricerResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "call" => Ok(OptionSide::Call),
            "put" => Ok(OptionSide::Put),
            _ => Err(PricerError::invalid_side(s)),
        }
    }
}

impl fmt::Display for OptionSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A European option together with the market inputs needed to price it.
///
/// Values are constructed, priced and discarded; nothing is cached between calls.
/// Construction through [`OptionContract::new`] validates the domain up front, but
/// the fields stay public so sweeps can vary one input at a time, and every pricing
/// entry point re-validates before doing any arithmetic.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OptionContract {
    /// Current price of the underlying asset
    pub spot: f64,
    /// Exercise price
    pub strike: f64,
    /// Time to expiration in years
    pub maturity: f64,
    /// Continuously-compounded risk-free rate (may be negative)
    pub rate: f64,
    /// Annualized volatility of log-returns (as decimal, e.g. 0.2 for 20%)
    pub volatility: f64,
    pub side: OptionSide,
}

impl OptionContract {
    pub fn new(
        spot: f64,
        strike: f64,
        maturity: f64,
        rate: f64,
        volatility: f64,
        side: OptionSide,
    ) -> PricerResult<Self> {
        let contract = Self {
            spot,
            strike,
            maturity,
            rate,
            volatility,
            side,
        };
        contract.validate()?;
        Ok(contract)
    }

    pub fn call(
        spot: f64,
        strike: f64,
        maturity: f64,
        rate: f64,
        volatility: f64,
    ) -> PricerResult<Self> {
        Self::new(spot, strike, maturity, rate, volatility, OptionSide::Call)
    }

    pub fn put(
        spot: f64,
        strike: f64,
        maturity: f64,
        rate: f64,
        volatility: f64,
    ) -> PricerResult<Self> {
        Self::new(spot, strike, maturity, rate, volatility, OptionSide::Put)
    }

    /// Same inputs with the payoff side replaced by `side`.
    pub fn with_side(&self, side: OptionSide) -> Self {
        Self { side, ..*self }
    }

    /// Check the closed-form domain: spot, strike, maturity and volatility must be
    /// finite and strictly positive, the rate only finite.
    pub fn validate(&self) -> PricerResult<()> {
        for (field, value) in [
            ("spot", self.spot),
            ("strike", self.strike),
            ("maturity", self.maturity),
            ("volatility", self.volatility),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(PricerError::invalid_domain(field, value));
            }
        }
        if !self.rate.is_finite() {
            return Err(PricerError::invalid_domain("rate", self.rate));
        }
        Ok(())
    }

    /// Discount factor `exp(-r * T)`.
    pub fn discount_factor(&self) -> f64 {
        (-self.rate * self.maturity).exp()
    }

    pub fn intrinsic(&self) -> f64 {
        self.side.intrinsic(self.spot, self.strike)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_parsing() {
        assert_eq!("call".parse::<OptionSide>().unwrap(), OptionSide::Call);
        assert_eq!(" PUT ".parse::<OptionSide>().unwrap(), OptionSide::Put);
        assert_eq!("Call".parse::<OptionSide>().unwrap(), OptionSide::Call);

        match "straddle".parse::<OptionSide>() {
            Err(PricerError::InvalidSide(side)) => assert_eq!(side, "straddle"),
            other => panic!("expected InvalidSide, got {:?}", other),
        }
        assert!("".parse::<OptionSide>().is_err());
    }

    #[test]
    fn test_side_display_round_trips() {
        for side in [OptionSide::Call, OptionSide::Put] {
            assert_eq!(side.to_string().parse::<OptionSide>().unwrap(), side);
        }
    }

    #[test]
    fn test_intrinsic() {
        assert_eq!(OptionSide::Call.intrinsic(110.0, 100.0), 10.0);
        assert_eq!(OptionSide::Call.intrinsic(90.0, 100.0), 0.0);
        assert_eq!(OptionSide::Put.intrinsic(90.0, 100.0), 10.0);
        assert_eq!(OptionSide::Put.intrinsic(110.0, 100.0), 0.0);
    }

    #[test]
    fn test_contract_validation() {
        assert!(OptionContract::call(100.0, 100.0, 1.0, 0.05, 0.2).is_ok());
        // Negative rates are allowed
        assert!(OptionContract::put(100.0, 100.0, 1.0, -0.01, 0.2).is_ok());

        let cases = [
            (OptionContract::call(0.0, 100.0, 1.0, 0.05, 0.2), "spot"),
            (OptionContract::call(100.0, -5.0, 1.0, 0.05, 0.2), "strike"),
            (OptionContract::call(100.0, 100.0, 0.0, 0.05, 0.2), "maturity"),
            (OptionContract::call(100.0, 100.0, 1.0, 0.05, 0.0), "volatility"),
            (OptionContract::call(100.0, 100.0, 1.0, f64::INFINITY, 0.2), "rate"),
            (OptionContract::call(f64::NAN, 100.0, 1.0, 0.05, 0.2), "spot"),
        ];
        for (result, expected_field) in cases {
            match result {
                Err(PricerError::InvalidDomain { field, .. }) => assert_eq!(field, expected_field),
                other => panic!("expected InvalidDomain({}), got {:?}", expected_field, other),
            }
        }
    }

    #[test]
    fn test_with_side_keeps_inputs() {
        let call = OptionContract::call(100.0, 95.0, 0.5, 0.03, 0.25).unwrap();
        let put = call.with_side(OptionSide::Put);
        assert_eq!(put.side, OptionSide::Put);
        assert_eq!(put.strike, call.strike);
        assert_eq!(put.maturity, call.maturity);
    }
}
