use std::fmt;

use crate::models::types::OptionContract;

/// Contract input varied across a sensitivity sweep
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum SweepParameter {
    Spot,
    Strike,
    Maturity,
    Rate,
    #[default]
    Volatility,
}

impl SweepParameter {
    /// Copy of `base` with this parameter replaced by `value`.
    pub fn apply(&self, base: &OptionContract, value: f64) -> OptionContract {
        let mut contract = *base;
        match self {
            SweepParameter::Spot => contract.spot = value,
            SweepParameter::Strike => contract.strike = value,
            SweepParameter::Maturity => contract.maturity = value,
            SweepParameter::Rate => contract.rate = value,
            SweepParameter::Volatility => contract.volatility = value,
        }
        contract
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SweepParameter::Spot => "spot",
            SweepParameter::Strike => "strike",
            SweepParameter::Maturity => "maturity",
            SweepParameter::Rate => "rate",
            SweepParameter::Volatility => "volatility",
        }
    }

    /// Human readable axis label
    pub fn label(&self) -> &'static str {
        match self {
            SweepParameter::Spot => "Spot Price",
            SweepParameter::Strike => "Strike Price",
            SweepParameter::Maturity => "Time to Maturity (years)",
            SweepParameter::Rate => "Risk-free Rate",
            SweepParameter::Volatility => "Volatility (σ)",
        }
    }
}

impl fmt::Display for SweepParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One priced point of a sweep
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SweepPoint {
    /// Value the swept parameter took at this point
    pub value: f64,
    /// Option price at that value
    pub price: f64,
}

/// Ordered output of a completed sweep
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SweepResult {
    /// Contract every point was derived from
    pub base: OptionContract,
    pub parameter: SweepParameter,
    /// Points in the order of the parameter grid
    pub points: Vec<SweepPoint>,
}

impl SweepResult {
    pub fn values(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.value).collect()
    }

    pub fn prices(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.price).collect()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// (min, max) of the prices, or None for an empty sweep
    pub fn price_range(&self) -> Option<(f64, f64)> {
        if self.points.is_empty() {
            return None;
        }
        let min = self.points.iter().map(|p| p.price).fold(f64::INFINITY, f64::min);
        let max = self
            .points
            .iter()
            .map(|p| p.price)
            .fold(f64::NEG_INFINITY, f64::max);
        Some((min, max))
    }
}
