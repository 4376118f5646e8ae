use crate::error::{PricerError, PricerResult};
use crate::sweep::types::SweepParameter;

/// Configuration of a one-dimensional sensitivity sweep.
///
/// The swept parameter takes `num_points` linearly spaced values from `start` to
/// `end`, both inclusive; every other input comes from the base contract.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SweepConfig {
    #[cfg_attr(feature = "serde", serde(default))]
    pub parameter: SweepParameter,

    pub start: f64,

    pub end: f64,

    #[cfg_attr(feature = "serde", serde(default = "default_num_points"))]
    pub num_points: usize,
}

impl SweepConfig {
    pub fn new(parameter: SweepParameter, start: f64, end: f64, num_points: usize) -> Self {
        Self {
            parameter,
            start,
            end,
            num_points,
        }
    }

    /// Price vs. volatility over σ ∈ [0.1, 0.5]
    pub fn volatility() -> Self {
        Self::new(SweepParameter::Volatility, 0.1, 0.5, default_num_points())
    }

    /// Price vs. time to maturity over T ∈ [0.1, 2.0] years
    pub fn maturity() -> Self {
        Self::new(SweepParameter::Maturity, 0.1, 2.0, default_num_points())
    }

    /// Check that the grid bounds are usable.
    ///
    /// Only the bounds are checked here; whether each grid value is inside the
    /// pricing domain is reported per point when the sweep runs.
    pub fn validate(&self) -> PricerResult<()> {
        if !self.start.is_finite() || !self.end.is_finite() {
            return Err(PricerError::invalid_sweep(format!(
                "bounds must be finite, got [{}, {}]",
                self.start, self.end
            )));
        }
        Ok(())
    }

    /// Parse a sweep configuration from a TOML document.
    ///
    /// ```rust
    /// use pricer_lib::{SweepConfig, SweepParameter};
    ///
    /// let config = SweepConfig::from_toml_str(
    ///     r#"
    ///     parameter = "maturity"
    ///     start = 0.25
    ///     end = 3.0
    ///     "#,
    /// )?;
    /// assert_eq!(config.parameter, SweepParameter::Maturity);
    /// assert_eq!(config.num_points, 100);
    /// # Ok::<(), pricer_lib::PricerError>(())
    /// ```
    #[cfg(feature = "serde")]
    pub fn from_toml_str(s: &str) -> PricerResult<Self> {
        let config: Self = toml::from_str(s).map_err(|e| PricerError::config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    #[cfg(feature = "serde")]
    pub fn from_file(path: impl AsRef<std::path::Path>) -> PricerResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self::volatility()
    }
}

fn default_num_points() -> usize {
    100
}
