pub mod bs;
pub mod types;

/// Common traits used by pricing models
pub mod traits {
    use crate::error::PricerResult;
    use crate::models::types::OptionContract;

    /// Pricing model trait for European option valuation
    pub trait PricingModel {
        /// Short model identifier used in logs and chart captions
        fn name(&self) -> &str;

        /// Fair value of `contract`, or an error if the inputs are outside the
        /// model's domain
        fn price(&self, contract: &OptionContract) -> PricerResult<f64>;
    }
}

/// Standard normal distribution helpers
pub mod utils {
    use std::f64::consts::{FRAC_1_SQRT_2, PI};

    /// Standard normal cumulative distribution function.
    ///
    /// Evaluated through the complementary error function so that both tails keep
    /// full relative precision: `Φ(x) = erfc(-x / √2) / 2`.
    pub fn norm_cdf(x: f64) -> f64 {
        0.5 * libm::erfc(-x * FRAC_1_SQRT_2)
    }

    /// Standard normal probability density function
    pub fn norm_pdf(x: f64) -> f64 {
        (-0.5 * x * x).exp() / (2.0 * PI).sqrt()
    }

}

pub use bs::BlackScholes;
pub use traits::PricingModel;
pub use types::{OptionContract, OptionSide};
