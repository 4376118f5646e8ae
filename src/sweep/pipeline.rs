use tracing::{debug, warn};

use crate::error::PricerResult;
use crate::models::bs::BlackScholes;
use crate::models::traits::PricingModel;
use crate::models::types::OptionContract;
use crate::sweep::config::SweepConfig;
use crate::sweep::types::{SweepPoint, SweepResult};

/// `num` evenly spaced values over `[start, end]`, endpoints included.
///
/// `num == 0` yields an empty grid and `num == 1` yields `[start]`. The last value
/// is exactly `end` so a grid never overshoots its upper bound.
pub fn linspace(start: f64, end: f64, num: usize) -> Vec<f64> {
    match num {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (num - 1) as f64;
            let mut grid: Vec<f64> = (0..num).map(|i| start + step * i as f64).collect();
            grid[num - 1] = end;
            grid
        }
    }
}

/// Lazily price `base` at each point of the configured grid.
///
/// Each item is priced only when the iterator is advanced; a failing point yields
/// its error and iteration may continue with the next value.
pub fn sweep_iter<'a, M: PricingModel>(
    model: &'a M,
    base: &'a OptionContract,
    config: &SweepConfig,
) -> impl Iterator<Item = PricerResult<SweepPoint>> + 'a {
    let parameter = config.parameter;
    linspace(config.start, config.end, config.num_points)
        .into_iter()
        .map(move |value| {
            let contract = parameter.apply(base, value);
            model
                .price(&contract)
                .map(|price| SweepPoint { value, price })
        })
}

/// Price `base` across the configured grid with an explicit model.
///
/// Aborts on the first point that fails and returns that error.
pub fn run_sweep_with<M: PricingModel>(
    model: &M,
    base: &OptionContract,
    config: &SweepConfig,
) -> PricerResult<SweepResult> {
    config.validate()?;

    debug!(
        model = model.name(),
        parameter = %config.parameter,
        start = config.start,
        end = config.end,
        num_points = config.num_points,
        "starting sweep"
    );

    let mut points = Vec::with_capacity(config.num_points);
    for (index, point) in sweep_iter(model, base, config).enumerate() {
        match point {
            Ok(point) => points.push(point),
            Err(e) => {
                warn!(parameter = %config.parameter, index, error = %e, "sweep aborted");
                return Err(e);
            }
        }
    }

    debug!(points = points.len(), "sweep finished");

    Ok(SweepResult {
        base: *base,
        parameter: config.parameter,
        points,
    })
}

/// Price `base` across the configured grid with Black-Scholes.
pub fn run_sweep(base: &OptionContract, config: &SweepConfig) -> PricerResult<SweepResult> {
    run_sweep_with(&BlackScholes, base, config)
}
