// demos/sensitivity_plots.rs

//! Price vs. volatility and price vs. maturity for an at-the-money call
//!
//! Usage:
//!     cargo run --example sensitivity_plots -- [sweep.toml]
//!
//! Without an argument the two preset sweeps are run. With a TOML file (fields
//! `parameter`, `start`, `end`, `num_points`) only that sweep is run. Every sweep
//! is written as `<parameter>_sweep.svg` and `<parameter>_sweep.csv` in the working
//! directory.

use std::env;

use anyhow::{Context, Result};
use pricer_lib::{
    default_configs, price, render_sweep_svg, run_sweep, PlotConfig, SweepConfig, SweepResult,
};
use tracing_subscriber::EnvFilter;

fn write_csv(result: &SweepResult, path: &str) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record([result.parameter.as_str(), "price"])?;
    for point in &result.points {
        writer.write_record(&[point.value.to_string(), point.price.to_string()])?;
    }
    writer.flush()?;
    Ok(())
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    println!("Black-Scholes Sensitivity Sweeps");
    println!("================================");

    let base = default_configs::base_contract();
    let call = price(base.spot, base.strike, base.maturity, base.rate, base.volatility, "call")?;
    let put = price(base.spot, base.strike, base.maturity, base.rate, base.volatility, "put")?;
    println!(
        "S={} K={} T={} r={} σ={}",
        base.spot, base.strike, base.maturity, base.rate, base.volatility
    );
    println!("  Call: {:.4}", call);
    println!("  Put:  {:.4}", put);

    let sweeps: Vec<SweepConfig> = match env::args().nth(1) {
        Some(path) => vec![SweepConfig::from_file(&path)
            .with_context(|| format!("failed to load sweep config from {}", path))?],
        None => vec![
            default_configs::volatility_sweep(),
            default_configs::maturity_sweep(),
        ],
    };

    for config in &sweeps {
        let result = run_sweep(&base, config)?;
        let (lo, hi) = result.price_range().unwrap_or((0.0, 0.0));
        println!(
            "\n{} sweep: {} points over [{}, {}], price range [{:.4}, {:.4}]",
            config.parameter, result.len(), config.start, config.end, lo, hi
        );

        let svg_path = format!("{}_sweep.svg", config.parameter);
        let csv_path = format!("{}_sweep.csv", config.parameter);
        render_sweep_svg(&result, &svg_path, &PlotConfig::default())?;
        write_csv(&result, &csv_path)?;
        println!("  Chart saved to {}", svg_path);
        println!("  Data saved to {}", csv_path);
    }

    Ok(())
}
