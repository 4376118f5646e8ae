//! SVG rendering of sensitivity sweeps

use std::path::Path;

use plotters::prelude::*;
use tracing::info;

use crate::error::{PricerError, PricerResult};
use crate::models::types::OptionSide;
use crate::sweep::types::SweepResult;

/// Chart layout options
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlotConfig {
    #[cfg_attr(feature = "serde", serde(default = "default_width"))]
    pub width: u32,
    #[cfg_attr(feature = "serde", serde(default = "default_height"))]
    pub height: u32,
    /// Caption override; derived from the sweep when None
    #[cfg_attr(feature = "serde", serde(default))]
    pub caption: Option<String>,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            caption: None,
        }
    }
}

fn default_width() -> u32 {
    1024
}

fn default_height() -> u32 {
    640
}

fn plot_err(e: impl std::fmt::Display) -> PricerError {
    PricerError::plot(e.to_string())
}

/// Default chart caption, e.g. "Call Price vs Volatility (σ)"
pub fn sweep_caption(result: &SweepResult) -> String {
    let side = match result.base.side {
        OptionSide::Call => "Call",
        OptionSide::Put => "Put",
    };
    format!("{} Price vs {}", side, result.parameter.label())
}

/// Draw the price curve of `result` against its swept parameter into an SVG file.
pub fn render_sweep_svg(
    result: &SweepResult,
    path: impl AsRef<Path>,
    config: &PlotConfig,
) -> PricerResult<()> {
    let path = path.as_ref();
    let (first, last) = match (result.points.first(), result.points.last()) {
        (Some(first), Some(last)) => (first.value, last.value),
        _ => return Err(PricerError::plot("cannot plot an empty sweep")),
    };
    let (x_min, x_max) = if first <= last { (first, last) } else { (last, first) };
    // A single point still needs a non-degenerate x range
    let (x_min, x_max) = if x_max > x_min {
        (x_min, x_max)
    } else {
        (x_min - 0.5, x_max + 0.5)
    };

    let (min_price, max_price) = result.price_range().unwrap_or((0.0, 1.0));
    let padding = ((max_price - min_price) * 0.05).max(1e-6);
    let y_min = (min_price - padding).max(0.0);
    let y_max = max_price + padding;

    let caption = config
        .caption
        .clone()
        .unwrap_or_else(|| sweep_caption(result));

    let root = SVGBackend::new(path, (config.width, config.height)).into_drawing_area();
    root.fill(&WHITE).map_err(plot_err)?;

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption(caption, ("sans-serif", 28))
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(x_min..x_max, y_min..y_max)
        .map_err(plot_err)?;

    chart
        .configure_mesh()
        .x_desc(result.parameter.label())
        .y_desc("Option Price")
        .draw()
        .map_err(plot_err)?;

    let line: Vec<(f64, f64)> = result.points.iter().map(|p| (p.value, p.price)).collect();
    chart
        .draw_series(vec![PathElement::new(line, BLUE.stroke_width(2))])
        .map_err(plot_err)?;

    root.present().map_err(plot_err)?;

    info!(path = %path.display(), points = result.len(), "sweep chart written");
    Ok(())
}
