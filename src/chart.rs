//! Chart artifact rendering and machine-readable results export
//!
//! No return value from the chart feeds back into the computation; the
//! rendered file is a terminal output. The artifact is a self-contained
//! HTML page with the trajectory data embedded as JSON and drawn
//! client-side on a canvas.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::config::SimulationConfig;
use crate::stats::{CurvePassResult, SharpePassResult};

const CHART_TEMPLATE: &str = include_str!("../static/chart.html");
const PAYLOAD_MARKER: &str = "__CHART_DATA__";

#[derive(Serialize)]
struct ChartPayload<'a> {
    title: String,
    horizon_days: usize,
    curves: &'a [Vec<f64>],
    mean_curve: &'a [f64],
    upper_band: &'a [f64],
    lower_band: &'a [f64],
    max_idx: usize,
    min_idx: usize,
    max_final_value: f64,
    min_final_value: f64,
}

/// Fill the chart template with this batch's trajectory data.
pub fn render_chart(config: &SimulationConfig, curves: &CurvePassResult) -> Result<String> {
    let payload = ChartPayload {
        title: format!(
            "Asset Value Over {} Days ({} Simulations)",
            config.horizon_days, config.plotting_runs
        ),
        horizon_days: config.horizon_days,
        curves: &curves.curves,
        mean_curve: &curves.mean_curve,
        upper_band: &curves.upper_band,
        lower_band: &curves.lower_band,
        max_idx: curves.max_idx,
        min_idx: curves.min_idx,
        max_final_value: curves.max_final_value,
        min_final_value: curves.min_final_value,
    };

    let json = serde_json::to_string(&payload).context("Failed to serialize chart payload")?;
    Ok(CHART_TEMPLATE.replace(PAYLOAD_MARKER, &json))
}

/// Render and write the chart artifact.
pub fn write_chart(path: &Path, config: &SimulationConfig, curves: &CurvePassResult) -> Result<()> {
    let html = render_chart(config, curves)?;
    fs::write(path, html).with_context(|| format!("Failed to write chart to {path:?}"))?;
    Ok(())
}

/// Everything one batch produced, dumped as pretty JSON alongside the chart.
#[derive(Serialize)]
struct ResultsFile<'a> {
    config: &'a SimulationConfig,
    sharpe: &'a SharpePassResult,
    trajectories: &'a CurvePassResult,
}

pub fn write_results_json(
    path: &Path,
    config: &SimulationConfig,
    sharpe: &SharpePassResult,
    curves: &CurvePassResult,
) -> Result<()> {
    let results = ResultsFile { config, sharpe, trajectories: curves };
    let json = serde_json::to_string_pretty(&results)?;
    fs::write(path, json).with_context(|| format!("Failed to write results to {path:?}"))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulate::make_rng;
    use crate::stats::run_curve_pass;

    fn small_curve_pass() -> (SimulationConfig, CurvePassResult) {
        let config = SimulationConfig {
            plotting_runs: 5,
            horizon_days: 10,
            ..Default::default()
        };
        let mut rng = make_rng(Some(1));
        let curves = run_curve_pass(&mut rng, &config);
        (config, curves)
    }

    #[test]
    fn test_template_contains_payload_marker() {
        assert!(CHART_TEMPLATE.contains(PAYLOAD_MARKER));
        assert!(CHART_TEMPLATE.contains("<!doctype html>"));
    }

    #[test]
    fn test_render_embeds_data_and_labels() {
        let (config, curves) = small_curve_pass();
        let html = render_chart(&config, &curves).unwrap();

        assert!(!html.contains(PAYLOAD_MARKER));
        assert!(html.contains("\"horizon_days\":10"));
        assert!(html.contains("Asset Value ($)"));
        assert!(html.contains("Highest Final Asset"));
        assert!(html.contains("Lowest Final Asset"));
        assert!(html.contains("Mean Asset Curve"));
        assert!(html.contains("±1σ Range"));
    }

    #[test]
    fn test_results_json_round_trips() {
        let (config, curves) = small_curve_pass();
        let mut rng = make_rng(Some(2));
        let sharpe = crate::stats::run_sharpe_pass(&mut rng, &config);

        let results = ResultsFile { config: &config, sharpe: &sharpe, trajectories: &curves };
        let json = serde_json::to_string_pretty(&results).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed["config"]["horizon_days"], 10);
        assert_eq!(
            parsed["trajectories"]["curves"].as_array().unwrap().len(),
            config.plotting_runs
        );
    }
}
