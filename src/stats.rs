//! Monte Carlo aggregation: Sharpe statistics pass and trajectory plotting pass

use rand::rngs::StdRng;
use serde::Serialize;
use tracing::debug;

use crate::config::SimulationConfig;
use crate::simulate::{simulate_once, SimulatedRun};

/// Outcome of the Sharpe statistics pass.
#[derive(Debug, Clone, Serialize)]
pub struct SharpePassResult {
    /// Runs executed
    pub total_runs: usize,

    /// Runs that produced a computable Sharpe ratio (non-zero return std)
    pub retained_runs: usize,

    /// Mean per-run daily Sharpe over retained runs; `None` when every run
    /// was degenerate
    pub mean_daily_sharpe: Option<f64>,

    /// Mean per-run annualized Sharpe over retained runs
    pub mean_annualized_sharpe: Option<f64>,

    /// The last run executed, kept for the day-by-day report table
    pub sample_run: SimulatedRun,
}

/// Outcome of the plotting pass: per-day summary curves over the run matrix.
#[derive(Debug, Clone, Serialize)]
pub struct CurvePassResult {
    /// All simulated trajectories, shape `[plotting_runs][horizon_days]`
    pub curves: Vec<Vec<f64>>,

    /// Per-day mean across runs
    pub mean_curve: Vec<f64>,

    /// Per-day population std across runs
    pub std_curve: Vec<f64>,

    /// `mean + std` per day
    pub upper_band: Vec<f64>,

    /// `mean - std` per day
    pub lower_band: Vec<f64>,

    /// Run index with the highest final-day value (first on ties)
    pub max_idx: usize,

    /// Run index with the lowest final-day value (first on ties)
    pub min_idx: usize,

    pub max_final_value: f64,
    pub min_final_value: f64,
}

/// Mean and population standard deviation (divisor N, not N-1).
pub fn population_stats(xs: &[f64]) -> (f64, f64) {
    if xs.is_empty() {
        return (0.0, 0.0);
    }
    let n = xs.len() as f64;
    let mean = xs.iter().sum::<f64>() / n;
    let variance = xs.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n;
    (mean, variance.sqrt())
}

/// Run `statistics_runs` independent simulations and average the per-run
/// Sharpe ratios.
///
/// A run whose daily returns all landed on the same side has zero return
/// std and no defined Sharpe ratio. Such runs are silently skipped, not
/// recorded as zero; only the retained runs enter the means. With every
/// run skipped the means are `None`.
pub fn run_sharpe_pass(rng: &mut StdRng, config: &SimulationConfig) -> SharpePassResult {
    let annual_factor = config.annualization_factor();

    let mut daily_sharpes = Vec::with_capacity(config.statistics_runs);
    let mut annual_sharpes = Vec::with_capacity(config.statistics_runs);
    let mut sample_run = SimulatedRun { returns: Vec::new(), values: Vec::new() };

    for _ in 0..config.statistics_runs {
        let run = simulate_once(rng, config);
        let (mean_return, std_return) = population_stats(&run.returns);

        if std_return > 0.0 {
            let daily = mean_return / std_return; // risk-free rate assumed zero
            daily_sharpes.push(daily);
            annual_sharpes.push(daily * annual_factor);
        } else {
            debug!("skipping degenerate run with zero return std");
        }

        sample_run = run;
    }

    let retained = daily_sharpes.len();
    let mean_of = |xs: &[f64]| {
        if xs.is_empty() {
            None
        } else {
            Some(xs.iter().sum::<f64>() / xs.len() as f64)
        }
    };

    SharpePassResult {
        total_runs: config.statistics_runs,
        retained_runs: retained,
        mean_daily_sharpe: mean_of(&daily_sharpes),
        mean_annualized_sharpe: mean_of(&annual_sharpes),
        sample_run,
    }
}

/// Run `plotting_runs` fresh simulations and reduce them to per-day
/// mean/std curves, ±1σ bands and the extreme-final-value runs.
pub fn run_curve_pass(rng: &mut StdRng, config: &SimulationConfig) -> CurvePassResult {
    let curves: Vec<Vec<f64>> = (0..config.plotting_runs)
        .map(|_| simulate_once(rng, config).values)
        .collect();

    let (mean_curve, std_curve) = per_day_stats(&curves, config.horizon_days);
    let upper_band: Vec<f64> = mean_curve.iter().zip(&std_curve).map(|(m, s)| m + s).collect();
    let lower_band: Vec<f64> = mean_curve.iter().zip(&std_curve).map(|(m, s)| m - s).collect();

    let (max_idx, min_idx) = final_value_extremes(&curves);
    let max_final_value = *curves[max_idx].last().unwrap_or(&0.0);
    let min_final_value = *curves[min_idx].last().unwrap_or(&0.0);

    CurvePassResult {
        curves,
        mean_curve,
        std_curve,
        upper_band,
        lower_band,
        max_idx,
        min_idx,
        max_final_value,
        min_final_value,
    }
}

/// Mean and population std per day across the run axis.
fn per_day_stats(curves: &[Vec<f64>], horizon_days: usize) -> (Vec<f64>, Vec<f64>) {
    let mut mean_curve = Vec::with_capacity(horizon_days);
    let mut std_curve = Vec::with_capacity(horizon_days);

    for day in 0..horizon_days {
        let day_values: Vec<f64> = curves.iter().map(|c| c[day]).collect();
        let (mean, std) = population_stats(&day_values);
        mean_curve.push(mean);
        std_curve.push(std);
    }

    (mean_curve, std_curve)
}

/// Indices of the runs with the highest and lowest final-day value.
/// Strict comparisons keep the first occurrence on ties.
fn final_value_extremes(curves: &[Vec<f64>]) -> (usize, usize) {
    let mut max_idx = 0;
    let mut min_idx = 0;

    for (i, curve) in curves.iter().enumerate() {
        let last = *curve.last().unwrap_or(&0.0);
        if last > *curves[max_idx].last().unwrap_or(&0.0) {
            max_idx = i;
        }
        if last < *curves[min_idx].last().unwrap_or(&0.0) {
            min_idx = i;
        }
    }

    (max_idx, min_idx)
}
