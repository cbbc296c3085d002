//! Configuration for the Monte Carlo simulation

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

/// Configuration for one simulation batch.
///
/// Set once at startup and immutable for the process lifetime.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Starting asset value in dollars
    pub initial_capital: f64,

    /// Trading days per simulated path
    pub horizon_days: usize,

    /// Independent runs for the Sharpe ratio statistics pass
    pub statistics_runs: usize,

    /// Independent runs for the trajectory plotting pass
    pub plotting_runs: usize,

    /// Probability of an up day
    pub up_probability: f64,

    /// Daily move magnitude (each day returns +move or -move)
    pub daily_move_size: f64,

    /// Trading days per year for Sharpe annualization
    pub annualization_days: usize,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            initial_capital: 100.0,
            horizon_days: 100,
            statistics_runs: 1000,
            plotting_runs: 100,
            up_probability: 0.51,    // Slight upward drift
            daily_move_size: 0.01,   // +1% or -1% per day
            annualization_days: 252, // Standard trading-day count
        }
    }
}

impl SimulationConfig {
    /// Reject configurations the passes cannot meaningfully run with.
    pub fn validate(&self) -> Result<()> {
        if !(self.initial_capital > 0.0) {
            bail!("initial capital must be positive, got {}", self.initial_capital);
        }
        if self.horizon_days == 0 {
            bail!("horizon must be at least 1 day");
        }
        if self.statistics_runs == 0 {
            bail!("statistics pass needs at least 1 run");
        }
        if self.plotting_runs == 0 {
            bail!("plotting pass needs at least 1 run");
        }
        if !(0.0..=1.0).contains(&self.up_probability) {
            bail!("up probability must be within [0, 1], got {}", self.up_probability);
        }
        if !(self.daily_move_size > 0.0) {
            bail!("daily move size must be positive, got {}", self.daily_move_size);
        }
        if self.annualization_days == 0 {
            bail!("annualization day count must be at least 1");
        }
        Ok(())
    }

    /// `sqrt(annualization_days)`, the daily-to-annual Sharpe multiplier.
    pub fn annualization_factor(&self) -> f64 {
        (self.annualization_days as f64).sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(SimulationConfig::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_non_positive_capital() {
        let config = SimulationConfig { initial_capital: 0.0, ..Default::default() };
        assert!(config.validate().is_err());

        let config = SimulationConfig { initial_capital: -100.0, ..Default::default() };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_zero_horizon_and_run_counts() {
        let config = SimulationConfig { horizon_days: 0, ..Default::default() };
        assert!(config.validate().is_err());

        let config = SimulationConfig { statistics_runs: 0, ..Default::default() };
        assert!(config.validate().is_err());

        let config = SimulationConfig { plotting_runs: 0, ..Default::default() };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_out_of_range_probability() {
        let config = SimulationConfig { up_probability: 1.5, ..Default::default() };
        assert!(config.validate().is_err());

        let config = SimulationConfig { up_probability: -0.1, ..Default::default() };
        assert!(config.validate().is_err());

        // Boundaries are allowed
        let config = SimulationConfig { up_probability: 0.0, ..Default::default() };
        assert!(config.validate().is_ok());
        let config = SimulationConfig { up_probability: 1.0, ..Default::default() };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_annualization_factor() {
        let config = SimulationConfig::default();
        assert!((config.annualization_factor() - 252.0_f64.sqrt()).abs() < 1e-12);
    }
}
