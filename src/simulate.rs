//! Path simulator: one asset trajectory from independent daily coin-flip returns

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

use crate::config::SimulationConfig;

/// One simulated run: the daily returns drawn and the asset values they compound to.
///
/// `values[t]` is the asset value after applying `returns[t]`; the initial
/// capital itself is not part of the trajectory, so both vectors have exactly
/// `horizon_days` entries.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulatedRun {
    pub returns: Vec<f64>,
    pub values: Vec<f64>,
}

/// Build the shared RNG. A fixed seed makes the whole pipeline reproducible;
/// without one the generator is entropy-seeded.
pub fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_entropy(),
    }
}

/// Draw `horizon_days` i.i.d. daily returns, each `+move_size` with
/// probability `up_probability`, else `-move_size`.
pub fn draw_returns(
    rng: &mut StdRng,
    horizon_days: usize,
    up_probability: f64,
    move_size: f64,
) -> Vec<f64> {
    (0..horizon_days)
        .map(|_| {
            if rng.gen::<f64>() < up_probability {
                move_size
            } else {
                -move_size
            }
        })
        .collect()
}

/// Compound daily returns into the asset-value trajectory.
pub fn compound_values(initial_capital: f64, returns: &[f64]) -> Vec<f64> {
    let mut values = Vec::with_capacity(returns.len());
    let mut current = initial_capital;
    for ror in returns {
        current *= 1.0 + ror;
        values.push(current);
    }
    values
}

/// Simulate one full run under `config`, consuming entropy from `rng`.
pub fn simulate_once(rng: &mut StdRng, config: &SimulationConfig) -> SimulatedRun {
    let returns = draw_returns(
        rng,
        config.horizon_days,
        config.up_probability,
        config.daily_move_size,
    );
    let values = compound_values(config.initial_capital, &returns);
    SimulatedRun { returns, values }
}
