// Library crate - exports the simulation, aggregation and presentation logic

pub mod chart;
pub mod config;
pub mod report;
pub mod simulate;
pub mod stats;

// Re-export commonly used types
pub use config::SimulationConfig;
pub use simulate::{make_rng, simulate_once, SimulatedRun};
pub use stats::{run_curve_pass, run_sharpe_pass, CurvePassResult, SharpePassResult};
