use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use sharpe_sim::{chart, report, stats, SimulationConfig};
use sharpe_sim::simulate::make_rng;

#[derive(Parser, Debug)]
#[command(name = "sharpe-sim")]
#[command(about = "Monte Carlo Sharpe ratio estimation for a ±1% coin-flip random walk")]
struct Args {
    /// Starting asset value in dollars
    #[arg(long, default_value = "100.0")]
    initial_capital: f64,

    /// Trading days per simulated path
    #[arg(long, default_value = "100")]
    horizon_days: usize,

    /// Independent runs for the Sharpe statistics pass
    #[arg(long, default_value = "1000")]
    statistics_runs: usize,

    /// Independent runs for the trajectory plotting pass
    #[arg(long, default_value = "100")]
    plotting_runs: usize,

    /// Probability of an up day
    #[arg(long, default_value = "0.51")]
    up_probability: f64,

    /// Daily move magnitude (each day returns +size or -size)
    #[arg(long, default_value = "0.01")]
    daily_move_size: f64,

    /// Trading days per year for annualization
    #[arg(long, default_value = "252")]
    annualization_days: usize,

    /// RNG seed for reproducible runs (omit for a fresh draw)
    #[arg(long)]
    seed: Option<u64>,

    /// Output directory for the chart and results JSON
    #[arg(short, long, default_value = "output")]
    output_dir: PathBuf,

    /// Skip rendering the chart artifact
    #[arg(long)]
    no_chart: bool,

    /// Print verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(if args.verbose { Level::DEBUG } else { Level::INFO })
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = SimulationConfig {
        initial_capital: args.initial_capital,
        horizon_days: args.horizon_days,
        statistics_runs: args.statistics_runs,
        plotting_runs: args.plotting_runs,
        up_probability: args.up_probability,
        daily_move_size: args.daily_move_size,
        annualization_days: args.annualization_days,
    };
    config.validate()?;

    info!("=== MONTE CARLO SHARPE SIMULATION ===");
    info!("Initial capital: {}", config.initial_capital);
    info!("Horizon: {} days", config.horizon_days);
    info!("Statistics pass: {} runs", config.statistics_runs);
    info!("Plotting pass: {} runs", config.plotting_runs);
    info!("Up probability: {}, move size: {}", config.up_probability, config.daily_move_size);
    match args.seed {
        Some(seed) => info!("Seed: {} (deterministic)", seed),
        None => info!("Seed: entropy (nondeterministic)"),
    }

    std::fs::create_dir_all(&args.output_dir)?;

    // One RNG advanced sequentially through both passes; the plotting pass
    // draws fresh paths, never reusing the statistics pass runs.
    let mut rng = make_rng(args.seed);

    let sharpe = stats::run_sharpe_pass(&mut rng, &config);
    report::print_sharpe_summary(&sharpe);
    report::print_sample_run_table(&sharpe);

    let curves = stats::run_curve_pass(&mut rng, &config);
    report::print_extremes(&curves);

    let results_path = args.output_dir.join("results.json");
    chart::write_results_json(&results_path, &config, &sharpe, &curves)?;
    info!("Wrote results to {:?}", results_path);

    if !args.no_chart {
        let chart_path = args.output_dir.join("chart.html");
        chart::write_chart(&chart_path, &config, &curves)?;
        info!("Wrote chart to {:?}", chart_path);
    }

    info!("Simulation complete!");
    Ok(())
}
