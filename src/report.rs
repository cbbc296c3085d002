//! Text presentation of the simulation results

use crate::stats::{CurvePassResult, SharpePassResult};

/// Print the Sharpe statistics summary.
pub fn print_sharpe_summary(result: &SharpePassResult) {
    println!("\n═══════════════════════════════════════════════════════════");
    println!("            MONTE CARLO SHARPE RATIO ESTIMATE               ");
    println!("═══════════════════════════════════════════════════════════\n");

    match (result.mean_daily_sharpe, result.mean_annualized_sharpe) {
        (Some(daily), Some(annual)) => {
            println!(
                "Average Sharpe Ratio after {} simulations: {:.4}",
                result.total_runs, daily
            );
            println!(
                "Average Annual Sharpe Ratio after {} simulations: {:.4}",
                result.total_runs, annual
            );
        }
        _ => {
            println!(
                "No valid runs out of {}: every run had zero return std,",
                result.total_runs
            );
            println!("so no Sharpe ratio is defined.");
        }
    }

    if result.retained_runs < result.total_runs {
        println!(
            "  ({} of {} runs retained; zero-std runs are excluded)",
            result.retained_runs, result.total_runs
        );
    }
}

/// Print one run's day-by-day returns and asset values.
pub fn print_sample_run_table(result: &SharpePassResult) {
    if result.sample_run.returns.is_empty() {
        return;
    }

    println!("\n  {:>5} {:>14} {:>14}", "Day", "Daily Return", "Asset Value");
    println!("  {}", "-".repeat(37));

    let rows = result.sample_run.returns.iter().zip(&result.sample_run.values);
    for (day, (ror, value)) in rows.enumerate() {
        println!("  {:>5} {:>14.4} {:>14.4}", day + 1, ror, value);
    }
}

/// Print the extreme final asset values from the plotting pass.
pub fn print_extremes(result: &CurvePassResult) {
    println!();
    println!("Highest final asset value: {:.2}", result.max_final_value);
    println!("Lowest final asset value:  {:.2}", result.min_final_value);
}
