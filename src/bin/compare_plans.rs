//! Compare standard and avalanche-optimized schedules across many plans
//!
//! Usage: cargo run --bin compare_plans -- plan_a.json plan_b.json ...
//!
//! Plans are evaluated in parallel; the table reports total interest under
//! each schedule and the months saved until debt-free.

use anyhow::{anyhow, Result};
use chrono::NaiveDate;
use clap::Parser;
use loan_optimizer::loan::load_plan;
use loan_optimizer::schedule::total_interest;
use loan_optimizer::{aggregate_plan, optimize_plan};
use rayon::prelude::*;
use std::time::Instant;

#[derive(Debug, Parser)]
#[command(about = "Compare standard vs avalanche schedules for plan files")]
struct Args {
    /// Plan JSON files to compare
    #[arg(required = true)]
    plans: Vec<String>,

    /// Optimization start date (YYYY-MM-DD); defaults to today
    #[arg(long)]
    as_of: Option<NaiveDate>,
}

#[derive(Debug)]
struct Comparison {
    name: String,
    standard_interest: f64,
    optimized_interest: f64,
    savings: f64,
    months_saved: i64,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let as_of = args
        .as_of
        .unwrap_or_else(|| chrono::Local::now().date_naive());

    let start = Instant::now();

    let plans = args
        .plans
        .iter()
        .map(|path| {
            load_plan(path).map_err(|e| anyhow!("failed to load plan from {}: {}", path, e))
        })
        .collect::<Result<Vec<_>>>()?;

    let comparisons = plans
        .par_iter()
        .map(|plan| -> Result<Comparison> {
            let standard = aggregate_plan(plan)?;
            let optimized = optimize_plan(plan, as_of)?;

            let standard_end = standard.last().map(|r| r.month as i64).unwrap_or(0);
            let optimized_end = optimized.rows.last().map(|r| r.month as i64).unwrap_or(0);

            Ok(Comparison {
                name: plan.name.clone(),
                standard_interest: total_interest(&standard),
                optimized_interest: total_interest(&optimized.rows),
                savings: optimized.savings,
                months_saved: standard_end - optimized_end,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    println!("Compared {} plans in {:?} (as of {})\n", comparisons.len(), start.elapsed(), as_of);
    println!("{:<24} {:>16} {:>16} {:>12} {:>12}",
        "Plan", "Std interest", "Opt interest", "Savings", "Months saved");
    println!("{}", "-".repeat(84));

    for c in &comparisons {
        println!("{:<24} {:>16.2} {:>16.2} {:>12.2} {:>12}",
            c.name, c.standard_interest, c.optimized_interest, c.savings, c.months_saved);
    }

    Ok(())
}
