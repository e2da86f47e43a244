//! Compute a financing plan's amortization schedule from a JSON plan file
//!
//! Usage: cargo run --bin run_plan -- --plan plan.json --output schedule.csv
//! Pass --optimize to write the avalanche-optimized schedule instead.

use anyhow::{anyhow, Context, Result};
use chrono::NaiveDate;
use clap::Parser;
use loan_optimizer::export::{plan_summary, write_schedule_csv};
use loan_optimizer::loan::load_plan;
use loan_optimizer::{aggregate_plan, optimize_plan, optimize_plan_today};
use std::fs::File;

#[derive(Debug, Parser)]
#[command(about = "Compute the amortization schedule of a financing plan")]
struct Args {
    /// Path to the plan JSON file
    #[arg(long)]
    plan: String,

    /// Output CSV path
    #[arg(long)]
    output: String,

    /// Reallocate the monthly budget with the avalanche method
    #[arg(long)]
    optimize: bool,

    /// Optimization start date (YYYY-MM-DD); defaults to today
    #[arg(long)]
    as_of: Option<NaiveDate>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let plan = load_plan(&args.plan)
        .map_err(|e| anyhow!("failed to load plan from {}: {}", args.plan, e))?;
    println!("Loaded plan '{}' with {} loans", plan.name, plan.loans.len());

    for loan in &plan.loans {
        loan.validate()
            .with_context(|| format!("loan '{}' is invalid", loan.name))?;
    }

    let rows = if args.optimize {
        let optimized = match args.as_of {
            Some(as_of) => optimize_plan(&plan, as_of)?,
            None => optimize_plan_today(&plan)?,
        };
        println!("Avalanche savings: {:.2}", optimized.savings);
        optimized.rows
    } else {
        aggregate_plan(&plan)?
    };

    let file = File::create(&args.output)
        .with_context(|| format!("unable to create {}", args.output))?;
    write_schedule_csv(file, &rows).map_err(|e| anyhow!("failed to write CSV: {}", e))?;

    println!("{}", plan_summary(&plan, &rows));
    println!("Schedule written to: {}", args.output);

    Ok(())
}
