//! Loan Optimizer CLI
//!
//! Demo run: amortize a reference loan, aggregate a two-loan plan, and
//! show what the avalanche optimization saves

use chrono::NaiveDate;
use loan_optimizer::export::{plan_summary, write_schedule_csv};
use loan_optimizer::payment::standard_monthly_payment;
use loan_optimizer::{
    aggregate_plan, amortize, optimize_plan_today, CalculationMode, FinancingPlan, Loan,
};
use std::fs::File;

fn main() {
    env_logger::init();

    println!("Loan Optimizer v0.1.0");
    println!("=====================\n");

    // Reference loan: 200k at 1.5% over 20 years
    let home = Loan {
        name: "Main home".to_string(),
        amount: 200_000.0,
        annual_rate: 1.5,
        duration_years: 20,
        monthly_payment: standard_monthly_payment(200_000.0, 1.5, 20),
        start_date: NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid date"),
        calculation_mode: CalculationMode::Payment,
        payment_periods: Vec::new(),
    };

    let car = Loan {
        name: "Car".to_string(),
        amount: 15_000.0,
        annual_rate: 4.2,
        duration_years: 5,
        monthly_payment: standard_monthly_payment(15_000.0, 4.2, 5),
        start_date: NaiveDate::from_ymd_opt(2025, 6, 1).expect("valid date"),
        calculation_mode: CalculationMode::Payment,
        payment_periods: Vec::new(),
    };

    println!("Loan: {}", home.name);
    println!("  Amount: {:.2}", home.amount);
    println!("  Rate: {}%", home.annual_rate);
    println!("  Monthly payment: {:.2}", home.monthly_payment);
    println!();

    // Single-loan amortization table
    let schedule = amortize(&home);
    println!("Amortization ({} months):", schedule.rows.len());
    println!("{:>5} {:>12} {:>10} {:>10} {:>10} {:>14}",
        "Month", "Date", "Payment", "Principal", "Interest", "Remaining");
    println!("{}", "-".repeat(66));

    for row in schedule.rows.iter().take(12) {
        println!("{:>5} {:>12} {:>10.2} {:>10.2} {:>10.2} {:>14.2}",
            row.month,
            row.date,
            row.monthly_payment,
            row.principal,
            row.interest,
            row.remaining,
        );
    }
    if schedule.rows.len() > 12 {
        println!("... ({} more months)", schedule.rows.len() - 12);
    }
    println!("  Total cost: {:.2}", schedule.total_cost);
    println!("  Total interest: {:.2}\n", schedule.total_interest);

    // Two-loan plan: standard schedule and avalanche optimization
    let plan = FinancingPlan {
        name: "Home + car".to_string(),
        loans: vec![home, car],
        created: chrono::Local::now().date_naive(),
    };

    let standard = aggregate_plan(&plan).expect("plan has loans");
    let optimized = optimize_plan_today(&plan).expect("plan has loans");

    println!("{}", plan_summary(&plan, &standard));
    println!("Avalanche optimization:");
    println!("  Optimized months: {}", optimized.rows.len());
    println!("  Interest saved: {:.2}", optimized.savings);

    // Write full schedules to CSV
    let standard_path = "plan_schedule.csv";
    let file = File::create(standard_path).expect("Unable to create CSV file");
    write_schedule_csv(file, &standard).expect("Unable to write CSV");
    println!("\nStandard schedule written to: {}", standard_path);

    let optimized_path = "plan_schedule_optimized.csv";
    let file = File::create(optimized_path).expect("Unable to create CSV file");
    write_schedule_csv(file, &optimized.rows).expect("Unable to write CSV");
    println!("Optimized schedule written to: {}", optimized_path);
}
