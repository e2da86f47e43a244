//! Export of computed schedules to CSV, JSON, and plain text
//!
//! These render `AmortizationRow` slices read-only; nothing here feeds
//! back into the schedule engines.

use std::error::Error;
use std::io;

use serde_json::json;

use crate::loan::FinancingPlan;
use crate::schedule::{AmortizationRow, PlanSummary};

/// Write a plan schedule as CSV: one record per month with plan totals
pub fn write_schedule_csv<W: io::Write>(
    writer: W,
    rows: &[AmortizationRow],
) -> Result<(), Box<dyn Error>> {
    let mut wtr = csv::Writer::from_writer(writer);

    wtr.write_record([
        "Month",
        "Date",
        "TotalPayment",
        "TotalPrincipal",
        "TotalInterest",
        "TotalRemaining",
    ])?;

    for row in rows {
        wtr.write_record([
            row.month.to_string(),
            row.date.to_string(),
            format!("{:.2}", row.total_monthly_payment),
            format!("{:.2}", row.total_principal),
            format!("{:.2}", row.total_interest),
            format!("{:.2}", row.total_remaining),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Bundle a plan and its schedule into one JSON value for machine consumption
pub fn plan_export_json(plan: &FinancingPlan, rows: &[AmortizationRow]) -> serde_json::Value {
    json!({
        "plan": plan,
        "amortization": rows,
    })
}

/// Render a plain-text summary of a plan and its computed schedule
pub fn plan_summary(plan: &FinancingPlan, rows: &[AmortizationRow]) -> String {
    let mut out = String::new();

    out.push_str("=== FINANCING PLAN SUMMARY ===\n\n");
    out.push_str(&format!("Name: {}\n", plan.name));
    out.push_str(&format!("Created: {}\n\n", plan.created));

    out.push_str("--- LOANS ---\n");
    for (index, loan) in plan.loans.iter().enumerate() {
        out.push_str(&format!("{}. {}\n", index + 1, loan.name));
        out.push_str(&format!("   Amount: {:.2}\n", loan.amount));
        out.push_str(&format!("   Rate: {}%\n", loan.annual_rate));
        out.push_str(&format!("   Duration: {} years\n", loan.duration_years));
        out.push_str(&format!("   Monthly payment: {:.2}\n", loan.monthly_payment));
        out.push_str(&format!("   Start date: {}\n\n", loan.start_date));
    }

    if !rows.is_empty() {
        let summary = PlanSummary::from_rows(rows);
        out.push_str("--- TOTALS ---\n");
        out.push_str(&format!("Total principal repaid: {:.2}\n", summary.total_principal));
        out.push_str(&format!("Total interest: {:.2}\n", summary.total_interest));
        out.push_str(&format!("Total paid: {:.2}\n", summary.total_paid));
        out.push_str(&format!(
            "Plan length: {} months ({} years)\n",
            summary.months,
            summary.months.div_ceil(12)
        ));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loan::{CalculationMode, Loan};
    use crate::schedule::aggregate_plan;
    use chrono::NaiveDate;

    fn test_plan() -> FinancingPlan {
        FinancingPlan {
            name: "Demo".to_string(),
            loans: vec![Loan {
                name: "A".to_string(),
                amount: 12_000.0,
                annual_rate: 0.0,
                duration_years: 1,
                monthly_payment: 1000.0,
                start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
                calculation_mode: CalculationMode::Duration,
                payment_periods: Vec::new(),
            }],
            created: NaiveDate::from_ymd_opt(2024, 6, 15).unwrap(),
        }
    }

    #[test]
    fn test_csv_export_shape() {
        let plan = test_plan();
        let rows = aggregate_plan(&plan).unwrap();

        let mut buffer = Vec::new();
        write_schedule_csv(&mut buffer, &rows).unwrap();
        let csv = String::from_utf8(buffer).unwrap();

        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 13); // header + 12 months
        assert_eq!(
            lines[0],
            "Month,Date,TotalPayment,TotalPrincipal,TotalInterest,TotalRemaining"
        );
        assert_eq!(lines[1], "1,2024-02-01,1000.00,1000.00,0.00,11000.00");
    }

    #[test]
    fn test_json_export_bundles_plan_and_rows() {
        let plan = test_plan();
        let rows = aggregate_plan(&plan).unwrap();
        let value = plan_export_json(&plan, &rows);

        assert_eq!(value["plan"]["name"], "Demo");
        assert_eq!(value["amortization"].as_array().unwrap().len(), 12);
        assert_eq!(value["amortization"][0]["month"], 1);
    }

    #[test]
    fn test_text_summary() {
        let plan = test_plan();
        let rows = aggregate_plan(&plan).unwrap();
        let summary = plan_summary(&plan, &rows);

        assert!(summary.contains("Name: Demo"));
        assert!(summary.contains("1. A"));
        assert!(summary.contains("Total interest: 0.00"));
        assert!(summary.contains("Plan length: 12 months (1 years)"));
    }
}
