//! Standard multi-loan schedule: independently-timed loans merged onto one
//! calendar-aligned monthly timeline

use log::debug;

use super::balance::init_balances;
use super::rows::{AmortizationRow, LoanMonthData};
use crate::error::PlanError;
use crate::loan::FinancingPlan;
use crate::timeline::{add_months, date_bounds};

/// Compute the standard (non-optimized) amortization table for a plan.
///
/// One incremental pass over the plan timeline: each loan's balance is
/// carried forward month by month, never recomputed from the original
/// principal, keeping the pass O(total months x loans). A row is emitted
/// only for months where at least one loan is active; leading or trailing
/// gaps between staggered loans produce no rows.
pub fn aggregate_plan(plan: &FinancingPlan) -> Result<Vec<AmortizationRow>, PlanError> {
    let bounds = date_bounds(&plan.loans)?;
    let mut balances = init_balances(&plan.loans, bounds.min_start);

    debug!(
        "aggregating plan '{}': {} loans over {} months",
        plan.name,
        plan.loans.len(),
        bounds.total_months
    );

    let mut rows = Vec::with_capacity(bounds.total_months as usize);

    for month in 1..=bounds.total_months {
        let mut loans_data = Vec::new();
        let mut total_monthly_payment = 0.0;
        let mut total_principal = 0.0;
        let mut total_interest = 0.0;
        let mut total_remaining = 0.0;

        for balance in balances.iter_mut() {
            if !balance.in_term(month) {
                continue;
            }

            let outcome = balance.step(month);

            total_monthly_payment += outcome.payment;
            total_principal += outcome.principal;
            total_interest += outcome.interest;
            total_remaining += outcome.remaining;

            loans_data.push(LoanMonthData {
                name: balance.loan.name.clone(),
                monthly_payment: outcome.payment,
                principal: outcome.principal,
                interest: outcome.interest,
                remaining: outcome.remaining,
            });
        }

        if !loans_data.is_empty() {
            rows.push(AmortizationRow {
                month: month as u32,
                date: add_months(bounds.min_start, month as u32),
                loans: loans_data,
                total_monthly_payment,
                total_principal,
                total_interest,
                total_remaining,
            });
        }
    }

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loan::{CalculationMode, Loan};
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn flat_loan(name: &str, start: NaiveDate) -> Loan {
        Loan {
            name: name.to_string(),
            amount: 12_000.0,
            annual_rate: 0.0,
            duration_years: 1,
            monthly_payment: 1000.0,
            start_date: start,
            calculation_mode: CalculationMode::Duration,
            payment_periods: Vec::new(),
        }
    }

    fn plan(loans: Vec<Loan>) -> FinancingPlan {
        FinancingPlan {
            name: "test plan".to_string(),
            loans,
            created: date(2024, 1, 1),
        }
    }

    #[test]
    fn test_empty_plan_is_an_error() {
        assert_eq!(aggregate_plan(&plan(Vec::new())), Err(PlanError::EmptyPlan));
    }

    #[test]
    fn test_single_loan_schedule() {
        let p = plan(vec![flat_loan("A", date(2024, 1, 1))]);
        let rows = aggregate_plan(&p).unwrap();

        assert_eq!(rows.len(), 12);
        assert_eq!(rows[0].month, 1);
        assert_eq!(rows[0].date, date(2024, 2, 1));
        assert_eq!(rows[0].loans.len(), 1);
        assert!((rows[0].total_principal - 1000.0).abs() < 1e-9);
        assert_eq!(rows.last().unwrap().total_remaining, 0.0);
    }

    #[test]
    fn test_staggered_loans_leave_a_gap() {
        // Second loan starts a year later; its 13-month offset (leap year
        // under the 30.44 rule) leaves plan month 13 with no active loan.
        let p = plan(vec![
            flat_loan("A", date(2024, 1, 1)),
            flat_loan("B", date(2025, 1, 1)),
        ]);
        let rows = aggregate_plan(&p).unwrap();

        assert_eq!(rows.len(), 24);
        let months: Vec<u32> = rows.iter().map(|r| r.month).collect();
        assert!(!months.contains(&13));
        assert_eq!(*months.last().unwrap(), 25);

        // Every emitted row carries exactly one of the two loans
        assert!(rows.iter().all(|r| r.loans.len() == 1));
    }

    #[test]
    fn test_overlapping_loans_sum_their_totals() {
        let p = plan(vec![
            flat_loan("A", date(2024, 1, 1)),
            flat_loan("B", date(2024, 1, 1)),
        ]);
        let rows = aggregate_plan(&p).unwrap();

        assert_eq!(rows.len(), 12);
        assert!((rows[0].total_monthly_payment - 2000.0).abs() < 1e-9);
        assert_eq!(rows[0].loans.len(), 2);
        assert_eq!(rows[0].loans[0].name, "A");
        assert_eq!(rows[0].loans[1].name, "B");
    }

    #[test]
    fn test_aggregate_is_idempotent() {
        let mut loan = flat_loan("A", date(2024, 3, 1));
        loan.annual_rate = 2.5;
        let p = plan(vec![loan, flat_loan("B", date(2024, 9, 1))]);

        let first = aggregate_plan(&p).unwrap();
        let second = aggregate_plan(&p).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_interest_accrues_on_carried_balance() {
        let mut loan = flat_loan("A", date(2024, 1, 1));
        loan.annual_rate = 12.0; // 1% per month
        let p = plan(vec![loan]);
        let rows = aggregate_plan(&p).unwrap();

        assert!((rows[0].total_interest - 120.0).abs() < 1e-9);
        // Month 2 interest accrues on the reduced balance
        let expected = (12_000.0 - (1000.0 - 120.0)) * 0.01;
        assert!((rows[1].total_interest - expected).abs() < 1e-9);
    }
}
