//! Avalanche budget reallocation across a plan's active loans
//!
//! The combined monthly commitment of the plan is held fixed and, from the
//! optimization start month forward, redistributed each month: interest is
//! paid on every active loan first, then the remaining budget goes to
//! principal on the highest-rate loans. Savings are measured against a
//! fresh standard schedule of the same plan.

use chrono::{Local, NaiveDate};
use log::debug;
use serde::{Deserialize, Serialize};

use super::aggregate::aggregate_plan;
use super::balance::{init_balances, round_to_zero_if_negligible, NEGLIGIBLE_BALANCE};
use super::rows::{total_interest, AmortizationRow, LoanMonthData};
use crate::error::PlanError;
use crate::loan::FinancingPlan;
use crate::timeline::{add_months, date_bounds, months_between};

/// Optimized schedule and its interest savings versus the standard one
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizedPlan {
    /// Monthly rows from the optimization start month onward
    pub rows: Vec<AmortizationRow>,
    /// Standard-schedule interest minus optimized-schedule interest
    pub savings: f64,
}

/// Optimize a plan with "today" taken from the system clock
pub fn optimize_plan_today(plan: &FinancingPlan) -> Result<OptimizedPlan, PlanError> {
    optimize_plan(plan, Local::now().date_naive())
}

/// Reallocate the plan's fixed monthly budget from `as_of` forward to
/// minimize remaining interest.
///
/// Months before `as_of` are not reshaped: every balance is first replayed
/// on the standard schedule so the optimized allocation branches off from
/// the actual outstanding balances, not idealized ones.
pub fn optimize_plan(plan: &FinancingPlan, as_of: NaiveDate) -> Result<OptimizedPlan, PlanError> {
    let bounds = date_bounds(&plan.loans)?;
    let total_budget = plan.total_monthly_budget();
    let start_month = months_between(bounds.min_start, as_of).max(1);

    let mut balances = init_balances(&plan.loans, bounds.min_start);

    // Replay history: bring every balance to its true value at start_month
    for month in 1..start_month {
        for balance in balances.iter_mut() {
            if balance.in_term(month) {
                balance.step(month);
            }
        }
    }

    debug!(
        "optimizing plan '{}' from month {} with budget {:.2}",
        plan.name, start_month, total_budget
    );

    let mut rows = Vec::new();

    for month in start_month..=bounds.total_months {
        // Active loans keep receiving payments until repaid, even past
        // their scheduled end month
        let active: Vec<usize> = balances
            .iter()
            .enumerate()
            .filter(|(_, b)| month > b.start_month && b.remaining > NEGLIGIBLE_BALANCE)
            .map(|(i, _)| i)
            .collect();

        if active.is_empty() {
            break;
        }

        // Interest comes off the top for every active loan
        let mut budget = total_budget;
        let mut interests = vec![0.0; balances.len()];
        for &i in &active {
            let interest = balances[i].remaining * balances[i].loan.monthly_rate();
            interests[i] = interest;
            budget -= interest;
        }

        // Highest rate first; the stable sort preserves plan order on ties
        let mut order = active.clone();
        order.sort_by(|&a, &b| {
            balances[b]
                .loan
                .annual_rate
                .total_cmp(&balances[a].loan.annual_rate)
        });

        let mut principals = vec![0.0; balances.len()];
        for &i in &order {
            if budget <= 0.0 {
                break;
            }
            let principal = budget.min(balances[i].remaining);
            principals[i] = principal;
            budget -= principal;
            balances[i].remaining = round_to_zero_if_negligible(balances[i].remaining - principal);
        }

        let mut loans_data = Vec::with_capacity(active.len());
        let mut total_principal = 0.0;
        let mut total_interest_month = 0.0;
        let mut total_remaining = 0.0;

        for &i in &active {
            total_principal += principals[i];
            total_interest_month += interests[i];
            total_remaining += balances[i].remaining;

            loans_data.push(LoanMonthData {
                name: balances[i].loan.name.clone(),
                monthly_payment: interests[i] + principals[i],
                principal: principals[i],
                interest: interests[i],
                remaining: balances[i].remaining,
            });
        }

        rows.push(AmortizationRow {
            month: month as u32,
            date: add_months(bounds.min_start, month as u32),
            loans: loans_data,
            // The full budget is reported as spent even when some of it
            // goes unallocated because every loan reached zero
            total_monthly_payment: total_budget,
            total_principal,
            total_interest: total_interest_month,
            total_remaining,
        });
    }

    let standard = aggregate_plan(plan)?;
    let savings = total_interest(&standard) - total_interest(&rows);

    Ok(OptimizedPlan { rows, savings })
}
