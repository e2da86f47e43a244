//! Output row structures shared by the plan schedule engines

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Per-loan figures inside one calendar month of a plan schedule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanMonthData {
    /// Loan display name
    pub name: String,
    /// Amount paid on this loan this month (interest + principal)
    pub monthly_payment: f64,
    /// Principal portion; negative under negative amortization
    pub principal: f64,
    /// Interest accrued on the outstanding balance
    pub interest: f64,
    /// Outstanding balance after this month's payment
    pub remaining: f64,
}

/// One calendar month of a computed multi-loan schedule.
///
/// Never mutated after emission; export layers consume these read-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmortizationRow {
    /// Month index on the plan timeline (1-based from the earliest start)
    pub month: u32,
    /// Calendar due date for the month
    pub date: NaiveDate,
    /// Per-loan breakdown for every loan active this month
    pub loans: Vec<LoanMonthData>,
    /// Total cash outlay for the month
    pub total_monthly_payment: f64,
    /// Total principal repaid across loans
    pub total_principal: f64,
    /// Total interest paid across loans
    pub total_interest: f64,
    /// Total outstanding balance across loans after the month
    pub total_remaining: f64,
}

/// Sum of interest across a row slice; the optimizer's comparison oracle
pub fn total_interest(rows: &[AmortizationRow]) -> f64 {
    rows.iter().map(|r| r.total_interest).sum()
}

/// Aggregate figures for a computed schedule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanSummary {
    /// Number of months with at least one active loan
    pub months: u32,
    /// Total principal repaid over the schedule
    pub total_principal: f64,
    /// Total interest paid over the schedule
    pub total_interest: f64,
    /// Total amount paid (principal + interest)
    pub total_paid: f64,
}

impl PlanSummary {
    /// Summarize a computed row slice
    pub fn from_rows(rows: &[AmortizationRow]) -> Self {
        let total_principal: f64 = rows.iter().map(|r| r.total_principal).sum();
        let total_interest: f64 = rows.iter().map(|r| r.total_interest).sum();

        Self {
            months: rows.last().map(|r| r.month).unwrap_or(0),
            total_principal,
            total_interest,
            total_paid: total_principal + total_interest,
        }
    }
}
