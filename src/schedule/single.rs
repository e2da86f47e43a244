//! Amortization of a single loan in isolation

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::loan::{CalculationMode, Loan};
use crate::payment::{payment_for_month, standard_monthly_payment};
use crate::timeline::add_months;

/// One month of a single-loan amortization table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanScheduleRow {
    /// Month index within the loan (1-based)
    pub month: u32,
    /// Due date: start date plus `month` calendar months
    pub date: NaiveDate,
    /// Payment resolved for the month
    pub monthly_payment: f64,
    /// Principal portion; negative when the payment does not cover interest
    pub principal: f64,
    /// Interest accrued on the balance carried into the month
    pub interest: f64,
    /// Outstanding balance after the payment, floored at zero
    pub remaining: f64,
}

/// Full amortization table and summary for one loan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanSchedule {
    /// Scheduled payment: annuity-derived in `Payment` mode, as given otherwise
    pub monthly_payment: f64,
    /// Sum of all resolved payments over the full term
    pub total_cost: f64,
    /// Total cost minus the borrowed amount
    pub total_interest: f64,
    /// Month-by-month table over the full term
    pub rows: Vec<LoanScheduleRow>,
}

/// Compute the full amortization table for a loan.
///
/// In `Payment` mode the scheduled payment comes from the annuity formula;
/// the other modes use `loan.monthly_payment` as given. Principal is not
/// clamped: a payment below the accrued interest produces a negative
/// principal portion and a growing balance.
pub fn amortize(loan: &Loan) -> LoanSchedule {
    let monthly_rate = loan.monthly_rate();
    let total_months = loan.term_months();

    let scheduled_payment = match loan.calculation_mode {
        CalculationMode::Payment => {
            standard_monthly_payment(loan.amount, loan.annual_rate, loan.duration_years)
        }
        _ => loan.monthly_payment,
    };

    let mut rows = Vec::with_capacity(total_months as usize);
    let mut remaining = loan.amount;
    let mut total_cost = 0.0;

    for month in 1..=total_months {
        let payment = payment_for_month(
            month,
            scheduled_payment,
            loan.calculation_mode,
            &loan.payment_periods,
        );
        let interest = remaining * monthly_rate;
        let principal = payment - interest;
        remaining -= principal;
        if remaining < 0.0 {
            remaining = 0.0;
        }

        rows.push(LoanScheduleRow {
            month,
            date: add_months(loan.start_date, month),
            monthly_payment: payment,
            principal,
            interest,
            remaining,
        });

        total_cost += payment;
    }

    LoanSchedule {
        monthly_payment: scheduled_payment,
        total_cost,
        total_interest: total_cost - loan.amount,
        rows,
    }
}
