//! Monthly payment resolution and payment-period management
//!
//! A loan in `Variable` mode carries a list of payment periods, each
//! overriding the default payment over a closed month-index window. The
//! resolver answers "what is due in month m"; the validation helper checks
//! the period list against the loan term and reports every violation.

use crate::error::PlanError;
use crate::loan::{CalculationMode, PaymentPeriod};

/// Resolve the payment due in a given month of a loan.
///
/// Outside `Variable` mode the default payment applies unconditionally.
/// In `Variable` mode the first period containing `month_in_loan` wins;
/// valid period lists are non-overlapping, so at most one can match.
pub fn payment_for_month(
    month_in_loan: u32,
    default_payment: f64,
    mode: CalculationMode,
    periods: &[PaymentPeriod],
) -> f64 {
    if mode != CalculationMode::Variable {
        return default_payment;
    }

    periods
        .iter()
        .find(|p| month_in_loan >= p.start_month && month_in_loan <= p.end_month)
        .map(|p| p.monthly_payment)
        .unwrap_or(default_payment)
}

/// Constant payment that fully repays `amount` at `annual_rate` percent
/// over `duration_years` (standard annuity formula; linear at zero rate)
pub fn standard_monthly_payment(amount: f64, annual_rate: f64, duration_years: u32) -> f64 {
    let monthly_rate = annual_rate / 100.0 / 12.0;
    let total_months = (duration_years * 12) as f64;

    if monthly_rate == 0.0 {
        return amount / total_months;
    }

    let growth = (1.0 + monthly_rate).powf(total_months);
    amount * monthly_rate * growth / (growth - 1.0)
}

/// Check periods against the loan term: bounds within `[1, total_months]`,
/// start before end, no pairwise overlap.
///
/// All violations are collected into one `PlanError::InvalidPeriods` so
/// callers can surface the full list at once.
pub fn validate_periods(periods: &[PaymentPeriod], total_months: u32) -> Result<(), PlanError> {
    let mut errors = Vec::new();

    for period in periods {
        if period.start_month < 1 || period.end_month > total_months {
            errors.push(format!(
                "period {} extends beyond the loan term of {} months",
                period.id, total_months
            ));
        }
        if period.start_month > period.end_month {
            errors.push(format!("period {} ends before it starts", period.id));
        }
    }

    for (i, p1) in periods.iter().enumerate() {
        for p2 in &periods[i + 1..] {
            if p1.start_month <= p2.end_month && p2.start_month <= p1.end_month {
                errors.push(format!("periods {} and {} overlap", p1.id, p2.id));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(PlanError::InvalidPeriods(errors))
    }
}

/// Insert a period and return the list re-sorted by start month.
///
/// The sort is stable, so equal start months keep their insertion order.
pub fn add_period(periods: &[PaymentPeriod], period: PaymentPeriod) -> Vec<PaymentPeriod> {
    let mut updated = periods.to_vec();
    updated.push(period);
    updated.sort_by_key(|p| p.start_month);
    updated
}

/// Remove the period with the given id, if present
pub fn remove_period(periods: &[PaymentPeriod], id: u32) -> Vec<PaymentPeriod> {
    periods.iter().filter(|p| p.id != id).cloned().collect()
}
