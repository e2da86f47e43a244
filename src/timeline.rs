//! Month-count and date-bound arithmetic shared by the schedule engines
//!
//! All cross-loan alignment runs through `months_between`, which counts
//! whole months as `ceil(days / 30.44)`. The 30.44 constant is the average
//! Gregorian month length and is load-bearing: every start offset and
//! schedule horizon derives from it, so it must not be replaced by
//! calendar-month counting.

use chrono::{Months, NaiveDate};

use crate::error::PlanError;
use crate::loan::Loan;

/// Average days per month used by the whole-month approximation
const DAYS_PER_MONTH: f64 = 30.44;

/// Number of whole months from `a` to `b`, rounded up.
///
/// Negative when `b` precedes `a`.
pub fn months_between(a: NaiveDate, b: NaiveDate) -> i64 {
    let days = b.signed_duration_since(a).num_days();
    (days as f64 / DAYS_PER_MONTH).ceil() as i64
}

/// Calendar-month addition (day-of-month clamped by chrono)
pub fn add_months(date: NaiveDate, months: u32) -> NaiveDate {
    date + Months::new(months)
}

/// Scheduled end date of a loan: start date plus its full term
pub fn loan_end_date(loan: &Loan) -> NaiveDate {
    add_months(loan.start_date, loan.term_months())
}

/// Calendar envelope of a set of loans
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DateBounds {
    /// Earliest start date across the loans
    pub min_start: NaiveDate,
    /// Latest scheduled end date across the loans
    pub max_end: NaiveDate,
    /// Whole months spanned from `min_start` to `max_end`
    pub total_months: i64,
}

/// Compute the calendar envelope of a non-empty loan set
pub fn date_bounds(loans: &[Loan]) -> Result<DateBounds, PlanError> {
    let first = loans.first().ok_or(PlanError::EmptyPlan)?;

    let mut min_start = first.start_date;
    let mut max_end = loan_end_date(first);

    for loan in &loans[1..] {
        let end = loan_end_date(loan);
        if loan.start_date < min_start {
            min_start = loan.start_date;
        }
        if end > max_end {
            max_end = end;
        }
    }

    Ok(DateBounds {
        min_start,
        max_end,
        total_months: months_between(min_start, max_end),
    })
}
