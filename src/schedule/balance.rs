//! Running balance state for one loan during a multi-loan pass
//!
//! Each `aggregate`/`optimize` call owns a fresh arena of these records,
//! advances them month by month, and discards them at the end of the pass.
//! Nothing here is shared across calls.

use chrono::NaiveDate;

use crate::loan::Loan;
use crate::payment::payment_for_month;
use crate::timeline::months_between;

/// Balances below this threshold count as fully repaid, absorbing
/// floating-point drift at the end of a schedule
pub const NEGLIGIBLE_BALANCE: f64 = 0.01;

/// Round a value to zero when it is within the negligibility threshold
pub fn round_to_zero_if_negligible(value: f64) -> f64 {
    if value.abs() < NEGLIGIBLE_BALANCE {
        0.0
    } else {
        value
    }
}

/// Outcome of applying one month's scheduled payment to a loan
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonthlyOutcome {
    /// Payment resolved for the month
    pub payment: f64,
    /// Interest accrued on the balance before the payment
    pub interest: f64,
    /// Principal portion (payment minus interest; may be negative)
    pub principal: f64,
    /// Balance after the payment, rounded to zero when negligible
    pub remaining: f64,
}

/// Per-loan running state on the shared plan timeline.
///
/// `start_month`/`end_month` are month offsets relative to the earliest
/// start date across the plan's loans.
#[derive(Debug)]
pub struct LoanBalance<'a> {
    /// The loan this record tracks
    pub loan: &'a Loan,
    /// Outstanding principal, non-increasing under a standard schedule
    pub remaining: f64,
    /// Plan-timeline month after which the loan becomes active
    pub start_month: i64,
    /// Plan-timeline month of the loan's last scheduled payment
    pub end_month: i64,
}

impl<'a> LoanBalance<'a> {
    fn new(loan: &'a Loan, min_start: NaiveDate) -> Self {
        let start_month = months_between(min_start, loan.start_date);
        Self {
            loan,
            remaining: loan.amount,
            start_month,
            end_month: start_month + loan.term_months() as i64,
        }
    }

    /// Month index within the loan's own schedule (1-based when active)
    pub fn month_in_loan(&self, month: i64) -> i64 {
        month - self.start_month
    }

    /// Whether the loan has a scheduled payment due in this plan month
    pub fn in_term(&self, month: i64) -> bool {
        month > self.start_month && month <= self.end_month
    }

    /// Apply the standard scheduled payment for the given plan month.
    ///
    /// The caller is responsible for only stepping months where
    /// `in_term(month)` holds; the balance is carried incrementally, so
    /// each month must be applied exactly once and in order.
    pub fn step(&mut self, month: i64) -> MonthlyOutcome {
        let payment = payment_for_month(
            self.month_in_loan(month) as u32,
            self.loan.monthly_payment,
            self.loan.calculation_mode,
            &self.loan.payment_periods,
        );
        let interest = self.remaining * self.loan.monthly_rate();
        let principal = payment - interest;
        self.remaining = round_to_zero_if_negligible(self.remaining - principal);

        MonthlyOutcome {
            payment,
            interest,
            principal,
            remaining: self.remaining,
        }
    }
}

/// Build one balance record per loan, offset against the earliest start
pub fn init_balances<'a>(loans: &'a [Loan], min_start: NaiveDate) -> Vec<LoanBalance<'a>> {
    loans.iter().map(|loan| LoanBalance::new(loan, min_start)).collect()
}
