//! Loan and financing-plan data structures
//!
//! These are pure value inputs: the schedule engines read them but never
//! write back into caller-owned structures.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::PlanError;
use crate::payment;

/// How a loan's scheduled monthly payment is determined
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalculationMode {
    /// Payment derived from amount/rate/duration via the annuity formula
    Payment,
    /// Payment taken as given; the duration is informational
    Duration,
    /// Payment overridden per month by `payment_periods`, with
    /// `monthly_payment` as the fallback outside any period
    Variable,
}

/// A month-index window during which a loan's payment is overridden.
///
/// Month indices are 1-based and relative to the loan's own start; the
/// interval is closed on both ends. Periods of one loan must not overlap.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PaymentPeriod {
    /// Caller-assigned identifier, echoed in validation messages
    pub id: u32,
    /// First month (inclusive) the override applies to
    pub start_month: u32,
    /// Last month (inclusive) the override applies to
    pub end_month: u32,
    /// Payment amount during the window
    pub monthly_payment: f64,
}

/// A single loan with its terms and schedule parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Loan {
    /// Display name, carried into per-loan schedule rows
    pub name: String,

    /// Borrowed principal
    pub amount: f64,

    /// Annual interest rate in percent (1.5 means 1.5%)
    pub annual_rate: f64,

    /// Loan term in years
    pub duration_years: u32,

    /// Scheduled monthly payment; the default payment in `Variable` mode,
    /// ignored in `Payment` mode where the annuity formula applies
    pub monthly_payment: f64,

    /// First day of the loan; due dates are whole months after this
    pub start_date: NaiveDate,

    /// How the scheduled payment is determined
    pub calculation_mode: CalculationMode,

    /// Payment override windows, meaningful only in `Variable` mode
    #[serde(default)]
    pub payment_periods: Vec<PaymentPeriod>,
}

impl Loan {
    /// Full term in months
    pub fn term_months(&self) -> u32 {
        self.duration_years * 12
    }

    /// Monthly interest rate as a fraction (annual percent / 100 / 12)
    pub fn monthly_rate(&self) -> f64 {
        self.annual_rate / 100.0 / 12.0
    }

    /// Scheduled end date of the loan
    pub fn end_date(&self) -> NaiveDate {
        crate::timeline::loan_end_date(self)
    }

    /// Check the loan's fields against their valid domains.
    ///
    /// Payment-period violations are collected into a single
    /// `PlanError::InvalidPeriods` so every problem is reported at once.
    pub fn validate(&self) -> Result<(), PlanError> {
        if self.amount <= 0.0 {
            return Err(PlanError::InvalidLoan {
                field: "amount",
                reason: format!("must be positive, got {}", self.amount),
            });
        }
        if self.annual_rate < 0.0 {
            return Err(PlanError::InvalidLoan {
                field: "annual_rate",
                reason: format!("must not be negative, got {}", self.annual_rate),
            });
        }
        if self.duration_years == 0 {
            return Err(PlanError::InvalidLoan {
                field: "duration_years",
                reason: "must be positive".to_string(),
            });
        }
        match self.calculation_mode {
            CalculationMode::Duration => {
                if self.monthly_payment <= 0.0 {
                    return Err(PlanError::InvalidLoan {
                        field: "monthly_payment",
                        reason: "duration mode requires a positive payment".to_string(),
                    });
                }
            }
            CalculationMode::Variable => {
                if self.payment_periods.is_empty() {
                    return Err(PlanError::InvalidLoan {
                        field: "payment_periods",
                        reason: "variable mode requires at least one period".to_string(),
                    });
                }
                payment::validate_periods(&self.payment_periods, self.term_months())?;
            }
            CalculationMode::Payment => {}
        }
        Ok(())
    }
}

/// An immutable collection of loans considered together
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancingPlan {
    /// Plan name, used in exports
    pub name: String,

    /// The loans making up the plan
    pub loans: Vec<Loan>,

    /// Date the plan was assembled
    pub created: NaiveDate,
}

impl FinancingPlan {
    /// Combined monthly commitment across all loans.
    ///
    /// This is the aggregate budget the avalanche optimizer holds fixed.
    pub fn total_monthly_budget(&self) -> f64 {
        self.loans.iter().map(|l| l.monthly_payment).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_loan() -> Loan {
        Loan {
            name: "Main".to_string(),
            amount: 200_000.0,
            annual_rate: 1.5,
            duration_years: 20,
            monthly_payment: 965.0,
            start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            calculation_mode: CalculationMode::Payment,
            payment_periods: Vec::new(),
        }
    }

    #[test]
    fn test_term_and_rate() {
        let loan = base_loan();
        assert_eq!(loan.term_months(), 240);
        assert!((loan.monthly_rate() - 0.00125).abs() < 1e-12);
    }

    #[test]
    fn test_calculation_mode_serde() {
        let json = serde_json::to_string(&CalculationMode::Variable).unwrap();
        assert_eq!(json, "\"variable\"");
        let mode: CalculationMode = serde_json::from_str("\"payment\"").unwrap();
        assert_eq!(mode, CalculationMode::Payment);
    }

    #[test]
    fn test_validate_rejects_non_positive_amount() {
        let mut loan = base_loan();
        loan.amount = 0.0;
        assert!(matches!(
            loan.validate(),
            Err(PlanError::InvalidLoan { field: "amount", .. })
        ));
    }

    #[test]
    fn test_validate_duration_mode_needs_payment() {
        let mut loan = base_loan();
        loan.calculation_mode = CalculationMode::Duration;
        loan.monthly_payment = 0.0;
        assert!(matches!(
            loan.validate(),
            Err(PlanError::InvalidLoan { field: "monthly_payment", .. })
        ));
    }

    #[test]
    fn test_validate_variable_mode_needs_periods() {
        let mut loan = base_loan();
        loan.calculation_mode = CalculationMode::Variable;
        assert!(matches!(
            loan.validate(),
            Err(PlanError::InvalidLoan { field: "payment_periods", .. })
        ));
    }

    #[test]
    fn test_validate_accepts_zero_rate() {
        let mut loan = base_loan();
        loan.annual_rate = 0.0;
        assert!(loan.validate().is_ok());
    }

    #[test]
    fn test_total_monthly_budget() {
        let plan = FinancingPlan {
            name: "plan".to_string(),
            loans: vec![base_loan(), base_loan()],
            created: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
        };
        assert!((plan.total_monthly_budget() - 1930.0).abs() < 1e-9);
    }
}
