//! Loan Optimizer - Debt amortization and avalanche optimization engine
//!
//! This library provides:
//! - Single-loan amortization with fixed, duration-derived, or variable payments
//! - Aggregation of independently-timed loans into one calendar-aligned schedule
//! - Avalanche budget reallocation that minimizes total interest paid
//! - CSV, JSON, and plain-text export of computed schedules

pub mod error;
pub mod export;
pub mod loan;
pub mod payment;
pub mod schedule;
pub mod timeline;

// Re-export commonly used types
pub use error::PlanError;
pub use loan::{CalculationMode, FinancingPlan, Loan, PaymentPeriod};
pub use schedule::{
    aggregate_plan, amortize, optimize_plan, optimize_plan_today, AmortizationRow, LoanSchedule,
    OptimizedPlan, PlanSummary,
};
