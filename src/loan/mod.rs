//! Loan data structures and input loading

mod data;
pub mod loader;

pub use data::{CalculationMode, FinancingPlan, Loan, PaymentPeriod};
pub use loader::{load_loans, load_loans_from_reader, load_plan, load_plan_from_reader};
