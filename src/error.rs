//! Error types for plan and loan computations

use thiserror::Error;

/// Errors surfaced by the amortization and optimization engines
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlanError {
    /// A plan or date-bound query was given no loans to work with
    #[error("financing plan contains no loans")]
    EmptyPlan,

    /// One or more payment periods violate the bounds/overlap contract.
    /// Every violation is collected so callers can show all problems at once.
    #[error("invalid payment periods: {}", .0.join("; "))]
    InvalidPeriods(Vec<String>),

    /// A loan field is out of its valid domain
    #[error("invalid loan input: {field}: {reason}")]
    InvalidLoan { field: &'static str, reason: String },
}
