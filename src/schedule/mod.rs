//! Schedule engines: single-loan amortization, multi-loan aggregation,
//! and avalanche budget optimization

mod aggregate;
mod avalanche;
mod balance;
mod rows;
mod single;

pub use aggregate::aggregate_plan;
pub use avalanche::{optimize_plan, optimize_plan_today, OptimizedPlan};
pub use balance::{
    init_balances, round_to_zero_if_negligible, LoanBalance, MonthlyOutcome, NEGLIGIBLE_BALANCE,
};
pub use rows::{total_interest, AmortizationRow, LoanMonthData, PlanSummary};
pub use single::{amortize, LoanSchedule, LoanScheduleRow};
