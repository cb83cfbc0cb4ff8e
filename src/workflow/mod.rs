//! Workflows of the monthly lifecycle.
//!
//! Leave approval propagates into attendance; a finalized attendance
//! period unlocks payroll generation; payroll records feed the
//! disbursement transaction. Every mutating operation takes an explicit
//! [`crate::auth::Session`] and consults the capability model before
//! touching the store.

pub mod attendance;
pub mod leave;
pub mod payroll;
pub mod payslip;

pub use attendance::ReconciliationReport;
pub use leave::{Decision, DecisionOutcome};
