//! Data models for the workforce core.
//!
//! This module defines the entities the workflows operate on: employees
//! and their principals, leave requests, daily attendance records, the
//! (month, year) period scope, and payroll records.

mod attendance;
mod employee;
mod leave;
mod payroll;
mod period;
mod principal;

pub use attendance::{AttendanceRecord, AttendanceStatus};
pub use employee::Employee;
pub use leave::{LeaveRequest, LeaveStatus, LeaveType};
pub use payroll::{PayrollRecord, PayrollStatus};
pub use period::{Period, PeriodState};
pub use principal::{Principal, Role};
