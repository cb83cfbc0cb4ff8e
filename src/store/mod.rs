//! The backing store the workflows drive.
//!
//! The store is the external collaborator: the sole arbiter of
//! conflicting concurrent writes and the source of truth every workflow
//! re-reads after a commit. The trait captures its logical operations;
//! [`MemoryStore`] is the in-process implementation used by the API
//! layer and the test suite.

mod memory;

pub use memory::MemoryStore;

use chrono::NaiveDate;
use uuid::Uuid;

use crate::error::CoreResult;
use crate::models::{
    AttendanceRecord, Employee, LeaveRequest, LeaveStatus, PayrollRecord, Period,
};

/// Logical operations of the backing store.
///
/// Mutations enforce the storage invariants regardless of caller: one
/// attendance record per (employee, date), one payroll record per
/// (employee, month, year), finalized attendance records are immutable,
/// and a PAID payroll record cannot be re-paid. Workflow-level guards
/// fail earlier with friendlier messages; the store is the backstop.
///
/// The settlement writes ([`Store::mark_paid`], [`Store::process_period`])
/// are async: they stand in for the external payment call, and the
/// disbursement deadline must be able to preempt them mid-flight. The
/// futures are only awaited in-crate.
#[allow(async_fn_in_trait)]
pub trait Store: Send + Sync {
    // Employees

    /// Lists every employee record.
    fn list_employees(&self) -> CoreResult<Vec<Employee>>;

    /// Fetches one employee by id.
    fn employee(&self, id: Uuid) -> CoreResult<Employee>;

    /// Fetches one employee by login email.
    fn employee_by_email(&self, email: &str) -> CoreResult<Employee>;

    /// Overwrites an employee's remaining leave balance.
    fn set_leave_balance(&self, id: Uuid, balance: u32) -> CoreResult<()>;

    /// Checks a plaintext password against the employee's stored hash.
    /// Used at login and again by the disbursement AUTH phase.
    fn verify_credential(&self, employee_id: Uuid, password: &str) -> CoreResult<bool>;

    // Leave requests

    /// Persists a new leave request.
    fn insert_leave(&self, request: LeaveRequest) -> CoreResult<LeaveRequest>;

    /// Fetches one leave request by id.
    fn leave(&self, id: Uuid) -> CoreResult<LeaveRequest>;

    /// Lists leave requests, optionally filtered by status, newest first.
    fn leaves_by_status(&self, status: Option<LeaveStatus>) -> CoreResult<Vec<LeaveRequest>>;

    /// Lists one employee's leave requests, newest first.
    fn leaves_for_employee(&self, employee_id: Uuid) -> CoreResult<Vec<LeaveRequest>>;

    /// Overwrites a leave request's status.
    fn set_leave_status(&self, id: Uuid, status: LeaveStatus) -> CoreResult<LeaveRequest>;

    // Attendance

    /// Lists every attendance record in a period, ordered by date.
    fn attendance_for_period(&self, period: Period) -> CoreResult<Vec<AttendanceRecord>>;

    /// Fetches one attendance record by id.
    fn attendance_record(&self, id: Uuid) -> CoreResult<AttendanceRecord>;

    /// Finds the record for an (employee, date) pair, if any.
    fn find_attendance(
        &self,
        employee_id: Uuid,
        date: NaiveDate,
    ) -> CoreResult<Option<AttendanceRecord>>;

    /// Persists a new attendance record. Fails with Conflict if one
    /// already exists for the (employee, date) pair.
    fn insert_attendance(&self, record: AttendanceRecord) -> CoreResult<AttendanceRecord>;

    /// Overwrites an attendance record in place. Fails with InvalidState
    /// if the stored record is finalized.
    fn update_attendance(&self, record: AttendanceRecord) -> CoreResult<AttendanceRecord>;

    /// Flips `finalized` on every record in the period as one commit.
    /// Returns the number of records flipped.
    fn finalize_attendance(&self, period: Period) -> CoreResult<usize>;

    // Payroll

    /// Returns true if any payroll record exists for the period.
    fn payroll_exists(&self, period: Period) -> CoreResult<bool>;

    /// Persists a new payroll record. Fails with Conflict if one already
    /// exists for the (employee, month, year) key.
    fn insert_payroll(&self, record: PayrollRecord) -> CoreResult<PayrollRecord>;

    /// Fetches one payroll record by id.
    fn payroll(&self, id: Uuid) -> CoreResult<PayrollRecord>;

    /// Lists every payroll record in a period.
    fn payroll_for_period(&self, period: Period) -> CoreResult<Vec<PayrollRecord>>;

    /// Marks one payroll record PAID, stamping the payment time. Fails
    /// with InvalidState if the record is already PAID.
    async fn mark_paid(&self, id: Uuid) -> CoreResult<PayrollRecord>;

    /// Flips every PENDING payroll record in the period to PAID as one
    /// commit. Fails with NotFound if the period has no records.
    async fn process_period(&self, period: Period) -> CoreResult<Vec<PayrollRecord>>;
}
