//! Attendance period lifecycle.
//!
//! All operations are scoped to a single (month, year) period, which
//! moves UNINITIALIZED → INITIALIZED → FINALIZED. Finalization is the
//! one-way lock that freezes the period's records and authorizes payroll
//! generation.

use chrono::NaiveDate;
use tracing::{info, warn};
use uuid::Uuid;

use crate::auth::{Action, Session};
use crate::error::{CoreError, CoreResult};
use crate::models::{AttendanceRecord, AttendanceStatus, LeaveRequest, Period, PeriodState};
use crate::store::Store;

/// Outcome of reconciling one approved leave into attendance.
///
/// Reconciliation is best-effort: dates whose records are already
/// finalized are skipped and reported rather than raised, and the leave
/// decision that triggered the reconciliation is never rolled back.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
pub struct ReconciliationReport {
    /// Dates whose records were set to LEAVE.
    pub applied: Vec<NaiveDate>,
    /// Dates left unchanged because their records were finalized.
    pub skipped: Vec<NaiveDate>,
}

impl ReconciliationReport {
    /// Returns true if every date in the range was reconciled.
    pub fn is_complete(&self) -> bool {
        self.skipped.is_empty()
    }
}

/// Derives the lifecycle state of a period from its records.
///
/// A period with no records is UNINITIALIZED; it is FINALIZED iff all of
/// its records are finalized.
pub fn period_state<S: Store>(store: &S, period: Period) -> CoreResult<PeriodState> {
    let records = store.attendance_for_period(period)?;
    if records.is_empty() {
        Ok(PeriodState::Uninitialized)
    } else if records.iter().all(|r| r.finalized) {
        Ok(PeriodState::Finalized)
    } else {
        Ok(PeriodState::Initialized)
    }
}

/// Ensures every active employee has one record per calendar day of the
/// period, defaulting new records to PRESENT.
///
/// Idempotent: existing records are never touched, so re-running after
/// edits preserves them. Fails with InvalidState once the period is
/// FINALIZED. Returns the number of records created.
pub fn initialize<S: Store>(store: &S, session: &Session, period: Period) -> CoreResult<usize> {
    session.require(Action::InitializeAttendance)?;

    if period_state(store, period)? == PeriodState::Finalized {
        return Err(CoreError::invalid_state(format!(
            "attendance for {period} is finalized and cannot be re-initialized"
        )));
    }

    let employees = store.list_employees()?;
    let mut created = 0usize;
    for employee in employees.iter().filter(|e| e.is_active_employee()) {
        for date in period.dates() {
            if store.find_attendance(employee.id, date)?.is_none() {
                store.insert_attendance(AttendanceRecord::new(
                    employee.id,
                    date,
                    AttendanceStatus::Present,
                ))?;
                created += 1;
            }
        }
    }

    info!(%period, created, "attendance period initialized");
    Ok(created)
}

/// Lists the period's records, ordered by date.
pub fn records<S: Store>(
    store: &S,
    session: &Session,
    period: Period,
) -> CoreResult<Vec<AttendanceRecord>> {
    session.require(Action::ViewAllEmployees)?;
    store.attendance_for_period(period)
}

/// Overwrites one record's status and remarks, last-write-wins.
///
/// LEAVE is settable only by leave reconciliation, never by direct edit.
pub fn edit_record<S: Store>(
    store: &S,
    session: &Session,
    record_id: Uuid,
    status: AttendanceStatus,
    remarks: String,
) -> CoreResult<AttendanceRecord> {
    session.require(Action::EditAttendanceRecord)?;

    if status == AttendanceStatus::Leave {
        return Err(CoreError::invalid_state(
            "LEAVE status is set by leave approval, not by direct edit",
        ));
    }

    let mut record = store.attendance_record(record_id)?;
    if record.finalized {
        return Err(CoreError::invalid_state(format!(
            "attendance record {record_id} is finalized and cannot be edited"
        )));
    }

    record.status = status;
    record.remarks = remarks;
    record.leave_request_id = None;
    store.update_attendance(record)
}

/// Reconciles an approved leave into daily attendance.
///
/// Invoked by the leave decision; for each date in the leave range the
/// matching record is set to LEAVE with a back-reference to the request.
/// Missing records are created; finalized records are skipped and
/// reported.
pub fn reconcile_leave<S: Store>(
    store: &S,
    leave: &LeaveRequest,
) -> CoreResult<ReconciliationReport> {
    let mut report = ReconciliationReport::default();

    for date in leave.dates() {
        match store.find_attendance(leave.employee_id, date)? {
            Some(record) if record.finalized => {
                report.skipped.push(date);
            }
            Some(mut record) => {
                record.status = AttendanceStatus::Leave;
                record.leave_request_id = Some(leave.id);
                record.remarks = format!("Leave approved: {:?}", leave.leave_type);
                store.update_attendance(record)?;
                report.applied.push(date);
            }
            None => {
                let mut record =
                    AttendanceRecord::new(leave.employee_id, date, AttendanceStatus::Leave);
                record.leave_request_id = Some(leave.id);
                record.remarks = format!("Leave approved: {:?}", leave.leave_type);
                store.insert_attendance(record)?;
                report.applied.push(date);
            }
        }
    }

    if !report.is_complete() {
        warn!(
            leave_id = %leave.id,
            skipped = report.skipped.len(),
            "leave reconciliation skipped finalized dates"
        );
    }
    Ok(report)
}

/// Locks every record in the period as a single period-level state change.
///
/// Fails with InvalidState if the period has no records or is already
/// FINALIZED. Returns the number of records locked.
pub fn finalize<S: Store>(store: &S, session: &Session, period: Period) -> CoreResult<usize> {
    session.require(Action::FinalizeAttendance)?;

    match period_state(store, period)? {
        PeriodState::Uninitialized => Err(CoreError::invalid_state(format!(
            "no attendance records exist for {period}"
        ))),
        PeriodState::Finalized => Err(CoreError::invalid_state(format!(
            "attendance for {period} is already finalized"
        ))),
        PeriodState::Initialized => {
            let locked = store.finalize_attendance(period)?;
            info!(%period, locked, "attendance period finalized");
            Ok(locked)
        }
    }
}
