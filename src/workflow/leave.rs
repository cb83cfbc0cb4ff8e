//! Leave request lifecycle.
//!
//! A request moves PENDING → {APPROVED, REJECTED}; both decisions are
//! terminal. Approval propagates into attendance through best-effort
//! reconciliation: the decision is committed first and stands even when
//! some dates are already finalized, in which case they are reported to
//! the caller rather than rolled back.

use chrono::{NaiveDate, Utc};
use tracing::info;
use uuid::Uuid;

use crate::auth::{Action, Session};
use crate::error::{CoreError, CoreResult};
use crate::models::{LeaveRequest, LeaveStatus, LeaveType};
use crate::store::Store;

use super::attendance::{ReconciliationReport, reconcile_leave};

/// The terminal decision on a pending leave request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Decision {
    /// Approve the request and reconcile attendance.
    Approved,
    /// Reject the request; no attendance side effect.
    Rejected,
}

/// A committed decision plus its attendance side effect.
#[derive(Debug, Clone, serde::Serialize)]
pub struct DecisionOutcome {
    /// The request after the decision was recorded.
    pub leave: LeaveRequest,
    /// The reconciliation report; present only for approvals.
    pub reconciliation: Option<ReconciliationReport>,
}

/// Submits a new leave request for the session's own principal.
///
/// Fails with ValidationError if the range is inverted, the reason is
/// blank, or the remaining leave balance cannot cover the requested days.
pub fn submit<S: Store>(
    store: &S,
    session: &Session,
    start_date: NaiveDate,
    end_date: NaiveDate,
    leave_type: LeaveType,
    reason: String,
) -> CoreResult<LeaveRequest> {
    session.require(Action::SubmitLeave)?;

    if start_date > end_date {
        return Err(CoreError::validation(format!(
            "start date {start_date} is after end date {end_date}"
        )));
    }
    if reason.trim().is_empty() {
        return Err(CoreError::validation("reason must not be blank"));
    }

    let employee = store.employee(session.principal.id)?;
    let requested = (end_date - start_date).num_days() as u32 + 1;
    if employee.leave_balance < requested {
        return Err(CoreError::validation(format!(
            "insufficient leave balance: requesting {requested}, available {}",
            employee.leave_balance
        )));
    }

    let request = LeaveRequest {
        id: Uuid::new_v4(),
        employee_id: employee.id,
        start_date,
        end_date,
        leave_type,
        reason,
        status: LeaveStatus::Pending,
        applied_at: Utc::now(),
    };
    info!(leave_id = %request.id, employee = %employee.name, "leave submitted");
    store.insert_leave(request)
}

/// Lists the session's own leave requests, newest first.
pub fn my_leaves<S: Store>(store: &S, session: &Session) -> CoreResult<Vec<LeaveRequest>> {
    session.require(Action::ViewSelf)?;
    store.leaves_for_employee(session.principal.id)
}

/// Lists leave requests across employees, optionally filtered by status.
pub fn list<S: Store>(
    store: &S,
    session: &Session,
    status: Option<LeaveStatus>,
) -> CoreResult<Vec<LeaveRequest>> {
    session.require(Action::ViewAllEmployees)?;
    store.leaves_by_status(status)
}

/// Records a terminal decision on a pending request.
///
/// Already-decided requests fail with InvalidStateError. On approval the
/// employee's leave balance is drawn down, the status is committed, and
/// attendance is reconciled afterwards; a partial reconciliation is
/// reported in the outcome, never rolled back.
pub fn decide<S: Store>(
    store: &S,
    session: &Session,
    leave_id: Uuid,
    decision: Decision,
) -> CoreResult<DecisionOutcome> {
    session.require(Action::ApproveLeave)?;

    let leave = store.leave(leave_id)?;
    if leave.status.is_decided() {
        return Err(CoreError::invalid_state(format!(
            "leave request {leave_id} is already {:?}",
            leave.status
        )));
    }

    if decision == Decision::Rejected {
        let leave = store.set_leave_status(leave_id, LeaveStatus::Rejected)?;
        info!(%leave_id, "leave rejected");
        return Ok(DecisionOutcome {
            leave,
            reconciliation: None,
        });
    }

    let employee = store.employee(leave.employee_id)?;
    let days = leave.day_count();
    if employee.leave_balance < days {
        return Err(CoreError::validation(format!(
            "{} no longer has sufficient balance: requesting {days}, available {}",
            employee.name, employee.leave_balance
        )));
    }
    store.set_leave_balance(employee.id, employee.leave_balance - days)?;

    // The decision commits before reconciliation and is not rolled back
    // if some dates turn out to be finalized.
    let leave = store.set_leave_status(leave_id, LeaveStatus::Approved)?;
    let report = reconcile_leave(store, &leave)?;
    info!(
        %leave_id,
        applied = report.applied.len(),
        skipped = report.skipped.len(),
        "leave approved"
    );

    Ok(DecisionOutcome {
        leave,
        reconciliation: Some(report),
    })
}
