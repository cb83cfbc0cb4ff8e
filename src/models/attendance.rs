//! Attendance record model.
//!
//! One record per (employee, calendar date). A record with status LEAVE
//! always carries a reference to the leave request that produced it; a
//! finalized record is immutable except through period finalization,
//! which never un-finalizes.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The daily attendance outcome for one employee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AttendanceStatus {
    /// Worked a full day; weight 1.0 toward payable days.
    Present,
    /// Did not work; weight 0.
    Absent,
    /// Worked half a day; weight 0.5.
    HalfDay,
    /// On approved leave; set only by leave reconciliation.
    Leave,
}

/// One employee's attendance on one calendar date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    /// Unique identifier.
    pub id: Uuid,
    /// The employee the record belongs to.
    pub employee_id: Uuid,
    /// The calendar date.
    pub date: NaiveDate,
    /// Daily status.
    pub status: AttendanceStatus,
    /// Free-text remarks, last-write-wins.
    pub remarks: String,
    /// Locked for editing once true; flipped only by period finalization.
    pub finalized: bool,
    /// The leave request that produced a LEAVE status. Always present
    /// when `status == Leave`.
    pub leave_request_id: Option<Uuid>,
}

impl AttendanceRecord {
    /// Creates a fresh, editable record with the given status.
    pub fn new(employee_id: Uuid, date: NaiveDate, status: AttendanceStatus) -> Self {
        Self {
            id: Uuid::new_v4(),
            employee_id,
            date,
            status,
            remarks: String::new(),
            finalized: false,
            leave_request_id: None,
        }
    }
}
