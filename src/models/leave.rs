//! Leave request model and related types.
//!
//! A leave request moves PENDING → {APPROVED, REJECTED}; both decisions
//! are terminal. Requests are never deleted.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The kind of leave being requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LeaveType {
    /// Paid sick leave.
    Sick,
    /// Paid casual leave.
    Casual,
    /// Paid earned leave.
    Earned,
    /// Unpaid leave; days on unpaid leave do not count as payable.
    Unpaid,
}

impl LeaveType {
    /// Returns true if days of this leave type count toward payable days.
    pub fn is_paid(&self) -> bool {
        !matches!(self, LeaveType::Unpaid)
    }
}

/// The lifecycle state of a leave request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LeaveStatus {
    /// Awaiting an ADMIN/HR decision.
    Pending,
    /// Approved; terminal.
    Approved,
    /// Rejected; terminal.
    Rejected,
}

impl LeaveStatus {
    /// Returns true once a terminal decision has been recorded.
    pub fn is_decided(&self) -> bool {
        !matches!(self, LeaveStatus::Pending)
    }
}

/// A single leave request from submission to terminal decision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaveRequest {
    /// Unique identifier.
    pub id: Uuid,
    /// The employee the leave belongs to.
    pub employee_id: Uuid,
    /// First day of leave (inclusive).
    pub start_date: NaiveDate,
    /// Last day of leave (inclusive); never before `start_date`.
    pub end_date: NaiveDate,
    /// The kind of leave.
    pub leave_type: LeaveType,
    /// Free-text reason supplied at submission.
    pub reason: String,
    /// Lifecycle state; terminal once decided.
    pub status: LeaveStatus,
    /// Submission timestamp.
    pub applied_at: DateTime<Utc>,
}

impl LeaveRequest {
    /// Number of calendar days covered, inclusive of both ends.
    pub fn day_count(&self) -> u32 {
        (self.end_date - self.start_date).num_days() as u32 + 1
    }

    /// Iterates every date in the requested range in order.
    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        let start = self.start_date;
        (0..self.day_count()).map(move |offset| start + chrono::Days::new(u64::from(offset)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(start: (i32, u32, u32), end: (i32, u32, u32)) -> LeaveRequest {
        LeaveRequest {
            id: Uuid::new_v4(),
            employee_id: Uuid::new_v4(),
            start_date: NaiveDate::from_ymd_opt(start.0, start.1, start.2).unwrap(),
            end_date: NaiveDate::from_ymd_opt(end.0, end.1, end.2).unwrap(),
            leave_type: LeaveType::Sick,
            reason: "flu".to_string(),
            status: LeaveStatus::Pending,
            applied_at: Utc::now(),
        }
    }

    #[test]
    fn test_day_count_single_day() {
        let req = request((2024, 6, 10), (2024, 6, 10));
        assert_eq!(req.day_count(), 1);
    }

    #[test]
    fn test_day_count_inclusive_range() {
        let req = request((2024, 6, 10), (2024, 6, 14));
        assert_eq!(req.day_count(), 5);
    }

    #[test]
    fn test_dates_iterates_range_in_order() {
        let req = request((2024, 6, 29), (2024, 7, 1));
        let dates: Vec<NaiveDate> = req.dates().collect();
        assert_eq!(
            dates,
            vec![
                NaiveDate::from_ymd_opt(2024, 6, 29).unwrap(),
                NaiveDate::from_ymd_opt(2024, 6, 30).unwrap(),
                NaiveDate::from_ymd_opt(2024, 7, 1).unwrap(),
            ]
        );
    }

    #[test]
    fn test_unpaid_is_the_only_non_paid_type() {
        assert!(LeaveType::Sick.is_paid());
        assert!(LeaveType::Casual.is_paid());
        assert!(LeaveType::Earned.is_paid());
        assert!(!LeaveType::Unpaid.is_paid());
    }

    #[test]
    fn test_pending_is_not_decided() {
        assert!(!LeaveStatus::Pending.is_decided());
        assert!(LeaveStatus::Approved.is_decided());
        assert!(LeaveStatus::Rejected.is_decided());
    }

    #[test]
    fn test_status_serialization() {
        assert_eq!(
            serde_json::to_string(&LeaveStatus::Pending).unwrap(),
            "\"PENDING\""
        );
        assert_eq!(
            serde_json::to_string(&LeaveType::Unpaid).unwrap(),
            "\"UNPAID\""
        );
    }
}
