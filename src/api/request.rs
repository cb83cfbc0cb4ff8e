//! Request types for the workforce API.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::CoreResult;
use crate::models::{AttendanceStatus, LeaveStatus, LeaveType, Period};
use crate::workflow::Decision;

/// Body for `POST /auth/login`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    /// Login email.
    pub email: String,
    /// Plaintext password.
    pub password: String,
}

/// Body for `POST /auth/verify-password`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyPasswordRequest {
    /// The re-entered login password.
    pub password: String,
}

/// Query for the period-scoped endpoints (`?month=&year=`).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PeriodQuery {
    /// Calendar month, 1-12.
    pub month: u32,
    /// Calendar year.
    pub year: i32,
}

impl PeriodQuery {
    /// Validates and converts to a [`Period`].
    pub fn period(self) -> CoreResult<Period> {
        Period::new(self.month, self.year)
    }
}

/// Body for `PUT /attendance/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceEditRequest {
    /// Target daily status.
    pub status: AttendanceStatus,
    /// Replacement remarks.
    #[serde(default)]
    pub remarks: String,
}

/// Body for `POST /leaves`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaveSubmitRequest {
    /// First day of leave (inclusive).
    pub start_date: NaiveDate,
    /// Last day of leave (inclusive).
    pub end_date: NaiveDate,
    /// The kind of leave.
    pub leave_type: LeaveType,
    /// Free-text reason.
    pub reason: String,
}

/// Query for `GET /leaves?status=`.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct LeaveListQuery {
    /// Optional status filter.
    pub status: Option<LeaveStatus>,
}

/// Query for `PUT /leaves/{id}/status?status=`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LeaveDecisionQuery {
    /// The terminal decision.
    pub status: Decision,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_period_query_validates_month() {
        let query = PeriodQuery { month: 13, year: 2024 };
        assert!(query.period().is_err());
        let query = PeriodQuery { month: 6, year: 2024 };
        assert_eq!(query.period().unwrap().to_string(), "6/2024");
    }

    #[test]
    fn test_leave_submit_deserializes_screaming_snake_type() {
        let json = r#"{
            "start_date": "2024-06-10",
            "end_date": "2024-06-12",
            "leave_type": "SICK",
            "reason": "flu"
        }"#;
        let request: LeaveSubmitRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.leave_type, LeaveType::Sick);
    }

    #[test]
    fn test_decision_query_deserializes() {
        let query: LeaveDecisionQuery =
            serde_json::from_str(r#"{"status": "APPROVED"}"#).unwrap();
        assert_eq!(query.status, Decision::Approved);
    }
}
