//! HTTP API for the workforce core.
//!
//! This module provides the axum router exposing the REST surface, the
//! shared application state, and the request/response types.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::{LoginResponse, create_router};
pub use request::{
    AttendanceEditRequest, LeaveDecisionQuery, LeaveListQuery, LeaveSubmitRequest, LoginRequest,
    PeriodQuery, VerifyPasswordRequest,
};
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
