//! HTTP request handlers for the workforce API.
//!
//! The router exposes the REST surface the workflows are driven by:
//! session endpoints, attendance period operations, leave lifecycle, and
//! payroll generation/settlement. Every authenticated route resolves the
//! bearer token to an explicit session before calling into a workflow.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post, put},
};
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::auth::Session;
use crate::error::CoreError;
use crate::models::Principal;
use crate::store::Store;
use crate::workflow::{attendance, leave, payroll, payslip};

use super::request::{
    AttendanceEditRequest, LeaveDecisionQuery, LeaveListQuery, LeaveSubmitRequest, LoginRequest,
    PeriodQuery, VerifyPasswordRequest,
};
use super::response::ApiErrorResponse;
use super::state::AppState;

/// Response body for `POST /auth/login`.
#[derive(Debug, Clone, Serialize)]
pub struct LoginResponse {
    /// Bearer token for subsequent requests.
    pub token: Uuid,
    /// The signed-in principal.
    pub principal: Principal,
}

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/auth/login", post(login_handler))
        .route("/auth/logout", post(logout_handler))
        .route("/auth/verify-password", post(verify_password_handler))
        .route("/attendance", get(attendance_list_handler))
        .route("/attendance/init", post(attendance_init_handler))
        .route("/attendance/finalize", post(attendance_finalize_handler))
        .route("/attendance/:id", put(attendance_edit_handler))
        .route("/leaves", get(leaves_list_handler).post(leave_submit_handler))
        .route("/leaves/my", get(leaves_my_handler))
        .route("/leaves/:id/status", put(leave_decide_handler))
        .route("/payroll", get(payroll_list_handler))
        .route("/payroll/generate", post(payroll_generate_handler))
        .route("/payroll/process", post(payroll_process_handler))
        .route("/payroll/:id/mark-paid", post(payroll_mark_paid_handler))
        .route("/payroll/payslip/:id", get(payslip_handler))
        .with_state(state)
}

/// Resolves the `Authorization: Bearer <token>` header to a session.
fn bearer_session(state: &AppState, headers: &HeaderMap) -> Result<Session, ApiErrorResponse> {
    let token = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .and_then(|v| Uuid::parse_str(v.trim()).ok())
        .ok_or_else(|| {
            ApiErrorResponse::from(CoreError::authorization("missing bearer token"))
                .unauthorized()
        })?;
    state
        .session(token)
        .map_err(|e| ApiErrorResponse::from(e).unauthorized())
}

async fn login_handler(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> Response {
    match state.login(&body.email, &body.password) {
        Ok(session) => {
            info!(principal = %session.principal.name, "login succeeded");
            Json(LoginResponse {
                token: session.token,
                principal: session.principal,
            })
            .into_response()
        }
        Err(err) => ApiErrorResponse::from(err).unauthorized().into_response(),
    }
}

async fn logout_handler(State(state): State<AppState>, headers: HeaderMap) -> Response {
    match bearer_session(&state, &headers) {
        Ok(session) => {
            state.logout(session.token);
            StatusCode::NO_CONTENT.into_response()
        }
        Err(err) => err.into_response(),
    }
}

/// Re-authentication check used by the disbursement AUTH phase.
async fn verify_password_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(body): Json<VerifyPasswordRequest>,
) -> Response {
    let session = match bearer_session(&state, &headers) {
        Ok(session) => session,
        Err(err) => return err.into_response(),
    };
    match state
        .store()
        .verify_credential(session.principal.id, &body.password)
    {
        Ok(true) => StatusCode::OK.into_response(),
        Ok(false) => ApiErrorResponse::from(CoreError::authorization(
            "invalid password, authorization failed",
        ))
        .unauthorized()
        .into_response(),
        Err(err) => ApiErrorResponse::from(err).into_response(),
    }
}

async fn attendance_list_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<PeriodQuery>,
) -> Response {
    with_session_and_period(&state, &headers, query, |session, period| {
        attendance::records(state.store(), &session, period).map(Json)
    })
}

async fn attendance_init_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<PeriodQuery>,
) -> Response {
    with_session_and_period(&state, &headers, query, |session, period| {
        attendance::initialize(state.store(), &session, period)
            .map(|created| Json(serde_json::json!({ "created": created })))
    })
}

async fn attendance_finalize_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<PeriodQuery>,
) -> Response {
    with_session_and_period(&state, &headers, query, |session, period| {
        attendance::finalize(state.store(), &session, period)
            .map(|locked| Json(serde_json::json!({ "finalized": locked })))
    })
}

async fn attendance_edit_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<Uuid>,
    Json(body): Json<AttendanceEditRequest>,
) -> Response {
    with_session(&state, &headers, |session| {
        attendance::edit_record(state.store(), &session, id, body.status, body.remarks.clone())
            .map(Json)
    })
}

async fn leaves_list_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<LeaveListQuery>,
) -> Response {
    with_session(&state, &headers, |session| {
        leave::list(state.store(), &session, query.status).map(Json)
    })
}

async fn leaves_my_handler(State(state): State<AppState>, headers: HeaderMap) -> Response {
    with_session(&state, &headers, |session| {
        leave::my_leaves(state.store(), &session).map(Json)
    })
}

async fn leave_submit_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(body): Json<LeaveSubmitRequest>,
) -> Response {
    with_session(&state, &headers, |session| {
        leave::submit(
            state.store(),
            &session,
            body.start_date,
            body.end_date,
            body.leave_type,
            body.reason.clone(),
        )
        .map(|created| (StatusCode::CREATED, Json(created)))
    })
}

async fn leave_decide_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<Uuid>,
    Query(query): Query<LeaveDecisionQuery>,
) -> Response {
    with_session(&state, &headers, |session| {
        leave::decide(state.store(), &session, id, query.status).map(Json)
    })
}

async fn payroll_list_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<PeriodQuery>,
) -> Response {
    with_session_and_period(&state, &headers, query, |session, period| {
        payroll::list(state.store(), &session, period).map(Json)
    })
}

async fn payroll_generate_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<PeriodQuery>,
) -> Response {
    with_session_and_period(&state, &headers, query, |session, period| {
        payroll::generate(state.store(), &session, period)
            .map(|records| (StatusCode::CREATED, Json(records)))
    })
}

/// The single batch-commit call issued by a BATCH disbursement.
async fn payroll_process_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<PeriodQuery>,
) -> Response {
    let period = match query.period() {
        Ok(period) => period,
        Err(err) => return ApiErrorResponse::from(err).into_response(),
    };
    let session = match bearer_session(&state, &headers) {
        Ok(session) => session,
        Err(err) => return err.into_response(),
    };
    match payroll::process_batch(state.store(), &session, period).await {
        Ok(records) => Json(records).into_response(),
        Err(err) => ApiErrorResponse::from(err).into_response(),
    }
}

async fn payroll_mark_paid_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<Uuid>,
) -> Response {
    let session = match bearer_session(&state, &headers) {
        Ok(session) => session,
        Err(err) => return err.into_response(),
    };
    match payroll::mark_paid(state.store(), &session, id).await {
        Ok(record) => Json(record).into_response(),
        Err(err) => ApiErrorResponse::from(err).into_response(),
    }
}

async fn payslip_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<Uuid>,
) -> Response {
    with_session(&state, &headers, |session| {
        payslip::render(state.store(), &session, id).map(|bytes| {
            (
                [(header::CONTENT_TYPE, "application/octet-stream")],
                bytes,
            )
        })
    })
}

fn with_session<T: IntoResponse>(
    state: &AppState,
    headers: &HeaderMap,
    f: impl FnOnce(Session) -> Result<T, CoreError>,
) -> Response {
    match bearer_session(state, headers) {
        Ok(session) => match f(session) {
            Ok(ok) => ok.into_response(),
            Err(err) => ApiErrorResponse::from(err).into_response(),
        },
        Err(err) => err.into_response(),
    }
}

fn with_session_and_period<T: IntoResponse>(
    state: &AppState,
    headers: &HeaderMap,
    query: PeriodQuery,
    f: impl FnOnce(Session, crate::models::Period) -> Result<T, CoreError>,
) -> Response {
    match query.period() {
        Ok(period) => with_session(state, headers, |session| f(session, period)),
        Err(err) => ApiErrorResponse::from(err).into_response(),
    }
}
