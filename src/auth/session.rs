//! Explicit session context.
//!
//! Every workflow operation takes a [`Session`] rather than consulting
//! ambient process-wide state. A session is created on successful login
//! and torn down on logout; it carries the principal the operation is
//! performed as.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::auth::capability::{Action, permits};
use crate::error::{CoreError, CoreResult};
use crate::models::Principal;

/// The signed-in context a workflow operation runs under.
#[derive(Debug, Clone)]
pub struct Session {
    /// Opaque session token handed to the client at login.
    pub token: Uuid,
    /// The principal this session was established for.
    pub principal: Principal,
    /// When the session was established.
    pub started_at: DateTime<Utc>,
}

impl Session {
    /// Establishes a session for a principal, minting a fresh token.
    pub fn establish(principal: Principal) -> Self {
        Self {
            token: Uuid::new_v4(),
            principal,
            started_at: Utc::now(),
        }
    }

    /// Fails with an Authorization error unless the session's principal
    /// permits the action. Called by every mutating workflow before any
    /// store access.
    pub fn require(&self, action: Action) -> CoreResult<()> {
        if permits(&self.principal, action) {
            Ok(())
        } else {
            Err(CoreError::authorization(format!(
                "{} is not permitted {:?}",
                self.principal.name, action
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;

    fn session_with(roles: Vec<Role>) -> Session {
        Session::establish(Principal {
            id: Uuid::new_v4(),
            name: "Test".to_string(),
            roles,
        })
    }

    #[test]
    fn test_require_passes_for_permitted_action() {
        let hr = session_with(vec![Role::Hr]);
        assert!(hr.require(Action::ApproveLeave).is_ok());
    }

    #[test]
    fn test_require_fails_with_authorization_error() {
        let employee = session_with(vec![Role::Employee]);
        let err = employee.require(Action::GeneratePayroll).unwrap_err();
        assert!(matches!(err, CoreError::Authorization { .. }));
    }

    #[test]
    fn test_each_session_gets_a_fresh_token() {
        let a = session_with(vec![Role::Employee]);
        let b = session_with(vec![Role::Employee]);
        assert_ne!(a.token, b.token);
    }
}
