//! Application state for the workforce API.
//!
//! Holds the backing store, the policy configuration, and the session
//! registry. Sessions are explicit: established at login, looked up per
//! request from the bearer token, and removed at logout.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use uuid::Uuid;

use crate::auth::Session;
use crate::config::PolicyConfig;
use crate::error::{CoreError, CoreResult};
use crate::store::{MemoryStore, Store};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    store: Arc<MemoryStore>,
    policy: Arc<PolicyConfig>,
    sessions: Arc<RwLock<HashMap<Uuid, Session>>>,
}

impl AppState {
    /// Creates application state over a store and policy configuration.
    pub fn new(store: MemoryStore, policy: PolicyConfig) -> Self {
        Self {
            store: Arc::new(store),
            policy: Arc::new(policy),
            sessions: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Returns a reference to the backing store.
    pub fn store(&self) -> &MemoryStore {
        &self.store
    }

    /// Returns a reference to the policy configuration.
    pub fn policy(&self) -> &PolicyConfig {
        &self.policy
    }

    /// Verifies credentials and establishes a session.
    pub fn login(&self, email: &str, password: &str) -> CoreResult<Session> {
        let employee = self
            .store
            .employee_by_email(email)
            .map_err(|_| CoreError::authorization("invalid email or password"))?;
        if !self.store.verify_credential(employee.id, password)? {
            return Err(CoreError::authorization("invalid email or password"));
        }
        let session = Session::establish(employee.principal());
        self.sessions
            .write()
            .expect("session lock poisoned")
            .insert(session.token, session.clone());
        Ok(session)
    }

    /// Resolves a bearer token to its session.
    pub fn session(&self, token: Uuid) -> CoreResult<Session> {
        self.sessions
            .read()
            .expect("session lock poisoned")
            .get(&token)
            .cloned()
            .ok_or_else(|| CoreError::authorization("session expired or unknown"))
    }

    /// Tears the session down.
    pub fn logout(&self, token: Uuid) {
        self.sessions
            .write()
            .expect("session lock poisoned")
            .remove(&token);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::hash_password;
    use crate::models::{Employee, Role};

    fn state_with_user() -> AppState {
        let store = MemoryStore::new();
        store.seed_employee(Employee {
            id: Uuid::new_v4(),
            name: "Asha Rao".to_string(),
            email: "asha@example.com".to_string(),
            password_hash: hash_password("pw").unwrap(),
            roles: vec![Role::Employee],
            base_salary: None,
            leave_balance: 20,
            active: true,
        });
        AppState::new(store, PolicyConfig::default())
    }

    #[test]
    fn test_login_establishes_resolvable_session() {
        let state = state_with_user();
        let session = state.login("asha@example.com", "pw").unwrap();
        let resolved = state.session(session.token).unwrap();
        assert_eq!(resolved.principal.id, session.principal.id);
    }

    #[test]
    fn test_login_with_wrong_password_fails() {
        let state = state_with_user();
        let err = state.login("asha@example.com", "nope").unwrap_err();
        assert!(matches!(err, CoreError::Authorization { .. }));
    }

    #[test]
    fn test_logout_tears_session_down() {
        let state = state_with_user();
        let session = state.login("asha@example.com", "pw").unwrap();
        state.logout(session.token);
        assert!(state.session(session.token).is_err());
    }

    #[test]
    fn test_app_state_is_clone() {
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }
}
