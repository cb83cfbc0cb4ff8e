//! Principal and role models.
//!
//! A principal is the capability-relevant projection of a signed-in
//! employee: its identity plus the set of role tags it holds. Roles are
//! additive capability sets, not a hierarchy; a principal may hold
//! several simultaneously.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A role tag granting a set of capabilities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    /// Full administrative access.
    Admin,
    /// Human-resources access; same administrative set as [`Role::Admin`].
    Hr,
    /// Self-scoped read access and leave submission.
    Employee,
}

/// The signed-in identity every workflow operation is performed as.
///
/// # Example
///
/// ```
/// use workforce_core::models::{Principal, Role};
/// use uuid::Uuid;
///
/// let hr = Principal {
///     id: Uuid::new_v4(),
///     name: "Priya Nair".to_string(),
///     roles: vec![Role::Hr, Role::Employee],
/// };
/// assert!(hr.has_role(Role::Hr));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Principal {
    /// Unique identifier; matches the backing employee record.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// One or more role tags.
    pub roles: Vec<Role>,
}

impl Principal {
    /// Returns true if the principal holds the given role.
    pub fn has_role(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }

    /// Returns true if the principal holds ADMIN or HR.
    pub fn is_administrative(&self) -> bool {
        self.has_role(Role::Admin) || self.has_role(Role::Hr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn principal_with(roles: Vec<Role>) -> Principal {
        Principal {
            id: Uuid::new_v4(),
            name: "Test".to_string(),
            roles,
        }
    }

    #[test]
    fn test_has_role() {
        let p = principal_with(vec![Role::Employee]);
        assert!(p.has_role(Role::Employee));
        assert!(!p.has_role(Role::Admin));
    }

    #[test]
    fn test_roles_are_additive() {
        let p = principal_with(vec![Role::Hr, Role::Employee]);
        assert!(p.has_role(Role::Hr));
        assert!(p.has_role(Role::Employee));
        assert!(p.is_administrative());
    }

    #[test]
    fn test_employee_only_is_not_administrative() {
        let p = principal_with(vec![Role::Employee]);
        assert!(!p.is_administrative());
    }

    #[test]
    fn test_role_serialization() {
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"ADMIN\"");
        assert_eq!(serde_json::to_string(&Role::Hr).unwrap(), "\"HR\"");
        assert_eq!(
            serde_json::to_string(&Role::Employee).unwrap(),
            "\"EMPLOYEE\""
        );
    }
}
