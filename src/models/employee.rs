//! Employee model.
//!
//! The stored record behind a principal: identity, role tags, the monthly
//! base salary payroll generation copies from, and the leave balance the
//! leave workflow draws down on approval.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::principal::{Principal, Role};

/// An employee record held by the backing store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// Unique email address; the login identifier.
    pub email: String,
    /// Bcrypt hash of the login password. Never serialized.
    #[serde(skip)]
    pub password_hash: String,
    /// One or more role tags.
    pub roles: Vec<Role>,
    /// Monthly base salary. Employees without a positive salary are
    /// skipped by payroll generation.
    pub base_salary: Option<Decimal>,
    /// Remaining leave balance in days.
    pub leave_balance: u32,
    /// Inactive employees are excluded from attendance initialization
    /// and payroll generation.
    pub active: bool,
}

impl Employee {
    /// Projects the capability-relevant subset of this record.
    pub fn principal(&self) -> Principal {
        Principal {
            id: self.id,
            name: self.name.clone(),
            roles: self.roles.clone(),
        }
    }

    /// Returns true if this record participates in the monthly
    /// attendance/payroll lifecycle.
    pub fn is_active_employee(&self) -> bool {
        self.active && self.roles.contains(&Role::Employee)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn employee(roles: Vec<Role>, active: bool) -> Employee {
        Employee {
            id: Uuid::new_v4(),
            name: "Asha Rao".to_string(),
            email: "asha@example.com".to_string(),
            password_hash: "$2b$04$stub".to_string(),
            roles,
            base_salary: Some(Decimal::new(60_000_00, 2)),
            leave_balance: 20,
            active,
        }
    }

    #[test]
    fn test_principal_projection_carries_roles() {
        let emp = employee(vec![Role::Hr, Role::Employee], true);
        let principal = emp.principal();
        assert_eq!(principal.id, emp.id);
        assert_eq!(principal.roles, vec![Role::Hr, Role::Employee]);
    }

    #[test]
    fn test_active_employee_requires_employee_role() {
        assert!(employee(vec![Role::Employee], true).is_active_employee());
        assert!(!employee(vec![Role::Admin], true).is_active_employee());
    }

    #[test]
    fn test_inactive_employee_is_excluded() {
        assert!(!employee(vec![Role::Employee], false).is_active_employee());
    }

    #[test]
    fn test_password_hash_is_never_serialized() {
        let emp = employee(vec![Role::Employee], true);
        let json = serde_json::to_string(&emp).unwrap();
        assert!(!json.contains("password"));
        assert!(!json.contains("$2b$"));
    }
}
