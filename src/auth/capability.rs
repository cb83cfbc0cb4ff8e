//! Capability model.
//!
//! A single pure predicate derives the permitted actions from a
//! principal's role tags. Every mutating workflow consults this model
//! before attempting a transition; views render from its output and
//! never re-implement the rule.

use serde::{Deserialize, Serialize};

use crate::models::{Principal, Role};

/// A named action a principal may be permitted to perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Action {
    /// List every employee record.
    ViewAllEmployees,
    /// Edit an employee record.
    EditEmployee,
    /// Approve or reject a pending leave request.
    ApproveLeave,
    /// Create the attendance records for a period.
    InitializeAttendance,
    /// Lock a period's attendance records.
    FinalizeAttendance,
    /// Overwrite a single attendance record's status/remarks.
    EditAttendanceRecord,
    /// Generate payroll records from a finalized period.
    GeneratePayroll,
    /// Run a batch salary disbursement.
    DisbursePayroll,
    /// Mark a single payroll record paid.
    MarkSinglePaid,
    /// Submit a leave request for oneself.
    SubmitLeave,
    /// Read one's own records.
    ViewSelf,
}

impl Action {
    /// Returns true for the actions reserved to ADMIN/HR principals.
    fn is_administrative(&self) -> bool {
        !matches!(self, Action::SubmitLeave | Action::ViewSelf)
    }
}

/// Pure capability predicate: does `principal` permit `action`?
///
/// ADMIN and HR each permit every administrative action; EMPLOYEE permits
/// only self-scoped reads and leave submission. Roles are additive, so a
/// principal holding several roles permits the union of their actions.
///
/// # Example
///
/// ```
/// use uuid::Uuid;
/// use workforce_core::auth::{permits, Action};
/// use workforce_core::models::{Principal, Role};
///
/// let employee = Principal {
///     id: Uuid::new_v4(),
///     name: "Dev".to_string(),
///     roles: vec![Role::Employee],
/// };
/// assert!(permits(&employee, Action::SubmitLeave));
/// assert!(!permits(&employee, Action::GeneratePayroll));
/// ```
pub fn permits(principal: &Principal, action: Action) -> bool {
    if action.is_administrative() {
        principal.is_administrative()
    } else {
        principal.has_role(Role::Employee) || principal.is_administrative()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn principal_with(roles: Vec<Role>) -> Principal {
        Principal {
            id: Uuid::new_v4(),
            name: "Test".to_string(),
            roles,
        }
    }

    const ADMINISTRATIVE: [Action; 9] = [
        Action::ViewAllEmployees,
        Action::EditEmployee,
        Action::ApproveLeave,
        Action::InitializeAttendance,
        Action::FinalizeAttendance,
        Action::EditAttendanceRecord,
        Action::GeneratePayroll,
        Action::DisbursePayroll,
        Action::MarkSinglePaid,
    ];

    #[test]
    fn test_admin_permits_every_administrative_action() {
        let admin = principal_with(vec![Role::Admin]);
        for action in ADMINISTRATIVE {
            assert!(permits(&admin, action), "admin should permit {action:?}");
        }
    }

    #[test]
    fn test_hr_permits_every_administrative_action() {
        let hr = principal_with(vec![Role::Hr]);
        for action in ADMINISTRATIVE {
            assert!(permits(&hr, action), "hr should permit {action:?}");
        }
    }

    #[test]
    fn test_employee_denied_administrative_actions() {
        let employee = principal_with(vec![Role::Employee]);
        for action in ADMINISTRATIVE {
            assert!(
                !permits(&employee, action),
                "employee should not permit {action:?}"
            );
        }
    }

    #[test]
    fn test_employee_permits_self_scoped_actions() {
        let employee = principal_with(vec![Role::Employee]);
        assert!(permits(&employee, Action::SubmitLeave));
        assert!(permits(&employee, Action::ViewSelf));
    }

    #[test]
    fn test_combined_roles_permit_the_union() {
        let hr_employee = principal_with(vec![Role::Hr, Role::Employee]);
        assert!(permits(&hr_employee, Action::GeneratePayroll));
        assert!(permits(&hr_employee, Action::SubmitLeave));
    }

    #[test]
    fn test_no_roles_permits_nothing() {
        let nobody = principal_with(vec![]);
        assert!(!permits(&nobody, Action::SubmitLeave));
        assert!(!permits(&nobody, Action::GeneratePayroll));
    }

    #[test]
    fn test_action_serialization_is_kebab_case() {
        assert_eq!(
            serde_json::to_string(&Action::ApproveLeave).unwrap(),
            "\"approve-leave\""
        );
        assert_eq!(
            serde_json::to_string(&Action::MarkSinglePaid).unwrap(),
            "\"mark-single-paid\""
        );
    }
}
