//! Payslip rendering.
//!
//! Renders a payroll record into a plain-text payslip document served as
//! bytes by the API layer.

use uuid::Uuid;

use crate::auth::{Action, Session};
use crate::error::CoreResult;
use crate::models::PayrollStatus;
use crate::store::Store;

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Renders the payslip document for one payroll record.
///
/// The record's owner may fetch their own payslip; anyone else's
/// requires the administrative read capability.
pub fn render<S: Store>(store: &S, session: &Session, record_id: Uuid) -> CoreResult<Vec<u8>> {
    let record = store.payroll(record_id)?;
    let action = if record.employee_id == session.principal.id {
        Action::ViewSelf
    } else {
        Action::ViewAllEmployees
    };
    session.require(action)?;

    let employee = store.employee(record.employee_id)?;
    let month_name = MONTH_NAMES
        .get(record.month as usize - 1)
        .copied()
        .unwrap_or("Unknown");

    let status = match record.status {
        PayrollStatus::Pending => "PENDING",
        PayrollStatus::Paid => "PAID",
    };

    let mut doc = String::new();
    doc.push_str("========================================\n");
    doc.push_str("              WORKFORCE CORP            \n");
    doc.push_str(&format!(
        "        Payslip for {month_name} {}\n",
        record.year
    ));
    doc.push_str("========================================\n\n");
    doc.push_str(&format!("Employee:       {}\n", employee.name));
    doc.push_str(&format!("Employee ID:    {}\n", employee.id));
    doc.push_str(&format!(
        "Generated:      {}\n",
        record.generated_at.format("%Y-%m-%d")
    ));
    doc.push_str(&format!("Status:         {status}\n\n"));
    doc.push_str("----------------------------------------\n");
    doc.push_str(&format!("Base salary:    {:>15}\n", record.base_salary));
    doc.push_str(&format!("Payable days:   {:>15}\n", record.payable_days));
    doc.push_str(&format!(
        "Deductions:     {:>15}\n",
        format!("-{}", record.deduction_amount)
    ));
    doc.push_str("----------------------------------------\n");
    doc.push_str(&format!("Net salary:     {:>15}\n", record.net_salary));
    doc.push_str("----------------------------------------\n\n");
    doc.push_str("This is a computer-generated document.\n");

    Ok(doc.into_bytes())
}
