//! Payroll generation and payment.
//!
//! Generation is whole-period, once-only, and gated on the attendance
//! period being FINALIZED. Payment writes (single and batch) are the
//! terminal transitions driven by the disbursement transaction.

use chrono::Utc;
use rust_decimal::Decimal;
use tracing::info;
use uuid::Uuid;

use crate::auth::{Action, Session};
use crate::error::{CoreError, CoreResult};
use crate::models::{
    AttendanceRecord, AttendanceStatus, PayrollRecord, PayrollStatus, Period, PeriodState,
};
use crate::store::Store;

use super::attendance::period_state;

/// Weighted payable-day count for one employee's finalized records.
///
/// PRESENT counts 1, HALF_DAY counts one half, LEAVE counts 1 when the
/// underlying leave type is paid and 0 when unpaid, ABSENT counts 0.
fn payable_days<S: Store>(store: &S, records: &[AttendanceRecord]) -> CoreResult<Decimal> {
    let mut days = Decimal::ZERO;
    for record in records {
        days += match record.status {
            AttendanceStatus::Present => Decimal::ONE,
            AttendanceStatus::HalfDay => Decimal::new(5, 1),
            AttendanceStatus::Absent => Decimal::ZERO,
            AttendanceStatus::Leave => match record.leave_request_id {
                Some(leave_id) if store.leave(leave_id)?.leave_type.is_paid() => Decimal::ONE,
                _ => Decimal::ZERO,
            },
        };
    }
    Ok(days)
}

/// Generates one PENDING payroll record per active salaried employee.
///
/// Fails with PreconditionError unless the attendance period is
/// FINALIZED, and with ConflictError if any record already exists for
/// the period: generation is once-only, with no partial regeneration.
pub fn generate<S: Store>(
    store: &S,
    session: &Session,
    period: Period,
) -> CoreResult<Vec<PayrollRecord>> {
    session.require(Action::GeneratePayroll)?;

    if period_state(store, period)? != PeriodState::Finalized {
        return Err(CoreError::precondition(format!(
            "attendance for {period} is not finalized"
        )));
    }
    if store.payroll_exists(period)? {
        return Err(CoreError::conflict(format!(
            "payroll for {period} has already been generated"
        )));
    }

    let attendance = store.attendance_for_period(period)?;
    let days_in_month = period.days_in_month();
    let mut generated = Vec::new();

    for employee in store.list_employees()? {
        if !employee.is_active_employee() {
            continue;
        }
        let Some(base_salary) = employee.base_salary.filter(|s| *s > Decimal::ZERO) else {
            continue;
        };

        let own_records: Vec<AttendanceRecord> = attendance
            .iter()
            .filter(|r| r.employee_id == employee.id)
            .cloned()
            .collect();
        let payable = payable_days(store, &own_records)?;
        let (net_salary, deduction_amount) =
            PayrollRecord::compute_net(base_salary, payable, days_in_month);

        let record = store.insert_payroll(PayrollRecord {
            id: Uuid::new_v4(),
            employee_id: employee.id,
            month: period.month,
            year: period.year,
            base_salary,
            payable_days: payable,
            deduction_amount,
            net_salary,
            status: PayrollStatus::Pending,
            generated_at: Utc::now(),
            paid_at: None,
        })?;
        generated.push(record);
    }

    info!(%period, count = generated.len(), "payroll generated");
    Ok(generated)
}

/// Lists the period's payroll records.
pub fn list<S: Store>(
    store: &S,
    session: &Session,
    period: Period,
) -> CoreResult<Vec<PayrollRecord>> {
    session.require(Action::ViewAllEmployees)?;
    store.payroll_for_period(period)
}

/// Marks a single record PAID and stamps the payment time.
///
/// This is the terminal write issued by a SINGLE disbursement; it fails
/// with InvalidStateError if the record is already PAID.
pub async fn mark_paid<S: Store>(
    store: &S,
    session: &Session,
    record_id: Uuid,
) -> CoreResult<PayrollRecord> {
    session.require(Action::MarkSinglePaid)?;
    let record = store.mark_paid(record_id).await?;
    info!(%record_id, "payroll record marked paid");
    Ok(record)
}

/// Flips every PENDING record in the period to PAID as one commit.
///
/// This is the terminal write issued by a BATCH disbursement.
pub async fn process_batch<S: Store>(
    store: &S,
    session: &Session,
    period: Period,
) -> CoreResult<Vec<PayrollRecord>> {
    session.require(Action::DisbursePayroll)?;
    let records = store.process_period(period).await?;
    info!(%period, count = records.len(), "payroll batch processed");
    Ok(records)
}
