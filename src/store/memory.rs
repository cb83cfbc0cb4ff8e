//! In-memory store implementation.
//!
//! Mutations are serialized behind a single `RwLock`, which is what makes
//! period finalization and batch payroll processing single commits from
//! the caller's point of view.

use std::collections::HashMap;
use std::sync::RwLock;

use chrono::{NaiveDate, Utc};
use uuid::Uuid;

use crate::auth::verify_password;
use crate::error::{CoreError, CoreResult};
use crate::models::{
    AttendanceRecord, Employee, LeaveRequest, LeaveStatus, PayrollRecord, PayrollStatus, Period,
};

use super::Store;

#[derive(Debug, Default)]
struct Inner {
    employees: HashMap<Uuid, Employee>,
    leaves: HashMap<Uuid, LeaveRequest>,
    attendance: HashMap<Uuid, AttendanceRecord>,
    payroll: HashMap<Uuid, PayrollRecord>,
}

/// An in-process [`Store`] backed by hash maps.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds an employee record, replacing any record with the same id.
    pub fn seed_employee(&self, employee: Employee) {
        let mut inner = self.inner.write().expect("store lock poisoned");
        inner.employees.insert(employee.id, employee);
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, Inner> {
        self.inner.read().expect("store lock poisoned")
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, Inner> {
        self.inner.write().expect("store lock poisoned")
    }
}

impl Store for MemoryStore {
    fn list_employees(&self) -> CoreResult<Vec<Employee>> {
        let inner = self.read();
        let mut employees: Vec<Employee> = inner.employees.values().cloned().collect();
        employees.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(employees)
    }

    fn employee(&self, id: Uuid) -> CoreResult<Employee> {
        self.read()
            .employees
            .get(&id)
            .cloned()
            .ok_or_else(|| CoreError::not_found("Employee", id))
    }

    fn employee_by_email(&self, email: &str) -> CoreResult<Employee> {
        self.read()
            .employees
            .values()
            .find(|e| e.email == email)
            .cloned()
            .ok_or_else(|| CoreError::not_found("Employee", email))
    }

    fn set_leave_balance(&self, id: Uuid, balance: u32) -> CoreResult<()> {
        let mut inner = self.write();
        let employee = inner
            .employees
            .get_mut(&id)
            .ok_or_else(|| CoreError::not_found("Employee", id))?;
        employee.leave_balance = balance;
        Ok(())
    }

    fn verify_credential(&self, employee_id: Uuid, password: &str) -> CoreResult<bool> {
        let hash = self
            .read()
            .employees
            .get(&employee_id)
            .map(|e| e.password_hash.clone())
            .ok_or_else(|| CoreError::not_found("Employee", employee_id))?;
        verify_password(password, &hash)
    }

    fn insert_leave(&self, request: LeaveRequest) -> CoreResult<LeaveRequest> {
        let mut inner = self.write();
        inner.leaves.insert(request.id, request.clone());
        Ok(request)
    }

    fn leave(&self, id: Uuid) -> CoreResult<LeaveRequest> {
        self.read()
            .leaves
            .get(&id)
            .cloned()
            .ok_or_else(|| CoreError::not_found("LeaveRequest", id))
    }

    fn leaves_by_status(&self, status: Option<LeaveStatus>) -> CoreResult<Vec<LeaveRequest>> {
        let inner = self.read();
        let mut leaves: Vec<LeaveRequest> = inner
            .leaves
            .values()
            .filter(|l| status.is_none_or(|s| l.status == s))
            .cloned()
            .collect();
        leaves.sort_by(|a, b| b.start_date.cmp(&a.start_date));
        Ok(leaves)
    }

    fn leaves_for_employee(&self, employee_id: Uuid) -> CoreResult<Vec<LeaveRequest>> {
        let inner = self.read();
        let mut leaves: Vec<LeaveRequest> = inner
            .leaves
            .values()
            .filter(|l| l.employee_id == employee_id)
            .cloned()
            .collect();
        leaves.sort_by(|a, b| b.start_date.cmp(&a.start_date));
        Ok(leaves)
    }

    fn set_leave_status(&self, id: Uuid, status: LeaveStatus) -> CoreResult<LeaveRequest> {
        let mut inner = self.write();
        let leave = inner
            .leaves
            .get_mut(&id)
            .ok_or_else(|| CoreError::not_found("LeaveRequest", id))?;
        leave.status = status;
        Ok(leave.clone())
    }

    fn attendance_for_period(&self, period: Period) -> CoreResult<Vec<AttendanceRecord>> {
        let inner = self.read();
        let mut records: Vec<AttendanceRecord> = inner
            .attendance
            .values()
            .filter(|r| period.contains(r.date))
            .cloned()
            .collect();
        records.sort_by(|a, b| a.date.cmp(&b.date).then(a.employee_id.cmp(&b.employee_id)));
        Ok(records)
    }

    fn attendance_record(&self, id: Uuid) -> CoreResult<AttendanceRecord> {
        self.read()
            .attendance
            .get(&id)
            .cloned()
            .ok_or_else(|| CoreError::not_found("AttendanceRecord", id))
    }

    fn find_attendance(
        &self,
        employee_id: Uuid,
        date: NaiveDate,
    ) -> CoreResult<Option<AttendanceRecord>> {
        Ok(self
            .read()
            .attendance
            .values()
            .find(|r| r.employee_id == employee_id && r.date == date)
            .cloned())
    }

    fn insert_attendance(&self, record: AttendanceRecord) -> CoreResult<AttendanceRecord> {
        let mut inner = self.write();
        if inner
            .attendance
            .values()
            .any(|r| r.employee_id == record.employee_id && r.date == record.date)
        {
            return Err(CoreError::conflict(format!(
                "attendance record already exists for employee {} on {}",
                record.employee_id, record.date
            )));
        }
        inner.attendance.insert(record.id, record.clone());
        Ok(record)
    }

    fn update_attendance(&self, record: AttendanceRecord) -> CoreResult<AttendanceRecord> {
        let mut inner = self.write();
        let stored = inner
            .attendance
            .get_mut(&record.id)
            .ok_or_else(|| CoreError::not_found("AttendanceRecord", record.id))?;
        if stored.finalized {
            return Err(CoreError::invalid_state(format!(
                "attendance record {} is finalized and cannot be updated",
                record.id
            )));
        }
        *stored = record.clone();
        Ok(record)
    }

    fn finalize_attendance(&self, period: Period) -> CoreResult<usize> {
        let mut inner = self.write();
        let ids: Vec<Uuid> = inner
            .attendance
            .values()
            .filter(|r| period.contains(r.date))
            .map(|r| r.id)
            .collect();
        for id in &ids {
            if let Some(record) = inner.attendance.get_mut(id) {
                record.finalized = true;
            }
        }
        Ok(ids.len())
    }

    fn payroll_exists(&self, period: Period) -> CoreResult<bool> {
        Ok(self
            .read()
            .payroll
            .values()
            .any(|p| p.month == period.month && p.year == period.year))
    }

    fn insert_payroll(&self, record: PayrollRecord) -> CoreResult<PayrollRecord> {
        let mut inner = self.write();
        if inner.payroll.values().any(|p| {
            p.employee_id == record.employee_id
                && p.month == record.month
                && p.year == record.year
        }) {
            return Err(CoreError::conflict(format!(
                "payroll record already exists for employee {} in {}/{}",
                record.employee_id, record.month, record.year
            )));
        }
        inner.payroll.insert(record.id, record.clone());
        Ok(record)
    }

    fn payroll(&self, id: Uuid) -> CoreResult<PayrollRecord> {
        self.read()
            .payroll
            .get(&id)
            .cloned()
            .ok_or_else(|| CoreError::not_found("PayrollRecord", id))
    }

    fn payroll_for_period(&self, period: Period) -> CoreResult<Vec<PayrollRecord>> {
        let inner = self.read();
        let mut records: Vec<PayrollRecord> = inner
            .payroll
            .values()
            .filter(|p| p.month == period.month && p.year == period.year)
            .cloned()
            .collect();
        records.sort_by_key(|p| p.employee_id);
        Ok(records)
    }

    async fn mark_paid(&self, id: Uuid) -> CoreResult<PayrollRecord> {
        let mut inner = self.write();
        let record = inner
            .payroll
            .get_mut(&id)
            .ok_or_else(|| CoreError::not_found("PayrollRecord", id))?;
        if record.status == PayrollStatus::Paid {
            return Err(CoreError::invalid_state(format!(
                "payroll record {id} is already paid"
            )));
        }
        record.status = PayrollStatus::Paid;
        record.paid_at = Some(Utc::now());
        Ok(record.clone())
    }

    async fn process_period(&self, period: Period) -> CoreResult<Vec<PayrollRecord>> {
        let mut inner = self.write();
        let ids: Vec<Uuid> = inner
            .payroll
            .values()
            .filter(|p| p.month == period.month && p.year == period.year)
            .map(|p| p.id)
            .collect();
        if ids.is_empty() {
            return Err(CoreError::not_found("PayrollRecord", period));
        }
        let now = Utc::now();
        let mut updated = Vec::with_capacity(ids.len());
        for id in ids {
            if let Some(record) = inner.payroll.get_mut(&id) {
                if record.status == PayrollStatus::Pending {
                    record.status = PayrollStatus::Paid;
                    record.paid_at = Some(now);
                }
                updated.push(record.clone());
            }
        }
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::hash_password;
    use crate::models::{AttendanceStatus, Role};
    use rust_decimal::Decimal;

    fn seed(store: &MemoryStore, name: &str) -> Employee {
        let employee = Employee {
            id: Uuid::new_v4(),
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            password_hash: hash_password("pw").unwrap(),
            roles: vec![Role::Employee],
            base_salary: Some(Decimal::new(30_000_00, 2)),
            leave_balance: 20,
            active: true,
        };
        store.seed_employee(employee.clone());
        employee
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_duplicate_attendance_for_same_day_conflicts() {
        let store = MemoryStore::new();
        let emp = seed(&store, "Asha");
        let d = date(2024, 6, 3);
        store
            .insert_attendance(AttendanceRecord::new(emp.id, d, AttendanceStatus::Present))
            .unwrap();
        let err = store
            .insert_attendance(AttendanceRecord::new(emp.id, d, AttendanceStatus::Absent))
            .unwrap_err();
        assert!(matches!(err, CoreError::Conflict { .. }));
    }

    #[test]
    fn test_update_finalized_record_is_invalid_state() {
        let store = MemoryStore::new();
        let emp = seed(&store, "Asha");
        let record = store
            .insert_attendance(AttendanceRecord::new(
                emp.id,
                date(2024, 6, 3),
                AttendanceStatus::Present,
            ))
            .unwrap();
        store
            .finalize_attendance(Period::new(6, 2024).unwrap())
            .unwrap();
        let mut edited = record;
        edited.status = AttendanceStatus::Absent;
        let err = store.update_attendance(edited).unwrap_err();
        assert!(matches!(err, CoreError::InvalidState { .. }));
    }

    #[test]
    fn test_finalize_flips_every_record_in_period() {
        let store = MemoryStore::new();
        let emp = seed(&store, "Asha");
        for day in 1..=3 {
            store
                .insert_attendance(AttendanceRecord::new(
                    emp.id,
                    date(2024, 6, day),
                    AttendanceStatus::Present,
                ))
                .unwrap();
        }
        let period = Period::new(6, 2024).unwrap();
        assert_eq!(store.finalize_attendance(period).unwrap(), 3);
        assert!(
            store
                .attendance_for_period(period)
                .unwrap()
                .iter()
                .all(|r| r.finalized)
        );
    }

    #[test]
    fn test_duplicate_payroll_for_same_key_conflicts() {
        let store = MemoryStore::new();
        let emp = seed(&store, "Asha");
        let record = PayrollRecord {
            id: Uuid::new_v4(),
            employee_id: emp.id,
            month: 6,
            year: 2024,
            base_salary: Decimal::new(30_000_00, 2),
            payable_days: Decimal::from(30),
            deduction_amount: Decimal::ZERO,
            net_salary: Decimal::new(30_000_00, 2),
            status: PayrollStatus::Pending,
            generated_at: Utc::now(),
            paid_at: None,
        };
        store.insert_payroll(record.clone()).unwrap();
        let dup = PayrollRecord {
            id: Uuid::new_v4(),
            ..record
        };
        assert!(matches!(
            store.insert_payroll(dup).unwrap_err(),
            CoreError::Conflict { .. }
        ));
    }

    #[tokio::test]
    async fn test_mark_paid_twice_is_invalid_state() {
        let store = MemoryStore::new();
        let emp = seed(&store, "Asha");
        let record = store
            .insert_payroll(PayrollRecord {
                id: Uuid::new_v4(),
                employee_id: emp.id,
                month: 6,
                year: 2024,
                base_salary: Decimal::new(30_000_00, 2),
                payable_days: Decimal::from(30),
                deduction_amount: Decimal::ZERO,
                net_salary: Decimal::new(30_000_00, 2),
                status: PayrollStatus::Pending,
                generated_at: Utc::now(),
                paid_at: None,
            })
            .unwrap();
        let paid = store.mark_paid(record.id).await.unwrap();
        assert_eq!(paid.status, PayrollStatus::Paid);
        assert!(paid.paid_at.is_some());
        assert!(matches!(
            store.mark_paid(record.id).await.unwrap_err(),
            CoreError::InvalidState { .. }
        ));
    }

    #[tokio::test]
    async fn test_process_period_with_no_records_is_not_found() {
        let store = MemoryStore::new();
        let err = store
            .process_period(Period::new(6, 2024).unwrap())
            .await
            .unwrap_err();
        assert!(matches!(err, CoreError::NotFound { .. }));
    }

    #[test]
    fn test_verify_credential_checks_bcrypt_hash() {
        let store = MemoryStore::new();
        let emp = seed(&store, "Asha");
        assert!(store.verify_credential(emp.id, "pw").unwrap());
        assert!(!store.verify_credential(emp.id, "nope").unwrap());
    }
}
