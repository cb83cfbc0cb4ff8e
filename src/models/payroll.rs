//! Payroll record model and the net-salary computation.
//!
//! One record per (employee, month, year), created only by payroll
//! generation and never regenerated. Base salary is copied at generation
//! time and immutable thereafter.

use chrono::{DateTime, Utc};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The payment state of a payroll record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PayrollStatus {
    /// Generated, awaiting disbursement.
    Pending,
    /// Disbursed; terminal.
    Paid,
}

/// One employee's payable salary for one period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayrollRecord {
    /// Unique identifier.
    pub id: Uuid,
    /// The employee the record belongs to.
    pub employee_id: Uuid,
    /// Calendar month, 1-12.
    pub month: u32,
    /// Calendar year.
    pub year: i32,
    /// Monthly base salary copied from the employee at generation time.
    pub base_salary: Decimal,
    /// Weighted payable-day count (PRESENT=1, HALF_DAY=0.5, paid LEAVE=1).
    pub payable_days: Decimal,
    /// Amount withheld for unpaid days; base − net, never negative.
    pub deduction_amount: Decimal,
    /// Per-day salary × payable days, rounded to 2 decimal places.
    pub net_salary: Decimal,
    /// Payment state.
    pub status: PayrollStatus,
    /// Generation timestamp.
    pub generated_at: DateTime<Utc>,
    /// Stamped when the record is marked paid.
    pub paid_at: Option<DateTime<Utc>>,
}

impl PayrollRecord {
    /// Computes net salary and deduction for a base salary over a period.
    ///
    /// Per-day salary is base / days-in-month rounded to 2 dp, net is
    /// per-day × payable days rounded to 2 dp, and the deduction is the
    /// remainder of the base, clamped at zero.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_decimal::Decimal;
    /// use workforce_core::models::PayrollRecord;
    ///
    /// let (net, deduction) =
    ///     PayrollRecord::compute_net(Decimal::new(30_000_00, 2), Decimal::from(30), 30);
    /// assert_eq!(net, Decimal::new(30_000_00, 2));
    /// assert_eq!(deduction, Decimal::ZERO);
    /// ```
    pub fn compute_net(
        base_salary: Decimal,
        payable_days: Decimal,
        days_in_month: u32,
    ) -> (Decimal, Decimal) {
        let per_day = (base_salary / Decimal::from(days_in_month))
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        let net = (per_day * payable_days)
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        let deduction = (base_salary - net).max(Decimal::ZERO);
        (net, deduction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_month_pays_full_base() {
        let base = Decimal::new(60_000_00, 2);
        let (net, deduction) = PayrollRecord::compute_net(base, Decimal::from(30), 30);
        assert_eq!(net, base);
        assert_eq!(deduction, Decimal::ZERO);
    }

    #[test]
    fn test_half_day_weighting() {
        // 30000 over 30 days = 1000/day; 29.5 payable days = 29500
        let base = Decimal::new(30_000_00, 2);
        let (net, deduction) =
            PayrollRecord::compute_net(base, Decimal::new(295, 1), 30);
        assert_eq!(net, Decimal::new(29_500_00, 2));
        assert_eq!(deduction, Decimal::new(500_00, 2));
    }

    #[test]
    fn test_zero_payable_days() {
        let base = Decimal::new(30_000_00, 2);
        let (net, deduction) = PayrollRecord::compute_net(base, Decimal::ZERO, 30);
        assert_eq!(net, Decimal::ZERO);
        assert_eq!(deduction, base);
    }

    #[test]
    fn test_deduction_never_negative_under_rounding() {
        // 1000.00 / 31 = 32.26/day; 31 days * 32.26 = 1000.06 > base
        let base = Decimal::new(1000_00, 2);
        let (net, deduction) = PayrollRecord::compute_net(base, Decimal::from(31), 31);
        assert!(net > base);
        assert_eq!(deduction, Decimal::ZERO);
    }

    #[test]
    fn test_status_serialization() {
        assert_eq!(
            serde_json::to_string(&PayrollStatus::Pending).unwrap(),
            "\"PENDING\""
        );
        assert_eq!(
            serde_json::to_string(&PayrollStatus::Paid).unwrap(),
            "\"PAID\""
        );
    }
}
