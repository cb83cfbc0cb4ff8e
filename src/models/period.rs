//! Period model and the derived attendance-period lifecycle state.
//!
//! A [`Period`] is the (month, year) scope over which attendance and
//! payroll are managed together. It is a value type, not a stored entity:
//! the attendance period's lifecycle state is derived from the records
//! that share its (month, year) key.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// A calendar month scope for attendance and payroll.
///
/// # Example
///
/// ```
/// use workforce_core::models::Period;
///
/// let period = Period::new(6, 2024).unwrap();
/// assert_eq!(period.days_in_month(), 30);
/// assert_eq!(period.dates().count(), 30);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Period {
    /// Calendar month, 1-12.
    pub month: u32,
    /// Calendar year.
    pub year: i32,
}

impl Period {
    /// Creates a period, validating the month is in 1-12.
    pub fn new(month: u32, year: i32) -> CoreResult<Self> {
        if !(1..=12).contains(&month) {
            return Err(CoreError::validation(format!(
                "month must be between 1 and 12, got {month}"
            )));
        }
        Ok(Self { month, year })
    }

    /// Returns the number of calendar days in this period's month.
    pub fn days_in_month(&self) -> u32 {
        let first = self.first_day();
        let next_month = if self.month == 12 {
            NaiveDate::from_ymd_opt(self.year + 1, 1, 1)
        } else {
            NaiveDate::from_ymd_opt(self.year, self.month + 1, 1)
        };
        next_month
            .map(|d| d.signed_duration_since(first).num_days() as u32)
            .unwrap_or(0)
    }

    /// Returns the first calendar day of the period.
    pub fn first_day(&self) -> NaiveDate {
        // month validated at construction
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or_default()
    }

    /// Returns the last calendar day of the period.
    pub fn last_day(&self) -> NaiveDate {
        self.first_day() + chrono::Days::new(u64::from(self.days_in_month()) - 1)
    }

    /// Checks if a date falls within this period.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.first_day() && date <= self.last_day()
    }

    /// Iterates every calendar day of the period in order.
    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        let first = self.first_day();
        (0..self.days_in_month()).map(move |offset| first + chrono::Days::new(u64::from(offset)))
    }
}

impl std::fmt::Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.month, self.year)
    }
}

/// The derived lifecycle state of an attendance period.
///
/// A period is FINALIZED iff every one of its records is finalized;
/// finalization is all-or-nothing for the period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PeriodState {
    /// No attendance records exist for the period yet.
    Uninitialized,
    /// Records exist and are editable.
    Initialized,
    /// Every record is finalized; the period is locked and payroll-ready.
    Finalized,
}
