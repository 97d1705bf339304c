pub mod cycle;
pub mod format;
pub mod overdue;
pub mod summary;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::config::{validate_cycle_days, DEFAULT_BILLING_CYCLE_DAYS};
use crate::decimal::Money;
use crate::errors::{BillingError, Result};
use crate::types::OverdueStatus;

pub use cycle::{current_cycle, cycle_index_at, cycle_schedule, get_cycle_boundary};
pub use format::{format_overdue_details, format_overdue_details_with_precision};
pub use overdue::{calculate_overdue_balance, BillingCycleCalculator, OverdueNotice};
pub use summary::PaymentSummary;

/// input snapshot for one overdue calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RentalBillingFacts {
    /// rental's first day
    pub start_date: DateTime<Utc>,
    /// as-of instant, supplied by the caller and never read from the clock here
    pub current_date: DateTime<Utc>,
    /// scheduled last day, only feeds `duration`
    pub end_date: DateTime<Utc>,
    pub daily_rent: Money,
    pub total_paid: Money,
    pub billing_cycle_days: u32,
}

impl RentalBillingFacts {
    /// facts with the default fortnightly cycle
    pub fn new(
        start_date: DateTime<Utc>,
        current_date: DateTime<Utc>,
        end_date: DateTime<Utc>,
        daily_rent: Money,
        total_paid: Money,
    ) -> Self {
        Self {
            start_date,
            current_date,
            end_date,
            daily_rent,
            total_paid,
            billing_cycle_days: DEFAULT_BILLING_CYCLE_DAYS,
        }
    }

    pub fn with_cycle_days(mut self, billing_cycle_days: u32) -> Self {
        self.billing_cycle_days = billing_cycle_days;
        self
    }

    /// same facts re-evaluated at another instant
    pub fn at(&self, current_date: DateTime<Utc>) -> Self {
        Self {
            current_date,
            ..self.clone()
        }
    }

    pub fn validate(&self) -> Result<()> {
        validate_cycle_days(self.billing_cycle_days)?;

        if self.daily_rent.is_negative() {
            return Err(BillingError::NegativeAmount {
                field: "daily_rent".to_string(),
                amount: self.daily_rent,
            });
        }

        if self.total_paid.is_negative() {
            return Err(BillingError::NegativeAmount {
                field: "total_paid".to_string(),
                amount: self.total_paid,
            });
        }

        Ok(())
    }
}

/// overdue state computed from completed cycles only
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverdueResult {
    pub completed_cycles: u64,
    pub completed_cycles_amount: Money,
    pub balance_due: Money,
    pub days_overdue: u64,
    pub should_trigger_overdue: bool,
    /// scheduled rental length in whole days, rounded up; diagnostic only
    pub duration: i64,
    pub days_passed: u64,
    pub total_paid: Money,
}

impl OverdueResult {
    pub fn status(&self) -> OverdueStatus {
        if self.should_trigger_overdue {
            OverdueStatus::Overdue
        } else if self.days_passed == 0 {
            OverdueStatus::NotStarted
        } else if self.completed_cycles == 0 {
            OverdueStatus::InFirstCycle
        } else if self.balance_due.is_positive() {
            OverdueStatus::CycleJustCompleted
        } else {
            OverdueStatus::PaidUp
        }
    }
}

/// window of one billing cycle, `[cycle_start, cycle_end)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CycleBoundary {
    pub cycle_index: u64,
    pub cycle_start: DateTime<Utc>,
    pub cycle_end: DateTime<Utc>,
}

impl CycleBoundary {
    pub fn contains(&self, at: DateTime<Utc>) -> bool {
        self.cycle_start <= at && at < self.cycle_end
    }

    pub fn length_days(&self) -> i64 {
        (self.cycle_end - self.cycle_start).num_days()
    }
}

/// whole days from `start` to `end`, floored and clamped at zero
pub(crate) fn whole_days_between(start: DateTime<Utc>, end: DateTime<Utc>) -> u64 {
    let days = (end - start).num_days();
    u64::try_from(days).unwrap_or(0)
}

/// days from `start` to `end` rounded up, negative when `end` precedes `start`
pub(crate) fn ceil_days_between(start: DateTime<Utc>, end: DateTime<Utc>) -> i64 {
    let span = end - start;
    let whole = span.num_days();
    if span > Duration::days(whole) {
        whole + 1
    } else {
        whole
    }
}
