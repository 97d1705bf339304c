use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::billing::RentalBillingFacts;
use crate::decimal::Money;

/// unique identifier for a rental
pub type RentalId = Uuid;

/// rental record as supplied by the rental store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RentalTerms {
    pub rental_id: RentalId,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub daily_rent: Money,
    pub total_paid: Money,
}

impl RentalTerms {
    pub fn new(
        start_date: DateTime<Utc>,
        end_date: DateTime<Utc>,
        daily_rent: Money,
        total_paid: Money,
    ) -> Self {
        Self {
            rental_id: Uuid::new_v4(),
            start_date,
            end_date,
            daily_rent,
            total_paid,
        }
    }

    /// snapshot these terms as of `current_date`
    pub fn facts_at(&self, current_date: DateTime<Utc>, billing_cycle_days: u32) -> RentalBillingFacts {
        RentalBillingFacts {
            start_date: self.start_date,
            current_date,
            end_date: self.end_date,
            daily_rent: self.daily_rent,
            total_paid: self.total_paid,
            billing_cycle_days,
        }
    }
}

/// dashboard badge derived from an overdue result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OverdueStatus {
    /// not a single whole day has elapsed since start
    NotStarted,
    /// first cycle still in progress, nothing can be owed yet
    InFirstCycle,
    /// every completed cycle is paid for
    PaidUp,
    /// a cycle completed today and is still unpaid
    CycleJustCompleted,
    /// unpaid balance on a completed cycle, days running
    Overdue,
}

impl OverdueStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OverdueStatus::NotStarted => "not_started",
            OverdueStatus::InFirstCycle => "in_first_cycle",
            OverdueStatus::PaidUp => "paid_up",
            OverdueStatus::CycleJustCompleted => "cycle_just_completed",
            OverdueStatus::Overdue => "overdue",
        }
    }

    pub fn is_overdue(&self) -> bool {
        matches!(self, OverdueStatus::Overdue)
    }
}
