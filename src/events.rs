use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::billing::CycleBoundary;
use crate::decimal::Money;
use crate::types::{OverdueStatus, RentalId};

/// events emitted while observing a rental's billing state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Event {
    CycleCompleted {
        rental_id: RentalId,
        cycle: CycleBoundary,
        cycle_amount: Money,
        timestamp: DateTime<Utc>,
    },
    OverdueTriggered {
        rental_id: RentalId,
        balance_due: Money,
        days_overdue: u64,
        completed_cycles: u64,
        timestamp: DateTime<Utc>,
    },
    OverdueResolved {
        rental_id: RentalId,
        total_paid: Money,
        timestamp: DateTime<Utc>,
    },
    StatusChanged {
        rental_id: RentalId,
        old_status: Option<OverdueStatus>,
        new_status: OverdueStatus,
        timestamp: DateTime<Utc>,
    },
}

/// event store for collecting events during observations
#[derive(Debug, Default)]
pub struct EventStore {
    events: Vec<Event>,
}

impl EventStore {
    pub fn new() -> Self {
        Self {
            events: Vec::new(),
        }
    }

    pub fn emit(&mut self, event: Event) {
        self.events.push(event);
    }

    pub fn take_events(&mut self) -> Vec<Event> {
        std::mem::take(&mut self.events)
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}
