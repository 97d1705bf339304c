use hourglass_rs::SafeTimeProvider;
use log::debug;

use crate::billing::{get_cycle_boundary, BillingCycleCalculator, OverdueResult};
use crate::config::BillingConfig;
use crate::errors::{BillingError, Result};
use crate::events::{Event, EventStore};
use crate::types::{OverdueStatus, RentalId, RentalTerms};

/// tracks one rental across observations and emits events on transitions.
///
/// the calculator stays stateless; only the last observed status, the
/// completed cycle count and whether an overdue is still open are remembered
/// here. an open overdue stays open across cycle boundaries until the
/// balance due reaches zero.
pub struct OverdueMonitor {
    pub rental_id: RentalId,
    pub calculator: BillingCycleCalculator,
    pub last_status: Option<OverdueStatus>,
    pub last_completed_cycles: u64,
    pub overdue_open: bool,
    pub events: EventStore,
}

impl OverdueMonitor {
    pub fn new(rental_id: RentalId, config: BillingConfig) -> Result<Self> {
        Ok(Self {
            rental_id,
            calculator: BillingCycleCalculator::new(config)?,
            last_status: None,
            last_completed_cycles: 0,
            overdue_open: false,
            events: EventStore::new(),
        })
    }

    /// recompute for the current time and record what changed
    pub fn observe(
        &mut self,
        terms: &RentalTerms,
        time_provider: &SafeTimeProvider,
    ) -> Result<OverdueResult> {
        if terms.rental_id != self.rental_id {
            return Err(BillingError::RentalMismatch {
                expected: self.rental_id,
                actual: terms.rental_id,
            });
        }

        let now = time_provider.now();
        let result = self.calculator.calculate_at(terms, now)?;
        let status = result.status();
        let cycle_days = self.calculator.config.billing_cycle_days;
        let cycle_amount = terms.daily_rent.for_days(u64::from(cycle_days))?;

        for index in self.last_completed_cycles..result.completed_cycles {
            let cycle = get_cycle_boundary(terms.start_date, index, cycle_days)?;
            self.events.emit(Event::CycleCompleted {
                rental_id: self.rental_id,
                cycle,
                cycle_amount,
                timestamp: now,
            });
        }

        if self.last_status != Some(status) {
            debug!(
                "rental {} status {:?} -> {:?}",
                self.rental_id, self.last_status, status
            );

            if status.is_overdue() && !self.overdue_open {
                self.overdue_open = true;
                self.events.emit(Event::OverdueTriggered {
                    rental_id: self.rental_id,
                    balance_due: result.balance_due,
                    days_overdue: result.days_overdue,
                    completed_cycles: result.completed_cycles,
                    timestamp: now,
                });
            } else if status == OverdueStatus::PaidUp && self.overdue_open {
                self.overdue_open = false;
                self.events.emit(Event::OverdueResolved {
                    rental_id: self.rental_id,
                    total_paid: result.total_paid,
                    timestamp: now,
                });
            }

            self.events.emit(Event::StatusChanged {
                rental_id: self.rental_id,
                old_status: self.last_status,
                new_status: status,
                timestamp: now,
            });
        }

        self.last_status = Some(status);
        self.last_completed_cycles = self.last_completed_cycles.max(result.completed_cycles);

        Ok(result)
    }

    /// true from the first overdue trigger until the balance is paid off
    pub fn is_overdue(&self) -> bool {
        self.overdue_open
    }
}
