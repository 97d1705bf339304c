use chrono::{DateTime, Utc};
use hourglass_rs::SafeTimeProvider;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::billing::format::format_overdue_details_with_precision;
use crate::billing::summary::PaymentSummary;
use crate::billing::{ceil_days_between, whole_days_between, OverdueResult, RentalBillingFacts};
use crate::config::BillingConfig;
use crate::errors::Result;
use crate::types::{OverdueStatus, RentalId, RentalTerms};

/// compute the overdue state of a rental from its completed billing cycles.
///
/// the cycle in progress never contributes to `balance_due` or to the
/// trigger. a `current_date` before `start_date` is clamped to zero elapsed
/// days, so a rental that has not started is never overdue.
pub fn calculate_overdue_balance(facts: &RentalBillingFacts) -> Result<OverdueResult> {
    facts.validate()?;
    let result = compute(facts)?;

    debug!(
        "overdue calculation: days_passed={} completed_cycles={} balance_due={} days_overdue={} trigger={}",
        result.days_passed,
        result.completed_cycles,
        result.balance_due,
        result.days_overdue,
        result.should_trigger_overdue
    );

    Ok(result)
}

/// arithmetic core, expects validated facts
fn compute(facts: &RentalBillingFacts) -> Result<OverdueResult> {
    let cycle_days = u64::from(facts.billing_cycle_days);

    let duration = ceil_days_between(facts.start_date, facts.end_date);

    if facts.current_date < facts.start_date {
        warn!(
            "current date {} precedes rental start {}, clamping elapsed days to zero",
            facts.current_date, facts.start_date
        );
    }
    let days_passed = whole_days_between(facts.start_date, facts.current_date);

    let completed_cycles = days_passed / cycle_days;
    let last_completed_cycle_end_day = completed_cycles * cycle_days;

    let completed_cycles_amount = facts.daily_rent.for_days(last_completed_cycle_end_day)?;
    let balance_due = completed_cycles_amount.saturating_sub(facts.total_paid);
    let days_overdue = days_passed.saturating_sub(last_completed_cycle_end_day);

    // days_overdue > 0 follows from completed_cycles > 0 except on a boundary day
    let should_trigger_overdue =
        completed_cycles > 0 && balance_due.is_positive() && days_overdue > 0;

    Ok(OverdueResult {
        completed_cycles,
        completed_cycles_amount,
        balance_due,
        days_overdue,
        should_trigger_overdue,
        duration,
        days_passed,
        total_paid: facts.total_paid,
    })
}

/// a rental flagged by an overdue sweep
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverdueNotice {
    pub rental_id: RentalId,
    pub as_of: DateTime<Utc>,
    pub status: OverdueStatus,
    pub result: OverdueResult,
}

/// calculator bound to a billing configuration
#[derive(Debug, Clone)]
pub struct BillingCycleCalculator {
    pub config: BillingConfig,
}

impl BillingCycleCalculator {
    pub fn new(config: BillingConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// calculate for the given terms at an explicit instant
    pub fn calculate_at(
        &self,
        terms: &RentalTerms,
        current_date: DateTime<Utc>,
    ) -> Result<OverdueResult> {
        calculate_overdue_balance(&terms.facts_at(current_date, self.config.billing_cycle_days))
    }

    /// calculate with a single reading of the time provider
    pub fn calculate_as_of(
        &self,
        terms: &RentalTerms,
        time_provider: &SafeTimeProvider,
    ) -> Result<OverdueResult> {
        self.calculate_at(terms, time_provider.now())
    }

    /// payment summary with a single reading of the time provider
    pub fn summarize(
        &self,
        terms: &RentalTerms,
        time_provider: &SafeTimeProvider,
    ) -> Result<PaymentSummary> {
        let facts = terms.facts_at(time_provider.now(), self.config.billing_cycle_days);
        PaymentSummary::from_facts(&facts)
    }

    /// evaluate many rentals against one snapshot, returning those that trigger overdue
    pub fn sweep(
        &self,
        rentals: &[RentalTerms],
        time_provider: &SafeTimeProvider,
    ) -> Result<Vec<OverdueNotice>> {
        let as_of = time_provider.now();
        let mut notices = Vec::new();

        for terms in rentals {
            let result = self.calculate_at(terms, as_of)?;
            if result.should_trigger_overdue {
                notices.push(OverdueNotice {
                    rental_id: terms.rental_id,
                    as_of,
                    status: result.status(),
                    result,
                });
            }
        }

        info!(
            "overdue sweep at {}: {} of {} rentals overdue",
            as_of,
            notices.len(),
            rentals.len()
        );

        Ok(notices)
    }

    /// diagnostic line rendered with the configured precision and currency
    pub fn describe(&self, result: &OverdueResult) -> String {
        format!(
            "{} | Currency: {}",
            format_overdue_details_with_precision(result, self.config.display_precision),
            self.config.currency
        )
    }
}
