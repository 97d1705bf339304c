use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::billing::cycle::get_cycle_boundary;
use crate::billing::overdue::calculate_overdue_balance;
use crate::billing::RentalBillingFacts;
use crate::decimal::Money;
use crate::errors::Result;
use crate::types::OverdueStatus;

/// payment summary for a rental as of the facts' current date
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentSummary {
    pub as_of: DateTime<Utc>,
    pub status: OverdueStatus,
    pub days_passed: u64,
    pub completed_cycles: u64,
    /// rent for every elapsed day, in-progress cycle included; informational
    pub accrued_to_date: Money,
    pub completed_cycles_amount: Money,
    pub balance_due: Money,
    pub total_paid: Money,
    /// payments beyond what completed cycles require
    pub credit: Money,
    /// rent for one full cycle
    pub cycle_amount: Money,
    /// full cycles the payments received would pay for
    pub cycles_covered: u64,
    pub contract_value: Money,
    pub remaining_contract_value: Money,
    /// end of the cycle in progress, when its rent falls due
    pub next_due_date: DateTime<Utc>,
}

impl PaymentSummary {
    pub fn from_facts(facts: &RentalBillingFacts) -> Result<Self> {
        let result = calculate_overdue_balance(facts)?;

        let cycle_amount = facts.daily_rent.for_days(u64::from(facts.billing_cycle_days))?;
        let contract_days = u64::try_from(result.duration).unwrap_or(0);
        let contract_value = facts.daily_rent.for_days(contract_days)?;
        let in_progress = get_cycle_boundary(
            facts.start_date,
            result.completed_cycles,
            facts.billing_cycle_days,
        )?;

        Ok(Self {
            as_of: facts.current_date,
            status: result.status(),
            days_passed: result.days_passed,
            completed_cycles: result.completed_cycles,
            accrued_to_date: facts.daily_rent.for_days(result.days_passed)?,
            completed_cycles_amount: result.completed_cycles_amount,
            balance_due: result.balance_due,
            total_paid: facts.total_paid,
            credit: facts.total_paid.saturating_sub(result.completed_cycles_amount),
            cycle_amount,
            cycles_covered: facts.total_paid.whole_multiples_of(cycle_amount),
            contract_value,
            remaining_contract_value: contract_value.saturating_sub(facts.total_paid),
            next_due_date: in_progress.cycle_end,
        })
    }
}
