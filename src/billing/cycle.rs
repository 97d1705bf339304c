use chrono::{DateTime, Duration, Utc};

use crate::billing::{ceil_days_between, whole_days_between, CycleBoundary};
use crate::config::validate_cycle_days;
use crate::errors::{BillingError, Result};

/// window of the `cycle_index`-th billing cycle (0-based) counted from `start_date`
pub fn get_cycle_boundary(
    start_date: DateTime<Utc>,
    cycle_index: u64,
    billing_cycle_days: u32,
) -> Result<CycleBoundary> {
    validate_cycle_days(billing_cycle_days)?;

    let cycle_start = offset_by_cycles(start_date, cycle_index, billing_cycle_days)?;
    let next_index = cycle_index.checked_add(1).ok_or_else(|| BillingError::InvalidDate {
        message: format!("cycle index {} is out of range", cycle_index),
    })?;
    let cycle_end = offset_by_cycles(start_date, next_index, billing_cycle_days)?;

    Ok(CycleBoundary {
        cycle_index,
        cycle_start,
        cycle_end,
    })
}

/// index of the cycle containing `at`; instants before the start map to cycle 0
pub fn cycle_index_at(
    start_date: DateTime<Utc>,
    at: DateTime<Utc>,
    billing_cycle_days: u32,
) -> Result<u64> {
    validate_cycle_days(billing_cycle_days)?;
    Ok(whole_days_between(start_date, at) / u64::from(billing_cycle_days))
}

/// the cycle in progress at `at`
pub fn current_cycle(
    start_date: DateTime<Utc>,
    at: DateTime<Utc>,
    billing_cycle_days: u32,
) -> Result<CycleBoundary> {
    let index = cycle_index_at(start_date, at, billing_cycle_days)?;
    get_cycle_boundary(start_date, index, billing_cycle_days)
}

/// every cycle window overlapping the scheduled rental period.
///
/// the last window may extend past `end_date`; an empty or inverted period
/// yields no cycles.
pub fn cycle_schedule(
    start_date: DateTime<Utc>,
    end_date: DateTime<Utc>,
    billing_cycle_days: u32,
) -> Result<Vec<CycleBoundary>> {
    validate_cycle_days(billing_cycle_days)?;

    let duration = ceil_days_between(start_date, end_date);
    if duration <= 0 {
        return Ok(Vec::new());
    }

    let cycle_days = u64::from(billing_cycle_days);
    let count = (duration as u64).div_ceil(cycle_days);

    (0..count)
        .map(|index| get_cycle_boundary(start_date, index, billing_cycle_days))
        .collect()
}

fn offset_by_cycles(
    start_date: DateTime<Utc>,
    cycles: u64,
    billing_cycle_days: u32,
) -> Result<DateTime<Utc>> {
    let out_of_range = || BillingError::InvalidDate {
        message: format!(
            "{} cycles of {} days from {} is out of range",
            cycles, billing_cycle_days, start_date
        ),
    };

    let days = cycles
        .checked_mul(u64::from(billing_cycle_days))
        .and_then(|d| i64::try_from(d).ok())
        .ok_or_else(out_of_range)?;
    let offset = Duration::try_days(days).ok_or_else(out_of_range)?;

    start_date.checked_add_signed(offset).ok_or_else(out_of_range)
}
