use std::fmt;

use crate::billing::OverdueResult;

/// single pipe-delimited diagnostic line for logs and test output
pub fn format_overdue_details(result: &OverdueResult) -> String {
    format_overdue_details_with_precision(result, 2)
}

pub fn format_overdue_details_with_precision(result: &OverdueResult, precision: u32) -> String {
    let p = precision as usize;
    format!(
        "Completed cycles: {} | Days overdue: {} | Balance due: {:.p$} | Total paid: {:.p$} | Completed cycles amount: {:.p$} | Should trigger: {}",
        result.completed_cycles,
        result.days_overdue,
        result.balance_due.round_dp(precision),
        result.total_paid.round_dp(precision),
        result.completed_cycles_amount.round_dp(precision),
        result.should_trigger_overdue,
    )
}

impl fmt::Display for OverdueResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_overdue_details(self))
    }
}
