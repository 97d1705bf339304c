pub mod billing;
pub mod config;
pub mod decimal;
pub mod errors;
pub mod events;
pub mod monitor;
pub mod types;

// re-export key types
pub use billing::{
    calculate_overdue_balance, current_cycle, cycle_index_at, cycle_schedule,
    format_overdue_details, format_overdue_details_with_precision, get_cycle_boundary,
    BillingCycleCalculator, CycleBoundary, OverdueNotice, OverdueResult, PaymentSummary,
    RentalBillingFacts,
};
pub use config::{BillingConfig, DEFAULT_BILLING_CYCLE_DAYS};
pub use decimal::Money;
pub use errors::{BillingError, Result};
pub use events::{Event, EventStore};
pub use monitor::OverdueMonitor;
pub use types::{OverdueStatus, RentalId, RentalTerms};

// re-export external dependencies that users will need
pub use chrono;
pub use hourglass_rs::{SafeTimeProvider, TimeSource};
pub use rust_decimal::Decimal;
pub use uuid::Uuid;
