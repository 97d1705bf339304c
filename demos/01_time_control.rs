/// time control - watch a rental move through its billing cycles
use chrono::{Duration, TimeZone, Utc};
use rental_billing_rs::{
    BillingConfig, BillingCycleCalculator, Money, OverdueMonitor, RentalTerms, SafeTimeProvider,
    TimeSource,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== time control example ===\n");

    let time = SafeTimeProvider::new(TimeSource::Test(
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
    ));
    let controller = time.test_control().unwrap();

    let mut rental = RentalTerms::new(
        time.now(),
        time.now() + Duration::days(90),
        Money::from_major(25),
        Money::ZERO,
    );
    let mut monitor = OverdueMonitor::new(rental.rental_id, BillingConfig::fortnightly())?;
    let calculator = BillingCycleCalculator::new(BillingConfig::fortnightly())?;

    for step in 0..5 {
        monitor.observe(&rental, &time)?;
        let summary = calculator.summarize(&rental, &time)?;

        println!(
            "{}: status {:?}, balance due ${}, next due {}",
            time.now().format("%Y-%m-%d"),
            summary.status,
            summary.balance_due,
            summary.next_due_date.format("%Y-%m-%d")
        );
        for event in monitor.events.take_events() {
            println!("  event: {:?}", event);
        }

        if step == 2 {
            // tenant pays for the first completed cycle
            rental.total_paid += summary.balance_due;
            println!("  payment received: ${}", summary.balance_due);
        }

        controller.advance(Duration::days(8));
    }

    Ok(())
}
