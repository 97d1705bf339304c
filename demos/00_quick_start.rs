/// quick start - compute the overdue state of one rental
use chrono::{TimeZone, Utc};
use rental_billing_rs::{calculate_overdue_balance, Money, RentalBillingFacts};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // $10 a day since jan 1, nothing paid, checked on jan 20
    let facts = RentalBillingFacts::new(
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        Utc.with_ymd_and_hms(2024, 1, 20, 0, 0, 0).unwrap(),
        Utc.with_ymd_and_hms(2024, 3, 31, 0, 0, 0).unwrap(),
        Money::from_major(10),
        Money::ZERO,
    );

    let result = calculate_overdue_balance(&facts)?;

    println!("{}", result);
    println!("status: {}", result.status().as_str());
    println!("{}", serde_json::to_string_pretty(&result)?);

    Ok(())
}
