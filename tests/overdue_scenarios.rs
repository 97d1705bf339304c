use chrono::{DateTime, TimeZone, Utc};
use rental_billing_rs::{
    calculate_overdue_balance, format_overdue_details, get_cycle_boundary, BillingError, Money,
    OverdueStatus, RentalBillingFacts,
};

fn day(y: i32, m: u32, d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
}

fn fortnightly(current: DateTime<Utc>, total_paid: i64) -> RentalBillingFacts {
    RentalBillingFacts::new(
        day(2024, 1, 1),
        current,
        day(2024, 6, 30),
        Money::from_major(10),
        Money::from_major(total_paid),
    )
}

#[test]
fn scenario_mid_first_cycle() {
    let r = calculate_overdue_balance(&fortnightly(day(2024, 1, 10), 0)).unwrap();
    assert_eq!(r.days_passed, 9);
    assert_eq!(r.completed_cycles, 0);
    assert_eq!(r.balance_due, Money::ZERO);
    assert!(!r.should_trigger_overdue);
}

#[test]
fn scenario_cycle_just_completed() {
    let r = calculate_overdue_balance(&fortnightly(day(2024, 1, 15), 0)).unwrap();
    assert_eq!(r.days_passed, 14);
    assert_eq!(r.completed_cycles, 1);
    assert_eq!(r.completed_cycles_amount, Money::from_major(140));
    assert_eq!(r.balance_due, Money::from_major(140));
    assert_eq!(r.days_overdue, 0);
    assert!(!r.should_trigger_overdue);
}

#[test]
fn scenario_overdue_five_days() {
    let r = calculate_overdue_balance(&fortnightly(day(2024, 1, 20), 0)).unwrap();
    assert_eq!(r.days_passed, 19);
    assert_eq!(r.completed_cycles, 1);
    assert_eq!(r.completed_cycles_amount, Money::from_major(140));
    assert_eq!(r.balance_due, Money::from_major(140));
    assert_eq!(r.days_overdue, 5);
    assert!(r.should_trigger_overdue);
    assert_eq!(
        format_overdue_details(&r),
        "Completed cycles: 1 | Days overdue: 5 | Balance due: 140.00 | Total paid: 0.00 | Completed cycles amount: 140.00 | Should trigger: true"
    );
}

#[test]
fn scenario_fully_paid() {
    let r = calculate_overdue_balance(&fortnightly(day(2024, 1, 20), 140)).unwrap();
    assert_eq!(r.balance_due, Money::ZERO);
    assert!(!r.should_trigger_overdue);
}

#[test]
fn scenario_overpaid() {
    let r = calculate_overdue_balance(&fortnightly(day(2024, 1, 20), 200)).unwrap();
    assert_eq!(r.balance_due, Money::ZERO);
    assert!(!r.should_trigger_overdue);
}

#[test]
fn scenario_before_start() {
    let r = calculate_overdue_balance(&fortnightly(day(2023, 12, 25), 0)).unwrap();
    assert_eq!(r.days_passed, 0);
    assert_eq!(r.completed_cycles, 0);
    assert_eq!(r.completed_cycles_amount, Money::ZERO);
    assert_eq!(r.balance_due, Money::ZERO);
    assert_eq!(r.days_overdue, 0);
    assert!(!r.should_trigger_overdue);
    assert_eq!(r.status(), OverdueStatus::NotStarted);
}

#[test]
fn boundary_same_instant_as_start() {
    let r = calculate_overdue_balance(&fortnightly(day(2024, 1, 1), 0)).unwrap();
    assert_eq!(r.days_passed, 0);
    assert_eq!(r.completed_cycles, 0);
    assert!(!r.should_trigger_overdue);
}

#[test]
fn boundary_one_day_past_cycle_for_any_length() {
    for cycle_days in [1_u32, 7, 14, 30] {
        let current = day(2024, 1, 1) + chrono::Duration::days(i64::from(cycle_days) + 1);
        let facts = fortnightly(current, 0).with_cycle_days(cycle_days);
        let r = calculate_overdue_balance(&facts).unwrap();

        assert_eq!(r.completed_cycles, if cycle_days == 1 { 2 } else { 1 });
        if cycle_days > 1 {
            assert_eq!(r.days_overdue, 1);
            assert_eq!(r.balance_due, Money::from_major(10 * i64::from(cycle_days)));
            assert!(r.should_trigger_overdue);
        }
    }
}

#[test]
fn cycle_boundary_scenario() {
    let b = get_cycle_boundary(day(2024, 1, 1), 1, 14).unwrap();
    assert_eq!(b.cycle_start, day(2024, 1, 15));
    assert_eq!(b.cycle_end, day(2024, 1, 29));
}

#[test]
fn zero_length_cycle_is_a_configuration_error() {
    let facts = fortnightly(day(2024, 1, 20), 0).with_cycle_days(0);
    assert!(matches!(
        calculate_overdue_balance(&facts),
        Err(BillingError::InvalidConfiguration { .. })
    ));
    assert!(get_cycle_boundary(day(2024, 1, 1), 0, 0).is_err());
}

#[test]
fn float_inputs_from_the_boundary() {
    let rent = Money::try_from_f64(10.0, "daily_rent").unwrap();
    let paid = Money::try_from_f64(139.99, "total_paid").unwrap();
    let facts = RentalBillingFacts::new(day(2024, 1, 1), day(2024, 1, 20), day(2024, 6, 30), rent, paid);

    let r = calculate_overdue_balance(&facts).unwrap();
    assert_eq!(r.balance_due, Money::from_minor(1, 2));
    assert!(r.should_trigger_overdue);

    assert!(Money::try_from_f64(f64::NAN, "total_paid").is_err());
}
