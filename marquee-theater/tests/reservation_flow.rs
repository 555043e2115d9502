use std::sync::Arc;

use chrono::NaiveDate;
use marquee_domain::Customer;
use marquee_theater::{FixedDateProvider, Theater, TheaterError};

fn theater() -> Theater {
    let provider = FixedDateProvider::new(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
    Theater::new(Arc::new(provider)).expect("schedule builds")
}

#[test]
fn test_daily_schedule_fees() {
    let theater = theater();

    // Per-ticket fees across the whole day, discounts applied:
    //   1: Turning Red   09:00  11.0 - 3.0   (first-show flat)
    //   2: Spider-Man    11:00  12.5 - 3.125 (midday beats special and the 2.0 flat)
    //   3: The Batman    12:50   9.0 - 2.25  (midday)
    //   4: Turning Red   14:30  11.0 - 2.75  (midday)
    //   5: Spider-Man    16:10  12.5 - 3.125 (hour 16 still midday)
    //   6: The Batman    17:50   9.0         (no rule)
    //   7: Turning Red   19:30  11.0 - 1.0   (seventh-show flat)
    //   8: Spider-Man    21:10  12.5 - 2.5   (special)
    //   9: The Batman    23:00   9.0         (no rule)
    let expected = [8.0, 9.375, 6.75, 8.25, 9.375, 9.0, 10.0, 10.0, 9.0];

    for (showing, expected_fee) in theater.schedule().iter().zip(expected) {
        assert_eq!(
            showing.fee(),
            expected_fee,
            "sequence {}",
            showing.sequence_of_day()
        );
    }
}

#[test]
fn test_reserve_and_price_flow() {
    let theater = theater();
    let customer = Customer::new("John Doe", "id-12345").unwrap();

    let reservation = theater.reserve(customer.clone(), 2, 4).unwrap();
    assert_eq!(reservation.customer, customer);
    assert!(reservation.showing.matches_sequence(2));
    assert_eq!(reservation.total_fee(), 37.5);
}

#[test]
fn test_reserve_rejects_bad_requests() {
    let theater = theater();
    let customer = Customer::new("John Doe", "id-12345").unwrap();

    assert!(matches!(
        theater.reserve(customer.clone(), 10, 1),
        Err(TheaterError::ShowingNotFound(10))
    ));
    assert!(matches!(
        theater.reserve(customer, 2, 0),
        Err(TheaterError::InvalidRequest(_))
    ));
}

#[test]
fn test_reservation_serializes() {
    let theater = theater();
    let customer = Customer::new("John Doe", "id-12345").unwrap();
    let reservation = theater.reserve(customer, 1, 2).unwrap();

    let json = serde_json::to_value(&reservation).unwrap();
    assert_eq!(json["ticket_count"], 2);
    assert_eq!(json["showing"]["sequence_of_day"], 1);
}
