#![allow(clippy::unwrap_used)]

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};
use lifeweeks_bot::utils::weeks::{weeks_since, AVERAGE_LIFETIME_WEEKS};

fn midnight_utc(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}

#[test]
fn test_average_lifetime_constant() {
    assert_eq!(AVERAGE_LIFETIME_WEEKS, 4000);
}

#[test]
fn test_exactly_4000_weeks_after_birth() {
    let birth = NaiveDate::from_ymd_opt(1990, 5, 15).unwrap();
    let now = midnight_utc(birth) + Duration::days(4000 * 7);

    assert_eq!(weeks_since(birth, now), 4000);
}

#[test]
fn test_same_day_is_week_zero() {
    let birth = NaiveDate::from_ymd_opt(1990, 5, 15).unwrap();
    assert_eq!(weeks_since(birth, midnight_utc(birth)), 0);
    assert_eq!(
        weeks_since(birth, midnight_utc(birth) + Duration::hours(23)),
        0
    );
}

#[test]
fn test_week_boundary_is_elapsed_duration_not_calendar() {
    let birth = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(); // a Monday
    let birth_midnight = midnight_utc(birth);

    // 6 days 23:59:59.999 in is still week 0
    let almost_a_week = birth_midnight + Duration::days(7) - Duration::milliseconds(1);
    assert_eq!(weeks_since(birth, almost_a_week), 0);

    // exactly 7 days in is week 1
    assert_eq!(weeks_since(birth, birth_midnight + Duration::days(7)), 1);
}

#[test]
fn test_monotonically_non_decreasing() {
    let birth = NaiveDate::from_ymd_opt(1970, 6, 1).unwrap();
    let mut now = midnight_utc(birth);
    let mut previous = weeks_since(birth, now);

    for _ in 0..200 {
        now += Duration::hours(37);
        let current = weeks_since(birth, now);
        assert!(current >= previous, "week count decreased as now advanced");
        previous = current;
    }
}

#[test]
fn test_future_birth_date_yields_negative_count() {
    let birth = NaiveDate::from_ymd_opt(2100, 1, 1).unwrap();
    let now = midnight_utc(NaiveDate::from_ymd_opt(2026, 1, 1).unwrap());

    let weeks = weeks_since(birth, now);
    assert!(weeks < 0);

    // Flooring, not truncation: moments before the birth instant are -1
    let just_before = midnight_utc(birth) - Duration::seconds(1);
    assert_eq!(weeks_since(birth, just_before), -1);
}
