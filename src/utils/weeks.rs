use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

/// Average human lifespan in weeks. Display only, never compared against.
pub const AVERAGE_LIFETIME_WEEKS: i64 = 4000;

const MILLIS_PER_WEEK: i64 = 1000 * 60 * 60 * 24 * 7;

/// Whole weeks elapsed between `birth` at UTC midnight and `now`.
///
/// Floor of the elapsed milliseconds divided by the milliseconds in
/// seven days. This is a pure elapsed-duration count, not an ISO
/// calendar week index. A birth date in the future yields a negative
/// count; callers display it as-is.
pub fn weeks_since(birth: NaiveDate, now: DateTime<Utc>) -> i64 {
    let birth_midnight = birth.and_time(NaiveTime::MIN).and_utc();
    let elapsed_ms = now.signed_duration_since(birth_midnight).num_milliseconds();
    elapsed_ms.div_euclid(MILLIS_PER_WEEK)
}
