//! Date-window resolution for the day and week views.

use chrono::{Datelike, Days, NaiveDate, Weekday};

/// Returns the Monday of the ISO week containing the given date.
///
/// ```
/// use dayflow_engine::attendance::monday_of;
/// use chrono::NaiveDate;
///
/// // 2026-01-15 is a Thursday
/// let thursday = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();
/// assert_eq!(monday_of(thursday), NaiveDate::from_ymd_opt(2026, 1, 12).unwrap());
/// ```
pub fn monday_of(date: NaiveDate) -> NaiveDate {
    let offset = date.weekday().num_days_from_monday();
    date - Days::new(u64::from(offset))
}

/// Returns the 7 dates of the week containing the anchor, Monday first.
pub fn week_dates(anchor: NaiveDate) -> [NaiveDate; 7] {
    let monday = monday_of(anchor);
    std::array::from_fn(|i| monday + Days::new(i as u64))
}
