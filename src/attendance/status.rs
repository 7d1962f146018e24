//! Day-status classification from presence and arrival time.

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::models::AttendanceStatus;

use super::work_hours::STANDARD_SHIFT_MINUTES;

/// Attendance policy thresholds, loaded from configuration.
///
/// The classifier looks only at presence and arrival time; calendar
/// rules such as weekends belong to data seeding, not to policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendancePolicy {
    /// Length of the standard shift in minutes.
    pub standard_shift_minutes: i64,
    /// Check-ins at or after this hour count as late.
    pub late_threshold_hour: u32,
}

impl Default for AttendancePolicy {
    fn default() -> Self {
        Self {
            standard_shift_minutes: STANDARD_SHIFT_MINUTES,
            late_threshold_hour: 9,
        }
    }
}

/// Classifies a day's status from the check-in time.
///
/// No check-in means absent; a check-in at or past the late threshold is
/// late; anything earlier is present. A missing check-out never changes
/// the classification.
///
/// # Example
///
/// ```
/// use dayflow_engine::attendance::{AttendancePolicy, classify_status};
/// use dayflow_engine::models::AttendanceStatus;
/// use chrono::NaiveTime;
///
/// let policy = AttendancePolicy::default();
/// let nine_fifteen = NaiveTime::from_hms_opt(9, 15, 0);
/// assert_eq!(classify_status(nine_fifteen, &policy), AttendanceStatus::Late);
/// assert_eq!(classify_status(None, &policy), AttendanceStatus::Absent);
/// ```
pub fn classify_status(check_in: Option<NaiveTime>, policy: &AttendancePolicy) -> AttendanceStatus {
    match check_in {
        None => AttendanceStatus::Absent,
        Some(time) if time.hour() >= policy.late_threshold_hour => AttendanceStatus::Late,
        Some(_) => AttendanceStatus::Present,
    }
}
