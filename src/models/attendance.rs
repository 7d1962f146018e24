//! Attendance record model.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// Classification of a single day's attendance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttendanceStatus {
    /// Checked in on time.
    Present,
    /// Checked in at or after the late threshold.
    Late,
    /// No check-in recorded for the day.
    Absent,
    /// Present for only part of the day.
    HalfDay,
}

/// A single day's attendance for one employee.
///
/// Identity is `(employee_id, date)`. The `work_hours` and `extra_hours`
/// display strings are derived and rewritten whenever check-in or
/// check-out change; a present check-in with no check-out leaves
/// `work_hours` empty until check-out is recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    /// The employee the record belongs to.
    pub employee_id: String,
    /// The employee's display name.
    pub employee_name: String,
    /// The calendar day the record tracks.
    pub date: NaiveDate,
    /// Time the employee checked in, if any.
    pub check_in: Option<NaiveTime>,
    /// Time the employee checked out, if any.
    pub check_out: Option<NaiveTime>,
    /// Derived "{h}h {m}m" display string, present once checked out.
    pub work_hours: Option<String>,
    /// Derived "+{h}h {m}m" display string for time beyond the standard shift.
    pub extra_hours: Option<String>,
    /// Status classification for the day.
    pub status: AttendanceStatus,
}

impl AttendanceRecord {
    /// Creates an absent record with no times for the given employee and day.
    pub fn absent(employee_id: &str, employee_name: &str, date: NaiveDate) -> Self {
        Self {
            employee_id: employee_id.to_string(),
            employee_name: employee_name.to_string(),
            date,
            check_in: None,
            check_out: None,
            work_hours: None,
            extra_hours: None,
            status: AttendanceStatus::Absent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_record_has_no_derived_fields() {
        let date = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();
        let record = AttendanceRecord::absent("EMP003", "Mike Brown", date);

        assert_eq!(record.status, AttendanceStatus::Absent);
        assert!(record.check_in.is_none());
        assert!(record.work_hours.is_none());
        assert!(record.extra_hours.is_none());
    }

    #[test]
    fn test_status_serialization() {
        assert_eq!(
            serde_json::to_string(&AttendanceStatus::HalfDay).unwrap(),
            "\"half_day\""
        );
        assert_eq!(
            serde_json::to_string(&AttendanceStatus::Late).unwrap(),
            "\"late\""
        );
    }

    #[test]
    fn test_record_round_trip() {
        let record = AttendanceRecord {
            employee_id: "EMP002".to_string(),
            employee_name: "John Smith".to_string(),
            date: NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
            check_in: NaiveTime::from_hms_opt(9, 0, 0),
            check_out: NaiveTime::from_hms_opt(18, 5, 0),
            work_hours: Some("9h 5m".to_string()),
            extra_hours: Some("+1h 5m".to_string()),
            status: AttendanceStatus::Late,
        };

        let json = serde_json::to_string(&record).unwrap();
        let back: AttendanceRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, back);
    }
}
