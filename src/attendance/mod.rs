//! Attendance aggregation for the Dayflow engine.
//!
//! This module turns raw check-in/check-out times into the derived
//! work-hours and extra-hours display strings, classifies a day's status
//! from presence and arrival time, and resolves the date windows for the
//! day and week views.

mod status;
mod week;
mod work_hours;

pub use status::{AttendancePolicy, classify_status};
pub use week::{monday_of, week_dates};
pub use work_hours::{
    STANDARD_SHIFT_MINUTES, extra_hours, format_duration, parse_hhmm, work_minutes,
};
