//! Work-hours and extra-hours derivation.

use chrono::{NaiveTime, Timelike};

use crate::error::{DayflowError, DayflowResult};

/// The standard shift length in minutes (8 hours).
///
/// Time worked beyond this threshold counts as extra hours.
pub const STANDARD_SHIFT_MINUTES: i64 = 480;

/// Parses a 24-hour "HH:MM" string into a time of day.
///
/// # Example
///
/// ```
/// use dayflow_engine::attendance::parse_hhmm;
/// use chrono::NaiveTime;
///
/// assert_eq!(
///     parse_hhmm("09:05").unwrap(),
///     NaiveTime::from_hms_opt(9, 5, 0).unwrap()
/// );
/// assert!(parse_hhmm("25:99").is_err());
/// assert!(parse_hhmm("9am").is_err());
/// ```
pub fn parse_hhmm(value: &str) -> DayflowResult<NaiveTime> {
    NaiveTime::parse_from_str(value, "%H:%M").map_err(|_| DayflowError::InvalidTime {
        value: value.to_string(),
    })
}

/// Returns the minutes elapsed between check-in and check-out.
///
/// Negative when check-out precedes check-in; callers reject that case
/// before deriving display strings.
pub fn work_minutes(check_in: NaiveTime, check_out: NaiveTime) -> i64 {
    let check_in_minutes = i64::from(check_in.hour()) * 60 + i64::from(check_in.minute());
    let check_out_minutes = i64::from(check_out.hour()) * 60 + i64::from(check_out.minute());
    check_out_minutes - check_in_minutes
}

/// Formats a minute count as "{h}h {m}m".
///
/// ```
/// use dayflow_engine::attendance::format_duration;
///
/// assert_eq!(format_duration(545), "9h 5m");
/// assert_eq!(format_duration(30), "0h 30m");
/// ```
pub fn format_duration(minutes: i64) -> String {
    format!("{}h {}m", minutes / 60, minutes % 60)
}

/// Returns the "+{h}h {m}m" extra-hours string for a worked-minute count.
///
/// Extra hours exist only beyond the standard shift; at or under the
/// threshold there is nothing to display.
///
/// ```
/// use dayflow_engine::attendance::{STANDARD_SHIFT_MINUTES, extra_hours};
///
/// assert_eq!(extra_hours(545, STANDARD_SHIFT_MINUTES), Some("+1h 5m".to_string()));
/// assert_eq!(extra_hours(510, STANDARD_SHIFT_MINUTES), Some("+0h 30m".to_string()));
/// assert_eq!(extra_hours(480, STANDARD_SHIFT_MINUTES), None);
/// ```
pub fn extra_hours(worked_minutes: i64, standard_minutes: i64) -> Option<String> {
    let extra = worked_minutes - standard_minutes;
    if extra <= 0 {
        return None;
    }
    Some(format!("+{}", format_duration(extra)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn time(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    // WH-001: reference pair from the attendance view
    #[test]
    fn test_wh_001_nine_to_six_oh_five() {
        let minutes = work_minutes(time(9, 0), time(18, 5));
        assert_eq!(minutes, 545);
        assert_eq!(format_duration(minutes), "9h 5m");
        assert_eq!(
            extra_hours(minutes, STANDARD_SHIFT_MINUTES),
            Some("+1h 5m".to_string())
        );
    }

    // WH-002: half-hour over threshold still displays
    #[test]
    fn test_wh_002_nine_thirty_to_six() {
        let minutes = work_minutes(time(9, 30), time(18, 0));
        assert_eq!(minutes, 510);
        assert_eq!(format_duration(minutes), "8h 30m");
        assert_eq!(
            extra_hours(minutes, STANDARD_SHIFT_MINUTES),
            Some("+0h 30m".to_string())
        );
    }

    // WH-003: exactly the standard shift yields no extra hours
    #[test]
    fn test_wh_003_exact_shift_boundary() {
        let minutes = work_minutes(time(9, 0), time(17, 0));
        assert_eq!(minutes, 480);
        assert_eq!(extra_hours(minutes, STANDARD_SHIFT_MINUTES), None);
    }

    // WH-004: under the shift yields no extra hours
    #[test]
    fn test_wh_004_short_day() {
        let minutes = work_minutes(time(10, 0), time(15, 0));
        assert_eq!(minutes, 300);
        assert_eq!(format_duration(minutes), "5h 0m");
        assert_eq!(extra_hours(minutes, STANDARD_SHIFT_MINUTES), None);
    }

    #[test]
    fn test_check_out_before_check_in_is_negative() {
        assert_eq!(work_minutes(time(18, 0), time(9, 0)), -540);
    }

    #[test]
    fn test_parse_hhmm_valid() {
        assert_eq!(parse_hhmm("00:00").unwrap(), time(0, 0));
        assert_eq!(parse_hhmm("23:59").unwrap(), time(23, 59));
    }

    #[test]
    fn test_parse_hhmm_rejects_garbage() {
        for value in ["", "24:00", "9", "09:60", "nine"] {
            let err = parse_hhmm(value).unwrap_err();
            assert!(err.to_string().contains("Invalid time"), "{value}");
        }
    }

    proptest! {
        // Work hours round-trip to the minute difference for any ordered pair.
        #[test]
        fn prop_work_minutes_round_trip(
            in_h in 0u32..24, in_m in 0u32..60,
            out_h in 0u32..24, out_m in 0u32..60,
        ) {
            let check_in = time(in_h, in_m);
            let check_out = time(out_h, out_m);
            prop_assume!(check_out > check_in);

            let minutes = work_minutes(check_in, check_out);
            let expected = i64::from(out_h * 60 + out_m) - i64::from(in_h * 60 + in_m);
            prop_assert_eq!(minutes, expected);

            let display = format_duration(minutes);
            let (h, rest) = display.split_once("h ").unwrap();
            let m = rest.strip_suffix('m').unwrap();
            let reparsed: i64 = h.parse::<i64>().unwrap() * 60 + m.trim().parse::<i64>().unwrap();
            prop_assert_eq!(reparsed, minutes);
        }

        // Extra hours are present exactly when the shift exceeds the standard.
        #[test]
        fn prop_extra_hours_boundary(worked in 0i64..1440) {
            let extra = extra_hours(worked, STANDARD_SHIFT_MINUTES);
            prop_assert_eq!(extra.is_some(), worked > STANDARD_SHIFT_MINUTES);
        }
    }
}
