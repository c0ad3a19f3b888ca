use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

pub const DUE_FORMAT: &str = "%Y-%m-%d";

/// Reference date for the "not in the past" rule. UTC, matching the
/// calendar date the due picker produces.
pub fn today_utc() -> NaiveDate {
    Utc::now().date_naive()
}

pub fn parse_due(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DUE_FORMAT).ok()
}

pub fn format_due(due: NaiveDate) -> String {
    due.format(DUE_FORMAT).to_string()
}

/// The instant a due date is compared at: midnight UTC of that day.
pub fn due_instant(due: NaiveDate) -> DateTime<Utc> {
    due.and_time(NaiveTime::MIN).and_utc()
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, TimeZone, Utc};

    use super::{due_instant, format_due, parse_due};

    #[test]
    fn parses_fixed_width_iso_dates() {
        assert_eq!(
            parse_due("2026-08-07"),
            NaiveDate::from_ymd_opt(2026, 8, 7)
        );
        assert_eq!(parse_due(" 2026-08-07 "), NaiveDate::from_ymd_opt(2026, 8, 7));
        assert_eq!(parse_due(""), None);
        assert_eq!(parse_due("07/08/2026"), None);
        assert_eq!(parse_due("2026-13-01"), None);
    }

    #[test]
    fn due_round_trips_through_format() {
        let due = NaiveDate::from_ymd_opt(2026, 1, 9).unwrap();
        assert_eq!(parse_due(&format_due(due)), Some(due));
    }

    #[test]
    fn due_instant_is_midnight_utc() {
        let due = NaiveDate::from_ymd_opt(2026, 8, 7).unwrap();
        let expected = Utc.with_ymd_and_hms(2026, 8, 7, 0, 0, 0).unwrap();
        assert_eq!(due_instant(due), expected);
    }
}
