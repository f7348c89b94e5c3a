use crate::core::Vendor;
use chrono::{NaiveDateTime, NaiveTime};

/// Parse an hour-with-meridiem string such as "8AM" or "12PM".
///
/// The dataset posts hours without minutes, so the value is the hour on
/// the dot. Anything outside 1-12 plus an AM/PM marker is rejected.
pub fn parse_meridiem(raw: &str) -> Option<NaiveTime> {
    let upper = raw.trim().to_ascii_uppercase();
    let is_pm = upper.ends_with("PM");
    let hour_str = upper
        .strip_suffix("AM")
        .or_else(|| upper.strip_suffix("PM"))?;

    let hour: u32 = hour_str.trim().parse().ok()?;
    if !(1..=12).contains(&hour) {
        return None;
    }

    let hour24 = match (hour, is_pm) {
        (12, false) => 0,
        (12, true) => 12,
        (h, false) => h,
        (h, true) => h + 12,
    };

    NaiveTime::from_hms_opt(hour24, 0, 0)
}

/// True iff `time` lies strictly between the vendor's posted hours.
/// A vendor whose hours do not parse is closed, never an error.
fn open_at(vendor: &Vendor, time: NaiveTime) -> bool {
    let (start, end) = match (
        parse_meridiem(&vendor.starttime),
        parse_meridiem(&vendor.endtime),
    ) {
        (Some(start), Some(end)) => (start, end),
        _ => {
            tracing::debug!(
                "Dropping '{}': unparseable hours '{}'..'{}'",
                vendor.applicant,
                vendor.starttime,
                vendor.endtime
            );
            return false;
        }
    };

    start < time && time < end
}

/// Filter to vendors operating at `now`, sorted ascending by applicant.
///
/// Weekday match first, then the open-now window, then a stable sort so
/// equally-named vendors keep their dataset order.
pub fn process(records: Vec<Vendor>, now: NaiveDateTime) -> Vec<Vendor> {
    let weekday = now.format("%A").to_string();
    let time = now.time();

    let mut open: Vec<Vendor> = records
        .into_iter()
        .filter(|v| v.dayofweekstr == weekday)
        .filter(|v| open_at(v, time))
        .collect();

    open.sort_by(|a, b| a.applicant.cmp(&b.applicant));
    open
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn vendor(applicant: &str, day: &str, start: &str, end: &str) -> Vendor {
        Vendor {
            applicant: applicant.to_string(),
            location: format!("{} St", applicant),
            dayofweekstr: day.to_string(),
            starttime: start.to_string(),
            endtime: end.to_string(),
        }
    }

    // 2024-07-01 is a Monday.
    fn monday_at(hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 7, 1)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_parse_meridiem_morning_and_afternoon() {
        assert_eq!(
            parse_meridiem("8AM"),
            NaiveTime::from_hms_opt(8, 0, 0)
        );
        assert_eq!(
            parse_meridiem("5PM"),
            NaiveTime::from_hms_opt(17, 0, 0)
        );
    }

    #[test]
    fn test_parse_meridiem_noon_and_midnight() {
        assert_eq!(parse_meridiem("12PM"), NaiveTime::from_hms_opt(12, 0, 0));
        assert_eq!(parse_meridiem("12AM"), NaiveTime::from_hms_opt(0, 0, 0));
    }

    #[test]
    fn test_parse_meridiem_tolerates_case_and_whitespace() {
        assert_eq!(parse_meridiem(" 8am "), NaiveTime::from_hms_opt(8, 0, 0));
    }

    #[test]
    fn test_parse_meridiem_rejects_garbage() {
        assert_eq!(parse_meridiem("13AM"), None);
        assert_eq!(parse_meridiem("0AM"), None);
        assert_eq!(parse_meridiem("8:30AM"), None);
        assert_eq!(parse_meridiem("AM"), None);
        assert_eq!(parse_meridiem(""), None);
        assert_eq!(parse_meridiem("8"), None);
    }

    #[test]
    fn test_process_keeps_only_matching_weekday() {
        let records = vec![
            vendor("A", "Monday", "8AM", "8PM"),
            vendor("B", "Tuesday", "8AM", "8PM"),
            vendor("C", "monday", "8AM", "8PM"),
        ];

        let open = process(records, monday_at(12));
        let names: Vec<&str> = open.iter().map(|v| v.applicant.as_str()).collect();
        assert_eq!(names, ["A"]);
    }

    #[test]
    fn test_process_window_bounds_are_strict() {
        let records = vec![
            vendor("Opens now", "Monday", "12PM", "8PM"),
            vendor("Closes now", "Monday", "8AM", "12PM"),
            vendor("Open", "Monday", "11AM", "1PM"),
        ];

        let open = process(records, monday_at(12));
        let names: Vec<&str> = open.iter().map(|v| v.applicant.as_str()).collect();
        assert_eq!(names, ["Open"]);
    }

    #[test]
    fn test_process_excludes_unparseable_hours() {
        let records = vec![
            vendor("Bad start", "Monday", "13AM", "8PM"),
            vendor("Bad end", "Monday", "8AM", "25PM"),
            vendor("Good", "Monday", "8AM", "8PM"),
            vendor("Blank", "Monday", "", ""),
        ];

        let open = process(records, monday_at(12));
        let names: Vec<&str> = open.iter().map(|v| v.applicant.as_str()).collect();
        assert_eq!(names, ["Good"]);
    }

    #[test]
    fn test_process_sorts_by_applicant() {
        let records = vec![
            vendor("Zesty", "Monday", "8AM", "8PM"),
            vendor("Arepa", "Monday", "8AM", "8PM"),
            vendor("Momo", "Monday", "8AM", "8PM"),
        ];

        let open = process(records, monday_at(12));
        let names: Vec<&str> = open.iter().map(|v| v.applicant.as_str()).collect();
        assert_eq!(names, ["Arepa", "Momo", "Zesty"]);
    }

    #[test]
    fn test_process_sort_is_stable_for_equal_names() {
        let mut first = vendor("Same", "Monday", "8AM", "8PM");
        first.location = "first".to_string();
        let mut second = vendor("Same", "Monday", "9AM", "9PM");
        second.location = "second".to_string();

        let open = process(vec![first, second], monday_at(12));
        assert_eq!(open.len(), 2);
        assert_eq!(open[0].location, "first");
        assert_eq!(open[1].location, "second");
    }

    #[test]
    fn test_process_empty_input() {
        assert!(process(Vec::new(), monday_at(12)).is_empty());
    }
}
