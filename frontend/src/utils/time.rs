use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;

use crate::config;

fn agency_time_zone() -> Tz {
    config::current_time_zone()
}

pub fn now_in_agency_tz() -> DateTime<Tz> {
    Utc::now().with_timezone(&agency_time_zone())
}

pub fn today_in_agency_tz() -> NaiveDate {
    now_in_agency_tz().date_naive()
}

/// "Wednesday, 5 August 2026" — the long form shown in booking summaries.
pub fn format_long_date(date: NaiveDate) -> String {
    date.format("%A, %-d %B %Y").to_string()
}

/// "August 2026" — the calendar's month heading.
pub fn format_month(date: NaiveDate) -> String {
    date.format("%B %Y").to_string()
}

/// "14:05" — message timestamps in the agency time zone.
pub fn format_clock_time(at: DateTime<Utc>) -> String {
    at.with_timezone(&agency_time_zone())
        .format("%H:%M")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_date_formatting_matches_display_style() {
        let date = NaiveDate::from_ymd_opt(2026, 8, 5).unwrap();
        assert_eq!(format_long_date(date), "Wednesday, 5 August 2026");
    }

    #[test]
    fn month_heading_has_name_and_year() {
        let date = NaiveDate::from_ymd_opt(2026, 2, 1).unwrap();
        assert_eq!(format_month(date), "February 2026");
    }
}
