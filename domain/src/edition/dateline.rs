//! Masthead date and report timestamp

use chrono::{Datelike, NaiveDate, NaiveTime};

/// Fixed facts about the paper
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edition;

impl Edition {
    pub const NAME: &'static str = "The Daily Breath";
    pub const VERSION: &'static str = env!("CARGO_PKG_VERSION");
}

/// e.g. `SATURDAY, OCTOBER 18, 2026`
pub fn masthead_date(date: NaiveDate) -> String {
    format!(
        "{}, {} {}, {}",
        date.format("%A"),
        date.format("%B"),
        date.day(),
        date.year()
    )
    .to_uppercase()
}

/// e.g. `03:42 PM`
pub fn report_time(time: NaiveTime) -> String {
    time.format("%I:%M %p").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_masthead_date() {
        let date = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
        assert_eq!(masthead_date(date), "SUNDAY, OCTOBER 18, 2026");
    }

    #[test]
    fn test_masthead_date_has_no_leading_zero() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 4).unwrap();
        assert_eq!(masthead_date(date), "TUESDAY, MARCH 4, 2025");
    }

    #[test]
    fn test_report_time_is_twelve_hour() {
        let time = NaiveTime::from_hms_opt(15, 42, 10).unwrap();
        assert_eq!(report_time(time), "03:42 PM");
        let time = NaiveTime::from_hms_opt(0, 5, 0).unwrap();
        assert_eq!(report_time(time), "12:05 AM");
    }
}
