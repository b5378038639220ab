//! Unit tests for month grouping

use chrono::NaiveDate;
use core_kernel::MonthOfYear;

fn month(year: i32, month: u32) -> MonthOfYear {
    MonthOfYear::of(NaiveDate::from_ymd_opt(year, month, 1).unwrap())
}

mod month_of_year {
    use super::*;

    #[test]
    fn test_display_uses_full_month_name_and_year() {
        let month = month(2023, 4);
        assert_eq!(month.to_string(), "April 2023");
        assert_eq!(month.month_name(), "April");
        assert_eq!((month.year(), month.month()), (2023, 4));
    }

    #[test]
    fn test_of_date_normalizes_day() {
        let date = NaiveDate::from_ymd_opt(2022, 11, 18).unwrap();
        let grouped = MonthOfYear::of(date);
        assert_eq!(grouped, month(2022, 11));
        assert_eq!(grouped.first_day(), NaiveDate::from_ymd_opt(2022, 11, 1).unwrap());
    }

    #[test]
    fn test_ordering_is_chronological() {
        assert!(month(2022, 11) < month(2023, 2));
    }

    #[test]
    fn test_serializes_as_label() {
        assert_eq!(serde_json::to_string(&month(2023, 2)).unwrap(), "\"February 2023\"");
    }
}
