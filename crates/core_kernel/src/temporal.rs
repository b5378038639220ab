//! Calendar date handling
//!
//! Dataset dates are fixed-width ISO 8601 strings (`YYYY-MM-DD`). They are
//! deserialized into `NaiveDate` once at load time; grouping by month goes
//! through [`MonthOfYear`].

use chrono::{Datelike, NaiveDate};
use serde::{Serialize, Serializer};
use std::fmt;

/// A calendar month in a specific year
///
/// Ordering is chronological. Displays as the full month name followed by
/// the four-digit year, e.g. `April 2023`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthOfYear {
    /// First day of the month
    first_day: NaiveDate,
}

impl MonthOfYear {
    /// The month a date falls in
    pub fn of(date: NaiveDate) -> Self {
        Self {
            first_day: date.with_day(1).unwrap_or(date),
        }
    }

    pub fn year(&self) -> i32 {
        self.first_day.year()
    }

    /// 1-based month number
    pub fn month(&self) -> u32 {
        self.first_day.month()
    }

    /// Full English month name
    pub fn month_name(&self) -> String {
        self.first_day.format("%B").to_string()
    }

    pub fn first_day(&self) -> NaiveDate {
        self.first_day
    }
}

impl fmt::Display for MonthOfYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.first_day.format("%B %Y"))
    }
}

impl Serialize for MonthOfYear {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}
