//! Calendar dates as the viewer sees them.
//!
//! A [`CalendarDate`] only range-checks its fields (month 1-12, day 1-31).
//! Combinations such as February 30 are kept as-is: they resolve to a content
//! key that simply has no document behind it. Day arithmetic works on the
//! normalized date, so Feb 30 + 1 day is March 3 in a common year.

use std::fmt;

use chrono::{Datelike, Days, Local, NaiveDate};

/// A selected day. The year is only used for display and the date picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CalendarDate {
    year: i32,
    month: u32,
    day: u32,
}

impl CalendarDate {
    /// Build a date, checking only that month and day are in range.
    pub fn new(year: i32, month: u32, day: u32) -> Option<Self> {
        if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
            return None;
        }
        // Rejects years chrono cannot represent.
        NaiveDate::from_ymd_opt(year, month, 1)?;
        Some(Self { year, month, day })
    }

    pub fn from_naive(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
            day: date.day(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    /// Whether the month actually has this day.
    pub fn is_real(&self) -> bool {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day).is_some()
    }

    /// The real date this value denotes, rolling excess days into the
    /// following month.
    pub fn normalized(&self) -> NaiveDate {
        let first = NaiveDate::from_ymd_opt(self.year, self.month, 1)
            .unwrap_or(NaiveDate::MIN);
        first
            .checked_add_days(Days::new(u64::from(self.day - 1)))
            .unwrap_or(first)
    }

    /// The following calendar day.
    pub fn succ(&self) -> Self {
        let date = self.normalized();
        Self::from_naive(date.checked_add_days(Days::new(1)).unwrap_or(date))
    }

    /// The preceding calendar day.
    pub fn pred(&self) -> Self {
        let date = self.normalized();
        Self::from_naive(date.checked_sub_days(Days::new(1)).unwrap_or(date))
    }

    /// Value for a `<input type="date">` control: `YYYY-MM-DD`.
    pub fn picker_value(&self) -> String {
        format!("{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }

    /// Parse a date picker value (`YYYY-MM-DD`).
    ///
    /// Returns `None` for empty or malformed input.
    pub fn parse_picker(input: &str) -> Option<Self> {
        let mut parts = input.trim().splitn(3, '-');
        let year = parts.next()?.parse::<i32>().ok()?;
        let month = parts.next()?.parse::<u32>().ok()?;
        let day = parts.next()?.parse::<u32>().ok()?;
        Self::new(year, month, day)
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.picker_value())
    }
}

/// Source of "today".
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// Local wall-clock date.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// A clock pinned to one date.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
