//! Fixed `he-IL` date formatting.
//!
//! Long form with weekday, the way Hebrew calendars print a civil date:
//! `יום ראשון, 18 באוקטובר 2026`.

use chrono::{Datelike, Weekday};

use crate::models::CalendarDate;

const WEEKDAYS: [&str; 7] = [
    "יום שני",
    "יום שלישי",
    "יום רביעי",
    "יום חמישי",
    "יום שישי",
    "יום שבת",
    "יום ראשון",
];

const MONTHS: [&str; 12] = [
    "בינואר",
    "בפברואר",
    "במרץ",
    "באפריל",
    "במאי",
    "ביוני",
    "ביולי",
    "באוגוסט",
    "בספטמבר",
    "באוקטובר",
    "בנובמבר",
    "בדצמבר",
];

fn weekday_name(weekday: Weekday) -> &'static str {
    WEEKDAYS[weekday.num_days_from_monday() as usize]
}

/// Format a date as a long Hebrew heading.
///
/// Dates that do not exist (Feb 30) have no weekday and are printed without one.
pub fn format_long(date: &CalendarDate) -> String {
    let month = MONTHS[(date.month() - 1) as usize];
    let body = format!("{} {} {}", date.day(), month, date.year());
    if date.is_real() {
        format!("{}, {}", weekday_name(date.normalized().weekday()), body)
    } else {
        body
    }
}
