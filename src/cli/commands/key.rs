//! Key command: show where a day's document lives.

use anyhow::anyhow;
use chrono::Datelike;

use crate::config::Settings;
use crate::content::resolve_key;
use crate::models::{CalendarDate, Clock};
use crate::navigator::parse_date_param;

/// Parse `MM-DD` (current year) or `YYYY-MM-DD`.
fn parse_day(input: &str, clock: &dyn Clock) -> Option<CalendarDate> {
    parse_date_param(input, clock.today().year()).or_else(|| CalendarDate::parse_picker(input))
}

/// Print the content key and location for a date.
pub fn cmd_key(settings: &Settings, clock: &dyn Clock, input: &str) -> anyhow::Result<()> {
    let date = parse_day(input, clock)
        .ok_or_else(|| anyhow!("Invalid date {:?}: expected MM-DD or YYYY-MM-DD", input))?;
    let key = resolve_key(&date);
    let source = settings.open_source()?;

    println!("{}\t{}", key, source.locate(&key));
    Ok(())
}
