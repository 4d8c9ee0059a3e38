//! Show command: render a single day.

use std::sync::Arc;

use anyhow::anyhow;
use chrono::Datelike;
use console::style;

use super::OutputFormat;
use crate::config::Settings;
use crate::models::{CalendarDate, Clock};
use crate::navigator::{parse_date_param, DateNavigator, ViewState, ViewSurface};

/// Message shown in place of content when a day cannot be loaded.
pub(super) const UNAVAILABLE: &str = "אין תוכן זמין לתאריך זה";

/// Build a navigator starting at `--pick`, `--date` or today.
pub(super) fn start_navigator(
    clock: Arc<dyn Clock>,
    date: Option<&str>,
    pick: Option<&str>,
) -> anyhow::Result<DateNavigator> {
    if let Some(pick) = pick {
        let start = CalendarDate::parse_picker(pick)
            .ok_or_else(|| anyhow!("Invalid date {:?}: expected YYYY-MM-DD", pick))?;
        return Ok(DateNavigator::at(clock, start));
    }
    if let Some(date) = date {
        let year = clock.today().year();
        let start = parse_date_param(date, year)
            .ok_or_else(|| anyhow!("Invalid date {:?}: expected MM-DD", date))?;
        return Ok(DateNavigator::at(clock, start));
    }
    Ok(DateNavigator::new(clock))
}

/// Terminal rendering of whatever the surface currently shows.
pub(super) fn surface_text(surface: &ViewSurface) -> String {
    match surface.state() {
        ViewState::Content => surface.view().to_text(),
        ViewState::Error => format!(
            "{}\n{} {}\n",
            style(surface.date_heading()).bold(),
            style("✗").red(),
            style(UNAVAILABLE).red()
        ),
        ViewState::Loading => format!(
            "{}\n{}\n",
            style(surface.date_heading()).bold(),
            style("טוען...").dim()
        ),
    }
}

/// Show one day's content.
pub async fn cmd_show(
    settings: &Settings,
    clock: Arc<dyn Clock>,
    date: Option<&str>,
    pick: Option<&str>,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let source = settings.open_source()?;
    let mut nav = start_navigator(clock, date, pick)?;

    let pending = nav.reload();
    let result = pending.fetch(source.as_ref()).await;

    if format == OutputFormat::Json {
        let doc = result.map_err(|e| anyhow!("{} ({})", e, source.locate(pending.key())))?;
        println!("{}", serde_json::to_string_pretty(&doc)?);
        return Ok(());
    }

    let failure = result
        .as_ref()
        .err()
        .map(|e| format!("{} ({})", e, source.locate(pending.key())));
    nav.complete(&pending, result);

    match format {
        OutputFormat::Html => print!("{}", nav.surface().view().to_html()),
        _ => print!("{}", surface_text(nav.surface())),
    }

    match failure {
        Some(reason) => Err(anyhow!(reason)),
        None => Ok(()),
    }
}
