//! HTTP request handlers for the web server.

use askama::Template;
use axum::{
    extract::{Query, RawQuery, State},
    http::header,
    response::{Html, IntoResponse},
};
use serde::Deserialize;

use super::assets;
use super::template_structs::DayTemplate;
use super::AppState;
use crate::models::CalendarDate;
use crate::navigator::{DateNavigator, NavIntent};

/// Query params of the day page.
#[derive(Debug, Default, Deserialize)]
pub struct DayParams {
    /// Date picker value, `YYYY-MM-DD`.
    pub pick: Option<String>,
    /// Navigation button: `prev`, `next` or `today`.
    pub nav: Option<String>,
    /// Date the page was showing, `YYYY-MM-DD`. Used when `pick` is empty.
    pub current: Option<String>,
}

/// Render the day page.
///
/// The starting date is the picked date if there is one, otherwise the date
/// the page was showing, otherwise the `date=MM-DD` parameter or today. A
/// `nav` button is applied on top.
pub async fn day_page(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
    Query(params): Query<DayParams>,
) -> impl IntoResponse {
    let picked = params
        .pick
        .as_deref()
        .and_then(CalendarDate::parse_picker)
        .or_else(|| {
            params
                .current
                .as_deref()
                .and_then(CalendarDate::parse_picker)
        });
    let mut nav = match picked {
        Some(date) => DateNavigator::at(state.clock.clone(), date),
        None => DateNavigator::from_query(state.clock.clone(), query.as_deref()),
    };

    match params.nav.as_deref().and_then(NavIntent::from_name) {
        Some(intent) => nav.navigate(&intent, state.source.as_ref()).await,
        None => nav.load(state.source.as_ref()).await,
    };

    let template = DayTemplate::from_surface(nav.surface());
    Html(
        template
            .render()
            .unwrap_or_else(|e| format!("Template error: {}", e)),
    )
}

/// Serve CSS.
pub async fn serve_css() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/css")], assets::CSS)
}
