//! Askama template structs for the web interface.

use askama::Template;

use crate::navigator::ViewSurface;

/// Page title.
pub const PAGE_TITLE: &str = "לוח שנה ספרותי";

/// The day page.
#[derive(Template)]
#[template(path = "day.html")]
pub struct DayTemplate<'a> {
    pub title: &'a str,
    pub heading: &'a str,
    pub picker_value: &'a str,
    pub state: &'a str,
    pub loading_visible: bool,
    pub error_visible: bool,
    pub content_visible: bool,
    /// Already escaped card markup.
    pub events_html: String,
    /// Already escaped card markup.
    pub suggestions_html: String,
}

impl<'a> DayTemplate<'a> {
    pub fn from_surface(surface: &'a ViewSurface) -> Self {
        let view = surface.view();
        Self {
            title: PAGE_TITLE,
            heading: surface.date_heading(),
            picker_value: surface.picker_value(),
            state: surface.state().as_str(),
            loading_visible: surface.is_loading_visible(),
            error_visible: surface.is_error_visible(),
            content_visible: surface.is_content_visible(),
            events_html: view.events_html(),
            suggestions_html: view.suggestions_html(),
        }
    }
}
