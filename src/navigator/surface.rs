//! The named areas a day view is drawn into.

use super::ViewState;
use crate::render::{EventCard, RenderedView, SuggestionCard};

/// What is currently on screen.
///
/// Exactly one of the loading, error and content panels is visible, as given
/// by [`ViewSurface::state`]. The picker value and heading are kept in step
/// with the navigator's date regardless of how a fetch ends.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewSurface {
    state: ViewState,
    date_heading: String,
    picker_value: String,
    events_list: Vec<EventCard>,
    suggestions_list: Vec<SuggestionCard>,
}

impl ViewSurface {
    pub(super) fn new() -> Self {
        Self {
            state: ViewState::Loading,
            date_heading: String::new(),
            picker_value: String::new(),
            events_list: Vec::new(),
            suggestions_list: Vec::new(),
        }
    }

    /// Enter the loading state for a new date, dropping whatever was shown.
    pub(super) fn show_loading(&mut self, heading: String, picker_value: String) {
        self.state = ViewState::Loading;
        self.date_heading = heading;
        self.picker_value = picker_value;
        self.events_list.clear();
        self.suggestions_list.clear();
    }

    /// Replace both lists with a freshly rendered view.
    pub(super) fn show_content(&mut self, view: RenderedView) {
        self.state = ViewState::Content;
        self.date_heading = view.heading;
        self.events_list = view.events;
        self.suggestions_list = view.suggestions;
    }

    pub(super) fn show_error(&mut self) {
        self.state = ViewState::Error;
        self.events_list.clear();
        self.suggestions_list.clear();
    }

    pub fn state(&self) -> ViewState {
        self.state
    }

    pub fn is_loading_visible(&self) -> bool {
        self.state == ViewState::Loading
    }

    pub fn is_error_visible(&self) -> bool {
        self.state == ViewState::Error
    }

    pub fn is_content_visible(&self) -> bool {
        self.state == ViewState::Content
    }

    pub fn date_heading(&self) -> &str {
        &self.date_heading
    }

    /// Date picker value, `YYYY-MM-DD`.
    pub fn picker_value(&self) -> &str {
        &self.picker_value
    }

    pub fn events(&self) -> &[EventCard] {
        &self.events_list
    }

    pub fn suggestions(&self) -> &[SuggestionCard] {
        &self.suggestions_list
    }

    /// Snapshot of the content panel.
    pub fn view(&self) -> RenderedView {
        RenderedView {
            heading: self.date_heading.clone(),
            events: self.events_list.clone(),
            suggestions: self.suggestions_list.clone(),
        }
    }
}
