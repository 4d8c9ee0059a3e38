//! Date navigation state machine.
//!
//! [`DateNavigator`] owns the current date and the [`ViewSurface`]. Every
//! transition synchronously switches to [`ViewState::Loading`] and hands back
//! a [`PendingLoad`]; the caller fetches it and passes the outcome to
//! [`DateNavigator::complete`]. Each load carries a token, and a completion
//! whose token is older than the latest transition is dropped, so a slow
//! fetch can never overwrite a newer date's view.

mod surface;

pub use surface::ViewSurface;

use std::sync::{Arc, LazyLock};

use chrono::Datelike;
use regex::Regex;
use tracing::debug;

use crate::content::{resolve_key, ContentError, ContentKey, ContentSource};
use crate::models::{CalendarDate, Clock, ContentDocument};
use crate::render::{base_heading, render};

/// Query parameter selecting the initial date.
pub const DATE_PARAM: &str = "date";

static DATE_PARAM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{2})-(\d{2})$").expect("Invalid date param regex"));

/// Which panel is visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewState {
    Loading,
    Content,
    Error,
}

impl ViewState {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Loading => "loading",
            Self::Content => "content",
            Self::Error => "error",
        }
    }
}

/// A navigation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavIntent {
    Prev,
    Next,
    Today,
    /// Raw date picker value (`YYYY-MM-DD`); empty means "no selection".
    Pick(String),
}

impl NavIntent {
    /// Parse a button name (`prev`, `next`, `today`).
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "prev" => Some(Self::Prev),
            "next" => Some(Self::Next),
            "today" => Some(Self::Today),
            _ => None,
        }
    }
}

/// Parse a `date=MM-DD` value. The year is supplied by the caller.
pub fn parse_date_param(value: &str, year: i32) -> Option<CalendarDate> {
    let caps = DATE_PARAM_RE.captures(value)?;
    let month = caps[1].parse().ok()?;
    let day = caps[2].parse().ok()?;
    CalendarDate::new(year, month, day)
}

/// Find the `date` parameter in a URL query string.
pub fn date_param_from_query(query: &str) -> Option<String> {
    url::form_urlencoded::parse(query.trim_start_matches('?').as_bytes())
        .find(|(k, _)| k == DATE_PARAM)
        .map(|(_, v)| v.into_owned())
}

/// A fetch started by a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingLoad {
    token: u64,
    date: CalendarDate,
    key: ContentKey,
}

impl PendingLoad {
    pub fn token(&self) -> u64 {
        self.token
    }

    pub fn date(&self) -> CalendarDate {
        self.date
    }

    pub fn key(&self) -> &ContentKey {
        &self.key
    }

    /// Fetch this load's document.
    pub async fn fetch(&self, source: &dyn ContentSource) -> Result<ContentDocument, ContentError> {
        source.fetch(&self.key).await
    }
}

/// Holder of the current date and its view.
pub struct DateNavigator {
    clock: Arc<dyn Clock>,
    current: CalendarDate,
    surface: ViewSurface,
    generation: u64,
}

impl DateNavigator {
    /// Start at today's date.
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        let today = CalendarDate::from_naive(clock.today());
        Self::at(clock, today)
    }

    /// Start at `date`.
    pub fn at(clock: Arc<dyn Clock>, date: CalendarDate) -> Self {
        Self {
            clock,
            current: date,
            surface: ViewSurface::new(),
            generation: 0,
        }
    }

    /// Start from a page URL query string.
    ///
    /// A valid `date=MM-DD` selects that day in the current year; anything
    /// else falls back to today.
    pub fn from_query(clock: Arc<dyn Clock>, query: Option<&str>) -> Self {
        let today = clock.today();
        let initial = query
            .and_then(date_param_from_query)
            .and_then(|value| {
                let parsed = parse_date_param(&value, today.year());
                if parsed.is_none() {
                    debug!(value = %value, "Ignoring invalid date parameter");
                }
                parsed
            })
            .unwrap_or_else(|| CalendarDate::from_naive(today));
        Self::at(clock, initial)
    }

    pub fn current(&self) -> CalendarDate {
        self.current
    }

    pub fn surface(&self) -> &ViewSurface {
        &self.surface
    }

    pub fn state(&self) -> ViewState {
        self.surface.state()
    }

    /// Begin loading the current date.
    pub fn reload(&mut self) -> PendingLoad {
        self.generation += 1;
        self.surface
            .show_loading(base_heading(&self.current), self.current.picker_value());
        PendingLoad {
            token: self.generation,
            date: self.current,
            key: resolve_key(&self.current),
        }
    }

    fn go_to(&mut self, date: CalendarDate) -> PendingLoad {
        self.current = date;
        self.reload()
    }

    pub fn prev(&mut self) -> PendingLoad {
        self.go_to(self.current.pred())
    }

    pub fn next(&mut self) -> PendingLoad {
        self.go_to(self.current.succ())
    }

    pub fn today(&mut self) -> PendingLoad {
        let today = CalendarDate::from_naive(self.clock.today());
        self.go_to(today)
    }

    /// Jump to a date picker value. Empty or unparseable input changes nothing.
    pub fn pick(&mut self, input: &str) -> Option<PendingLoad> {
        if input.trim().is_empty() {
            return None;
        }
        match CalendarDate::parse_picker(input) {
            Some(date) => Some(self.go_to(date)),
            None => {
                debug!(input = %input, "Ignoring unparseable picker value");
                None
            }
        }
    }

    /// Apply a navigation intent.
    pub fn apply(&mut self, intent: &NavIntent) -> Option<PendingLoad> {
        match intent {
            NavIntent::Prev => Some(self.prev()),
            NavIntent::Next => Some(self.next()),
            NavIntent::Today => Some(self.today()),
            NavIntent::Pick(input) => self.pick(input),
        }
    }

    /// Finish a load. Returns `false` if the load was stale and ignored.
    pub fn complete(
        &mut self,
        load: &PendingLoad,
        result: Result<ContentDocument, ContentError>,
    ) -> bool {
        if load.token != self.generation {
            debug!(
                key = %load.key,
                token = load.token,
                current = self.generation,
                "Discarding stale content load"
            );
            return false;
        }

        match result {
            Ok(doc) => self.surface.show_content(render(&doc, &load.date)),
            Err(e) => {
                debug!(key = %load.key, error = %e, "Content unavailable");
                self.surface.show_error();
            }
        }
        true
    }

    /// Load the current date from `source`.
    pub async fn load(&mut self, source: &dyn ContentSource) -> ViewState {
        let pending = self.reload();
        let result = pending.fetch(source).await;
        self.complete(&pending, result);
        self.state()
    }

    /// Apply `intent` and load the resulting date from `source`.
    pub async fn navigate(&mut self, intent: &NavIntent, source: &dyn ContentSource) -> ViewState {
        if let Some(pending) = self.apply(intent) {
            let result = pending.fetch(source).await;
            self.complete(&pending, result);
        }
        self.state()
    }
}
