//! Data models for the literary calendar.

mod content;
mod date;

pub use content::{
    ContentDocument, EventYear, LiteraryEvent, PostSuggestion, ISRAELI_EVENT_TYPE,
};
pub use date::{CalendarDate, Clock, FixedClock, SystemClock};
