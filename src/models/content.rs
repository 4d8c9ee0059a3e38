//! Content document schema.
//!
//! One JSON document per day. Every field is optional; unknown fields are
//! kept so a parsed document serializes back to the same shape.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

/// Event type marking a literary event as Israeli.
pub const ISRAELI_EVENT_TYPE: &str = "israeli";

/// A day's content.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContentDocument {
    /// Hebrew calendar date, appended to the heading.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hebrew_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub literary_events: Option<Vec<LiteraryEvent>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub post_suggestions: Option<Vec<PostSuggestion>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ContentDocument {
    /// Literary events in document order (empty when absent).
    pub fn events(&self) -> &[LiteraryEvent] {
        self.literary_events.as_deref().unwrap_or_default()
    }

    /// Post suggestions in document order (empty when absent).
    pub fn suggestions(&self) -> &[PostSuggestion] {
        self.post_suggestions.as_deref().unwrap_or_default()
    }
}

/// Something that happened in literature on this day.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LiteraryEvent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<EventYear>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl LiteraryEvent {
    pub fn is_israeli(&self) -> bool {
        self.kind.as_deref() == Some(ISRAELI_EVENT_TYPE)
    }

    /// Year annotation text. An empty string counts as no year.
    pub fn year_label(&self) -> Option<String> {
        self.year
            .as_ref()
            .map(|y| y.to_string())
            .filter(|y| !y.is_empty())
    }
}

/// Year of an event, as written in the document.
///
/// Documents are hand-edited; `1925`, `1925.0` and `"1925"` all occur.
/// Numbers are kept as JSON numbers so they print the way they were written.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EventYear {
    Number(Number),
    Text(String),
}

impl fmt::Display for EventYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventYear::Number(n) => write!(f, "{}", n),
            EventYear::Text(s) => f.write_str(s),
        }
    }
}

/// A suggested social post.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PostSuggestion {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hashtags: Option<Vec<String>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl PostSuggestion {
    /// Hashtags in document order (empty when absent).
    pub fn tags(&self) -> &[String] {
        self.hashtags.as_deref().unwrap_or_default()
    }
}
