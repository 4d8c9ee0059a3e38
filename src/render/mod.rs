//! Turns a content document into cards.
//!
//! Cards keep the document's raw text; all escaping happens when a card is
//! written out as HTML. Card order always follows document order.

mod locale;
mod text;

pub use locale::format_long;

use crate::models::{CalendarDate, ContentDocument, LiteraryEvent, PostSuggestion};
use crate::utils::html_escape;

/// Badge label for Israeli literary events.
pub const ISRAELI_BADGE: &str = "ישראלי";

/// Separator between the civil date and the Hebrew date in the heading.
const HEADING_SEPARATOR: &str = " — ";

/// Everything shown for one day.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderedView {
    pub heading: String,
    pub events: Vec<EventCard>,
    pub suggestions: Vec<SuggestionCard>,
}

/// One literary event.
#[derive(Debug, Clone, PartialEq)]
pub struct EventCard {
    pub title: String,
    pub year: Option<String>,
    pub israeli: bool,
    pub description: String,
}

/// One post suggestion.
#[derive(Debug, Clone, PartialEq)]
pub struct SuggestionCard {
    pub title: String,
    pub description: String,
    pub hashtags: Vec<String>,
}

/// Heading before any content arrives.
pub fn base_heading(date: &CalendarDate) -> String {
    format_long(date)
}

/// Heading once the document is known: the Hebrew date is appended when set.
pub fn heading_for(base: &str, doc: &ContentDocument) -> String {
    match doc.hebrew_date.as_deref() {
        Some(hebrew) if !hebrew.is_empty() => format!("{}{}{}", base, HEADING_SEPARATOR, hebrew),
        _ => base.to_string(),
    }
}

/// Build the view for `doc` shown on `date`.
pub fn render(doc: &ContentDocument, date: &CalendarDate) -> RenderedView {
    RenderedView {
        heading: heading_for(&base_heading(date), doc),
        events: doc.events().iter().map(EventCard::from).collect(),
        suggestions: doc.suggestions().iter().map(SuggestionCard::from).collect(),
    }
}

impl From<&LiteraryEvent> for EventCard {
    fn from(event: &LiteraryEvent) -> Self {
        Self {
            title: event.title.clone().unwrap_or_default(),
            year: event.year_label(),
            israeli: event.is_israeli(),
            description: event.description.clone().unwrap_or_default(),
        }
    }
}

impl From<&PostSuggestion> for SuggestionCard {
    fn from(suggestion: &PostSuggestion) -> Self {
        Self {
            title: suggestion.title.clone().unwrap_or_default(),
            description: suggestion.description.clone().unwrap_or_default(),
            hashtags: suggestion.tags().to_vec(),
        }
    }
}

impl EventCard {
    pub fn class_name(&self) -> &'static str {
        if self.israeli {
            "event-card israeli"
        } else {
            "event-card"
        }
    }

    pub fn to_html(&self) -> String {
        let mut header = format!(
            r#"<span class="event-title">{}</span>"#,
            html_escape(&self.title)
        );
        if let Some(year) = &self.year {
            header.push_str(&format!(
                r#"<span class="event-year">({})</span>"#,
                html_escape(year)
            ));
        }
        if self.israeli {
            header.push_str(&format!(
                r#"<span class="badge-israeli">{}</span>"#,
                ISRAELI_BADGE
            ));
        }

        format!(
            r#"<div class="{}">
  <div class="event-header">{}</div>
  <p class="event-description">{}</p>
</div>
"#,
            self.class_name(),
            header,
            html_escape(&self.description)
        )
    }
}

impl SuggestionCard {
    pub fn to_html(&self) -> String {
        // No tag row at all when there are no hashtags.
        let hashtags = if self.hashtags.is_empty() {
            String::new()
        } else {
            let tags: String = self
                .hashtags
                .iter()
                .map(|tag| format!(r#"<span class="hashtag">{}</span>"#, html_escape(tag)))
                .collect();
            format!("\n  <div class=\"hashtags\">{}</div>", tags)
        };

        format!(
            r#"<div class="suggestion-card">
  <div class="suggestion-title">{}</div>
  <p class="suggestion-description">{}</p>{}
</div>
"#,
            html_escape(&self.title),
            html_escape(&self.description),
            hashtags
        )
    }
}

impl RenderedView {
    /// Contents of the events list.
    pub fn events_html(&self) -> String {
        self.events.iter().map(EventCard::to_html).collect()
    }

    /// Contents of the suggestions list.
    pub fn suggestions_html(&self) -> String {
        self.suggestions.iter().map(SuggestionCard::to_html).collect()
    }

    /// Standalone HTML fragment: heading plus both lists.
    pub fn to_html(&self) -> String {
        format!(
            r#"<h2 id="date-display">{}</h2>
<div id="events-list">
{}</div>
<div id="suggestions-list">
{}</div>
"#,
            html_escape(&self.heading),
            self.events_html(),
            self.suggestions_html()
        )
    }

    /// Terminal rendering.
    pub fn to_text(&self) -> String {
        text::render_text(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn doc(value: serde_json::Value) -> ContentDocument {
        serde_json::from_value(value).unwrap()
    }

    fn date() -> CalendarDate {
        CalendarDate::new(2026, 10, 18).unwrap()
    }

    #[test]
    fn test_empty_sections_render_no_cards() {
        let view = render(
            &doc(json!({"literary_events": [], "post_suggestions": []})),
            &date(),
        );
        assert!(view.events.is_empty());
        assert!(view.suggestions.is_empty());
        assert_eq!(view.events_html(), "");
        assert_eq!(view.suggestions_html(), "");
    }

    #[test]
    fn test_absent_sections_render_no_cards() {
        let view = render(&doc(json!({})), &date());
        assert!(view.events.is_empty());
        assert!(view.suggestions.is_empty());
        assert_eq!(view.heading, "יום ראשון, 18 באוקטובר 2026");
    }

    #[test]
    fn test_heading_gets_hebrew_date() {
        let view = render(&doc(json!({"hebrew_date": "ז' בחשוון"})), &date());
        assert_eq!(view.heading, "יום ראשון, 18 באוקטובר 2026 — ז' בחשוון");

        let view = render(&doc(json!({"hebrew_date": ""})), &date());
        assert_eq!(view.heading, "יום ראשון, 18 באוקטובר 2026");
    }

    #[test]
    fn test_israeli_event_without_year() {
        let view = render(
            &doc(json!({"literary_events": [
                {"title": "Bialik born", "type": "israeli", "description": "Poet"}
            ]})),
            &date(),
        );
        let card = &view.events[0];
        assert!(card.israeli);
        assert_eq!(card.year, None);

        let html = card.to_html();
        assert!(html.contains(r#"class="event-card israeli""#));
        assert!(html.contains(r#"<span class="badge-israeli">ישראלי</span>"#));
        assert!(!html.contains("event-year"));
    }

    #[test]
    fn test_event_with_year_and_no_type() {
        let view = render(
            &doc(json!({"literary_events": [
                {"title": "Ulysses", "year": 1922, "description": "Paris"}
            ]})),
            &date(),
        );
        let html = view.events[0].to_html();
        assert!(html.contains(r#"<div class="event-card">"#));
        assert!(html.contains(r#"<span class="event-title">Ulysses</span><span class="event-year">(1922)</span>"#));
        assert!(!html.contains("badge-israeli"));
    }

    #[test]
    fn test_empty_year_and_null_description_render_nothing() {
        let view = render(
            &doc(json!({"literary_events": [
                {"title": "Untitled", "year": "", "description": null}
            ]})),
            &date(),
        );
        let card = &view.events[0];
        assert_eq!(card.year, None);
        assert_eq!(card.description, "");
        let html = card.to_html();
        assert!(!html.contains("event-year"));
        assert!(!html.contains("()"));
    }

    #[test]
    fn test_other_type_is_not_israeli() {
        let view = render(
            &doc(json!({"literary_events": [
                {"title": "T", "type": "Israeli", "description": "D"},
                {"title": "T", "type": "world", "description": "D"}
            ]})),
            &date(),
        );
        assert!(view.events.iter().all(|c| !c.israeli));
    }

    #[test]
    fn test_cards_keep_document_order() {
        let view = render(
            &doc(json!({
                "literary_events": [
                    {"title": "c", "description": ""},
                    {"title": "a", "description": ""},
                    {"title": "b", "description": ""}
                ],
                "post_suggestions": [
                    {"title": "z", "description": ""},
                    {"title": "y", "description": ""}
                ]
            })),
            &date(),
        );
        let titles: Vec<_> = view.events.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, ["c", "a", "b"]);
        let titles: Vec<_> = view.suggestions.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, ["z", "y"]);

        let html = view.events_html();
        let c = html.find(">c<").unwrap();
        let a = html.find(">a<").unwrap();
        let b = html.find(">b<").unwrap();
        assert!(c < a && a < b);
    }

    #[test]
    fn test_hashtags_in_order_and_escaped() {
        let view = render(
            &doc(json!({"post_suggestions": [
                {"title": "S", "description": "D", "hashtags": ["#one", "<b>#two</b>"]}
            ]})),
            &date(),
        );
        let html = view.suggestions[0].to_html();
        assert!(html.contains(
            r#"<div class="hashtags"><span class="hashtag">#one</span><span class="hashtag">&lt;b&gt;#two&lt;/b&gt;</span></div>"#
        ));
    }

    #[test]
    fn test_no_hashtag_row_when_absent_or_empty() {
        let view = render(
            &doc(json!({"post_suggestions": [
                {"title": "S", "description": "D"},
                {"title": "S", "description": "D", "hashtags": []}
            ]})),
            &date(),
        );
        for card in &view.suggestions {
            assert!(!card.to_html().contains("hashtags"));
        }
    }

    #[test]
    fn test_markup_in_content_is_escaped() {
        let view = render(
            &doc(json!({
                "literary_events": [
                    {"title": "<script>alert(1)</script>", "year": "\"><img>", "description": "a & b"}
                ],
                "post_suggestions": [
                    {"title": "<i>x</i>", "description": "<b onclick='x'>"}
                ]
            })),
            &date(),
        );
        let html = view.to_html();
        assert!(!html.contains("<script>"));
        assert!(!html.contains("<img>"));
        assert!(!html.contains("<i>"));
        assert!(!html.contains("<b "));
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(html.contains("(&quot;&gt;&lt;img&gt;)"));
        assert!(html.contains("a &amp; b"));
    }

    #[test]
    fn test_heading_is_escaped_in_fragment() {
        let view = render(&doc(json!({"hebrew_date": "<em>"})), &date());
        assert!(view.to_html().contains("— &lt;em&gt;</h2>"));
    }
}
