//! Terminal rendering of a day view.

use std::fmt::Write;

use console::style;

use super::{RenderedView, ISRAELI_BADGE};

const EVENTS_TITLE: &str = "אירועים ספרותיים";
const SUGGESTIONS_TITLE: &str = "הצעות לפוסטים";

pub(super) fn render_text(view: &RenderedView) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", style(&view.heading).bold());

    if !view.events.is_empty() {
        let _ = writeln!(out, "\n{}", style(EVENTS_TITLE).cyan().underlined());
        for card in &view.events {
            let mut line = format!("  • {}", style(&card.title).bold());
            if let Some(year) = &card.year {
                let _ = write!(line, " {}", style(format!("({})", year)).dim());
            }
            if card.israeli {
                let _ = write!(line, " {}", style(format!("[{}]", ISRAELI_BADGE)).blue());
            }
            let _ = writeln!(out, "{}", line);
            if !card.description.is_empty() {
                let _ = writeln!(out, "    {}", card.description);
            }
        }
    }

    if !view.suggestions.is_empty() {
        let _ = writeln!(out, "\n{}", style(SUGGESTIONS_TITLE).cyan().underlined());
        for card in &view.suggestions {
            let _ = writeln!(out, "  • {}", style(&card.title).bold());
            if !card.description.is_empty() {
                let _ = writeln!(out, "    {}", card.description);
            }
            if !card.hashtags.is_empty() {
                let tags: Vec<String> = card
                    .hashtags
                    .iter()
                    .map(|t| style(t).green().to_string())
                    .collect();
                let _ = writeln!(out, "    {}", tags.join(" "));
            }
        }
    }

    out
}
