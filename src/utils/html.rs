//! HTML escaping for content-document text.
//!
//! Every string that comes out of a content document passes through
//! [`html_escape`] before it is embedded in generated markup.

/// Escape HTML special characters so `s` renders as literal text.
pub fn html_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
