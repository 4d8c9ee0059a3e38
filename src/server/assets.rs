//! Static asset constants.

/// Stylesheet for the day page.
pub const CSS: &str = include_str!("styles.css");
