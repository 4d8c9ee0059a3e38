//! Shared utility functions.
//!
//! - `html`: HTML escaping for safe rendering

mod html;

pub use html::html_escape;
