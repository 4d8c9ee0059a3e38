//! litcal - daily literary calendar.
//!
//! Resolves a calendar day to its `MM-DD.json` content document, fetches it,
//! and renders literary-event and post-suggestion cards for the terminal or
//! a web page, with prev/next/today/pick navigation between days.

pub mod cli;
pub mod config;
pub mod content;
pub mod models;
pub mod navigator;
pub mod render;
pub mod server;
pub mod utils;
