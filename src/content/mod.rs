//! Day content retrieval.
//!
//! A calendar date maps to a content key (`MM-DD`) and the key maps to one
//! JSON document under a base location, either an HTTP(S) URL or a local
//! directory. Every call is a fresh fetch; nothing is cached between dates.

mod dir;
mod http;

pub use dir::DirContentSource;
pub use http::{HttpContentSource, USER_AGENT};

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;
use url::Url;

use crate::models::{CalendarDate, ContentDocument};

/// Name of a day's content document, `MM-DD`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContentKey(String);

impl ContentKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// File name of the document, `MM-DD.json`.
    pub fn file_name(&self) -> String {
        format!("{}.json", self.0)
    }
}

impl fmt::Display for ContentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Derive the content key for a date. The year never takes part.
pub fn resolve_key(date: &CalendarDate) -> ContentKey {
    ContentKey(format!("{:02}-{:02}", date.month(), date.day()))
}

/// Why a day's content could not be loaded.
///
/// The view only distinguishes success from failure; the variants are kept
/// for logs and diagnostics.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("No content for {0}")]
    NotFound(ContentKey),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Malformed content document: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Where day documents are fetched from.
#[async_trait]
pub trait ContentSource: Send + Sync {
    /// Fetch and parse the document for `key`.
    async fn fetch(&self, key: &ContentKey) -> Result<ContentDocument, ContentError>;

    /// Human-readable location of the document for `key`.
    fn locate(&self, key: &ContentKey) -> String;
}

/// Configured base location of the content documents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentLocation {
    Remote(Url),
    Directory(PathBuf),
}

impl ContentLocation {
    /// Parse a configured location.
    ///
    /// `http://` and `https://` values are URLs (a trailing slash is added so
    /// keys join beneath them). Anything else is a directory; `~` is
    /// expanded and relative paths resolve against `base_dir`.
    pub fn parse(value: &str, base_dir: &Path) -> Result<Self, url::ParseError> {
        let value = value.trim();
        if value.starts_with("http://") || value.starts_with("https://") {
            let mut url = Url::parse(value)?;
            if !url.path().ends_with('/') {
                let path = format!("{}/", url.path());
                url.set_path(&path);
            }
            return Ok(ContentLocation::Remote(url));
        }

        let expanded = shellexpand::tilde(value);
        let path = Path::new(expanded.as_ref());
        if path.is_absolute() {
            Ok(ContentLocation::Directory(path.to_path_buf()))
        } else {
            Ok(ContentLocation::Directory(base_dir.join(path)))
        }
    }

    /// Local directory, if the content is served from disk.
    pub fn directory(&self) -> Option<&Path> {
        match self {
            ContentLocation::Directory(dir) => Some(dir),
            ContentLocation::Remote(_) => None,
        }
    }

    /// Open a fetcher for this location.
    pub fn open(
        &self,
        user_agent: &str,
        timeout: Option<Duration>,
    ) -> Result<Arc<dyn ContentSource>, ContentError> {
        match self {
            ContentLocation::Remote(url) => Ok(Arc::new(HttpContentSource::new(
                url.clone(),
                user_agent,
                timeout,
            )?)),
            ContentLocation::Directory(dir) => Ok(Arc::new(DirContentSource::new(dir.clone()))),
        }
    }
}

impl fmt::Display for ContentLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentLocation::Remote(url) => write!(f, "{}", url),
            ContentLocation::Directory(dir) => write!(f, "{}", dir.display()),
        }
    }
}
