//! HTTP(S) content source.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tracing::debug;
use url::Url;

use super::{ContentError, ContentKey, ContentSource};
use crate::models::ContentDocument;

/// Default user agent for content requests.
pub const USER_AGENT: &str = concat!("litcal/", env!("CARGO_PKG_VERSION"));

/// Fetches `<base>/<MM-DD>.json` with a plain GET.
#[derive(Clone)]
pub struct HttpContentSource {
    client: Client,
    base: Url,
}

impl HttpContentSource {
    /// Create a source rooted at `base`, which should end with `/`.
    ///
    /// With `timeout` unset a request waits as long as the transport does.
    pub fn new(base: Url, user_agent: &str, timeout: Option<Duration>) -> Result<Self, ContentError> {
        let mut builder = Client::builder().user_agent(user_agent).gzip(true).brotli(true);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| ContentError::Transport(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client, base })
    }

    /// URL of the document for `key`.
    pub fn url_for(&self, key: &ContentKey) -> Result<Url, ContentError> {
        self.base
            .join(&key.file_name())
            .map_err(|e| ContentError::Transport(e.to_string()))
    }
}

#[async_trait]
impl ContentSource for HttpContentSource {
    async fn fetch(&self, key: &ContentKey) -> Result<ContentDocument, ContentError> {
        let url = self.url_for(key)?;
        debug!(%url, "Fetching day content");

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| ContentError::Transport(e.to_string()))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            debug!(%url, "No content document");
            return Err(ContentError::NotFound(key.clone()));
        }
        if !status.is_success() {
            debug!(%url, %status, "Content request failed");
            return Err(ContentError::Transport(format!("HTTP {}", status)));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| ContentError::Transport(e.to_string()))?;
        let document = serde_json::from_slice(&body)?;
        Ok(document)
    }

    fn locate(&self, key: &ContentKey) -> String {
        self.url_for(key)
            .map(|u| u.to_string())
            .unwrap_or_else(|_| format!("{}{}", self.base, key.file_name()))
    }
}
