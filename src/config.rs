//! Configuration management for litcal using the prefer crate.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::content::{ContentError, ContentLocation, ContentSource, USER_AGENT};

/// Default content location, relative to the config file (or CWD).
pub const DEFAULT_CONTENT: &str = "content";

/// Default server bind address.
pub const DEFAULT_BIND: &str = "127.0.0.1:3030";

/// Environment variable overriding the content location.
pub const CONTENT_ENV: &str = "LITCAL_CONTENT";

/// Environment variable overriding the bind address.
pub const BIND_ENV: &str = "LITCAL_BIND";

/// Resolved runtime settings.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Where day documents live.
    pub content: ContentLocation,
    /// Address `serve` listens on.
    pub bind: String,
    /// User agent for remote content requests.
    pub user_agent: String,
    /// Request timeout for remote content. `None` waits indefinitely.
    pub timeout: Option<Duration>,
}

impl Default for Settings {
    fn default() -> Self {
        let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        Self {
            content: ContentLocation::Directory(cwd.join(DEFAULT_CONTENT)),
            bind: DEFAULT_BIND.to_string(),
            user_agent: USER_AGENT.to_string(),
            timeout: None,
        }
    }
}

impl Settings {
    /// Open the configured content source.
    pub fn open_source(&self) -> Result<Arc<dyn ContentSource>, ContentError> {
        self.content.open(&self.user_agent, self.timeout)
    }
}

/// Configuration file contents.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Content location: an http(s) URL or a directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// Server bind address (`port`, `host`, or `host:port`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
    /// File this config was read from.
    #[serde(skip)]
    pub source_path: Option<PathBuf>,
}

impl Config {
    /// Load configuration using prefer crate for discovery.
    /// Automatically discovers litcal config files in standard locations.
    pub async fn load() -> Self {
        match prefer::load("litcal").await {
            Ok(pref_config) => {
                if let Some(path) = pref_config.source_path() {
                    match Self::load_from_path(path).await {
                        Ok(config) => config,
                        Err(e) => {
                            tracing::warn!("{}", e);
                            Self::default()
                        }
                    }
                } else {
                    Self::default()
                }
            }
            // No config file found
            Err(_) => Self::default(),
        }
    }

    /// Load configuration from a specific file path.
    /// Supports JSON, TOML and YAML based on file extension.
    pub async fn load_from_path(path: &Path) -> Result<Self, String> {
        let contents = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| format!("Failed to read config file: {}", e))?;

        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

        let mut config: Config = match ext {
            "toml" => toml::from_str(&contents)
                .map_err(|e| format!("Failed to parse TOML config: {}", e))?,
            "yaml" | "yml" => serde_yaml::from_str(&contents)
                .map_err(|e| format!("Failed to parse YAML config: {}", e))?,
            _ => serde_json::from_str(&contents)
                .map_err(|e| format!("Failed to parse JSON config: {}", e))?,
        };

        config.source_path = Some(path.to_path_buf());
        Ok(config)
    }

    /// Get the base directory for resolving relative paths.
    /// Returns the config file's parent directory if available, otherwise None.
    pub fn base_dir(&self) -> Option<PathBuf> {
        self.source_path
            .as_ref()
            .and_then(|p| p.parent().map(|p| p.to_path_buf()))
    }

    /// Apply configuration to settings.
    /// `base_dir` is used to resolve a relative content directory.
    pub fn apply_to_settings(&self, settings: &mut Settings, base_dir: &Path) -> anyhow::Result<()> {
        let content = self.content.as_deref().unwrap_or(DEFAULT_CONTENT);
        settings.content = ContentLocation::parse(content, base_dir)
            .map_err(|e| anyhow::anyhow!("Invalid content location {:?}: {}", content, e))?;

        if let Some(ref bind) = self.bind {
            settings.bind = bind.clone();
        }
        if let Some(ref user_agent) = self.user_agent {
            settings.user_agent = user_agent.clone();
        }
        if let Some(secs) = self.timeout_secs {
            settings.timeout = Some(Duration::from_secs(secs));
        }
        Ok(())
    }
}

/// Options for loading settings.
#[derive(Debug, Clone, Default)]
pub struct LoadOptions {
    /// Explicit config file path (overrides auto-discovery).
    pub config_path: Option<PathBuf>,
    /// Use CWD for relative paths instead of config file directory.
    pub use_cwd: bool,
    /// Content location from the command line (highest precedence).
    pub content: Option<String>,
}

/// Apply `LITCAL_*` overrides. `lookup` reads one variable.
pub fn apply_env_overrides(
    settings: &mut Settings,
    base_dir: &Path,
    lookup: impl Fn(&str) -> Option<String>,
) -> anyhow::Result<()> {
    if let Some(content) = lookup(CONTENT_ENV).filter(|s| !s.is_empty()) {
        tracing::debug!("Using {} from environment: {}", CONTENT_ENV, content);
        settings.content = ContentLocation::parse(&content, base_dir)
            .map_err(|e| anyhow::anyhow!("Invalid {} {:?}: {}", CONTENT_ENV, content, e))?;
    }
    if let Some(bind) = lookup(BIND_ENV).filter(|s| !s.is_empty()) {
        tracing::debug!("Using {} from environment: {}", BIND_ENV, bind);
        settings.bind = bind;
    }
    Ok(())
}

/// Load settings with explicit options.
/// Returns (Settings, Config) tuple.
pub async fn load_settings_with_options(options: LoadOptions) -> anyhow::Result<(Settings, Config)> {
    let config = match options.config_path {
        Some(ref path) => Config::load_from_path(path)
            .await
            .map_err(|e| anyhow::anyhow!(e))?,
        None => Config::load().await,
    };

    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    // Determine base directory for resolving relative paths
    let base_dir = if options.use_cwd {
        cwd.clone()
    } else {
        config.base_dir().unwrap_or_else(|| cwd.clone())
    };

    let mut settings = Settings::default();
    config.apply_to_settings(&mut settings, &base_dir)?;

    // Environment and command-line values are relative to where we run.
    apply_env_overrides(&mut settings, &cwd, |key| std::env::var(key).ok())?;

    if let Some(ref content) = options.content {
        settings.content = ContentLocation::parse(content, &cwd)
            .map_err(|e| anyhow::anyhow!("Invalid content location {:?}: {}", content, e))?;
    }

    tracing::debug!(content = %settings.content, bind = %settings.bind, "Settings loaded");
    Ok((settings, config))
}
