//! CLI commands implementation.
//!
//! This module contains the CLI parser and dispatches to command-specific modules.

mod browse;
mod key;
mod serve;
mod show;

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand, ValueEnum};

use crate::config::{load_settings_with_options, LoadOptions};
use crate::models::{Clock, SystemClock};

#[derive(Parser)]
#[command(name = "litcal")]
#[command(about = "Daily literary calendar: events and post suggestions for every day")]
#[command(version)]
pub struct Cli {
    /// Config file path (overrides auto-discovery)
    #[arg(short, long, global = true, env = "LITCAL_CONFIG")]
    config: Option<PathBuf>,

    /// Resolve relative paths from current working directory instead of config file location
    #[arg(long, global = true)]
    cwd: bool,

    /// Content location: http(s) URL or directory of MM-DD.json files
    #[arg(long, global = true)]
    content: Option<String>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Check if verbose mode is enabled (for early logging setup).
pub fn is_verbose() -> bool {
    std::env::args().any(|arg| arg == "-v" || arg == "--verbose")
}

/// Output format for `show`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Styled terminal text
    #[default]
    Text,
    /// HTML fragment (heading, events list, suggestions list)
    Html,
    /// The raw content document
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Show one day's content (today unless a date is given)
    Show {
        /// Day as MM-DD (current year)
        #[arg(short, long, conflicts_with = "pick")]
        date: Option<String>,
        /// Full date as YYYY-MM-DD
        #[arg(short, long)]
        pick: Option<String>,
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Browse days interactively
    Browse {
        /// Starting day as MM-DD (current year)
        #[arg(short, long)]
        date: Option<String>,
    },

    /// Start the web server
    Serve {
        /// Bind address: port, host, or host:port (overrides config)
        #[arg(short, long)]
        bind: Option<String>,
    },

    /// Print the content key and document location for a date
    Key {
        /// MM-DD or YYYY-MM-DD
        date: String,
    },
}

/// Run the CLI.
pub async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let options = LoadOptions {
        config_path: cli.config,
        use_cwd: cli.cwd,
        content: cli.content,
    };
    let (settings, _config) = load_settings_with_options(options).await?;
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);

    match cli.command {
        Commands::Show { date, pick, format } => {
            show::cmd_show(&settings, clock, date.as_deref(), pick.as_deref(), format).await
        }
        Commands::Browse { date } => browse::cmd_browse(&settings, clock, date.as_deref()).await,
        Commands::Serve { bind } => {
            let bind = bind.unwrap_or_else(|| settings.bind.clone());
            serve::cmd_serve(&settings, &bind).await
        }
        Commands::Key { date } => key::cmd_key(&settings, clock.as_ref(), &date),
    }
}
