use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "newsdesk", version, about = "Terminal reader for the news aggregation service")]
pub struct Cli {
    /// Base URL of the news service (overrides NEWSDESK_API_URL and config)
    #[arg(long, global = true, value_name = "URL")]
    pub api_url: Option<String>,

    /// Path to config file (default: ~/.config/newsdesk/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Browse the news in a full-screen reader (default)
    Browse,
    /// Print the current articles
    List {
        /// Print the raw articles as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the full detail of one article
    Show {
        /// Exact article title
        title: String,
    },
    /// Ask the service to refresh its aggregate
    Aggregate,
    /// Print service statistics
    Stats,
    /// Print the update log of one event
    Updates {
        event_id: String,
    },
}

impl Cli {
    /// Subcommand to run; the reader when none was given.
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Browse)
    }
}
