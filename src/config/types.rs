use serde::{Deserialize, Serialize};

/// Environment variable that overrides the service base URL.
pub const API_URL_ENV: &str = "NEWSDESK_API_URL";

/// Base URL used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:10000";

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub service: ServiceConfig,
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub share: ShareConfig,
}

/// Connection settings for the aggregation service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Base URL of the service (scheme + host + port).
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Total request timeout in seconds (default: 30).
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
}

/// Terminal presentation settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Tags shown on a summary card before the "+N" indicator (default: 3).
    #[serde(default = "default_max_card_tags")]
    pub max_card_tags: usize,
    /// Draw the decorative background behind the cards (default: true).
    #[serde(default = "default_background")]
    pub background: bool,
    /// UI tick interval in milliseconds (default: 250).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    /// How long footer notices stay visible, in seconds (default: 3).
    #[serde(default = "default_notice_seconds")]
    pub notice_seconds: u64,
}

/// Share and open-in-browser settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ShareConfig {
    /// External command used as the native share tier.
    ///
    /// Receives the share text on stdin and `TITLE URL` as arguments.
    /// When unset the native tier is unavailable.
    #[serde(default)]
    pub command: Option<String>,
    /// Link shared when an article has no canonical URL.
    ///
    /// Defaults to the service's news endpoint.
    #[serde(default)]
    pub fallback_url: Option<String>,
    /// Command used to open article links (default: platform opener).
    #[serde(default)]
    pub open_command: Option<String>,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout() -> u32 {
    30
}

fn default_connect_timeout() -> u32 {
    5
}

fn default_max_card_tags() -> usize {
    3
}

fn default_background() -> bool {
    true
}

fn default_tick_rate_ms() -> u64 {
    250
}

fn default_notice_seconds() -> u64 {
    3
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_seconds: default_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            max_card_tags: default_max_card_tags(),
            background: default_background(),
            tick_rate_ms: default_tick_rate_ms(),
            notice_seconds: default_notice_seconds(),
        }
    }
}

impl ServiceConfig {
    /// Resolve the base URL from the process environment.
    ///
    /// Precedence: explicit override (CLI) > `NEWSDESK_API_URL` > config file.
    pub fn resolve_base_url(&self, cli_override: Option<&str>) -> String {
        self.resolve_base_url_with(cli_override, std::env::var(API_URL_ENV).ok())
    }

    /// Same as [`resolve_base_url`](Self::resolve_base_url) with the
    /// environment value passed in.
    pub fn resolve_base_url_with(&self, cli_override: Option<&str>, env: Option<String>) -> String {
        let chosen = cli_override
            .map(str::to_string)
            .filter(|s| !s.trim().is_empty())
            .or_else(|| env.filter(|s| !s.trim().is_empty()))
            .unwrap_or_else(|| self.base_url.clone());
        chosen.trim().trim_end_matches('/').to_string()
    }
}

impl ShareConfig {
    /// Link used for sharing when an article has no canonical URL.
    pub fn page_url(&self, base_url: &str) -> String {
        self.fallback_url
            .clone()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| format!("{}/api/news", base_url.trim_end_matches('/')))
    }
}
