//! Configuration for newsdesk.
//!
//! Loaded once at start-up from `config.toml`; every field has a default,
//! so a missing file is not an error.

mod loader;
mod types;

pub use loader::{validate_base_url, ConfigError};
pub use types::{
    Config, DisplayConfig, ServiceConfig, ShareConfig, API_URL_ENV, DEFAULT_BASE_URL,
};
