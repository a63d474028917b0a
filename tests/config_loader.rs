//! Loading `config.toml` from disk.

use newsdesk::config::{Config, ConfigError, DEFAULT_BASE_URL};
use std::io::Write;
use tempfile::{NamedTempFile, TempDir};

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn missing_file_gives_defaults() {
    let dir = TempDir::new().unwrap();
    let config = Config::load_from(&dir.path().join("config.toml")).unwrap();
    assert_eq!(config, Config::default());
    assert_eq!(config.service.base_url, DEFAULT_BASE_URL);
    assert_eq!(config.display.max_card_tags, 3);
}

#[test]
fn partial_file_keeps_other_defaults() {
    let file = write_config(
        r#"
[service]
base_url = "https://news.internal:8443"

[share]
command = "notify-send"
"#,
    );

    let config = Config::load_from(file.path()).unwrap();
    assert_eq!(config.service.base_url, "https://news.internal:8443");
    assert_eq!(config.service.timeout_seconds, 30);
    assert_eq!(config.share.command.as_deref(), Some("notify-send"));
    assert!(config.display.background);
}

#[test]
fn display_section_is_read() {
    let file = write_config(
        r#"
[display]
max_card_tags = 5
background = false
notice_seconds = 10
"#,
    );

    let config = Config::load_from(file.path()).unwrap();
    assert_eq!(config.display.max_card_tags, 5);
    assert!(!config.display.background);
    assert_eq!(config.display.notice_seconds, 10);
}

#[test]
fn malformed_toml_is_a_parse_error() {
    let file = write_config("[service\nbase_url = ");
    let err = Config::load_from(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn non_http_url_is_rejected() {
    let file = write_config("[service]\nbase_url = \"ftp://news.example\"\n");
    let err = Config::load_from(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::ValidationError { .. }));
    assert!(err.to_string().contains("must be an http(s) URL"));
}

#[test]
fn zero_card_tags_is_rejected() {
    let file = write_config("[display]\nmax_card_tags = 0\n");
    let err = Config::load_from(file.path()).unwrap_err();
    assert!(err.to_string().contains("display.max_card_tags"));
}

#[test]
fn zero_timeout_is_rejected() {
    let file = write_config("[service]\ntimeout_seconds = 0\n");
    assert!(matches!(
        Config::load_from(file.path()),
        Err(ConfigError::ValidationError { .. })
    ));
}
