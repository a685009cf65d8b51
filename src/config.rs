use chrono::FixedOffset;
use chrono_tz::Tz;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::str::FromStr;
use tracing::{info, warn};

use crate::constants::{
    API_KEY_ENV, CONTAINER_ID, DEFAULT_API_KEY, DEFAULT_FIXTURES_PATH, DEFAULT_LEAGUE_IDS,
    DEFAULT_LOG_DIR, DEFAULT_LOG_DIRECTIVE, DEFAULT_LOG_FILE, DEFAULT_OUTPUT_PATH,
    DEFAULT_SERVER_PORT, SPORTSDB_BASE_URL, SPORTSDB_EVENT_PAGE_BASE,
};
use crate::error::{FixtureError, Result};
use crate::render::{ClockStyle, HtmlTarget, ViewerZone};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub feeds: FeedsConfig,
    pub render: RenderConfig,
    pub server: ServerConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FeedsConfig {
    pub api_key: String,
    pub base_url: String,
    pub event_page_base: String,
    pub league_ids: Vec<String>,
    /// Unset means requests may wait indefinitely
    pub request_timeout_seconds: Option<u64>,
}

impl Default for FeedsConfig {
    fn default() -> Self {
        Self {
            api_key: DEFAULT_API_KEY.to_string(),
            base_url: SPORTSDB_BASE_URL.to_string(),
            event_page_base: SPORTSDB_EVENT_PAGE_BASE.to_string(),
            league_ids: DEFAULT_LEAGUE_IDS.iter().map(|id| id.to_string()).collect(),
            request_timeout_seconds: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub container_id: String,
    pub page_title: String,
    pub output: String,
    pub fixtures: String,
    pub clock: ClockStyle,
    /// IANA zone name such as `Europe/Berlin`; wins over `utc_offset_minutes`
    pub time_zone: Option<String>,
    /// Fixed viewer offset east of UTC
    pub utc_offset_minutes: Option<i32>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            container_id: CONTAINER_ID.to_string(),
            page_title: "Upcoming Matches".to_string(),
            output: DEFAULT_OUTPUT_PATH.to_string(),
            fixtures: DEFAULT_FIXTURES_PATH.to_string(),
            clock: ClockStyle::default(),
            time_zone: None,
            utc_offset_minutes: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_SERVER_PORT,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `tracing` directive applied on top of `RUST_LOG`
    pub directive: String,
    /// Also write daily-rolling JSON logs under `directory`
    pub file_output: bool,
    pub directory: String,
    pub file_name: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            directive: DEFAULT_LOG_DIRECTIVE.to_string(),
            file_output: true,
            directory: DEFAULT_LOG_DIR.to_string(),
            file_name: DEFAULT_LOG_FILE.to_string(),
        }
    }
}

impl RenderConfig {
    /// An empty target for the configured container
    pub fn target(&self) -> HtmlTarget {
        HtmlTarget::new(self.container_id.clone()).with_page_title(self.page_title.clone())
    }

    /// Named zone, then fixed offset, then the host's local zone
    pub fn viewer_zone(&self) -> ViewerZone {
        if let Some(name) = &self.time_zone {
            match Tz::from_str(name) {
                Ok(zone) => return ViewerZone::Named(zone),
                Err(_) => warn!("Unknown render.time_zone '{}', ignoring it", name),
            }
        }
        self.utc_offset_minutes
            .and_then(|minutes| FixedOffset::east_opt(minutes * 60))
            .map(ViewerZone::Fixed)
            .unwrap_or_default()
    }
}

impl Config {
    pub fn parse(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from `path`, falling back to defaults when the file does not exist.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let mut config = if path.exists() {
            Self::parse(&fs::read_to_string(path)?)?
        } else {
            info!("No config file at {}, using defaults", path.display());
            Config::default()
        };
        config.apply_env();
        Ok(config)
    }

    /// Environment wins over the file for the API key
    fn apply_env(&mut self) {
        if let Ok(key) = std::env::var(API_KEY_ENV) {
            if !key.trim().is_empty() {
                self.feeds.api_key = key.trim().to_string();
            }
        }
    }

    fn validate(&self) -> Result<()> {
        if self.feeds.api_key.trim().is_empty() {
            return Err(FixtureError::Config("feeds.api_key must not be empty".into()));
        }
        if self.feeds.league_ids.iter().any(|id| id.trim().is_empty()) {
            return Err(FixtureError::Config("feeds.league_ids contains an empty id".into()));
        }
        if let Some(name) = &self.render.time_zone {
            if Tz::from_str(name).is_err() {
                return Err(FixtureError::Config(format!(
                    "render.time_zone '{}' is not an IANA zone name",
                    name
                )));
            }
        }
        if let Some(minutes) = self.render.utc_offset_minutes {
            if minutes.abs() >= 24 * 60 {
                return Err(FixtureError::Config(format!(
                    "render.utc_offset_minutes {} is out of range",
                    minutes
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = Config::parse("").unwrap();
        assert_eq!(config.feeds.api_key, DEFAULT_API_KEY);
        assert_eq!(config.feeds.league_ids.len(), DEFAULT_LEAGUE_IDS.len());
        assert_eq!(config.feeds.request_timeout_seconds, None);
        assert_eq!(config.render.container_id, CONTAINER_ID);
        assert_eq!(config.render.clock, ClockStyle::TwelveHour);
        assert_eq!(config.server.port, DEFAULT_SERVER_PORT);
        assert_eq!(config.logging.directive, DEFAULT_LOG_DIRECTIVE);
        assert!(config.logging.file_output);
    }

    #[test]
    fn test_partial_sections() {
        let config = Config::parse(
            r#"
            [feeds]
            league_ids = ["4328"]
            request_timeout_seconds = 5

            [render]
            clock = "24h"
            utc_offset_minutes = 120

            [logging]
            directive = "fixture_board=debug"
            file_output = false
            "#,
        )
        .unwrap();
        assert_eq!(config.feeds.league_ids, vec!["4328".to_string()]);
        assert_eq!(config.feeds.request_timeout_seconds, Some(5));
        assert_eq!(config.feeds.base_url, SPORTSDB_BASE_URL);
        assert_eq!(config.render.clock, ClockStyle::TwentyFourHour);
        assert_eq!(config.render.utc_offset_minutes, Some(120));
        assert_eq!(config.logging.directive, "fixture_board=debug");
        assert!(!config.logging.file_output);
        assert_eq!(config.logging.directory, DEFAULT_LOG_DIR);
    }

    #[test]
    fn test_rejects_blank_league() {
        let err = Config::parse("[feeds]\nleague_ids = [\"4328\", \" \"]\n").unwrap_err();
        assert!(matches!(err, FixtureError::Config(_)));
    }

    #[test]
    fn test_missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(dir.path().join("absent.toml")).unwrap();
        assert_eq!(config.server.port, DEFAULT_SERVER_PORT);
    }

    #[test]
    fn test_unreadable_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load(dir.path()).unwrap_err();
        assert!(matches!(err, FixtureError::Io(_)));
    }

    #[test]
    fn test_viewer_zone_precedence() {
        let config = Config::parse(
            "[render]\ntime_zone = \"Europe/Berlin\"\nutc_offset_minutes = 120\n",
        )
        .unwrap();
        assert_eq!(
            config.render.viewer_zone(),
            ViewerZone::Named(chrono_tz::Europe::Berlin)
        );

        let fixed = Config::parse("[render]\nutc_offset_minutes = -300\n").unwrap();
        assert_eq!(
            fixed.render.viewer_zone(),
            ViewerZone::Fixed(FixedOffset::west_opt(5 * 3600).unwrap())
        );

        assert_eq!(RenderConfig::default().viewer_zone(), ViewerZone::Local);
    }

    #[test]
    fn test_rejects_unknown_time_zone() {
        let err = Config::parse("[render]\ntime_zone = \"Mars/Olympus\"\n").unwrap_err();
        assert!(matches!(err, FixtureError::Config(_)));
    }
}
