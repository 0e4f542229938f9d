//! Run configuration.
//!
//! Everything the reference deployment hard-codes (source URL, channel,
//! offset, selectors) lives here so a run can point at another channel
//! or a test endpoint. Every key is optional in the TOML file.

use std::path::{Path, PathBuf};
use std::time::Duration;

use chrono::FixedOffset;
use serde::Deserialize;
use url::Url;

use crate::constants::*;
use crate::error::{TvGuideError, TvGuideResult};

fn default_source_url() -> String {
    DEFAULT_SOURCE_URL.to_string()
}

fn default_day_param() -> String {
    DEFAULT_DAY_PARAM.to_string()
}

fn default_channel() -> String {
    DEFAULT_CHANNEL.to_string()
}

fn default_utc_offset() -> String {
    DEFAULT_UTC_OFFSET.to_string()
}

fn default_user_agent() -> String {
    format!("tvguide/{}", env!("CARGO_PKG_VERSION"))
}

/// Configuration at ~/.config/tvguide/config.toml
#[derive(Debug, Clone, Deserialize)]
pub struct ScheduleConfig {
    #[serde(default = "default_source_url")]
    pub source_url: String,

    #[serde(default = "default_day_param")]
    pub day_param: String,

    #[serde(default = "default_channel")]
    pub channel: String,

    #[serde(default)]
    pub channel_logo_url: String,

    #[serde(default)]
    pub available_archive: u8,

    /// Fixed offset of the listings, e.g. "+05:30"
    #[serde(default = "default_utc_offset")]
    pub utc_offset: String,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Per-request timeout. Unset means wait indefinitely.
    #[serde(default)]
    pub timeout_secs: Option<u64>,

    #[serde(default)]
    pub selectors: Selectors,
}

/// CSS selectors describing the source markup.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Selectors {
    pub day_option: String,
    pub row: String,
    pub title: String,
    pub time_range: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Selectors {
            day_option: DEFAULT_DAY_OPTION_SELECTOR.to_string(),
            row: DEFAULT_ROW_SELECTOR.to_string(),
            title: DEFAULT_TITLE_SELECTOR.to_string(),
            time_range: DEFAULT_TIME_RANGE_SELECTOR.to_string(),
        }
    }
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        ScheduleConfig {
            source_url: default_source_url(),
            day_param: default_day_param(),
            channel: default_channel(),
            channel_logo_url: String::new(),
            available_archive: 0,
            utc_offset: default_utc_offset(),
            user_agent: default_user_agent(),
            timeout_secs: None,
            selectors: Selectors::default(),
        }
    }
}

impl ScheduleConfig {
    pub fn config_path() -> TvGuideResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| TvGuideError::Config("Could not determine config directory".into()))?
            .join("tvguide");

        Ok(config_dir.join("config.toml"))
    }

    /// Load config from an explicit path, or from the default location.
    ///
    /// A missing default file yields the built-in defaults; a missing
    /// explicit file is an error.
    pub fn load(path: Option<&Path>) -> TvGuideResult<Self> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => {
                let default_path = Self::config_path()?;
                if !default_path.exists() {
                    return Ok(ScheduleConfig::default());
                }
                default_path
            }
        };

        let contents = std::fs::read_to_string(&path).map_err(|e| {
            TvGuideError::Config(format!("Could not read {}: {e}", path.display()))
        })?;

        let config: ScheduleConfig = toml::from_str(&contents).map_err(|e| {
            TvGuideError::Config(format!("Could not parse {}: {e}", path.display()))
        })?;
        config.validate()?;

        Ok(config)
    }

    pub fn from_toml(contents: &str) -> TvGuideResult<Self> {
        let config: ScheduleConfig =
            toml::from_str(contents).map_err(|e| TvGuideError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check the fields that are parsed lazily elsewhere.
    pub fn validate(&self) -> TvGuideResult<()> {
        self.source_url()?;
        self.offset()?;
        Ok(())
    }

    pub fn source_url(&self) -> TvGuideResult<Url> {
        Url::parse(&self.source_url).map_err(|e| {
            TvGuideError::Config(format!("Invalid source URL '{}': {e}", self.source_url))
        })
    }

    pub fn offset(&self) -> TvGuideResult<FixedOffset> {
        self.utc_offset.parse::<FixedOffset>().map_err(|_| {
            TvGuideError::Config(format!(
                "Invalid UTC offset '{}'. Expected +HH:MM",
                self.utc_offset
            ))
        })
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    /// URL of one day's listing: the source URL with the day parameter set.
    pub fn day_url(&self, day_value: &str) -> TvGuideResult<Url> {
        let mut url = self.source_url()?;
        url.query_pairs_mut().append_pair(&self.day_param, day_value);
        Ok(url)
    }
}
