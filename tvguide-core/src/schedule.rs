//! Schedule types: one `Day` owns the `Program`s broadcast on it.

use chrono::{DateTime, FixedOffset, NaiveDate};

use crate::config::ScheduleConfig;
use crate::constants::{DAY_DISPLAY_FORMAT, DAY_TOKEN_FORMAT};
use crate::error::{TvGuideError, TvGuideResult};

/// One calendar date's listing.
#[derive(Debug, Clone, PartialEq)]
pub struct Day {
    pub date: NaiveDate,
    /// `DD.MM.YYYY`
    pub display: String,
    pub is_today: bool,
    /// Broadcast order
    pub entries: Vec<Program>,
}

impl Day {
    pub fn new(date: NaiveDate, today: NaiveDate) -> Self {
        Day {
            date,
            display: date.format(DAY_DISPLAY_FORMAT).to_string(),
            is_today: date == today,
            entries: Vec::new(),
        }
    }

    /// Build a day from a day-selector value such as `20240115`.
    pub fn from_token(token: &str, today: NaiveDate) -> TvGuideResult<Self> {
        Ok(Day::new(parse_day_token(token)?, today))
    }
}

/// Parse an 8-digit `YYYYMMDD` selector value.
pub fn parse_day_token(token: &str) -> TvGuideResult<NaiveDate> {
    if token.len() != 8 || !token.bytes().all(|b| b.is_ascii_digit()) {
        return Err(TvGuideError::DayToken(token.to_string()));
    }

    NaiveDate::parse_from_str(token, DAY_TOKEN_FORMAT)
        .map_err(|_| TvGuideError::DayToken(token.to_string()))
}

/// A single broadcast.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    pub title: String,
    pub description: String,
    /// 24-hour `HH:MM`, no date
    pub local_start: String,
    pub local_end: String,
    /// Filled in by the normalizer
    pub absolute_start: Option<DateTime<FixedOffset>>,
    pub absolute_end: Option<DateTime<FixedOffset>>,

    // Run-level metadata, identical for every program
    pub channel: String,
    pub channel_logo_url: String,
    pub available_archive: u8,
}

impl Program {
    pub fn new(
        title: impl Into<String>,
        local_start: impl Into<String>,
        local_end: impl Into<String>,
        config: &ScheduleConfig,
    ) -> Self {
        Program {
            title: title.into(),
            description: String::new(),
            local_start: local_start.into(),
            local_end: local_end.into(),
            absolute_start: None,
            absolute_end: None,
            channel: config.channel.clone(),
            channel_logo_url: config.channel_logo_url.clone(),
            available_archive: config.available_archive,
        }
    }
}
