//! Schedule extraction: discover the listed days, then scrape each one.

use std::cell::Cell;

use chrono::NaiveDate;
use tracing::{debug, info, warn};

use crate::clock::Clock12;
use crate::config::ScheduleConfig;
use crate::document::{RawRow, TagQuery};
use crate::error::TvGuideResult;
use crate::schedule::{Day, Program};
use crate::source::PageSource;

/// A listing stops after this many rows whose start and end fall in
/// different halves of the day. The count runs across days and only
/// restarts once it reaches the limit.
const MAX_STRADDLING_ROWS: usize = 2;

pub struct Extractor<'a, S, Q> {
    config: &'a ScheduleConfig,
    source: S,
    query: Q,
    today: NaiveDate,
    straddling: Cell<usize>,
}

impl<'a, S: PageSource, Q: TagQuery> Extractor<'a, S, Q> {
    /// `today` is only used to flag the current day.
    pub fn new(config: &'a ScheduleConfig, source: S, query: Q, today: NaiveDate) -> Self {
        Extractor {
            config,
            source,
            query,
            today,
            straddling: Cell::new(0),
        }
    }

    /// Day-selector values listed on the source page, in page order.
    pub async fn discover_days(&self) -> TvGuideResult<Vec<String>> {
        let url = self.config.source_url()?;
        let html = self.source.fetch(&url).await?;
        let values = self.query.day_values(&html)?;

        info!(count = values.len(), "discovered days");
        Ok(values)
    }

    /// Fetch and parse the listing for one day-selector value.
    ///
    /// Days must be extracted in discovery order: an odd number of
    /// straddling rows on one day carries over into the next.
    pub async fn extract_day(&self, value: &str) -> TvGuideResult<Day> {
        let mut day = Day::from_token(value, self.today)?;

        let url = self.config.day_url(value)?;
        let html = self.source.fetch(&url).await?;
        let rows = self.query.schedule_rows(&html)?;

        let mut straddling = self.straddling.get();
        day.entries = parse_rows(rows, self.config, &mut straddling);
        self.straddling.set(straddling);

        if day.entries.is_empty() {
            warn!(day = %day.display, "no programs found");
        } else {
            info!(day = %day.display, programs = day.entries.len(), "extracted day");
        }

        Ok(day)
    }

    /// Every discovered day, in discovery order.
    pub async fn extract(&self) -> TvGuideResult<Vec<Day>> {
        let mut days = Vec::new();
        for value in self.discover_days().await? {
            days.push(self.extract_day(&value).await?);
        }
        Ok(days)
    }
}

/// Split `"H:MM AM - H:MM PM"` into its two clock times.
pub fn parse_range(time_range: &str) -> Option<(Clock12, Clock12)> {
    let (start, end) = time_range.split_once(" - ")?;
    let start = start.trim().parse().ok()?;
    let end = end.trim().parse().ok()?;
    Some((start, end))
}

/// Turn raw rows into programs.
///
/// Rows with an unparseable time range are dropped. Rows whose interval
/// straddles AM/PM are kept and counted in `straddling`; the row that
/// brings it to `MAX_STRADDLING_ROWS` ends the listing and resets it.
pub fn parse_rows(
    rows: Vec<RawRow>,
    config: &ScheduleConfig,
    straddling: &mut usize,
) -> Vec<Program> {
    let mut programs = Vec::new();

    for row in rows {
        let Some((start, end)) = parse_range(&row.time_range) else {
            debug!(title = %row.title, range = %row.time_range, "skipping row with unreadable time");
            continue;
        };

        programs.push(Program::new(
            row.title,
            start.to_24_hour_string(),
            end.to_24_hour_string(),
            config,
        ));

        if start.meridiem() != end.meridiem() {
            *straddling += 1;
            if *straddling == MAX_STRADDLING_ROWS {
                debug!(%start, %end, "second AM/PM straddle, ending day");
                *straddling = 0;
                break;
            }
        }
    }

    programs
}
