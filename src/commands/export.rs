use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Utc;
use owo_colors::OwoColorize;
use tvguide_core::ScheduleConfig;
use tvguide_core::document::HtmlQuery;
use tvguide_core::export::{export_to_file, render_feed};
use tvguide_core::extractor::Extractor;
use tvguide_core::normalizer::Normalizer;
use tvguide_core::source::HttpSource;

use crate::render::Render;
use crate::utils::tui::while_fetching;

/// Where the finished feed goes.
pub enum Target {
    File(PathBuf),
    Stdout,
}

pub async fn run(config: &ScheduleConfig, target: Target) -> Result<()> {
    let offset = config.offset()?;
    let today = Utc::now().with_timezone(&offset).date_naive();

    let source = HttpSource::new(config)?;
    let query = HtmlQuery::new(&config.selectors)?;
    let extractor = Extractor::new(config, source, query, today);

    let values = while_fetching(format!("🔎 {}", config.source_url), extractor.discover_days())
        .await
        .context("Could not list schedule days")?;

    // Everything stays in memory until the feed is complete; a failure
    // here leaves no output behind. Days go in discovery order, since the
    // truncation count carries from one day to the next.
    let mut days = Vec::with_capacity(values.len());
    for value in &values {
        let day = while_fetching(format!("📅 {value}"), extractor.extract_day(value))
            .await
            .with_context(|| format!("Could not extract day '{value}'"))?;
        eprintln!("{}", day.render());
        days.push(day);
    }

    Normalizer::new(offset)
        .normalize(&mut days)
        .context("Could not normalize schedule times")?;

    match target {
        Target::File(path) => {
            let rows = export_to_file(&path, &days)?;
            eprintln!(
                "\nWrote {} programs from {} days to {}",
                rows,
                days.len(),
                path.display().green()
            );
        }
        Target::Stdout => {
            let (feed, _) = render_feed(&days)?;
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(&feed).context("Could not write feed to stdout")?;
            stdout.flush()?;
        }
    }

    Ok(())
}
