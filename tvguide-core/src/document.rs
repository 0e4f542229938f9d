//! Tag queries over fetched pages.

use scraper::{ElementRef, Html, Selector};

use crate::config::Selectors;
use crate::error::{TvGuideError, TvGuideResult};

/// Text pulled out of one schedule row, before any time parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRow {
    pub title: String,
    /// e.g. "09:00 AM - 09:30 AM"
    pub time_range: String,
}

/// Structural queries the extractor runs against a page body.
pub trait TagQuery {
    /// Values of the day-selector options, in document order.
    fn day_values(&self, html: &str) -> TvGuideResult<Vec<String>>;

    /// Every schedule row, in document order.
    fn schedule_rows(&self, html: &str) -> TvGuideResult<Vec<RawRow>>;
}

/// CSS-selector queries backed by the scraper crate.
pub struct HtmlQuery {
    day_option: Selector,
    row: Selector,
    title: Selector,
    time_range: Selector,
}

fn compile(selector: &str) -> TvGuideResult<Selector> {
    Selector::parse(selector)
        .map_err(|e| TvGuideError::Document(format!("Invalid selector '{selector}': {e}")))
}

/// Concatenated text of every descendant matching `selector`.
fn text_of(element: &ElementRef, selector: &Selector) -> String {
    element
        .select(selector)
        .flat_map(|el| el.text())
        .collect::<String>()
        .trim()
        .to_string()
}

impl HtmlQuery {
    pub fn new(selectors: &Selectors) -> TvGuideResult<Self> {
        Ok(HtmlQuery {
            day_option: compile(&selectors.day_option)?,
            row: compile(&selectors.row)?,
            title: compile(&selectors.title)?,
            time_range: compile(&selectors.time_range)?,
        })
    }
}

impl TagQuery for HtmlQuery {
    fn day_values(&self, html: &str) -> TvGuideResult<Vec<String>> {
        let document = Html::parse_document(html);

        Ok(document
            .select(&self.day_option)
            .filter_map(|el| el.value().attr("value"))
            .map(|value| value.trim().to_string())
            .collect())
    }

    fn schedule_rows(&self, html: &str) -> TvGuideResult<Vec<RawRow>> {
        let document = Html::parse_document(html);

        Ok(document
            .select(&self.row)
            .map(|row| RawRow {
                title: text_of(&row, &self.title),
                time_range: text_of(&row, &self.time_range),
            })
            .collect())
    }
}
