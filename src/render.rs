//! Colored terminal rendering for schedule types.

use owo_colors::OwoColorize;
use tvguide_core::Day;

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for Day {
    fn render(&self) -> String {
        let count = match self.entries.len() {
            0 => "no programs".yellow().to_string(),
            1 => "1 program".to_string(),
            n => format!("{n} programs"),
        };

        if self.is_today {
            format!("📅 {} {} {}", self.display, "(today)".green(), count.dimmed())
        } else {
            format!("📅 {} {}", self.display, count.dimmed())
        }
    }
}
