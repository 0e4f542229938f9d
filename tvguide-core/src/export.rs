//! Tab-separated EPG feed.

use std::io::{self, Write};
use std::path::Path;

use chrono::{DateTime, FixedOffset, SecondsFormat};

use crate::error::{TvGuideError, TvGuideResult};
use crate::schedule::{Day, Program};

const SEPARATOR: char = '\t';

pub const HEADER: [&str; 7] = [
    "datetime_start",
    "datetime_finish",
    "title",
    "description",
    "channel",
    "channel_logo_url",
    "available_archive",
];

/// Quote a field when it contains the separator, a quote or a line break,
/// starts with whitespace, or is the bare `\.` end-of-data marker.
fn needs_quotes(field: &str) -> bool {
    field == "\\."
        || field.starts_with(char::is_whitespace)
        || field.contains(SEPARATOR)
        || field.contains('"')
        || field.contains('\n')
        || field.contains('\r')
}

/// Write a single row followed by `\n`.
pub fn write_row<W: Write, S: AsRef<str>>(w: &mut W, row: &[S]) -> io::Result<()> {
    for (i, cell) in row.iter().enumerate() {
        if i > 0 {
            write!(w, "{SEPARATOR}")?;
        }
        let cell = cell.as_ref();
        if needs_quotes(cell) {
            write!(w, "\"{}\"", cell.replace('"', "\"\""))?;
        } else {
            write!(w, "{cell}")?;
        }
    }
    writeln!(w)
}

fn timestamp(dt: Option<DateTime<FixedOffset>>, program: &Program) -> TvGuideResult<String> {
    dt.map(|dt| dt.to_rfc3339_opts(SecondsFormat::Secs, false))
        .ok_or_else(|| {
            TvGuideError::Export(format!("Program '{}' has not been normalized", program.title))
        })
}

/// Fields of one program in header order.
pub fn program_record(program: &Program) -> TvGuideResult<[String; 7]> {
    Ok([
        timestamp(program.absolute_start, program)?,
        timestamp(program.absolute_end, program)?,
        program.title.clone(),
        program.description.clone(),
        program.channel.clone(),
        program.channel_logo_url.clone(),
        program.available_archive.to_string(),
    ])
}

/// Render the whole feed, header included. Returns the feed and the
/// number of program rows in it.
pub fn render_feed(days: &[Day]) -> TvGuideResult<(Vec<u8>, usize)> {
    let mut buf = Vec::new();
    write_row(&mut buf, &HEADER)?;

    let mut rows = 0;
    for program in days.iter().flat_map(|d| &d.entries) {
        write_row(&mut buf, &program_record(program)?)?;
        rows += 1;
    }

    Ok((buf, rows))
}

/// Write the feed to `path`. The file is only created once the whole feed
/// has rendered.
pub fn export_to_file(path: &Path, days: &[Day]) -> TvGuideResult<usize> {
    let (feed, rows) = render_feed(days)?;

    std::fs::write(path, feed)
        .map_err(|e| TvGuideError::Export(format!("Could not write {}: {e}", path.display())))?;

    Ok(rows)
}
