//! Request-file loader.
//!
//! # File format
//!
//! Whitespace-separated text.  Lines starting with `#` are comments and blank
//! lines are ignored.  The first remaining line is a metadata line; every line
//! after it is one request:
//!
//! ```text
//! # floors ticks
//! 10 60
//! # time origin destination
//! 0 1 5
//! 3 7 2
//! ```
//!
//! The metadata line is free-form.  When its first two fields parse as
//! integers they are exposed as [`FileHeader`] hints (floor count, run
//! length) which the driver uses as defaults; otherwise it is skipped.

use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use log::debug;

use lift_core::{Floor, Request, Tick};

use crate::{ScheduleError, ScheduleResult};

// ── Public types ──────────────────────────────────────────────────────────────

/// Optional hints read from the metadata line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FileHeader {
    pub floors:      Option<u32>,
    pub total_ticks: Option<u64>,
}

/// A parsed request file.
#[derive(Clone, Debug, Default)]
pub struct RequestFile {
    pub header:   FileHeader,
    pub requests: Vec<Request>,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a request file from disk.
pub fn load_requests(path: &Path) -> ScheduleResult<RequestFile> {
    let file = std::fs::File::open(path).map_err(ScheduleError::Io)?;
    let parsed = load_requests_reader(file)?;
    debug!("loaded {} requests from {}", parsed.requests.len(), path.display());
    Ok(parsed)
}

/// Like [`load_requests`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or for embedded scenarios.
pub fn load_requests_reader<R: Read>(reader: R) -> ScheduleResult<RequestFile> {
    let mut csv_reader = ReaderBuilder::new()
        .delimiter(b' ')
        .has_headers(false)
        .flexible(true)
        .comment(Some(b'#'))
        .trim(Trim::All)
        .from_reader(reader);

    let mut out = RequestFile::default();
    let mut seen_header = false;

    for result in csv_reader.records() {
        let record = result.map_err(|e| ScheduleError::Parse(e.to_string()))?;
        let line = line_of(&record);
        let fields = tokens(&record);

        // Blank, or a comment that did not start in column 0.
        if fields.is_empty() || fields[0].starts_with('#') {
            continue;
        }

        if !seen_header {
            seen_header = true;
            out.header = parse_header(&fields);
            continue;
        }

        out.requests.push(parse_request(&fields, line)?);
    }

    Ok(out)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Split a record into whitespace-free tokens.  Runs of spaces produce empty
/// csv fields and tabs are not delimiters, so both are normalised here.
fn tokens(record: &StringRecord) -> Vec<&str> {
    record.iter().flat_map(str::split_whitespace).collect()
}

fn line_of(record: &StringRecord) -> u64 {
    record.position().map_or(0, |p| p.line())
}

fn parse_header(fields: &[&str]) -> FileHeader {
    FileHeader {
        floors:      fields.first().and_then(|f| f.parse().ok()),
        total_ticks: fields.get(1).and_then(|f| f.parse().ok()),
    }
}

fn parse_request(fields: &[&str], line: u64) -> ScheduleResult<Request> {
    let [time, origin, destination] = match fields {
        [t, o, d, ..] => [*t, *o, *d],
        _ => {
            return Err(ScheduleError::Parse(format!(
                "line {line}: expected \"time origin destination\", got {:?}",
                fields.join(" ")
            )));
        }
    };

    let time: u64 = parse_field(time, "time", line)?;
    let origin = Floor::new(parse_field(origin, "origin", line)?)
        .map_err(|e| ScheduleError::Parse(format!("line {line}: {e}")))?;
    let destination = Floor::new(parse_field(destination, "destination", line)?)
        .map_err(|e| ScheduleError::Parse(format!("line {line}: {e}")))?;

    Ok(Request::new(Tick(time), origin, destination))
}

fn parse_field<T: std::str::FromStr>(s: &str, what: &str, line: u64) -> ScheduleResult<T> {
    s.parse().map_err(|_| {
        ScheduleError::Parse(format!("line {line}: invalid {what} {s:?}"))
    })
}
