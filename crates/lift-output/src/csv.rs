//! CSV output backend.
//!
//! Creates two files in the output directory:
//! - `requests.csv`
//! - `ticks.csv`

use std::fs::{self, File};
use std::path::Path;

use csv::Writer;
use log::debug;

use crate::writer::OutputWriter;
use crate::{OutputResult, RequestRow, TickRow};

pub const REQUESTS_FILE: &str = "requests.csv";
pub const TICKS_FILE: &str = "ticks.csv";

/// Writes run output to two CSV files.
pub struct CsvWriter {
    requests: Writer<File>,
    ticks:    Writer<File>,
    finished: bool,
}

impl CsvWriter {
    /// Create `dir` if needed, open both files and write their header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        fs::create_dir_all(dir)?;

        let mut requests = Writer::from_path(dir.join(REQUESTS_FILE))?;
        requests.write_record([
            "request_id", "request_time", "origin", "destination", "boarded_at", "arrival_time",
        ])?;

        let mut ticks = Writer::from_path(dir.join(TICKS_FILE))?;
        ticks.write_record(["tick", "floor", "direction", "waiting", "riding"])?;

        debug!("writing CSV output to {}", dir.display());
        Ok(Self { requests, ticks, finished: false })
    }
}

fn opt(tick: Option<u64>) -> String {
    tick.map(|t| t.to_string()).unwrap_or_default()
}

impl OutputWriter for CsvWriter {
    fn write_requests(&mut self, rows: &[RequestRow]) -> OutputResult<()> {
        for row in rows {
            self.requests.write_record(&[
                row.request_id.to_string(),
                row.request_time.to_string(),
                row.origin.to_string(),
                row.destination.to_string(),
                opt(row.boarded_at),
                opt(row.arrival_time),
            ])?;
        }
        Ok(())
    }

    fn write_tick(&mut self, row: &TickRow) -> OutputResult<()> {
        self.ticks.write_record(&[
            row.tick.to_string(),
            row.floor.to_string(),
            row.direction.to_owned(),
            row.waiting.to_string(),
            row.riding.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.requests.flush()?;
        self.ticks.flush()?;
        Ok(())
    }
}
