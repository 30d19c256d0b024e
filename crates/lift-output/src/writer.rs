//! The `OutputWriter` trait implemented by backend writers.

use crate::{OutputResult, RequestRow, TickRow};

/// A sink for run output.
///
/// [`RunOutputObserver`][crate::RunOutputObserver] drives a writer from the
/// engine's callbacks and keeps the first error for
/// [`take_error`][crate::RunOutputObserver::take_error].
pub trait OutputWriter {
    /// Write one row per request.
    fn write_requests(&mut self, rows: &[RequestRow]) -> OutputResult<()>;

    /// Write one tick row.
    fn write_tick(&mut self, row: &TickRow) -> OutputResult<()>;

    /// Flush and close all underlying handles.  Idempotent.
    fn finish(&mut self) -> OutputResult<()>;
}
