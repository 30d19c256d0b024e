//! `RunOutputObserver<W>` — bridges `DispatchObserver` to an `OutputWriter`.

use lift_core::{Request, RequestId, Tick};
use lift_dispatch::{CabinView, DispatchObserver};

use crate::row::{RequestRow, TickRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`DispatchObserver`] that writes a tick row after every loop step and
/// the request table when the run ends.
///
/// Observer callbacks cannot fail, so the first write error is kept and
/// handed out by [`take_error`][Self::take_error] once `run_with` returns.
/// The request table is written on every `on_run_end`, so use one observer
/// per run.
pub struct RunOutputObserver<W: OutputWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> RunOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// Take the stored write error, if any.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> DispatchObserver for RunOutputObserver<W> {
    fn on_tick_end(&mut self, view: &CabinView<'_>) {
        let result = self.writer.write_tick(&TickRow::from_view(view));
        self.store_err(result);
    }

    fn on_run_end(&mut self, _final_tick: Tick, requests: &[Request]) {
        let rows: Vec<RequestRow> = requests
            .iter()
            .enumerate()
            .map(|(i, r)| RequestRow::from_request(RequestId(i as u32), r))
            .collect();
        let result = self.writer.write_requests(&rows);
        self.store_err(result);

        let result = self.writer.finish();
        self.store_err(result);
    }
}
