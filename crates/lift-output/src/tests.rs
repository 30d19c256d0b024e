//! Tests for lift-output.

use lift_core::{Floor, Request, Tick};
use lift_dispatch::{DispatchEngine, Elevator};

fn req(t: u64, o: u32, d: u32) -> Request {
    Request::new(Tick(t), Floor(o), Floor(d))
}

fn tmp() -> tempfile::TempDir {
    tempfile::tempdir().expect("create temp dir")
}

fn read_rows(path: &std::path::Path) -> (Vec<String>, Vec<csv::StringRecord>) {
    let mut rdr = csv::Reader::from_path(path).unwrap();
    let headers = rdr.headers().unwrap().iter().map(str::to_owned).collect();
    let rows = rdr.records().map(|r| r.unwrap()).collect();
    (headers, rows)
}

#[cfg(test)]
mod csv_tests {
    use super::*;
    use crate::csv::{CsvWriter, REQUESTS_FILE, TICKS_FILE};
    use crate::row::{RequestRow, TickRow};
    use crate::writer::OutputWriter;

    #[test]
    fn files_created_with_headers() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        let (headers, rows) = read_rows(&dir.path().join(REQUESTS_FILE));
        assert_eq!(
            headers,
            ["request_id", "request_time", "origin", "destination", "boarded_at", "arrival_time"]
        );
        assert!(rows.is_empty());

        let (headers, _) = read_rows(&dir.path().join(TICKS_FILE));
        assert_eq!(headers, ["tick", "floor", "direction", "waiting", "riding"]);
    }

    #[test]
    fn creates_missing_directory() {
        let dir = tmp();
        let nested = dir.path().join("a").join("b");
        let _w = CsvWriter::new(&nested).unwrap();
        assert!(nested.join(TICKS_FILE).exists());
    }

    #[test]
    fn missing_ticks_written_as_empty_fields() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        let rows = [
            RequestRow {
                request_id:   0,
                request_time: 2,
                origin:       3,
                destination:  7,
                boarded_at:   Some(4),
                arrival_time: None,
            },
            RequestRow {
                request_id:   1,
                request_time: 9,
                origin:       1,
                destination:  2,
                boarded_at:   None,
                arrival_time: None,
            },
        ];
        w.write_requests(&rows).unwrap();
        w.finish().unwrap();

        let (_, rows) = read_rows(&dir.path().join(REQUESTS_FILE));
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[0][4], "4");
        assert_eq!(&rows[0][5], "");
        assert_eq!(&rows[1][4], "");
    }

    #[test]
    fn tick_row_written() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_tick(&TickRow { tick: 3, floor: 4, direction: "up", waiting: 1, riding: 2 })
            .unwrap();
        w.finish().unwrap();

        let (_, rows) = read_rows(&dir.path().join(TICKS_FILE));
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].iter().collect::<Vec<_>>(), ["3", "4", "up", "1", "2"]);
    }

    #[test]
    fn finish_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }
}

#[cfg(test)]
mod observer_tests {
    use super::*;
    use crate::csv::{CsvWriter, REQUESTS_FILE, TICKS_FILE};
    use crate::observer::RunOutputObserver;
    use crate::row::{RequestRow, TickRow};
    use crate::writer::OutputWriter;
    use crate::{OutputError, OutputResult};

    #[test]
    fn full_run_to_csv() {
        let dir = tmp();
        let mut engine = DispatchEngine::new(10, vec![req(0, 1, 5)]).unwrap();
        let mut obs = RunOutputObserver::new(CsvWriter::new(dir.path()).unwrap());
        engine.run_with(20, &mut obs);
        assert!(obs.take_error().is_none());

        // Four moves (the last with a dwell), then fifteen idle ticks.
        let (_, ticks) = read_rows(&dir.path().join(TICKS_FILE));
        assert_eq!(ticks.len(), 19);
        assert_eq!(ticks[0].iter().collect::<Vec<_>>(), ["1", "2", "up", "0", "1"]);
        assert_eq!(ticks[3].iter().collect::<Vec<_>>(), ["5", "5", "stopped", "0", "0"]);
        assert_eq!(&ticks[18][0], "20");

        let (_, requests) = read_rows(&dir.path().join(REQUESTS_FILE));
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].iter().collect::<Vec<_>>(), ["0", "0", "1", "5", "0", "4"]);
    }

    /// Fails every tick write; counts finish calls.
    #[derive(Default)]
    struct Failing {
        finished: usize,
        requests: Vec<RequestRow>,
    }

    impl OutputWriter for Failing {
        fn write_requests(&mut self, rows: &[RequestRow]) -> OutputResult<()> {
            self.requests.extend_from_slice(rows);
            Ok(())
        }

        fn write_tick(&mut self, row: &TickRow) -> OutputResult<()> {
            Err(OutputError::Io(std::io::Error::other(format!("tick {}", row.tick))))
        }

        fn finish(&mut self) -> OutputResult<()> {
            self.finished += 1;
            Ok(())
        }
    }

    #[test]
    fn first_error_kept() {
        let mut engine = DispatchEngine::new(4, vec![req(0, 2, 1)]).unwrap();
        let mut obs = RunOutputObserver::new(Failing::default());
        engine.run_with(6, &mut obs);

        let err = obs.take_error().expect("tick writes fail");
        assert!(err.to_string().contains("tick 2"), "{err}");
        assert!(obs.take_error().is_none());

        let writer = obs.into_writer();
        assert_eq!(writer.finished, 1);
        assert_eq!(writer.requests.len(), 1);
        assert_eq!(writer.requests[0].arrival_time, Some(3));
    }
}

#[cfg(test)]
mod report_tests {
    use super::*;
    use crate::report::RunReport;

    #[test]
    fn counts_every_state() {
        // Served, riding, waiting and not-yet-visible after five ticks.
        let requests = vec![req(0, 1, 2), req(0, 1, 9), req(0, 10, 1), req(50, 3, 4)];
        let mut engine = DispatchEngine::new(10, requests).unwrap();
        engine.run(5);

        let report = RunReport::from_elevator(&engine);
        assert_eq!(report.total, 4);
        assert_eq!(report.served, 1);
        assert_eq!(report.riding, 1);
        assert_eq!(report.waiting, 1);
        assert_eq!(report.pending, 1);
        assert!(!report.all_served());
    }

    #[test]
    fn timings_over_served_requests() {
        // A: wait 0, journey 4.  B: boards at T4, arrives T9.
        let requests = vec![req(0, 1, 5), req(0, 5, 1)];
        let mut engine = DispatchEngine::new(10, requests).unwrap();
        engine.run(40);

        let report = RunReport::from_elevator(&engine);
        assert!(report.all_served());
        assert_eq!(report.wait.count, 2);
        assert_eq!(report.wait.max, 4);
        assert_eq!(report.wait.mean, 2.0);
        assert_eq!(report.journey.count, 2);
        assert_eq!(report.journey.max, 9);
        assert_eq!(report.journey.mean, 6.5);
    }

    #[test]
    fn empty_run_reports_zeroes() {
        let mut engine = DispatchEngine::new(3, vec![]).unwrap();
        engine.run(3);
        let report = RunReport::from_elevator(&engine);
        assert_eq!(report.total, 0);
        assert!(report.all_served());
        assert_eq!(report.wait.mean, 0.0);
        assert!(report.to_string().contains("run ended at T3"));
    }
}
