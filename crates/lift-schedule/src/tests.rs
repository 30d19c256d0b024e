//! Unit tests for lift-schedule.

use std::io::Cursor;

use lift_core::{Floor, Request, RequestId, SimRng, Tick};

use crate::{PassengerGenerator, ReleaseQueue, load_requests_reader};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn req(t: u64, o: u32, d: u32) -> Request {
    Request::new(Tick(t), Floor(o), Floor(d))
}

// ── Loader ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod loader {
    use super::*;

    const SAMPLE: &str = "\
# sample building
10 60
# time origin destination
0 1 5
3 7 2

12 4 9
";

    #[test]
    fn parses_header_and_requests() {
        let file = load_requests_reader(Cursor::new(SAMPLE)).unwrap();
        assert_eq!(file.header.floors, Some(10));
        assert_eq!(file.header.total_ticks, Some(60));
        assert_eq!(file.requests, vec![req(0, 1, 5), req(3, 7, 2), req(12, 4, 9)]);
    }

    #[test]
    fn free_form_header_is_skipped() {
        let text = "elevator test case\n0 1 5\n";
        let file = load_requests_reader(Cursor::new(text)).unwrap();
        assert_eq!(file.header.floors, None);
        assert_eq!(file.header.total_ticks, None);
        assert_eq!(file.requests, vec![req(0, 1, 5)]);
    }

    #[test]
    fn irregular_whitespace_is_tolerated() {
        let text = "10\n  2   3\t8  \n";
        let file = load_requests_reader(Cursor::new(text)).unwrap();
        assert_eq!(file.requests, vec![req(2, 3, 8)]);
    }

    #[test]
    fn indented_comment_is_skipped() {
        let text = "10\n   # not a request\n1 2 3\n";
        let file = load_requests_reader(Cursor::new(text)).unwrap();
        assert_eq!(file.requests.len(), 1);
    }

    #[test]
    fn header_only_file_is_empty() {
        let file = load_requests_reader(Cursor::new("10 5\n")).unwrap();
        assert!(file.requests.is_empty());
    }

    #[test]
    fn short_line_reports_line_number() {
        let text = "10\n0 1 5\n4 2\n";
        let err = load_requests_reader(Cursor::new(text)).unwrap_err();
        assert!(err.to_string().contains("line 3"), "{err}");
    }

    #[test]
    fn non_numeric_field_is_error() {
        let text = "10\n0 one 5\n";
        assert!(load_requests_reader(Cursor::new(text)).is_err());
    }

    #[test]
    fn floor_zero_is_error() {
        let text = "10\n0 0 5\n";
        assert!(load_requests_reader(Cursor::new(text)).is_err());
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = crate::load_requests(std::path::Path::new("/nonexistent/requests.txt")).unwrap_err();
        assert!(matches!(err, crate::ScheduleError::Io(_)));
    }
}

// ── ReleaseQueue ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod release_queue {
    use super::*;

    #[test]
    fn indexes_by_request_time() {
        let requests = vec![req(0, 1, 5), req(4, 2, 3), req(0, 6, 1)];
        let queue = ReleaseQueue::build_from_requests(&requests);
        assert_eq!(queue.len(), 3);
        assert_eq!(queue.tick_count(), 2);
        assert_eq!(queue.due(Tick(0)), &[RequestId(0), RequestId(2)]);
        assert_eq!(queue.due(Tick(4)), &[RequestId(1)]);
        assert!(queue.due(Tick(1)).is_empty());
    }

    #[test]
    fn due_does_not_drain() {
        let requests = vec![req(2, 1, 5)];
        let queue = ReleaseQueue::build_from_requests(&requests);
        assert_eq!(queue.due(Tick(2)).len(), 1);
        assert_eq!(queue.due(Tick(2)).len(), 1);
    }

    #[test]
    fn last_tick() {
        let queue = ReleaseQueue::build_from_requests(&[req(3, 1, 2), req(9, 2, 1)]);
        assert_eq!(queue.last_tick(), Some(Tick(9)));
        assert_eq!(ReleaseQueue::new().last_tick(), None);
        assert!(ReleaseQueue::new().is_empty());
    }
}

// ── PassengerGenerator ────────────────────────────────────────────────────────

#[cfg(test)]
mod generator {
    use super::*;

    #[test]
    fn generates_valid_sorted_requests() {
        let g = PassengerGenerator::new(10, 200, 50);
        let requests = g.generate(&mut SimRng::new(42)).unwrap();
        assert_eq!(requests.len(), 200);
        for r in &requests {
            assert_ne!(r.origin(), r.destination());
            assert!(r.origin().within(10) && r.destination().within(10));
            assert!(r.request_time() < Tick(50));
        }
        assert!(requests.windows(2).all(|w| w[0].request_time() <= w[1].request_time()));
    }

    #[test]
    fn same_seed_same_requests() {
        let g = PassengerGenerator::new(8, 30, 20);
        let a = g.generate(&mut SimRng::new(9)).unwrap();
        let b = g.generate(&mut SimRng::new(9)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn single_floor_building_rejected() {
        let g = PassengerGenerator::new(1, 5, 10);
        assert!(g.generate(&mut SimRng::new(1)).is_err());
    }

    #[test]
    fn empty_window_rejected() {
        let g = PassengerGenerator::new(5, 5, 0);
        assert!(g.generate(&mut SimRng::new(1)).is_err());
    }

    #[test]
    fn zero_passengers_ok() {
        let g = PassengerGenerator::new(5, 0, 0);
        assert!(g.generate(&mut SimRng::new(1)).unwrap().is_empty());
    }
}
