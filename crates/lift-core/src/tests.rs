//! Unit tests for lift-core primitives.

#[cfg(test)]
mod ids {
    use crate::RequestId;

    #[test]
    fn index_roundtrip() {
        let id = RequestId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(RequestId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn display() {
        assert_eq!(RequestId(7).to_string(), "RequestId(7)");
    }
}

#[cfg(test)]
mod floor {
    use crate::{Direction, Floor};

    #[test]
    fn zero_floor_rejected() {
        assert!(Floor::new(0).is_err());
        assert_eq!(Floor::new(3).unwrap(), Floor(3));
    }

    #[test]
    fn distance_is_symmetric() {
        assert_eq!(Floor(2).distance(Floor(7)), 5);
        assert_eq!(Floor(7).distance(Floor(2)), 5);
        assert_eq!(Floor(4).distance(Floor(4)), 0);
    }

    #[test]
    fn step_follows_direction() {
        assert_eq!(Floor(3).step(Direction::Up), Floor(4));
        assert_eq!(Floor(3).step(Direction::Down), Floor(2));
        assert_eq!(Floor(3).step(Direction::Stopped), Floor(3));
    }

    #[test]
    fn within_bounds() {
        assert!(Floor(1).within(10));
        assert!(Floor(10).within(10));
        assert!(!Floor(11).within(10));
        assert!(!Floor(0).within(10));
    }

    #[test]
    fn toward_prefers_down_only_when_not_above() {
        assert_eq!(Direction::toward(Floor(3), Floor(5)), Direction::Up);
        assert_eq!(Direction::toward(Floor(3), Floor(1)), Direction::Down);
    }

    #[test]
    fn ahead_is_strict() {
        assert!(Direction::Up.is_ahead(Floor(3), Floor(4)));
        assert!(!Direction::Up.is_ahead(Floor(3), Floor(3)));
        assert!(Direction::Down.is_ahead(Floor(3), Floor(2)));
        assert!(!Direction::Down.is_ahead(Floor(3), Floor(5)));
        assert!(!Direction::Stopped.is_ahead(Floor(3), Floor(9)));
    }

    #[test]
    fn reverse() {
        assert_eq!(Direction::Up.reverse(), Direction::Down);
        assert_eq!(Direction::Down.reverse(), Direction::Up);
        assert_eq!(Direction::Stopped.reverse(), Direction::Stopped);
    }
}

#[cfg(test)]
mod request {
    use crate::{Floor, Request, Tick};

    fn req() -> Request {
        Request::new(Tick(3), Floor(2), Floor(6))
    }

    #[test]
    fn fresh_request_is_waiting_for_origin() {
        let r = req();
        assert!(!r.is_boarded());
        assert!(!r.is_serviced());
        assert_eq!(r.arrival_time(), None);
        assert_eq!(r.requested_floor(), Some(Floor(2)));
        assert!(r.is_going_up());
    }

    #[test]
    fn boarded_request_points_at_destination() {
        let mut r = req();
        r.mark_boarded(Tick(5));
        assert!(r.is_boarded());
        assert_eq!(r.requested_floor(), Some(Floor(6)));
        assert_eq!(r.wait_ticks(), Some(2));
    }

    #[test]
    fn serviced_request_has_no_floor_of_interest() {
        let mut r = req();
        r.mark_boarded(Tick(5));
        assert!(r.mark_serviced(Tick(10)));
        assert!(r.is_serviced());
        assert_eq!(r.requested_floor(), None);
        assert_eq!(r.journey_ticks(), Some(7));
    }

    #[test]
    fn cannot_service_before_boarding() {
        let mut r = req();
        assert!(!r.mark_serviced(Tick(4)));
        assert!(!r.is_serviced());
    }

    #[test]
    fn arrival_time_set_once() {
        let mut r = req();
        r.mark_boarded(Tick(4));
        assert!(r.mark_serviced(Tick(8)));
        assert!(!r.mark_serviced(Tick(9)));
        assert_eq!(r.arrival_time(), Some(Tick(8)));
    }

    #[test]
    fn boarding_tick_kept_on_repeat() {
        let mut r = req();
        r.mark_boarded(Tick(4));
        r.mark_boarded(Tick(6));
        assert_eq!(r.boarded_at(), Some(Tick(4)));
    }
}

#[cfg(test)]
mod config {
    use crate::{PolicyKind, SimConfig, Tick};

    #[test]
    fn default_is_valid() {
        let cfg = SimConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.end_tick(), Tick(100));
    }

    #[test]
    fn zero_floors_rejected() {
        let cfg = SimConfig { floors: 0, ..SimConfig::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn policy_parsing() {
        assert_eq!("nearest".parse::<PolicyKind>().unwrap(), PolicyKind::Nearest);
        assert_eq!("SCAN".parse::<PolicyKind>().unwrap(), PolicyKind::Sweep);
        assert!("random".parse::<PolicyKind>().is_err());
    }
}

#[cfg(test)]
mod rng {
    use crate::SimRng;

    #[test]
    fn same_seed_same_sequence() {
        let mut a = SimRng::new(7);
        let mut b = SimRng::new(7);
        let xs: Vec<u32> = (0..16).map(|_| a.gen_range(1..=10)).collect();
        let ys: Vec<u32> = (0..16).map(|_| b.gen_range(1..=10)).collect();
        assert_eq!(xs, ys);
    }

    #[test]
    fn gen_range_stays_in_bounds() {
        let mut rng = SimRng::new(1);
        for _ in 0..1_000 {
            let v: u32 = rng.gen_range(1..=10);
            assert!((1..=10).contains(&v));
        }
    }
}

#[cfg(test)]
mod time {
    use crate::{Direction, Floor, Tick};

    #[test]
    fn arithmetic() {
        let mut t = Tick(4);
        assert_eq!(t.next(), Tick(5));
        assert_eq!(t + 3, Tick(7));
        t += 2;
        assert_eq!(t, Tick(6));
        assert_eq!(Tick(9) - Tick(4), 5);
        assert_eq!(Tick(2).since(Tick(5)), 0);
        assert_eq!(Tick(3).to_string(), "T3");
        assert_eq!(format!("{:>4}|{:<3}|{:>5}", Tick(3), Floor(2), Direction::Up), "  T3|F2 |   up");
    }
}
