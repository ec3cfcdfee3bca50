// src/services/link_monitor.rs
//
// Watches datagram activity and notices when the sender goes quiet.
// Time is passed in so the GUI loop (and tests) drive it.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkStatus {
    /// Nothing received since startup, timeout not reached yet.
    Waiting,
    Receiving,
    Silent,
}

impl LinkStatus {
    pub fn label(&self) -> &'static str {
        match self {
            LinkStatus::Waiting => "Waiting for data",
            LinkStatus::Receiving => "Receiving data",
            LinkStatus::Silent => "No data coming from the network",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkTransition {
    Lost,
    Resumed,
}

#[derive(Debug)]
pub struct LinkMonitor {
    timeout: Duration,
    last_seen: Instant,
    status: LinkStatus,
}

impl LinkMonitor {
    pub fn new(timeout: Duration, now: Instant) -> Self {
        Self {
            timeout,
            last_seen: now,
            status: LinkStatus::Waiting,
        }
    }

    pub fn status(&self) -> LinkStatus {
        self.status
    }

    /// Only a recovery from Silent is reported; the first datagram after
    /// startup just moves Waiting to Receiving.
    pub fn record_activity(&mut self, now: Instant) -> Option<LinkTransition> {
        self.last_seen = now;
        let previous = self.status;
        self.status = LinkStatus::Receiving;

        (previous == LinkStatus::Silent).then_some(LinkTransition::Resumed)
    }

    pub fn poll(&mut self, now: Instant) -> Option<LinkTransition> {
        if self.status == LinkStatus::Silent {
            return None;
        }
        if now.saturating_duration_since(self.last_seen) >= self.timeout {
            self.status = LinkStatus::Silent;
            return Some(LinkTransition::Lost);
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TIMEOUT: Duration = Duration::from_secs(5);

    #[test]
    fn test_starts_waiting() {
        let start = Instant::now();
        let mut monitor = LinkMonitor::new(TIMEOUT, start);
        assert_eq!(monitor.status(), LinkStatus::Waiting);
        assert_eq!(monitor.poll(start + Duration::from_secs(1)), None);
        assert_eq!(monitor.status(), LinkStatus::Waiting);
    }

    #[test]
    fn test_silence_without_any_data() {
        let start = Instant::now();
        let mut monitor = LinkMonitor::new(TIMEOUT, start);
        assert_eq!(monitor.poll(start + TIMEOUT), Some(LinkTransition::Lost));
        assert_eq!(monitor.status(), LinkStatus::Silent);
    }

    #[test]
    fn test_activity_keeps_link_alive() {
        let start = Instant::now();
        let mut monitor = LinkMonitor::new(TIMEOUT, start);

        assert_eq!(monitor.record_activity(start + Duration::from_secs(4)), None);
        assert_eq!(monitor.status(), LinkStatus::Receiving);

        // 8s after start but only 4s after the last datagram
        assert_eq!(monitor.poll(start + Duration::from_secs(8)), None);
        assert_eq!(monitor.status(), LinkStatus::Receiving);
    }

    #[test]
    fn test_lost_and_resumed_reported_once() {
        let start = Instant::now();
        let mut monitor = LinkMonitor::new(TIMEOUT, start);
        monitor.record_activity(start);

        let later = start + Duration::from_secs(6);
        assert_eq!(monitor.poll(later), Some(LinkTransition::Lost));
        assert_eq!(monitor.poll(later + Duration::from_secs(1)), None);

        let back = later + Duration::from_secs(2);
        assert_eq!(monitor.record_activity(back), Some(LinkTransition::Resumed));
        assert_eq!(monitor.record_activity(back), None);
        assert_eq!(monitor.status(), LinkStatus::Receiving);
    }

    #[test]
    fn test_clock_going_backwards_is_harmless() {
        let start = Instant::now() + Duration::from_secs(10);
        let mut monitor = LinkMonitor::new(TIMEOUT, start);
        assert_eq!(monitor.poll(start - Duration::from_secs(3)), None);
    }
}
