/// Debounce window over a stream of event timestamps.
///
/// Each `record_event` pushes the deadline to `now + quiet_ms`; `poll` fires
/// at most once per armed deadline, and only once the quiet period has
/// elapsed with no further events. Timestamps are caller-supplied
/// milliseconds; the machine never reads a clock itself.
#[derive(Debug, Clone, PartialEq)]
pub struct QuietPeriod {
    quiet_ms: f64,
    deadline_ms: Option<f64>,
}

impl QuietPeriod {
    pub fn new(quiet_ms: f64) -> Self {
        Self {
            quiet_ms,
            deadline_ms: None,
        }
    }

    /// An event arrived; postpone the pending fire.
    pub fn record_event(&mut self, now_ms: f64) {
        self.deadline_ms = Some(now_ms + self.quiet_ms);
    }

    /// True exactly once per quiet period, when the deadline has passed.
    pub fn poll(&mut self, now_ms: f64) -> bool {
        match self.deadline_ms {
            Some(deadline) if now_ms >= deadline => {
                self.deadline_ms = None;
                true
            }
            _ => false,
        }
    }

    pub fn is_armed(&self) -> bool {
        self.deadline_ms.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unarmed_machine_never_fires() {
        let mut quiet = QuietPeriod::new(500.0);
        assert!(!quiet.poll(0.0));
        assert!(!quiet.poll(1e9));
    }

    #[test]
    fn fires_after_the_quiet_period() {
        let mut quiet = QuietPeriod::new(500.0);
        quiet.record_event(1000.0);
        assert!(!quiet.poll(1499.0));
        assert!(quiet.poll(1500.0));
        assert!(!quiet.is_armed());
    }

    #[test]
    fn each_event_postpones_the_fire() {
        let mut quiet = QuietPeriod::new(500.0);
        quiet.record_event(0.0);
        quiet.record_event(300.0);
        quiet.record_event(600.0);
        assert!(!quiet.poll(900.0));
        assert!(quiet.poll(1100.0));
    }

    #[test]
    fn rearms_after_firing() {
        let mut quiet = QuietPeriod::new(500.0);
        quiet.record_event(0.0);
        assert!(quiet.poll(500.0));
        quiet.record_event(600.0);
        assert!(quiet.poll(1100.0));
    }
}
