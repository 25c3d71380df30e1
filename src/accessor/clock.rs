use chrono::{DateTime, Utc};

/// Source of the current instant.
pub(crate) trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock pinned to an instant, advanced by hand.
#[cfg(test)]
#[derive(Debug)]
pub(crate) struct FixedClock {
    now: std::sync::Mutex<DateTime<Utc>>,
}

#[cfg(test)]
impl FixedClock {
    pub(crate) fn new(now: DateTime<Utc>) -> Self {
        FixedClock {
            now: std::sync::Mutex::new(now),
        }
    }

    pub(crate) fn at(rfc3339: &str) -> Self {
        Self::new(rfc3339.parse().expect("valid RFC 3339 instant"))
    }

    pub(crate) fn advance(&self, by: chrono::TimeDelta) {
        let mut now = self.now.lock().expect("clock lock");
        *now += by;
    }
}

#[cfg(test)]
impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().expect("clock lock")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_clock_tracks_utc_now() {
        let before = Utc::now();
        let now = SystemClock.now();
        let after = Utc::now();
        assert!(before <= now && now <= after);
    }

    #[test]
    fn fixed_clock_advances() {
        let clock = FixedClock::at("2024-03-05T10:00:00Z");
        clock.advance(chrono::TimeDelta::minutes(90));
        assert_eq!(clock.now().to_rfc3339(), "2024-03-05T11:30:00+00:00");
    }
}
