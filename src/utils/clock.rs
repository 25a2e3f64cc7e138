use std::{cell::Cell, ops::Deref};

use chrono::{DateTime, Duration, Utc};

/// Represents an entity responsible for providing dates across application. This allows balance
/// settlement to be tested without waiting for real time to pass.
#[cfg_attr(test, mockall::automock)]
pub trait Clock {
    fn time(&self) -> DateTime<Utc>;
}

pub struct DefaultClock;

impl Clock for DefaultClock {
    fn time(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock that only moves when told to. Used for deterministic scenarios.
#[derive(Debug)]
pub struct ManualClock {
    now: Cell<DateTime<Utc>>,
}

impl ManualClock {
    pub fn new(start: DateTime<Utc>) -> Self {
        Self {
            now: Cell::new(start),
        }
    }

    pub fn advance(&self, duration: Duration) {
        self.now.set(self.now.get() + duration);
    }
}

impl Clock for ManualClock {
    fn time(&self) -> DateTime<Utc> {
        self.now.get()
    }
}

impl<T: Deref> Clock for T
where
    T::Target: Clock,
{
    fn time(&self) -> DateTime<Utc> {
        self.deref().time()
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone, Utc};

    use super::{Clock, ManualClock};

    #[test]
    fn manual_clock_moves_only_on_advance() {
        let start = Utc.with_ymd_and_hms(2024, 4, 5, 12, 0, 0).unwrap();
        let clock = ManualClock::new(start);
        assert_eq!(clock.time(), start);
        assert_eq!(clock.time(), start);

        clock.advance(Duration::minutes(90));
        assert_eq!(clock.time(), start + Duration::minutes(90));
    }
}
