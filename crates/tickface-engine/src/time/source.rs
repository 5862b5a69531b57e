use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};

use chrono::{DateTime, Utc};

use crate::error::ClockError;

/// Port for reading the current instant.
///
/// Queried once per tick. Implementations must fail with
/// [`ClockError::InvalidInput`] rather than invent a time.
pub trait TimeSource: Send + Sync {
    fn now(&self) -> Result<DateTime<Utc>, ClockError>;
}

/// The operating system's wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl SystemClock {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl TimeSource for SystemClock {
    fn now(&self) -> Result<DateTime<Utc>, ClockError> {
        let since_epoch = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_err(|_| ClockError::invalid("system clock reads earlier than the Unix epoch"))?;
        let millis = i64::try_from(since_epoch.as_millis())
            .map_err(|_| ClockError::invalid("system clock is beyond the representable range"))?;
        DateTime::<Utc>::from_timestamp_millis(millis)
            .ok_or_else(|| ClockError::invalid("system clock is beyond the representable range"))
    }
}

/// Always returns the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(DateTime<Utc>);

impl FixedClock {
    #[must_use]
    pub const fn new(at: DateTime<Utc>) -> Self {
        Self(at)
    }
}

impl TimeSource for FixedClock {
    fn now(&self) -> Result<DateTime<Utc>, ClockError> {
        Ok(self.0)
    }
}

/// Replays a fixed list of instants, one per query, then fails.
///
/// Useful for driving a clock through a rollover or a dropped tick.
#[derive(Debug, Default)]
pub struct ScriptedClock {
    remaining: Mutex<VecDeque<DateTime<Utc>>>,
}

impl ScriptedClock {
    pub fn new(instants: impl IntoIterator<Item = DateTime<Utc>>) -> Self {
        Self { remaining: Mutex::new(instants.into_iter().collect()) }
    }

    /// Number of instants not yet handed out.
    pub fn remaining(&self) -> usize {
        self.remaining.lock().map(|q| q.len()).unwrap_or(0)
    }
}

impl TimeSource for ScriptedClock {
    fn now(&self) -> Result<DateTime<Utc>, ClockError> {
        let mut queue = self
            .remaining
            .lock()
            .map_err(|_| ClockError::invalid("scripted clock lock poisoned"))?;
        queue
            .pop_front()
            .ok_or_else(|| ClockError::invalid("scripted clock exhausted"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn system_clock_is_after_epoch() {
        let now = SystemClock::new().now().unwrap();
        assert!(now.timestamp() > 0);
    }

    #[test]
    fn fixed_clock_repeats() {
        let at = Utc.with_ymd_and_hms(2030, 1, 1, 0, 0, 0).unwrap();
        let clock = FixedClock::new(at);
        assert_eq!(clock.now().unwrap(), at);
        assert_eq!(clock.now().unwrap(), at);
    }

    #[test]
    fn scripted_clock_replays_then_fails() {
        let a = Utc.with_ymd_and_hms(2030, 1, 1, 0, 0, 58).unwrap();
        let b = Utc.with_ymd_and_hms(2030, 1, 1, 0, 1, 1).unwrap();
        let clock = ScriptedClock::new([a, b]);

        assert_eq!(clock.now().unwrap(), a);
        assert_eq!(clock.remaining(), 1);
        assert_eq!(clock.now().unwrap(), b);
        assert_eq!(
            clock.now(),
            Err(ClockError::InvalidInput { reason: "scripted clock exhausted".into() })
        );
    }
}
