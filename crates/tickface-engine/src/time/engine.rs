use chrono::{DateTime, Utc};

use crate::error::ClockError;

use super::angles::AngleSet;
use super::continuity::{ContinuityState, RolloverPolicy};
use super::digital::format_digital;
use super::fields::{ClockFields, ClockMode};
use super::source::TimeSource;

/// Engine configuration.
///
/// The three classic widget flavors (local, UTC, UTC with continuity) are
/// just different values of this struct.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct EngineConfig {
    pub mode: ClockMode,
    /// Track full turns so returned angles never decrease across a rollover.
    pub continuity: bool,
    pub policy: RolloverPolicy,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            mode: ClockMode::Utc,
            continuity: true,
            policy: RolloverPolicy::Threshold,
        }
    }
}

/// Everything a renderer needs for one tick.
#[derive(Debug, Clone, PartialEq)]
pub struct ClockReading {
    pub mode: ClockMode,
    pub fields: ClockFields,
    /// Angles before any continuity offset, each in `[0, 360)`.
    pub base: AngleSet,
    /// Angles to render. Equal to `base` when continuity is off.
    pub angles: AngleSet,
    /// `HH:MM:SS`, read from the same fields as the angles.
    pub digital: String,
}

/// Evaluates one timestamp.
///
/// `state` is the continuity state from the previous call (or a fresh
/// [`ContinuityState::new`] on the first one); pass `None` to disable
/// continuity. The updated state is returned alongside the reading.
pub fn evaluate(
    timestamp: &DateTime<Utc>,
    mode: ClockMode,
    policy: RolloverPolicy,
    state: Option<ContinuityState>,
) -> (ClockReading, Option<ContinuityState>) {
    let fields = mode.fields(timestamp);
    let base = AngleSet::from_fields(fields);

    let (angles, state) = match state {
        Some(mut state) => {
            let offsets = state.observe(fields, policy);
            (base.offset_by(offsets), Some(state))
        }
        None => (base, None),
    };

    let reading = ClockReading {
        mode,
        fields,
        base,
        angles,
        digital: format_digital(fields),
    };
    (reading, state)
}

/// A running clock's angle engine: configuration plus the continuity state it
/// owns for its lifetime.
#[derive(Debug, Clone)]
pub struct ClockAngleEngine {
    config: EngineConfig,
    continuity: Option<ContinuityState>,
}

impl ClockAngleEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            continuity: config.continuity.then(ContinuityState::new),
        }
    }

    #[inline]
    pub fn config(&self) -> EngineConfig {
        self.config
    }

    /// Current continuity state, `None` when continuity is disabled.
    #[inline]
    pub fn continuity(&self) -> Option<&ContinuityState> {
        self.continuity.as_ref()
    }

    /// Forgets every previous sample and accumulated turn.
    pub fn reset(&mut self) {
        self.continuity = self.config.continuity.then(ContinuityState::new);
    }

    pub fn evaluate(&mut self, timestamp: &DateTime<Utc>) -> ClockReading {
        let (reading, state) =
            evaluate(timestamp, self.config.mode, self.config.policy, self.continuity);
        self.continuity = state;
        reading
    }

    /// Evaluates a Unix timestamp in milliseconds.
    ///
    /// Fails with [`ClockError::InvalidInput`] if `millis` is outside the range
    /// chrono can represent; the continuity state is left untouched.
    pub fn evaluate_unix_millis(&mut self, millis: i64) -> Result<ClockReading, ClockError> {
        let timestamp = DateTime::<Utc>::from_timestamp_millis(millis).ok_or_else(|| {
            ClockError::invalid(format!("unix timestamp {millis} ms is out of range"))
        })?;
        Ok(self.evaluate(&timestamp))
    }

    /// Reads `source` once and evaluates the result.
    pub fn sample(&mut self, source: &dyn TimeSource) -> Result<ClockReading, ClockError> {
        let timestamp = source.now()?;
        Ok(self.evaluate(&timestamp))
    }
}

impl Default for ClockAngleEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}
