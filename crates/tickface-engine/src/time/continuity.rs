use super::angles::AngleSet;
use super::fields::ClockFields;

const FULL_TURN: f64 = 360.0;

/// How a rollover (field wrapping from its maximum back to its minimum) is
/// recognised between two consecutive samples.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub enum RolloverPolicy {
    /// Previous sample in the top band of the cycle and current sample in the
    /// bottom band (`> 45 → < 15` for seconds and minutes, `> 9 → < 3` for the
    /// 12-hour field). Tolerates a dropped tick or two; a gap long enough to
    /// land outside the bottom band misses the turn.
    #[default]
    Threshold,
    /// Any decrease of the field value. Exact for every gap shorter than one
    /// full cycle of that field.
    Decrease,
}

/// One of the three clock hands.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Hand {
    Hour,
    Minute,
    Second,
}

impl Hand {
    /// `(high, low)`: a move from above `high` to below `low` is a rollover
    /// under [`RolloverPolicy::Threshold`].
    #[inline]
    pub const fn threshold_band(self) -> (u32, u32) {
        match self {
            Hand::Second | Hand::Minute => (45, 15),
            Hand::Hour => (9, 3),
        }
    }

    /// The cyclic field this hand follows.
    #[inline]
    pub fn field(self, fields: ClockFields) -> u32 {
        match self {
            Hand::Second => fields.seconds,
            Hand::Minute => fields.minutes,
            Hand::Hour => fields.hours12(),
        }
    }
}

impl RolloverPolicy {
    #[inline]
    pub fn is_rollover(self, hand: Hand, previous: u32, current: u32) -> bool {
        match self {
            RolloverPolicy::Threshold => {
                let (high, low) = hand.threshold_band();
                previous > high && current < low
            }
            RolloverPolicy::Decrease => current < previous,
        }
    }
}

/// Continuity bookkeeping for one hand.
///
/// The offset is stored as a count of full turns, so the accumulated offset is
/// a non-negative multiple of 360° by construction.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct HandContinuity {
    /// `None` until the first sample has been seen.
    last: Option<u32>,
    turns: u32,
}

impl HandContinuity {
    #[inline]
    pub const fn new() -> Self {
        Self { last: None, turns: 0 }
    }

    /// Field value of the previous sample, if any.
    #[inline]
    pub fn last(&self) -> Option<u32> {
        self.last
    }

    #[inline]
    pub fn turns(&self) -> u32 {
        self.turns
    }

    /// Accumulated offset in degrees.
    #[inline]
    pub fn offset_degrees(&self) -> f64 {
        f64::from(self.turns) * FULL_TURN
    }

    /// Records a new sample of this hand's field. Returns `true` if it was a
    /// rollover.
    ///
    /// The comparison uses the stored previous value before it is overwritten.
    /// The very first sample only initializes the stored value.
    pub fn observe(&mut self, hand: Hand, value: u32, policy: RolloverPolicy) -> bool {
        let rolled = match self.last {
            Some(previous) => policy.is_rollover(hand, previous, value),
            None => false,
        };
        if rolled {
            self.turns = self.turns.saturating_add(1);
            log::trace!("{hand:?} hand rolled over ({:?} -> {value}), turns = {}", self.last, self.turns);
        }
        self.last = Some(value);
        rolled
    }
}

/// Per-hand continuity state carried across successive engine calls.
///
/// Created empty (no prior sample, zero offset), updated on every evaluation
/// and discarded with the clock instance that owns it.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct ContinuityState {
    pub hour: HandContinuity,
    pub minute: HandContinuity,
    pub second: HandContinuity,
}

impl ContinuityState {
    #[inline]
    pub const fn new() -> Self {
        Self {
            hour: HandContinuity::new(),
            minute: HandContinuity::new(),
            second: HandContinuity::new(),
        }
    }

    #[inline]
    pub fn hand(&self, hand: Hand) -> &HandContinuity {
        match hand {
            Hand::Hour => &self.hour,
            Hand::Minute => &self.minute,
            Hand::Second => &self.second,
        }
    }

    #[inline]
    fn hand_mut(&mut self, hand: Hand) -> &mut HandContinuity {
        match hand {
            Hand::Hour => &mut self.hour,
            Hand::Minute => &mut self.minute,
            Hand::Second => &mut self.second,
        }
    }

    /// Feeds one sample to all three hands and returns their offsets.
    pub fn observe(&mut self, fields: ClockFields, policy: RolloverPolicy) -> AngleSet {
        for hand in [Hand::Second, Hand::Minute, Hand::Hour] {
            self.hand_mut(hand).observe(hand, hand.field(fields), policy);
        }
        self.offsets()
    }

    /// Current per-hand offsets in degrees.
    #[inline]
    pub fn offsets(&self) -> AngleSet {
        AngleSet::new(
            self.hour.offset_degrees(),
            self.minute.offset_degrees(),
            self.second.offset_degrees(),
        )
    }
}
