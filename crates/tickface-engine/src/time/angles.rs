use super::fields::ClockFields;

/// 360° / 60 units: one full sweep per minute (seconds) or hour (minutes).
const DEGREES_PER_UNIT: f64 = 6.0;
/// 360° / 12 hours.
const DEGREES_PER_HOUR: f64 = 30.0;
/// Minute-hand creep per elapsed second (6° spread over 60 s).
const MINUTE_CREEP_PER_SECOND: f64 = 0.1;
/// Hour-hand creep per elapsed minute (30° spread over 60 min).
const HOUR_CREEP_PER_MINUTE: f64 = 0.5;

/// Hand rotations in degrees, clockwise from 12 o'clock.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct AngleSet {
    pub hour: f64,
    pub minute: f64,
    pub second: f64,
}

impl AngleSet {
    #[inline]
    pub const fn new(hour: f64, minute: f64, second: f64) -> Self {
        Self { hour, minute, second }
    }

    /// Base angles for `fields`, each in `[0, 360)`.
    ///
    /// The minute and hour hands creep with the smaller unit so they move the
    /// way an analog movement does instead of jumping on each whole unit.
    pub fn from_fields(fields: ClockFields) -> Self {
        let seconds = f64::from(fields.seconds);
        let minutes = f64::from(fields.minutes);
        let hours = f64::from(fields.hours12());

        Self {
            second: seconds * DEGREES_PER_UNIT,
            minute: minutes * DEGREES_PER_UNIT + seconds * MINUTE_CREEP_PER_SECOND,
            hour: hours * DEGREES_PER_HOUR + minutes * HOUR_CREEP_PER_MINUTE,
        }
    }

    /// Adds per-hand offsets (continuity turns) to these angles.
    #[inline]
    pub fn offset_by(self, offsets: AngleSet) -> Self {
        Self {
            hour: self.hour + offsets.hour,
            minute: self.minute + offsets.minute,
            second: self.second + offsets.second,
        }
    }
}
