use chrono::{DateTime, Local, TimeZone, Timelike, Utc};

/// Which calendar fields a clock reads from an instant.
///
/// This is the only behavioral difference between a UTC clock and a local one;
/// the angle formulas are identical.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub enum ClockMode {
    #[default]
    Utc,
    Local,
}

impl ClockMode {
    /// Extracts hours/minutes/seconds from `timestamp` in this mode.
    pub fn fields(self, timestamp: &DateTime<Utc>) -> ClockFields {
        match self {
            ClockMode::Utc => ClockFields::from_datetime(timestamp),
            ClockMode::Local => ClockFields::from_datetime(&timestamp.with_timezone(&Local)),
        }
    }

    /// Short badge text.
    pub fn label(self) -> &'static str {
        match self {
            ClockMode::Utc => "UTC",
            ClockMode::Local => "LOCAL",
        }
    }
}

/// Wall-clock fields of one instant.
///
/// Fractional seconds are truncated: the second hand ticks, it does not sweep.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct ClockFields {
    /// `0..24`
    pub hours24: u32,
    /// `0..60`
    pub minutes: u32,
    /// `0..60`
    pub seconds: u32,
}

impl ClockFields {
    /// Builds fields from explicit values, rejecting anything out of range.
    pub fn new(hours24: u32, minutes: u32, seconds: u32) -> Option<Self> {
        (hours24 < 24 && minutes < 60 && seconds < 60).then_some(Self { hours24, minutes, seconds })
    }

    /// Reads the fields of `dt` in its own time zone.
    pub fn from_datetime<Tz: TimeZone>(dt: &DateTime<Tz>) -> Self {
        Self {
            hours24: dt.hour(),
            minutes: dt.minute(),
            // chrono reports a leap second as second 59 with nanos >= 1e9.
            seconds: dt.second(),
        }
    }

    /// Hour on the 12-hour dial, `0..12`.
    #[inline]
    pub fn hours12(self) -> u32 {
        self.hours24 % 12
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    fn at(h: u32, m: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 9, h, m, s).unwrap()
    }

    #[test]
    fn utc_mode_reads_utc_fields() {
        let f = ClockMode::Utc.fields(&at(17, 4, 59));
        assert_eq!(f, ClockFields { hours24: 17, minutes: 4, seconds: 59 });
        assert_eq!(f.hours12(), 5);
    }

    #[test]
    fn fields_follow_the_datetime_zone() {
        let plus_five_thirty = FixedOffset::east_opt(5 * 3600 + 30 * 60).unwrap();
        let f = ClockFields::from_datetime(&at(22, 45, 10).with_timezone(&plus_five_thirty));
        assert_eq!(f, ClockFields { hours24: 4, minutes: 15, seconds: 10 });
    }

    #[test]
    fn new_rejects_out_of_range() {
        assert!(ClockFields::new(24, 0, 0).is_none());
        assert!(ClockFields::new(0, 60, 0).is_none());
        assert!(ClockFields::new(0, 0, 60).is_none());
        assert!(ClockFields::new(23, 59, 59).is_some());
    }

    #[test]
    fn midnight_and_noon_are_zero_on_the_dial() {
        assert_eq!(ClockMode::Utc.fields(&at(0, 0, 0)).hours12(), 0);
        assert_eq!(ClockMode::Utc.fields(&at(12, 0, 0)).hours12(), 0);
    }
}
