use core::fmt;

use super::fields::ClockFields;

/// 24-hour `HH:MM:SS`, each field zero-padded to two digits.
pub fn format_digital(fields: ClockFields) -> String {
    fields.to_string()
}

impl fmt::Display for ClockFields {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hours24, self.minutes, self.seconds)
    }
}
