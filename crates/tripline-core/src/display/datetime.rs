//! Local time formatting.

use std::fmt;

use jiff::{tz::TimeZone, Timestamp};

/// Shows a timestamp in the system time zone as `YYYY-MM-DD HH:MM:SS TZ`.
pub struct LocalDateTime<'a>(pub &'a Timestamp);

impl fmt::Display for LocalDateTime<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let local = self.0.to_zoned(TimeZone::system());
        write!(f, "{}", local.strftime("%Y-%m-%d %H:%M:%S %Z"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_date_time_shape() {
        let saved_at = Timestamp::from_second(1640995200).unwrap();
        let text = LocalDateTime(&saved_at).to_string();
        // Date, time and zone; the date depends on the system zone.
        assert_eq!(text.split(' ').count(), 3);
        assert_eq!(text.split(' ').nth(1).map(str::len), Some(8));
    }
}
