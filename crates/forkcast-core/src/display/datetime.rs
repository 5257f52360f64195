//! Timestamp formatting in the user's time zone.

use std::fmt;

use jiff::{tz::TimeZone, Timestamp};

/// Formats a timestamp as `YYYY-MM-DD HH:MM` in the system time zone.
///
/// Cooking history and generation times are only interesting to the
/// minute, so seconds and the zone name are left out.
pub struct LocalDateTime<'a>(pub &'a Timestamp);

impl LocalDateTime<'_> {
    fn in_zone(&self, tz: TimeZone) -> String {
        self.0.to_zoned(tz).strftime("%Y-%m-%d %H:%M").to_string()
    }
}

impl fmt::Display for LocalDateTime<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.in_zone(TimeZone::system()))
    }
}
