//! Days of the cooking week.

use std::str::FromStr;

use jiff::civil::Weekday;
#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A day of the week.
///
/// The week starts on Monday: `Day::ALL` and the derived `Ord` both follow
/// Monday → Sunday, and [`Day::index`] is zero-based from Monday. Calendar
/// weekdays are converted exactly once, through `From<Weekday>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Day {
    /// All days in canonical order.
    pub const ALL: [Day; 7] = [
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
        Day::Friday,
        Day::Saturday,
        Day::Sunday,
    ];

    /// Zero-based position in the week, Monday = 0.
    pub fn index(self) -> u8 {
        self as u8
    }

    /// Inverse of [`Day::index`].
    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(usize::from(index)).copied()
    }

    /// Saturday and Sunday.
    pub fn is_weekend(self) -> bool {
        matches!(self, Day::Saturday | Day::Sunday)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Day::Monday => "Monday",
            Day::Tuesday => "Tuesday",
            Day::Wednesday => "Wednesday",
            Day::Thursday => "Thursday",
            Day::Friday => "Friday",
            Day::Saturday => "Saturday",
            Day::Sunday => "Sunday",
        }
    }
}

impl From<Weekday> for Day {
    fn from(weekday: Weekday) -> Self {
        match weekday {
            Weekday::Monday => Day::Monday,
            Weekday::Tuesday => Day::Tuesday,
            Weekday::Wednesday => Day::Wednesday,
            Weekday::Thursday => Day::Thursday,
            Weekday::Friday => Day::Friday,
            Weekday::Saturday => Day::Saturday,
            Weekday::Sunday => Day::Sunday,
        }
    }
}

impl FromStr for Day {
    type Err = String;

    /// Accepts full English names and three-letter abbreviations, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "monday" | "mon" => Ok(Day::Monday),
            "tuesday" | "tue" => Ok(Day::Tuesday),
            "wednesday" | "wed" => Ok(Day::Wednesday),
            "thursday" | "thu" => Ok(Day::Thursday),
            "friday" | "fri" => Ok(Day::Friday),
            "saturday" | "sat" => Ok(Day::Saturday),
            "sunday" | "sun" => Ok(Day::Sunday),
            _ => Err(format!("Invalid day: {s}")),
        }
    }
}
