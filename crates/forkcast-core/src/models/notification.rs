//! Reminder notification settings.

use std::{collections::BTreeSet, fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::Day;

/// Wall-clock time of day at minute precision, written `HH:MM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ReminderTime {
    hour: i8,
    minute: i8,
}

impl ReminderTime {
    pub fn new(hour: i8, minute: i8) -> Result<Self, String> {
        if !(0..24).contains(&hour) || !(0..60).contains(&minute) {
            return Err(format!("Invalid time: {hour:02}:{minute:02}"));
        }
        Ok(Self { hour, minute })
    }

    pub fn hour(self) -> i8 {
        self.hour
    }

    pub fn minute(self) -> i8 {
        self.minute
    }
}

impl Default for ReminderTime {
    fn default() -> Self {
        Self {
            hour: 11,
            minute: 0,
        }
    }
}

impl FromStr for ReminderTime {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (hour, minute) = s
            .trim()
            .split_once(':')
            .ok_or_else(|| format!("Invalid time '{s}', expected HH:MM"))?;
        let hour = hour
            .parse::<i8>()
            .map_err(|_| format!("Invalid hour in '{s}'"))?;
        let minute = minute
            .parse::<i8>()
            .map_err(|_| format!("Invalid minute in '{s}'"))?;
        Self::new(hour, minute)
    }
}

impl TryFrom<String> for ReminderTime {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ReminderTime> for String {
    fn from(value: ReminderTime) -> Self {
        value.to_string()
    }
}

impl fmt::Display for ReminderTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

/// When the daily "time to cook" reminder fires.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationSettings {
    #[serde(default)]
    pub enabled: bool,

    #[serde(default)]
    pub time: ReminderTime,

    /// Days the reminder is active on
    #[serde(default = "all_days")]
    pub days: BTreeSet<Day>,
}

fn all_days() -> BTreeSet<Day> {
    Day::ALL.into_iter().collect()
}

impl Default for NotificationSettings {
    /// Disabled, 11:00, every day.
    fn default() -> Self {
        Self {
            enabled: false,
            time: ReminderTime::default(),
            days: all_days(),
        }
    }
}

/// A reminder ready to be delivered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reminder {
    pub day: Day,
    pub recipe_id: u64,
    pub recipe_name: String,
}

impl Reminder {
    pub const TITLE: &'static str = "Time to Cook!";

    /// Body text shown to the user.
    pub fn body(&self) -> String {
        format!("Today you have to cook '{}'", self.recipe_name)
    }
}
