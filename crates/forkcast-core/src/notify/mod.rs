//! "Time to cook" reminders.
//!
//! [`reminder_due`] decides whether a reminder should go out at a given
//! moment; it is pure and reads the clock only through its argument.
//! [`ReminderScheduler`] runs that check periodically in a background task
//! and hands due reminders to a [`Notifier`].

mod scheduler;

use jiff::Zoned;

pub use scheduler::ReminderScheduler;

use crate::models::{Day, NotificationSettings, Reminder, WeekSchedule};

/// Delivers reminders to the user.
pub trait Notifier: Send + Sync + 'static {
    fn notify(&self, reminder: &Reminder);
}

impl<F> Notifier for F
where
    F: Fn(&Reminder) + Send + Sync + 'static,
{
    fn notify(&self, reminder: &Reminder) {
        self(reminder)
    }
}

/// The reminder to send at `now`, if any.
///
/// A reminder is due when reminders are enabled, the wall-clock minute of
/// `now` equals the configured time, today is one of the configured days, and
/// the schedule has a recipe for today.
///
/// # Examples
///
/// ```rust
/// use forkcast_core::{models::NotificationSettings, notify::reminder_due};
///
/// let now = "2024-03-04T11:00:00Z"
///     .parse::<jiff::Timestamp>()?
///     .to_zoned(jiff::tz::TimeZone::UTC);
/// let settings = NotificationSettings {
///     enabled: true,
///     ..Default::default()
/// };
/// // Nothing planned, so nothing to remind about
/// assert_eq!(reminder_due(&settings, &now, None), None);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn reminder_due(
    settings: &NotificationSettings,
    now: &Zoned,
    schedule: Option<&WeekSchedule>,
) -> Option<Reminder> {
    if !settings.enabled {
        return None;
    }
    if now.hour() != settings.time.hour() || now.minute() != settings.time.minute() {
        return None;
    }

    let day = Day::from(now.weekday());
    if !settings.days.contains(&day) {
        return None;
    }

    let recipe = schedule?.recipe_for(day)?;
    Some(Reminder {
        day,
        recipe_id: recipe.id,
        recipe_name: recipe.name.clone(),
    })
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use jiff::{
        tz::{offset, TimeZone},
        Timestamp,
    };

    use super::*;
    use crate::models::{DayAssignment, Difficulty, Recipe, ReminderTime};

    fn recipe(id: u64, name: &str) -> Recipe {
        Recipe {
            id,
            name: name.to_string(),
            cuisine: "Italian".to_string(),
            cooking_time: 25,
            difficulty: Difficulty::Medium,
            ingredients: vec!["Spaghetti".to_string()],
            instructions: vec!["Boil".to_string()],
            tags: vec![],
            image: None,
            is_special: false,
            last_cooked: None,
        }
    }

    /// Carbonara on Monday, nothing on Tuesday.
    fn week() -> WeekSchedule {
        let mut days = BTreeMap::new();
        for day in Day::ALL {
            days.insert(day, DayAssignment::empty(30));
        }
        days.insert(
            Day::Monday,
            DayAssignment::with_recipe(30, recipe(1, "Spaghetti Carbonara")),
        );
        WeekSchedule {
            generated_at: Timestamp::UNIX_EPOCH,
            days,
        }
    }

    fn enabled() -> NotificationSettings {
        NotificationSettings {
            enabled: true,
            ..Default::default()
        }
    }

    // 2024-03-04 is a Monday
    fn at(time: &str) -> Zoned {
        format!("2024-03-04T{time}:00Z")
            .parse::<Timestamp>()
            .unwrap()
            .to_zoned(TimeZone::UTC)
    }

    #[test]
    fn test_due_at_configured_minute() {
        let reminder = reminder_due(&enabled(), &at("11:00"), Some(&week())).unwrap();
        assert_eq!(reminder.day, Day::Monday);
        assert_eq!(reminder.recipe_id, 1);
        assert_eq!(reminder.body(), "Today you have to cook 'Spaghetti Carbonara'");
    }

    #[test]
    fn test_not_due_when_disabled() {
        let settings = NotificationSettings::default();
        assert!(reminder_due(&settings, &at("11:00"), Some(&week())).is_none());
    }

    #[test]
    fn test_not_due_at_other_minutes() {
        for time in ["10:59", "11:01", "23:00"] {
            assert!(reminder_due(&enabled(), &at(time), Some(&week())).is_none());
        }
    }

    #[test]
    fn test_not_due_on_excluded_day() {
        let settings = NotificationSettings {
            days: [Day::Saturday, Day::Sunday].into_iter().collect(),
            ..enabled()
        };
        assert!(reminder_due(&settings, &at("11:00"), Some(&week())).is_none());
    }

    #[test]
    fn test_not_due_without_recipe_for_today() {
        let tuesday = "2024-03-05T11:00:00Z"
            .parse::<Timestamp>()
            .unwrap()
            .to_zoned(TimeZone::UTC);
        assert!(reminder_due(&enabled(), &tuesday, Some(&week())).is_none());
        assert!(reminder_due(&enabled(), &at("11:00"), None).is_none());
    }

    #[test]
    fn test_weekday_uses_local_calendar_day() {
        // Sunday 23:30 UTC is already Monday at UTC+9
        let settings = NotificationSettings {
            time: ReminderTime::new(8, 30).unwrap(),
            days: [Day::Monday].into_iter().collect(),
            ..enabled()
        };
        let instant: Timestamp = "2024-03-03T23:30:00Z".parse().unwrap();
        assert_eq!(
            instant.to_zoned(TimeZone::UTC).weekday(),
            jiff::civil::Weekday::Sunday
        );
        let tokyo = instant.to_zoned(TimeZone::fixed(offset(9)));

        let reminder = reminder_due(&settings, &tokyo, Some(&week())).unwrap();
        assert_eq!(reminder.day, Day::Monday);
    }
}
