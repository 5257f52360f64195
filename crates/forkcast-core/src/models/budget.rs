//! Per-day cooking-time budgets.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::Day;
use crate::error::{ForkcastError, Result};

/// Default budget for Monday through Friday, in minutes.
pub const DEFAULT_WEEKDAY_MINUTES: i64 = 30;

/// Default budget for Saturday and Sunday, in minutes.
pub const DEFAULT_WEEKEND_MINUTES: i64 = 60;

/// Maximum cooking time the user has available on each day, in minutes.
///
/// The map is kept as entered so that incomplete or non-positive budgets can
/// be reported instead of silently defaulted; [`DayBudgets::validate`] is the
/// gate every schedule run goes through.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DayBudgets(BTreeMap<Day, i64>);

impl DayBudgets {
    /// Budgets with no days set. Not valid until all seven days are present.
    pub fn empty() -> Self {
        Self(BTreeMap::new())
    }

    /// Minutes budgeted for `day`, if set.
    pub fn get(&self, day: Day) -> Option<i64> {
        self.0.get(&day).copied()
    }

    /// Sets one day's budget, returning `self` for chaining.
    pub fn with(mut self, day: Day, minutes: i64) -> Self {
        self.0.insert(day, minutes);
        self
    }

    /// Overwrites the days present in `other`, keeping the rest.
    pub fn merge(&mut self, other: &BTreeMap<Day, i64>) {
        for (day, minutes) in other {
            self.0.insert(*day, *minutes);
        }
    }

    /// Iterates the days that are set, Monday first.
    pub fn iter(&self) -> impl Iterator<Item = (Day, i64)> + '_ {
        self.0.iter().map(|(day, minutes)| (*day, *minutes))
    }

    /// Checks that every day has a positive budget and returns them as
    /// minutes indexed by [`Day::index`].
    ///
    /// # Errors
    ///
    /// `ForkcastError::InvalidConfiguration` naming the first missing or
    /// non-positive day.
    pub fn validate(&self) -> Result<[u32; 7]> {
        let mut minutes = [0u32; 7];
        for day in Day::ALL {
            let value = self.get(day).ok_or_else(|| {
                ForkcastError::invalid_configuration(format!("missing cooking time for {day}"))
            })?;
            if value <= 0 {
                return Err(ForkcastError::invalid_configuration(format!(
                    "cooking time for {day} must be positive, got {value}"
                )));
            }
            minutes[usize::from(day.index())] = u32::try_from(value).map_err(|_| {
                ForkcastError::invalid_configuration(format!(
                    "cooking time for {day} is too large: {value}"
                ))
            })?;
        }
        Ok(minutes)
    }
}

impl Default for DayBudgets {
    /// 30 minutes on weekdays, 60 on the weekend.
    fn default() -> Self {
        Self(
            Day::ALL
                .into_iter()
                .map(|day| {
                    let minutes = if day.is_weekend() {
                        DEFAULT_WEEKEND_MINUTES
                    } else {
                        DEFAULT_WEEKDAY_MINUTES
                    };
                    (day, minutes)
                })
                .collect(),
        )
    }
}

impl From<BTreeMap<Day, i64>> for DayBudgets {
    fn from(map: BTreeMap<Day, i64>) -> Self {
        Self(map)
    }
}

impl FromIterator<(Day, i64)> for DayBudgets {
    fn from_iter<I: IntoIterator<Item = (Day, i64)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
