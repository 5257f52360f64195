//! Weekly schedule model.

use std::collections::{BTreeMap, HashMap, HashSet};

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::{Day, Recipe};
use crate::{ForkcastError, Result};

/// What is planned for a single day.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DayAssignment {
    /// The day's budget at generation time, in minutes
    pub cooking_time: u32,

    /// The recipe picked for the day, if any fit
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggested_recipe: Option<Recipe>,
}

impl DayAssignment {
    /// A day with nothing planned.
    pub fn empty(cooking_time: u32) -> Self {
        Self {
            cooking_time,
            suggested_recipe: None,
        }
    }

    /// A day with `recipe` planned.
    pub fn with_recipe(cooking_time: u32, recipe: Recipe) -> Self {
        Self {
            cooking_time,
            suggested_recipe: Some(recipe),
        }
    }
}

/// The complete assignment produced by one generation run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeekSchedule {
    /// When the schedule was generated (UTC)
    pub generated_at: Timestamp,

    /// One entry per day, iterated Monday first
    pub days: BTreeMap<Day, DayAssignment>,
}

impl WeekSchedule {
    pub fn get(&self, day: Day) -> Option<&DayAssignment> {
        self.days.get(&day)
    }

    /// The recipe planned for `day`, if any.
    pub fn recipe_for(&self, day: Day) -> Option<&Recipe> {
        self.get(day)
            .and_then(|assignment| assignment.suggested_recipe.as_ref())
    }

    /// Days with a recipe, in canonical order.
    pub fn planned(&self) -> impl Iterator<Item = (Day, &Recipe)> {
        self.days.iter().filter_map(|(day, assignment)| {
            assignment
                .suggested_recipe
                .as_ref()
                .map(|recipe| (*day, recipe))
        })
    }

    /// Number of days with a recipe.
    pub fn planned_days(&self) -> usize {
        self.planned().count()
    }

    /// Checks a week that did not come from the generator against the rules
    /// a generated week always satisfies. Planned recipes are looked up in
    /// `catalog` by id; ids the catalog lacks are skipped since they load as
    /// empty days.
    ///
    /// # Errors
    ///
    /// `ForkcastError::InvalidInput` on field `weekly_schedule` when a day is
    /// missing or has no budget, a recipe is planned twice or over its day's
    /// budget, a special recipe lands on a weekday, or the week has more than
    /// one special.
    pub fn check_against(&self, catalog: &[Recipe]) -> Result<()> {
        let invalid = |reason: String| {
            ForkcastError::invalid_input("weekly_schedule").with_reason(reason)
        };
        let by_id: HashMap<u64, &Recipe> = catalog.iter().map(|r| (r.id, r)).collect();
        let mut used = HashSet::new();
        let mut special_day: Option<Day> = None;

        for day in Day::ALL {
            let assignment = self
                .get(day)
                .ok_or_else(|| invalid(format!("no entry for {day}")))?;
            if assignment.cooking_time == 0 {
                return Err(invalid(format!("cooking time for {day} must be positive")));
            }
            let Some(id) = assignment.suggested_recipe.as_ref().map(|r| r.id) else {
                continue;
            };
            let Some(recipe) = by_id.get(&id) else {
                continue;
            };

            if !used.insert(id) {
                return Err(invalid(format!("recipe {id} is planned more than once")));
            }
            if !recipe.fits(assignment.cooking_time) {
                return Err(invalid(format!(
                    "{day}: recipe {id} takes {} min, over the {} min budget",
                    recipe.cooking_time, assignment.cooking_time
                )));
            }
            if recipe.is_special {
                if !day.is_weekend() {
                    return Err(invalid(format!("{day}: special recipe {id} on a weekday")));
                }
                if let Some(first) = special_day {
                    return Err(invalid(format!(
                        "special recipes on both {first} and {day}"
                    )));
                }
                special_day = Some(day);
            }
        }
        Ok(())
    }
}
