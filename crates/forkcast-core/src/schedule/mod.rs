//! Weekly schedule generation.
//!
//! The generator walks the week Monday → Sunday and assigns at most one
//! recipe per day:
//!
//! 1. only recipes within the day's budget that were not used earlier in the
//!    run are candidates;
//! 2. the first weekend day that has a special candidate gets one, and no
//!    other special is assigned that week;
//! 3. every other pick is drawn from non-special candidates;
//! 4. a day with no candidate stays empty, which is a normal outcome.
//!
//! Filtering ([`candidates_for_day`]) and the random draw ([`Picker`]) are
//! kept apart so either can be exercised on its own.

mod candidates;
mod picker;


use std::collections::BTreeMap;

use jiff::Timestamp;

pub use candidates::{candidates_for_day, CandidatePool, RunState};
pub use picker::{seeded_picker, Picker};

use crate::{
    models::{Day, DayAssignment, DayBudgets, Recipe, WeekSchedule},
    Result,
};

/// Generates a week using the thread-local RNG.
///
/// # Errors
///
/// `ForkcastError::InvalidConfiguration` when a day is missing from `budgets`
/// or has a non-positive budget.
///
/// # Examples
///
/// ```rust
/// use forkcast_core::{models::DayBudgets, schedule};
///
/// let week = schedule::generate(&[], &DayBudgets::default())?;
/// assert_eq!(week.days.len(), 7);
/// assert_eq!(week.planned_days(), 0);
/// # forkcast_core::Result::<()>::Ok(())
/// ```
pub fn generate(recipes: &[Recipe], budgets: &DayBudgets) -> Result<WeekSchedule> {
    generate_with(recipes, budgets, &mut rand::rng())
}

/// Generates a week drawing every pick from `picker`.
pub fn generate_with<P>(recipes: &[Recipe], budgets: &DayBudgets, picker: &mut P) -> Result<WeekSchedule>
where
    P: Picker + ?Sized,
{
    let minutes = budgets.validate()?;
    let mut state = RunState::default();
    let mut days = BTreeMap::new();

    for day in Day::ALL {
        let budget = minutes[usize::from(day.index())];
        let pool = candidates_for_day(recipes, day, budget, &state);
        let chosen = picker.pick(pool.recipes());

        let assignment = match chosen {
            Some(recipe) => {
                state.mark_used(recipe, pool.is_special());
                log::debug!("{day}: picked '{}' ({} min)", recipe.name, recipe.cooking_time);
                DayAssignment::with_recipe(budget, recipe.clone())
            }
            None => {
                log::debug!("{day}: no recipe fits {budget} min");
                DayAssignment::empty(budget)
            }
        };
        days.insert(day, assignment);
    }

    let schedule = WeekSchedule {
        generated_at: Timestamp::now(),
        days,
    };
    log::info!(
        "Generated schedule with {} of 7 days planned from {} recipes",
        schedule.planned_days(),
        recipes.len()
    );
    Ok(schedule)
}
