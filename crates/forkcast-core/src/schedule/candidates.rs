use std::collections::HashSet;

use crate::models::{Day, Recipe};

/// Mutable state of a single generation run.
///
/// Created fresh for every run and never shared, so concurrent runs cannot
/// observe each other's picks.
#[derive(Debug, Default, Clone)]
pub struct RunState {
    used: HashSet<u64>,
    special_assigned: bool,
}

impl RunState {
    pub fn is_used(&self, id: u64) -> bool {
        self.used.contains(&id)
    }

    pub fn special_assigned(&self) -> bool {
        self.special_assigned
    }

    /// Records a pick. `from_special_pool` latches the weekly special flag.
    pub fn mark_used(&mut self, recipe: &Recipe, from_special_pool: bool) {
        self.used.insert(recipe.id);
        if from_special_pool {
            self.special_assigned = true;
        }
    }
}

/// The recipes eligible for one day, and which rule produced them.
#[derive(Debug, Clone, PartialEq)]
pub enum CandidatePool<'a> {
    /// Weekend specials, offered until the week has one
    Special(Vec<&'a Recipe>),
    /// Non-special recipes
    Regular(Vec<&'a Recipe>),
}

impl<'a> CandidatePool<'a> {
    pub fn recipes(&self) -> &[&'a Recipe] {
        match self {
            CandidatePool::Special(recipes) | CandidatePool::Regular(recipes) => recipes,
        }
    }

    pub fn is_special(&self) -> bool {
        matches!(self, CandidatePool::Special(_))
    }

    pub fn is_empty(&self) -> bool {
        self.recipes().is_empty()
    }
}

/// Filters `recipes` down to what `day` may draw from.
///
/// Recipes over `budget` or already used this run are never candidates. On a
/// weekend day, while the week has no special yet, the pool is the special
/// recipes if there are any. In every other case the pool is the non-special
/// recipes, which keeps specials off weekdays and caps them at one per week.
pub fn candidates_for_day<'a>(
    recipes: &'a [Recipe],
    day: Day,
    budget: u32,
    state: &RunState,
) -> CandidatePool<'a> {
    let feasible = || {
        recipes
            .iter()
            .filter(move |recipe| recipe.fits(budget) && !state.is_used(recipe.id))
    };

    if day.is_weekend() && !state.special_assigned() {
        let specials: Vec<&Recipe> = feasible().filter(|recipe| recipe.is_special).collect();
        if !specials.is_empty() {
            return CandidatePool::Special(specials);
        }
    }

    CandidatePool::Regular(feasible().filter(|recipe| !recipe.is_special).collect())
}
