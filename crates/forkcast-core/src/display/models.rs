//! Display implementations for domain models.
//!
//! This module contains all Display trait implementations for the core domain
//! models, separated from the model definitions. Output is markdown so the
//! terminal renderer and MCP clients can both show it as is.

use std::fmt;

use super::datetime::LocalDateTime;
use crate::models::{
    Dashboard, Day, DayAssignment, DayBudgets, Difficulty, MonthlyPhoto, MonthlyStats,
    NotificationSettings, Recipe, WeekSchedule,
};

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Recipe {
    /// Marker appended to special recipe names.
    fn special_marker(&self) -> &'static str {
        if self.is_special {
            " ★"
        } else {
            ""
        }
    }

    /// Compact form used in lists.
    pub(crate) fn fmt_summary(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## {}{} (ID: {})", self.name, self.special_marker(), self.id)?;
        writeln!(f)?;
        writeln!(
            f,
            "- **Cuisine**: {} · {} min · {}",
            self.cuisine, self.cooking_time, self.difficulty
        )?;
        if !self.tags.is_empty() {
            writeln!(f, "- **Tags**: {}", self.tags.join(", "))?;
        }
        if let Some(cooked) = &self.last_cooked {
            writeln!(f, "- **Last cooked**: {}", LocalDateTime(cooked))?;
        }
        writeln!(f)
    }
}

impl fmt::Display for Recipe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}. {}{}", self.id, self.name, self.special_marker())?;
        writeln!(f)?;

        writeln!(f, "- Cuisine: {}", self.cuisine)?;
        writeln!(f, "- Cooking time: {} min", self.cooking_time)?;
        writeln!(f, "- Difficulty: {}", self.difficulty)?;
        if self.is_special {
            writeln!(f, "- Special: weekends only")?;
        }
        if !self.tags.is_empty() {
            writeln!(f, "- Tags: {}", self.tags.join(", "))?;
        }
        if let Some(image) = &self.image {
            writeln!(f, "- Image: {image}")?;
        }
        match &self.last_cooked {
            Some(cooked) => writeln!(f, "- Last cooked: {}", LocalDateTime(cooked))?,
            None => writeln!(f, "- Last cooked: never")?,
        }

        writeln!(f, "\n## Ingredients")?;
        writeln!(f)?;
        for ingredient in &self.ingredients {
            writeln!(f, "- {ingredient}")?;
        }

        writeln!(f, "\n## Instructions")?;
        writeln!(f)?;
        for (n, step) in self.instructions.iter().enumerate() {
            writeln!(f, "{}. {step}", n + 1)?;
        }

        Ok(())
    }
}

impl fmt::Display for DayAssignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.suggested_recipe {
            Some(recipe) => write!(
                f,
                "{}{} ({} min, ID: {}) · budget {} min",
                recipe.name,
                recipe.special_marker(),
                recipe.cooking_time,
                recipe.id,
                self.cooking_time
            ),
            None => write!(f, "_nothing fits_ · budget {} min", self.cooking_time),
        }
    }
}

impl fmt::Display for WeekSchedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Weekly Schedule")?;
        writeln!(f)?;
        writeln!(f, "Generated {}", LocalDateTime(&self.generated_at))?;
        writeln!(f)?;
        for (day, assignment) in &self.days {
            writeln!(f, "- **{day}**: {assignment}")?;
        }
        writeln!(f)?;
        writeln!(f, "{} of {} days planned.", self.planned_days(), self.days.len())
    }
}

impl fmt::Display for DayBudgets {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Cooking Time")?;
        writeln!(f)?;
        for day in Day::ALL {
            match self.get(day) {
                Some(minutes) => writeln!(f, "- **{day}**: {minutes} min")?,
                None => writeln!(f, "- **{day}**: not set")?,
            }
        }
        Ok(())
    }
}

impl fmt::Display for MonthlyPhoto {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "### {} · {} (ID: {})", self.date, self.recipe_name, self.id)?;
        writeln!(f)?;
        writeln!(f, "- Image: {}", self.image)?;
        if let Some(notes) = &self.notes {
            writeln!(f, "- Notes: {notes}")?;
        }
        writeln!(f)
    }
}

impl fmt::Display for MonthlyStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Monthly Review {:04}-{:02}", self.year, self.month)?;
        writeln!(f)?;
        writeln!(f, "- Dishes cooked: {}", self.total_photos)?;
        writeln!(f, "- Cuisines tried: {}", self.unique_cuisines)?;
        writeln!(f, "- Special recipes: {}", self.special_recipes)
    }
}

impl fmt::Display for NotificationSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Reminders")?;
        writeln!(f)?;
        writeln!(
            f,
            "- Enabled: {}",
            if self.enabled { "yes" } else { "no" }
        )?;
        writeln!(f, "- Time: {}", self.time)?;
        let days: Vec<&str> = self.days.iter().map(|day| day.as_str()).collect();
        if days.is_empty() {
            writeln!(f, "- Days: none")
        } else {
            writeln!(f, "- Days: {}", days.join(", "))
        }
    }
}

impl fmt::Display for Dashboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Forkcast")?;
        writeln!(f)?;
        match &self.todays_recipe {
            Some(recipe) => writeln!(
                f,
                "**Today ({})**: {}{} · {} min",
                self.today,
                recipe.name,
                recipe.special_marker(),
                recipe.cooking_time
            )?,
            None => writeln!(f, "**Today ({})**: nothing planned", self.today)?,
        }
        writeln!(f)?;
        writeln!(f, "- Recipes: {}", self.total_recipes)?;
        writeln!(f, "- Planned this week: {} of 7 days", self.planned_days)?;
        writeln!(f, "- Photos this month: {}", self.photos_this_month)?;

        if !self.recent_recipes.is_empty() {
            writeln!(f, "\n## Recently Cooked")?;
            writeln!(f)?;
            for recipe in &self.recent_recipes {
                match &recipe.last_cooked {
                    Some(cooked) => {
                        writeln!(f, "- {} ({})", recipe.name, LocalDateTime(cooked))?;
                    }
                    None => writeln!(f, "- {} (not cooked yet)", recipe.name)?,
                }
            }
        }

        Ok(())
    }
}
