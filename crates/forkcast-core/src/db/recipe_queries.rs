//! Recipe catalog CRUD operations and queries.

use jiff::Timestamp;
use rusqlite::{params, Connection, OptionalExtension, Row};

use super::utils::{
    id_column, json_column, parse_enum_column, parse_optional_column, sql_id,
};
use crate::{
    error::{DatabaseResultExt, ForkcastError, Result},
    models::{Recipe, RecipeChanges, RecipeDraft, RecipeFilter},
};

const RECIPE_COLUMNS: &str = "id, name, cuisine, cooking_time, difficulty, ingredients, \
                              instructions, tags, image, is_special, last_cooked";
const INSERT_RECIPE_SQL: &str = "INSERT INTO recipes (id, name, cuisine, cooking_time, \
                                 difficulty, ingredients, instructions, tags, image, is_special, \
                                 last_cooked) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)";
const UPDATE_RECIPE_SQL: &str = "UPDATE recipes SET name = ?2, cuisine = ?3, cooking_time = ?4, \
                                 difficulty = ?5, ingredients = ?6, instructions = ?7, tags = ?8, \
                                 image = ?9, is_special = ?10, last_cooked = ?11 WHERE id = ?1";
const DELETE_RECIPE_SQL: &str = "DELETE FROM recipes WHERE id = ?1";
const UPDATE_LAST_COOKED_SQL: &str = "UPDATE recipes SET last_cooked = ?2 WHERE id = ?1";
const COUNT_RECIPES_SQL: &str = "SELECT COUNT(*) FROM recipes";
const SELECT_CUISINES_SQL: &str = "SELECT DISTINCT cuisine FROM recipes ORDER BY cuisine";

fn recipe_from_row(row: &Row<'_>) -> rusqlite::Result<Recipe> {
    Ok(Recipe {
        id: id_column(row, 0)?,
        name: row.get(1)?,
        cuisine: row.get(2)?,
        cooking_time: row.get(3)?,
        difficulty: parse_enum_column(row, 4)?,
        ingredients: json_column(row, 5)?,
        instructions: json_column(row, 6)?,
        tags: json_column(row, 7)?,
        image: row.get(8)?,
        is_special: row.get(9)?,
        last_cooked: parse_optional_column(row, 10)?,
    })
}

/// Writes `recipe` as a new row. With `keep_id` the recipe's own id is used,
/// otherwise SQLite assigns one. Returns the stored id.
pub(super) fn insert_recipe(conn: &Connection, recipe: &Recipe, keep_id: bool) -> Result<u64> {
    let id = keep_id.then(|| sql_id(recipe.id));
    conn.execute(
        INSERT_RECIPE_SQL,
        params![
            id,
            recipe.name,
            recipe.cuisine,
            recipe.cooking_time,
            recipe.difficulty.as_str(),
            serde_json::to_string(&recipe.ingredients)?,
            serde_json::to_string(&recipe.instructions)?,
            serde_json::to_string(&recipe.tags)?,
            recipe.image,
            recipe.is_special,
            recipe.last_cooked.map(|t| t.to_string()),
        ],
    )
    .db_context("Failed to insert recipe")?;

    Ok(conn.last_insert_rowid() as u64)
}

pub(super) fn select_recipe(conn: &Connection, id: u64) -> Result<Option<Recipe>> {
    conn.query_row(
        &format!("SELECT {RECIPE_COLUMNS} FROM recipes WHERE id = ?1"),
        params![sql_id(id)],
        recipe_from_row,
    )
    .optional()
    .db_context("Failed to query recipe")
}

pub(super) fn select_all_recipes(conn: &Connection) -> Result<Vec<Recipe>> {
    let mut stmt = conn
        .prepare(&format!("SELECT {RECIPE_COLUMNS} FROM recipes ORDER BY id"))
        .db_context("Failed to prepare query")?;

    let recipes = stmt
        .query_map([], recipe_from_row)
        .db_context("Failed to query recipes")?
        .collect::<std::result::Result<Vec<_>, _>>()
        .db_context("Failed to fetch recipes")?;
    Ok(recipes)
}

impl super::Database {
    /// Adds a validated recipe to the catalog and returns it with its new id.
    pub fn create_recipe(&mut self, draft: RecipeDraft) -> Result<Recipe> {
        let mut recipe = draft.into_recipe(0);
        recipe.id = insert_recipe(&self.connection, &recipe, false)?;
        Ok(recipe)
    }

    /// Inserts `drafts` in one transaction, but only into an empty catalog.
    /// Returns how many recipes were inserted.
    pub fn seed_recipes(&mut self, drafts: Vec<RecipeDraft>) -> Result<usize> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let existing: i64 = tx
            .query_row(COUNT_RECIPES_SQL, [], |row| row.get(0))
            .db_context("Failed to count recipes")?;
        if existing > 0 {
            return Ok(0);
        }

        let count = drafts.len();
        for draft in drafts {
            insert_recipe(&tx, &draft.into_recipe(0), false)?;
        }

        tx.commit().db_context("Failed to commit transaction")?;
        Ok(count)
    }

    /// Retrieves a recipe by its ID.
    pub fn get_recipe(&self, id: u64) -> Result<Option<Recipe>> {
        select_recipe(&self.connection, id)
    }

    /// Lists recipes matching `filter`, ordered by id.
    pub fn list_recipes(&self, filter: Option<&RecipeFilter>) -> Result<Vec<Recipe>> {
        let mut query = format!("SELECT {RECIPE_COLUMNS} FROM recipes");
        let mut conditions = Vec::new();
        let mut params_vec: Vec<Box<dyn rusqlite::ToSql>> = Vec::new();

        if let Some(f) = filter {
            if let Some(ref search) = f.search {
                let needle = search.to_lowercase();
                conditions.push("(instr(lower(name), ?) > 0 OR instr(lower(cuisine), ?) > 0)");
                params_vec.push(Box::new(needle.clone()));
                params_vec.push(Box::new(needle));
            }

            if let Some(ref cuisine) = f.cuisine {
                conditions.push("cuisine = ?");
                params_vec.push(Box::new(cuisine.clone()));
            }

            if let Some(difficulty) = f.difficulty {
                conditions.push("difficulty = ?");
                params_vec.push(Box::new(difficulty.as_str()));
            }

            if let Some(special) = f.special {
                conditions.push("is_special = ?");
                params_vec.push(Box::new(special));
            }
        }

        if !conditions.is_empty() {
            query.push_str(" WHERE ");
            query.push_str(&conditions.join(" AND "));
        }
        query.push_str(" ORDER BY id");

        let mut stmt = self
            .connection
            .prepare(&query)
            .db_context("Failed to prepare query")?;

        let params_refs: Vec<&dyn rusqlite::ToSql> = params_vec.iter().map(|b| &**b).collect();

        let recipes = stmt
            .query_map(&params_refs[..], recipe_from_row)
            .db_context("Failed to query recipes")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch recipes")?;
        Ok(recipes)
    }

    /// Applies `changes` to a recipe. Returns the updated recipe and a
    /// description of each change, or `None` if the recipe doesn't exist.
    pub fn update_recipe(
        &mut self,
        id: u64,
        changes: RecipeChanges,
    ) -> Result<Option<(Recipe, Vec<String>)>> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let Some(mut recipe) = select_recipe(&tx, id)? else {
            return Ok(None);
        };

        let applied = changes.apply(&mut recipe);
        if !applied.is_empty() {
            tx.execute(
                UPDATE_RECIPE_SQL,
                params![
                    sql_id(id),
                    recipe.name,
                    recipe.cuisine,
                    recipe.cooking_time,
                    recipe.difficulty.as_str(),
                    serde_json::to_string(&recipe.ingredients)?,
                    serde_json::to_string(&recipe.instructions)?,
                    serde_json::to_string(&recipe.tags)?,
                    recipe.image,
                    recipe.is_special,
                    recipe.last_cooked.map(|t| t.to_string()),
                ],
            )
            .db_context("Failed to update recipe")?;
        }

        tx.commit().db_context("Failed to commit transaction")?;
        Ok(Some((recipe, applied)))
    }

    /// Removes a recipe. Stored schedule days that referenced it become
    /// empty. Returns the deleted recipe, or `None` if it didn't exist.
    pub fn delete_recipe(&mut self, id: u64) -> Result<Option<Recipe>> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let Some(recipe) = select_recipe(&tx, id)? else {
            return Ok(None);
        };

        tx.execute(DELETE_RECIPE_SQL, params![sql_id(id)])
            .db_context("Failed to delete recipe")?;
        tx.commit().db_context("Failed to commit transaction")?;

        Ok(Some(recipe))
    }

    /// Records that a recipe was cooked at `at`.
    pub fn mark_cooked(&mut self, id: u64, at: Timestamp) -> Result<Recipe> {
        let rows = self
            .connection
            .execute(UPDATE_LAST_COOKED_SQL, params![sql_id(id), at.to_string()])
            .db_context("Failed to update last cooked time")?;
        if rows == 0 {
            return Err(ForkcastError::RecipeNotFound { id });
        }

        self.get_recipe(id)?
            .ok_or(ForkcastError::RecipeNotFound { id })
    }

    /// Distinct cuisines in the catalog, sorted.
    pub fn list_cuisines(&self) -> Result<Vec<String>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_CUISINES_SQL)
            .db_context("Failed to prepare query")?;

        let cuisines = stmt
            .query_map([], |row| row.get(0))
            .db_context("Failed to query cuisines")?
            .collect::<std::result::Result<Vec<String>, _>>()
            .db_context("Failed to fetch cuisines")?;
        Ok(cuisines)
    }

    /// Number of recipes in the catalog.
    pub fn count_recipes(&self) -> Result<usize> {
        let count: i64 = self
            .connection
            .query_row(COUNT_RECIPES_SQL, [], |row| row.get(0))
            .db_context("Failed to count recipes")?;
        Ok(usize::try_from(count).unwrap_or_default())
    }
}
