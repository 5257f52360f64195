//! Monthly photo log queries.

use jiff::civil::Date;
use rusqlite::{params, Connection, OptionalExtension, Row};

use super::utils::{id_column, parse_column, sql_id};
use crate::{
    error::{DatabaseResultExt, ForkcastError, Result},
    models::MonthlyPhoto,
};

const PHOTO_COLUMNS: &str = "id, date, recipe_name, image, notes";
const INSERT_PHOTO_SQL: &str =
    "INSERT INTO photos (id, date, recipe_name, image, notes) VALUES (?1, ?2, ?3, ?4, ?5)";
const DELETE_PHOTO_SQL: &str = "DELETE FROM photos WHERE id = ?1";

fn photo_from_row(row: &Row<'_>) -> rusqlite::Result<MonthlyPhoto> {
    Ok(MonthlyPhoto {
        id: id_column(row, 0)?,
        date: parse_column(row, 1)?,
        recipe_name: row.get(2)?,
        image: row.get(3)?,
        notes: row.get(4)?,
    })
}

pub(super) fn insert_photo(conn: &Connection, photo: &MonthlyPhoto, keep_id: bool) -> Result<u64> {
    conn.execute(
        INSERT_PHOTO_SQL,
        params![
            keep_id.then(|| sql_id(photo.id)),
            photo.date.to_string(),
            photo.recipe_name,
            photo.image,
            photo.notes,
        ],
    )
    .db_context("Failed to insert photo")?;
    Ok(conn.last_insert_rowid() as u64)
}

fn query_photos(
    conn: &Connection,
    condition: &str,
    params: &[&dyn rusqlite::ToSql],
) -> Result<Vec<MonthlyPhoto>> {
    let mut stmt = conn
        .prepare(&format!(
            "SELECT {PHOTO_COLUMNS} FROM photos {condition} ORDER BY date, id"
        ))
        .db_context("Failed to prepare query")?;

    let photos = stmt
        .query_map(params, photo_from_row)
        .db_context("Failed to query photos")?
        .collect::<std::result::Result<Vec<_>, _>>()
        .db_context("Failed to fetch photos")?;
    Ok(photos)
}

pub(super) fn select_all_photos(conn: &Connection) -> Result<Vec<MonthlyPhoto>> {
    query_photos(conn, "", &[])
}

impl super::Database {
    /// Logs a photo taken on `date`.
    pub fn add_photo(
        &mut self,
        date: Date,
        recipe_name: &str,
        image: &str,
        notes: Option<&str>,
    ) -> Result<MonthlyPhoto> {
        let mut photo = MonthlyPhoto {
            id: 0,
            date,
            recipe_name: recipe_name.to_string(),
            image: image.to_string(),
            notes: notes.map(String::from),
        };
        photo.id = insert_photo(&self.connection, &photo, false)?;
        Ok(photo)
    }

    /// Retrieves a photo by its ID.
    pub fn get_photo(&self, id: u64) -> Result<Option<MonthlyPhoto>> {
        self.connection
            .query_row(
                &format!("SELECT {PHOTO_COLUMNS} FROM photos WHERE id = ?1"),
                params![sql_id(id)],
                photo_from_row,
            )
            .optional()
            .db_context("Failed to query photo")
    }

    /// Photos dated within the given month, oldest first.
    pub fn list_photos(&self, year: i16, month: i8) -> Result<Vec<MonthlyPhoto>> {
        let first = Date::new(year, month, 1).map_err(|e| {
            ForkcastError::invalid_input("month").with_reason(e.to_string())
        })?;
        let last = first.last_of_month();

        query_photos(
            &self.connection,
            "WHERE date BETWEEN ?1 AND ?2",
            params![first.to_string(), last.to_string()],
        )
    }

    /// Removes a photo, returning it, or `None` if it didn't exist.
    pub fn delete_photo(&mut self, id: u64) -> Result<Option<MonthlyPhoto>> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let photo = tx
            .query_row(
                &format!("SELECT {PHOTO_COLUMNS} FROM photos WHERE id = ?1"),
                params![sql_id(id)],
                photo_from_row,
            )
            .optional()
            .db_context("Failed to query photo")?;

        if photo.is_some() {
            tx.execute(DELETE_PHOTO_SQL, params![sql_id(id)])
                .db_context("Failed to delete photo")?;
            tx.commit().db_context("Failed to commit transaction")?;
        }

        Ok(photo)
    }
}
