//! Row conversion helpers shared by the query modules.

use std::str::FromStr;

use rusqlite::{types::Type, Row};
use serde::de::DeserializeOwned;

/// Wraps a parse failure on column `idx` as a rusqlite conversion error.
fn conversion_error<E>(idx: usize, err: E) -> rusqlite::Error
where
    E: std::error::Error + Send + Sync + 'static,
{
    rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(err))
}

/// Reads a text column and parses it with `FromStr`.
pub(super) fn parse_column<T>(row: &Row<'_>, idx: usize) -> rusqlite::Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let text: String = row.get(idx)?;
    text.parse().map_err(|e| conversion_error(idx, e))
}

/// Reads a nullable text column and parses it with `FromStr`.
pub(super) fn parse_optional_column<T>(row: &Row<'_>, idx: usize) -> rusqlite::Result<Option<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    row.get::<_, Option<String>>(idx)?
        .map(|text| text.parse().map_err(|e| conversion_error(idx, e)))
        .transpose()
}

/// Reads a text column holding a JSON document.
pub(super) fn json_column<T: DeserializeOwned>(row: &Row<'_>, idx: usize) -> rusqlite::Result<T> {
    let text: String = row.get(idx)?;
    serde_json::from_str(&text).map_err(|e| conversion_error(idx, e))
}

/// Reads an INTEGER id column.
pub(super) fn id_column(row: &Row<'_>, idx: usize) -> rusqlite::Result<u64> {
    let id: i64 = row.get(idx)?;
    u64::try_from(id).map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Integer, Box::new(e)))
}

/// Converts an id for binding; ids above `i64::MAX` cannot exist in SQLite.
pub(super) fn sql_id(id: u64) -> i64 {
    i64::try_from(id).unwrap_or(i64::MAX)
}

/// Reads a text column through a `FromStr` whose error is a plain message.
pub(super) fn parse_enum_column<T>(row: &Row<'_>, idx: usize) -> rusqlite::Result<T>
where
    T: FromStr<Err = String>,
{
    let text: String = row.get(idx)?;
    text.parse().map_err(|message: String| {
        conversion_error(idx, std::io::Error::new(std::io::ErrorKind::InvalidData, message))
    })
}
