//! Fill repository contracts and SQLite implementation.
//!
//! # Responsibility
//! - Persist per-day fill choices in the `fills` table.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - Every row belongs to exactly one `date_key`; days never share rows.
//! - Write paths only accept generated shape ids (`shape-<n>`).
//! - Read paths reject invalid persisted rows instead of masking them.

use crate::db::DbError;
use crate::model::color::{ColorError, HexColor};
use crate::model::date_key::DateKey;
use crate::model::fill::FillMap;
use crate::model::shape::shape_index;
use log::debug;
use rusqlite::{params, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for fill persistence.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    /// Shape id is not of the generated `shape-<n>` form.
    InvalidShapeId(String),
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidShapeId(id) => write!(f, "invalid shape id `{id}`"),
            Self::InvalidData(message) => write!(f, "invalid persisted fill data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::InvalidShapeId(_) | Self::InvalidData(_) => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Repository interface for per-day fills.
pub trait FillRepository {
    /// Loads the fill map for one day. Unknown days yield an empty map.
    fn load_fills(&self, date_key: &DateKey) -> RepoResult<FillMap>;
    /// Inserts or overwrites one shape's color.
    fn save_fill(&self, date_key: &DateKey, shape_id: &str, color: &HexColor) -> RepoResult<()>;
    /// Removes every fill of one day and returns the number of rows removed.
    fn clear_fills(&self, date_key: &DateKey) -> RepoResult<usize>;
    /// Days with at least one fill, newest first.
    fn list_days(&self) -> RepoResult<Vec<DateKey>>;
}

impl<R: FillRepository + ?Sized> FillRepository for &R {
    fn load_fills(&self, date_key: &DateKey) -> RepoResult<FillMap> {
        (**self).load_fills(date_key)
    }

    fn save_fill(&self, date_key: &DateKey, shape_id: &str, color: &HexColor) -> RepoResult<()> {
        (**self).save_fill(date_key, shape_id, color)
    }

    fn clear_fills(&self, date_key: &DateKey) -> RepoResult<usize> {
        (**self).clear_fills(date_key)
    }

    fn list_days(&self) -> RepoResult<Vec<DateKey>> {
        (**self).list_days()
    }
}

/// SQLite-backed fill repository.
pub struct SqliteFillRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteFillRepository<'conn> {
    /// Wraps a connection returned by `open_db`/`open_db_in_memory`.
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl FillRepository for SqliteFillRepository<'_> {
    fn load_fills(&self, date_key: &DateKey) -> RepoResult<FillMap> {
        let mut stmt = self.conn.prepare(
            "SELECT shape_id, color
             FROM fills
             WHERE date_key = ?1
             ORDER BY shape_id ASC;",
        )?;
        let mut rows = stmt.query([date_key.as_str()])?;
        let mut entries = Vec::new();
        while let Some(row) = rows.next()? {
            entries.push(parse_fill_row(row)?);
        }

        debug!(
            "event=fills_load module=repo status=ok date_key={date_key} count={}",
            entries.len()
        );
        Ok(entries.into_iter().collect())
    }

    fn save_fill(&self, date_key: &DateKey, shape_id: &str, color: &HexColor) -> RepoResult<()> {
        if shape_index(shape_id).is_none() {
            return Err(RepoError::InvalidShapeId(shape_id.to_string()));
        }

        self.conn.execute(
            "INSERT INTO fills (date_key, shape_id, color)
             VALUES (?1, ?2, ?3)
             ON CONFLICT (date_key, shape_id) DO UPDATE SET
                color = excluded.color,
                updated_at = (strftime('%s', 'now') * 1000);",
            params![date_key.as_str(), shape_id, color.as_str()],
        )?;
        Ok(())
    }

    fn clear_fills(&self, date_key: &DateKey) -> RepoResult<usize> {
        let removed = self
            .conn
            .execute("DELETE FROM fills WHERE date_key = ?1;", [date_key.as_str()])?;
        Ok(removed)
    }

    fn list_days(&self) -> RepoResult<Vec<DateKey>> {
        let mut stmt = self.conn.prepare(
            "SELECT DISTINCT date_key
             FROM fills
             ORDER BY date_key DESC;",
        )?;
        let mut rows = stmt.query([])?;
        let mut days = Vec::new();
        while let Some(row) = rows.next()? {
            let raw: String = row.get(0)?;
            let day = DateKey::parse(&raw).map_err(|err| {
                RepoError::InvalidData(format!("{err} in fills.date_key"))
            })?;
            days.push(day);
        }
        Ok(days)
    }
}

fn parse_fill_row(row: &Row<'_>) -> RepoResult<(String, HexColor)> {
    let shape_id: String = row.get("shape_id")?;
    if shape_index(&shape_id).is_none() {
        return Err(RepoError::InvalidData(format!(
            "invalid shape id `{shape_id}` in fills.shape_id"
        )));
    }

    let color_text: String = row.get("color")?;
    let color = HexColor::parse(&color_text).map_err(|ColorError::InvalidHex(value)| {
        RepoError::InvalidData(format!("invalid color `{value}` in fills.color"))
    })?;

    Ok((shape_id, color))
}
