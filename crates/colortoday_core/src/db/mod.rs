//! SQLite fill store: connection bootstrap and schema versioning.
//!
//! # Invariants
//! - Schema version lives in `PRAGMA user_version`.
//! - Fills are never read or written before migrations succeed.
//! - A store written by a newer build is refused, never downgraded.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod migrations;
mod open;

pub use open::{open_db, open_db_in_memory};

pub type DbResult<T> = Result<T, DbError>;

#[derive(Debug)]
pub enum DbError {
    Sqlite(rusqlite::Error),
    /// The store's `user_version` is ahead of [`migrations::latest_version`].
    SchemaTooNew(u32),
}

impl Display for DbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "fill store error: {err}"),
            Self::SchemaTooNew(found) => write!(
                f,
                "fill store schema v{found} was written by a newer build (supports v{})",
                migrations::latest_version()
            ),
        }
    }
}

impl Error for DbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            Self::SchemaTooNew(_) => None,
        }
    }
}

impl From<rusqlite::Error> for DbError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}
