//! Calendar day identifier.
//!
//! # Responsibility
//! - Parse and format the `YYYY-MM-DD` key that partitions scenes and fills.
//! - Derive today's key from the local wall clock at the boundary.
//!
//! # Invariants
//! - The inner string is exactly ten ASCII bytes and names a real date.

use chrono::{Local, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

const DATE_KEY_FORMAT: &str = "%Y-%m-%d";

static DATE_KEY_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("date key pattern is valid"));

/// Local calendar day in `YYYY-MM-DD` form.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DateKey(String);

/// Errors produced while parsing a `DateKey`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateKeyError {
    /// Input is not shaped like `YYYY-MM-DD`.
    InvalidFormat(String),
    /// Input is well-formed but not a real calendar date.
    InvalidDate(String),
}

impl Display for DateKeyError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidFormat(value) => {
                write!(f, "invalid date key `{value}`; expected YYYY-MM-DD")
            }
            Self::InvalidDate(value) => write!(f, "date key `{value}` is not a calendar date"),
        }
    }
}

impl Error for DateKeyError {}

impl DateKey {
    /// Parses and validates a date key.
    ///
    /// Surrounding whitespace is ignored.
    pub fn parse(value: &str) -> Result<Self, DateKeyError> {
        let trimmed = value.trim();
        if !DATE_KEY_PATTERN.is_match(trimmed) {
            return Err(DateKeyError::InvalidFormat(trimmed.to_string()));
        }
        NaiveDate::parse_from_str(trimmed, DATE_KEY_FORMAT)
            .map_err(|_| DateKeyError::InvalidDate(trimmed.to_string()))?;
        Ok(Self(trimmed.to_string()))
    }

    /// Builds the key for a calendar date.
    pub fn from_date(date: NaiveDate) -> Self {
        Self(date.format(DATE_KEY_FORMAT).to_string())
    }

    /// Returns the key for the current day in the local timezone.
    pub fn today() -> Self {
        Self::from_date(Local::now().date_naive())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the calendar date named by this key.
    pub fn date(&self) -> NaiveDate {
        // Construction guarantees the inner string parses.
        NaiveDate::parse_from_str(&self.0, DATE_KEY_FORMAT).unwrap_or_default()
    }
}

impl Display for DateKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for DateKey {
    type Err = DateKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for DateKey {
    type Error = DateKeyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<DateKey> for String {
    fn from(value: DateKey) -> Self {
        value.0
    }
}

impl AsRef<str> for DateKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::{DateKey, DateKeyError};
    use chrono::NaiveDate;

    #[test]
    fn parse_accepts_padded_calendar_dates() {
        let key = DateKey::parse(" 2024-06-15 ").unwrap();
        assert_eq!(key.as_str(), "2024-06-15");
        assert_eq!(key.date(), NaiveDate::from_ymd_opt(2024, 6, 15).unwrap());
    }

    #[test]
    fn parse_rejects_unpadded_components() {
        let err = DateKey::parse("2024-6-15").unwrap_err();
        assert!(matches!(err, DateKeyError::InvalidFormat(_)));
    }

    #[test]
    fn parse_rejects_impossible_dates() {
        assert!(matches!(
            DateKey::parse("2023-02-29").unwrap_err(),
            DateKeyError::InvalidDate(_)
        ));
        assert!(DateKey::parse("2024-02-29").is_ok());
        assert!(DateKey::parse("2024-13-01").is_err());
    }

    #[test]
    fn from_date_zero_pads() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 7).unwrap();
        assert_eq!(DateKey::from_date(date).as_str(), "2025-01-07");
    }

    #[test]
    fn today_is_a_valid_key() {
        let today = DateKey::today();
        assert_eq!(DateKey::parse(today.as_str()).unwrap(), today);
    }
}
