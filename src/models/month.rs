//! Calendar month identifier
//!
//! A `MonthId` is the key of every record in the session store. Its canonical
//! text form is `YYYY-MM`; ordering is chronological (year, then month), which
//! matches lexicographic ordering of the canonical string.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A calendar month, e.g. "2025-01"
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MonthId {
    year: i32,
    month: u32,
}

impl MonthId {
    /// Create a month identifier, returning `None` for an out-of-range month
    pub fn new(year: i32, month: u32) -> Option<Self> {
        if (0..=9999).contains(&year) && NaiveDate::from_ymd_opt(year, month, 1).is_some() {
            Some(Self { year, month })
        } else {
            None
        }
    }

    /// The current real-world month (local clock)
    pub fn current() -> Self {
        Self::from_date(chrono::Local::now().date_naive())
    }

    /// The month containing the given date
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// First day of the month
    pub fn first_day(&self) -> NaiveDate {
        // year and month are validated on construction
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or_default()
    }

    /// Short label for chart axes, e.g. "Jan 25"
    pub fn short_label(&self) -> String {
        self.first_day().format("%b %y").to_string()
    }

    /// Parse a month identifier in the canonical `YYYY-MM` form
    ///
    /// Surrounding whitespace is ignored. Anything else (single-digit months,
    /// two-digit years, other separators, month 00 or 13) is rejected.
    pub fn parse(s: &str) -> Result<Self, MonthParseError> {
        let s = s.trim();
        let bytes = s.as_bytes();

        let well_formed = bytes.len() == 7
            && bytes[4] == b'-'
            && bytes[..4].iter().all(u8::is_ascii_digit)
            && bytes[5..].iter().all(u8::is_ascii_digit);
        if !well_formed {
            return Err(MonthParseError::InvalidFormat(s.to_string()));
        }

        let year: i32 = s[..4]
            .parse()
            .map_err(|_| MonthParseError::InvalidFormat(s.to_string()))?;
        let month: u32 = s[5..]
            .parse()
            .map_err(|_| MonthParseError::InvalidFormat(s.to_string()))?;

        Self::new(year, month).ok_or(MonthParseError::InvalidMonth(month))
    }
}

impl fmt::Display for MonthId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&format!("{:04}-{:02}", self.year, self.month))
    }
}

impl FromStr for MonthId {
    type Err = MonthParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for MonthId {
    type Error = MonthParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<MonthId> for String {
    fn from(value: MonthId) -> Self {
        value.to_string()
    }
}

/// Error type for month parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MonthParseError {
    InvalidFormat(String),
    InvalidMonth(u32),
}

impl fmt::Display for MonthParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MonthParseError::InvalidFormat(s) => write!(f, "Invalid month format: {}", s),
            MonthParseError::InvalidMonth(m) => write!(f, "Invalid month: {}", m),
        }
    }
}

impl std::error::Error for MonthParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid() {
        let m = MonthId::parse("2025-01").unwrap();
        assert_eq!(m.year(), 2025);
        assert_eq!(m.month(), 1);
        assert_eq!(MonthId::parse(" 2025-10 ").unwrap().to_string(), "2025-10");
    }

    #[test]
    fn test_parse_invalid_month() {
        assert_eq!(
            MonthId::parse("2025-13"),
            Err(MonthParseError::InvalidMonth(13))
        );
        assert_eq!(
            MonthId::parse("2025-00"),
            Err(MonthParseError::InvalidMonth(0))
        );
    }

    #[test]
    fn test_parse_invalid_format() {
        for input in ["", "2025", "2025-1", "25-01", "2025/01", "2025-01-01", "abcd-ef", "+025-01"] {
            assert!(
                matches!(MonthId::parse(input), Err(MonthParseError::InvalidFormat(_))),
                "expected format error for {:?}",
                input
            );
        }
    }

    #[test]
    fn test_chronological_ordering() {
        let mut months: Vec<MonthId> = ["2025-02", "2024-12", "2025-10", "2025-01"]
            .iter()
            .map(|s| MonthId::parse(s).unwrap())
            .collect();
        months.sort();

        let labels: Vec<String> = months.iter().map(|m| m.to_string()).collect();
        assert_eq!(labels, vec!["2024-12", "2025-01", "2025-02", "2025-10"]);

        // Matches lexicographic ordering of the canonical form
        let mut strings = labels.clone();
        strings.sort();
        assert_eq!(strings, labels);
    }

    #[test]
    fn test_from_date() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 17).unwrap();
        assert_eq!(MonthId::from_date(date), MonthId::new(2025, 3).unwrap());
    }

    #[test]
    fn test_short_label() {
        assert_eq!(MonthId::new(2025, 1).unwrap().short_label(), "Jan 25");
    }

    #[test]
    fn test_serialization() {
        let m = MonthId::new(2025, 7).unwrap();
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, "\"2025-07\"");

        let deserialized: MonthId = serde_json::from_str(&json).unwrap();
        assert_eq!(m, deserialized);
        assert!(serde_json::from_str::<MonthId>("\"2025-13\"").is_err());
    }
}
