//! Calendar month periods
//!
//! Month and year arguments are parsed into integers, so `5` and `05` name the
//! same month.

use chrono::NaiveDate;
use std::fmt;

use super::transaction::{MAX_YEAR, MIN_YEAR};

/// A calendar month (e.g., May 2024)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ReportPeriod {
    pub year: i32,
    pub month: u32,
}

impl ReportPeriod {
    /// Create a period from already-validated components
    pub fn new(year: i32, month: u32) -> Result<Self, PeriodParseError> {
        if !(1..=12).contains(&month) {
            return Err(PeriodParseError::InvalidMonth(month.to_string()));
        }
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(PeriodParseError::InvalidYear(year.to_string()));
        }
        Ok(Self { year, month })
    }

    /// Parse month (`"5"`, `"05"`) and year (`"2024"`) arguments
    pub fn parse(month: &str, year: &str) -> Result<Self, PeriodParseError> {
        Self::new(parse_year(year)?, parse_month(month)?)
    }

    /// First day of the month
    pub fn start_date(&self) -> NaiveDate {
        // new() guarantees the first of the month exists
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or(NaiveDate::MIN)
    }

    /// Human-readable form, e.g. "May 2024"
    pub fn long_name(&self) -> String {
        self.start_date().format("%B %Y").to_string()
    }
}

impl fmt::Display for ReportPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// Parse a month argument (1-12, leading zeros allowed)
pub fn parse_month(s: &str) -> Result<u32, PeriodParseError> {
    let s = s.trim();
    let month: u32 = s
        .parse()
        .map_err(|_| PeriodParseError::InvalidMonth(s.to_string()))?;
    if !(1..=12).contains(&month) {
        return Err(PeriodParseError::InvalidMonth(s.to_string()));
    }
    Ok(month)
}

/// Parse a year argument
pub fn parse_year(s: &str) -> Result<i32, PeriodParseError> {
    let s = s.trim();
    let year: i32 = s
        .parse()
        .map_err(|_| PeriodParseError::InvalidYear(s.to_string()))?;
    if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
        return Err(PeriodParseError::InvalidYear(s.to_string()));
    }
    Ok(year)
}

/// Error type for period parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PeriodParseError {
    InvalidMonth(String),
    InvalidYear(String),
}

impl fmt::Display for PeriodParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidMonth(s) => write!(f, "Invalid month '{}': expected 1-12 (MM)", s),
            Self::InvalidYear(s) => write!(f, "Invalid year '{}': expected YYYY", s),
        }
    }
}

impl std::error::Error for PeriodParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_padded_and_unpadded() {
        assert_eq!(
            ReportPeriod::parse("05", "2024").unwrap(),
            ReportPeriod::parse("5", "2024").unwrap()
        );
        assert_eq!(parse_month("12").unwrap(), 12);
    }

    #[test]
    fn test_parse_rejects_out_of_range() {
        assert!(parse_month("0").is_err());
        assert!(parse_month("13").is_err());
        assert!(parse_month("May").is_err());
        assert!(parse_year("24x").is_err());
        assert!(parse_year("-1").is_err());
    }

    #[test]
    fn test_start_date() {
        let feb = ReportPeriod::parse("02", "2024").unwrap();
        assert_eq!(feb.start_date(), NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());
    }

    #[test]
    fn test_new_rejects_year_out_of_range() {
        assert!(ReportPeriod::new(0, 1).is_err());
        assert!(ReportPeriod::new(10_000, 1).is_err());
        assert!(ReportPeriod::new(9999, 12).is_ok());
    }

    #[test]
    fn test_display() {
        let period = ReportPeriod::parse("5", "2024").unwrap();
        assert_eq!(period.to_string(), "2024-05");
        assert_eq!(period.long_name(), "May 2024");
    }
}
