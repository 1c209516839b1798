//! Ledger period keys
//!
//! A ledger period is a (year, month) pair. On disk the year is a four-digit
//! string key and the month a three-letter English abbreviation, matching the
//! layout the original data files use.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Local};

use crate::error::{SplitError, SplitResult};

/// Calendar month, keyed on disk by its three-letter abbreviation
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Month {
    Jan,
    Feb,
    Mar,
    Apr,
    May,
    Jun,
    Jul,
    Aug,
    Sep,
    Oct,
    Nov,
    Dec,
}

impl Month {
    /// All months in calendar order
    pub const ALL: [Month; 12] = [
        Month::Jan,
        Month::Feb,
        Month::Mar,
        Month::Apr,
        Month::May,
        Month::Jun,
        Month::Jul,
        Month::Aug,
        Month::Sep,
        Month::Oct,
        Month::Nov,
        Month::Dec,
    ];

    /// The three-letter abbreviation used as the on-disk key
    pub fn abbrev(&self) -> &'static str {
        match self {
            Month::Jan => "Jan",
            Month::Feb => "Feb",
            Month::Mar => "Mar",
            Month::Apr => "Apr",
            Month::May => "May",
            Month::Jun => "Jun",
            Month::Jul => "Jul",
            Month::Aug => "Aug",
            Month::Sep => "Sep",
            Month::Oct => "Oct",
            Month::Nov => "Nov",
            Month::Dec => "Dec",
        }
    }

    /// Convert from a 1-based calendar month number
    pub fn from_number(n: u32) -> Option<Month> {
        Month::ALL.get(n.checked_sub(1)? as usize).copied()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.abbrev())
    }
}

impl FromStr for Month {
    type Err = SplitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Month::ALL
            .iter()
            .find(|m| m.abbrev().eq_ignore_ascii_case(s))
            .copied()
            .ok_or_else(|| SplitError::Validation(format!("Unknown month: {}", s)))
    }
}

/// A four-digit calendar year
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Year(u16);

impl Year {
    /// Create a year, which must have exactly four digits
    pub fn new(year: u16) -> SplitResult<Self> {
        if (1000..=9999).contains(&year) {
            Ok(Self(year))
        } else {
            Err(SplitError::Validation(format!(
                "Year must have four digits: {}",
                year
            )))
        }
    }

    /// Get the numeric year
    pub fn value(&self) -> u16 {
        self.0
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}", self.0)
    }
}

impl FromStr for Year {
    type Err = SplitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let year: u16 = s
            .parse()
            .map_err(|_| SplitError::Validation(format!("Invalid year: {}", s)))?;
        Year::new(year)
    }
}

/// The (year, month) key a period record is stored under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PeriodKey {
    pub year: Year,
    pub month: Month,
}

impl PeriodKey {
    /// Create a period key
    pub fn new(year: Year, month: Month) -> Self {
        Self { year, month }
    }

    /// The period for the local calendar date right now
    pub fn current() -> Self {
        let today = Local::now().date_naive();
        let month = Month::from_number(today.month()).expect("chrono months are 1-12");
        let year = Year::new(today.year() as u16).expect("calendar years have four digits");
        Self { year, month }
    }

    /// The year key as stored on disk
    pub fn year_key(&self) -> String {
        self.year.to_string()
    }

    /// The month key as stored on disk
    pub fn month_key(&self) -> String {
        self.month.to_string()
    }
}

impl fmt::Display for PeriodKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.month, self.year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_abbrev_round_trip() {
        for month in Month::ALL {
            let parsed: Month = month.abbrev().parse().unwrap();
            assert_eq!(parsed, month);
        }
    }

    #[test]
    fn test_month_parse_case_insensitive() {
        assert_eq!("mar".parse::<Month>().unwrap(), Month::Mar);
        assert_eq!("DEC".parse::<Month>().unwrap(), Month::Dec);
    }

    #[test]
    fn test_month_parse_rejects_unknown() {
        assert!("Month".parse::<Month>().is_err());
        assert!("".parse::<Month>().is_err());
    }

    #[test]
    fn test_month_from_number() {
        assert_eq!(Month::from_number(1), Some(Month::Jan));
        assert_eq!(Month::from_number(12), Some(Month::Dec));
        assert_eq!(Month::from_number(0), None);
        assert_eq!(Month::from_number(13), None);
    }

    #[test]
    fn test_year_four_digits() {
        assert!(Year::new(2024).is_ok());
        assert!(Year::new(999).is_err());
        assert!(Year::new(10_000 - 1).is_ok());
    }

    #[test]
    fn test_year_parse() {
        let year: Year = "2024".parse().unwrap();
        assert_eq!(year.value(), 2024);
        assert!("24".parse::<Year>().is_err());
        assert!("twenty".parse::<Year>().is_err());
    }

    #[test]
    fn test_period_key_display() {
        let key = PeriodKey::new(Year::new(2024).unwrap(), Month::Mar);
        assert_eq!(key.to_string(), "Mar 2024");
        assert_eq!(key.year_key(), "2024");
        assert_eq!(key.month_key(), "Mar");
    }

    #[test]
    fn test_current_period_is_valid() {
        let key = PeriodKey::current();
        assert_eq!(key.year_key().len(), 4);
        assert!(Month::ALL.contains(&key.month));
    }
}
