//! Multi-calendar date conversion and time-range labeling.
//!
//! Every calendar converts to and from a [`Jdn`], so any pair of calendars
//! can be bridged through the day count. The two entry points most callers
//! need are [`convert`] and [`label_time_range`]; [`Engine`] exposes the same
//! operations with an explicit [`EngineConfig`].
//!
//! ```
//! use calendrium::{GregorianDate, TimeRange, convert, label_time_range};
//!
//! let date: GregorianDate = "1970-01-01".parse().unwrap();
//! assert_eq!(label_time_range(date, TimeRange::Decade, "gregorian"), "1970s");
//!
//! let hebrew = convert(date, "hebrew").unwrap();
//! assert_eq!((hebrew.year, hebrew.month, hebrew.day), (5730, Some(10), Some(23)));
//! ```

mod consts;
mod engine;
mod label;
mod prelude;
mod range;
mod types;

pub mod astro;
pub mod calendars;
pub mod jdn;
pub mod registry;

pub use calendars::{CalendarDate, ConversionError, Extra};
pub use consts::*;
pub use engine::{Engine, EngineConfig};
pub use jdn::{Jdn, Weekday};
pub use range::{DateSpan, RangeError, TimeRange, TimeRangeLabel};
pub use registry::{
    CalendarDescriptor, CalendarId, CalendarKind, Converter, converter, get_converter,
    list_supported_calendars,
};
pub use types::{Day, Month, Year};

use crate::jdn::{gregorian_to_jdn, jdn_to_gregorian};
use crate::prelude::*;
use std::fmt;
use std::str::FromStr;

/// A proleptic Gregorian calendar day in astronomical year numbering.
///
/// Ordering is chronological (year, then month, then day).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GregorianDate {
    year: Year,
    month: Month,
    day: Day,
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Invalid year: {} (must be {}-{})", "_0", MIN_YEAR, MAX_YEAR)]
    InvalidYear(i32),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { month: u8, day: u8, year: i32 },
    #[display(fmt = "Empty date string")]
    EmptyInput,
}

impl std::error::Error for ParseError {}

impl GregorianDate {
    /// Earliest representable day, `-9999-01-01`.
    pub const MIN_JDN: Jdn = gregorian_to_jdn(MIN_YEAR as i64, JANUARY, MIN_DAY);
    /// Latest representable day, `9999-12-31`.
    pub const MAX_JDN: Jdn = gregorian_to_jdn(MAX_YEAR as i64, DECEMBER, 31);

    /// Creates a validated date.
    ///
    /// # Errors
    /// Returns the `ParseError` of the first component out of range.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, ParseError> {
        Ok(Self {
            year:  Year::new(year)?,
            month: Month::new(month)?,
            day:   Day::new(day, year, month)?,
        })
    }

    /// The date on day `jdn`.
    ///
    /// # Errors
    /// Returns `ParseError::InvalidYear` when the day falls outside
    /// `MIN_YEAR..=MAX_YEAR`.
    ///
    /// ```
    /// use calendrium::{GregorianDate, Jdn};
    ///
    /// let date = GregorianDate::from_jdn(Jdn::new(2_451_545)).unwrap();
    /// assert_eq!(date.to_string(), "2000-01-01");
    /// ```
    pub fn from_jdn(jdn: Jdn) -> Result<Self, ParseError> {
        let (year, month, day) = jdn_to_gregorian(jdn);
        let year = i32::try_from(year).unwrap_or(if year < 0 { i32::MIN } else { i32::MAX });
        Self::new(year, month, day)
    }

    pub const fn jdn(&self) -> Jdn {
        gregorian_to_jdn(self.year.get() as i64, self.month.get(), self.day.get())
    }

    pub const fn weekday(&self) -> Weekday {
        self.jdn().weekday()
    }

    pub const fn year(&self) -> i32 {
        self.year.get()
    }

    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    pub const fn day(&self) -> u8 {
        self.day.get()
    }

    pub const fn year_typed(&self) -> Year {
        self.year
    }

    pub const fn month_typed(&self) -> Month {
        self.month
    }

    pub const fn day_typed(&self) -> Day {
        self.day
    }

    pub const fn is_leap_year(&self) -> bool {
        self.year.is_leap()
    }

    /// Length of this date's month.
    pub const fn days_in_month(&self) -> u8 {
        types::days_in_month(self.year.get() as i64, self.month.get())
    }
}

impl fmt::Display for GregorianDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let year = self.year.get();
        if year < 0 {
            f.write_str("-")?;
        }
        write!(f, "{:04}-{:02}-{:02}", year.unsigned_abs(), self.month.get(), self.day.get())
    }
}

impl FromStr for GregorianDate {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        // A leading separator is the sign of an astronomical year
        let (negative, body) = match trimmed.strip_prefix(DATE_SEPARATOR) {
            Some(rest) => (true, rest),
            None => (false, trimmed),
        };

        // DATE_SEPARATOR for ISO, MONTH_FIRST_SEPARATOR for month-first, never both
        let has_hyphen = body.contains(DATE_SEPARATOR);
        let has_slash = body.contains(MONTH_FIRST_SEPARATOR);

        if has_hyphen && has_slash {
            return Err(ParseError::InvalidFormat(format!(
                "Mixed delimiters ({DATE_SEPARATOR} and {MONTH_FIRST_SEPARATOR})"
            )));
        }

        if has_hyphen {
            // ISO format: [-]YYYY-MM-DD
            let parts: Vec<&str> = body.split(DATE_SEPARATOR).map(str::trim).collect();
            match parts.as_slice() {
                [year, month, day] => {
                    let year = Self::parse_year(year, negative)?;
                    Self::new(year, Self::parse_u8(month)?, Self::parse_u8(day)?)
                },
                _ => Err(ParseError::InvalidFormat(format!(
                    "Too many {DATE_SEPARATOR} separators: expected 2, found {}",
                    parts.len() - 1
                ))),
            }
        } else if has_slash && !negative {
            // Month-first format: MM/DD/YYYY
            let parts: Vec<&str> = body.split(MONTH_FIRST_SEPARATOR).map(str::trim).collect();
            match parts.as_slice() {
                [month, day, year] => {
                    let year = Self::parse_year(year, false)?;
                    Self::new(year, Self::parse_u8(month)?, Self::parse_u8(day)?)
                },
                _ => Err(ParseError::InvalidFormat(format!(
                    "Too many {MONTH_FIRST_SEPARATOR} separators: expected 2, found {}",
                    parts.len() - 1
                ))),
            }
        } else {
            Err(ParseError::InvalidFormat(format!(
                "Expected YYYY-MM-DD or MM/DD/YYYY: {trimmed}"
            )))
        }
    }
}

impl GregorianDate {
    /// Unsigned digits only; the sign comes from the leading separator.
    fn parse_year(s: &str, negative: bool) -> Result<i32, ParseError> {
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseError::InvalidFormat(s.to_owned()));
        }
        let value = s
            .parse::<i32>()
            .map_err(|_| ParseError::InvalidFormat(s.to_owned()))?;
        Ok(if negative { -value } else { value })
    }

    /// Helper to parse u8 with better error messages
    fn parse_u8(s: &str) -> Result<u8, ParseError> {
        if !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseError::InvalidFormat(s.to_owned()));
        }
        s.parse::<u8>()
            .map_err(|_| ParseError::InvalidFormat(s.to_owned()))
    }
}

impl TryFrom<(i32, u8, u8)> for GregorianDate {
    type Error = ParseError;

    fn try_from((year, month, day): (i32, u8, u8)) -> Result<Self, Self::Error> {
        Self::new(year, month, day)
    }
}

impl serde::Serialize for GregorianDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for GregorianDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Converts `date` into the calendar named by `calendar` (an id such as
/// `"hebrew"` or an alias such as `"jalali"`), with the default
/// [`EngineConfig`].
///
/// # Errors
/// `UnknownCalendar` for an unrecognized identifier, `DateOutOfRange` outside
/// the calendar's window and `NonConvergent` when a bounded search gives up.
pub fn convert(date: GregorianDate, calendar: &str) -> Result<CalendarDate, ConversionError> {
    Engine::default().convert(date, calendar)
}

/// Display label for the `range` containing `date`, in the idiom of
/// `calendar`. Never fails: any conversion error degrades to the Gregorian
/// label.
pub fn label_time_range(date: GregorianDate, range: TimeRange, calendar: &str) -> String {
    Engine::default().label_time_range(date, range, calendar)
}
