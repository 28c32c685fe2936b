//! Per-calendar converters.
//!
//! Each submodule implements `to_jdn`/`from_jdn` for one calendar family over
//! plain [`CalendarDate`] values, plus the month-length helpers the labeler
//! needs. Dispatch by [`CalendarId`] lives in [`crate::registry`].

pub mod aztec;
pub mod bahai;
pub mod chinese;
pub mod ethiopic;
pub mod gregorian;
pub mod hebrew;
pub mod islamic;
pub mod julian;
pub mod mayan;
pub mod moons;
pub mod persian;
pub mod saka;
pub mod thai;

use serde::{Deserialize, Serialize};

use crate::jdn::Jdn;
use crate::registry::CalendarId;

/// Errors surfaced by conversions.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConversionError {
    /// The identifier names no supported calendar.
    #[error("Unknown calendar: {0}")]
    UnknownCalendar(String),

    /// The day lies outside the calendar's validity window.
    #[error("Date out of range for calendar {calendar} (JDN {jdn})")]
    DateOutOfRange { calendar: CalendarId, jdn: Jdn },

    /// A bounded search hit its iteration cap.
    #[error("Conversion to {calendar} did not converge within {iterations} iterations")]
    NonConvergent { calendar: CalendarId, iterations: u32 },

    /// The date names a month or day that does not exist.
    #[error("Invalid date for calendar {calendar}: {reason}")]
    InvalidDate { calendar: CalendarId, reason: String },
}

/// Calendar-specific fields that do not fit the year/month/day shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Extra {
    /// Chinese month flags. `cycle_year` is the position in the sexagenary
    /// cycle, `1` being 甲子.
    Chinese { leap_month: bool, cycle_year: u8 },
    /// Badí' cycles: 361-year Kull-i-Shay', 19-year Váḥid within it, and
    /// the year within the Váḥid. All 1-based.
    Bahai {
        kull_i_shay: i64,
        vahid: u8,
        year_of_vahid: u8,
    },
    /// The four lower places of a Long Count; the b'ak'tun is the year.
    LongCount { katun: u8, tun: u8, winal: u8, kin: u8 },
    /// Tzolk'in day number `1..=13` and day name `1..=20` (Imix to Ajaw).
    Tzolkin { number: u8, name: u8 },
}

/// A date in one of the supported calendars.
///
/// `year` is the calendar's own year count. `month`/`day` are absent for pure
/// cycle counts (Long Count, Tzolk'in) whose positions live in `extra`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CalendarDate {
    pub calendar: CalendarId,
    pub year: i64,
    pub month: Option<u8>,
    pub day: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra: Option<Extra>,
}

impl CalendarDate {
    /// A year/month/day date with no extra fields.
    pub const fn new(calendar: CalendarId, year: i64, month: u8, day: u8) -> Self {
        Self {
            calendar,
            year,
            month: Some(month),
            day: Some(day),
            extra: None,
        }
    }

    #[must_use]
    pub const fn with_extra(mut self, extra: Extra) -> Self {
        self.extra = Some(extra);
        self
    }

    /// Whether this is a Chinese leap (intercalary) month.
    pub const fn is_leap_month(&self) -> bool {
        matches!(self.extra, Some(Extra::Chinese { leap_month: true, .. }))
    }

    /// Month and day, both required.
    pub(crate) fn month_day(&self) -> Result<(u8, u8), ConversionError> {
        match (self.month, self.day) {
            (Some(month), Some(day)) => Ok((month, day)),
            _ => Err(invalid(self.calendar, "month and day are required")),
        }
    }
}

pub(crate) fn invalid(calendar: CalendarId, reason: impl Into<String>) -> ConversionError {
    ConversionError::InvalidDate {
        calendar,
        reason: reason.into(),
    }
}

/// Checks `1..=last` for a month number.
pub(crate) fn check_month(
    calendar: CalendarId,
    month: u8,
    last: u8,
) -> Result<(), ConversionError> {
    if month == 0 || month > last {
        return Err(invalid(calendar, format!("month {month} (must be 1-{last})")));
    }
    Ok(())
}

/// Checks `1..=length` for a day of month.
pub(crate) fn check_day(
    calendar: CalendarId,
    year: i64,
    month: u8,
    day: u8,
    length: u8,
) -> Result<(), ConversionError> {
    if day == 0 || day > length {
        return Err(invalid(
            calendar,
            format!("day {day} of month {month} in year {year} (must be 1-{length})"),
        ));
    }
    Ok(())
}
