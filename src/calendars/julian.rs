//! Proleptic Julian calendar. Shares the Gregorian month names.

use super::{CalendarDate, ConversionError, check_day, check_month};
use crate::consts::{DAYS_IN_MONTH, FEBRUARY, FEBRUARY_DAYS_LEAP, LEAP_YEAR_CYCLE, MAX_MONTH};
use crate::jdn::{Jdn, jdn_to_julian, julian_to_jdn};
use crate::registry::CalendarId;

/// Every fourth year, including year 0 (1 BCE) and negative multiples of 4.
pub const fn is_leap_year(year: i64) -> bool {
    year.rem_euclid(LEAP_YEAR_CYCLE) == 0
}

pub const fn month_length(year: i64, month: u8) -> u8 {
    if month == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}

pub fn from_jdn(jdn: Jdn) -> CalendarDate {
    let (year, month, day) = jdn_to_julian(jdn);
    CalendarDate::new(CalendarId::Julian, year, month, day)
}

pub fn to_jdn(date: &CalendarDate) -> Result<Jdn, ConversionError> {
    let (month, day) = date.month_day()?;
    check_month(date.calendar, month, MAX_MONTH)?;
    check_day(date.calendar, date.year, month, day, month_length(date.year, month))?;
    Ok(julian_to_jdn(date.year, month, day))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jdn::gregorian_to_jdn;

    #[test]
    fn test_leap_years() {
        assert!(is_leap_year(1900));
        assert!(is_leap_year(2000));
        assert!(is_leap_year(0));
        assert!(is_leap_year(-4));
        assert!(!is_leap_year(-1));
        assert!(!is_leap_year(2023));
    }

    #[test]
    fn test_gregorian_reform() {
        // Thursday 4 October 1582 (Julian) was followed by Friday 15 October (Gregorian)
        let last_julian = from_jdn(gregorian_to_jdn(1582, 10, 15) - 1);
        assert_eq!(last_julian, CalendarDate::new(CalendarId::Julian, 1582, 10, 4));
    }

    #[test]
    fn test_thirteen_day_offset() {
        let date = from_jdn(gregorian_to_jdn(2000, 1, 1));
        assert_eq!(date, CalendarDate::new(CalendarId::Julian, 1999, 12, 19));
        assert_eq!(to_jdn(&date).unwrap(), gregorian_to_jdn(2000, 1, 1));
    }

    #[test]
    fn test_julian_only_leap_day() {
        let date = CalendarDate::new(CalendarId::Julian, 1900, 2, 29);
        assert!(to_jdn(&date).is_ok());
        assert!(to_jdn(&CalendarDate::new(CalendarId::Julian, 1901, 2, 29)).is_err());
    }
}
