//! Proleptic Gregorian calendar.

use super::{CalendarDate, ConversionError, check_day, check_month};
use crate::consts::MAX_MONTH;
use crate::jdn::{Jdn, gregorian_to_jdn, jdn_to_gregorian};
use crate::registry::CalendarId;
use crate::types::days_in_month;

pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

pub fn from_jdn(jdn: Jdn) -> CalendarDate {
    let (year, month, day) = jdn_to_gregorian(jdn);
    CalendarDate::new(CalendarId::Gregorian, year, month, day)
}

pub fn to_jdn(date: &CalendarDate) -> Result<Jdn, ConversionError> {
    let (month, day) = date.month_day()?;
    check_month(date.calendar, month, MAX_MONTH)?;
    check_day(date.calendar, date.year, month, day, month_length(date.year, month))?;
    Ok(gregorian_to_jdn(date.year, month, day))
}

pub const fn month_length(year: i64, month: u8) -> u8 {
    days_in_month(year, month)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        let date = from_jdn(Jdn::new(2_451_545));
        assert_eq!(date, CalendarDate::new(CalendarId::Gregorian, 2000, 1, 1));
        assert_eq!(to_jdn(&date).unwrap().get(), 2_451_545);
    }

    #[test]
    fn test_rejects_impossible_days() {
        let date = CalendarDate::new(CalendarId::Gregorian, 2023, 2, 29);
        assert!(matches!(to_jdn(&date), Err(ConversionError::InvalidDate { .. })));
        let date = CalendarDate::new(CalendarId::Gregorian, 2023, 13, 1);
        assert!(to_jdn(&date).is_err());
    }
}
