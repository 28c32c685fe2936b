//! Ethiopian and Coptic calendars.
//!
//! Both have twelve 30-day months and a 5-day thirteenth month (6 days in the
//! year before a Julian leap year). They differ only in epoch and naming.

use super::{CalendarDate, ConversionError, check_day, check_month};
use crate::consts::{COPTIC_EPOCH, ETHIOPIAN_EPOCH};
use crate::jdn::Jdn;
use crate::registry::CalendarId;

pub const ETHIOPIAN_MONTH_NAMES: [&str; 13] = [
    "Meskerem", "Tikimt", "Hidar", "Tahsas", "Tir", "Yekatit", "Megabit", "Miyazya", "Ginbot",
    "Sene", "Hamle", "Nehase", "Pagume",
];

pub const COPTIC_MONTH_NAMES: [&str; 13] = [
    "Thout", "Paopi", "Hathor", "Koiak", "Tobi", "Meshir", "Paremhat", "Parmouti", "Pashons",
    "Paoni", "Epip", "Mesori", "Pi Kogi Enavot",
];

const fn epoch(calendar: CalendarId) -> i64 {
    match calendar {
        CalendarId::Coptic => COPTIC_EPOCH,
        _ => ETHIOPIAN_EPOCH,
    }
}

pub const fn is_leap_year(year: i64) -> bool {
    year.rem_euclid(4) == 3
}

pub const fn month_length(year: i64, month: u8) -> u8 {
    match month {
        13 if is_leap_year(year) => 6,
        13 => 5,
        _ => 30,
    }
}

const fn day_number(epoch: i64, year: i64, month: u8, day: u8) -> i64 {
    epoch - 1 + 365 * (year - 1) + year.div_euclid(4) + 30 * (month as i64 - 1) + day as i64
}

/// `calendar` must be [`CalendarId::Ethiopian`] or [`CalendarId::Coptic`].
pub fn from_jdn(jdn: Jdn, calendar: CalendarId) -> CalendarDate {
    let epoch = epoch(calendar);
    let j = jdn.get();
    let year = (4 * (j - epoch) + 1463).div_euclid(1461);
    let month = (j - day_number(epoch, year, 1, 1)).div_euclid(30) + 1;
    let day = j - day_number(epoch, year, month as u8, 1) + 1;
    CalendarDate::new(calendar, year, month as u8, day as u8)
}

pub fn to_jdn(date: &CalendarDate) -> Result<Jdn, ConversionError> {
    let (month, day) = date.month_day()?;
    check_month(date.calendar, month, 13)?;
    check_day(date.calendar, date.year, month, day, month_length(date.year, month))?;
    Ok(Jdn::new(day_number(epoch(date.calendar), date.year, month, day)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jdn::{gregorian_to_jdn, julian_to_jdn};

    #[test]
    fn test_epochs() {
        assert_eq!(julian_to_jdn(8, 8, 29).get(), ETHIOPIAN_EPOCH);
        assert_eq!(julian_to_jdn(284, 8, 29).get(), COPTIC_EPOCH);
        assert_eq!(
            from_jdn(Jdn::new(ETHIOPIAN_EPOCH), CalendarId::Ethiopian),
            CalendarDate::new(CalendarId::Ethiopian, 1, 1, 1)
        );
    }

    #[test]
    fn test_known_dates() {
        for ((y, m, d), (ey, em, ed), (cy, cm, cd)) in [
            ((2000, 1, 1), (1992, 4, 22), (1716, 4, 22)),
            ((2023, 9, 11), (2015, 13, 6), (1739, 13, 6)),
            ((2023, 9, 12), (2016, 1, 1), (1740, 1, 1)),
            ((2024, 9, 10), (2016, 13, 5), (1740, 13, 5)),
        ] {
            let jdn = gregorian_to_jdn(y, m, d);
            let ethiopian = from_jdn(jdn, CalendarId::Ethiopian);
            let coptic = from_jdn(jdn, CalendarId::Coptic);
            assert_eq!(ethiopian, CalendarDate::new(CalendarId::Ethiopian, ey, em, ed));
            assert_eq!(coptic, CalendarDate::new(CalendarId::Coptic, cy, cm, cd));
            assert_eq!(to_jdn(&ethiopian).unwrap(), jdn);
            assert_eq!(to_jdn(&coptic).unwrap(), jdn);
        }
    }

    #[test]
    fn test_pagume_length() {
        assert_eq!(month_length(2015, 13), 6);
        assert_eq!(month_length(2016, 13), 5);
        assert!(to_jdn(&CalendarDate::new(CalendarId::Ethiopian, 2016, 13, 6)).is_err());
    }
}
