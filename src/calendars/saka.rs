//! Indian national (Saka) calendar.
//!
//! The year starts on 1 Chaitra, March 22 (March 21 in Gregorian leap years),
//! and Chaitra gets the extra day. Vaishakha to Bhadra have 31 days, the rest
//! 30.

use super::{CalendarDate, ConversionError, check_day, check_month};
use crate::consts::SAKA_YEAR_OFFSET;
use crate::jdn::{Jdn, gregorian_to_jdn, jdn_to_gregorian};
use crate::registry::CalendarId;
use crate::types::is_leap_year as is_gregorian_leap_year;

pub const MONTH_NAMES: [&str; 12] = [
    "Chaitra",
    "Vaishakha",
    "Jyaishtha",
    "Ashadha",
    "Shravana",
    "Bhadra",
    "Ashvin",
    "Kartika",
    "Agrahayana",
    "Pausha",
    "Magha",
    "Phalguna",
];

pub const fn is_leap_year(year: i64) -> bool {
    is_gregorian_leap_year(year + SAKA_YEAR_OFFSET)
}

pub const fn month_length(year: i64, month: u8) -> u8 {
    match month {
        1 if is_leap_year(year) => 31,
        2..=6 => 31,
        _ => 30,
    }
}

/// JDN of 1 Chaitra.
pub const fn new_year(year: i64) -> Jdn {
    let day = if is_leap_year(year) { 21 } else { 22 };
    gregorian_to_jdn(year + SAKA_YEAR_OFFSET, 3, day)
}

const fn days_before_month(year: i64, month: u8) -> i64 {
    let mut days = 0;
    let mut m = 1;
    while m < month {
        days += month_length(year, m) as i64;
        m += 1;
    }
    days
}

pub fn from_jdn(jdn: Jdn) -> CalendarDate {
    let (gregorian_year, _, _) = jdn_to_gregorian(jdn);
    let mut year = gregorian_year - SAKA_YEAR_OFFSET;
    if jdn < new_year(year) {
        year -= 1;
    }
    let offset = jdn - new_year(year);
    let month = (1..=12u8)
        .rev()
        .find(|&m| days_before_month(year, m) <= offset)
        .unwrap_or(1);
    let day = offset - days_before_month(year, month) + 1;
    CalendarDate::new(CalendarId::IndianSaka, year, month, day as u8)
}

pub fn to_jdn(date: &CalendarDate) -> Result<Jdn, ConversionError> {
    let (month, day) = date.month_day()?;
    check_month(date.calendar, month, 12)?;
    check_day(date.calendar, date.year, month, day, month_length(date.year, month))?;
    Ok(new_year(date.year) + days_before_month(date.year, month) + i64::from(day) - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_dates() {
        for ((y, m, d), (sy, sm, sd)) in [
            ((2000, 1, 1), (1921, 10, 11)),
            ((2023, 3, 21), (1944, 12, 30)),
            ((2023, 3, 22), (1945, 1, 1)),
            ((2024, 3, 20), (1945, 12, 30)),
            ((2024, 3, 21), (1946, 1, 1)),
            ((2024, 4, 20), (1946, 1, 31)),
            ((2024, 4, 21), (1946, 2, 1)),
            ((2024, 12, 31), (1946, 10, 10)),
        ] {
            let jdn = gregorian_to_jdn(y, m, d);
            let date = from_jdn(jdn);
            assert_eq!(date, CalendarDate::new(CalendarId::IndianSaka, sy, sm, sd), "{y}-{m}-{d}");
            assert_eq!(to_jdn(&date).unwrap(), jdn);
        }
    }

    #[test]
    fn test_year_length() {
        let total: u32 = (1..=12).map(|m| u32::from(month_length(1946, m))).sum();
        assert_eq!(total, 366);
        let total: u32 = (1..=12).map(|m| u32::from(month_length(1945, m))).sum();
        assert_eq!(total, 365);
    }
}
