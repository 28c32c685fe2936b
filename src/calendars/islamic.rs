//! Tabular Islamic (Hijri) calendar, civil epoch.
//!
//! Months alternate 30 and 29 days; Dhu al-Hijjah gains a day in the 11 leap
//! years of each 30-year cycle (2, 5, 7, 10, 13, 16, 18, 21, 24, 26, 29).

use super::{CalendarDate, ConversionError, check_day, check_month};
use crate::consts::ISLAMIC_EPOCH;
use crate::jdn::Jdn;
use crate::registry::CalendarId;

pub const MONTH_NAMES: [&str; 12] = [
    "Muharram",
    "Safar",
    "Rabi' al-Awwal",
    "Rabi' al-Thani",
    "Jumada al-Ula",
    "Jumada al-Akhirah",
    "Rajab",
    "Sha'ban",
    "Ramadan",
    "Shawwal",
    "Dhu al-Qa'dah",
    "Dhu al-Hijjah",
];

pub const fn is_leap_year(year: i64) -> bool {
    (14 + 11 * year).rem_euclid(30) < 11
}

pub const fn month_length(year: i64, month: u8) -> u8 {
    if month % 2 == 1 || (month == 12 && is_leap_year(year)) {
        30
    } else {
        29
    }
}

const fn day_number(year: i64, month: u8, day: u8) -> i64 {
    let month = month as i64;
    day as i64
        + (59 * (month - 1) + 1).div_euclid(2)
        + (year - 1) * 354
        + (3 + 11 * year).div_euclid(30)
        + ISLAMIC_EPOCH
        - 1
}

pub fn from_jdn(jdn: Jdn) -> CalendarDate {
    let j = jdn.get();
    let year = (30 * (j - ISLAMIC_EPOCH) + 10_646).div_euclid(10_631);
    let first = day_number(year, 1, 1);
    let month = ((2 * (j - (29 + first)) + 58).div_euclid(59) + 1).min(12);
    let day = j - day_number(year, month as u8, 1) + 1;
    CalendarDate::new(CalendarId::Islamic, year, month as u8, day as u8)
}

pub fn to_jdn(date: &CalendarDate) -> Result<Jdn, ConversionError> {
    let (month, day) = date.month_day()?;
    check_month(date.calendar, month, 12)?;
    check_day(date.calendar, date.year, month, day, month_length(date.year, month))?;
    Ok(Jdn::new(day_number(date.year, month, day)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jdn::{gregorian_to_jdn, julian_to_jdn};

    #[test]
    fn test_epoch() {
        let epoch = julian_to_jdn(622, 7, 16);
        assert_eq!(from_jdn(epoch), CalendarDate::new(CalendarId::Islamic, 1, 1, 1));
        assert_eq!(to_jdn(&CalendarDate::new(CalendarId::Islamic, 1, 1, 1)).unwrap(), epoch);
    }

    #[test]
    fn test_known_dates() {
        for ((y, m, d), (iy, im, id)) in [
            ((2000, 1, 1), (1420, 9, 24)),
            ((2023, 3, 23), (1444, 9, 1)),
            ((2024, 7, 7), (1445, 12, 30)),
            ((2024, 7, 8), (1446, 1, 1)),
        ] {
            let jdn = gregorian_to_jdn(y, m, d);
            let date = from_jdn(jdn);
            assert_eq!(date, CalendarDate::new(CalendarId::Islamic, iy, im, id), "{y}-{m}-{d}");
            assert_eq!(to_jdn(&date).unwrap(), jdn);
        }
    }

    #[test]
    fn test_leap_cycle() {
        let leaps: Vec<i64> = (1..=30).filter(|&y| is_leap_year(y)).collect();
        assert_eq!(leaps, [2, 5, 7, 10, 13, 16, 18, 21, 24, 26, 29]);
        assert_eq!(month_length(1445, 12), 30);
        assert!(to_jdn(&CalendarDate::new(CalendarId::Islamic, 1444, 12, 30)).is_err());
    }
}
