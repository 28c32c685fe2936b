//! Astronomical Solar Hijri (Jalali) calendar.
//!
//! A year starts on the day of the March equinox when the equinox falls
//! before noon Iran Standard Time, otherwise on the following day. The first
//! six months have 31 days, the next five 30, and Esfand takes the rest.

use super::{CalendarDate, ConversionError, check_day, check_month};
use crate::astro::{UtcOffset, civil_day, local_day_fraction, solar_longitude_after};
use crate::consts::{PERSIAN_YEAR_OFFSET, TEHRAN_UTC_OFFSET_MINUTES};
use crate::jdn::{Jdn, gregorian_to_jdn, jdn_to_gregorian};
use crate::registry::CalendarId;

pub const MONTH_NAMES: [&str; 12] = [
    "Farvardin",
    "Ordibehesht",
    "Khordad",
    "Tir",
    "Mordad",
    "Shahrivar",
    "Mehr",
    "Aban",
    "Azar",
    "Dey",
    "Bahman",
    "Esfand",
];

const TEHRAN: UtcOffset = UtcOffset::from_minutes(TEHRAN_UTC_OFFSET_MINUTES);

const fn non_convergent(iterations: u32) -> ConversionError {
    ConversionError::NonConvergent {
        calendar: CalendarId::Persian,
        iterations,
    }
}

/// JDN of 1 Farvardin (Nowruz) of `year`.
pub fn new_year(year: i64, max_iterations: u32) -> Result<Jdn, ConversionError> {
    let march_first = gregorian_to_jdn(year + PERSIAN_YEAR_OFFSET, 3, 1).get() as f64 - 0.5;
    let equinox = solar_longitude_after(0.0, march_first, max_iterations)
        .ok_or(non_convergent(max_iterations))?;
    let day = civil_day(equinox, TEHRAN);
    if local_day_fraction(equinox, TEHRAN) < 0.5 {
        Ok(day)
    } else {
        Ok(day + 1)
    }
}

pub fn year_length(year: i64, max_iterations: u32) -> Result<i64, ConversionError> {
    Ok(new_year(year + 1, max_iterations)? - new_year(year, max_iterations)?)
}

pub fn month_length(year: i64, month: u8, max_iterations: u32) -> Result<u8, ConversionError> {
    Ok(match month {
        1..=6 => 31,
        7..=11 => 30,
        _ => (year_length(year, max_iterations)? - 336) as u8,
    })
}

const fn days_before_month(month: u8) -> i64 {
    let month = month as i64;
    if month <= 7 { 31 * (month - 1) } else { 30 * (month - 1) + 6 }
}

pub fn from_jdn(jdn: Jdn, max_iterations: u32) -> Result<CalendarDate, ConversionError> {
    let (gregorian_year, _, _) = jdn_to_gregorian(jdn);
    let mut year = gregorian_year - PERSIAN_YEAR_OFFSET;
    for _ in 0..max_iterations {
        let start = new_year(year, max_iterations)?;
        if jdn < start {
            year -= 1;
            continue;
        }
        if jdn >= new_year(year + 1, max_iterations)? {
            year += 1;
            continue;
        }
        let offset = jdn - start;
        let (month, day) = if offset < 186 {
            (offset / 31 + 1, offset % 31 + 1)
        } else {
            ((offset - 186) / 30 + 7, (offset - 186) % 30 + 1)
        };
        return Ok(CalendarDate::new(CalendarId::Persian, year, month as u8, day as u8));
    }
    Err(non_convergent(max_iterations))
}

pub fn to_jdn(date: &CalendarDate, max_iterations: u32) -> Result<Jdn, ConversionError> {
    let (month, day) = date.month_day()?;
    check_month(date.calendar, month, 12)?;
    let length = month_length(date.year, month, max_iterations)?;
    check_day(date.calendar, date.year, month, day, length)?;
    Ok(new_year(date.year, max_iterations)? + days_before_month(month) + i64::from(day) - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    const LIMIT: u32 = 16;

    #[test]
    fn test_nowruz() {
        for (year, (y, m, d)) in [
            (1379, (2000, 3, 20)),
            (1402, (2023, 3, 21)),
            (1403, (2024, 3, 20)),
            (1404, (2025, 3, 21)),
            (1405, (2026, 3, 21)),
        ] {
            assert_eq!(new_year(year, LIMIT).unwrap(), gregorian_to_jdn(y, m, d), "{year}");
        }
    }

    #[test]
    fn test_known_dates() {
        for ((y, m, d), (py, pm, pd)) in [
            ((2000, 1, 1), (1378, 10, 11)),
            ((2023, 3, 22), (1402, 1, 2)),
            ((2024, 3, 19), (1402, 12, 29)),
            ((2024, 3, 20), (1403, 1, 1)),
            ((2017, 7, 23), (1396, 5, 1)),
        ] {
            let jdn = gregorian_to_jdn(y, m, d);
            let date = from_jdn(jdn, LIMIT).unwrap();
            assert_eq!(date, CalendarDate::new(CalendarId::Persian, py, pm, pd), "{y}-{m}-{d}");
            assert_eq!(to_jdn(&date, LIMIT).unwrap(), jdn);
        }
    }

    #[test]
    fn test_esfand_length() {
        assert_eq!(month_length(1403, 12, LIMIT).unwrap(), 30);
        assert_eq!(month_length(1402, 12, LIMIT).unwrap(), 29);
        assert!(to_jdn(&CalendarDate::new(CalendarId::Persian, 1402, 12, 30), LIMIT).is_err());
    }

    #[test]
    fn test_search_cap() {
        let jdn = gregorian_to_jdn(2024, 3, 20);
        assert!(matches!(
            from_jdn(jdn, 0),
            Err(ConversionError::NonConvergent { iterations: 0, .. })
        ));
    }
}
