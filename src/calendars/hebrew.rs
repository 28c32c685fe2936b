//! Arithmetic Hebrew calendar.
//!
//! Years start at the molad of Tishri, adjusted by the four dehiyyot
//! (postponement rules). Months are numbered from Nisan = 1, so a year runs
//! 7, 8, …, 12 (13 in leap years), 1, …, 6.

use super::{CalendarDate, ConversionError, check_day, check_month};
use crate::consts::HEBREW_EPOCH;
use crate::jdn::Jdn;
use crate::registry::CalendarId;

pub const TISHRI: u8 = 7;

pub const MONTH_NAMES: [&str; 13] = [
    "Nisan", "Iyar", "Sivan", "Tammuz", "Av", "Elul", "Tishrei", "Cheshvan", "Kislev", "Tevet",
    "Shevat", "Adar", "Adar II",
];

/// Mean year length in days, as a ratio (35975351 / 98496).
const MEAN_YEAR_NUMERATOR: i64 = 35_975_351;
const MEAN_YEAR_DENOMINATOR: i64 = 98_496;

/// Years 3, 6, 8, 11, 14, 17 and 19 of the Metonic cycle have 13 months.
pub const fn is_leap_year(year: i64) -> bool {
    (7 * year + 1).rem_euclid(19) < 7
}

pub const fn last_month(year: i64) -> u8 {
    if is_leap_year(year) { 13 } else { 12 }
}

/// Display name; month 12 is "Adar I" in leap years.
pub fn month_name(year: i64, month: u8) -> &'static str {
    match month {
        12 if is_leap_year(year) => "Adar I",
        1..=13 => MONTH_NAMES[usize::from(month - 1)],
        _ => "",
    }
}

/// Days from the epoch to the molad-based start of `year`, with the
/// postponement that keeps Rosh Hashanah off Sunday, Wednesday and Friday.
const fn elapsed_days(year: i64) -> i64 {
    let months = (235 * year - 234).div_euclid(19);
    let parts = 12_084 + 13_753 * months;
    let days = 29 * months + parts.div_euclid(25_920);
    if (3 * (days + 1)).rem_euclid(7) < 3 { days + 1 } else { days }
}

/// Remaining postponements that keep year lengths within 353..=385.
const fn year_length_correction(year: i64) -> i64 {
    let previous = elapsed_days(year - 1);
    let current = elapsed_days(year);
    let next = elapsed_days(year + 1);
    if next - current == 356 {
        2
    } else if current - previous == 382 {
        1
    } else {
        0
    }
}

/// JDN of 1 Tishri of `year`.
pub const fn new_year(year: i64) -> Jdn {
    Jdn::new(HEBREW_EPOCH + elapsed_days(year) + year_length_correction(year))
}

pub fn year_length(year: i64) -> i64 {
    new_year(year + 1) - new_year(year)
}

pub fn month_length(year: i64, month: u8) -> u8 {
    let length = year_length(year);
    let short = matches!(month, 2 | 4 | 6 | 10 | 13)
        || (month == 12 && !is_leap_year(year))
        // Cheshvan is long only in complete years
        || (month == 8 && length % 10 != 5)
        // Kislev is short only in deficient years
        || (month == 9 && length % 10 == 3);
    if short { 29 } else { 30 }
}

/// Months of `year` in calendar order, starting at Tishri.
fn months_in_order(year: i64) -> impl Iterator<Item = u8> {
    (TISHRI..=last_month(year)).chain(1..TISHRI)
}

pub fn from_jdn(jdn: Jdn, max_iterations: u32) -> Result<CalendarDate, ConversionError> {
    let j = jdn.get();
    let approx = ((j - HEBREW_EPOCH) * MEAN_YEAR_DENOMINATOR).div_euclid(MEAN_YEAR_NUMERATOR) + 1;
    let mut year = approx - 1;
    let mut found = false;
    for iteration in 0..max_iterations {
        if new_year(year + 1) <= jdn {
            year += 1;
        } else {
            tracing::trace!(year, iterations = iteration + 1, "hebrew year located");
            found = true;
            break;
        }
    }
    if !found {
        return Err(ConversionError::NonConvergent {
            calendar: CalendarId::Hebrew,
            iterations: max_iterations,
        });
    }

    let mut start = new_year(year);
    for month in months_in_order(year) {
        let length = month_length(year, month);
        if jdn - start < i64::from(length) {
            let day = (jdn - start + 1) as u8;
            return Ok(CalendarDate::new(CalendarId::Hebrew, year, month, day));
        }
        start = start + i64::from(length);
    }
    Err(ConversionError::NonConvergent {
        calendar: CalendarId::Hebrew,
        iterations: max_iterations,
    })
}

pub fn to_jdn(date: &CalendarDate) -> Result<Jdn, ConversionError> {
    let (month, day) = date.month_day()?;
    check_month(date.calendar, month, last_month(date.year))?;
    check_day(date.calendar, date.year, month, day, month_length(date.year, month))?;
    let preceding: i64 = months_in_order(date.year)
        .take_while(|&m| m != month)
        .map(|m| i64::from(month_length(date.year, m)))
        .sum();
    Ok(new_year(date.year) + preceding + i64::from(day) - 1)
}
