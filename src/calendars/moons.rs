//! Thirteen-moon counts (Cherokee and Iroquois).
//!
//! Both are modelled as thirteen 28-day moons counted from a fixed
//! correlation day. The Cherokee count closes each 365-day year with one
//! extra "Day Out of Time" (month 14); the Iroquois count is a pure 364-day
//! cycle.

use super::{CalendarDate, ConversionError, invalid};
use crate::consts::{CHEROKEE_CORRELATION, IROQUOIS_CORRELATION};
use crate::jdn::Jdn;
use crate::registry::CalendarId;

pub const MOON_LENGTH: u8 = 28;
pub const MOONS: u8 = 13;
pub const DAY_OUT_OF_TIME: u8 = 14;
pub const DAY_OUT_OF_TIME_NAME: &str = "Day Out of Time";

pub const CHEROKEE_MONTH_NAMES: [&str; 13] = [
    "Cold Moon",
    "Bone Moon",
    "Wind Moon",
    "Flower Moon",
    "Planting Moon",
    "Green Corn Moon",
    "Ripe Corn Moon",
    "End of Fruit Moon",
    "Nut Moon",
    "Harvest Moon",
    "Trading Moon",
    "Snow Moon",
    "Big Moon",
];

pub const IROQUOIS_MONTH_NAMES: [&str; 13] = [
    "Midwinter Moon",
    "Maple Moon",
    "Fishing Moon",
    "Planting Moon",
    "Strawberry Moon",
    "Thunder Moon",
    "Green Corn Moon",
    "Harvest Moon",
    "Hunting Moon",
    "Falling Leaves Moon",
    "Frost Moon",
    "Long Night Moon",
    "Cold Moon",
];

/// Correlation day and year length of a count.
const fn cycle(calendar: CalendarId) -> (i64, i64) {
    match calendar {
        CalendarId::Iroquois => (IROQUOIS_CORRELATION, 364),
        _ => (CHEROKEE_CORRELATION, 365),
    }
}

pub const fn year_length(calendar: CalendarId) -> i64 {
    cycle(calendar).1
}

/// Last month number: the Day Out of Time for the Cherokee count.
pub const fn last_month(calendar: CalendarId) -> u8 {
    if year_length(calendar) > 364 { DAY_OUT_OF_TIME } else { MOONS }
}

pub const fn month_length(month: u8) -> u8 {
    if month == DAY_OUT_OF_TIME { 1 } else { MOON_LENGTH }
}

pub fn month_name(calendar: CalendarId, month: u8) -> &'static str {
    let names = match calendar {
        CalendarId::Iroquois => &IROQUOIS_MONTH_NAMES,
        _ => &CHEROKEE_MONTH_NAMES,
    };
    match month {
        DAY_OUT_OF_TIME => DAY_OUT_OF_TIME_NAME,
        _ => names.get(usize::from(month.saturating_sub(1))).copied().unwrap_or_default(),
    }
}

/// `calendar` must be [`CalendarId::Cherokee`] or [`CalendarId::Iroquois`].
pub const fn from_jdn(jdn: Jdn, calendar: CalendarId) -> CalendarDate {
    let (correlation, length) = cycle(calendar);
    let d = jdn.get() - correlation;
    let position = d.rem_euclid(length);
    let moon_length = MOON_LENGTH as i64;
    let (month, day) = if position < MOONS as i64 * moon_length {
        (position / moon_length + 1, position % moon_length + 1)
    } else {
        (DAY_OUT_OF_TIME as i64, 1)
    };
    CalendarDate::new(calendar, d.div_euclid(length), month as u8, day as u8)
}

pub fn to_jdn(date: &CalendarDate) -> Result<Jdn, ConversionError> {
    let (month, day) = date.month_day()?;
    let (correlation, length) = cycle(date.calendar);
    let last = last_month(date.calendar);
    if month == 0 || month > last || day == 0 || day > month_length(month) {
        return Err(invalid(date.calendar, format!("day {day} of moon {month}")));
    }
    let position = (i64::from(month) - 1) * i64::from(MOON_LENGTH) + i64::from(day) - 1;
    Ok(Jdn::new(correlation + date.year * length + position))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jdn::gregorian_to_jdn;

    #[test]
    fn test_cherokee_year() {
        let start = gregorian_to_jdn(2000, 1, 1);
        assert_eq!(from_jdn(start, CalendarId::Cherokee), CalendarDate::new(CalendarId::Cherokee, 0, 1, 1));
        let out_of_time = from_jdn(start + 364, CalendarId::Cherokee);
        assert_eq!(out_of_time, CalendarDate::new(CalendarId::Cherokee, 0, DAY_OUT_OF_TIME, 1));
        assert_eq!(month_name(CalendarId::Cherokee, DAY_OUT_OF_TIME), "Day Out of Time");
        assert_eq!(from_jdn(start + 365, CalendarId::Cherokee).year, 1);
        assert_eq!(to_jdn(&out_of_time).unwrap(), start + 364);
    }

    #[test]
    fn test_iroquois_has_no_day_out_of_time() {
        let start = Jdn::new(IROQUOIS_CORRELATION);
        let date = from_jdn(start + 364, CalendarId::Iroquois);
        assert_eq!(date, CalendarDate::new(CalendarId::Iroquois, 1, 1, 1));
        let bad = CalendarDate::new(CalendarId::Iroquois, 0, DAY_OUT_OF_TIME, 1);
        assert!(to_jdn(&bad).is_err());
    }

    #[test]
    fn test_round_trip_before_correlation() {
        for calendar in [CalendarId::Cherokee, CalendarId::Iroquois] {
            for offset in [-1, -28, -365, -1000] {
                let jdn = Jdn::new(2_451_545 + offset);
                assert_eq!(to_jdn(&from_jdn(jdn, calendar)).unwrap(), jdn, "{calendar} {offset}");
            }
        }
    }
}
