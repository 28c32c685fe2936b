//! Aztec Xiuhpohualli: eighteen veintenas of twenty days followed by five
//! nemontemi, with no leap correction. Anchored by the Caso correlation
//! (Julian 1521-08-13, the fall of Tenochtitlan, is 2 Xocotl Huetzi).

use super::{CalendarDate, ConversionError, invalid};
use crate::consts::AZTEC_CORRELATION;
use crate::jdn::Jdn;
use crate::registry::CalendarId;

pub const YEAR_LENGTH: i64 = 365;
/// Years in a Xiuhmolpilli ("binding of the years").
pub const XIUHMOLPILLI_YEARS: i64 = 52;
pub const NEMONTEMI: u8 = 19;

pub const MONTH_NAMES: [&str; 19] = [
    "Izcalli",
    "Atlcahualo",
    "Tlacaxipehualiztli",
    "Tozoztontli",
    "Huey Tozoztli",
    "Toxcatl",
    "Etzalcualiztli",
    "Tecuilhuitontli",
    "Huey Tecuilhuitl",
    "Tlaxochimaco",
    "Xocotl Huetzi",
    "Ochpaniztli",
    "Teotleco",
    "Tepeilhuitl",
    "Quecholli",
    "Panquetzaliztli",
    "Atemoztli",
    "Tititl",
    "Nemontemi",
];

pub const fn month_length(month: u8) -> u8 {
    if month == NEMONTEMI { 5 } else { 20 }
}

pub const fn from_jdn(jdn: Jdn) -> CalendarDate {
    let d = jdn.get() - AZTEC_CORRELATION;
    let position = d.rem_euclid(YEAR_LENGTH);
    CalendarDate::new(
        CalendarId::AztecXiuhpohualli,
        d.div_euclid(YEAR_LENGTH),
        (position / 20 + 1) as u8,
        (position % 20 + 1) as u8,
    )
}

pub fn to_jdn(date: &CalendarDate) -> Result<Jdn, ConversionError> {
    let (month, day) = date.month_day()?;
    if month == 0 || month > NEMONTEMI || day == 0 || day > month_length(month) {
        return Err(invalid(date.calendar, format!("day {day} of veintena {month}")));
    }
    let position = (i64::from(month) - 1) * 20 + i64::from(day) - 1;
    Ok(Jdn::new(AZTEC_CORRELATION + date.year * YEAR_LENGTH + position))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jdn::julian_to_jdn;

    #[test]
    fn test_fall_of_tenochtitlan() {
        let jdn = julian_to_jdn(1521, 8, 13);
        let date = from_jdn(jdn);
        assert_eq!(date, CalendarDate::new(CalendarId::AztecXiuhpohualli, 0, 11, 2));
        assert_eq!(MONTH_NAMES[10], "Xocotl Huetzi");
        assert_eq!(to_jdn(&date).unwrap(), jdn);
    }

    #[test]
    fn test_nemontemi() {
        let last = Jdn::new(AZTEC_CORRELATION + YEAR_LENGTH - 1);
        assert_eq!(from_jdn(last), CalendarDate::new(CalendarId::AztecXiuhpohualli, 0, 19, 5));
        assert_eq!(from_jdn(last + 1), CalendarDate::new(CalendarId::AztecXiuhpohualli, 1, 1, 1));
        let bad = CalendarDate::new(CalendarId::AztecXiuhpohualli, 0, NEMONTEMI, 6);
        assert!(to_jdn(&bad).is_err());
    }

    #[test]
    fn test_before_correlation() {
        let jdn = Jdn::new(AZTEC_CORRELATION - 1);
        let date = from_jdn(jdn);
        assert_eq!(date, CalendarDate::new(CalendarId::AztecXiuhpohualli, -1, 19, 5));
        assert_eq!(to_jdn(&date).unwrap(), jdn);
    }
}
