//! Thai solar calendar: Gregorian months, Buddhist Era years.

use super::{CalendarDate, ConversionError, gregorian};
use crate::consts::THAI_YEAR_OFFSET;
use crate::jdn::Jdn;
use crate::registry::CalendarId;

pub const MONTH_NAMES: [&str; 12] = gregorian::MONTH_NAMES;

pub fn from_jdn(jdn: Jdn) -> CalendarDate {
    let date = gregorian::from_jdn(jdn);
    CalendarDate {
        calendar: CalendarId::ThaiBuddhist,
        year: date.year + THAI_YEAR_OFFSET,
        ..date
    }
}

pub fn to_jdn(date: &CalendarDate) -> Result<Jdn, ConversionError> {
    gregorian::to_jdn(&CalendarDate {
        year: date.year - THAI_YEAR_OFFSET,
        ..*date
    })
}

pub const fn month_length(year: i64, month: u8) -> u8 {
    gregorian::month_length(year - THAI_YEAR_OFFSET, month)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jdn::gregorian_to_jdn;

    #[test]
    fn test_buddhist_era() {
        let jdn = gregorian_to_jdn(2024, 4, 13);
        let date = from_jdn(jdn);
        assert_eq!(date, CalendarDate::new(CalendarId::ThaiBuddhist, 2567, 4, 13));
        assert_eq!(to_jdn(&date).unwrap(), jdn);
    }

    #[test]
    fn test_leap_day_follows_gregorian_year() {
        assert_eq!(month_length(2567, 2), 29);
        assert_eq!(month_length(2566, 2), 28);
    }
}
