//! Badí' (Bahá'í) calendar with the fixed March 21 Naw-Rúz.
//!
//! Nineteen months of nineteen days; the intercalary days of Ayyám-i-Há fall
//! between the 18th and 19th months and are numbered here as month `0`.

use super::{CalendarDate, ConversionError, Extra, check_day, invalid};
use crate::consts::BAHAI_YEAR_OFFSET;
use crate::jdn::{Jdn, gregorian_to_jdn, jdn_to_gregorian};
use crate::registry::CalendarId;

pub const AYYAM_I_HA: u8 = 0;
pub const AYYAM_I_HA_NAME: &str = "Ayyám-i-Há";

pub const MONTH_NAMES: [&str; 19] = [
    "Bahá", "Jalál", "Jamál", "'Aẓamat", "Núr", "Raḥmat", "Kalimát", "Kamál", "Asmá'", "'Izzat",
    "Mashíyyat", "'Ilm", "Qudrat", "Qawl", "Masá'il", "Sharaf", "Sulṭán", "Mulk", "'Alá'",
];

/// Years in a Váḥid.
pub const VAHID_YEARS: i64 = 19;
/// Years in a Kull-i-Shay' (19 Váḥids).
pub const KULL_I_SHAY_YEARS: i64 = 361;

/// Offset of Ayyám-i-Há from Naw-Rúz (after 18 months).
const AYYAM_I_HA_OFFSET: i64 = 18 * 19;

pub fn month_name(month: u8) -> &'static str {
    match month {
        AYYAM_I_HA => AYYAM_I_HA_NAME,
        1..=19 => MONTH_NAMES[usize::from(month - 1)],
        _ => "",
    }
}

/// JDN of Naw-Rúz starting `year`.
pub const fn new_year(year: i64) -> Jdn {
    gregorian_to_jdn(year + BAHAI_YEAR_OFFSET, 3, 21)
}

pub fn year_length(year: i64) -> i64 {
    new_year(year + 1) - new_year(year)
}

pub fn month_length(year: i64, month: u8) -> u8 {
    if month == AYYAM_I_HA {
        // 4 or 5 days
        (year_length(year) - 361) as u8
    } else {
        19
    }
}

/// Position of `year` in the Váḥid and Kull-i-Shay' cycles.
pub const fn cycles(year: i64) -> Extra {
    let elapsed = year - 1;
    Extra::Bahai {
        kull_i_shay: elapsed.div_euclid(KULL_I_SHAY_YEARS) + 1,
        vahid: (elapsed.rem_euclid(KULL_I_SHAY_YEARS) / VAHID_YEARS) as u8 + 1,
        year_of_vahid: elapsed.rem_euclid(VAHID_YEARS) as u8 + 1,
    }
}

pub fn from_jdn(jdn: Jdn) -> CalendarDate {
    let (gregorian_year, _, _) = jdn_to_gregorian(jdn);
    let mut year = gregorian_year - BAHAI_YEAR_OFFSET;
    if jdn < new_year(year) {
        year -= 1;
    }
    let offset = jdn - new_year(year);
    let last_month_start = new_year(year + 1) - 19;
    let (month, day) = if offset < AYYAM_I_HA_OFFSET {
        (offset / 19 + 1, offset % 19 + 1)
    } else if jdn < last_month_start {
        (i64::from(AYYAM_I_HA), offset - AYYAM_I_HA_OFFSET + 1)
    } else {
        (19, jdn - last_month_start + 1)
    };
    CalendarDate::new(CalendarId::Bahai, year, month as u8, day as u8).with_extra(cycles(year))
}

pub fn to_jdn(date: &CalendarDate) -> Result<Jdn, ConversionError> {
    let (month, day) = date.month_day()?;
    if month > 19 {
        return Err(invalid(date.calendar, format!("month {month} (must be 0-19)")));
    }
    check_day(date.calendar, date.year, month, day, month_length(date.year, month))?;
    let day = i64::from(day) - 1;
    Ok(match month {
        AYYAM_I_HA => new_year(date.year) + AYYAM_I_HA_OFFSET + day,
        19 => new_year(date.year + 1) - 19 + day,
        _ => new_year(date.year) + (i64::from(month) - 1) * 19 + day,
    })
}
