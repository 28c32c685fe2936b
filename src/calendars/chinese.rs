//! Chinese lunisolar calendar (modern rules, Beijing time).
//!
//! Months start on the day of the new moon at UTC+8. A sui runs from the
//! month containing one winter solstice to the month containing the next;
//! when it holds thirteen months the first one without a major solar term
//! (zhongqi) is the leap month and repeats the previous month's number.

use super::{CalendarDate, ConversionError, Extra, invalid};
use crate::astro::{
    UtcOffset, civil_day, lunation_on_or_before, new_moon, new_moon_after, solar_longitude_after,
};
use crate::consts::CHINA_UTC_OFFSET_MINUTES;
use crate::jdn::{Jdn, gregorian_to_jdn, jdn_to_gregorian};
use crate::registry::CalendarId;

pub const BEIJING: UtcOffset = UtcOffset::from_minutes(CHINA_UTC_OFFSET_MINUTES);

/// Solar longitude of the winter solstice, the first zhongqi of a sui.
const WINTER_SOLSTICE: f64 = 270.0;

const STEMS: [&str; 10] = ["甲", "乙", "丙", "丁", "戊", "己", "庚", "辛", "壬", "癸"];
const BRANCHES: [&str; 12] = ["子", "丑", "寅", "卯", "辰", "巳", "午", "未", "申", "酉", "戌", "亥"];
const DIGITS: [&str; 10] = ["十", "一", "二", "三", "四", "五", "六", "七", "八", "九"];

/// Month names as used in labels, without the leap prefix.
pub const MONTH_NAMES: [&str; 12] = [
    "正月", "二月", "三月", "四月", "五月", "六月", "七月", "八月", "九月", "十月", "冬月", "臘月",
];

/// One month of a sui.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct LunarMonth {
    number: u8,
    leap: bool,
    start: Jdn,
}

/// The months between two winter-solstice months, plus the start of the next
/// sui's month 11.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Sui {
    months: Vec<LunarMonth>,
    end: Jdn,
}

const fn non_convergent(iterations: u32) -> ConversionError {
    ConversionError::NonConvergent {
        calendar: CalendarId::Chinese,
        iterations,
    }
}

impl Sui {
    /// The sui ending at the winter solstice of Gregorian `year`.
    fn compute(year: i64, max_iterations: u32) -> Result<Self, ConversionError> {
        // The 13 zhongqi days from the previous winter solstice to this one
        let mut moment = gregorian_to_jdn(year - 1, 12, 1).get() as f64 - 0.5;
        let mut major_terms = [Jdn::new(0); 13];
        for (i, term) in major_terms.iter_mut().enumerate() {
            let longitude = (WINTER_SOLSTICE + 30.0 * i as f64) % 360.0;
            moment = solar_longitude_after(longitude, moment, max_iterations)
                .ok_or(non_convergent(max_iterations))?;
            *term = civil_day(moment, BEIJING);
            moment += 1.0;
        }

        let first = lunation_on_or_before(major_terms[0], BEIJING);
        let last = lunation_on_or_before(major_terms[12], BEIJING);
        let count = last - first;
        if !(12..=13).contains(&count) {
            tracing::debug!(year, count, "sui without 12 or 13 lunations");
            return Err(non_convergent(max_iterations));
        }
        let starts: Vec<Jdn> = (first..=last).map(|k| civil_day(new_moon(k), BEIJING)).collect();

        let mut needs_leap = count == 13;
        let mut number = 10;
        let mut term = 0;
        let mut months = Vec::with_capacity(starts.len() - 1);
        for window in starts.windows(2) {
            let (start, next) = (window[0], window[1]);
            if needs_leap && major_terms.get(term).is_some_and(|&zhongqi| next <= zhongqi) {
                months.push(LunarMonth {
                    number,
                    leap: true,
                    start,
                });
                needs_leap = false;
                continue;
            }
            number = number % 12 + 1;
            months.push(LunarMonth {
                number,
                leap: false,
                start,
            });
            term += 1;
        }

        Ok(Self {
            months,
            end: starts[starts.len() - 1],
        })
    }

    fn start(&self) -> Option<Jdn> {
        self.months.first().map(|month| month.start)
    }

    /// Month containing `jdn` with its length in days.
    fn locate(&self, jdn: Jdn) -> Option<(LunarMonth, i64)> {
        let ends = self.months.iter().skip(1).map(|m| m.start).chain([self.end]);
        self.months
            .iter()
            .zip(ends)
            .find(|(month, next)| month.start <= jdn && jdn < *next)
            .map(|(month, next)| (*month, next - month.start))
    }

    fn find(&self, number: u8, leap: bool) -> Option<(LunarMonth, i64)> {
        let ends = self.months.iter().skip(1).map(|m| m.start).chain([self.end]);
        self.months
            .iter()
            .zip(ends)
            .find(|(month, _)| month.number == number && month.leap == leap)
            .map(|(month, next)| (*month, next - month.start))
    }
}

/// Position of a Chinese year in the sexagenary cycle, `1..=60` (1984 is 甲子).
pub const fn cycle_year(year: i64) -> u8 {
    ((year - 4).rem_euclid(60) + 1) as u8
}

/// Stem-branch name of a cycle position (`1` is 甲子).
pub fn sexagenary(position: u8) -> String {
    let index = usize::from(position.saturating_sub(1));
    format!("{}{}", STEMS[index % 10], BRANCHES[index % 12])
}

pub fn month_name(month: u8, leap: bool) -> String {
    let name = MONTH_NAMES
        .get(usize::from(month.saturating_sub(1)))
        .copied()
        .unwrap_or_default();
    if leap { format!("閏{name}") } else { name.to_owned() }
}

/// 初一 … 初十, 十一 … 十九, 二十, 廿一 … 廿九, 三十.
pub fn day_name(day: u8) -> String {
    let prefix = match day {
        1..=10 => "初",
        11..=19 => "十",
        20 => "二",
        21..=29 => "廿",
        _ => "三",
    };
    format!("{prefix}{}", DIGITS[usize::from(day % 10)])
}

/// Length of the month starting on `start`: 29 or 30 days.
pub fn month_length(start: Jdn) -> u8 {
    (new_moon_after(start, BEIJING) - start) as u8
}

pub fn from_jdn(jdn: Jdn, max_iterations: u32) -> Result<CalendarDate, ConversionError> {
    let (mut sui_year, _, _) = jdn_to_gregorian(jdn);
    for iteration in 0..max_iterations {
        let sui = Sui::compute(sui_year, max_iterations)?;
        if sui.start().is_some_and(|start| jdn < start) {
            sui_year -= 1;
            continue;
        }
        if jdn >= sui.end {
            sui_year += 1;
            continue;
        }
        let (month, _) = sui.locate(jdn).ok_or(non_convergent(max_iterations))?;
        tracing::trace!(sui_year, iterations = iteration + 1, "chinese month located");
        let year = if month.number >= 11 { sui_year - 1 } else { sui_year };
        let day = (jdn - month.start + 1) as u8;
        return Ok(CalendarDate::new(CalendarId::Chinese, year, month.number, day).with_extra(
            Extra::Chinese {
                leap_month: month.leap,
                cycle_year: cycle_year(year),
            },
        ));
    }
    Err(non_convergent(max_iterations))
}

pub fn to_jdn(date: &CalendarDate, max_iterations: u32) -> Result<Jdn, ConversionError> {
    let (number, day) = date.month_day()?;
    let leap = date.is_leap_month();
    let sui_year = if number >= 11 { date.year + 1 } else { date.year };
    let sui = Sui::compute(sui_year, max_iterations)?;
    let (month, length) = sui.find(number, leap).ok_or_else(|| {
        let prefix = if leap { "leap " } else { "" };
        let reason = format!("{prefix}month {number} does not occur in year {}", date.year);
        invalid(date.calendar, reason)
    })?;
    if day == 0 || i64::from(day) > length {
        return Err(invalid(
            date.calendar,
            format!("day {day} of month {number} in year {} (must be 1-{length})", date.year),
        ));
    }
    Ok(month.start + i64::from(day) - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    const LIMIT: u32 = 16;

    fn chinese(year: i64, month: u8, leap: bool, day: u8) -> CalendarDate {
        CalendarDate::new(CalendarId::Chinese, year, month, day).with_extra(Extra::Chinese {
            leap_month: leap,
            cycle_year: cycle_year(year),
        })
    }

    #[test]
    fn test_known_dates() {
        for ((y, m, d), expected) in [
            ((2000, 1, 1), chinese(1999, 11, false, 25)),
            ((1970, 1, 1), chinese(1969, 11, false, 24)),
            ((2017, 1, 28), chinese(2017, 1, false, 1)),
            ((2017, 7, 23), chinese(2017, 6, true, 1)),
            ((2023, 3, 22), chinese(2023, 2, true, 1)),
            ((2024, 2, 9), chinese(2023, 12, false, 30)),
            ((2024, 2, 10), chinese(2024, 1, false, 1)),
        ] {
            let jdn = gregorian_to_jdn(y, m, d);
            let date = from_jdn(jdn, LIMIT).unwrap();
            assert_eq!(date, expected, "{y}-{m}-{d}");
            assert_eq!(to_jdn(&date, LIMIT).unwrap(), jdn);
        }
    }

    #[test]
    fn test_leap_months() {
        for (year, leap_month) in [(2017, 6), (2020, 4), (2023, 2)] {
            let sui = Sui::compute(year, LIMIT).unwrap();
            assert_eq!(sui.months.len(), 13, "{year}");
            let leaps: Vec<u8> = sui.months.iter().filter(|m| m.leap).map(|m| m.number).collect();
            assert_eq!(leaps, [leap_month], "{year}");
        }
        assert_eq!(Sui::compute(2024, LIMIT).unwrap().months.len(), 12);
    }

    #[test]
    fn test_missing_leap_month_is_invalid() {
        let result = to_jdn(&chinese(2024, 6, true, 1), LIMIT);
        assert!(matches!(result, Err(ConversionError::InvalidDate { .. })));
    }

    #[test]
    fn test_names() {
        assert_eq!(cycle_year(1984), 1);
        assert_eq!(sexagenary(cycle_year(1999)), "己卯");
        assert_eq!(sexagenary(cycle_year(2024)), "甲辰");
        assert_eq!(sexagenary(60), "癸亥");
        assert_eq!(month_name(11, false), "冬月");
        assert_eq!(month_name(6, true), "閏六月");
        assert_eq!(month_name(1, false), "正月");
        for (day, name) in [(1, "初一"), (10, "初十"), (11, "十一"), (20, "二十"), (25, "廿五"), (30, "三十")] {
            assert_eq!(day_name(day), name);
        }
    }

    #[test]
    fn test_month_length() {
        // 臘月 of 2023 runs from 2024-01-11 to 2024-02-09
        assert_eq!(month_length(gregorian_to_jdn(2024, 1, 11)), 30);
    }

    #[test]
    fn test_search_cap() {
        let jdn = gregorian_to_jdn(2024, 2, 10);
        assert!(matches!(
            from_jdn(jdn, 0),
            Err(ConversionError::NonConvergent { .. })
        ));
    }
}
