//! Mayan Long Count, Tzolk'in and Haab' under the GMT correlation
//! (JDN 584283 = 13.0.0.0.0 4 Ajaw 8 Kumk'u).

use super::{CalendarDate, ConversionError, Extra, invalid};
use crate::consts::MAYAN_CORRELATION;
use crate::jdn::Jdn;
use crate::registry::CalendarId;

pub const KIN_PER_WINAL: i64 = 20;
pub const KIN_PER_TUN: i64 = 360;
pub const KIN_PER_KATUN: i64 = 7_200;
pub const KIN_PER_BAKTUN: i64 = 144_000;
pub const TZOLKIN_ROUND: i64 = 260;
pub const HAAB_YEAR: i64 = 365;
/// 52 Haab' years, 73 Tzolk'in rounds.
pub const CALENDAR_ROUND: i64 = 18_980;
pub const WAYEB: u8 = 19;

/// Haab' position of the correlation day (8 Kumk'u) counted from 0 Pop.
const HAAB_EPOCH_OFFSET: i64 = 348;

pub const TZOLKIN_NAMES: [&str; 20] = [
    "Imix", "Ik'", "Ak'b'al", "K'an", "Chikchan", "Kimi", "Manik'", "Lamat", "Muluk", "Ok",
    "Chuwen", "Eb'", "B'en", "Ix", "Men", "K'ib'", "Kab'an", "Etz'nab'", "Kawak", "Ajaw",
];

pub const HAAB_MONTH_NAMES: [&str; 19] = [
    "Pop", "Wo'", "Sip", "Sotz'", "Sek", "Xul", "Yaxk'in", "Mol", "Ch'en", "Yax", "Sak'", "Keh",
    "Mak", "K'ank'in", "Muwan", "Pax", "K'ayab", "Kumk'u", "Wayeb'",
];

/// Days since the correlation day.
const fn days(jdn: Jdn) -> i64 {
    jdn.get() - MAYAN_CORRELATION
}

pub const fn long_count(jdn: Jdn) -> CalendarDate {
    let d = days(jdn);
    let baktun = d.div_euclid(KIN_PER_BAKTUN);
    let r = d.rem_euclid(KIN_PER_BAKTUN);
    CalendarDate {
        calendar: CalendarId::MayanLongCount,
        year: baktun,
        month: None,
        day: None,
        extra: Some(Extra::LongCount {
            katun: (r / KIN_PER_KATUN) as u8,
            tun: (r % KIN_PER_KATUN / KIN_PER_TUN) as u8,
            winal: (r % KIN_PER_TUN / KIN_PER_WINAL) as u8,
            kin: (r % KIN_PER_WINAL) as u8,
        }),
    }
}

pub fn long_count_to_jdn(date: &CalendarDate) -> Result<Jdn, ConversionError> {
    let Some(Extra::LongCount {
        katun,
        tun,
        winal,
        kin,
    }) = date.extra
    else {
        return Err(invalid(date.calendar, "long count places are required"));
    };
    if katun >= 20 || tun >= 20 || winal >= 18 || kin >= 20 {
        return Err(invalid(
            date.calendar,
            format!("{}.{katun}.{tun}.{winal}.{kin} is not a valid long count", date.year),
        ));
    }
    let d = date.year * KIN_PER_BAKTUN
        + i64::from(katun) * KIN_PER_KATUN
        + i64::from(tun) * KIN_PER_TUN
        + i64::from(winal) * KIN_PER_WINAL
        + i64::from(kin);
    Ok(Jdn::new(MAYAN_CORRELATION + d))
}

/// `b.k.t.w.k` notation.
pub fn format_long_count(date: &CalendarDate) -> String {
    match date.extra {
        Some(Extra::LongCount {
            katun,
            tun,
            winal,
            kin,
        }) => format!("{}.{katun}.{tun}.{winal}.{kin}", date.year),
        _ => date.year.to_string(),
    }
}

/// The `year` field counts 260-day rounds since the correlation day.
pub const fn tzolkin(jdn: Jdn) -> CalendarDate {
    let d = days(jdn);
    CalendarDate {
        calendar: CalendarId::MayanTzolkin,
        year: d.div_euclid(TZOLKIN_ROUND),
        month: None,
        day: None,
        extra: Some(Extra::Tzolkin {
            number: ((d + 3).rem_euclid(13) + 1) as u8,
            name: ((d + 19).rem_euclid(20) + 1) as u8,
        }),
    }
}

pub fn tzolkin_to_jdn(date: &CalendarDate) -> Result<Jdn, ConversionError> {
    let Some(Extra::Tzolkin { number, name }) = date.extra else {
        return Err(invalid(date.calendar, "tzolk'in number and name are required"));
    };
    if !(1..=13).contains(&number) || !(1..=20).contains(&name) {
        return Err(invalid(date.calendar, format!("{number} {name} is not a tzolk'in day")));
    }
    // Chinese remainder theorem: 40 is 1 mod 13 and 0 mod 20, 221 the reverse
    let a = (i64::from(number) - 4).rem_euclid(13);
    let b = i64::from(name).rem_euclid(20);
    let position = (40 * a + 221 * b).rem_euclid(TZOLKIN_ROUND);
    Ok(Jdn::new(MAYAN_CORRELATION + date.year * TZOLKIN_ROUND + position))
}

pub fn tzolkin_name(name: u8) -> &'static str {
    TZOLKIN_NAMES
        .get(usize::from(name.saturating_sub(1)))
        .copied()
        .unwrap_or_default()
}

/// Haab' months run 1..=19 (Wayeb' last); days are 0-based as in
/// inscriptions ("seating" of the month).
pub const fn haab(jdn: Jdn) -> CalendarDate {
    let h = days(jdn) + HAAB_EPOCH_OFFSET;
    let position = h.rem_euclid(HAAB_YEAR);
    CalendarDate::new(
        CalendarId::MayanHaab,
        h.div_euclid(HAAB_YEAR),
        (position / 20 + 1) as u8,
        (position % 20) as u8,
    )
}

pub const fn haab_month_length(month: u8) -> u8 {
    if month == WAYEB { 5 } else { 20 }
}

pub fn haab_to_jdn(date: &CalendarDate) -> Result<Jdn, ConversionError> {
    let (month, day) = date.month_day()?;
    if month == 0 || month > WAYEB || day >= haab_month_length(month) {
        let reason = format!("day {day} of month {month} is not a haab' day");
        return Err(invalid(date.calendar, reason));
    }
    let position = (i64::from(month) - 1) * 20 + i64::from(day);
    Ok(Jdn::new(MAYAN_CORRELATION + date.year * HAAB_YEAR + position - HAAB_EPOCH_OFFSET))
}

pub fn haab_month_name(month: u8) -> &'static str {
    HAAB_MONTH_NAMES
        .get(usize::from(month.saturating_sub(1)))
        .copied()
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jdn::gregorian_to_jdn;

    #[test]
    fn test_end_of_baktun_13() {
        let jdn = gregorian_to_jdn(2012, 12, 21);
        let lc = long_count(jdn);
        assert_eq!(format_long_count(&lc), "13.0.0.0.0");
        assert_eq!(long_count_to_jdn(&lc).unwrap(), jdn);

        let tz = tzolkin(jdn);
        assert_eq!(tz.extra, Some(Extra::Tzolkin { number: 4, name: 20 }));
        assert_eq!(tz.year, 7200);
        assert_eq!(tzolkin_to_jdn(&tz).unwrap(), jdn);
        assert_eq!(tzolkin_name(20), "Ajaw");

        let hb = haab(jdn);
        assert_eq!((hb.year, hb.month, hb.day), (5129, Some(14), Some(3)));
        assert_eq!(haab_month_name(14), "K'ank'in");
        assert_eq!(haab_to_jdn(&hb).unwrap(), jdn);
    }

    #[test]
    fn test_correlation_day() {
        let jdn = Jdn::new(MAYAN_CORRELATION);
        assert_eq!(format_long_count(&long_count(jdn)), "0.0.0.0.0");
        assert_eq!(tzolkin(jdn).extra, Some(Extra::Tzolkin { number: 4, name: 20 }));
        let hb = haab(jdn);
        assert_eq!((hb.month, hb.day), (Some(18), Some(8)));
        assert_eq!(haab_month_name(18), "Kumk'u");
    }

    #[test]
    fn test_tzolkin_inverse_covers_whole_round() {
        for offset in 0..TZOLKIN_ROUND {
            let jdn = Jdn::new(2_451_545 + offset);
            assert_eq!(tzolkin_to_jdn(&tzolkin(jdn)).unwrap(), jdn);
        }
    }

    #[test]
    fn test_wayeb_has_five_days() {
        let date = CalendarDate::new(CalendarId::MayanHaab, 5129, WAYEB, 4);
        assert!(haab_to_jdn(&date).is_ok());
        let date = CalendarDate::new(CalendarId::MayanHaab, 5129, WAYEB, 5);
        assert!(haab_to_jdn(&date).is_err());
    }

    #[test]
    fn test_invalid_long_count() {
        let date = CalendarDate {
            extra: Some(Extra::LongCount {
                katun: 0,
                tun: 0,
                winal: 18,
                kin: 0,
            }),
            ..long_count(Jdn::new(MAYAN_CORRELATION))
        };
        assert!(long_count_to_jdn(&date).is_err());
    }
}
