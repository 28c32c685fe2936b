//! Julian Day Number core.
//!
//! Every converter routes through [`Jdn`]. The arithmetic is exact integer
//! arithmetic with floor division, so it stays correct for negative
//! (astronomical) years and for JDNs before the Julian Period.

use std::fmt;
use std::ops::{Add, Sub};

use serde::{Deserialize, Serialize};

use crate::consts::{
    DAYS_PER_GREGORIAN_ERA, DAYS_PER_JULIAN_CYCLE, GREGORIAN_MARCH_EPOCH, JULIAN_MARCH_EPOCH,
};
use crate::prelude::*;

/// A Julian Day Number: the continuous day count used as the interchange value
/// between every calendar. JDN 0 is Monday, January 1, 4713 BCE (proleptic
/// Julian); JDN 2451545 is Saturday, 2000-01-01.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Display,
    From,
    Into,
    Serialize,
    Deserialize,
)]
#[serde(transparent)]
pub struct Jdn(i64);

impl Jdn {
    /// Wraps a raw day number.
    #[inline]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Returns the raw day number.
    #[inline]
    pub const fn get(self) -> i64 {
        self.0
    }

    /// Day of week of this day.
    pub const fn weekday(self) -> Weekday {
        Weekday::from_monday_index(self.0.rem_euclid(7) as u8)
    }
}

impl Add<i64> for Jdn {
    type Output = Self;

    fn add(self, rhs: i64) -> Self::Output {
        Self(self.0 + rhs)
    }
}

impl Sub<i64> for Jdn {
    type Output = Self;

    fn sub(self, rhs: i64) -> Self::Output {
        Self(self.0 - rhs)
    }
}

impl Sub<Self> for Jdn {
    type Output = i64;

    fn sub(self, rhs: Self) -> Self::Output {
        self.0 - rhs.0
    }
}

/// Day of the week, ISO order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weekday {
    #[default]
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    const ALL: [Self; 7] = [
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
        Self::Sunday,
    ];

    /// `0` is Monday, `6` is Sunday; wraps modulo 7.
    pub const fn from_monday_index(index: u8) -> Self {
        Self::ALL[(index % 7) as usize]
    }

    /// `0` for Monday through `6` for Sunday.
    pub const fn monday_index(self) -> u8 {
        self as u8
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Monday => "Monday",
            Self::Tuesday => "Tuesday",
            Self::Wednesday => "Wednesday",
            Self::Thursday => "Thursday",
            Self::Friday => "Friday",
            Self::Saturday => "Saturday",
            Self::Sunday => "Sunday",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Day of year counted from March 1 (March = month 0), the shape that puts
/// the leap day at the end of the computational year.
const fn march_day_of_year(month: u8, day: u8) -> i64 {
    let mp = (month as i64 + 9) % 12;
    (153 * mp + 2) / 5 + day as i64 - 1
}

/// Inverse of [`march_day_of_year`].
const fn month_day_from_march(doy: i64) -> (u8, u8) {
    let mp = (5 * doy + 2) / 153;
    let day = doy - (153 * mp + 2) / 5 + 1;
    let month = if mp < 10 { mp + 3 } else { mp - 9 };
    (month as u8, day as u8)
}

/// Proleptic Gregorian date to JDN. `year` uses astronomical numbering.
///
/// ```
/// use calendrium::jdn::gregorian_to_jdn;
///
/// assert_eq!(2451545, gregorian_to_jdn(2000, 1, 1).get());
/// ```
pub const fn gregorian_to_jdn(year: i64, month: u8, day: u8) -> Jdn {
    let y = if month <= 2 { year - 1 } else { year };
    let era = y.div_euclid(400);
    let yoe = y - era * 400;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + march_day_of_year(month, day);
    Jdn(era * DAYS_PER_GREGORIAN_ERA + doe + GREGORIAN_MARCH_EPOCH)
}

/// JDN to proleptic Gregorian `(year, month, day)`.
///
/// ```
/// use calendrium::jdn::{jdn_to_gregorian, Jdn};
///
/// assert_eq!((2000, 1, 1), jdn_to_gregorian(Jdn::new(2451545)));
/// ```
pub const fn jdn_to_gregorian(jdn: Jdn) -> (i64, u8, u8) {
    let z = jdn.0 - GREGORIAN_MARCH_EPOCH;
    let era = z.div_euclid(DAYS_PER_GREGORIAN_ERA);
    let doe = z - era * DAYS_PER_GREGORIAN_ERA;
    let yoe = (doe - doe / 1460 + doe / 36524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let (month, day) = month_day_from_march(doy);
    let year = yoe + era * 400 + if month <= 2 { 1 } else { 0 };
    (year, month, day)
}

/// Proleptic Julian date to JDN. `year` uses astronomical numbering.
pub const fn julian_to_jdn(year: i64, month: u8, day: u8) -> Jdn {
    let y = if month <= 2 { year - 1 } else { year };
    let cycle = y.div_euclid(4);
    let yoc = y - cycle * 4;
    let doc = 365 * yoc + march_day_of_year(month, day);
    Jdn(cycle * DAYS_PER_JULIAN_CYCLE + doc + JULIAN_MARCH_EPOCH)
}

/// JDN to proleptic Julian `(year, month, day)`.
pub const fn jdn_to_julian(jdn: Jdn) -> (i64, u8, u8) {
    let z = jdn.0 - JULIAN_MARCH_EPOCH;
    let cycle = z.div_euclid(DAYS_PER_JULIAN_CYCLE);
    let doc = z - cycle * DAYS_PER_JULIAN_CYCLE;
    let yoc = (doc - doc / 1460) / 365;
    let (month, day) = month_day_from_march(doc - 365 * yoc);
    let year = cycle * 4 + yoc + if month <= 2 { 1 } else { 0 };
    (year, month, day)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_gregorian_jdns() {
        for ((y, m, d), jdn) in [
            ((2000, 1, 1), 2_451_545),
            ((1970, 1, 1), 2_440_588),
            ((2021, 9, 8), 2_459_466),
            ((1582, 10, 15), 2_299_161),
            ((-4713, 11, 24), 0),
            ((1, 1, 1), 1_721_426),
        ] {
            assert_eq!(gregorian_to_jdn(y, m, d).get(), jdn, "{y}-{m}-{d}");
            assert_eq!(jdn_to_gregorian(Jdn::new(jdn)), (y, m, d), "JDN {jdn}");
        }
    }

    #[test]
    fn test_known_julian_jdns() {
        for ((y, m, d), jdn) in [
            ((-4712, 1, 1), 0),
            ((1582, 10, 4), 2_299_160),
            ((622, 7, 16), 1_948_440),
            ((1521, 8, 13), 2_276_828),
        ] {
            assert_eq!(julian_to_jdn(y, m, d).get(), jdn, "{y}-{m}-{d}");
            assert_eq!(jdn_to_julian(Jdn::new(jdn)), (y, m, d), "JDN {jdn}");
        }
    }

    #[test]
    fn test_bce_round_trip() {
        let jdn = gregorian_to_jdn(-500, 3, 1);
        assert_eq!(jdn.get(), 1_538_498);
        assert_eq!(jdn_to_gregorian(jdn), (-500, 3, 1));
        assert_eq!(jdn_to_gregorian(gregorian_to_jdn(-500, 2, 29)), (-500, 2, 29));
        assert_eq!(jdn_to_gregorian(gregorian_to_jdn(0, 2, 29)), (0, 2, 29));
    }

    #[test]
    fn test_negative_jdns() {
        let jdn = gregorian_to_jdn(-9999, 1, 1);
        assert!(jdn.get() < 0);
        assert_eq!(jdn_to_gregorian(jdn), (-9999, 1, 1));
        assert_eq!(jdn_to_julian(julian_to_jdn(-9000, 12, 31)), (-9000, 12, 31));
    }

    #[test]
    fn test_weekday() {
        assert_eq!(Jdn::new(2_451_545).weekday(), Weekday::Saturday);
        assert_eq!(gregorian_to_jdn(1970, 1, 1).weekday(), Weekday::Thursday);
        assert_eq!(Jdn::new(0).weekday(), Weekday::Monday);
        assert_eq!(Jdn::new(-1).weekday(), Weekday::Sunday);
    }

    #[test]
    fn test_arithmetic() {
        let a = Jdn::new(2_451_545);
        assert_eq!((a + 10) - a, 10);
        assert_eq!((a - 1).get(), 2_451_544);
        assert_eq!(i64::from(a), 2_451_545);
        assert_eq!(Jdn::from(7), Jdn::new(7));
        assert_eq!(a.to_string(), "2451545");
    }
}
