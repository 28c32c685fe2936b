/// Earliest supported proleptic Gregorian year (astronomical numbering, 0 is 1 BCE)
pub const MIN_YEAR: i32 = -9999;

/// Latest supported proleptic Gregorian year (inclusive)
pub const MAX_YEAR: i32 = 9999;

/// Maximum valid Gregorian month (December)
pub const MAX_MONTH: u8 = 12;

/// First day of month, used for lower bounds
pub const MIN_DAY: u8 = 1;

/// Month number for January
pub const JANUARY: u8 = 1;
/// Month number for February
pub const FEBRUARY: u8 = 2;
/// Month number for December
pub const DECEMBER: u8 = 12;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: i64 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: i64 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: i64 = 400;

/// Date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: char = '-';
/// Range separator (ISO 8601 extended format)
pub const RANGE_SEPARATOR: char = '/';
/// Month-first format separator (legacy US format)
pub const MONTH_FIRST_SEPARATOR: char = '/';

/// JDN of proleptic Gregorian 0000-03-01, origin of the 400-year era arithmetic
pub(crate) const GREGORIAN_MARCH_EPOCH: i64 = 1_721_120;
/// JDN of proleptic Julian 0000-03-01
pub(crate) const JULIAN_MARCH_EPOCH: i64 = 1_721_118;
pub(crate) const DAYS_PER_GREGORIAN_ERA: i64 = 146_097;
pub(crate) const DAYS_PER_JULIAN_CYCLE: i64 = 1_461;

/// 1 Muharram AH 1 (civil epoch, Julian 622-07-16)
pub const ISLAMIC_EPOCH: i64 = 1_948_440;
/// 1 Tishrei AM 1 (Julian 3761 BCE October 7)
pub const HEBREW_EPOCH: i64 = 347_998;
/// 1 Meskerem 1 Amete Mihret (Julian 8 CE August 29)
pub const ETHIOPIAN_EPOCH: i64 = 1_724_221;
/// 1 Thout 1 Anno Martyrum (Julian 284 CE August 29)
pub const COPTIC_EPOCH: i64 = 1_825_030;
/// GMT correlation: JDN of Long Count 0.0.0.0.0 (4 Ajaw 8 Kumk'u)
pub const MAYAN_CORRELATION: i64 = 584_283;
/// Caso correlation: JDN of 1 Izcalli of the Xiuhpohualli count
/// (Julian 1521-08-13 is 2 Xocotl Huetzi)
pub const AZTEC_CORRELATION: i64 = 2_276_627;
/// JDN at which the Cherokee thirteen-moon count starts (2000-01-01)
pub const CHEROKEE_CORRELATION: i64 = 2_451_545;
/// JDN at which the Iroquois thirteen-moon count starts, the first new moon
/// after the 1999 winter solstice (2000-01-06)
pub const IROQUOIS_CORRELATION: i64 = 2_451_550;

/// Saka year = Gregorian year - 78
pub const SAKA_YEAR_OFFSET: i64 = 78;
/// Badi year 1 began on 1844-03-21
pub const BAHAI_YEAR_OFFSET: i64 = 1843;
/// Buddhist Era year = Gregorian year + 543
pub const THAI_YEAR_OFFSET: i64 = 543;
/// Persian year = Gregorian year of its Nowruz - 621
pub const PERSIAN_YEAR_OFFSET: i64 = 621;

/// Gregorian years in which the astronomical calendars (Chinese, Persian)
/// are considered well-behaved
pub const ASTRONOMICAL_MIN_YEAR: i64 = -1000;
/// See [`ASTRONOMICAL_MIN_YEAR`]
pub const ASTRONOMICAL_MAX_YEAR: i64 = 3000;

/// Default cap on every bounded calendrical search
pub const MAX_SEARCH_ITERATIONS: u32 = 16;

/// Minutes east of UTC used for Chinese new moons and solar terms
pub const CHINA_UTC_OFFSET_MINUTES: i32 = 480;
/// Minutes east of UTC used for the Persian vernal equinox (Iran Standard Time)
pub const TEHRAN_UTC_OFFSET_MINUTES: i32 = 210;

/// Largest year magnitude accepted by any converter, checked before any day
/// arithmetic
pub const CALENDAR_YEAR_LIMIT: i64 = 1_000_000;
