//! Calendar registry: the closed set of supported calendars, their static
//! descriptors, and converter dispatch.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::calendars::{
    CalendarDate, ConversionError, aztec, bahai, chinese, ethiopic, gregorian, hebrew, invalid,
    islamic, julian, mayan, moons, persian, saka, thai,
};
use crate::consts::{
    ASTRONOMICAL_MAX_YEAR, ASTRONOMICAL_MIN_YEAR, AZTEC_CORRELATION, CALENDAR_YEAR_LIMIT,
    CHEROKEE_CORRELATION, COPTIC_EPOCH, DECEMBER, ETHIOPIAN_EPOCH, HEBREW_EPOCH,
    IROQUOIS_CORRELATION, ISLAMIC_EPOCH, JANUARY, MAX_SEARCH_ITERATIONS, MAX_YEAR,
    MAYAN_CORRELATION, MIN_DAY, MIN_YEAR,
};
use crate::jdn::{Jdn, gregorian_to_jdn, julian_to_jdn};

/// Identifier of a supported calendar.
///
/// Parses case-insensitively from its kebab-case id or a common alias:
///
/// ```
/// use calendrium::CalendarId;
///
/// assert_eq!("jalali".parse::<CalendarId>().unwrap(), CalendarId::Persian);
/// assert_eq!(CalendarId::IndianSaka.to_string(), "indian-saka");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CalendarId {
    Gregorian,
    Julian,
    Islamic,
    Hebrew,
    Persian,
    Chinese,
    Ethiopian,
    Coptic,
    IndianSaka,
    Bahai,
    ThaiBuddhist,
    MayanLongCount,
    MayanTzolkin,
    MayanHaab,
    Cherokee,
    Iroquois,
    AztecXiuhpohualli,
}

impl CalendarId {
    pub const ALL: [Self; 17] = [
        Self::Gregorian,
        Self::Julian,
        Self::Islamic,
        Self::Hebrew,
        Self::Persian,
        Self::Chinese,
        Self::Ethiopian,
        Self::Coptic,
        Self::IndianSaka,
        Self::Bahai,
        Self::ThaiBuddhist,
        Self::MayanLongCount,
        Self::MayanTzolkin,
        Self::MayanHaab,
        Self::Cherokee,
        Self::Iroquois,
        Self::AztecXiuhpohualli,
    ];

    /// The canonical kebab-case identifier.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Gregorian => "gregorian",
            Self::Julian => "julian",
            Self::Islamic => "islamic",
            Self::Hebrew => "hebrew",
            Self::Persian => "persian",
            Self::Chinese => "chinese",
            Self::Ethiopian => "ethiopian",
            Self::Coptic => "coptic",
            Self::IndianSaka => "indian-saka",
            Self::Bahai => "bahai",
            Self::ThaiBuddhist => "thai-buddhist",
            Self::MayanLongCount => "mayan-long-count",
            Self::MayanTzolkin => "mayan-tzolkin",
            Self::MayanHaab => "mayan-haab",
            Self::Cherokee => "cherokee",
            Self::Iroquois => "iroquois",
            Self::AztecXiuhpohualli => "aztec-xiuhpohualli",
        }
    }

    pub fn descriptor(self) -> &'static CalendarDescriptor {
        &DESCRIPTORS[self as usize]
    }
}

impl fmt::Display for CalendarId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CalendarId {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase().replace(['_', ' '], "-");
        if let Some(id) = Self::ALL.into_iter().find(|id| id.as_str() == key) {
            return Ok(id);
        }
        Ok(match key.as_str() {
            "hijri" | "islamic-civil" | "muslim" => Self::Islamic,
            "jewish" => Self::Hebrew,
            "jalali" | "solar-hijri" | "iranian" => Self::Persian,
            "lunar" | "chinese-lunar" => Self::Chinese,
            "ethiopic" => Self::Ethiopian,
            "saka" | "indian" | "indian-national" => Self::IndianSaka,
            "baha'i" | "badi" => Self::Bahai,
            "thai" | "buddhist" => Self::ThaiBuddhist,
            "long-count" | "mayan" => Self::MayanLongCount,
            "tzolkin" | "tzolk'in" => Self::MayanTzolkin,
            "haab" | "haab'" => Self::MayanHaab,
            "aztec" | "xiuhpohualli" => Self::AztecXiuhpohualli,
            _ => return Err(ConversionError::UnknownCalendar(s.to_owned())),
        })
    }
}

/// Broad family of a calendar, by how its days are computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CalendarKind {
    /// Closed-form solar or administrative calendar.
    Solar,
    /// Tabular lunar calendar.
    Lunar,
    /// Lunisolar calendar with intercalary months.
    Lunisolar,
    /// Solar calendar fixed by the observed equinox.
    AstronomicalSolar,
    /// Pure day count over fixed cycles.
    Count,
}

/// Static, per-calendar metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CalendarDescriptor {
    pub id: CalendarId,
    pub name: &'static str,
    /// Era suffix for year labels, empty when the calendar has none.
    pub era: &'static str,
    pub kind: CalendarKind,
    /// JDN of the calendar's epoch or correlation day.
    pub epoch: Jdn,
    /// Whether dates before `epoch` are out of range.
    pub starts_at_epoch: bool,
    /// Whether the calendar depends on the astronomical year window.
    pub astronomical: bool,
    pub month_names: &'static [&'static str],
    /// Month and day that open a year.
    pub first_month: u8,
    pub first_day: u8,
    /// Whether the calendar itself uses the seven-day week.
    pub native_week: bool,
}

impl CalendarDescriptor {
    /// Inclusive JDN window in which conversions are defined.
    pub const fn window(&self) -> (Jdn, Jdn) {
        let (min_year, max_year) = if self.astronomical {
            (ASTRONOMICAL_MIN_YEAR, ASTRONOMICAL_MAX_YEAR)
        } else {
            (MIN_YEAR as i64, MAX_YEAR as i64)
        };
        let mut start = gregorian_to_jdn(min_year, JANUARY, MIN_DAY);
        let end = gregorian_to_jdn(max_year, DECEMBER, 31);
        if self.starts_at_epoch && self.epoch.get() > start.get() {
            start = self.epoch;
        }
        (start, end)
    }

    pub const fn contains(&self, jdn: Jdn) -> bool {
        let (start, end) = self.window();
        start.get() <= jdn.get() && jdn.get() <= end.get()
    }
}

const fn descriptor(
    id: CalendarId,
    name: &'static str,
    era: &'static str,
    kind: CalendarKind,
    epoch: Jdn,
    month_names: &'static [&'static str],
) -> CalendarDescriptor {
    CalendarDescriptor {
        id,
        name,
        era,
        kind,
        epoch,
        starts_at_epoch: true,
        astronomical: false,
        month_names,
        first_month: 1,
        first_day: 1,
        native_week: false,
    }
}

static DESCRIPTORS: [CalendarDescriptor; 17] = [
    CalendarDescriptor {
        starts_at_epoch: false,
        native_week: true,
        ..descriptor(
            CalendarId::Gregorian,
            "Gregorian",
            "",
            CalendarKind::Solar,
            gregorian_to_jdn(1, 1, 1),
            &gregorian::MONTH_NAMES,
        )
    },
    CalendarDescriptor {
        starts_at_epoch: false,
        native_week: true,
        ..descriptor(
            CalendarId::Julian,
            "Julian",
            "",
            CalendarKind::Solar,
            julian_to_jdn(1, 1, 1),
            &gregorian::MONTH_NAMES,
        )
    },
    CalendarDescriptor {
        native_week: true,
        ..descriptor(
            CalendarId::Islamic,
            "Islamic (tabular)",
            "AH",
            CalendarKind::Lunar,
            Jdn::new(ISLAMIC_EPOCH),
            &islamic::MONTH_NAMES,
        )
    },
    CalendarDescriptor {
        first_month: hebrew::TISHRI,
        native_week: true,
        ..descriptor(
            CalendarId::Hebrew,
            "Hebrew",
            "AM",
            CalendarKind::Lunisolar,
            Jdn::new(HEBREW_EPOCH),
            &hebrew::MONTH_NAMES,
        )
    },
    CalendarDescriptor {
        astronomical: true,
        native_week: true,
        ..descriptor(
            CalendarId::Persian,
            "Persian (Solar Hijri)",
            "SH",
            CalendarKind::AstronomicalSolar,
            gregorian_to_jdn(622, 3, 22),
            &persian::MONTH_NAMES,
        )
    },
    CalendarDescriptor {
        starts_at_epoch: false,
        astronomical: true,
        ..descriptor(
            CalendarId::Chinese,
            "Chinese",
            "",
            CalendarKind::Lunisolar,
            // First day of the 甲子 year 1984
            gregorian_to_jdn(1984, 2, 2),
            &chinese::MONTH_NAMES,
        )
    },
    CalendarDescriptor {
        native_week: true,
        ..descriptor(
            CalendarId::Ethiopian,
            "Ethiopian",
            "EC",
            CalendarKind::Solar,
            Jdn::new(ETHIOPIAN_EPOCH),
            &ethiopic::ETHIOPIAN_MONTH_NAMES,
        )
    },
    CalendarDescriptor {
        native_week: true,
        ..descriptor(
            CalendarId::Coptic,
            "Coptic",
            "A.M.",
            CalendarKind::Solar,
            Jdn::new(COPTIC_EPOCH),
            &ethiopic::COPTIC_MONTH_NAMES,
        )
    },
    CalendarDescriptor {
        native_week: true,
        ..descriptor(
            CalendarId::IndianSaka,
            "Indian National (Saka)",
            "Saka",
            CalendarKind::Solar,
            saka::new_year(1),
            &saka::MONTH_NAMES,
        )
    },
    descriptor(
        CalendarId::Bahai,
        "Badí' (Bahá'í)",
        "B.E.",
        CalendarKind::Solar,
        bahai::new_year(1),
        &bahai::MONTH_NAMES,
    ),
    CalendarDescriptor {
        starts_at_epoch: false,
        native_week: true,
        ..descriptor(
            CalendarId::ThaiBuddhist,
            "Thai Buddhist",
            "BE",
            CalendarKind::Solar,
            gregorian_to_jdn(-542, 1, 1),
            &thai::MONTH_NAMES,
        )
    },
    descriptor(
        CalendarId::MayanLongCount,
        "Mayan Long Count",
        "",
        CalendarKind::Count,
        Jdn::new(MAYAN_CORRELATION),
        &[],
    ),
    CalendarDescriptor {
        starts_at_epoch: false,
        ..descriptor(
            CalendarId::MayanTzolkin,
            "Mayan Tzolk'in",
            "",
            CalendarKind::Count,
            Jdn::new(MAYAN_CORRELATION),
            &mayan::TZOLKIN_NAMES,
        )
    },
    CalendarDescriptor {
        starts_at_epoch: false,
        first_day: 0,
        ..descriptor(
            CalendarId::MayanHaab,
            "Mayan Haab'",
            "",
            CalendarKind::Count,
            Jdn::new(MAYAN_CORRELATION),
            &mayan::HAAB_MONTH_NAMES,
        )
    },
    CalendarDescriptor {
        starts_at_epoch: false,
        ..descriptor(
            CalendarId::Cherokee,
            "Cherokee",
            "",
            CalendarKind::Count,
            Jdn::new(CHEROKEE_CORRELATION),
            &moons::CHEROKEE_MONTH_NAMES,
        )
    },
    CalendarDescriptor {
        starts_at_epoch: false,
        ..descriptor(
            CalendarId::Iroquois,
            "Iroquois",
            "",
            CalendarKind::Count,
            Jdn::new(IROQUOIS_CORRELATION),
            &moons::IROQUOIS_MONTH_NAMES,
        )
    },
    CalendarDescriptor {
        starts_at_epoch: false,
        ..descriptor(
            CalendarId::AztecXiuhpohualli,
            "Aztec Xiuhpohualli",
            "",
            CalendarKind::Count,
            Jdn::new(AZTEC_CORRELATION),
            &aztec::MONTH_NAMES,
        )
    },
];

/// Converter for one calendar.
///
/// Cheap to copy; holds a reference into the static descriptor table and the
/// cap applied to bounded searches.
#[derive(Debug, Clone, Copy)]
pub struct Converter {
    descriptor: &'static CalendarDescriptor,
    max_iterations: u32,
}

impl Converter {
    pub const fn id(&self) -> CalendarId {
        self.descriptor.id
    }

    pub const fn descriptor(&self) -> &'static CalendarDescriptor {
        self.descriptor
    }

    #[must_use]
    pub const fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    fn check_window(&self, jdn: Jdn) -> Result<(), ConversionError> {
        if self.descriptor.contains(jdn) {
            Ok(())
        } else {
            Err(ConversionError::DateOutOfRange {
                calendar: self.id(),
                jdn,
            })
        }
    }

    /// The date on day `jdn`.
    ///
    /// # Errors
    /// `DateOutOfRange` outside the calendar's window, `NonConvergent` when a
    /// lunisolar or equinox search exceeds its cap.
    pub fn from_jdn(&self, jdn: Jdn) -> Result<CalendarDate, ConversionError> {
        self.check_window(jdn)?;
        let limit = self.max_iterations;
        let id = self.id();
        Ok(match id {
            CalendarId::Gregorian => gregorian::from_jdn(jdn),
            CalendarId::Julian => julian::from_jdn(jdn),
            CalendarId::Islamic => islamic::from_jdn(jdn),
            CalendarId::Hebrew => hebrew::from_jdn(jdn, limit)?,
            CalendarId::Persian => persian::from_jdn(jdn, limit)?,
            CalendarId::Chinese => chinese::from_jdn(jdn, limit)?,
            CalendarId::Ethiopian | CalendarId::Coptic => ethiopic::from_jdn(jdn, id),
            CalendarId::IndianSaka => saka::from_jdn(jdn),
            CalendarId::Bahai => bahai::from_jdn(jdn),
            CalendarId::ThaiBuddhist => thai::from_jdn(jdn),
            CalendarId::MayanLongCount => mayan::long_count(jdn),
            CalendarId::MayanTzolkin => mayan::tzolkin(jdn),
            CalendarId::MayanHaab => mayan::haab(jdn),
            CalendarId::Cherokee | CalendarId::Iroquois => moons::from_jdn(jdn, id),
            CalendarId::AztecXiuhpohualli => aztec::from_jdn(jdn),
        })
    }

    /// The day number of `date`.
    ///
    /// # Errors
    /// `InvalidDate` when the date belongs to another calendar or names a
    /// month or day that does not exist, `DateOutOfRange` when the day falls
    /// outside the window, `NonConvergent` as for [`Converter::from_jdn`].
    pub fn to_jdn(&self, date: &CalendarDate) -> Result<Jdn, ConversionError> {
        let id = self.id();
        if date.calendar != id {
            return Err(invalid(id, format!("date belongs to calendar {}", date.calendar)));
        }
        if date.year.unsigned_abs() > CALENDAR_YEAR_LIMIT.unsigned_abs() {
            return Err(invalid(id, format!("year {} is out of range", date.year)));
        }
        let limit = self.max_iterations;
        let jdn = match id {
            CalendarId::Gregorian => gregorian::to_jdn(date)?,
            CalendarId::Julian => julian::to_jdn(date)?,
            CalendarId::Islamic => islamic::to_jdn(date)?,
            CalendarId::Hebrew => hebrew::to_jdn(date)?,
            CalendarId::Persian => persian::to_jdn(date, limit)?,
            CalendarId::Chinese => chinese::to_jdn(date, limit)?,
            CalendarId::Ethiopian | CalendarId::Coptic => ethiopic::to_jdn(date)?,
            CalendarId::IndianSaka => saka::to_jdn(date)?,
            CalendarId::Bahai => bahai::to_jdn(date)?,
            CalendarId::ThaiBuddhist => thai::to_jdn(date)?,
            CalendarId::MayanLongCount => mayan::long_count_to_jdn(date)?,
            CalendarId::MayanTzolkin => mayan::tzolkin_to_jdn(date)?,
            CalendarId::MayanHaab => mayan::haab_to_jdn(date)?,
            CalendarId::Cherokee | CalendarId::Iroquois => moons::to_jdn(date)?,
            CalendarId::AztecXiuhpohualli => aztec::to_jdn(date)?,
        };
        self.check_window(jdn)?;
        Ok(jdn)
    }

    /// First and last month number of `year`.
    fn month_bounds(&self, year: i64) -> Result<(u8, u8), ConversionError> {
        Ok(match self.id() {
            CalendarId::Gregorian
            | CalendarId::Julian
            | CalendarId::Islamic
            | CalendarId::Persian
            | CalendarId::Chinese
            | CalendarId::IndianSaka
            | CalendarId::ThaiBuddhist => (1, 12),
            CalendarId::Hebrew => (1, hebrew::last_month(year)),
            CalendarId::Ethiopian | CalendarId::Coptic => (1, 13),
            CalendarId::Bahai => (bahai::AYYAM_I_HA, 19),
            CalendarId::MayanHaab => (1, mayan::WAYEB),
            CalendarId::Cherokee | CalendarId::Iroquois => (1, moons::last_month(self.id())),
            CalendarId::AztecXiuhpohualli => (1, aztec::NEMONTEMI),
            CalendarId::MayanLongCount | CalendarId::MayanTzolkin => {
                return Err(invalid(self.id(), "calendar has no months"));
            },
        })
    }

    /// Number of days in the month of `date`.
    ///
    /// # Errors
    /// `InvalidDate` for the cycle counts without months (Long Count,
    /// Tzolk'in); otherwise as for [`Converter::to_jdn`].
    pub fn month_length(&self, date: &CalendarDate) -> Result<u8, ConversionError> {
        let (month, _) = date.month_day()?;
        let year = date.year;
        let (first, last) = self.month_bounds(year)?;
        if month < first || month > last {
            return Err(invalid(self.id(), format!("month {month} (must be {first}-{last})")));
        }
        Ok(match self.id() {
            CalendarId::Gregorian => gregorian::month_length(year, month),
            CalendarId::Julian => julian::month_length(year, month),
            CalendarId::Islamic => islamic::month_length(year, month),
            CalendarId::Hebrew => hebrew::month_length(year, month),
            CalendarId::Persian => persian::month_length(year, month, self.max_iterations)?,
            CalendarId::Chinese => {
                let start = self.to_jdn(&CalendarDate {
                    day: Some(1),
                    ..*date
                })?;
                chinese::month_length(start)
            }
            CalendarId::Ethiopian | CalendarId::Coptic => ethiopic::month_length(year, month),
            CalendarId::IndianSaka => saka::month_length(year, month),
            CalendarId::Bahai => bahai::month_length(year, month),
            CalendarId::ThaiBuddhist => thai::month_length(year, month),
            CalendarId::MayanHaab => mayan::haab_month_length(month),
            CalendarId::Cherokee | CalendarId::Iroquois => moons::month_length(month),
            CalendarId::AztecXiuhpohualli => aztec::month_length(month),
            CalendarId::MayanLongCount | CalendarId::MayanTzolkin => {
                return Err(invalid(self.id(), "calendar has no months"));
            }
        })
    }
}

/// Converter for a calendar, with the default search cap.
pub fn converter(id: CalendarId) -> Converter {
    Converter {
        descriptor: id.descriptor(),
        max_iterations: MAX_SEARCH_ITERATIONS,
    }
}

/// Looks a converter up by identifier or alias.
///
/// # Errors
/// Returns `ConversionError::UnknownCalendar` for unrecognized identifiers.
pub fn get_converter(calendar: &str) -> Result<Converter, ConversionError> {
    calendar.parse().map(converter)
}

/// All supported calendars, in registry order.
pub fn list_supported_calendars() -> &'static [CalendarDescriptor] {
    &DESCRIPTORS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptor_table_matches_ids() {
        assert_eq!(list_supported_calendars().len(), 17);
        for (index, id) in CalendarId::ALL.into_iter().enumerate() {
            assert_eq!(list_supported_calendars()[index].id, id);
            assert_eq!(id.descriptor().id, id);
        }
    }

    #[test]
    fn test_parse_ids_and_aliases() {
        for id in CalendarId::ALL {
            assert_eq!(id.as_str().parse::<CalendarId>().unwrap(), id);
            assert_eq!(id.as_str().to_uppercase().parse::<CalendarId>().unwrap(), id);
        }
        for (alias, id) in [
            ("hijri", CalendarId::Islamic),
            ("Jewish", CalendarId::Hebrew),
            ("solar_hijri", CalendarId::Persian),
            ("buddhist", CalendarId::ThaiBuddhist),
            ("Baha'i", CalendarId::Bahai),
            ("tzolk'in", CalendarId::MayanTzolkin),
            (" long count ", CalendarId::MayanLongCount),
            ("aztec", CalendarId::AztecXiuhpohualli),
        ] {
            assert_eq!(alias.parse::<CalendarId>().unwrap(), id, "{alias}");
        }
    }

    #[test]
    fn test_month_length_rejects_unknown_months() {
        for (id, year, month) in [
            (CalendarId::Gregorian, 2000, 13),
            (CalendarId::Gregorian, 2000, 0),
            (CalendarId::ThaiBuddhist, 2543, 13),
            (CalendarId::Julian, 2000, 200),
            (CalendarId::Persian, 1402, 13),
            (CalendarId::Hebrew, 5783, 13),
            (CalendarId::Iroquois, 10, 14),
            (CalendarId::Bahai, 180, 20),
        ] {
            let date = CalendarDate::new(id, year, month, 1);
            assert!(
                matches!(converter(id).month_length(&date), Err(ConversionError::InvalidDate { .. })),
                "{id} month {month}"
            );
        }
        let leap_adar = CalendarDate::new(CalendarId::Hebrew, 5784, 13, 1);
        assert_eq!(converter(CalendarId::Hebrew).month_length(&leap_adar).unwrap(), 29);
        let ayyam_i_ha = CalendarDate::new(CalendarId::Bahai, 180, 0, 1);
        assert_eq!(converter(CalendarId::Bahai).month_length(&ayyam_i_ha).unwrap(), 5);
        let day_out = CalendarDate::new(CalendarId::Cherokee, 24, 14, 1);
        assert_eq!(converter(CalendarId::Cherokee).month_length(&day_out).unwrap(), 1);
    }

    #[test]
    fn test_unknown_calendar() {
        assert_eq!(
            get_converter("klingon").unwrap_err(),
            ConversionError::UnknownCalendar("klingon".to_owned())
        );
    }

    #[test]
    fn test_serde_ids() {
        assert_eq!(serde_json::to_string(&CalendarId::MayanHaab).unwrap(), "\"mayan-haab\"");
        assert_eq!(
            serde_json::from_str::<CalendarId>("\"thai-buddhist\"").unwrap(),
            CalendarId::ThaiBuddhist
        );
    }

    #[test]
    fn test_windows() {
        let islamic = converter(CalendarId::Islamic);
        let before = Jdn::new(ISLAMIC_EPOCH - 1);
        assert!(matches!(
            islamic.from_jdn(before),
            Err(ConversionError::DateOutOfRange { .. })
        ));
        assert!(islamic.from_jdn(Jdn::new(ISLAMIC_EPOCH)).is_ok());

        let chinese = converter(CalendarId::Chinese);
        assert!(chinese.from_jdn(gregorian_to_jdn(3001, 1, 1)).is_err());
        assert!(converter(CalendarId::Gregorian).from_jdn(gregorian_to_jdn(-9999, 1, 1)).is_ok());
        assert!(converter(CalendarId::Gregorian).from_jdn(gregorian_to_jdn(10_000, 1, 1)).is_err());
    }

    #[test]
    fn test_to_jdn_rejects_foreign_dates() {
        let date = CalendarDate::new(CalendarId::Julian, 2000, 1, 1);
        let result = converter(CalendarId::Gregorian).to_jdn(&date);
        assert!(matches!(result, Err(ConversionError::InvalidDate { .. })));
    }

    #[test]
    fn test_to_jdn_before_epoch_is_out_of_range() {
        let date = CalendarDate::new(CalendarId::Islamic, 0, 12, 1);
        let result = converter(CalendarId::Islamic).to_jdn(&date);
        assert!(matches!(result, Err(ConversionError::DateOutOfRange { .. })));
    }

    #[test]
    fn test_month_lengths() {
        let hebrew = converter(CalendarId::Hebrew);
        assert_eq!(hebrew.month_length(&CalendarDate::new(CalendarId::Hebrew, 5784, 8, 1)).unwrap(), 29);
        let chinese = converter(CalendarId::Chinese);
        let date = chinese.from_jdn(gregorian_to_jdn(2024, 1, 20)).unwrap();
        assert_eq!(chinese.month_length(&date).unwrap(), 30);
        let tzolkin = converter(CalendarId::MayanTzolkin);
        let date = tzolkin.from_jdn(gregorian_to_jdn(2024, 1, 20)).unwrap();
        assert!(tzolkin.month_length(&date).is_err());
    }
}
