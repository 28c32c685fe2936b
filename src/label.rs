//! Time-range labels in each calendar's own idiom.
//!
//! Labels are computed from the native [`CalendarDate`] of the requested day.
//! Any conversion failure degrades to the Gregorian label of the same range,
//! which is computed without fallible steps.

use crate::calendars::{
    CalendarDate, ConversionError, Extra, aztec, bahai, chinese, gregorian, hebrew, invalid, mayan,
    moons,
};
use crate::consts::{DECEMBER, JANUARY, MAYAN_CORRELATION, MIN_DAY};
use crate::jdn::{Jdn, Weekday, gregorian_to_jdn};
use crate::range::{DateSpan, TimeRange, TimeRangeLabel};
use crate::registry::{CalendarId, Converter};
use crate::{Engine, GregorianDate};

impl Engine {
    /// Label and Gregorian span of the `range` containing `date`, in the
    /// idiom of `calendar`.
    ///
    /// Never fails. Unknown calendars, out-of-range days and searches that
    /// hit the iteration cap all produce the Gregorian label instead, and log
    /// a warning.
    pub fn label_for(
        &self,
        date: GregorianDate,
        range: TimeRange,
        calendar: &str,
    ) -> TimeRangeLabel {
        self.try_label_for(date, range, calendar).unwrap_or_else(|error| {
            tracing::warn!(
                target: "calendrium::label",
                calendar,
                %range,
                %date,
                %error,
                "falling back to the Gregorian label"
            );
            gregorian_label(date, range, self.config().week_start)
        })
    }

    /// Like [`Engine::label_for`] but reports why the native label could not
    /// be built.
    ///
    /// # Errors
    /// Any error of [`Converter::from_jdn`] or [`Converter::to_jdn`] hit
    /// while locating the range, or `UnknownCalendar`.
    pub fn try_label_for(
        &self,
        date: GregorianDate,
        range: TimeRange,
        calendar: &str,
    ) -> Result<TimeRangeLabel, ConversionError> {
        let converter = self.resolve(calendar)?;
        let week_start = self.config().week_start;
        if converter.id() == CalendarId::Gregorian {
            return Ok(gregorian_label(date, range, week_start));
        }
        Labeler {
            converter,
            week_start,
        }
        .label(date, range)
    }

    /// Text of [`Engine::label_for`].
    pub fn label_time_range(
        &self,
        date: GregorianDate,
        range: TimeRange,
        calendar: &str,
    ) -> String {
        self.label_for(date, range, calendar).into_text()
    }
}

/// First and last day of the Gregorian week containing `jdn`.
fn week_bounds(jdn: Jdn, week_start: Weekday) -> (Jdn, Jdn) {
    let offset = (i64::from(jdn.weekday().monday_index()) - i64::from(week_start.monday_index()))
        .rem_euclid(7);
    let start = jdn - offset;
    (start, start + 6)
}

/// Gregorian date of `jdn`, clamped to the representable window.
fn clamp_date(jdn: Jdn, fallback: GregorianDate) -> GregorianDate {
    GregorianDate::from_jdn(jdn.clamp(GregorianDate::MIN_JDN, GregorianDate::MAX_JDN))
        .unwrap_or(fallback)
}

/// Common-era year: astronomical years up to 0 count back as BCE.
fn era_year(year: i64) -> String {
    if year <= 0 {
        format!("{} BCE", 1 - year)
    } else {
        year.to_string()
    }
}

/// First and last astronomical year of the decade containing `year`, with
/// its label. There is no year zero on either side, so "0s" is 1-9 and
/// "0s BCE" is 9-1 BCE.
fn era_decade(year: i64) -> (i64, i64, String) {
    if year > 0 {
        let decade = year.div_euclid(10) * 10;
        (decade.max(1), decade + 9, format!("{decade}s"))
    } else {
        let decade = (1 - year).div_euclid(10) * 10;
        (1 - (decade + 9), 1 - decade.max(1), format!("{decade}s BCE"))
    }
}

fn month_table_name(names: &[&'static str], month: u8) -> &'static str {
    usize::from(month)
        .checked_sub(1)
        .and_then(|index| names.get(index))
        .copied()
        .unwrap_or_default()
}

/// "January 1, 1970", "March 15, 45 BCE".
fn gregorian_day_text(year: i64, month: u8, day: u8) -> String {
    format!("{} {day}, {}", month_table_name(&gregorian::MONTH_NAMES, month), era_year(year))
}

fn gregorian_month_text(year: i64, month: u8) -> String {
    format!("{} {}", month_table_name(&gregorian::MONTH_NAMES, month), era_year(year))
}

/// The Gregorian label. Spans are clamped to the representable window.
pub(crate) fn gregorian_label(
    date: GregorianDate,
    range: TimeRange,
    week_start: Weekday,
) -> TimeRangeLabel {
    let jdn = date.jdn();
    let year = i64::from(date.year());
    let (text, start, end) = match range {
        TimeRange::Day => (gregorian_day_text(year, date.month(), date.day()), date, date),
        TimeRange::Week => {
            let (start, end) = week_bounds(jdn, week_start);
            let (start, end) = (clamp_date(start, date), clamp_date(end, date));
            let text = format!(
                "{} - {}",
                gregorian_day_text(i64::from(start.year()), start.month(), start.day()),
                gregorian_day_text(i64::from(end.year()), end.month(), end.day())
            );
            (text, start, end)
        },
        TimeRange::Month => {
            let start = jdn - i64::from(date.day() - MIN_DAY);
            let end = start + i64::from(date.days_in_month()) - 1;
            let text = gregorian_month_text(year, date.month());
            (text, clamp_date(start, date), clamp_date(end, date))
        },
        TimeRange::Year => (
            era_year(year),
            clamp_date(gregorian_to_jdn(year, JANUARY, MIN_DAY), date),
            clamp_date(gregorian_to_jdn(year, DECEMBER, 31), date),
        ),
        TimeRange::Decade => {
            let (first, last, text) = era_decade(year);
            (
                text,
                clamp_date(gregorian_to_jdn(first, JANUARY, MIN_DAY), date),
                clamp_date(gregorian_to_jdn(last, DECEMBER, 31), date),
            )
        },
    };
    TimeRangeLabel::new(text, DateSpan::new(start, end).unwrap_or(DateSpan::day(date)))
}

/// Labels for one non-Gregorian calendar.
struct Labeler {
    converter:  Converter,
    week_start: Weekday,
}

impl Labeler {
    const fn id(&self) -> CalendarId {
        self.converter.id()
    }

    fn label(
        &self,
        date: GregorianDate,
        range: TimeRange,
    ) -> Result<TimeRangeLabel, ConversionError> {
        let jdn = date.jdn();
        let native = self.converter.from_jdn(jdn)?;
        let (text, start, end) = match range {
            TimeRange::Day => (day_text(&native), jdn, jdn),
            TimeRange::Week => {
                let (first, last) = self.converter.descriptor().window();
                let (start, end) = week_bounds(jdn, self.week_start);
                let (start, end) = (start.max(first), end.min(last));
                let first = day_text(&self.converter.from_jdn(start)?);
                let last = day_text(&self.converter.from_jdn(end)?);
                (format!("{first} - {last}"), start, end)
            },
            TimeRange::Month => self.month(jdn, &native)?,
            TimeRange::Year => self.year(jdn, &native)?,
            TimeRange::Decade => self.decade(jdn, &native)?,
        };
        self.span(text, start, end)
    }

    /// Builds the label, clamping the span to the calendar's window.
    fn span(&self, text: String, start: Jdn, end: Jdn) -> Result<TimeRangeLabel, ConversionError> {
        let (first, last) = self.converter.descriptor().window();
        let (start, end) = (start.max(first), end.min(last));
        let out_of_range = |jdn| ConversionError::DateOutOfRange {
            calendar: CalendarId::Gregorian,
            jdn,
        };
        let start = GregorianDate::from_jdn(start).map_err(|_| out_of_range(start))?;
        let end = GregorianDate::from_jdn(end).map_err(|_| out_of_range(end))?;
        let span =
            DateSpan::new(start, end).map_err(|error| invalid(self.id(), error.to_string()))?;
        Ok(TimeRangeLabel::new(text, span))
    }

    /// First day of `year`, even when it falls outside the window.
    fn new_year(&self, year: i64) -> Result<Jdn, ConversionError> {
        let descriptor = self.converter.descriptor();
        let first =
            CalendarDate::new(descriptor.id, year, descriptor.first_month, descriptor.first_day);
        match self.converter.to_jdn(&first) {
            Err(ConversionError::DateOutOfRange { jdn, .. }) => Ok(jdn),
            result => result,
        }
    }

    /// Days from the start of year `first` to the end of year `last`.
    fn years(&self, first: i64, last: i64) -> Result<(Jdn, Jdn), ConversionError> {
        Ok((self.new_year(first)?, self.new_year(last + 1)? - 1))
    }

    fn month(
        &self,
        jdn: Jdn,
        native: &CalendarDate,
    ) -> Result<(String, Jdn, Jdn), ConversionError> {
        match native.extra {
            Some(Extra::LongCount { katun, tun, winal, kin }) => {
                let start = jdn - i64::from(kin);
                let text = format!("Winal {}.{katun}.{tun}.{winal}", native.year);
                Ok((text, start, start + mayan::KIN_PER_WINAL - 1))
            },
            Some(Extra::Tzolkin { number, name }) => {
                // A trecena is named after its first day, always numbered 1
                let offset = i64::from(number) - 1;
                let first_name = (i64::from(name) - 1 - offset).rem_euclid(20) as u8 + 1;
                let start = jdn - offset;
                Ok((format!("Trecena 1 {}", mayan::tzolkin_name(first_name)), start, start + 12))
            },
            _ => {
                let (_, day) = native.month_day()?;
                let start = jdn - i64::from(day - self.converter.descriptor().first_day);
                let length = self.converter.month_length(native)?;
                Ok((month_text(native), start, start + i64::from(length) - 1))
            },
        }
    }

    fn year(&self, jdn: Jdn, native: &CalendarDate) -> Result<(String, Jdn, Jdn), ConversionError> {
        match native.extra {
            Some(Extra::LongCount { katun, tun, winal, kin }) => {
                let start = jdn - (i64::from(winal) * mayan::KIN_PER_WINAL + i64::from(kin));
                let text = format!("Tun {}.{katun}.{tun}", native.year);
                Ok((text, start, start + mayan::KIN_PER_TUN - 1))
            },
            Some(Extra::Tzolkin { .. }) => {
                let start = Jdn::new(MAYAN_CORRELATION + native.year * mayan::TZOLKIN_ROUND);
                Ok((year_text(native), start, start + mayan::TZOLKIN_ROUND - 1))
            },
            _ => {
                let (start, end) = self.years(native.year, native.year)?;
                Ok((year_text(native), start, end))
            },
        }
    }

    fn decade(
        &self,
        jdn: Jdn,
        native: &CalendarDate,
    ) -> Result<(String, Jdn, Jdn), ConversionError> {
        let year = native.year;
        let (text, first, last) = match self.id() {
            CalendarId::MayanLongCount => {
                let Some(Extra::LongCount { katun, tun, winal, kin }) = native.extra else {
                    return Err(invalid(self.id(), "long count places are required"));
                };
                let elapsed = i64::from(tun) * mayan::KIN_PER_TUN
                    + i64::from(winal) * mayan::KIN_PER_WINAL
                    + i64::from(kin);
                let start = jdn - elapsed;
                let end = start + mayan::KIN_PER_KATUN - 1;
                return Ok((format!("K'atun {year}.{katun}"), start, end));
            },
            CalendarId::MayanTzolkin | CalendarId::MayanHaab => {
                let round = (jdn.get() - MAYAN_CORRELATION).div_euclid(mayan::CALENDAR_ROUND);
                let start = Jdn::new(MAYAN_CORRELATION + round * mayan::CALENDAR_ROUND);
                let end = start + mayan::CALENDAR_ROUND - 1;
                return Ok((format!("Calendar Round {round}"), start, end));
            },
            CalendarId::Bahai => {
                let first = (year - 1).div_euclid(bahai::VAHID_YEARS) * bahai::VAHID_YEARS + 1;
                let last = first + bahai::VAHID_YEARS - 1;
                let Extra::Bahai {
                    kull_i_shay, vahid, ..
                } = bahai::cycles(year)
                else {
                    return Err(invalid(self.id(), "no badí' cycle for year"));
                };
                let text = format!("Váḥid {vahid} of Kull-i-Shay' {kull_i_shay} ({first}-{last} B.E.)");
                (text, first, last)
            },
            CalendarId::AztecXiuhpohualli => {
                let binding = year.div_euclid(aztec::XIUHMOLPILLI_YEARS);
                let first = binding * aztec::XIUHMOLPILLI_YEARS;
                (format!("Xiuhmolpilli {binding}"), first, first + aztec::XIUHMOLPILLI_YEARS - 1)
            },
            CalendarId::Cherokee | CalendarId::Iroquois => {
                let first = year.div_euclid(10) * 10;
                let name = self.converter.descriptor().name;
                (format!("{name} cycles {first}-{}", first + 9), first, first + 9)
            },
            CalendarId::Julian => {
                let (first, last, text) = era_decade(year);
                (format!("{text} (Julian)"), first, last)
            },
            CalendarId::Chinese => {
                let first = year.div_euclid(10) * 10;
                (format!("{first}年代"), first, first + 9)
            },
            _ => {
                let first = year.div_euclid(10) * 10;
                let era = self.converter.descriptor().era;
                (format!("{first}s {era}"), first, first + 9)
            },
        };
        let (start, end) = self.years(first, last)?;
        Ok((text, start, end))
    }
}

fn month_name(date: &CalendarDate) -> String {
    let month = date.month.unwrap_or_default();
    match date.calendar {
        CalendarId::Hebrew => hebrew::month_name(date.year, month).to_owned(),
        CalendarId::Chinese => chinese::month_name(month, date.is_leap_month()),
        CalendarId::Bahai => bahai::month_name(month).to_owned(),
        CalendarId::Cherokee | CalendarId::Iroquois => {
            moons::month_name(date.calendar, month).to_owned()
        },
        id => month_table_name(id.descriptor().month_names, month).to_owned(),
    }
}

fn year_text(date: &CalendarDate) -> String {
    let year = date.year;
    match date.calendar {
        CalendarId::Gregorian => era_year(year),
        CalendarId::Julian => format!("{} (Julian)", era_year(year)),
        CalendarId::Chinese => format!("{}年", chinese::sexagenary(chinese::cycle_year(year))),
        CalendarId::MayanLongCount => mayan::format_long_count(date),
        CalendarId::MayanTzolkin => format!("Tzolk'in round {year}"),
        CalendarId::MayanHaab => format!("Haab' year {year}"),
        CalendarId::AztecXiuhpohualli => format!("Xiuhpohualli year {year}"),
        CalendarId::Cherokee | CalendarId::Iroquois => {
            format!("{} cycle {year}", date.calendar.descriptor().name)
        },
        id => format!("{year} {}", id.descriptor().era),
    }
}

fn month_text(date: &CalendarDate) -> String {
    match date.calendar {
        CalendarId::Gregorian => gregorian_month_text(date.year, date.month.unwrap_or_default()),
        CalendarId::Julian => {
            format!("{} (Julian)", gregorian_month_text(date.year, date.month.unwrap_or_default()))
        },
        CalendarId::Chinese => format!("{}{}", year_text(date), month_name(date)),
        CalendarId::MayanHaab
        | CalendarId::AztecXiuhpohualli
        | CalendarId::Cherokee
        | CalendarId::Iroquois => format!("{}, {}", month_name(date), year_text(date)),
        _ => format!("{} {}", month_name(date), year_text(date)),
    }
}

fn day_text(date: &CalendarDate) -> String {
    let month = date.month.unwrap_or_default();
    let day = date.day.unwrap_or_default();
    match (date.calendar, date.extra) {
        (CalendarId::Gregorian, _) => gregorian_day_text(date.year, month, day),
        (CalendarId::Julian, _) => {
            format!("{} (Julian)", gregorian_day_text(date.year, month, day))
        },
        (CalendarId::Chinese, _) => format!("{}{}", month_text(date), chinese::day_name(day)),
        (CalendarId::MayanLongCount, _) => mayan::format_long_count(date),
        (CalendarId::MayanTzolkin, Some(Extra::Tzolkin { number, name })) => {
            format!("{number} {}", mayan::tzolkin_name(name))
        },
        (CalendarId::Cherokee | CalendarId::Iroquois, _) if month == moons::DAY_OUT_OF_TIME => {
            month_name(date)
        },
        (
            CalendarId::MayanHaab
            | CalendarId::AztecXiuhpohualli
            | CalendarId::Cherokee
            | CalendarId::Iroquois,
            _,
        ) => format!("{day} {}", month_name(date)),
        _ => format!("{day} {} {}", month_name(date), year_text(date)),
    }
}
