use serde::{Deserialize, Serialize};

use crate::calendars::{CalendarDate, ConversionError};
use crate::consts::MAX_SEARCH_ITERATIONS;
use crate::jdn::{Jdn, Weekday};
use crate::registry::{CalendarId, Converter, converter};
use crate::GregorianDate;

/// Engine settings. Every field has a default, so a partial document
/// deserializes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Cap on every bounded calendrical search (Hebrew year search, Persian
    /// equinox, Chinese solar terms).
    pub max_search_iterations: u32,
    /// First day of the week used by [`crate::TimeRange::Week`].
    pub week_start: Weekday,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_search_iterations: MAX_SEARCH_ITERATIONS,
            week_start:            Weekday::Monday,
        }
    }
}

/// Conversion and labeling entry point holding an explicit configuration.
///
/// The engine is a plain value: it reads no global state and every operation
/// is a pure function of its inputs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Engine {
    config: EngineConfig,
}

impl Engine {
    pub const fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Converter for `id` carrying this engine's search cap.
    pub fn converter(&self, id: CalendarId) -> Converter {
        converter(id).with_max_iterations(self.config.max_search_iterations)
    }

    /// # Errors
    /// Returns `ConversionError::UnknownCalendar` for unrecognized identifiers.
    pub fn resolve(&self, calendar: &str) -> Result<Converter, ConversionError> {
        calendar.parse().map(|id| self.converter(id))
    }

    /// Converts a Gregorian date into `calendar`.
    ///
    /// # Errors
    /// See [`crate::convert`].
    pub fn convert(
        &self,
        date: GregorianDate,
        calendar: &str,
    ) -> Result<CalendarDate, ConversionError> {
        self.convert_jdn(date.jdn(), calendar)
    }

    /// Converts a day number into `calendar`.
    ///
    /// # Errors
    /// See [`crate::convert`].
    pub fn convert_jdn(&self, jdn: Jdn, calendar: &str) -> Result<CalendarDate, ConversionError> {
        let converter = self.resolve(calendar)?;
        let date = converter.from_jdn(jdn);
        tracing::trace!(calendar = %converter.id(), %jdn, ?date, "converted");
        date
    }

    /// The Gregorian day of a date in any calendar.
    ///
    /// # Errors
    /// As for [`Converter::to_jdn`].
    pub fn to_gregorian(&self, date: &CalendarDate) -> Result<GregorianDate, ConversionError> {
        let jdn = self.converter(date.calendar).to_jdn(date)?;
        GregorianDate::from_jdn(jdn).map_err(|_| ConversionError::DateOutOfRange {
            calendar: CalendarId::Gregorian,
            jdn,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> GregorianDate {
        s.parse().unwrap()
    }

    #[test]
    fn test_default_config() {
        let config = EngineConfig::default();
        assert_eq!(config.max_search_iterations, 16);
        assert_eq!(config.week_start, Weekday::Monday);
        assert_eq!(Engine::default().config(), &config);
    }

    #[test]
    fn test_config_serde_fills_defaults() {
        let config: EngineConfig = serde_json::from_str(r#"{"week_start":"sunday"}"#).unwrap();
        assert_eq!(config.week_start, Weekday::Sunday);
        assert_eq!(config.max_search_iterations, MAX_SEARCH_ITERATIONS);
        let json = serde_json::to_string(&EngineConfig::default()).unwrap();
        assert_eq!(json, r#"{"max_search_iterations":16,"week_start":"monday"}"#);
    }

    #[test]
    fn test_convert_and_back() {
        let engine = Engine::default();
        let d = date("2024-02-10");
        for id in CalendarId::ALL {
            let converted = engine.convert(d, id.as_str()).unwrap();
            assert_eq!(converted.calendar, id);
            assert_eq!(engine.to_gregorian(&converted).unwrap(), d, "{id}");
        }
    }

    #[test]
    fn test_convert_jdn_matches_convert() {
        let engine = Engine::default();
        let d = date("1999-12-31");
        assert_eq!(engine.convert_jdn(d.jdn(), "persian"), engine.convert(d, "jalali"));
    }

    #[test]
    fn test_zero_iterations_never_converge() {
        let engine = Engine::new(EngineConfig {
            max_search_iterations: 0,
            ..EngineConfig::default()
        });
        let d = date("2024-02-10");
        for calendar in ["hebrew", "persian", "chinese"] {
            assert!(
                matches!(engine.convert(d, calendar), Err(ConversionError::NonConvergent { .. })),
                "{calendar}"
            );
        }
        assert!(engine.convert(d, "islamic").is_ok());
    }

    #[test]
    fn test_errors_surface_typed() {
        let engine = Engine::default();
        assert!(matches!(
            engine.convert(date("2000-01-01"), "martian"),
            Err(ConversionError::UnknownCalendar(_))
        ));
        assert!(matches!(
            engine.convert(date("1800-01-01"), "bahai"),
            Err(ConversionError::DateOutOfRange {
                calendar: CalendarId::Bahai,
                ..
            })
        ));
        let bogus = CalendarDate::new(CalendarId::Hebrew, 5784, 14, 1);
        assert!(matches!(engine.to_gregorian(&bogus), Err(ConversionError::InvalidDate { .. })));
    }
}
