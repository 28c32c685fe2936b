use std::{cmp::Ordering, fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{GregorianDate, ParseError, RANGE_SEPARATOR, prelude::*};

/// Granularity of a labeled time span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeRange {
    #[display(fmt = "decade")]
    Decade,
    #[display(fmt = "year")]
    Year,
    #[display(fmt = "month")]
    Month,
    #[display(fmt = "week")]
    Week,
    #[display(fmt = "day")]
    Day,
}

impl TimeRange {
    pub const ALL: [Self; 5] = [Self::Decade, Self::Year, Self::Month, Self::Week, Self::Day];
}

impl FromStr for TimeRange {
    type Err = RangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|range| range.to_string() == key)
            .ok_or_else(|| RangeError::UnknownTimeRange(s.to_owned()))
    }
}

/// An inclusive span of Gregorian days.
/// The start date must be less than or equal to the end date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display(fmt = "{start}/{end}")]
pub struct DateSpan {
    start: GregorianDate,
    end:   GregorianDate,
}

/// Error type for span and time-range operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RangeError {
    /// Start date is after end date.
    #[error("Invalid date span: start ({start}) is after end ({end})")]
    InvalidRange { start: GregorianDate, end: GregorianDate },

    /// Error parsing date component.
    #[error(transparent)]
    ParseError(#[from] ParseError),

    /// Invalid span format.
    #[error("Invalid span format: {0}")]
    InvalidFormat(String),

    /// Not one of decade, year, month, week, day.
    #[error("Unknown time range: {0}")]
    UnknownTimeRange(String),
}

impl DateSpan {
    /// Creates a new span with validation.
    ///
    /// # Errors
    /// Returns `RangeError::InvalidRange` if start > end.
    pub fn new(start: GregorianDate, end: GregorianDate) -> Result<Self, RangeError> {
        if start > end {
            return Err(RangeError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// A span covering a single day.
    pub const fn day(date: GregorianDate) -> Self {
        Self {
            start: date,
            end:   date,
        }
    }

    pub const fn start(&self) -> GregorianDate {
        self.start
    }

    pub const fn end(&self) -> GregorianDate {
        self.end
    }

    pub const fn dates(&self) -> (GregorianDate, GregorianDate) {
        (self.start, self.end)
    }

    pub fn contains(&self, date: &GregorianDate) -> bool {
        self.start <= *date && *date <= self.end
    }

    /// Checks if this span shares at least one day with another
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start <= other.end && other.start <= self.end
    }

    /// Checks if this span is completely contained within another
    pub fn is_within(&self, other: &Self) -> bool {
        other.start <= self.start && self.end <= other.end
    }

    /// Number of days covered, both ends included.
    pub fn len_days(&self) -> i64 {
        self.end.jdn() - self.start.jdn() + 1
    }
}

impl FromStr for DateSpan {
    type Err = RangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();

        // ISO 8601 interval: start and end separated by RANGE_SEPARATOR
        let separator_count = trimmed.matches(RANGE_SEPARATOR).count();

        match separator_count {
            0 => Err(RangeError::InvalidFormat(format!(
                "No span separator found (expected '{RANGE_SEPARATOR}'): {s}"
            ))),
            1 => {
                let (start_str, end_str) =
                    trimmed.split_once(RANGE_SEPARATOR).ok_or_else(|| {
                        RangeError::InvalidFormat(format!(
                            "Separator '{RANGE_SEPARATOR}' not found: {s}"
                        ))
                    })?;
                let start = start_str.trim().parse::<GregorianDate>()?;
                let end = end_str.trim().parse::<GregorianDate>()?;

                Self::new(start, end)
            },
            _ => Err(RangeError::InvalidFormat(format!(
                "Too many '{RANGE_SEPARATOR}' separators: expected 1, found {separator_count}"
            ))),
        }
    }
}

impl PartialOrd for DateSpan {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for DateSpan {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.start.cmp(&other.start) {
            Ordering::Equal => self.end.cmp(&other.end),
            ord => ord,
        }
    }
}

impl Serialize for DateSpan {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for DateSpan {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// A display label for a time span in some calendar, together with the
/// Gregorian days it covers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeRangeLabel {
    text: String,
    span: DateSpan,
}

impl TimeRangeLabel {
    pub fn new(text: impl Into<String>, span: DateSpan) -> Self {
        Self {
            text: text.into(),
            span,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn into_text(self) -> String {
        self.text
    }

    pub const fn span(&self) -> DateSpan {
        self.span
    }

    pub const fn start(&self) -> GregorianDate {
        self.span.start
    }

    pub const fn end(&self) -> GregorianDate {
        self.span.end
    }

    pub fn contains(&self, date: &GregorianDate) -> bool {
        self.span.contains(date)
    }
}

impl fmt::Display for TimeRangeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> GregorianDate {
        s.parse().unwrap()
    }

    fn span(start: &str, end: &str) -> DateSpan {
        DateSpan::new(date(start), date(end)).unwrap()
    }

    #[test]
    fn test_new_span_cases() {
        struct TestCase {
            start:          &'static str,
            end:            &'static str,
            should_succeed: bool,
            description:    &'static str,
        }

        let cases = [
            TestCase {
                start:          "1990-01-01",
                end:            "2000-12-31",
                should_succeed: true,
                description:    "valid span (start < end)",
            },
            TestCase {
                start:          "2000-01-01",
                end:            "1990-01-01",
                should_succeed: false,
                description:    "invalid span (start > end)",
            },
            TestCase {
                start:          "2000-01-01",
                end:            "2000-01-01",
                should_succeed: true,
                description:    "single day (start == end)",
            },
        ];

        for case in &cases {
            let result = DateSpan::new(date(case.start), date(case.end));
            assert_eq!(result.is_ok(), case.should_succeed, "{}", case.description);
        }
    }

    #[test]
    fn test_contains_and_len() {
        let january = span("2024-01-01", "2024-01-31");
        assert!(january.contains(&date("2024-01-01")));
        assert!(january.contains(&date("2024-01-31")));
        assert!(!january.contains(&date("2024-02-01")));
        assert_eq!(january.len_days(), 31);
        assert_eq!(DateSpan::day(date("2024-02-29")).len_days(), 1);
    }

    #[test]
    fn test_overlaps_and_is_within() {
        let year = span("2024-01-01", "2024-12-31");
        let week = span("2023-12-25", "2023-12-31");
        let straddling = span("2023-12-28", "2024-01-03");
        assert!(!year.overlaps(&week));
        assert!(year.overlaps(&straddling));
        assert!(straddling.overlaps(&week));
        assert!(span("2024-03-01", "2024-03-31").is_within(&year));
        assert!(!straddling.is_within(&year));
    }

    #[test]
    fn test_display_and_parse() {
        let s = span("1999-12-27", "2000-01-02");
        assert_eq!(s.to_string(), "1999-12-27/2000-01-02");
        assert_eq!("1999-12-27 / 2000-01-02".parse::<DateSpan>().unwrap(), s);
        assert!(matches!(
            "2000-01-02/1999-12-27".parse::<DateSpan>(),
            Err(RangeError::InvalidRange { .. })
        ));
        assert!(matches!("1999-12-27".parse::<DateSpan>(), Err(RangeError::InvalidFormat(_))));
        assert!(matches!(
            "1999-12-27/2000-01-02/2000-01-03".parse::<DateSpan>(),
            Err(RangeError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_bce_span() {
        let s = "-0044-03-01/-0044-03-31".parse::<DateSpan>().unwrap();
        assert_eq!(s.len_days(), 31);
        assert_eq!(s.to_string(), "-0044-03-01/-0044-03-31");
    }

    #[test]
    fn test_time_range_parse_and_display() {
        for range in TimeRange::ALL {
            assert_eq!(range.to_string().parse::<TimeRange>().unwrap(), range);
        }
        assert_eq!(" Decade ".parse::<TimeRange>().unwrap(), TimeRange::Decade);
        assert!(matches!("fortnight".parse::<TimeRange>(), Err(RangeError::UnknownTimeRange(_))));
    }

    #[test]
    fn test_serde_string_format() {
        let label = TimeRangeLabel::new("January 2024", span("2024-01-01", "2024-01-31"));
        let json = serde_json::to_string(&label).unwrap();
        assert_eq!(json, r#"{"text":"January 2024","span":"2024-01-01/2024-01-31"}"#);
        assert_eq!(serde_json::from_str::<TimeRangeLabel>(&json).unwrap(), label);
        assert_eq!(serde_json::to_string(&TimeRange::Week).unwrap(), "\"week\"");
    }

    #[test]
    fn test_label_accessors() {
        let label = TimeRangeLabel::new("1970s", span("1970-01-01", "1979-12-31"));
        assert_eq!(label.text(), "1970s");
        assert_eq!(label.to_string(), "1970s");
        assert!(label.contains(&date("1975-06-15")));
        assert_eq!(label.start(), date("1970-01-01"));
        assert_eq!(label.end(), date("1979-12-31"));
        assert_eq!(label.span().len_days(), 3652);
        assert_eq!(label.into_text(), "1970s");
    }
}
