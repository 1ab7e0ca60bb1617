//! Date/time display options and the symbolic-name resolver.

use std::str::FromStr;

use crate::error::DirectiveError;

/// The five symbolic date/time display modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Granularity {
    LongDateTime,
    ShortDateTime,
    Date,
    Time,
    ShortTime,
}

impl FromStr for Granularity {
    type Err = DirectiveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "LongDateTime" => Ok(Granularity::LongDateTime),
            "ShortDateTime" => Ok(Granularity::ShortDateTime),
            "Date" => Ok(Granularity::Date),
            "Time" => Ok(Granularity::Time),
            "ShortTime" => Ok(Granularity::ShortTime),
            _ => Err(DirectiveError::UnknownGranularity(s.to_string())),
        }
    }
}

/// 12- vs 24-hour clock selection.
///
/// Only the exact keyword `hour12` selects a 12-hour clock; any other
/// keyword (or no keyword at all) means 24-hour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HourFormat {
    Hour12,
    #[default]
    Hour24,
}

impl HourFormat {
    /// Interpret an hour-format keyword.
    pub fn from_keyword(keyword: Option<&str>) -> Self {
        match keyword {
            Some("hour12") => HourFormat::Hour12,
            _ => HourFormat::Hour24,
        }
    }

    /// Returns true for a 12-hour clock.
    pub fn is_hour12(&self) -> bool {
        matches!(self, HourFormat::Hour12)
    }
}

/// Display width of a single date/time field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldWidth {
    /// No leading zero; years shown in full.
    Numeric,
    /// Zero-padded to two digits; years truncated to two digits.
    TwoDigit,
}

/// Which calendar and clock fields to display, and at what width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateTimeOptions {
    pub year: Option<FieldWidth>,
    pub month: Option<FieldWidth>,
    pub day: Option<FieldWidth>,
    pub hour: Option<FieldWidth>,
    pub minute: Option<FieldWidth>,
    pub second: Option<FieldWidth>,
    pub hour12: bool,
}

impl DateTimeOptions {
    /// Resolve a symbolic granularity keyword plus an hour-format keyword
    /// into an option set. Unknown keywords yield `None`.
    pub fn resolve(keyword: &str, hour_keyword: Option<&str>) -> Option<DateTimeOptions> {
        let granularity = keyword.parse().ok()?;
        let hour_format = HourFormat::from_keyword(hour_keyword);
        Some(DateTimeOptions::new(granularity, hour_format))
    }

    /// Build the option set for a known granularity.
    pub fn new(granularity: Granularity, hour_format: HourFormat) -> DateTimeOptions {
        use FieldWidth::{Numeric, TwoDigit};

        let hour12 = hour_format.is_hour12();
        match granularity {
            Granularity::LongDateTime => DateTimeOptions {
                year: Some(Numeric),
                month: Some(Numeric),
                day: Some(Numeric),
                hour: Some(Numeric),
                minute: Some(Numeric),
                second: Some(Numeric),
                hour12,
            },
            Granularity::ShortDateTime => DateTimeOptions {
                year: Some(TwoDigit),
                month: Some(TwoDigit),
                day: Some(TwoDigit),
                hour: Some(TwoDigit),
                minute: Some(TwoDigit),
                second: None,
                hour12,
            },
            Granularity::Date => DateTimeOptions {
                year: Some(Numeric),
                month: Some(Numeric),
                day: Some(Numeric),
                hour: None,
                minute: None,
                second: None,
                hour12,
            },
            Granularity::Time => DateTimeOptions {
                year: None,
                month: None,
                day: None,
                hour: Some(Numeric),
                minute: Some(Numeric),
                second: Some(Numeric),
                hour12,
            },
            Granularity::ShortTime => DateTimeOptions {
                year: None,
                month: None,
                day: None,
                hour: Some(Numeric),
                minute: Some(Numeric),
                second: None,
                hour12,
            },
        }
    }

    /// Returns true if any calendar field (year, month, day) is shown.
    pub fn has_date_fields(&self) -> bool {
        self.year.is_some() || self.month.is_some() || self.day.is_some()
    }

    /// Returns true if any clock field (hour, minute, second) is shown.
    pub fn has_time_fields(&self) -> bool {
        self.hour.is_some() || self.minute.is_some() || self.second.is_some()
    }
}
