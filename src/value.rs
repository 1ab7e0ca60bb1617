//! Value types that can be interpolated into translations.

use chrono::{Datelike, NaiveDateTime, Timelike};

/// A value handed to the interpolation formatter.
#[derive(Debug, Clone, PartialEq)]
pub enum Value<'a> {
    /// A numeric value
    Number(f64),
    /// A text value
    Text(&'a str),
    /// A calendar date and time of day
    DateTime(NaiveDateTime),
}

impl<'a> From<f64> for Value<'a> {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl<'a> From<f32> for Value<'a> {
    fn from(n: f32) -> Self {
        Value::Number(n as f64)
    }
}

impl<'a> From<i64> for Value<'a> {
    fn from(n: i64) -> Self {
        Value::Number(n as f64)
    }
}

impl<'a> From<i32> for Value<'a> {
    fn from(n: i32) -> Self {
        Value::Number(n as f64)
    }
}

impl<'a> From<&'a str> for Value<'a> {
    fn from(s: &'a str) -> Self {
        Value::Text(s)
    }
}

impl<'a> From<NaiveDateTime> for Value<'a> {
    fn from(dt: NaiveDateTime) -> Self {
        Value::DateTime(dt)
    }
}

impl<'a> Value<'a> {
    /// Returns the value as a number if possible.
    ///
    /// Text is parsed leniently, matching how platform number formatters
    /// coerce their input.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            Value::Text(s) => s.trim().parse().ok(),
            Value::DateTime(_) => None,
        }
    }

    /// Returns the value as text if it is text.
    pub fn as_text(&self) -> Option<&'a str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Returns a type name for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Number(_) => "number",
            Value::Text(_) => "text",
            Value::DateTime(_) => "datetime",
        }
    }

    /// Locale-neutral rendering, used when no format directive applies.
    pub fn display(&self) -> String {
        match self {
            Value::Number(n) => plain_number(*n),
            Value::Text(s) => s.to_string(),
            Value::DateTime(dt) => format!(
                "{:04}-{:02}-{:02} {:02}:{:02}:{:02}",
                dt.year(),
                dt.month(),
                dt.day(),
                dt.hour(),
                dt.minute(),
                dt.second()
            ),
        }
    }
}

/// Plain decimal rendering of a number with trailing zeros trimmed.
pub(crate) fn plain_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value.is_sign_positive() {
            "Infinity"
        } else {
            "-Infinity"
        }
        .to_string();
    }

    let formatted = format!("{:.10}", value);
    if formatted.contains('.') {
        let trimmed = formatted.trim_end_matches('0');
        if trimmed.ends_with('.') {
            trimmed.trim_end_matches('.').to_string()
        } else {
            trimmed.to_string()
        }
    } else {
        formatted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_as_number_coerces_text() {
        assert_eq!(Value::Text("42.5").as_number(), Some(42.5));
        assert_eq!(Value::Text("abc").as_number(), None);
    }

    #[test]
    fn test_plain_number_trims_zeros() {
        assert_eq!(plain_number(42.0), "42");
        assert_eq!(plain_number(42.5), "42.5");
        assert_eq!(plain_number(-0.25), "-0.25");
    }

    #[test]
    fn test_neutral_datetime_display() {
        let dt = NaiveDate::from_ymd_opt(2026, 8, 23)
            .unwrap()
            .and_hms_opt(16, 5, 9)
            .unwrap();
        assert_eq!(Value::DateTime(dt).display(), "2026-08-23 16:05:09");
    }
}
