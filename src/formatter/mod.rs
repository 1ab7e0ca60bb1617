//! Interpolation formatting engine.
//!
//! The entry point is [`format_value`]: given a value, a raw directive
//! string, and a target language, it produces the localized rendering, or
//! `None` when the directive is not recognized. Callers treat `None` as
//! "leave the value unformatted" rather than a hard failure.

mod currency;
mod datetime;
mod number;

pub use currency::format_price;
pub use datetime::format_datetime;
pub use number::format_number;

use chrono::DateTime;
use unic_langid::LanguageIdentifier;

use crate::cache;
use crate::directive::Directive;
use crate::locale::Locale;
use crate::options::DateTimeOptions;
use crate::value::Value;

/// Apply a raw format directive to a value for the given language.
///
/// The directive is parsed through the process-wide cache. An empty,
/// unknown, or malformed directive yields `None`.
pub fn format_value(value: &Value, raw_directive: &str, lang: &LanguageIdentifier) -> Option<String> {
    let directive = cache::get_or_parse(raw_directive).ok()?;
    Some(apply(value, &directive, lang))
}

/// Apply an already-parsed directive to a value.
pub fn apply(value: &Value, directive: &Directive, lang: &LanguageIdentifier) -> String {
    let locale = Locale::for_language(lang);

    match directive {
        Directive::Uppercase => value.display().to_uppercase(),
        Directive::Number => match value.as_number() {
            Some(n) => format_number(n, locale),
            None => "NaN".to_string(),
        },
        Directive::DateTime {
            granularity,
            hour_format,
        } => {
            let opts = DateTimeOptions::new(*granularity, *hour_format);
            match value {
                Value::DateTime(dt) => format_datetime(dt, &opts, locale),
                // Numbers are taken as Unix timestamps in seconds.
                Value::Number(n) => match DateTime::from_timestamp(*n as i64, 0) {
                    Some(utc) => format_datetime(&utc.naive_utc(), &opts, locale),
                    None => value.display(),
                },
                Value::Text(_) => value.display(),
            }
        }
        Directive::Price { currency } => match value.as_number() {
            Some(n) => format_price(n, currency, locale),
            None => "NaN".to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn en() -> LanguageIdentifier {
        "en-US".parse().unwrap()
    }

    #[test]
    fn test_unknown_directive_is_soft() {
        let value = Value::Text("abc");
        assert_eq!(format_value(&value, "LOWERCASE", &en()), None);
        assert_eq!(format_value(&value, "", &en()), None);
    }

    #[test]
    fn test_uppercase() {
        let value = Value::Text("abc");
        assert_eq!(
            format_value(&value, "UPPERCASE", &en()),
            Some("ABC".to_string())
        );
    }

    #[test]
    fn test_number_on_text_is_nan() {
        let value = Value::Text("not a number");
        assert_eq!(
            format_value(&value, "NUMBER", &en()),
            Some("NaN".to_string())
        );
    }

    #[test]
    fn test_datetime_from_timestamp() {
        // 2026-08-03T16:05:09Z
        let expected = NaiveDate::from_ymd_opt(2026, 8, 3)
            .unwrap()
            .and_hms_opt(16, 5, 9)
            .unwrap();
        let ts = expected.and_utc().timestamp();
        let via_number = format_value(&Value::Number(ts as f64), "DATETIME, Time", &en());
        let via_datetime = format_value(&Value::DateTime(expected), "DATETIME, Time", &en());
        assert_eq!(via_number, via_datetime);
    }
}
