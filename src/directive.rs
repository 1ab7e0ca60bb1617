//! Parsed form of interpolation format directives.
//!
//! A directive is the comma-separated instruction attached to an
//! interpolated value, e.g. `DATETIME, ShortDateTime, hour24` or
//! `PRICE, USD`. The first token selects the transform; the rest are
//! positional, type-specific arguments.

use std::str::FromStr;

use crate::error::DirectiveError;
use crate::options::{Granularity, HourFormat};

/// A parsed format directive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Directive {
    /// Uppercase text transform.
    Uppercase,
    /// Locale-grouped plain number.
    Number,
    /// Localized date/time at the given granularity.
    DateTime {
        granularity: Granularity,
        hour_format: HourFormat,
    },
    /// Localized currency amount for the given three-letter code.
    Price { currency: String },
}

impl Directive {
    /// Parse a raw directive string.
    ///
    /// The string is split on commas with each part trimmed, so
    /// `" PRICE , USD "` and `"PRICE,USD"` are equivalent.
    pub fn parse(raw: &str) -> Result<Directive, DirectiveError> {
        let mut parts = raw.split(',').map(str::trim);
        let kind = parts.next().filter(|t| !t.is_empty()).ok_or(DirectiveError::Empty)?;

        match kind {
            "UPPERCASE" => Ok(Directive::Uppercase),
            "NUMBER" => Ok(Directive::Number),
            "DATETIME" => {
                let granularity = parts
                    .next()
                    .filter(|t| !t.is_empty())
                    .ok_or(DirectiveError::MissingGranularity)?
                    .parse()?;
                let hour_format = HourFormat::from_keyword(parts.next());
                Ok(Directive::DateTime {
                    granularity,
                    hour_format,
                })
            }
            "PRICE" => {
                let currency = parts
                    .next()
                    .filter(|t| !t.is_empty())
                    .ok_or(DirectiveError::MissingCurrency)?;
                Ok(Directive::Price {
                    currency: currency.to_string(),
                })
            }
            other => Err(DirectiveError::UnknownType(other.to_string())),
        }
    }
}

impl FromStr for Directive {
    type Err = DirectiveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Directive::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_uppercase() {
        assert_eq!(Directive::parse("UPPERCASE").unwrap(), Directive::Uppercase);
    }

    #[test]
    fn test_parse_datetime_with_hour_format() {
        let parsed = Directive::parse("DATETIME, ShortDateTime, hour12").unwrap();
        assert_eq!(
            parsed,
            Directive::DateTime {
                granularity: Granularity::ShortDateTime,
                hour_format: HourFormat::Hour12,
            }
        );
    }

    #[test]
    fn test_parse_datetime_defaults_to_hour24() {
        let parsed = Directive::parse("DATETIME, Date").unwrap();
        assert_eq!(
            parsed,
            Directive::DateTime {
                granularity: Granularity::Date,
                hour_format: HourFormat::Hour24,
            }
        );
    }

    #[test]
    fn test_parse_price() {
        let parsed = Directive::parse("PRICE, USD").unwrap();
        assert_eq!(
            parsed,
            Directive::Price {
                currency: "USD".to_string()
            }
        );
    }

    #[test]
    fn test_parse_tolerates_extra_whitespace() {
        let parsed = Directive::parse("  PRICE ,  EUR  ").unwrap();
        assert_eq!(
            parsed,
            Directive::Price {
                currency: "EUR".to_string()
            }
        );
    }

    #[test]
    fn test_parse_unknown_type() {
        assert_eq!(
            Directive::parse("LOWERCASE"),
            Err(DirectiveError::UnknownType("LOWERCASE".to_string()))
        );
    }

    #[test]
    fn test_parse_unknown_granularity() {
        assert_eq!(
            Directive::parse("DATETIME, MediumDateTime"),
            Err(DirectiveError::UnknownGranularity(
                "MediumDateTime".to_string()
            ))
        );
    }

    #[test]
    fn test_parse_empty() {
        assert_eq!(Directive::parse(""), Err(DirectiveError::Empty));
        assert_eq!(Directive::parse("   "), Err(DirectiveError::Empty));
    }

    #[test]
    fn test_parse_datetime_without_granularity() {
        assert_eq!(
            Directive::parse("DATETIME"),
            Err(DirectiveError::MissingGranularity)
        );
    }

    #[test]
    fn test_parse_price_without_currency() {
        assert_eq!(
            Directive::parse("PRICE"),
            Err(DirectiveError::MissingCurrency)
        );
    }
}
