//! Localized currency formatting.

use crate::formatter::number::format_fixed;
use crate::locale::{currency_info, Locale};

/// Format an amount as localized currency.
///
/// Known currency codes use their symbol and minor-unit count; unknown
/// codes are rendered as the raw code next to a two-decimal amount, the
/// way platform formatters degrade.
pub fn format_price(value: f64, currency: &str, locale: &Locale) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }

    let (symbol, minor_units, known) = match currency_info(currency) {
        Some(info) => (info.symbol, info.minor_units, true),
        None => (currency, 2, false),
    };

    let amount = format_fixed(value.abs(), minor_units, locale);
    let sign = if value < 0.0 { "-" } else { "" };

    if known && locale.currency_prefix {
        format!("{sign}{symbol}{amount}")
    } else if known {
        format!("{sign}{amount}\u{a0}{symbol}")
    } else if locale.currency_prefix {
        format!("{sign}{symbol}\u{a0}{amount}")
    } else {
        format!("{sign}{amount}\u{a0}{symbol}")
    }
}
