//! Locale-grouped plain number formatting.

use crate::locale::Locale;

/// Maximum fraction digits for a plain localized number, matching the
/// platform default of `Intl.NumberFormat`.
const MAX_FRACTION_DIGITS: usize = 3;

/// Format a number with the locale's grouping and decimal separators.
pub fn format_number(value: f64, locale: &Locale) -> String {
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

    let negative = value < 0.0;
    let rounded = format!("{:.*}", MAX_FRACTION_DIGITS, value.abs());
    let (int_part, frac_part) = match rounded.split_once('.') {
        Some((i, f)) => (i, f.trim_end_matches('0')),
        None => (rounded.as_str(), ""),
    };

    let mut out = String::new();
    if negative {
        out.push('-');
    }
    out.push_str(&group_digits(int_part, locale.group_separator));
    if !frac_part.is_empty() {
        out.push(locale.decimal_separator);
        out.push_str(frac_part);
    }
    out
}

/// Format a non-negative amount with a fixed number of fraction digits.
///
/// Used for currency amounts, where trailing zeros are kept.
pub fn format_fixed(value: f64, fraction_digits: u32, locale: &Locale) -> String {
    let rounded = format!("{:.*}", fraction_digits as usize, value);
    let (int_part, frac_part) = match rounded.split_once('.') {
        Some((i, f)) => (i, f),
        None => (rounded.as_str(), ""),
    };

    let mut out = group_digits(int_part, locale.group_separator);
    if !frac_part.is_empty() {
        out.push(locale.decimal_separator);
        out.push_str(frac_part);
    }
    out
}

/// Insert a group separator every three integer digits.
fn group_digits(digits: &str, separator: char) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    let len = digits.len();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(ch);
    }
    out
}
