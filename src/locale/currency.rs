//! Currency symbol and minor-unit data for common ISO 4217 codes.

/// Display data for one currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrencyInfo {
    pub symbol: &'static str,
    /// Number of fraction digits (2 for most currencies, 0 for yen-like).
    pub minor_units: u32,
}

/// Look up display data for a currency code.
///
/// Returns `None` for codes outside the built-in table; callers then fall
/// back to rendering the raw code next to the amount.
pub fn currency_info(code: &str) -> Option<CurrencyInfo> {
    let info = match code {
        "USD" => CurrencyInfo {
            symbol: "$",
            minor_units: 2,
        },
        "EUR" => CurrencyInfo {
            symbol: "€",
            minor_units: 2,
        },
        "GBP" => CurrencyInfo {
            symbol: "£",
            minor_units: 2,
        },
        "JPY" => CurrencyInfo {
            symbol: "¥",
            minor_units: 0,
        },
        "CNY" => CurrencyInfo {
            symbol: "CN¥",
            minor_units: 2,
        },
        "KRW" => CurrencyInfo {
            symbol: "₩",
            minor_units: 0,
        },
        "INR" => CurrencyInfo {
            symbol: "₹",
            minor_units: 2,
        },
        "CAD" => CurrencyInfo {
            symbol: "CA$",
            minor_units: 2,
        },
        "AUD" => CurrencyInfo {
            symbol: "A$",
            minor_units: 2,
        },
        "CHF" => CurrencyInfo {
            symbol: "CHF",
            minor_units: 2,
        },
        _ => return None,
    };
    Some(info)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_codes() {
        assert_eq!(currency_info("USD").unwrap().symbol, "$");
        assert_eq!(currency_info("JPY").unwrap().minor_units, 0);
    }

    #[test]
    fn test_unknown_code() {
        assert!(currency_info("XYZ").is_none());
    }
}
