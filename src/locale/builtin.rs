//! Built-in locale conventions.

/// Order of the calendar fields in a rendered date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateOrder {
    MonthDayYear,
    DayMonthYear,
    YearMonthDay,
}

/// Formatting conventions for one locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Locale {
    pub id: &'static str,
    pub decimal_separator: char,
    pub group_separator: char,
    pub date_order: DateOrder,
    pub date_separator: char,
    pub am_string: &'static str,
    pub pm_string: &'static str,
    /// Currency symbol precedes the amount (no space); otherwise it
    /// follows the amount after a non-breaking space.
    pub currency_prefix: bool,
}

pub static EN_US: Locale = Locale {
    id: "en-US",
    decimal_separator: '.',
    group_separator: ',',
    date_order: DateOrder::MonthDayYear,
    date_separator: '/',
    am_string: "AM",
    pm_string: "PM",
    currency_prefix: true,
};

pub static DE_DE: Locale = Locale {
    id: "de-DE",
    decimal_separator: ',',
    group_separator: '.',
    date_order: DateOrder::DayMonthYear,
    date_separator: '.',
    am_string: "AM",
    pm_string: "PM",
    currency_prefix: false,
};

pub static FR_FR: Locale = Locale {
    id: "fr-FR",
    decimal_separator: ',',
    group_separator: '\u{a0}',
    date_order: DateOrder::DayMonthYear,
    date_separator: '/',
    am_string: "AM",
    pm_string: "PM",
    currency_prefix: false,
};

pub static JA_JP: Locale = Locale {
    id: "ja-JP",
    decimal_separator: '.',
    group_separator: ',',
    date_order: DateOrder::YearMonthDay,
    date_separator: '/',
    am_string: "午前",
    pm_string: "午後",
    currency_prefix: true,
};
