//! Localized date/time rendering from a resolved option set.

use chrono::{Datelike, NaiveDateTime, Timelike};

use crate::locale::{DateOrder, Locale};
use crate::options::{DateTimeOptions, FieldWidth};

/// Render a date/time according to the option set and locale conventions.
pub fn format_datetime(dt: &NaiveDateTime, opts: &DateTimeOptions, locale: &Locale) -> String {
    let date = opts.has_date_fields().then(|| date_part(dt, opts, locale));
    let time = opts.has_time_fields().then(|| time_part(dt, opts, locale));

    match (date, time) {
        (Some(d), Some(t)) => format!("{d}, {t}"),
        (Some(d), None) => d,
        (None, Some(t)) => t,
        (None, None) => String::new(),
    }
}

fn date_part(dt: &NaiveDateTime, opts: &DateTimeOptions, locale: &Locale) -> String {
    let year = opts.year.map(|w| year_field(dt.year(), w));
    let month = opts.month.map(|w| field(dt.month(), w));
    let day = opts.day.map(|w| field(dt.day(), w));

    let ordered = match locale.date_order {
        DateOrder::MonthDayYear => [month, day, year],
        DateOrder::DayMonthYear => [day, month, year],
        DateOrder::YearMonthDay => [year, month, day],
    };

    let mut out = String::new();
    for piece in ordered.into_iter().flatten() {
        if !out.is_empty() {
            out.push(locale.date_separator);
        }
        out.push_str(&piece);
    }
    out
}

fn time_part(dt: &NaiveDateTime, opts: &DateTimeOptions, locale: &Locale) -> String {
    let hour24 = dt.hour();
    let hour = if opts.hour12 {
        match hour24 % 12 {
            0 => 12,
            h => h,
        }
    } else {
        hour24
    };

    let mut out = String::new();
    if let Some(width) = opts.hour {
        out.push_str(&field(hour, width));
    }
    // Minutes and seconds always render two-digit when combined with an
    // hour, matching how platform formatters behave.
    if opts.minute.is_some() {
        if !out.is_empty() {
            out.push(':');
        }
        out.push_str(&format!("{:02}", dt.minute()));
    }
    if opts.second.is_some() {
        if !out.is_empty() {
            out.push(':');
        }
        out.push_str(&format!("{:02}", dt.second()));
    }

    if opts.hour12 {
        out.push(' ');
        out.push_str(if hour24 < 12 {
            locale.am_string
        } else {
            locale.pm_string
        });
    }
    out
}

fn field(value: u32, width: FieldWidth) -> String {
    match width {
        FieldWidth::Numeric => value.to_string(),
        FieldWidth::TwoDigit => format!("{:02}", value),
    }
}

fn year_field(year: i32, width: FieldWidth) -> String {
    match width {
        FieldWidth::Numeric => year.to_string(),
        FieldWidth::TwoDigit => format!("{:02}", year.rem_euclid(100)),
    }
}
