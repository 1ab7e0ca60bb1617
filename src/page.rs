//! The demo page: a fixed set of slots filled with localized content.

use chrono::NaiveDateTime;

use crate::engine::{Arg, Localizer, TextDirection};
use crate::formatter;
use crate::value::Value;

/// The number shown in the grouped-number slot.
const SAMPLE_NUMBER: f64 = 1_234_567_890.0;
/// The amount shown in the currency slot.
const SAMPLE_PRICE: f64 = 1000.01;
const PRICE_DIRECTIVE: &str = "PRICE, USD";

/// Localized content for every slot of the demo page, plus the text
/// direction a host should apply to the page root.
#[derive(Debug, Clone, PartialEq)]
pub struct PageContent {
    pub heading: String,
    pub app_title: String,
    pub author: String,
    pub number: String,
    pub date_time: String,
    pub date: String,
    pub time: String,
    pub price: String,
    pub btn_save: String,
    pub btn_cancel: String,
    pub btn_delete: String,
    pub info: String,
    pub dir: TextDirection,
}

impl PageContent {
    /// The `(element id, content)` pairs a host injects into its markup.
    pub fn slots(&self) -> [(&'static str, &str); 12] {
        [
            ("headingId", self.heading.as_str()),
            ("apptitle", self.app_title.as_str()),
            ("author", self.author.as_str()),
            ("numberFormat", self.number.as_str()),
            ("dateTime", self.date_time.as_str()),
            ("dateId", self.date.as_str()),
            ("timeId", self.time.as_str()),
            ("currencyFormat", self.price.as_str()),
            ("btnSave", self.btn_save.as_str()),
            ("btnCancel", self.btn_cancel.as_str()),
            ("btnDelete", self.btn_delete.as_str()),
            ("info", self.info.as_str()),
        ]
    }
}

/// Render the page for the engine's active locale at the given clock value.
pub fn render(engine: &Localizer, author: &str, now: NaiveDateTime) -> PageContent {
    let language = engine.language().to_string();
    let languages = engine
        .languages()
        .iter()
        .map(|l| l.to_string())
        .collect::<Vec<_>>()
        .join(", ");

    PageContent {
        heading: engine.translate("heading"),
        app_title: engine.translate("app-title"),
        author: engine.translate_args("author", &[Arg::new("value", author)]),
        number: engine.translate_args(
            "common:number",
            &[Arg::formatted("value", SAMPLE_NUMBER, "NUMBER")],
        ),
        date_time: directive_slot(engine, now, "DATETIME, ShortDateTime, hour24"),
        date: directive_slot(engine, now, "DATETIME, Date"),
        time: directive_slot(engine, now, "DATETIME, Time, hour24"),
        price: engine.translate_args(
            "common:price",
            &[Arg::formatted("value", SAMPLE_PRICE, PRICE_DIRECTIVE)],
        ),
        btn_save: engine.translate("common:button-save"),
        btn_cancel: engine.translate("common:button-cancel"),
        btn_delete: engine.translate("common:button-delete"),
        info: engine.translate_args(
            "info",
            &[
                Arg::new("language", language.as_str()),
                Arg::new("languages", languages.as_str()),
            ],
        ),
        dir: engine.dir(),
    }
}

/// Format a clock value straight through the dispatcher, leaving it
/// unformatted if the directive is not recognized.
fn directive_slot(engine: &Localizer, now: NaiveDateTime, directive: &str) -> String {
    let value = Value::DateTime(now);
    formatter::format_value(&value, directive, engine.language())
        .unwrap_or_else(|| value.display())
}
