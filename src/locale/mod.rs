//! Built-in locale and currency data.

mod builtin;
mod currency;

pub use builtin::{DateOrder, Locale};
pub use currency::{currency_info, CurrencyInfo};

use unic_langid::LanguageIdentifier;

impl Locale {
    /// Look up the built-in locale for a language identifier.
    ///
    /// Matching is by primary language subtag, so `de-AT` resolves to the
    /// German conventions. Unknown languages fall back to `en-US`.
    pub fn for_language(lang: &LanguageIdentifier) -> &'static Locale {
        match lang.language.as_str() {
            "de" => &builtin::DE_DE,
            "fr" => &builtin::FR_FR,
            "ja" => &builtin::JA_JP,
            _ => &builtin::EN_US,
        }
    }
}
