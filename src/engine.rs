//! The translation engine context.
//!
//! [`Localizer`] wraps a set of Fluent bundles, one per locale, built from
//! embedded `.ftl` catalogs. It owns locale negotiation (configured
//! override, then system locale, then the configured fallback) and runs
//! interpolated values through the format-directive dispatcher before
//! handing them to Fluent.

use std::collections::HashMap;

use fluent_bundle::{FluentArgs, FluentBundle, FluentResource, FluentValue};
use rust_embed::RustEmbed;
use unic_langid::LanguageIdentifier;

use crate::config::Config;
use crate::error::EngineError;
use crate::formatter;
use crate::value::Value;

#[derive(RustEmbed)]
#[folder = "assets/locales/"]
struct Catalogs;

/// Text direction of a locale's script.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextDirection {
    Ltr,
    Rtl,
}

impl TextDirection {
    /// Direction for a language, classified by primary subtag.
    pub fn of(lang: &LanguageIdentifier) -> TextDirection {
        match lang.language.as_str() {
            "ar" | "dv" | "fa" | "he" | "ps" | "sd" | "ug" | "ur" | "yi" => TextDirection::Rtl,
            _ => TextDirection::Ltr,
        }
    }

    /// The HTML `dir` attribute value.
    pub fn as_str(&self) -> &'static str {
        match self {
            TextDirection::Ltr => "ltr",
            TextDirection::Rtl => "rtl",
        }
    }
}

/// One interpolated argument: a name, a value, and an optional format
/// directive such as `NUMBER` or `PRICE, USD`.
#[derive(Debug, Clone)]
pub struct Arg<'a> {
    name: &'a str,
    value: Value<'a>,
    format: Option<&'a str>,
}

impl<'a> Arg<'a> {
    /// An argument rendered with its locale-neutral display.
    pub fn new(name: &'a str, value: impl Into<Value<'a>>) -> Self {
        Arg {
            name,
            value: value.into(),
            format: None,
        }
    }

    /// An argument rendered through a format directive.
    pub fn formatted(name: &'a str, value: impl Into<Value<'a>>, directive: &'a str) -> Self {
        Arg {
            name,
            value: value.into(),
            format: Some(directive),
        }
    }
}

/// An explicitly constructed translation engine.
pub struct Localizer {
    bundles: HashMap<LanguageIdentifier, FluentBundle<FluentResource>>,
    available: Vec<LanguageIdentifier>,
    current: LanguageIdentifier,
    fallback: LanguageIdentifier,
    escape_value: bool,
}

impl Localizer {
    /// Build the engine from configuration.
    ///
    /// Loads every embedded catalog whose namespace the configuration
    /// names, negotiates the active locale, and fails if the fallback
    /// language has no catalog at all.
    pub fn init(config: &Config) -> Result<Localizer, EngineError> {
        let fallback: LanguageIdentifier = config
            .fallback_language
            .parse()
            .map_err(|_| EngineError::Language(config.fallback_language.clone()))?;

        let mut sources: HashMap<LanguageIdentifier, Vec<(String, String)>> = HashMap::new();
        for path in Catalogs::iter() {
            let path = path.as_ref();
            let Some((locale_str, file)) = path.split_once('/') else {
                continue;
            };
            let Some(namespace) = file.strip_suffix(".ftl") else {
                continue;
            };
            if !config.namespaces.iter().any(|ns| ns == namespace) {
                continue;
            }
            let Ok(locale) = locale_str.parse::<LanguageIdentifier>() else {
                continue;
            };
            if let Some(content) = Catalogs::get(path) {
                let source = String::from_utf8_lossy(content.data.as_ref()).to_string();
                sources.entry(locale).or_default().push((path.to_string(), source));
            }
        }

        let mut bundles = HashMap::new();
        let mut available = Vec::new();
        for (locale, resources) in sources {
            let mut bundle = FluentBundle::new(vec![locale.clone()]);
            bundle.set_use_isolating(false);
            for (path, source) in resources {
                let resource = FluentResource::try_new(source).map_err(|(_, errors)| {
                    EngineError::Resource {
                        path: path.clone(),
                        reason: format!("{} syntax error(s)", errors.len()),
                    }
                })?;
                bundle
                    .add_resource(resource)
                    .map_err(|errors| EngineError::Resource {
                        path,
                        reason: format!("{} conflicting message(s)", errors.len()),
                    })?;
            }
            bundles.insert(locale.clone(), bundle);
            available.push(locale);
        }
        available.sort_by_key(|l| l.to_string());

        if !bundles.contains_key(&fallback) {
            return Err(EngineError::MissingFallback(fallback.to_string()));
        }

        let requested = config.language.clone().or_else(sys_locale::get_locale);
        let current = requested
            .and_then(|s| s.parse::<LanguageIdentifier>().ok())
            .and_then(|lang| negotiate(&lang, &available))
            .unwrap_or_else(|| fallback.clone());

        Ok(Localizer {
            bundles,
            available,
            current,
            fallback,
            escape_value: config.interpolation.escape_value,
        })
    }

    /// The active locale.
    pub fn language(&self) -> &LanguageIdentifier {
        &self.current
    }

    /// Every locale with a loaded catalog, in stable order.
    pub fn languages(&self) -> &[LanguageIdentifier] {
        &self.available
    }

    /// Text direction of the active locale.
    pub fn dir(&self) -> TextDirection {
        TextDirection::of(&self.current)
    }

    /// Switch the active locale. Ignored when no catalog is loaded for it.
    pub fn set_language(&mut self, locale: LanguageIdentifier) {
        if self.bundles.contains_key(&locale) {
            self.current = locale;
        }
    }

    /// Resolve a key to a localized string with no arguments.
    pub fn translate(&self, key: &str) -> String {
        self.translate_args(key, &[])
    }

    /// Resolve a key to a localized string, interpolating arguments.
    ///
    /// Keys may carry a namespace qualifier (`common:price`); lookup uses
    /// the bare message id since all configured namespaces merge into one
    /// bundle per locale. A key missing from both the current and the
    /// fallback catalog comes back unchanged.
    pub fn translate_args(&self, key: &str, args: &[Arg<'_>]) -> String {
        let message_id = key.rsplit(':').next().unwrap_or(key);

        let fluent_args = if args.is_empty() {
            None
        } else {
            let mut out = FluentArgs::new();
            for arg in args {
                out.set(arg.name, FluentValue::from(self.render_arg(arg)));
            }
            Some(out)
        };

        for locale in [&self.current, &self.fallback] {
            let Some(bundle) = self.bundles.get(locale) else {
                continue;
            };
            let Some(message) = bundle.get_message(message_id) else {
                continue;
            };
            let Some(pattern) = message.value() else {
                continue;
            };
            let mut errors = Vec::new();
            let value = bundle.format_pattern(pattern, fluent_args.as_ref(), &mut errors);
            return value.to_string();
        }

        key.to_string()
    }

    fn render_arg(&self, arg: &Arg<'_>) -> String {
        let rendered = arg
            .format
            .and_then(|directive| formatter::format_value(&arg.value, directive, &self.current))
            .unwrap_or_else(|| arg.value.display());
        if self.escape_value {
            escape_html(&rendered)
        } else {
            rendered
        }
    }
}

/// Pick the best loaded locale for a request: exact match first, then the
/// first locale sharing the primary language subtag.
fn negotiate(
    requested: &LanguageIdentifier,
    available: &[LanguageIdentifier],
) -> Option<LanguageIdentifier> {
    if available.contains(requested) {
        return Some(requested.clone());
    }
    available
        .iter()
        .find(|locale| locale.language == requested.language)
        .cloned()
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negotiate_exact_match() {
        let available: Vec<LanguageIdentifier> =
            vec!["en-US".parse().unwrap(), "de".parse().unwrap()];
        let requested: LanguageIdentifier = "de".parse().unwrap();
        assert_eq!(negotiate(&requested, &available), Some("de".parse().unwrap()));
    }

    #[test]
    fn test_negotiate_primary_subtag() {
        let available: Vec<LanguageIdentifier> =
            vec!["en-US".parse().unwrap(), "de".parse().unwrap()];
        let requested: LanguageIdentifier = "en-GB".parse().unwrap();
        assert_eq!(
            negotiate(&requested, &available),
            Some("en-US".parse().unwrap())
        );
    }

    #[test]
    fn test_negotiate_no_match() {
        let available: Vec<LanguageIdentifier> = vec!["en-US".parse().unwrap()];
        let requested: LanguageIdentifier = "ko".parse().unwrap();
        assert_eq!(negotiate(&requested, &available), None);
    }

    #[test]
    fn test_text_direction() {
        let ar: LanguageIdentifier = "ar".parse().unwrap();
        let en: LanguageIdentifier = "en-US".parse().unwrap();
        assert_eq!(TextDirection::of(&ar), TextDirection::Rtl);
        assert_eq!(TextDirection::of(&en), TextDirection::Ltr);
        assert_eq!(TextDirection::Rtl.as_str(), "rtl");
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("a<b> & \"c\""), "a&lt;b&gt; &amp; &quot;c&quot;");
    }
}
