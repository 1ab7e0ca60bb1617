//! intlfmt - locale-aware interpolation formatting with Fluent-backed translations
//!
//! This crate formats interpolated values (uppercase text, grouped numbers,
//! dates and times, currency amounts) according to comma-separated format
//! directives, and wires the result into a Fluent-based translation engine
//! that renders a localized demo page.

pub mod config;
pub mod directive;
pub mod engine;
pub mod error;
pub mod options;
pub mod page;
pub mod value;

mod cache;
pub mod formatter;
pub mod locale;

pub use config::{Config, Interpolation};
pub use directive::Directive;
pub use engine::{Arg, Localizer, TextDirection};
pub use error::{DirectiveError, EngineError};
pub use formatter::format_value;
pub use locale::Locale;
pub use options::{DateTimeOptions, FieldWidth, Granularity, HourFormat};
pub use page::PageContent;
pub use value::Value;
