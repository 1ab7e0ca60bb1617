//! Parsed-directive caching.

use lru::LruCache;
use std::num::NonZeroUsize;
use std::sync::Mutex;

use crate::directive::Directive;
use crate::error::DirectiveError;

/// Global cache for parsed format directives.
static CACHE: Mutex<Option<LruCache<String, Directive>>> = Mutex::new(None);

const CACHE_SIZE: usize = 100;

/// Get or parse a format directive, using the cache.
pub fn get_or_parse(raw: &str) -> Result<Directive, DirectiveError> {
    let mut cache_guard = CACHE.lock().unwrap();

    let cache = cache_guard
        .get_or_insert_with(|| LruCache::new(NonZeroUsize::new(CACHE_SIZE).unwrap()));

    if let Some(directive) = cache.get(raw) {
        return Ok(directive.clone());
    }

    let directive = Directive::parse(raw)?;
    cache.put(raw.to_string(), directive.clone());
    Ok(directive)
}
