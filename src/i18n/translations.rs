//! Translation map and lookup utilities.

use std::collections::HashMap;

/// Translation map: dot-notation key -> translated string.
pub type TranslationMap = HashMap<String, String>;

/// What: Look up `key`, falling back to the English map and then to the key itself.
///
/// Details:
/// - A missing key is logged at debug level and returned verbatim so it is visible on screen.
pub fn translate_with_fallback<'a>(
    key: &'a str,
    translations: &'a TranslationMap,
    fallback_translations: &'a TranslationMap,
) -> &'a str {
    if let Some(translation) = translations.get(key) {
        return translation;
    }
    if let Some(translation) = fallback_translations.get(key) {
        tracing::debug!(key, "translation missing in active locale, using English");
        return translation;
    }
    tracing::debug!(key, "missing translation key");
    key
}

/// Replace each `{}` in `template` with the next of `args`.
#[must_use]
pub fn format_placeholders(template: &str, args: &[&dyn std::fmt::Display]) -> String {
    let mut result = template.to_string();
    for arg in args {
        result = result.replacen("{}", &arg.to_string(), 1);
    }
    result
}
