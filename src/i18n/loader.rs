//! Locale parsing: nested YAML flattened into dot-notation keys.

use crate::i18n::translations::TranslationMap;

/// English strings, compiled into the binary.
pub const EN_YAML: &str = include_str!("../../locales/en.yml");
/// Hindi strings, compiled into the binary.
pub const HI_YAML: &str = include_str!("../../locales/hi.yml");

/// What: Parse a locale document into a `TranslationMap`.
///
/// Inputs:
/// - `yaml_content`: Document whose single top-level key is the locale code (`en:`).
///
/// # Errors
/// - Returns `Err` when the content is empty or not valid YAML.
pub fn parse_locale_yaml(yaml_content: &str) -> Result<TranslationMap, String> {
    if yaml_content.trim().is_empty() {
        return Err("locale document is empty".to_string());
    }
    let doc: serde_norway::Value =
        serde_norway::from_str(yaml_content).map_err(|e| format!("Failed to parse YAML: {e}"))?;

    let mut translations = TranslationMap::new();
    if let Some(locale_obj) = doc.as_mapping() {
        for (_locale_key, locale_value) in locale_obj {
            flatten_yaml_value(locale_value, "", &mut translations);
        }
    }
    Ok(translations)
}

/// Recursively flatten `value` under `prefix`; scalars become strings, sequences are skipped.
fn flatten_yaml_value(
    value: &serde_norway::Value,
    prefix: &str,
    translations: &mut TranslationMap,
) {
    match value {
        serde_norway::Value::Mapping(map) => {
            for (key, val) in map {
                let Some(key_str) = key.as_str() else {
                    tracing::debug!(prefix, "skipping non-string locale key");
                    continue;
                };
                let new_prefix = if prefix.is_empty() {
                    key_str.to_string()
                } else {
                    format!("{prefix}.{key_str}")
                };
                flatten_yaml_value(val, &new_prefix, translations);
            }
        }
        serde_norway::Value::String(s) => {
            translations.insert(prefix.to_string(), s.clone());
        }
        serde_norway::Value::Number(n) => {
            translations.insert(prefix.to_string(), n.to_string());
        }
        serde_norway::Value::Bool(b) => {
            translations.insert(prefix.to_string(), b.to_string());
        }
        _ => {}
    }
}

/// Parse an embedded locale, logging and returning an empty map on failure.
pub(super) fn load_embedded(code: &str, yaml: &str) -> TranslationMap {
    match parse_locale_yaml(yaml) {
        Ok(map) => {
            tracing::debug!(locale = code, keys = map.len(), "loaded locale");
            map
        }
        Err(e) => {
            tracing::error!(locale = code, error = %e, "embedded locale is invalid");
            TranslationMap::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nested_keys_flatten_with_dots() {
        let yaml = "en:\n  app:\n    tabs:\n      home: \"Home\"\n  count: 3\n";
        let map = parse_locale_yaml(yaml).expect("parse");
        assert_eq!(map.get("app.tabs.home").map(String::as_str), Some("Home"));
        assert_eq!(map.get("count").map(String::as_str), Some("3"));
    }

    #[test]
    fn invalid_and_empty_documents_are_errors() {
        assert!(parse_locale_yaml("").is_err());
        assert!(parse_locale_yaml("en: [unclosed").is_err());
    }

    #[test]
    fn embedded_locales_share_the_same_keys() {
        let en = parse_locale_yaml(EN_YAML).expect("en");
        let hi = parse_locale_yaml(HI_YAML).expect("hi");
        assert!(en.len() > 50);
        let mut missing: Vec<&String> = en.keys().filter(|k| !hi.contains_key(*k)).collect();
        missing.sort();
        assert!(missing.is_empty(), "keys missing from hi.yml: {missing:?}");
    }
}
