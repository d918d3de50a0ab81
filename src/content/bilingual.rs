use crate::prefs::Language;

/// What: Choose the variant of a bilingual field for `lang`.
///
/// Inputs:
/// - `lang`: Active language.
/// - `en`, `hi`: The English and Hindi variants of the same field.
///
/// Output:
/// - The requested variant, or the other one when the requested variant is empty.
///   An empty string when both are empty.
#[must_use]
pub fn pick<'a>(lang: Language, en: &'a str, hi: &'a str) -> &'a str {
    let (wanted, other) = match lang {
        Language::English => (en, hi),
        Language::Hindi => (hi, en),
    };
    if wanted.trim().is_empty() { other } else { wanted }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pick_prefers_requested_then_falls_back() {
        assert_eq!(pick(Language::English, "Growth", "विकास"), "Growth");
        assert_eq!(pick(Language::Hindi, "Growth", "विकास"), "विकास");
        assert_eq!(pick(Language::Hindi, "Growth", ""), "Growth");
        assert_eq!(pick(Language::English, "  ", "विकास"), "विकास");
        assert_eq!(pick(Language::English, "", ""), "");
    }
}
