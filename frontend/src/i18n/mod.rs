use std::collections::HashMap;
use leptos::*;

/// Translation data loaded from JSON files
type Translations = HashMap<String, String>;

/// I18n context that provides translation functions
#[derive(Clone, Copy)]
pub struct I18nContext {
    pub language: RwSignal<String>,
    translations: RwSignal<Translations>,
}

impl I18nContext {
    /// Create a new I18nContext with the specified language
    pub fn new(language: String) -> Self {
        let translations = load_translations(&language);
        Self {
            language: create_rw_signal(language),
            translations: create_rw_signal(translations),
        }
    }

    /// Translate a key to the current language
    /// Returns the key itself if translation is not found
    pub fn t(&self, key: &str) -> String {
        self.translations
            .with(|translations| translations.get(key).cloned())
            .unwrap_or_else(|| key.to_string())
    }

    /// Change the current language
    pub fn set_language(&self, lang: &str) {
        let translations = load_translations(lang);
        self.language.set(lang.to_string());
        self.translations.set(translations);
    }
}

/// Load translations for a language from embedded JSON
fn load_translations(lang: &str) -> Translations {
    let json = match lang {
        "de" => include_str!("../translations/de.json"),
        _ => include_str!("../translations/en.json"),
    };

    serde_json::from_str(json).unwrap_or_default()
}

/// Provide I18n context to the application
pub fn provide_i18n(language: String) {
    let ctx = I18nContext::new(language);
    provide_context(ctx);
}

/// Use the I18n context from within a component.
///
/// Falls back to English so components also work in hosts that never
/// called [`provide_i18n`].
pub fn use_i18n() -> I18nContext {
    use_context::<I18nContext>().unwrap_or_else(|| I18nContext::new("en".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_translations_en() {
        let translations = load_translations("en");
        assert_eq!(translations.get("code.copy").unwrap(), chatmd::copy::COPY_LABEL);
        assert_eq!(translations.get("code.copied").unwrap(), chatmd::copy::COPIED_LABEL);
        assert_eq!(translations.get("code.copy_title").unwrap(), chatmd::copy::COPY_TITLE);
    }

    #[test]
    fn test_load_translations_de() {
        let translations = load_translations("de");
        assert_eq!(translations.get("code.copy").unwrap(), "⧉ Kopieren");
    }

    #[test]
    fn test_load_translations_fallback() {
        let translations = load_translations("invalid");
        assert_eq!(translations.get("code.copied").unwrap(), "✅ Copied!");
    }

    #[test]
    fn test_set_language_switches_tables() {
        let i18n = I18nContext::new("en".to_string());
        assert_eq!(i18n.t("chat.sources"), "Sources");

        i18n.set_language("de");
        assert_eq!(i18n.language.get_untracked(), "de");
        assert_eq!(i18n.t("code.copy"), "⧉ Kopieren");
        assert_eq!(i18n.t("no.such.key"), "no.such.key");
    }

    #[test]
    fn test_translation_keys_match() {
        let en = load_translations("en");
        let de = load_translations("de");
        let mut en_keys: Vec<_> = en.keys().collect();
        let mut de_keys: Vec<_> = de.keys().collect();
        en_keys.sort();
        de_keys.sort();
        assert_eq!(en_keys, de_keys);
    }
}
