//! Internationalization module
//!
//! Provides translations for French (fr) and English (en) languages.
//! Supports automatic language detection based on system locale.

mod en;
mod fr;

use crate::core::Tier;
use std::collections::HashMap;

/// Internationalization manager
pub struct I18n {
    current_lang: String,
    translations: HashMap<String, String>,
}

impl I18n {
    /// Create a new I18n instance with the specified language
    pub fn new(lang: &str) -> Self {
        let mut i18n = Self {
            current_lang: String::new(),
            translations: HashMap::new(),
        };
        i18n.set_language(lang);
        i18n
    }

    /// Set the current language
    pub fn set_language(&mut self, lang: &str) {
        let lang = if lang == "auto" {
            detect_system_language()
        } else {
            lang.to_string()
        };

        self.translations = match lang.as_str() {
            "fr" => fr::get_translations(),
            _ => en::get_translations(),
        };
        self.current_lang = lang;

        log::info!("Language set to: {}", self.current_lang);
    }

    /// Get a translated string by key
    pub fn get(&self, key: &str) -> String {
        self.translations
            .get(key)
            .cloned()
            .unwrap_or_else(|| key.to_string())
    }

    /// Get a translated string with `{placeholder}` values filled in
    pub fn format(&self, key: &str, args: &[(&str, &str)]) -> String {
        args.iter().fold(self.get(key), |text, (name, value)| {
            text.replace(&format!("{{{}}}", name), value)
        })
    }

    /// Localized label for a usage tier
    pub fn tier_label(&self, tier: Tier) -> String {
        self.get(tier.i18n_key())
    }

    /// Get the current language code
    pub fn current_language(&self) -> &str {
        &self.current_lang
    }
}

impl Default for I18n {
    fn default() -> Self {
        Self::new("auto")
    }
}

/// Detect system language from the locale environment variables
fn detect_system_language() -> String {
    let lang_env = std::env::var("LANG")
        .or_else(|_| std::env::var("LC_ALL"))
        .or_else(|_| std::env::var("LC_MESSAGES"))
        .unwrap_or_else(|_| "en".to_string());

    language_from_locale(&lang_env).to_string()
}

/// Supported language code for a locale such as "fr_FR.UTF-8"
fn language_from_locale(locale: &str) -> &'static str {
    let code = locale
        .split('_')
        .next()
        .unwrap_or("en")
        .split('.')
        .next()
        .unwrap_or("en");

    match code {
        "fr" => "fr",
        _ => "en",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_languages_share_keys() {
        let en = en::get_translations();
        let fr = fr::get_translations();

        let mut en_keys: Vec<_> = en.keys().collect();
        let mut fr_keys: Vec<_> = fr.keys().collect();
        en_keys.sort();
        fr_keys.sort();
        assert_eq!(en_keys, fr_keys);
    }

    #[test]
    fn test_unknown_key_falls_back() {
        let i18n = I18n::new("en");
        assert_eq!(i18n.get("no.such.key"), "no.such.key");
    }

    #[test]
    fn test_format_placeholders() {
        let i18n = I18n::new("en");
        let text = i18n.format("ledger.saved", &[("name", "Fan"), ("hours", "6")]);
        assert_eq!(text, "Saved Fan: 6 hrs/day");
    }

    #[test]
    fn test_tier_labels() {
        let i18n = I18n::new("fr");
        assert_eq!(i18n.current_language(), "fr");
        assert_eq!(i18n.tier_label(Tier::Efficient), "Efficace");
    }

    #[test]
    fn test_locale_detection() {
        assert_eq!(language_from_locale("fr_FR.UTF-8"), "fr");
        assert_eq!(language_from_locale("fr"), "fr");
        assert_eq!(language_from_locale("de_DE.UTF-8"), "en");
        assert_eq!(language_from_locale("C.UTF-8"), "en");
    }
}
