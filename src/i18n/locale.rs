//! Locale type: Validated locale representation.
//!
//! A `Locale` can only be constructed from an entry of the registry, so every
//! value of this type names a locale with a catalog behind it.

use serde::{Serialize, Serializer};

use crate::i18n::registry::{self, LocaleConfig, LocaleRegistry};

/// A validated locale.
#[derive(Clone, Copy)]
pub struct Locale {
    config: &'static LocaleConfig,
}

impl Locale {
    pub const ENGLISH: Locale = Locale { config: &registry::ENU };
    pub const GERMAN: Locale = Locale { config: &registry::DEU };
    pub const SPANISH: Locale = Locale { config: &registry::ESN };
    pub const FRENCH: Locale = Locale { config: &registry::FRA };
    pub const ITALIAN: Locale = Locale { config: &registry::ITA };
    pub const JAPANESE: Locale = Locale { config: &registry::JPN };
    pub const KOREAN: Locale = Locale { config: &registry::KOR };
    pub const PORTUGUESE: Locale = Locale { config: &registry::PTG };
    pub const CHINESE_SIMPLIFIED: Locale = Locale { config: &registry::CHS };
    pub const CHINESE_TRADITIONAL: Locale = Locale { config: &registry::CHT };

    /// The fixed fallback locale, always valid.
    pub const BASELINE: Locale = Locale::ENGLISH;

    /// Parse a locale identifier.
    ///
    /// Accepts a three-letter product code ("deu") or a BCP-47 tag ("de-DE",
    /// "de_de"), case-insensitively, after trimming whitespace.
    ///
    /// # Returns
    /// * `Some(Locale)` if the identifier names a known locale
    /// * `None` for empty or unknown identifiers
    pub fn parse(value: &str) -> Option<Locale> {
        let value = value.trim();
        if value.is_empty() {
            return None;
        }
        let registry = LocaleRegistry::get();
        registry
            .get_by_code(value)
            .or_else(|| registry.get_by_tag(value))
            .map(|config| Locale { config })
    }

    /// Get the canonical (source) locale.
    pub fn canonical() -> Locale {
        Locale {
            config: LocaleRegistry::get().canonical(),
        }
    }

    /// Every supported locale, canonical first.
    pub fn all() -> Vec<Locale> {
        LocaleRegistry::get()
            .list_all()
            .into_iter()
            .map(|config| Locale { config })
            .collect()
    }

    /// Three-letter product code (e.g., "deu").
    pub fn code(&self) -> &'static str {
        self.config.code
    }

    /// BCP-47 tag (e.g., "de-DE").
    pub fn tag(&self) -> &'static str {
        self.config.tag
    }

    /// English name of the locale.
    pub fn name(&self) -> &'static str {
        self.config.name
    }

    /// Native name of the locale.
    pub fn native_name(&self) -> &'static str {
        self.config.native_name
    }

    /// Check if this is the source locale.
    pub fn is_canonical(&self) -> bool {
        self.config.is_canonical
    }

    /// Full registry configuration for this locale.
    pub fn config(&self) -> &'static LocaleConfig {
        self.config
    }
}

impl PartialEq for Locale {
    fn eq(&self, other: &Self) -> bool {
        self.config.code == other.config.code
    }
}

impl Eq for Locale {}

impl std::hash::Hash for Locale {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.config.code.hash(state);
    }
}

impl std::fmt::Debug for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Locale").field(&self.config.code).finish()
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.config.code, self.config.tag)
    }
}

impl Serialize for Locale {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.config.code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Constant Tests ====================

    #[test]
    fn test_english_constant() {
        let english = Locale::ENGLISH;
        assert_eq!(english.code(), "enu");
        assert_eq!(english.tag(), "en-US");
        assert!(english.is_canonical());
    }

    #[test]
    fn test_baseline_is_canonical() {
        assert_eq!(Locale::BASELINE, Locale::canonical());
    }

    #[test]
    fn test_japanese_constant() {
        let japanese = Locale::JAPANESE;
        assert_eq!(japanese.code(), "jpn");
        assert_eq!(japanese.native_name(), "日本語");
        assert!(!japanese.is_canonical());
    }

    // ==================== parse Tests ====================

    #[test]
    fn test_parse_three_letter_code() {
        assert_eq!(Locale::parse("deu"), Some(Locale::GERMAN));
        assert_eq!(Locale::parse("KOR"), Some(Locale::KOREAN));
    }

    #[test]
    fn test_parse_bcp47_tag() {
        assert_eq!(Locale::parse("fr-FR"), Some(Locale::FRENCH));
        assert_eq!(Locale::parse("zh_CN"), Some(Locale::CHINESE_SIMPLIFIED));
    }

    #[test]
    fn test_parse_trims_whitespace() {
        assert_eq!(Locale::parse("  ita \n"), Some(Locale::ITALIAN));
    }

    #[test]
    fn test_parse_invalid() {
        assert_eq!(Locale::parse("Test"), None);
        assert_eq!(Locale::parse("de"), None);
        assert_eq!(Locale::parse(""), None);
        assert_eq!(Locale::parse("   "), None);
    }

    // ==================== Trait Tests ====================

    #[test]
    fn test_locale_equality() {
        assert_eq!(Locale::parse("ptg").unwrap(), Locale::PORTUGUESE);
        assert_ne!(Locale::CHINESE_SIMPLIFIED, Locale::CHINESE_TRADITIONAL);
    }

    #[test]
    fn test_locale_debug_and_display() {
        assert_eq!(format!("{:?}", Locale::SPANISH), "Locale(\"esn\")");
        assert_eq!(Locale::SPANISH.to_string(), "esn (es-ES)");
    }

    #[test]
    fn test_locale_serializes_as_code() {
        let json = serde_json::to_string(&Locale::CHINESE_TRADITIONAL).unwrap();
        assert_eq!(json, "\"cht\"");
    }

    #[test]
    fn test_all_contains_every_locale() {
        let all = Locale::all();
        assert_eq!(all.len(), 10);
        assert_eq!(all[0], Locale::ENGLISH);
        assert!(all.contains(&Locale::CHINESE_TRADITIONAL));
    }
}
