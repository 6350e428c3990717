//! Locale registry: Single source of truth for all supported locales.
//!
//! This module provides a centralized registry of every locale the facade can
//! render messages in. The locale table is static; the lookup maps built from
//! the catalogs are created once behind a `OnceLock` and shared thereafter.

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::i18n::catalogs;

/// Configuration for a supported locale.
///
/// Contains all metadata for a specific locale, including its product code,
/// standard tag, names and the built-in catalog it renders with.
#[derive(Clone)]
pub struct LocaleConfig {
    /// Three-letter product code (e.g., "enu", "deu")
    pub code: &'static str,

    /// BCP-47 language-region tag (e.g., "en-US", "de-DE")
    pub tag: &'static str,

    /// English name of the locale (e.g., "German")
    pub name: &'static str,

    /// Native name of the locale (e.g., "Deutsch")
    pub native_name: &'static str,

    /// Whether this is the source locale (exactly one is)
    pub is_canonical: bool,

    /// Built-in `(key, translation)` entries
    pub catalog: &'static [(&'static str, &'static str)],
}

impl std::fmt::Debug for LocaleConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocaleConfig")
            .field("code", &self.code)
            .field("tag", &self.tag)
            .field("is_canonical", &self.is_canonical)
            .field("entries", &self.catalog.len())
            .finish()
    }
}

pub(crate) const ENU: LocaleConfig = LocaleConfig {
    code: "enu",
    tag: "en-US",
    name: "English",
    native_name: "English",
    is_canonical: true,
    catalog: catalogs::ENU,
};

pub(crate) const DEU: LocaleConfig = LocaleConfig {
    code: "deu",
    tag: "de-DE",
    name: "German",
    native_name: "Deutsch",
    is_canonical: false,
    catalog: catalogs::DEU,
};

pub(crate) const ESN: LocaleConfig = LocaleConfig {
    code: "esn",
    tag: "es-ES",
    name: "Spanish",
    native_name: "Español",
    is_canonical: false,
    catalog: catalogs::ESN,
};

pub(crate) const FRA: LocaleConfig = LocaleConfig {
    code: "fra",
    tag: "fr-FR",
    name: "French",
    native_name: "Français",
    is_canonical: false,
    catalog: catalogs::FRA,
};

pub(crate) const ITA: LocaleConfig = LocaleConfig {
    code: "ita",
    tag: "it-IT",
    name: "Italian",
    native_name: "Italiano",
    is_canonical: false,
    catalog: catalogs::ITA,
};

pub(crate) const JPN: LocaleConfig = LocaleConfig {
    code: "jpn",
    tag: "ja-JP",
    name: "Japanese",
    native_name: "日本語",
    is_canonical: false,
    catalog: catalogs::JPN,
};

pub(crate) const KOR: LocaleConfig = LocaleConfig {
    code: "kor",
    tag: "ko-KR",
    name: "Korean",
    native_name: "한국어",
    is_canonical: false,
    catalog: catalogs::KOR,
};

pub(crate) const PTG: LocaleConfig = LocaleConfig {
    code: "ptg",
    tag: "pt-BR",
    name: "Portuguese (Brazil)",
    native_name: "Português (Brasil)",
    is_canonical: false,
    catalog: catalogs::PTG,
};

pub(crate) const CHS: LocaleConfig = LocaleConfig {
    code: "chs",
    tag: "zh-CN",
    name: "Chinese (Simplified)",
    native_name: "简体中文",
    is_canonical: false,
    catalog: catalogs::CHS,
};

pub(crate) const CHT: LocaleConfig = LocaleConfig {
    code: "cht",
    tag: "zh-TW",
    name: "Chinese (Traditional)",
    native_name: "繁體中文",
    is_canonical: false,
    catalog: catalogs::CHT,
};

/// Every supported locale. The canonical locale comes first.
const LOCALES: &[&LocaleConfig] = &[&ENU, &DEU, &ESN, &FRA, &ITA, &JPN, &KOR, &PTG, &CHS, &CHT];

/// Global locale registry singleton.
///
/// Holds the locale table plus one key→translation map per locale, built on
/// first access and immutable thereafter.
pub struct LocaleRegistry {
    catalogs: HashMap<&'static str, HashMap<&'static str, &'static str>>,
}

/// Global registry instance (initialized lazily)
static REGISTRY: OnceLock<LocaleRegistry> = OnceLock::new();

impl LocaleRegistry {
    /// Get the global locale registry instance.
    pub fn get() -> &'static LocaleRegistry {
        REGISTRY.get_or_init(|| LocaleRegistry {
            catalogs: LOCALES
                .iter()
                .map(|config| (config.code, config.catalog.iter().copied().collect()))
                .collect(),
        })
    }

    /// Get a locale configuration by its three-letter code.
    ///
    /// # Arguments
    /// * `code` - The product code (e.g., "deu"), matched case-insensitively
    ///
    /// # Returns
    /// * `Some(&LocaleConfig)` if the locale exists
    /// * `None` if the code is unknown
    pub fn get_by_code(&self, code: &str) -> Option<&'static LocaleConfig> {
        LOCALES
            .iter()
            .copied()
            .find(|config| config.code.eq_ignore_ascii_case(code))
    }

    /// Get a locale configuration by its BCP-47 tag.
    ///
    /// Matching ignores case and accepts `_` in place of `-`.
    pub fn get_by_tag(&self, tag: &str) -> Option<&'static LocaleConfig> {
        let normalized = tag.replace('_', "-");
        LOCALES
            .iter()
            .copied()
            .find(|config| config.tag.eq_ignore_ascii_case(&normalized))
    }

    /// Get all locales, canonical first.
    pub fn list_all(&self) -> Vec<&'static LocaleConfig> {
        LOCALES.to_vec()
    }

    /// Get the canonical (source) locale configuration.
    pub fn canonical(&self) -> &'static LocaleConfig {
        &ENU
    }

    /// Get the built-in key→translation map for a locale code.
    pub fn catalog(&self, code: &str) -> Option<&HashMap<&'static str, &'static str>> {
        let config = self.get_by_code(code)?;
        self.catalogs.get(config.code)
    }
}
