//! Locale resolution.
//!
//! Precedence, each step tried only when the previous one is absent or
//! unrecognized:
//!
//! 1. explicit locale argument
//! 2. environment override (`DISPATCH_FACADE_LOCALE`)
//! 3. product version → default locale table
//! 4. baseline locale
//!
//! Resolution itself is pure; [`LocaleResolver::install`] and [`set_language`]
//! additionally load the catalog and swap it into the process-wide slot.

use std::collections::HashMap;
use std::path::PathBuf;

use serde::Serialize;
use tracing::{info, warn};

use crate::config::Config;
use crate::i18n::{self, Locale, LocaleContext};

/// Built-in product version → default locale table.
pub const DEFAULT_VERSION_LOCALES: &[(&str, &str)] = &[
    ("2023", "enu"),
    ("2024", "enu"),
    ("2025", "enu"),
    ("2026", "enu"),
];

/// Which resolution step produced the locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResolutionSource {
    Argument,
    Environment,
    Version,
    Baseline,
}

/// Outcome of a locale resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LocaleResolution {
    pub locale: Locale,
    pub source: ResolutionSource,
}

#[derive(Debug, Clone)]
pub struct LocaleResolver {
    env_override: Option<Locale>,
    version_locales: HashMap<String, Locale>,
    catalog_dir: Option<PathBuf>,
}

impl Default for LocaleResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl LocaleResolver {
    /// Resolver with the built-in version table, no environment override and
    /// no catalog overlays.
    pub fn new() -> Self {
        let version_locales = DEFAULT_VERSION_LOCALES
            .iter()
            .filter_map(|(version, code)| Some((version.to_string(), Locale::parse(code)?)))
            .collect();
        Self {
            env_override: None,
            version_locales,
            catalog_dir: None,
        }
    }

    /// Resolver seeded from configuration. Configured version pairs extend
    /// (and may override) the built-in table.
    pub fn from_config(config: &Config) -> Self {
        let mut resolver = Self::new().with_env_override(config.locale_override);
        for (version, locale) in &config.version_locales {
            resolver = resolver.with_version_locale(version.clone(), *locale);
        }
        if let Some(dir) = &config.catalog_dir {
            resolver = resolver.with_catalog_dir(dir.clone());
        }
        resolver
    }

    pub fn with_env_override(mut self, locale: Option<Locale>) -> Self {
        self.env_override = locale;
        self
    }

    pub fn with_version_locale(mut self, version: impl Into<String>, locale: Locale) -> Self {
        self.version_locales.insert(version.into(), locale);
        self
    }

    pub fn with_catalog_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.catalog_dir = Some(dir.into());
        self
    }

    /// Default locale for a product version, if the version is known.
    pub fn version_locale(&self, version: &str) -> Option<Locale> {
        self.version_locales.get(version.trim()).copied()
    }

    /// Resolve without touching the process-wide slot.
    pub fn resolve(&self, version: Option<&str>, locale: Option<&str>) -> LocaleResolution {
        if let Some(locale) = locale.and_then(Locale::parse) {
            return LocaleResolution {
                locale,
                source: ResolutionSource::Argument,
            };
        }
        if let Some(locale) = self.env_override {
            return LocaleResolution {
                locale,
                source: ResolutionSource::Environment,
            };
        }
        if let Some(locale) = version.and_then(|v| self.version_locale(v)) {
            return LocaleResolution {
                locale,
                source: ResolutionSource::Version,
            };
        }
        LocaleResolution {
            locale: Locale::BASELINE,
            source: ResolutionSource::Baseline,
        }
    }

    /// Build the catalog for a locale, applying any configured overlay.
    pub fn load(&self, locale: Locale) -> LocaleContext {
        LocaleContext::load(locale, self.catalog_dir.as_deref())
    }

    /// Resolve, load and install process-wide.
    pub fn install(&self, version: Option<&str>, locale: Option<&str>) -> LocaleResolution {
        let resolution = self.resolve(version, locale);
        if let Some(requested) = locale {
            if resolution.source != ResolutionSource::Argument {
                warn!(requested, resolved = resolution.locale.code(), "Unknown locale requested");
            }
        }
        i18n::install(self.load(resolution.locale));
        info!(
            locale = resolution.locale.code(),
            source = ?resolution.source,
            "Locale resolved"
        );
        resolution
    }
}

/// Resolve the locale from the argument, the environment, the product version
/// and the baseline (in that order), then install its catalog process-wide.
///
/// When `version` is `None` the configured `DISPATCH_FACADE_VERSION` is used.
/// Calling again fully replaces the previous installation.
pub fn set_language(version: Option<&str>, locale: Option<&str>) -> LocaleResolution {
    let config = Config::from_env().unwrap_or_else(|e| {
        warn!(error = %e, "Ignoring unreadable configuration");
        Config::default()
    });
    let version = version.or(config.version.as_deref());
    LocaleResolver::from_config(&config).install(version, locale)
}
