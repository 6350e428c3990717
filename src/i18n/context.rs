//! Locale context: the compiled catalog for one locale.
//!
//! A `LocaleContext` is the explicit, injectable form of "the active
//! language". It can be built and used directly, or installed process-wide
//! through [`crate::i18n::install`].

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::i18n::{keys, Locale, LocaleRegistry, TranslationMetrics};
use crate::logging::{log_text, LogMessage};

/// Failure to read a catalog overlay file.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse catalog {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Compiled key→string catalog for a single locale.
#[derive(Debug, Clone)]
pub struct LocaleContext {
    locale: Locale,
    entries: HashMap<String, String>,
}

impl LocaleContext {
    /// Build a context from the locale's built-in catalog.
    pub fn builtin(locale: Locale) -> Self {
        let entries = LocaleRegistry::get()
            .catalog(locale.code())
            .map(|catalog| {
                catalog
                    .iter()
                    .map(|(key, value)| ((*key).to_string(), (*value).to_string()))
                    .collect()
            })
            .unwrap_or_default();
        Self { locale, entries }
    }

    /// Build a context from the built-in catalog plus an optional overlay.
    ///
    /// The overlay is `<dir>/<tag>.json`, a flat JSON object of key→string.
    /// A missing file is silent; an unreadable or malformed file is logged
    /// and ignored so that loading never fails.
    pub fn load(locale: Locale, catalog_dir: Option<&Path>) -> Self {
        let mut context = Self::builtin(locale);
        let Some(dir) = catalog_dir else {
            return context;
        };

        let path = dir.join(format!("{}.json", locale.tag()));
        if !path.is_file() {
            return context;
        }

        match read_overlay(&path) {
            Ok(overlay) => context.entries.extend(overlay),
            Err(e) => {
                // The translator is not necessarily installed yet, so render
                // through this context directly.
                let message = context
                    .format(keys::LOG_CATALOG_LOAD_FAILED)
                    .replace("{path}", &path.display().to_string())
                    .replace("{error}", &e.to_string());
                log_text(module_path!(), LogMessage::CatalogLoadFailed.level(), &message);
            }
        }
        context
    }

    /// Build a context from explicit entries (useful for hosts and tests).
    pub fn from_entries<K, V>(locale: Locale, entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            locale,
            entries: entries
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }

    /// The locale this catalog renders.
    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Look up a key without falling back.
    pub fn lookup(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Translate a key; a miss renders the key itself.
    pub fn translate<'a>(&'a self, key: &'a str) -> &'a str {
        let metrics = TranslationMetrics::global();
        match self.lookup(key) {
            Some(value) => {
                metrics.record_hit();
                value
            }
            None if self.locale.is_canonical() => {
                metrics.record_hit();
                key
            }
            None => {
                metrics.record_miss();
                key
            }
        }
    }

    fn format(&self, key: &str) -> String {
        self.lookup(key).unwrap_or(key).to_string()
    }

    /// Number of entries in the compiled catalog.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the catalog has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over the compiled entries.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }
}

/// Read a flat JSON object of key→string.
pub fn read_overlay(path: &Path) -> Result<HashMap<String, String>, CatalogError> {
    let raw = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| CatalogError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
