//! Catalog quality validation module.
//!
//! This module checks that a catalog translates every known key and that each
//! translation keeps exactly the `{placeholders}` of its source template.

use regex::Regex;
use serde::Serialize;
use std::collections::BTreeSet;
use std::sync::LazyLock;

use crate::i18n::{keys, Locale, LocaleContext};

/// Validation report containing errors and warnings about a catalog.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ValidationReport {
    /// Critical errors that indicate broken translations
    pub errors: Vec<String>,

    /// Non-critical warnings about potential issues
    pub warnings: Vec<String>,
}

impl ValidationReport {
    /// Create a new empty validation report
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if the report has any errors
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Check if the report has any warnings
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Check if the report is clean (no errors or warnings)
    pub fn is_clean(&self) -> bool {
        !self.has_errors() && !self.has_warnings()
    }
}

/// Validator for catalog completeness and placeholder integrity.
pub struct CatalogValidator;

// Constant pattern, exercised by the placeholder tests below
static PLACEHOLDER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{([a-z_]+)\}").expect("placeholder pattern is valid"));

impl CatalogValidator {
    /// Validate a locale's built-in catalog.
    pub fn validate(locale: Locale) -> ValidationReport {
        Self::validate_context(&LocaleContext::builtin(locale))
    }

    /// Validate a compiled catalog (built-in plus any overlay).
    ///
    /// Errors:
    /// - a translation drops or invents a placeholder
    ///
    /// Warnings:
    /// - a known key has no translation (it will render in English)
    /// - an entry's key is not a known message key
    pub fn validate_context(context: &LocaleContext) -> ValidationReport {
        let mut report = ValidationReport::new();
        let locale = context.locale();

        for key in keys::ALL {
            match context.lookup(key) {
                Some(translated) => {
                    let expected = Self::extract_placeholders(key);
                    let found = Self::extract_placeholders(translated);
                    if expected != found {
                        report.errors.push(format!(
                            "[{}] placeholder mismatch for {:?}: expected {:?}, found {:?}",
                            locale.code(),
                            key,
                            expected,
                            found
                        ));
                    }
                }
                // The canonical locale renders keys directly
                None if locale.is_canonical() => {}
                None => report
                    .warnings
                    .push(format!("[{}] missing translation for {:?}", locale.code(), key)),
            }
        }

        let mut orphaned: Vec<&str> = context
            .entries()
            .map(|(key, _)| key)
            .filter(|key| !keys::ALL.contains(key))
            .collect();
        orphaned.sort_unstable();
        for key in orphaned {
            report
                .warnings
                .push(format!("[{}] unknown key {:?}", locale.code(), key));
        }

        report
    }

    /// Validate every built-in catalog.
    pub fn validate_all() -> Vec<(Locale, ValidationReport)> {
        Locale::all()
            .into_iter()
            .map(|locale| (locale, Self::validate(locale)))
            .collect()
    }

    /// Extract the set of `{placeholder}` names from a template
    fn extract_placeholders(text: &str) -> BTreeSet<String> {
        PLACEHOLDER_REGEX
            .captures_iter(text)
            .filter_map(|cap| cap.get(1).map(|m| m.as_str().to_string()))
            .collect()
    }
}
