use std::env::VarError;
use std::path::PathBuf;

use anyhow::{bail, Result};

use crate::i18n::Locale;

pub const LOCALE_VAR: &str = "DISPATCH_FACADE_LOCALE";
pub const VERSION_VAR: &str = "DISPATCH_FACADE_VERSION";
pub const VERSION_LOCALES_VAR: &str = "DISPATCH_FACADE_VERSION_LOCALES";
pub const LOCALE_DIR_VAR: &str = "DISPATCH_FACADE_LOCALE_DIR";
pub const LOG_VAR: &str = "DISPATCH_FACADE_LOG";
pub const LOG_FILE_VAR: &str = "DISPATCH_FACADE_LOG_FILE";

/// Log file used when `DISPATCH_FACADE_LOG_FILE` is a bare switch.
pub const DEFAULT_LOG_FILE: &str = "dispatch_facade.log";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    // Locale
    pub locale_override: Option<Locale>,
    pub version: Option<String>,
    pub version_locales: Vec<(String, Locale)>,
    pub catalog_dir: Option<PathBuf>,

    // Logging
    pub logging_enabled: bool,
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale_override: None,
            version: None,
            version_locales: Vec::new(),
            catalog_dir: None,
            logging_enabled: true,
            log_file: None,
        }
    }
}

impl Config {
    /// Read the configuration from the process environment.
    ///
    /// Unrecognized values are treated as unset. The only error is a variable
    /// that is present but not valid unicode.
    pub fn from_env() -> Result<Self> {
        for name in [
            LOCALE_VAR,
            VERSION_VAR,
            VERSION_LOCALES_VAR,
            LOCALE_DIR_VAR,
            LOG_VAR,
            LOG_FILE_VAR,
        ] {
            if let Err(VarError::NotUnicode(_)) = std::env::var(name) {
                bail!("{name} is not valid unicode");
            }
        }
        Ok(Self::from_lookup(|name| std::env::var(name).ok()))
    }

    /// Build the configuration from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |name: &str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        Self {
            // Locale
            locale_override: non_empty(LOCALE_VAR).and_then(|v| Locale::parse(&v)),
            version: non_empty(VERSION_VAR),
            version_locales: non_empty(VERSION_LOCALES_VAR)
                .map(|v| parse_version_locales(&v))
                .unwrap_or_default(),
            catalog_dir: non_empty(LOCALE_DIR_VAR).map(PathBuf::from),

            // Logging
            logging_enabled: non_empty(LOG_VAR)
                .and_then(|v| parse_switch(&v))
                .unwrap_or(true),
            log_file: non_empty(LOG_FILE_VAR).and_then(|v| match parse_switch(&v) {
                Some(true) => Some(PathBuf::from(DEFAULT_LOG_FILE)),
                Some(false) => None,
                None => Some(PathBuf::from(v)),
            }),
        }
    }
}

/// Parse `1/true/yes/on` and `0/false/no/off`.
pub fn parse_switch(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Parse `2025=deu;2026=enu` pairs, skipping malformed entries.
fn parse_version_locales(value: &str) -> Vec<(String, Locale)> {
    value
        .split([';', ','])
        .filter_map(|pair| {
            let (version, code) = pair.split_once('=')?;
            let version = version.trim();
            if version.is_empty() {
                return None;
            }
            Some((version.to_string(), Locale::parse(code)?))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_defaults_when_nothing_set() {
        let config = Config::from_lookup(|_| None);
        assert_eq!(config, Config::default());
        assert!(config.logging_enabled);
        assert!(config.log_file.is_none());
    }

    #[test]
    fn test_reads_all_values() {
        let config = Config::from_lookup(lookup_from(&[
            (LOCALE_VAR, "fra"),
            (VERSION_VAR, "2026"),
            (VERSION_LOCALES_VAR, "2025=deu;2027=ja-JP"),
            (LOCALE_DIR_VAR, "/opt/catalogs"),
            (LOG_VAR, "off"),
            (LOG_FILE_VAR, "/tmp/facade.log"),
        ]));

        assert_eq!(config.locale_override, Some(Locale::FRENCH));
        assert_eq!(config.version.as_deref(), Some("2026"));
        assert_eq!(
            config.version_locales,
            vec![
                ("2025".to_string(), Locale::GERMAN),
                ("2027".to_string(), Locale::JAPANESE)
            ]
        );
        assert_eq!(config.catalog_dir, Some(PathBuf::from("/opt/catalogs")));
        assert!(!config.logging_enabled);
        assert_eq!(config.log_file, Some(PathBuf::from("/tmp/facade.log")));
    }

    #[test]
    fn test_unrecognized_values_are_unset() {
        let config = Config::from_lookup(lookup_from(&[
            (LOCALE_VAR, "Test"),
            (VERSION_VAR, "   "),
            (VERSION_LOCALES_VAR, "nonsense;=deu;2024=xyz"),
            (LOG_VAR, "maybe"),
        ]));

        assert_eq!(config.locale_override, None);
        assert_eq!(config.version, None);
        assert!(config.version_locales.is_empty());
        assert!(config.logging_enabled);
    }

    #[test]
    fn test_log_file_switch_selects_default_name() {
        let config = Config::from_lookup(lookup_from(&[(LOG_FILE_VAR, "true")]));
        assert_eq!(config.log_file, Some(PathBuf::from(DEFAULT_LOG_FILE)));

        let config = Config::from_lookup(lookup_from(&[(LOG_FILE_VAR, "0")]));
        assert_eq!(config.log_file, None);
    }

    #[test]
    fn test_parse_switch() {
        assert_eq!(parse_switch("YES"), Some(true));
        assert_eq!(parse_switch(" off "), Some(false));
        assert_eq!(parse_switch("2"), None);
    }

    #[test]
    #[serial]
    fn test_from_env_reads_process_environment() {
        std::env::set_var(LOCALE_VAR, "kor");
        std::env::set_var(VERSION_VAR, "2024");

        let config = Config::from_env().expect("Should read environment");
        assert_eq!(config.locale_override, Some(Locale::KOREAN));
        assert_eq!(config.version.as_deref(), Some("2024"));

        std::env::remove_var(LOCALE_VAR);
        std::env::remove_var(VERSION_VAR);
    }
}
