//! Internationalization (i18n) module for localized messages.
//!
//! All user-visible text produced by the facade (error messages, soft-failure
//! warnings, diagnostic log lines) is rendered through this module.
//!
//! # Architecture
//!
//! - `registry`: Single source of truth for all supported locales and their metadata
//! - `locale`: Validated `Locale` type
//! - `keys` / `catalogs`: Message keys and the built-in per-locale catalogs
//! - `context`: `LocaleContext`, the compiled catalog for one locale
//! - `translator`: Process-wide translator slot, `get_text` and the `t!` macro
//! - `resolver`: Locale resolution precedence and `set_language`
//! - `validator`: Catalog completeness and placeholder validation
//! - `metrics`: Lookup and installation counters
//!
//! # Example
//!
//! ```rust,ignore
//! use dispatch_facade::i18n::{self, keys};
//!
//! i18n::set_language(Some("2026"), Some("deu"));
//! assert_eq!(dispatch_facade::t!(keys::INVALID), "Ungültig");
//! ```

mod catalogs;
mod context;
pub mod keys;
mod locale;
mod metrics;
mod registry;
mod resolver;
mod translator;
mod validator;

pub use context::{read_overlay, CatalogError, LocaleContext};
pub use locale::Locale;
pub use metrics::{MetricsReport, TranslationMetrics};
pub use registry::{LocaleConfig, LocaleRegistry};
pub use resolver::{
    set_language, LocaleResolution, LocaleResolver, ResolutionSource, DEFAULT_VERSION_LOCALES,
};
pub use translator::{
    active, active_locale, clear_host_translator, format_template, get_text, install, reset,
    set_host_translator, translate, MessageArg, TranslateFn, Translator,
};
pub use validator::{CatalogValidator, ValidationReport};
