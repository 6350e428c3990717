//! Process-wide translator slot.
//!
//! The active [`LocaleContext`] lives behind a single `RwLock<Option<Arc<_>>>`.
//! Installing swaps the `Arc` under the write lock, so readers observe either
//! the previous catalog or the new one, never a partial one. Before anything
//! is installed, lookups go to the host translator (if one is registered) and
//! then to identity.

use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};

use crate::i18n::{Locale, LocaleContext, TranslationMetrics};
use crate::logging::{process_log, LogMessage};

/// Translation function registered by an embedding host.
pub type TranslateFn = Arc<dyn Fn(&str) -> String + Send + Sync>;

static ACTIVE: RwLock<Option<Arc<LocaleContext>>> = RwLock::new(None);
static HOST: RwLock<Option<TranslateFn>> = RwLock::new(None);

/// The translator that currently renders messages.
#[derive(Clone)]
pub enum Translator {
    /// An installed catalog.
    Catalog(Arc<LocaleContext>),
    /// A translator registered by the host, used while no catalog is installed.
    Host(TranslateFn),
    /// Renders every key unchanged.
    Identity,
}

impl Translator {
    /// Translate a key.
    pub fn translate(&self, key: &str) -> String {
        match self {
            Translator::Catalog(context) => context.translate(key).to_string(),
            Translator::Host(translate) => translate(key),
            Translator::Identity => key.to_string(),
        }
    }

    /// Locale of the installed catalog, if any.
    pub fn locale(&self) -> Option<Locale> {
        match self {
            Translator::Catalog(context) => Some(context.locale()),
            Translator::Host(_) | Translator::Identity => None,
        }
    }
}

impl fmt::Debug for Translator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Translator::Catalog(context) => f.debug_tuple("Catalog").field(&context.locale()).finish(),
            Translator::Host(_) => f.write_str("Host"),
            Translator::Identity => f.write_str("Identity"),
        }
    }
}

/// Install a catalog process-wide, replacing whatever was active.
pub fn install(context: LocaleContext) -> Arc<LocaleContext> {
    let context = Arc::new(context);
    {
        let mut slot = ACTIVE.write().unwrap_or_else(PoisonError::into_inner);
        *slot = Some(Arc::clone(&context));
    }
    TranslationMetrics::global().record_install();
    process_log(
        module_path!(),
        LogMessage::LocaleInstalled,
        vec![MessageArg::new("locale", context.locale().to_string())],
    );
    context
}

/// Clear the slot back to "nothing installed".
pub fn reset() {
    let mut slot = ACTIVE.write().unwrap_or_else(PoisonError::into_inner);
    *slot = None;
}

/// The installed catalog, if any.
pub fn active() -> Option<Arc<LocaleContext>> {
    ACTIVE
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}

/// Locale of the installed catalog, or the baseline when nothing is installed.
pub fn active_locale() -> Locale {
    active()
        .map(|context| context.locale())
        .unwrap_or(Locale::BASELINE)
}

/// Return the translator in effect right now.
///
/// Order: installed catalog, then host translator, then identity.
pub fn get_text() -> Translator {
    if let Some(context) = active() {
        return Translator::Catalog(context);
    }
    let host = HOST.read().unwrap_or_else(PoisonError::into_inner).clone();
    match host {
        Some(translate) => Translator::Host(translate),
        None => Translator::Identity,
    }
}

/// Register the host's own translator as the secondary fallback.
pub fn set_host_translator<F>(translate: F)
where
    F: Fn(&str) -> String + Send + Sync + 'static,
{
    let mut slot = HOST.write().unwrap_or_else(PoisonError::into_inner);
    *slot = Some(Arc::new(translate));
}

pub fn clear_host_translator() {
    let mut slot = HOST.write().unwrap_or_else(PoisonError::into_inner);
    *slot = None;
}

/// A named placeholder value for a message template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageArg {
    /// Placeholder name without braces (e.g., `file_name`).
    pub key: &'static str,
    /// Preformatted value.
    pub value: String,
}

impl MessageArg {
    pub fn new(key: &'static str, value: impl Into<String>) -> Self {
        Self {
            key,
            value: value.into(),
        }
    }
}

/// Substitute `{placeholder}` positions in a template.
///
/// The template is scanned once, left to right; inserted values are never
/// rescanned. Placeholders without a matching argument are left in place.
pub fn format_template(template: &str, args: &[MessageArg]) -> String {
    let mut result = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        result.push_str(&rest[..open]);
        let tail = &rest[open..];
        let Some(close) = tail.find('}') else {
            result.push_str(tail);
            return result;
        };
        let name = &tail[1..close];
        if name.contains('{') {
            result.push('{');
            rest = &tail[1..];
            continue;
        }
        match args.iter().find(|arg| arg.key == name) {
            Some(arg) => result.push_str(&arg.value),
            None => result.push_str(&tail[..=close]),
        }
        rest = &tail[close + 1..];
    }
    result.push_str(rest);
    result
}

/// Translate a key through the active translator and fill its placeholders.
pub fn translate(key: &str, args: Vec<MessageArg>) -> String {
    let template = get_text().translate(key);
    if args.is_empty() {
        return template;
    }
    format_template(&template, &args)
}

/// Formats a localized message from a key and named arguments.
///
/// ```rust,ignore
/// let message = t!(keys::LESS_THAN, value = 12, max_value = 10);
/// ```
#[macro_export]
macro_rules! t {
    ($key:expr $(, $name:ident = $value:expr )* $(,)?) => {{
        let args = ::std::vec![
            $(
                $crate::i18n::MessageArg::new(stringify!($name), $value.to_string()),
            )*
        ];
        $crate::i18n::translate($key, args)
    }};
}
