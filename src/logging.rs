//! Localized diagnostic logging.
//!
//! Every diagnostic line the facade emits is one of the templates in
//! [`LogMessage`], rendered through the active translator. A process-wide
//! switch turns these lines off without touching the subscriber.

use std::fs::OpenOptions;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing::{debug, error, info, trace, warn, Level};
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::i18n::{self, keys, MessageArg};

static IS_LOGGING: AtomicBool = AtomicBool::new(true);

/// Turn localized diagnostic logging on or off.
pub fn set_is_logging(enabled: bool) {
    IS_LOGGING.store(enabled, Ordering::Relaxed);
}

pub fn is_logging() -> bool {
    IS_LOGGING.load(Ordering::Relaxed)
}

/// Closed set of localized log templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogMessage {
    ClassInit,
    PropertyGet,
    PropertySet,
    FunctionCall,
    HelperCheck,
    ValidInput,
    ValidType,
    CheckRange,
    CheckMin,
    CheckMax,
    CheckMinMax,
    CheckPositive,
    CheckNegative,
    CheckNonNegative,
    CheckNonZero,
    CheckExpectedValues,
    CheckIndex,
    CheckFileExtension,
    ValueNotInEnum,
    InvalidFileExtension,
    LocaleInstalled,
    CatalogLoadFailed,
}

impl LogMessage {
    /// Message keys rendered (and joined with ", ") for this template.
    pub fn keys(self) -> &'static [&'static str] {
        match self {
            LogMessage::ClassInit => &[keys::LOG_CLASS_INIT],
            LogMessage::PropertyGet => &[keys::LOG_PROPERTY_GET],
            LogMessage::PropertySet => &[keys::LOG_PROPERTY_SET],
            LogMessage::FunctionCall => &[keys::LOG_FUNCTION_CALL],
            LogMessage::HelperCheck => &[keys::LOG_HELPER_CHECK],
            LogMessage::ValidInput => &[keys::VALID_INPUT],
            LogMessage::ValidType => &[keys::VALID_TYPE],
            LogMessage::CheckRange => &[keys::LOG_CHECK_RANGE],
            LogMessage::CheckMin => &[keys::LOG_CHECK_MIN],
            LogMessage::CheckMax => &[keys::LOG_CHECK_MAX],
            LogMessage::CheckMinMax => &[keys::LOG_CHECK_MIN_MAX],
            LogMessage::CheckPositive => &[keys::LOG_CHECK_POSITIVE],
            LogMessage::CheckNegative => &[keys::LOG_CHECK_NEGATIVE],
            LogMessage::CheckNonNegative => &[keys::LOG_CHECK_NON_NEGATIVE],
            LogMessage::CheckNonZero => &[keys::LOG_CHECK_NON_ZERO],
            LogMessage::CheckExpectedValues => &[keys::LOG_CHECK_EXPECTED_VALUES],
            LogMessage::CheckIndex => &[keys::LOG_CHECK_INDEX],
            LogMessage::CheckFileExtension => &[keys::LOG_CHECK_FILE_EXTENSION],
            LogMessage::ValueNotInEnum => &[keys::NOT_ENUM_MEMBER, keys::MAY_FAIL],
            LogMessage::InvalidFileExtension => &[keys::EXTENSION_MISMATCH, keys::DEFAULT_APPLIED],
            LogMessage::LocaleInstalled => &[keys::LOG_LOCALE_INSTALLED],
            LogMessage::CatalogLoadFailed => &[keys::LOG_CATALOG_LOAD_FAILED],
        }
    }

    pub fn level(self) -> Level {
        match self {
            LogMessage::ValueNotInEnum
            | LogMessage::InvalidFileExtension
            | LogMessage::CatalogLoadFailed => Level::WARN,
            LogMessage::LocaleInstalled => Level::INFO,
            LogMessage::ValidInput | LogMessage::ValidType => Level::TRACE,
            _ => Level::DEBUG,
        }
    }

    /// Render through the active translator.
    pub fn render(self, args: &[MessageArg]) -> String {
        self.keys()
            .iter()
            .map(|key| i18n::translate(key, args.to_vec()))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Render and emit a localized log message, unless logging is switched off.
pub fn process_log(module: &str, message: LogMessage, args: Vec<MessageArg>) {
    if !is_logging() {
        return;
    }
    log_text(module, message.level(), &message.render(&args));
}

/// Emit already-rendered text, unless logging is switched off.
pub fn log_text(module: &str, level: Level, text: &str) {
    if !is_logging() {
        return;
    }
    if level == Level::ERROR {
        error!(module, "{}", text);
    } else if level == Level::WARN {
        warn!(module, "{}", text);
    } else if level == Level::INFO {
        info!(module, "{}", text);
    } else if level == Level::DEBUG {
        debug!(module, "{}", text);
    } else {
        trace!(module, "{}", text);
    }
}

/// Install the global subscriber.
///
/// Filtering follows `RUST_LOG` with `dispatch_facade=info` added. When a log
/// file is configured, output goes there (appended, no ANSI colours) instead
/// of stderr. Calling this twice is an error.
pub fn init_logging(config: &Config) -> Result<()> {
    set_is_logging(config.logging_enabled);

    let filter =
        EnvFilter::from_default_env().add_directive("dispatch_facade=info".parse()?);
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    match &config.log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
        None => builder.with_writer(std::io::stderr).try_init(),
    }
    .map_err(|e| anyhow::anyhow!(e))
    .context("Failed to initialize logging")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;
    use std::sync::Arc;
    use tracing_subscriber::fmt::MakeWriter;

    #[derive(Clone, Default)]
    struct Capture(Arc<Mutex<Vec<u8>>>);

    impl Capture {
        fn contents(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }
    }

    impl Write for Capture {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for Capture {
        type Writer = Capture;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    fn capture_logs(f: impl FnOnce()) -> String {
        let capture = Capture::default();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(Level::TRACE)
            .with_ansi(false)
            .with_writer(capture.clone())
            .finish();
        tracing::subscriber::with_default(subscriber, f);
        capture.contents()
    }

    // ==================== Template Tests ====================

    #[test]
    #[serial]
    fn test_render_helper_check() {
        i18n::reset();
        let text = LogMessage::HelperCheck.render(&[
            MessageArg::new("value", "3"),
            MessageArg::new("name", "int"),
        ]);
        assert_eq!(text, "Checking 3 is int");
    }

    #[test]
    #[serial]
    fn test_render_composite_warning() {
        i18n::reset();
        let text = LogMessage::ValueNotInEnum.render(&[
            MessageArg::new("value", "9"),
            MessageArg::new("enum_name", "Units"),
        ]);
        assert_eq!(text, "9 is not a member of Units, this may cause function call to fail");
    }

    #[test]
    #[serial]
    fn test_render_localized() {
        i18n::install(i18n::LocaleContext::builtin(i18n::Locale::GERMAN));
        let text = LogMessage::CheckIndex.render(&[MessageArg::new("index", "4")]);
        assert_eq!(text, "Prüfung von Index 4");
        i18n::reset();
    }

    #[test]
    fn test_levels() {
        assert_eq!(LogMessage::ValueNotInEnum.level(), Level::WARN);
        assert_eq!(LogMessage::InvalidFileExtension.level(), Level::WARN);
        assert_eq!(LogMessage::LocaleInstalled.level(), Level::INFO);
        assert_eq!(LogMessage::CheckRange.level(), Level::DEBUG);
    }

    // ==================== Switch Tests ====================

    #[test]
    #[serial]
    fn test_process_log_emits_with_module_field() {
        i18n::reset();
        set_is_logging(true);
        let logs = capture_logs(|| {
            process_log(
                "dispatch_facade::validate",
                LogMessage::CheckIndex,
                vec![MessageArg::new("index", "7")],
            );
        });
        assert!(logs.contains("Checking index 7"));
        assert!(logs.contains("dispatch_facade::validate"));
    }

    #[test]
    #[serial]
    fn test_switch_off_silences_messages() {
        i18n::reset();
        set_is_logging(false);
        let logs = capture_logs(|| {
            process_log("test", LogMessage::CheckIndex, vec![MessageArg::new("index", "7")]);
            log_text("test", Level::WARN, "should not appear");
        });
        set_is_logging(true);
        assert!(logs.is_empty());
    }

    #[test]
    #[serial]
    fn test_log_text_levels() {
        set_is_logging(true);
        let logs = capture_logs(|| {
            log_text("test", Level::WARN, "careful");
            log_text("test", Level::ERROR, "broken");
        });
        assert!(logs.contains("WARN"));
        assert!(logs.contains("careful"));
        assert!(logs.contains("ERROR"));
    }
}
