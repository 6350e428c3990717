//! Parameter checks and coercion into the external call convention.
//!
//! Every check is fail-fast: it returns `Err` before anything is forwarded to
//! the external object. The exception is [`check_file_extension`], which by
//! default amends the file name and logs a warning instead.

use std::fmt::Display;

use serde::Serialize;

use crate::error::{self, Result, ValueErrorReason};
use crate::i18n::MessageArg;
use crate::logging::{log_text, process_log, LogMessage};
use crate::proxy::{SafeProxy, Wrapped};
use crate::value::{self, Number, Value, ValueType, Variant};

/// What a check does with a violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Fail with an error.
    Reject,
    /// Log a warning and continue with a best-effort value.
    Warn,
}

/// Result of a check that may amend its input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Checked<T> {
    Accepted(T),
    Amended { value: T, warning: String },
}

impl<T> Checked<T> {
    pub fn value(&self) -> &T {
        match self {
            Checked::Accepted(value) | Checked::Amended { value, .. } => value,
        }
    }

    pub fn into_value(self) -> T {
        match self {
            Checked::Accepted(value) | Checked::Amended { value, .. } => value,
        }
    }

    pub fn is_amended(&self) -> bool {
        matches!(self, Checked::Amended { .. })
    }

    pub fn warning(&self) -> Option<&str> {
        match self {
            Checked::Accepted(_) => None,
            Checked::Amended { warning, .. } => Some(warning),
        }
    }
}

fn arg(key: &'static str, value: impl Display) -> MessageArg {
    MessageArg::new(key, value.to_string())
}

fn valid_input() {
    process_log(module_path!(), LogMessage::ValidInput, Vec::new());
}

fn join<T: Display>(items: &[T]) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

// ==================== Type Checks ====================

/// Fail with `TypeMismatch` unless `value` has one of the `allowed` types.
///
/// A bool never satisfies `Int` or `Float`.
pub fn check_type(value: &Value, allowed: &[ValueType]) -> Result<()> {
    process_log(
        module_path!(),
        LogMessage::HelperCheck,
        vec![arg("value", value), arg("name", join(allowed))],
    );
    value::expect_type(value, allowed)?;
    process_log(module_path!(), LogMessage::ValidType, Vec::new());
    Ok(())
}

/// Like [`check_type`], but `Null` is always accepted.
pub fn check_optional_type(value: &Value, allowed: &[ValueType]) -> Result<()> {
    if value.is_null() {
        process_log(module_path!(), LogMessage::ValidType, Vec::new());
        return Ok(());
    }
    check_type(value, allowed)
}

// ==================== Numeric Checks ====================

fn within_min(value: Number, min: Number, inclusive: bool) -> bool {
    value > min || (inclusive && value == min)
}

fn within_max(value: Number, max: Number, inclusive: bool) -> bool {
    value < max || (inclusive && value == max)
}

/// Check `value` against optional lower and upper bounds.
///
/// Each bound is inclusive or exclusive on its own. With both bounds given,
/// any violation reports the whole range; with one bound, the message names
/// that bound and whether it was inclusive. With no bounds at all the value
/// is accepted without a type check.
pub fn check_range(
    value: impl Into<Value>,
    min: Option<Number>,
    max: Option<Number>,
    min_inclusive: bool,
    max_inclusive: bool,
) -> Result<()> {
    if min.is_none() && max.is_none() {
        valid_input();
        return Ok(());
    }
    let value = value::expect_number(&value.into())?;

    let min_ok = min.map_or(true, |min| within_min(value, min, min_inclusive));
    let max_ok = max.map_or(true, |max| within_max(value, max, max_inclusive));

    match (min, max) {
        (Some(min), Some(max)) => {
            process_log(
                module_path!(),
                LogMessage::CheckRange,
                vec![arg("value", value), arg("min_value", min), arg("max_value", max)],
            );
            if !(min_ok && max_ok) {
                return error::raise_value_error(
                    ValueErrorReason::NotInRange,
                    vec![arg("value", value), arg("min_value", min), arg("max_value", max)],
                );
            }
        }
        (Some(min), None) => {
            process_log(
                module_path!(),
                LogMessage::CheckMin,
                vec![arg("value", value), arg("min_value", min)],
            );
            if !min_ok {
                let reason = if min_inclusive {
                    ValueErrorReason::GreaterThanOrEqual
                } else {
                    ValueErrorReason::GreaterThan
                };
                return error::raise_value_error(
                    reason,
                    vec![arg("value", value), arg("min_value", min)],
                );
            }
        }
        (None, Some(max)) => {
            process_log(
                module_path!(),
                LogMessage::CheckMax,
                vec![arg("value", value), arg("max_value", max)],
            );
            if !max_ok {
                let reason = if max_inclusive {
                    ValueErrorReason::LessThanOrEqual
                } else {
                    ValueErrorReason::LessThan
                };
                return error::raise_value_error(
                    reason,
                    vec![arg("value", value), arg("max_value", max)],
                );
            }
        }
        (None, None) => {}
    }

    valid_input();
    Ok(())
}

/// Check an index against `[min, max)`.
pub fn check_index(index: i64, min: i64, max: i64) -> Result<()> {
    process_log(module_path!(), LogMessage::CheckIndex, vec![arg("index", index)]);
    if index < min || index >= max {
        return error::raise_index_error();
    }
    valid_input();
    Ok(())
}

fn check_sign(
    value: Value,
    message: LogMessage,
    reason: ValueErrorReason,
    accept: fn(std::cmp::Ordering) -> bool,
) -> Result<()> {
    let number = value::expect_number(&value)?;
    process_log(module_path!(), message, vec![arg("value", number)]);
    // NaN has no sign and fails every sign check
    if !number.sign().is_some_and(accept) {
        return error::raise_value_error(reason, vec![arg("value", number)]);
    }
    valid_input();
    Ok(())
}

/// Check that `value` is strictly greater than zero.
pub fn check_is_positive(value: impl Into<Value>) -> Result<()> {
    check_sign(
        value.into(),
        LogMessage::CheckPositive,
        ValueErrorReason::Positive,
        std::cmp::Ordering::is_gt,
    )
}

/// Check that `value` is strictly less than zero.
pub fn check_is_negative(value: impl Into<Value>) -> Result<()> {
    check_sign(
        value.into(),
        LogMessage::CheckNegative,
        ValueErrorReason::Negative,
        std::cmp::Ordering::is_lt,
    )
}

pub fn check_is_non_negative(value: impl Into<Value>) -> Result<()> {
    check_sign(
        value.into(),
        LogMessage::CheckNonNegative,
        ValueErrorReason::NonNegative,
        std::cmp::Ordering::is_ge,
    )
}

pub fn check_is_non_zero(value: impl Into<Value>) -> Result<()> {
    check_sign(
        value.into(),
        LogMessage::CheckNonZero,
        ValueErrorReason::NonZero,
        std::cmp::Ordering::is_ne,
    )
}

/// Check that a numeric `value` is one of `expected`.
pub fn check_expected_values(value: impl Into<Value>, expected: &[Number]) -> Result<()> {
    let value = value::expect_number(&value.into())?;
    process_log(
        module_path!(),
        LogMessage::CheckExpectedValues,
        vec![arg("value", value)],
    );
    if !expected.iter().any(|candidate| *candidate == value) {
        return error::raise_value_error(
            ValueErrorReason::InvalidValue,
            vec![arg("value", value), arg("expected_values", join(expected))],
        );
    }
    valid_input();
    Ok(())
}

/// Check that a caller-supplied minimum does not exceed its maximum.
pub fn check_min_max(min: impl Into<Value>, max: impl Into<Value>) -> Result<()> {
    let min = value::expect_number(&min.into())?;
    let max = value::expect_number(&max.into())?;
    process_log(
        module_path!(),
        LogMessage::CheckMinMax,
        vec![arg("min_value", min), arg("max_value", max)],
    );
    if min > max {
        return error::raise_value_error(
            ValueErrorReason::MinMoreThanMax,
            vec![arg("min_value", min), arg("max_value", max)],
        );
    }
    valid_input();
    Ok(())
}

// ==================== File Names ====================

/// Check a file name's extension, amending it on mismatch.
///
/// Matching is case-insensitive. On mismatch the first allowed extension is
/// appended and a warning is logged; the warning text is also returned in
/// [`Checked::Amended`].
pub fn check_file_extension(file_name: &str, extensions: &[&str]) -> Result<Checked<String>> {
    check_file_extension_with(file_name, extensions, Severity::Warn)
}

/// [`check_file_extension`] with an explicit severity.
///
/// An empty `extensions` list always fails with `ValueOutOfRange`. The
/// file's parent directory is not created; callers that save must do that.
pub fn check_file_extension_with(
    file_name: &str,
    extensions: &[&str],
    severity: Severity,
) -> Result<Checked<String>> {
    process_log(
        module_path!(),
        LogMessage::CheckFileExtension,
        vec![arg("file_name", file_name)],
    );

    let Some(default) = extensions.first() else {
        return error::raise_value_error(
            ValueErrorReason::NoExtensions,
            vec![arg("file_name", file_name)],
        );
    };

    let lowered = file_name.to_lowercase();
    if extensions
        .iter()
        .any(|extension| lowered.ends_with(&extension.to_lowercase()))
    {
        valid_input();
        return Ok(Checked::Accepted(file_name.to_string()));
    }

    match severity {
        Severity::Reject => error::raise_value_error(
            ValueErrorReason::UnsupportedExtension,
            vec![arg("file_name", file_name), arg("extensions", extensions.join(", "))],
        ),
        Severity::Warn => {
            let warning = LogMessage::InvalidFileExtension
                .render(&[arg("file_name", file_name), arg("default", default)]);
            log_text(module_path!(), LogMessage::InvalidFileExtension.level(), &warning);
            Ok(Checked::Amended {
                value: format!("{file_name}{default}"),
                warning,
            })
        }
    }
}

// ==================== Coercion ====================

/// Check an optional argument and convert it for the external call.
///
/// `Null` becomes [`Variant::NullDispatch`], wrapped objects are unwrapped to
/// their raw reference and primitives pass through. Anything not of
/// `expected` fails with `TypeMismatch`.
pub fn check_and_coerce_optional(value: &Value, expected: ValueType) -> Result<Variant> {
    check_optional_type(value, &[expected])?;
    if value.is_null() {
        return Ok(Variant::NullDispatch);
    }
    value.to_variant()
}

/// Coerce an optional typed wrapper into the external call convention.
pub fn coerce_optional<W: Wrapped>(value: Option<&W>) -> Result<Variant> {
    match value {
        None => Ok(Variant::NullDispatch),
        Some(wrapper) => check_and_coerce_optional(
            &Value::Object(wrapper.proxy().clone()),
            ValueType::Interface(W::INTERFACE),
        ),
    }
}

/// Read an external array object (`Size` property, `Val(i)` method) into a
/// list.
pub fn array_to_list(array: &SafeProxy) -> Result<Vec<Value>> {
    let size = match array.get("Size")? {
        Value::Int(size) => size,
        other => return error::raise_type_error(&other, &[ValueType::Int]),
    };
    (0..size)
        .map(|index| array.invoke("Val", &[Value::Int(index)]))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::i18n::{self, Locale, LocaleContext};
    use proptest::prelude::*;
    use serial_test::serial;

    // ==================== Type Tests ====================

    #[test]
    fn test_check_type_accepts_allowed() {
        assert!(check_type(&Value::Int(3), ValueType::NUMERIC).is_ok());
        assert!(check_type(&Value::Float(0.5), ValueType::NUMERIC).is_ok());
        assert!(check_type(&Value::from("a"), &[ValueType::Str]).is_ok());
    }

    #[test]
    #[serial]
    fn test_bool_never_satisfies_numeric() {
        i18n::reset();
        let err = check_type(&Value::Bool(true), ValueType::NUMERIC).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::TypeMismatch);
        assert_eq!(err.to_string(), "Invalid: Expected one of int, float, found bool");

        assert!(check_range(true, Some(Number::Int(0)), None, true, false).is_err());
        assert!(check_is_positive(true).is_err());
        assert!(check_is_non_zero(false).is_err());
    }

    #[test]
    fn test_check_optional_type_accepts_null() {
        assert!(check_optional_type(&Value::Null, &[ValueType::Int]).is_ok());
        assert!(check_optional_type(&Value::Int(1), &[ValueType::Int]).is_ok());
        assert!(check_optional_type(&Value::Float(1.0), &[ValueType::Int]).is_err());
        assert!(check_type(&Value::Null, &[ValueType::Int]).is_err());
    }

    // ==================== Range Tests ====================

    #[test]
    fn test_check_range_inclusive_flags_are_independent() {
        let min = Some(Number::Int(0));
        let max = Some(Number::Int(10));
        assert!(check_range(0, min, max, true, false).is_ok());
        assert!(check_range(0, min, max, false, true).is_err());
        assert!(check_range(10, min, max, false, true).is_ok());
        assert!(check_range(10, min, max, true, false).is_err());
        assert!(check_range(5.5, min, max, false, false).is_ok());
    }

    #[test]
    fn test_check_range_unbounded() {
        assert!(check_range(-1e300, None, None, false, false).is_ok());
        assert!(check_range(i64::MAX, Some(Number::Int(0)), None, false, false).is_ok());
        assert!(check_range(i64::MIN, None, Some(Number::Int(0)), false, false).is_ok());
    }

    #[test]
    fn test_check_range_without_bounds_skips_type_check() {
        assert!(check_range("abc", None, None, false, false).is_ok());
        assert!(check_range(true, None, None, true, true).is_ok());
        assert_eq!(
            check_range("abc", None, Some(Number::Int(1)), false, false).unwrap_err().kind(),
            ErrorKind::TypeMismatch
        );
    }

    #[test]
    #[serial]
    fn test_check_range_messages() {
        i18n::reset();
        let err = check_range(12, Some(Number::Int(0)), Some(Number::Int(10)), true, true).unwrap_err();
        assert_eq!(err.to_string(), "Invalid: 12 is not within the range 0 to 10");

        let err = check_range(0, Some(Number::Int(0)), None, false, false).unwrap_err();
        assert_eq!(err.to_string(), "Invalid: 0 must be greater than 0");

        let err = check_range(-1, Some(Number::Int(0)), None, true, false).unwrap_err();
        assert_eq!(err.to_string(), "Invalid: -1 must be greater than or equal to 0");

        let err = check_range(2.5, None, Some(Number::Float(2.0)), false, true).unwrap_err();
        assert_eq!(err.to_string(), "Invalid: 2.5 must be less than or equal to 2.0");
        assert_eq!(err.kind(), ErrorKind::ValueOutOfRange);
    }

    proptest! {
        #[test]
        fn prop_range_inside_passes(a in -1000i64..1000, span in 0i64..1000, offset in 0i64..1000) {
            let b = a + span;
            let value = a + offset % (span + 1);
            prop_assert!(check_range(value, Some(Number::Int(a)), Some(Number::Int(b)), true, true).is_ok());
        }

        #[test]
        fn prop_range_below_min_fails(a in -1000i64..1000, below in 1i64..1000, span in 0i64..1000) {
            let result = check_range(a - below, Some(Number::Int(a)), Some(Number::Int(a + span)), true, true);
            prop_assert_eq!(result.unwrap_err().kind(), ErrorKind::ValueOutOfRange);
        }

        #[test]
        fn prop_range_above_max_fails(b in -1000i64..1000, above in 1i64..1000) {
            let result = check_range(b + above, None, Some(Number::Int(b)), false, true);
            prop_assert!(result.is_err());
        }

        #[test]
        fn prop_sign_checks_agree_with_comparison(x in -1.0e6f64..1.0e6) {
            prop_assert_eq!(check_is_positive(x).is_ok(), x > 0.0);
            prop_assert_eq!(check_is_negative(x).is_ok(), x < 0.0);
            prop_assert_eq!(check_is_non_negative(x).is_ok(), x >= 0.0);
            prop_assert_eq!(check_is_non_zero(x).is_ok(), x != 0.0);
        }
    }

    // ==================== Sign Tests ====================

    #[test]
    fn test_sign_checks_on_zero() {
        assert!(check_is_positive(0).is_err());
        assert!(check_is_negative(0).is_err());
        assert!(check_is_non_negative(0).is_ok());
        assert!(check_is_non_zero(0).is_err());
        assert!(check_is_non_zero(-0.0).is_err());
    }

    #[test]
    fn test_sign_checks_reject_nan() {
        for result in [
            check_is_positive(f64::NAN),
            check_is_negative(f64::NAN),
            check_is_non_negative(f64::NAN),
            check_is_non_zero(f64::NAN),
        ] {
            assert_eq!(result.unwrap_err().kind(), ErrorKind::ValueOutOfRange);
        }
    }

    #[test]
    fn test_sign_checks_reject_strings() {
        let err = check_is_positive("5").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::TypeMismatch);
    }

    // ==================== Index Tests ====================

    #[test]
    fn test_check_index_half_open() {
        assert!(check_index(0, 0, 3).is_ok());
        assert!(check_index(2, 0, 3).is_ok());
        assert_eq!(check_index(3, 0, 3).unwrap_err().kind(), ErrorKind::IndexOutOfRange);
        assert_eq!(check_index(-1, 0, 3).unwrap_err().kind(), ErrorKind::IndexOutOfRange);
        assert!(check_index(0, 0, 0).is_err());
    }

    // ==================== Expected Values / Min-Max Tests ====================

    #[test]
    #[serial]
    fn test_check_expected_values() {
        i18n::reset();
        let expected = [Number::Int(1), Number::Int(2), Number::Int(4)];
        assert!(check_expected_values(2, &expected).is_ok());
        assert!(check_expected_values(4.0, &expected).is_ok());

        let err = check_expected_values(3, &expected).unwrap_err();
        assert_eq!(err.to_string(), "Invalid: 3 is not one of the expected values: 1, 2, 4");
    }

    #[test]
    #[serial]
    fn test_check_min_max() {
        i18n::reset();
        assert!(check_min_max(1, 1).is_ok());
        assert!(check_min_max(-2.5, 3).is_ok());
        let err = check_min_max(5, 1).unwrap_err();
        assert_eq!(err.to_string(), "Invalid: Minimum 5 is greater than maximum 1");
        assert_eq!(check_min_max("a", 1).unwrap_err().kind(), ErrorKind::TypeMismatch);
    }

    // ==================== File Extension Tests ====================

    #[test]
    fn test_file_extension_accepted_case_insensitively() {
        let checked = check_file_extension("C:/work/Part.SDY", &[".sdy", ".udm"]).unwrap();
        assert_eq!(checked, Checked::Accepted("C:/work/Part.SDY".to_string()));
        assert!(!checked.is_amended());
        assert_eq!(checked.warning(), None);
    }

    #[test]
    #[serial]
    fn test_file_extension_mismatch_appends_default() {
        i18n::reset();
        let checked = check_file_extension("results", &[".xml", ".csv"]).unwrap();
        assert!(checked.is_amended());
        assert_eq!(checked.value(), "results.xml");
        assert_eq!(
            checked.warning(),
            Some("results has an unsupported extension, the default .xml will be applied")
        );
    }

    #[test]
    #[serial]
    fn test_file_extension_warning_keeps_braces_in_file_name() {
        i18n::reset();
        let checked = check_file_extension("report{default}", &[".xml"]).unwrap();
        assert_eq!(checked.value(), "report{default}.xml");
        assert_eq!(
            checked.warning(),
            Some("report{default} has an unsupported extension, the default .xml will be applied")
        );
    }

    #[test]
    #[serial]
    fn test_file_extension_reject() {
        i18n::reset();
        let err = check_file_extension_with("model.txt", &[".sdy"], Severity::Reject).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueOutOfRange);
        assert!(err.to_string().starts_with("Invalid: "));
    }

    #[test]
    fn test_file_extension_without_candidates() {
        let err = check_file_extension("model.sdy", &[]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueOutOfRange);
    }

    #[test]
    #[serial]
    fn test_file_extension_warning_is_localized() {
        install_then_reset(Locale::GERMAN, || {
            let checked = check_file_extension("ergebnis", &[".xml"]).unwrap();
            assert_eq!(checked.value(), "ergebnis.xml");
            let warning = checked.warning().unwrap_or_default();
            assert!(!warning.contains("unsupported extension"));
            assert!(warning.contains("ergebnis"));
        });
    }

    fn install_then_reset(locale: Locale, body: impl FnOnce()) {
        i18n::install(LocaleContext::builtin(locale));
        body();
        i18n::reset();
    }

    // ==================== Coercion Tests ====================

    #[test]
    fn test_coerce_null_to_null_dispatch() {
        let variant = check_and_coerce_optional(&Value::Null, ValueType::Object).unwrap();
        assert!(variant.is_null_dispatch());
    }

    #[test]
    fn test_coerce_primitives_pass_through() {
        assert_eq!(
            check_and_coerce_optional(&Value::Int(42), ValueType::Int).unwrap(),
            Variant::Int(42)
        );
        assert_eq!(
            check_and_coerce_optional(&Value::from("x"), ValueType::Str).unwrap(),
            Variant::Str("x".into())
        );
        assert_eq!(
            check_and_coerce_optional(&Value::Bool(false), ValueType::Bool).unwrap(),
            Variant::Bool(false)
        );
    }

    #[test]
    fn test_coerce_mismatch_is_type_error() {
        let err = check_and_coerce_optional(&Value::Int(1), ValueType::Str).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::TypeMismatch);
        let err = check_and_coerce_optional(&Value::Bool(true), ValueType::Int).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::TypeMismatch);
    }

    #[test]
    fn test_severity_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Severity::Warn).unwrap(), "\"warn\"");
    }
}
