//! Enum normalization.
//!
//! Enum-shaped arguments may arrive either as a member of a [`FacadeEnum`] or
//! as the raw value the external object understands. Both normalize to the
//! raw value. A raw value that matches no member is passed through with a
//! warning, since the external application's enumerations evolve
//! independently of this crate.

use std::fmt;

use crate::error::{self, Result, ValueErrorReason};
use crate::i18n::MessageArg;
use crate::logging::{log_text, process_log, LogMessage};
use crate::validate::Severity;
use crate::value::{self, Value, ValueType, Variant};

/// The underlying value of an enum member.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RawValue {
    Int(i64),
    Str(String),
}

impl RawValue {
    pub fn value_type(&self) -> ValueType {
        match self {
            RawValue::Int(_) => ValueType::Int,
            RawValue::Str(_) => ValueType::Str,
        }
    }
}

impl fmt::Display for RawValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawValue::Int(i) => write!(f, "{i}"),
            RawValue::Str(s) => f.write_str(s),
        }
    }
}

impl From<i64> for RawValue {
    fn from(value: i64) -> Self {
        RawValue::Int(value)
    }
}

impl From<i32> for RawValue {
    fn from(value: i32) -> Self {
        RawValue::Int(value.into())
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        RawValue::Str(value.to_string())
    }
}

impl From<String> for RawValue {
    fn from(value: String) -> Self {
        RawValue::Str(value)
    }
}

impl From<RawValue> for Value {
    fn from(raw: RawValue) -> Self {
        match raw {
            RawValue::Int(i) => Value::Int(i),
            RawValue::Str(s) => Value::Str(s),
        }
    }
}

impl From<RawValue> for Variant {
    fn from(raw: RawValue) -> Self {
        match raw {
            RawValue::Int(i) => Variant::Int(i),
            RawValue::Str(s) => Variant::Str(s),
        }
    }
}

/// A closed set of symbolic members, each with a raw value.
///
/// Usually implemented through [`facade_enum!`](crate::facade_enum).
pub trait FacadeEnum: Copy + fmt::Debug + 'static {
    const NAME: &'static str;

    /// `Int` or `Str`: the type of every member's raw value.
    const RAW_TYPE: ValueType;

    fn members() -> &'static [Self];

    fn raw(self) -> RawValue;

    /// The member whose raw value is `raw`.
    fn from_raw(raw: &RawValue) -> Option<Self> {
        Self::members().iter().copied().find(|member| member.raw() == *raw)
    }
}

/// An enum-shaped argument: a member or a raw value.
#[derive(Debug, Clone, PartialEq)]
pub enum EnumArg<E> {
    Member(E),
    Raw(RawValue),
}

impl<E> EnumArg<E> {
    pub fn raw(value: impl Into<RawValue>) -> Self {
        EnumArg::Raw(value.into())
    }
}

impl<E: FacadeEnum> From<E> for EnumArg<E> {
    fn from(member: E) -> Self {
        EnumArg::Member(member)
    }
}

/// Outcome of normalizing an enum argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnumResolution {
    /// The value is, or names, a known member.
    Resolved(RawValue),
    /// The raw value matches no member; `warning` is the localized text.
    Unknown { raw: RawValue, warning: String },
}

impl EnumResolution {
    pub fn raw(&self) -> &RawValue {
        match self {
            EnumResolution::Resolved(raw) | EnumResolution::Unknown { raw, .. } => raw,
        }
    }

    pub fn is_known(&self) -> bool {
        matches!(self, EnumResolution::Resolved(_))
    }

    /// Settle an unknown value.
    ///
    /// `Warn` logs the warning and passes the raw value through; `Reject`
    /// fails with `InvalidEnumValue`.
    pub fn require<E: FacadeEnum>(self, severity: Severity) -> Result<RawValue> {
        match (self, severity) {
            (EnumResolution::Resolved(raw), _) => Ok(raw),
            (EnumResolution::Unknown { raw, warning }, Severity::Warn) => {
                log_text(module_path!(), LogMessage::ValueNotInEnum.level(), &warning);
                Ok(raw)
            }
            (EnumResolution::Unknown { raw, .. }, Severity::Reject) => error::raise_value_error(
                ValueErrorReason::InvalidEnumValue,
                vec![
                    MessageArg::new("value", raw.to_string()),
                    MessageArg::new("enum_name", E::NAME),
                ],
            ),
        }
    }
}

/// Normalize without deciding what to do about unknown values.
///
/// Fails with `TypeMismatch` only when a raw value has the wrong type for the
/// enum (a string for an integer enum, say).
pub fn resolve_enum<E: FacadeEnum>(value: impl Into<EnumArg<E>>) -> Result<EnumResolution> {
    let value = value.into();
    let shown = match &value {
        EnumArg::Member(member) => format!("{member:?}"),
        EnumArg::Raw(raw) => raw.to_string(),
    };
    process_log(
        module_path!(),
        LogMessage::HelperCheck,
        vec![MessageArg::new("value", shown), MessageArg::new("name", E::NAME)],
    );

    let raw = match value {
        EnumArg::Member(member) => {
            process_log(module_path!(), LogMessage::ValidType, Vec::new());
            return Ok(EnumResolution::Resolved(member.raw()));
        }
        EnumArg::Raw(raw) => raw,
    };

    value::expect_type(&Value::from(raw.clone()), &[E::RAW_TYPE])?;

    if E::from_raw(&raw).is_some() {
        process_log(module_path!(), LogMessage::ValidInput, Vec::new());
        return Ok(EnumResolution::Resolved(raw));
    }

    let warning = LogMessage::ValueNotInEnum.render(&[
        MessageArg::new("value", raw.to_string()),
        MessageArg::new("enum_name", E::NAME),
    ]);
    Ok(EnumResolution::Unknown { raw, warning })
}

/// Normalize an enum argument to its raw value.
///
/// Unknown raw values are returned unchanged after logging a warning that the
/// call may fail.
pub fn get_enum_value<E: FacadeEnum>(value: impl Into<EnumArg<E>>) -> Result<RawValue> {
    resolve_enum::<E>(value)?.require::<E>(Severity::Warn)
}

/// Declare an enum with raw values and implement [`FacadeEnum`] for it.
///
/// ```rust,ignore
/// facade_enum! {
///     pub enum SystemUnits: str {
///         Metric = "Metric",
///         English = "English",
///     }
/// }
/// ```
#[macro_export]
macro_rules! facade_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident : i64 {
            $( $(#[$vmeta:meta])* $variant:ident = $raw:expr ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $crate::enums::FacadeEnum for $name {
            const NAME: &'static str = stringify!($name);
            const RAW_TYPE: $crate::value::ValueType = $crate::value::ValueType::Int;

            fn members() -> &'static [Self] {
                &[$( $name::$variant ),+]
            }

            fn raw(self) -> $crate::enums::RawValue {
                match self {
                    $( $name::$variant => $crate::enums::RawValue::Int($raw) ),+
                }
            }
        }
    };
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident : str {
            $( $(#[$vmeta:meta])* $variant:ident = $raw:expr ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $crate::enums::FacadeEnum for $name {
            const NAME: &'static str = stringify!($name);
            const RAW_TYPE: $crate::value::ValueType = $crate::value::ValueType::Str;

            fn members() -> &'static [Self] {
                &[$( $name::$variant ),+]
            }

            fn raw(self) -> $crate::enums::RawValue {
                match self {
                    $( $name::$variant => $crate::enums::RawValue::Str(::std::string::String::from($raw)) ),+
                }
            }
        }
    };
}
