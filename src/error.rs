//! Localized, structured errors.
//!
//! Every error message starts with a translated category marker ("Invalid",
//! or "Save Error" for persistence failures) followed by the translated
//! detail, so callers can match on the kind or on the message text.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;
use thiserror::Error;

use crate::i18n::{self, keys, MessageArg};
use crate::proxy::ExternalError;
use crate::value::{Value, ValueType};

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Closed set of error categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ErrorKind {
    TypeMismatch,
    ValueOutOfRange,
    InvalidEnumValue,
    IndexOutOfRange,
    SaveFailure,
    AttributeMissing,
}

/// The (kind, localized message, parameters) triple behind an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorDescriptor {
    pub kind: ErrorKind,
    pub message: String,
    pub params: BTreeMap<String, String>,
}

/// Reasons a value can be rejected, each with its own message template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueErrorReason {
    InvalidEnumValue,
    NotInRange,
    GreaterThan,
    GreaterThanOrEqual,
    LessThan,
    LessThanOrEqual,
    Positive,
    Negative,
    NonNegative,
    NonZero,
    InvalidValue,
    MinMoreThanMax,
    UnsupportedExtension,
    NoExtensions,
}

impl ValueErrorReason {
    pub fn template(self) -> &'static str {
        match self {
            ValueErrorReason::InvalidEnumValue => keys::INVALID_ENUM_VALUE,
            ValueErrorReason::NotInRange => keys::NOT_IN_RANGE,
            ValueErrorReason::GreaterThan => keys::GREATER_THAN,
            ValueErrorReason::GreaterThanOrEqual => keys::GREATER_THAN_OR_EQUAL,
            ValueErrorReason::LessThan => keys::LESS_THAN,
            ValueErrorReason::LessThanOrEqual => keys::LESS_THAN_OR_EQUAL,
            ValueErrorReason::Positive => keys::POSITIVE,
            ValueErrorReason::Negative => keys::NEGATIVE,
            ValueErrorReason::NonNegative => keys::NON_NEGATIVE,
            ValueErrorReason::NonZero => keys::NON_ZERO,
            ValueErrorReason::InvalidValue => keys::INVALID_VALUE,
            ValueErrorReason::MinMoreThanMax => keys::MIN_MORE_THAN_MAX,
            ValueErrorReason::UnsupportedExtension => keys::UNSUPPORTED_EXTENSION,
            ValueErrorReason::NoExtensions => keys::NO_EXTENSIONS,
        }
    }
}

/// Either a closed reason (rendered from its template) or a preformatted
/// message for one-off cases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValueErrorCause {
    Reason(ValueErrorReason),
    Message(String),
}

impl From<ValueErrorReason> for ValueErrorCause {
    fn from(reason: ValueErrorReason) -> Self {
        ValueErrorCause::Reason(reason)
    }
}

impl From<String> for ValueErrorCause {
    fn from(message: String) -> Self {
        ValueErrorCause::Message(message)
    }
}

impl From<&str> for ValueErrorCause {
    fn from(message: &str) -> Self {
        ValueErrorCause::Message(message.to_string())
    }
}

#[derive(Debug, Clone, Error)]
pub enum Error {
    #[error("{message}")]
    TypeMismatch {
        message: String,
        found: ValueType,
        allowed: Vec<ValueType>,
    },

    #[error("{message}")]
    ValueOutOfRange {
        message: String,
        reason: Option<ValueErrorReason>,
        params: Vec<MessageArg>,
    },

    #[error("{message}")]
    IndexOutOfRange { message: String },

    #[error("{message}")]
    SaveFailure {
        message: String,
        operation: String,
        file_name: String,
    },

    #[error("{message}")]
    AttributeMissing {
        message: String,
        interface: String,
        member: String,
        source: ExternalError,
    },
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::TypeMismatch { .. } => ErrorKind::TypeMismatch,
            Error::ValueOutOfRange {
                reason: Some(ValueErrorReason::InvalidEnumValue),
                ..
            } => ErrorKind::InvalidEnumValue,
            Error::ValueOutOfRange { .. } => ErrorKind::ValueOutOfRange,
            Error::IndexOutOfRange { .. } => ErrorKind::IndexOutOfRange,
            Error::SaveFailure { .. } => ErrorKind::SaveFailure,
            Error::AttributeMissing { .. } => ErrorKind::AttributeMissing,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Error::TypeMismatch { message, .. }
            | Error::ValueOutOfRange { message, .. }
            | Error::IndexOutOfRange { message }
            | Error::SaveFailure { message, .. }
            | Error::AttributeMissing { message, .. } => message,
        }
    }

    pub fn descriptor(&self) -> ErrorDescriptor {
        let mut params = BTreeMap::new();
        match self {
            Error::TypeMismatch { found, allowed, .. } => {
                params.insert("found".to_string(), found.to_string());
                params.insert("allowed".to_string(), join_types(allowed));
            }
            Error::ValueOutOfRange { params: args, .. } => {
                for arg in args {
                    params.insert(arg.key.to_string(), arg.value.clone());
                }
            }
            Error::IndexOutOfRange { .. } => {}
            Error::SaveFailure {
                operation,
                file_name,
                ..
            } => {
                params.insert("operation".to_string(), operation.clone());
                params.insert("file_name".to_string(), file_name.clone());
            }
            Error::AttributeMissing {
                interface, member, ..
            } => {
                params.insert("interface".to_string(), interface.clone());
                params.insert("member".to_string(), member.clone());
            }
        }
        ErrorDescriptor {
            kind: self.kind(),
            message: self.message().to_string(),
            params,
        }
    }
}

/// "<marker>: <detail>", both translated.
fn localized(marker: &str, detail: String) -> String {
    format!("{}: {}", i18n::translate(marker, Vec::new()), detail)
}

fn join_types(types: &[ValueType]) -> String {
    types
        .iter()
        .map(ValueType::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

pub(crate) fn type_error(value: &Value, allowed: &[ValueType]) -> Error {
    let found = value.value_type();
    let detail = i18n::translate(
        keys::TYPE_MISMATCH,
        vec![
            MessageArg::new("allowed", join_types(allowed)),
            MessageArg::new("found", found.to_string()),
        ],
    );
    Error::TypeMismatch {
        message: localized(keys::INVALID, detail),
        found,
        allowed: allowed.to_vec(),
    }
}

pub(crate) fn value_error(cause: impl Into<ValueErrorCause>, args: Vec<MessageArg>) -> Error {
    let (reason, detail) = match cause.into() {
        ValueErrorCause::Reason(reason) => (
            Some(reason),
            i18n::translate(reason.template(), args.clone()),
        ),
        ValueErrorCause::Message(message) => (None, message),
    };
    Error::ValueOutOfRange {
        message: localized(keys::INVALID, detail),
        reason,
        params: args,
    }
}

pub(crate) fn attribute_error(interface: &str, member: &str, source: ExternalError) -> Error {
    let args = vec![
        MessageArg::new("interface", interface),
        MessageArg::new("member", member),
    ];
    let detail = match &source {
        ExternalError::MemberNotFound => i18n::translate(keys::MEMBER_NOT_FOUND, args),
        ExternalError::Released => i18n::translate(keys::OBJECT_RELEASED, args),
        other => {
            let mut args = args;
            args.push(MessageArg::new("detail", other.to_string()));
            i18n::translate(keys::MEMBER_REJECTED, args)
        }
    };
    Error::AttributeMissing {
        message: localized(keys::INVALID, detail),
        interface: interface.to_string(),
        member: member.to_string(),
        source,
    }
}

/// Fail with `TypeMismatch` naming the value's type and the allowed set.
pub fn raise_type_error<T>(value: &Value, allowed: &[ValueType]) -> Result<T> {
    Err(type_error(value, allowed))
}

/// Fail with `ValueOutOfRange`.
///
/// `cause` is either a [`ValueErrorReason`], whose template is filled from
/// `args`, or a preformatted message.
pub fn raise_value_error<T>(cause: impl Into<ValueErrorCause>, args: Vec<MessageArg>) -> Result<T> {
    Err(value_error(cause, args))
}

pub fn raise_index_error<T>() -> Result<T> {
    Err(Error::IndexOutOfRange {
        message: localized(keys::INVALID, i18n::translate(keys::INDEX_OUT_OF_RANGE, Vec::new())),
    })
}

/// Fail with `SaveFailure` for a persistence operation that did not complete.
pub fn raise_save_error<T>(operation: &str, file_name: &str) -> Result<T> {
    let detail = i18n::translate(
        keys::SAVE_FAILED,
        vec![
            MessageArg::new("operation", operation),
            MessageArg::new("file_name", file_name),
        ],
    );
    Err(Error::SaveFailure {
        message: localized(keys::SAVE_ERROR, detail),
        operation: operation.to_string(),
        file_name: file_name.to_string(),
    })
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}
