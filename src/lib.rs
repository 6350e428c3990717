//! Validated, localized scripting facade over a COM-style automation object.
//!
//! Wrapper methods check their arguments with [`validate`], normalize
//! enum-shaped arguments with [`enums`], and forward through a [`SafeProxy`].
//! Every error message is rendered through the active [`i18n`] catalog.

pub mod config;
pub mod enums;
pub mod error;
pub mod i18n;
pub mod logging;
pub mod proxy;
pub mod validate;
pub mod value;

pub use enums::{get_enum_value, resolve_enum, EnumArg, EnumResolution, FacadeEnum, RawValue};
pub use error::{
    raise_index_error, raise_save_error, raise_type_error, raise_value_error, Error,
    ErrorDescriptor, ErrorKind, Result, ValueErrorReason,
};
pub use i18n::{get_text, set_language, Locale, LocaleContext};
pub use proxy::{
    expose_internal_handle, flag_as_method, ExternalError, ExternalObject, ExternalRef,
    HintOutcome, ProxyState, SafeProxy, Wrapped,
};
pub use validate::{
    array_to_list, check_and_coerce_optional, check_expected_values, check_file_extension,
    check_file_extension_with, check_index, check_is_negative, check_is_non_negative,
    check_is_non_zero, check_is_positive, check_min_max, check_optional_type, check_range,
    check_type, coerce_optional, Checked, Severity,
};
pub use value::{Number, Value, ValueType, Variant};
