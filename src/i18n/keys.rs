//! Message keys.
//!
//! Keys are the English source text (gettext convention), so an untranslated
//! lookup still renders readable English. Every key listed in [`ALL`] must be
//! present in each non-canonical catalog; `CatalogValidator` enforces this.

// ==================== Markers ====================

pub const INVALID: &str = "Invalid";
pub const SAVE_ERROR: &str = "Save Error";
pub const VALID_INPUT: &str = "Valid Input";
pub const VALID_TYPE: &str = "Valid Input Type";

// ==================== Errors ====================

pub const TYPE_MISMATCH: &str = "Expected one of {allowed}, found {found}";
pub const INVALID_ENUM_VALUE: &str = "{value} is not a valid value of {enum_name}";
pub const NOT_IN_RANGE: &str = "{value} is not within the range {min_value} to {max_value}";
pub const GREATER_THAN: &str = "{value} must be greater than {min_value}";
pub const GREATER_THAN_OR_EQUAL: &str = "{value} must be greater than or equal to {min_value}";
pub const LESS_THAN: &str = "{value} must be less than {max_value}";
pub const LESS_THAN_OR_EQUAL: &str = "{value} must be less than or equal to {max_value}";
pub const POSITIVE: &str = "{value} must be positive";
pub const NEGATIVE: &str = "{value} must be negative";
pub const NON_NEGATIVE: &str = "{value} must be non-negative";
pub const NON_ZERO: &str = "{value} must be non-zero";
pub const INVALID_VALUE: &str = "{value} is not one of the expected values: {expected_values}";
pub const MIN_MORE_THAN_MAX: &str = "Minimum {min_value} is greater than maximum {max_value}";
pub const UNSUPPORTED_EXTENSION: &str = "{file_name} does not end with one of {extensions}";
pub const NO_EXTENSIONS: &str = "No allowed extensions were given for {file_name}";
pub const INDEX_OUT_OF_RANGE: &str = "Index out of range";
pub const SAVE_FAILED: &str = "Could not save {operation} to {file_name}";
pub const MEMBER_NOT_FOUND: &str = "{member} is not a member of {interface}";
pub const OBJECT_RELEASED: &str =
    "{member} cannot be accessed because the object has been released";
pub const MEMBER_REJECTED: &str = "{interface} rejected {member}: {detail}";

// ==================== Warnings ====================

pub const NOT_ENUM_MEMBER: &str = "{value} is not a member of {enum_name}";
pub const MAY_FAIL: &str = "this may cause function call to fail";
pub const EXTENSION_MISMATCH: &str = "{file_name} has an unsupported extension";
pub const DEFAULT_APPLIED: &str = "the default {default} will be applied";

// ==================== Log Messages ====================

pub const LOG_CLASS_INIT: &str = "Initializing {name}";
pub const LOG_PROPERTY_GET: &str = "Getting {name}";
pub const LOG_PROPERTY_SET: &str = "Setting {name} to {value}";
pub const LOG_FUNCTION_CALL: &str = "Executing {name}";
pub const LOG_HELPER_CHECK: &str = "Checking {value} is {name}";
pub const LOG_CHECK_RANGE: &str = "Checking {value} is in range {min_value} to {max_value}";
pub const LOG_CHECK_MIN: &str = "Checking {value} is at least {min_value}";
pub const LOG_CHECK_MAX: &str = "Checking {value} is at most {max_value}";
pub const LOG_CHECK_MIN_MAX: &str = "Checking {min_value} does not exceed {max_value}";
pub const LOG_CHECK_POSITIVE: &str = "Checking {value} is positive";
pub const LOG_CHECK_NEGATIVE: &str = "Checking {value} is negative";
pub const LOG_CHECK_NON_NEGATIVE: &str = "Checking {value} is non-negative";
pub const LOG_CHECK_NON_ZERO: &str = "Checking {value} is non-zero";
pub const LOG_CHECK_EXPECTED_VALUES: &str = "Checking {value} is one of the expected values";
pub const LOG_CHECK_INDEX: &str = "Checking index {index}";
pub const LOG_CHECK_FILE_EXTENSION: &str = "Checking extension of {file_name}";
pub const LOG_LOCALE_INSTALLED: &str = "Language set to {locale}";
pub const LOG_CATALOG_LOAD_FAILED: &str = "Catalog {path} could not be loaded: {error}";

/// Every key a complete catalog must translate.
pub const ALL: &[&str] = &[
    INVALID,
    SAVE_ERROR,
    VALID_INPUT,
    VALID_TYPE,
    TYPE_MISMATCH,
    INVALID_ENUM_VALUE,
    NOT_IN_RANGE,
    GREATER_THAN,
    GREATER_THAN_OR_EQUAL,
    LESS_THAN,
    LESS_THAN_OR_EQUAL,
    POSITIVE,
    NEGATIVE,
    NON_NEGATIVE,
    NON_ZERO,
    INVALID_VALUE,
    MIN_MORE_THAN_MAX,
    UNSUPPORTED_EXTENSION,
    NO_EXTENSIONS,
    INDEX_OUT_OF_RANGE,
    SAVE_FAILED,
    MEMBER_NOT_FOUND,
    OBJECT_RELEASED,
    MEMBER_REJECTED,
    NOT_ENUM_MEMBER,
    MAY_FAIL,
    EXTENSION_MISMATCH,
    DEFAULT_APPLIED,
    LOG_CLASS_INIT,
    LOG_PROPERTY_GET,
    LOG_PROPERTY_SET,
    LOG_FUNCTION_CALL,
    LOG_HELPER_CHECK,
    LOG_CHECK_RANGE,
    LOG_CHECK_MIN,
    LOG_CHECK_MAX,
    LOG_CHECK_MIN_MAX,
    LOG_CHECK_POSITIVE,
    LOG_CHECK_NEGATIVE,
    LOG_CHECK_NON_NEGATIVE,
    LOG_CHECK_NON_ZERO,
    LOG_CHECK_EXPECTED_VALUES,
    LOG_CHECK_INDEX,
    LOG_CHECK_FILE_EXTENSION,
    LOG_LOCALE_INSTALLED,
    LOG_CATALOG_LOAD_FAILED,
];
