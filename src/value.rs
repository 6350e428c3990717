//! Values on both sides of the facade.
//!
//! [`Value`] is what client code passes in and receives; [`Variant`] is the
//! external object's call convention. Conversion between the two is where
//! proxies are unwrapped (going out) and re-wrapped (coming back).

use std::cmp::Ordering;
use std::fmt;
use std::rc::Rc;

use crate::error::{self, Result};
use crate::proxy::{ExternalRef, SafeProxy};

/// Runtime type of a [`Value`], used by type checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
    Null,
    Bool,
    Int,
    Float,
    Str,
    List,
    /// Any wrapped external object.
    Object,
    /// A wrapped external object exposing the named interface.
    Interface(&'static str),
}

impl ValueType {
    /// The numeric types. `Bool` is deliberately absent.
    pub const NUMERIC: &'static [ValueType] = &[ValueType::Int, ValueType::Float];

    pub fn name(&self) -> &'static str {
        match self {
            ValueType::Null => "null",
            ValueType::Bool => "bool",
            ValueType::Int => "int",
            ValueType::Float => "float",
            ValueType::Str => "str",
            ValueType::List => "list",
            ValueType::Object => "object",
            ValueType::Interface(name) => *name,
        }
    }

    /// Check whether a value is of this type.
    ///
    /// Matching is exact: a bool is never an int, an int is never a float.
    pub fn accepts(&self, value: &Value) -> bool {
        match (self, value) {
            (ValueType::Null, Value::Null)
            | (ValueType::Bool, Value::Bool(_))
            | (ValueType::Int, Value::Int(_))
            | (ValueType::Float, Value::Float(_))
            | (ValueType::Str, Value::Str(_))
            | (ValueType::List, Value::List(_))
            | (ValueType::Object, Value::Object(_)) => true,
            (ValueType::Interface(name), Value::Object(proxy)) => proxy.interface_name() == *name,
            _ => false,
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An integer or a float, compared by numeric value.
#[derive(Debug, Clone, Copy)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    pub fn as_f64(self) -> f64 {
        match self {
            Number::Int(i) => i as f64,
            Number::Float(f) => f,
        }
    }

    fn zero_like(self) -> Number {
        match self {
            Number::Int(_) => Number::Int(0),
            Number::Float(_) => Number::Float(0.0),
        }
    }

    /// Ordering against zero; `None` for NaN.
    pub fn sign(self) -> Option<Ordering> {
        self.partial_cmp(&self.zero_like())
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        self.partial_cmp(other) == Some(Ordering::Equal)
    }
}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Number::Int(a), Number::Int(b)) => Some(a.cmp(b)),
            _ => self.as_f64().partial_cmp(&other.as_f64()),
        }
    }
}

impl From<i32> for Number {
    fn from(value: i32) -> Self {
        Number::Int(value.into())
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Number::Int(value)
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number::Float(value)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(i) => write!(f, "{i}"),
            // Debug keeps the fractional part ("1.0", not "1")
            Number::Float(x) => write!(f, "{x:?}"),
        }
    }
}

/// A client-side value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    List(Vec<Value>),
    Object(SafeProxy),
}

impl Value {
    pub fn value_type(&self) -> ValueType {
        match self {
            Value::Null => ValueType::Null,
            Value::Bool(_) => ValueType::Bool,
            Value::Int(_) => ValueType::Int,
            Value::Float(_) => ValueType::Float,
            Value::Str(_) => ValueType::Str,
            Value::List(_) => ValueType::List,
            Value::Object(_) => ValueType::Object,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Numeric view of the value. Booleans are not numbers.
    pub fn as_number(&self) -> Option<Number> {
        match self {
            Value::Int(i) => Some(Number::Int(*i)),
            Value::Float(f) => Some(Number::Float(*f)),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_proxy(&self) -> Option<&SafeProxy> {
        match self {
            Value::Object(proxy) => Some(proxy),
            _ => None,
        }
    }

    /// Convert to the external call convention.
    ///
    /// Proxies are unwrapped to their raw reference, which fails if the proxy
    /// has been invalidated.
    pub fn to_variant(&self) -> Result<Variant> {
        Ok(match self {
            Value::Null => Variant::Empty,
            Value::Bool(b) => Variant::Bool(*b),
            Value::Int(i) => Variant::Int(*i),
            Value::Float(f) => Variant::Float(*f),
            Value::Str(s) => Variant::Str(s.clone()),
            Value::List(items) => Variant::Array(
                items
                    .iter()
                    .map(Value::to_variant)
                    .collect::<Result<Vec<_>>>()?,
            ),
            Value::Object(proxy) => Variant::Dispatch(proxy.raw()?),
        })
    }

    /// Convert a result coming back from the external object, wrapping any
    /// external reference in a new proxy.
    pub fn from_variant(variant: Variant) -> Value {
        match variant {
            Variant::Empty | Variant::NullDispatch => Value::Null,
            Variant::Bool(b) => Value::Bool(b),
            Variant::Int(i) => Value::Int(i),
            Variant::Float(f) => Value::Float(f),
            Variant::Str(s) => Value::Str(s),
            Variant::Array(items) => Value::List(items.into_iter().map(Value::from_variant).collect()),
            Variant::Dispatch(raw) => Value::Object(SafeProxy::wrap(raw)),
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int(value.into())
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::Int(value.into())
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Str(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Str(value)
    }
}

impl From<Number> for Value {
    fn from(value: Number) -> Self {
        match value {
            Number::Int(i) => Value::Int(i),
            Number::Float(f) => Value::Float(f),
        }
    }
}

impl From<SafeProxy> for Value {
    fn from(value: SafeProxy) -> Self {
        Value::Object(value)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(values: Vec<T>) -> Self {
        Value::List(values.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("None"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(i) => write!(f, "{i}"),
            Value::Float(x) => write!(f, "{}", Number::Float(*x)),
            Value::Str(s) => f.write_str(s),
            Value::List(items) => {
                let rendered: Vec<String> = items.iter().map(Value::to_string).collect();
                write!(f, "[{}]", rendered.join(", "))
            }
            Value::Object(proxy) => write!(f, "<{}>", proxy.interface_name()),
        }
    }
}

/// A value in the external object's call convention.
#[derive(Clone)]
pub enum Variant {
    /// No value (an omitted argument or a void result).
    Empty,
    /// A null external reference.
    NullDispatch,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    Array(Vec<Variant>),
    Dispatch(ExternalRef),
}

impl Variant {
    pub fn is_null_dispatch(&self) -> bool {
        matches!(self, Variant::NullDispatch)
    }

    pub fn as_dispatch(&self) -> Option<&ExternalRef> {
        match self {
            Variant::Dispatch(raw) => Some(raw),
            _ => None,
        }
    }
}

impl PartialEq for Variant {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Variant::Empty, Variant::Empty) | (Variant::NullDispatch, Variant::NullDispatch) => {
                true
            }
            (Variant::Bool(a), Variant::Bool(b)) => a == b,
            (Variant::Int(a), Variant::Int(b)) => a == b,
            (Variant::Float(a), Variant::Float(b)) => a == b,
            (Variant::Str(a), Variant::Str(b)) => a == b,
            (Variant::Array(a), Variant::Array(b)) => a == b,
            (Variant::Dispatch(a), Variant::Dispatch(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl fmt::Debug for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Variant::Empty => f.write_str("Empty"),
            Variant::NullDispatch => f.write_str("NullDispatch"),
            Variant::Bool(b) => f.debug_tuple("Bool").field(b).finish(),
            Variant::Int(i) => f.debug_tuple("Int").field(i).finish(),
            Variant::Float(x) => f.debug_tuple("Float").field(x).finish(),
            Variant::Str(s) => f.debug_tuple("Str").field(s).finish(),
            Variant::Array(items) => f.debug_tuple("Array").field(items).finish(),
            Variant::Dispatch(raw) => f.debug_tuple("Dispatch").field(&raw.interface_name()).finish(),
        }
    }
}

/// Fail with `TypeMismatch` unless `value` is one of `allowed`.
pub(crate) fn expect_type(value: &Value, allowed: &[ValueType]) -> Result<()> {
    if allowed.iter().any(|t| t.accepts(value)) {
        Ok(())
    } else {
        error::raise_type_error(value, allowed)
    }
}

/// Numeric view of `value`, or `TypeMismatch` (booleans included).
pub(crate) fn expect_number(value: &Value) -> Result<Number> {
    match value.as_number() {
        Some(number) => Ok(number),
        None => error::raise_type_error(value, ValueType::NUMERIC),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== ValueType Tests ====================

    #[test]
    fn test_bool_is_not_numeric() {
        let value = Value::Bool(true);
        assert!(!ValueType::Int.accepts(&value));
        assert!(!ValueType::Float.accepts(&value));
        assert!(ValueType::Bool.accepts(&value));
        assert!(value.as_number().is_none());
    }

    #[test]
    fn test_exact_numeric_matching() {
        assert!(ValueType::Int.accepts(&Value::Int(1)));
        assert!(!ValueType::Float.accepts(&Value::Int(1)));
        assert!(!ValueType::Int.accepts(&Value::Float(1.0)));
    }

    #[test]
    fn test_value_type_names() {
        assert_eq!(ValueType::Str.to_string(), "str");
        assert_eq!(ValueType::Interface("IVector").to_string(), "IVector");
        assert_eq!(Value::Null.value_type(), ValueType::Null);
        assert_eq!(Value::from(vec![1, 2]).value_type(), ValueType::List);
    }

    // ==================== Number Tests ====================

    #[test]
    fn test_number_mixed_comparison() {
        assert_eq!(Number::Int(1), Number::Float(1.0));
        assert!(Number::Int(2) > Number::Float(1.5));
        assert!(Number::Float(-0.5) < Number::Int(0));
    }

    #[test]
    fn test_number_large_ints_compare_exactly() {
        let a = Number::Int(i64::MAX);
        let b = Number::Int(i64::MAX - 1);
        assert!(a > b);
    }

    #[test]
    fn test_number_sign() {
        assert_eq!(Number::Int(-3).sign(), Some(Ordering::Less));
        assert_eq!(Number::Float(0.0).sign(), Some(Ordering::Equal));
        assert_eq!(Number::Float(f64::NAN).sign(), None);
    }

    #[test]
    fn test_number_display() {
        assert_eq!(Number::Int(5).to_string(), "5");
        assert_eq!(Number::Float(1.0).to_string(), "1.0");
        assert_eq!(Number::Float(2.5).to_string(), "2.5");
    }

    // ==================== Conversion Tests ====================

    #[test]
    fn test_value_from_option() {
        assert_eq!(Value::from(None::<i64>), Value::Null);
        assert_eq!(Value::from(Some("a")), Value::Str("a".to_string()));
    }

    #[test]
    fn test_value_display() {
        assert_eq!(Value::from(vec![1.5, 2.0]).to_string(), "[1.5, 2.0]");
        assert_eq!(Value::Null.to_string(), "None");
        assert_eq!(Value::Bool(false).to_string(), "false");
    }

    #[test]
    fn test_primitive_variant_conversion() {
        let value = Value::from(vec![Value::Int(1), Value::from("x"), Value::Null]);
        let variant = value.to_variant().expect("Should convert");
        assert_eq!(
            variant,
            Variant::Array(vec![Variant::Int(1), Variant::Str("x".into()), Variant::Empty])
        );
        assert_eq!(Value::from_variant(variant), Value::from(vec![Value::Int(1), Value::from("x"), Value::Null]));
    }

    #[test]
    fn test_null_dispatch_becomes_null() {
        assert_eq!(Value::from_variant(Variant::NullDispatch), Value::Null);
        assert!(Variant::NullDispatch.is_null_dispatch());
        assert!(Variant::Empty.as_dispatch().is_none());
    }
}
