//! Safe proxy around external automation objects.
//!
//! The external object is reached only through [`ExternalObject`]. A
//! [`SafeProxy`] forwards `get`/`set`/`invoke` by member name, maps every
//! interop failure to `AttributeMissing`, re-wraps returned references, and
//! compares and hashes by the identity of the wrapped reference.
//!
//! Proxies are `!Send`: the host is single-threaded.

use std::cell::Cell;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::rc::Rc;

use thiserror::Error;

use crate::error::{self, Result};
use crate::i18n::MessageArg;
use crate::logging::{process_log, LogMessage};
use crate::value::{Value, Variant};

/// Failure reported by the interop layer. Never escapes a [`SafeProxy`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExternalError {
    #[error("member not found")]
    MemberNotFound,

    #[error("object has been released")]
    Released,

    #[error("operation not supported")]
    Unsupported,

    #[error("{0}")]
    Failed(String),
}

/// Low-level interop pointer exposed by some automation objects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InteropHandle(pub usize);

/// An object owned by the external application, addressed by member name.
pub trait ExternalObject {
    /// Interface name (e.g., "IVector"), used in messages and type checks.
    fn interface_name(&self) -> &str;

    fn get(&self, member: &str) -> std::result::Result<Variant, ExternalError>;

    fn set(&self, member: &str, value: Variant) -> std::result::Result<(), ExternalError>;

    fn invoke(&self, member: &str, args: &[Variant]) -> std::result::Result<Variant, ExternalError>;

    /// Whether the owning application still holds this object.
    fn is_alive(&self) -> bool {
        true
    }

    /// Interop handle published under `source`, if any.
    fn interop_handle(&self, _source: &str) -> Option<InteropHandle> {
        None
    }

    /// Mark `member` as a method rather than a property.
    fn flag_as_method(&self, _member: &str) -> std::result::Result<(), ExternalError> {
        Err(ExternalError::Unsupported)
    }
}

/// Shared reference to an external object.
pub type ExternalRef = Rc<dyn ExternalObject>;

/// Lifecycle of a proxy. `Invalidated` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProxyState {
    Live,
    Invalidated,
}

/// Result of a best-effort hint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HintOutcome {
    Applied,
    /// The object does not support or need the hint.
    NotApplicable,
    /// The interop layer reported an unexpected failure.
    Failed(String),
}

impl HintOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, HintOutcome::Applied)
    }
}

struct ProxyInner {
    handle: ExternalRef,
    state: Cell<ProxyState>,
    interop: Cell<Option<InteropHandle>>,
}

/// Identity-preserving wrapper around one external reference.
///
/// Cloning shares the wrapper; [`SafeProxy::same_wrapper`] tells clones apart
/// from independently built wrappers, while `==` compares the wrapped
/// reference only.
#[derive(Clone)]
pub struct SafeProxy {
    inner: Rc<ProxyInner>,
}

/// Either a raw external reference or an existing proxy.
pub enum Wrappable {
    Raw(ExternalRef),
    Proxy(SafeProxy),
}

impl From<ExternalRef> for Wrappable {
    fn from(raw: ExternalRef) -> Self {
        Wrappable::Raw(raw)
    }
}

impl From<SafeProxy> for Wrappable {
    fn from(proxy: SafeProxy) -> Self {
        Wrappable::Proxy(proxy)
    }
}

impl From<&SafeProxy> for Wrappable {
    fn from(proxy: &SafeProxy) -> Self {
        Wrappable::Proxy(proxy.clone())
    }
}

impl SafeProxy {
    /// Wrap a raw reference. Wrapping a proxy returns that same proxy.
    pub fn wrap(value: impl Into<Wrappable>) -> SafeProxy {
        match value.into() {
            Wrappable::Proxy(proxy) => proxy,
            Wrappable::Raw(handle) => SafeProxy {
                inner: Rc::new(ProxyInner {
                    handle,
                    state: Cell::new(ProxyState::Live),
                    interop: Cell::new(None),
                }),
            },
        }
    }

    pub fn interface_name(&self) -> &str {
        self.inner.handle.interface_name()
    }

    /// Current state. A proxy whose object has been released by its owner
    /// moves to `Invalidated` and stays there.
    pub fn state(&self) -> ProxyState {
        if self.inner.state.get() == ProxyState::Live && !self.inner.handle.is_alive() {
            self.inner.state.set(ProxyState::Invalidated);
        }
        self.inner.state.get()
    }

    pub fn is_live(&self) -> bool {
        self.state() == ProxyState::Live
    }

    /// Mark the proxy unusable. Every later forwarded call fails.
    pub fn invalidate(&self) {
        self.inner.state.set(ProxyState::Invalidated);
    }

    /// Whether two values are the very same wrapper (not merely equal).
    pub fn same_wrapper(&self, other: &SafeProxy) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    /// The raw reference, for passing to the external object.
    pub fn raw(&self) -> Result<ExternalRef> {
        let interface = self.interface_name().to_string();
        self.live_handle(&interface).cloned()
    }

    /// Read a property.
    pub fn get(&self, member: &str) -> Result<Value> {
        let handle = self.live_handle(member)?;
        process_log(
            module_path!(),
            LogMessage::PropertyGet,
            vec![MessageArg::new("name", member)],
        );
        let result = handle
            .get(member)
            .map_err(|e| self.external_error(member, e))?;
        Ok(Value::from_variant(result))
    }

    /// Write a property.
    pub fn set(&self, member: &str, value: impl Into<Value>) -> Result<()> {
        let value = value.into();
        let handle = self.live_handle(member)?;
        process_log(
            module_path!(),
            LogMessage::PropertySet,
            vec![
                MessageArg::new("name", member),
                MessageArg::new("value", value.to_string()),
            ],
        );
        let variant = value.to_variant()?;
        handle
            .set(member, variant)
            .map_err(|e| self.external_error(member, e))
    }

    /// Call a method. Returned references come back wrapped.
    pub fn invoke(&self, member: &str, args: &[Value]) -> Result<Value> {
        let args = args
            .iter()
            .map(Value::to_variant)
            .collect::<Result<Vec<_>>>()?;
        self.invoke_raw(member, &args)
    }

    /// Call a method with arguments already in the external call convention.
    pub fn invoke_raw(&self, member: &str, args: &[Variant]) -> Result<Value> {
        let handle = self.live_handle(member)?;
        process_log(
            module_path!(),
            LogMessage::FunctionCall,
            vec![MessageArg::new("name", member)],
        );
        let result = handle
            .invoke(member, args)
            .map_err(|e| self.external_error(member, e))?;
        Ok(Value::from_variant(result))
    }

    /// The interop handle copied onto this wrapper, if any.
    pub fn internal_handle(&self) -> Option<InteropHandle> {
        self.inner.interop.get()
    }

    /// Assign the wrapper's own handle slot. Never forwarded, never validated.
    pub fn set_internal_handle(&self, handle: Option<InteropHandle>) {
        self.inner.interop.set(handle);
    }

    /// Copy the object's interop handle published under `source` onto this
    /// wrapper. Does nothing when the object publishes none.
    pub fn expose_internal_handle(&self, source: &str) -> HintOutcome {
        if !self.is_live() {
            return HintOutcome::NotApplicable;
        }
        match self.inner.handle.interop_handle(source) {
            Some(handle) => {
                self.set_internal_handle(Some(handle));
                HintOutcome::Applied
            }
            None => HintOutcome::NotApplicable,
        }
    }

    /// Ask the interop layer to treat `method` as callable.
    pub fn flag_as_method(&self, method: &str) -> HintOutcome {
        if !self.is_live() {
            return HintOutcome::NotApplicable;
        }
        match self.inner.handle.flag_as_method(method) {
            Ok(()) => HintOutcome::Applied,
            Err(ExternalError::Unsupported | ExternalError::MemberNotFound) => {
                HintOutcome::NotApplicable
            }
            Err(ExternalError::Released) => {
                self.invalidate();
                HintOutcome::NotApplicable
            }
            Err(ExternalError::Failed(detail)) => HintOutcome::Failed(detail),
        }
    }

    fn live_handle(&self, member: &str) -> Result<&ExternalRef> {
        if self.is_live() {
            Ok(&self.inner.handle)
        } else {
            Err(error::attribute_error(
                self.interface_name(),
                member,
                ExternalError::Released,
            ))
        }
    }

    fn external_error(&self, member: &str, err: ExternalError) -> error::Error {
        if err == ExternalError::Released {
            self.invalidate();
        }
        error::attribute_error(self.interface_name(), member, err)
    }

    fn identity(&self) -> *const () {
        Rc::as_ptr(&self.inner.handle) as *const ()
    }
}

impl PartialEq for SafeProxy {
    fn eq(&self, other: &Self) -> bool {
        self.identity() == other.identity()
    }
}

impl Eq for SafeProxy {}

impl Hash for SafeProxy {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.identity().hash(state);
    }
}

impl fmt::Debug for SafeProxy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SafeProxy")
            .field("interface", &self.interface_name())
            .field("state", &self.inner.state.get())
            .finish()
    }
}

/// Copy the interop handle published under `source_attribute` onto `wrapper`.
pub fn expose_internal_handle(wrapper: &SafeProxy, source_attribute: &str) -> HintOutcome {
    wrapper.expose_internal_handle(source_attribute)
}

/// Hint that `method_name` on `target` is a method.
pub fn flag_as_method(target: &SafeProxy, method_name: &str) -> HintOutcome {
    target.flag_as_method(method_name)
}

/// A typed wrapper class built on a proxy (a vector, an entity list, ...).
pub trait Wrapped {
    /// Interface name the wrapped object must expose.
    const INTERFACE: &'static str;

    fn proxy(&self) -> &SafeProxy;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::i18n;
    use serial_test::serial;
    use std::cell::RefCell;
    use std::collections::{HashMap, HashSet};

    /// Property bag with a fixed member list.
    struct MockObject {
        interface: &'static str,
        members: RefCell<HashMap<String, Variant>>,
        alive: Cell<bool>,
        flag_result: std::result::Result<(), ExternalError>,
    }

    impl MockObject {
        fn new(interface: &'static str, members: &[(&str, Variant)]) -> Rc<Self> {
            Rc::new(Self {
                interface,
                members: RefCell::new(
                    members
                        .iter()
                        .map(|(k, v)| (k.to_string(), v.clone()))
                        .collect(),
                ),
                alive: Cell::new(true),
                flag_result: Ok(()),
            })
        }
    }

    impl ExternalObject for MockObject {
        fn interface_name(&self) -> &str {
            self.interface
        }

        fn get(&self, member: &str) -> std::result::Result<Variant, ExternalError> {
            self.members
                .borrow()
                .get(member)
                .cloned()
                .ok_or(ExternalError::MemberNotFound)
        }

        fn set(&self, member: &str, value: Variant) -> std::result::Result<(), ExternalError> {
            let mut members = self.members.borrow_mut();
            match members.get_mut(member) {
                Some(slot) => {
                    *slot = value;
                    Ok(())
                }
                None => Err(ExternalError::MemberNotFound),
            }
        }

        fn invoke(&self, member: &str, args: &[Variant]) -> std::result::Result<Variant, ExternalError> {
            match member {
                "Echo" => Ok(args.first().cloned().unwrap_or(Variant::Empty)),
                "Close" => Err(ExternalError::Released),
                "Fail" => Err(ExternalError::Failed("HRESULT 0x80020009".into())),
                _ => Err(ExternalError::MemberNotFound),
            }
        }

        fn is_alive(&self) -> bool {
            self.alive.get()
        }

        fn interop_handle(&self, source: &str) -> Option<InteropHandle> {
            (source == "_oleobj_").then_some(InteropHandle(0xBEEF))
        }

        fn flag_as_method(&self, _member: &str) -> std::result::Result<(), ExternalError> {
            self.flag_result.clone()
        }
    }

    fn vector() -> Rc<MockObject> {
        MockObject::new("IVector", &[("X", Variant::Float(1.0)), ("Y", Variant::Float(2.0))])
    }

    // ==================== Forwarding Tests ====================

    #[test]
    #[serial]
    fn test_get_and_set_forward() {
        i18n::reset();
        let proxy = SafeProxy::wrap(vector() as ExternalRef);

        assert_eq!(proxy.get("X").expect("Should read X"), Value::Float(1.0));
        proxy.set("X", 4.5).expect("Should write X");
        assert_eq!(proxy.get("X").expect("Should read X"), Value::Float(4.5));
    }

    #[test]
    #[serial]
    fn test_missing_member_is_attribute_missing() {
        i18n::reset();
        let proxy = SafeProxy::wrap(vector() as ExternalRef);

        let err = proxy.get("W").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::AttributeMissing);
        assert_eq!(err.to_string(), "Invalid: W is not a member of IVector");

        let err = proxy.set("W", 1).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::AttributeMissing);

        let err = proxy.invoke("Nope", &[]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::AttributeMissing);
    }

    #[test]
    #[serial]
    fn test_interop_failure_is_attribute_missing() {
        i18n::reset();
        let proxy = SafeProxy::wrap(vector() as ExternalRef);
        let err = proxy.invoke("Fail", &[]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::AttributeMissing);
        assert!(err.to_string().contains("HRESULT 0x80020009"));
        assert!(proxy.is_live());
    }

    #[test]
    #[serial]
    fn test_invoke_wraps_returned_reference() {
        i18n::reset();
        let inner: ExternalRef = vector();
        let outer = SafeProxy::wrap(vector() as ExternalRef);

        let result = outer
            .invoke_raw("Echo", &[Variant::Dispatch(inner.clone())])
            .expect("Should echo");
        let returned = result.as_proxy().expect("Should be wrapped");
        assert_eq!(*returned, SafeProxy::wrap(inner));
        assert_eq!(returned.get("Y").expect("Should read Y"), Value::Float(2.0));
    }

    #[test]
    #[serial]
    fn test_invoke_unwraps_proxy_arguments() {
        i18n::reset();
        let inner = SafeProxy::wrap(vector() as ExternalRef);
        let outer = SafeProxy::wrap(vector() as ExternalRef);

        let result = outer
            .invoke("Echo", &[Value::Object(inner.clone())])
            .expect("Should echo");
        assert_eq!(result, Value::Object(inner));
    }

    // ==================== Identity Tests ====================

    #[test]
    fn test_wrapping_same_reference_twice_is_equal() {
        let raw: ExternalRef = vector();
        let a = SafeProxy::wrap(raw.clone());
        let b = SafeProxy::wrap(raw);

        assert_eq!(a, b);
        assert!(!a.same_wrapper(&b));

        let set: HashSet<SafeProxy> = [a, b].into_iter().collect();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_wrap_is_idempotent() {
        let proxy = SafeProxy::wrap(vector() as ExternalRef);
        let again = SafeProxy::wrap(&proxy);
        assert!(again.same_wrapper(&proxy));
        assert!(SafeProxy::wrap(again).same_wrapper(&proxy));
    }

    #[test]
    fn test_different_references_are_not_equal() {
        let a = SafeProxy::wrap(vector() as ExternalRef);
        let b = SafeProxy::wrap(vector() as ExternalRef);
        assert_ne!(a, b);
    }

    // ==================== Lifecycle Tests ====================

    #[test]
    #[serial]
    fn test_released_object_invalidates_proxy() {
        i18n::reset();
        let raw = vector();
        let proxy = SafeProxy::wrap(raw.clone() as ExternalRef);
        assert_eq!(proxy.state(), ProxyState::Live);

        raw.alive.set(false);
        assert_eq!(proxy.state(), ProxyState::Invalidated);

        let err = proxy.get("X").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::AttributeMissing);
        assert!(err.to_string().contains("released"));

        // Terminal, even if the object claims to be back
        raw.alive.set(true);
        assert_eq!(proxy.state(), ProxyState::Invalidated);
    }

    #[test]
    #[serial]
    fn test_released_error_invalidates_proxy() {
        i18n::reset();
        let proxy = SafeProxy::wrap(vector() as ExternalRef);
        assert!(proxy.invoke("Close", &[]).is_err());
        assert_eq!(proxy.state(), ProxyState::Invalidated);
        assert!(proxy.raw().is_err());
    }

    #[test]
    #[serial]
    fn test_invalidated_argument_is_rejected() {
        i18n::reset();
        let arg = SafeProxy::wrap(vector() as ExternalRef);
        arg.invalidate();
        let outer = SafeProxy::wrap(vector() as ExternalRef);
        let err = outer.invoke("Echo", &[Value::Object(arg)]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::AttributeMissing);
    }

    // ==================== Hint Tests ====================

    #[test]
    fn test_expose_internal_handle() {
        let proxy = SafeProxy::wrap(vector() as ExternalRef);
        assert_eq!(expose_internal_handle(&proxy, "missing"), HintOutcome::NotApplicable);
        assert_eq!(proxy.internal_handle(), None);

        assert!(expose_internal_handle(&proxy, "_oleobj_").is_applied());
        assert_eq!(proxy.internal_handle(), Some(InteropHandle(0xBEEF)));
    }

    #[test]
    fn test_internal_handle_slot_is_not_forwarded() {
        let raw = vector();
        let proxy = SafeProxy::wrap(raw.clone() as ExternalRef);
        proxy.invalidate();
        proxy.set_internal_handle(Some(InteropHandle(1)));
        assert_eq!(proxy.internal_handle(), Some(InteropHandle(1)));
        assert_eq!(raw.members.borrow().len(), 2);
    }

    #[test]
    fn test_flag_as_method_outcomes() {
        let proxy = SafeProxy::wrap(vector() as ExternalRef);
        assert_eq!(flag_as_method(&proxy, "Echo"), HintOutcome::Applied);

        let unsupported = Rc::new(MockObject {
            flag_result: Err(ExternalError::Unsupported),
            ..Rc::try_unwrap(vector()).ok().unwrap()
        });
        let proxy = SafeProxy::wrap(unsupported as ExternalRef);
        assert_eq!(proxy.flag_as_method("Echo"), HintOutcome::NotApplicable);

        let failing = Rc::new(MockObject {
            flag_result: Err(ExternalError::Failed("boom".into())),
            ..Rc::try_unwrap(vector()).ok().unwrap()
        });
        let proxy = SafeProxy::wrap(failing as ExternalRef);
        assert_eq!(proxy.flag_as_method("Echo"), HintOutcome::Failed("boom".into()));
    }
}
