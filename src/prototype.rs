// Prototype: objects that inherit behavior by delegating to an ancestor.
//
// Rust has no prototype chain, so the chain is spelled out: every object owns
// its slots and holds an optional shared link to the object it delegates to.
// Lookups walk that link a bounded number of hops.

use crate::error::{PatternError, Result};
use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;
use tracing::trace;

/// Maximum number of ancestor hops a lookup will take by default.
pub const DEFAULT_DEPTH_LIMIT: usize = 32;

#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Number(f64),
    Text(String),
}

impl Value {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Number(n) => write!(f, "{}", n),
            Value::Text(s) => write!(f, "{:?}", s),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

/// An operation receives the object it was invoked on, not the object that
/// defines it, so inherited behavior can read the caller's own fields.
pub type Operation = Rc<dyn Fn(&ProtoObject) -> Value>;

#[derive(Clone)]
pub enum Slot {
    Field(Value),
    Method(Operation),
}

impl fmt::Debug for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Slot::Field(value) => write!(f, "{}", value),
            Slot::Method(_) => write!(f, "[Function]"),
        }
    }
}

pub struct ProtoObject {
    slots: BTreeMap<String, Slot>,
    ancestor: Option<Rc<ProtoObject>>,
}

impl ProtoObject {
    /// An object with no ancestor. Populate it with `with_field`/`with_method`.
    pub fn root() -> Self {
        Self {
            slots: BTreeMap::new(),
            ancestor: None,
        }
    }

    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.slots.insert(name.into(), Slot::Field(value.into()));
        self
    }

    pub fn with_method<F>(mut self, name: impl Into<String>, op: F) -> Self
    where
        F: Fn(&ProtoObject) -> Value + 'static,
    {
        self.slots.insert(name.into(), Slot::Method(Rc::new(op)));
        self
    }

    pub fn into_shared(self) -> Rc<Self> {
        Rc::new(self)
    }

    /// Creates an object whose own fields are exactly `own_fields` and which
    /// delegates every other lookup to `ancestor`.
    ///
    /// The ancestor is fixed here and shared immutably, so a chain can never
    /// loop back on itself.
    pub fn create<I, K, V>(ancestor: Rc<ProtoObject>, own_fields: I) -> Rc<ProtoObject>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        let slots = own_fields
            .into_iter()
            .map(|(k, v)| (k.into(), Slot::Field(v.into())))
            .collect();

        Rc::new(Self {
            slots,
            ancestor: Some(ancestor),
        })
    }

    pub fn ancestor(&self) -> Option<&Rc<ProtoObject>> {
        self.ancestor.as_ref()
    }

    /// Walks this object and then its ancestors looking for `name`.
    fn resolve(&self, name: &str, limit: usize) -> Result<&Slot> {
        let mut current = self;
        let mut hops = 0;

        loop {
            if let Some(slot) = current.slots.get(name) {
                if hops > 0 {
                    trace!(name, hops, "resolved through delegate chain");
                }
                return Ok(slot);
            }

            match current.ancestor.as_deref() {
                Some(next) if hops < limit => {
                    hops += 1;
                    current = next;
                }
                Some(_) => return Err(PatternError::too_deep(name, limit)),
                None => return Err(PatternError::not_found(name)),
            }
        }
    }

    pub fn get(&self, name: &str) -> Result<&Slot> {
        self.resolve(name, DEFAULT_DEPTH_LIMIT)
    }

    pub fn call(&self, name: &str) -> Result<Value> {
        self.call_with_limit(name, DEFAULT_DEPTH_LIMIT)
    }

    pub fn call_with_limit(&self, name: &str, limit: usize) -> Result<Value> {
        match self.resolve(name, limit)? {
            Slot::Method(op) => Ok((**op)(self)),
            Slot::Field(_) => Err(PatternError::not_callable(name)),
        }
    }

    pub fn field(&self, name: &str) -> Result<&Value> {
        self.field_with_limit(name, DEFAULT_DEPTH_LIMIT)
    }

    pub fn field_with_limit(&self, name: &str, limit: usize) -> Result<&Value> {
        match self.resolve(name, limit)? {
            Slot::Field(value) => Ok(value),
            Slot::Method(_) => Err(PatternError::not_a_field(name)),
        }
    }

    /// Names defined directly on this object. Inherited ones are not listed.
    pub fn own_keys(&self) -> impl Iterator<Item = &str> {
        self.slots.keys().map(String::as_str)
    }

    pub fn has_own(&self, name: &str) -> bool {
        self.slots.contains_key(name)
    }

    pub fn has(&self, name: &str) -> bool {
        self.get(name).is_ok()
    }
}

// Only own slots are shown; inherited operations stay invisible but callable.
impl fmt::Debug for ProtoObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.slots.iter()).finish()
    }
}

/// The immediate ancestor of `obj`, if it has one.
pub fn get_prototype_of(obj: &ProtoObject) -> Option<&Rc<ProtoObject>> {
    obj.ancestor()
}
