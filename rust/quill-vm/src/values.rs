//! Tagged value representation for the Quill VM.
//!
//! A `Value` is either a small immediate (inline scalar, boolean) or a
//! heap-backed payload (big natural, string, closure). The natural-number
//! builtins in [`crate::nat`] rely on the `Simple`/`Big` pair staying
//! canonical: `Simple` holds every magnitude below
//! [`crate::nat::MAX_SMALL_NAT`], `Big` everything at or above it.

use num_bigint::BigUint;
use std::fmt;
use std::rc::Rc;

/// Runtime values in the Quill VM.
#[derive(Debug, Clone)]
pub enum Value {
    /// Inline natural-number scalar, strictly below the small-nat threshold.
    Simple(u64),
    /// Arbitrary-precision natural. Storage is owned exclusively by this
    /// value; constructing a new value always copies, never aliases.
    Big(BigUint),
    Bool(bool),
    String(String),
    Closure(ClosureValue),
}

/// A callable VM function value, as seen by builtins like `nat.repeat`.
///
/// In the full interpreter a closure carries a code pointer and captured
/// environment; at this layer only the invocation surface matters, so the
/// body is an `Rc`'d native function.
#[derive(Clone)]
pub struct ClosureValue {
    pub name: String,
    pub fun: Rc<dyn Fn(Vec<Value>) -> Value>,
}

impl fmt::Debug for ClosureValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClosureValue").field("name", &self.name).finish_non_exhaustive()
    }
}

impl Value {
    /// Wrap a native function as a callable VM value.
    pub fn closure(name: impl Into<String>, fun: impl Fn(Vec<Value>) -> Value + 'static) -> Self {
        Value::Closure(ClosureValue { name: name.into(), fun: Rc::new(fun) })
    }

    pub fn is_simple(&self) -> bool {
        matches!(self, Value::Simple(_))
    }

    pub fn as_simple(&self) -> Option<u64> {
        match self {
            Value::Simple(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_big(&self) -> Option<&BigUint> {
        match self {
            Value::Big(b) => Some(b),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Simple(_) => "nat",
            Value::Big(_) => "nat",
            Value::Bool(_) => "bool",
            Value::String(_) => "string",
            Value::Closure(_) => "closure",
        }
    }
}

/// Invoke a VM function value with the given arguments.
///
/// Panics when `f` is not callable: operand tags are guaranteed by the
/// compiler, so a non-closure here means a mis-compiled program.
pub fn invoke(f: &Value, args: Vec<Value>) -> Value {
    match f {
        Value::Closure(c) => (c.fun)(args),
        other => panic!("cannot invoke a {} value", other.type_name()),
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Simple(n) => write!(f, "{}", n),
            Value::Big(b) => write!(f, "{}", b),
            Value::Bool(b) => write!(f, "{}", b),
            Value::String(s) => write!(f, "{}", s),
            Value::Closure(c) => write!(f, "<closure {}>", c.name),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            // Canonical representation: equal naturals always share a tag,
            // so no cross-variant numeric comparison is needed here.
            (Value::Simple(a), Value::Simple(b)) => a == b,
            (Value::Big(a), Value::Big(b)) => a == b,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Closure(a), Value::Closure(b)) => Rc::ptr_eq(&a.fun, &b.fun),
            _ => false,
        }
    }
}
