//! Natural-number builtins.
//!
//! Naturals are unbounded non-negative integers with a dual representation:
//! magnitudes below [`MAX_SMALL_NAT`] live inline as [`Value::Simple`],
//! everything else as an owned `BigUint` in [`Value::Big`]. Every
//! constructor canonicalizes, so the tag alone decides which variant a
//! given magnitude uses and equality never needs a cross-variant compare.
//!
//! The arithmetic here is total by design: subtraction saturates at zero,
//! division by zero is zero, and `x mod 0` is `x`. Compiled proof code
//! relies on these conventions, so they must never be turned into errors.

use crate::values::{invoke, Value};
use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::{ToPrimitive, Zero};
use std::borrow::Cow;

/// Exclusive upper bound for the inline representation.
///
/// Two bits of headroom below `u64::MAX` keep the inline fast paths simple:
/// the sum of two inline operands can never overflow a `u64`, and the
/// interpreter's tagged encoding has room for its tag bits.
pub const MAX_SMALL_NAT: u64 = 1 << 62;

/// Build a natural from a machine integer, choosing the canonical variant.
pub fn mk_nat(n: u64) -> Value {
    if n < MAX_SMALL_NAT {
        Value::Simple(n)
    } else {
        Value::Big(BigUint::from(n))
    }
}

/// Build a natural from a `BigUint`, demoting to the inline variant
/// whenever the magnitude fits below the threshold.
pub fn mk_nat_big(b: BigUint) -> Value {
    match b.to_u64() {
        Some(n) if n < MAX_SMALL_NAT => Value::Simple(n),
        _ => Value::Big(b),
    }
}

/// View either natural variant as a `BigUint` without touching the
/// original value. Inline operands get a per-call temporary; big operands
/// are borrowed in place.
fn to_big(v: &Value) -> Cow<'_, BigUint> {
    match v {
        Value::Simple(n) => Cow::Owned(BigUint::from(*n)),
        Value::Big(b) => Cow::Borrowed(b),
        other => panic!("nat builtin applied to a {} value", other.type_name()),
    }
}

/// Read a natural already known to fit machine width.
pub fn to_u64(v: &Value) -> u64 {
    match try_to_u64(v) {
        Some(n) => n,
        None => panic!("natural does not fit in a machine word"),
    }
}

/// Read a natural as a machine integer, or `None` when it does not fit.
/// Never truncates.
pub fn try_to_u64(v: &Value) -> Option<u64> {
    match v {
        Value::Simple(n) => Some(*n),
        Value::Big(b) => b.to_u64(),
        other => panic!("nat builtin applied to a {} value", other.type_name()),
    }
}

pub fn nat_succ(a: &Value) -> Value {
    match a {
        Value::Simple(n) => mk_nat(n + 1),
        _ => mk_nat_big(to_big(a).into_owned() + 1u32),
    }
}

pub fn nat_add(a: &Value, b: &Value) -> Value {
    match (a, b) {
        (Value::Simple(x), Value::Simple(y)) => mk_nat(x + y),
        _ => {
            let (x, y) = (to_big(a), to_big(b));
            mk_nat_big(x.as_ref() + y.as_ref())
        }
    }
}

pub fn nat_mul(a: &Value, b: &Value) -> Value {
    // The inline product is checked in a double-width accumulator before
    // any truncation; a wrapping 64-bit multiply would corrupt the result.
    if let (Value::Simple(x), Value::Simple(y)) = (a, b) {
        let wide = u128::from(*x) * u128::from(*y);
        if wide < u128::from(MAX_SMALL_NAT) {
            return Value::Simple(wide as u64);
        }
    }
    let (x, y) = (to_big(a), to_big(b));
    mk_nat_big(x.as_ref() * y.as_ref())
}

/// Truncated subtraction: naturals have no negative values, so `a - b`
/// is zero whenever `b > a`.
pub fn nat_sub(a: &Value, b: &Value) -> Value {
    match (a, b) {
        (Value::Simple(x), Value::Simple(y)) => {
            if y > x {
                Value::Simple(0)
            } else {
                Value::Simple(x - y)
            }
        }
        _ => {
            let (x, y) = (to_big(a), to_big(b));
            if y.as_ref() > x.as_ref() {
                Value::Simple(0)
            } else {
                mk_nat_big(x.as_ref() - y.as_ref())
            }
        }
    }
}

/// Total division: `a / 0` is defined as 0.
pub fn nat_div(a: &Value, b: &Value) -> Value {
    match (a, b) {
        (Value::Simple(x), Value::Simple(y)) => {
            if *y == 0 {
                Value::Simple(0)
            } else {
                Value::Simple(x / y)
            }
        }
        _ => {
            let (x, y) = (to_big(a), to_big(b));
            if y.is_zero() {
                Value::Simple(0)
            } else {
                mk_nat_big(x.as_ref() / y.as_ref())
            }
        }
    }
}

/// Total modulo: `a mod 0` is the dividend unchanged, which keeps the
/// identity `div(a,b)*b + mod(a,b) == a` at `b == 0`.
pub fn nat_mod(a: &Value, b: &Value) -> Value {
    match (a, b) {
        (Value::Simple(x), Value::Simple(y)) => {
            if *y == 0 {
                Value::Simple(*x)
            } else {
                Value::Simple(x % y)
            }
        }
        _ => {
            let (x, y) = (to_big(a), to_big(b));
            if y.is_zero() {
                a.clone()
            } else {
                mk_nat_big(x.as_ref() % y.as_ref())
            }
        }
    }
}

pub fn nat_gcd(a: &Value, b: &Value) -> Value {
    let (x, y) = (to_big(a), to_big(b));
    mk_nat_big(x.as_ref().gcd(y.as_ref()))
}

pub fn nat_dec_eq(a: &Value, b: &Value) -> Value {
    match (a, b) {
        (Value::Simple(x), Value::Simple(y)) => Value::Bool(x == y),
        _ => {
            let (x, y) = (to_big(a), to_big(b));
            Value::Bool(x.as_ref() == y.as_ref())
        }
    }
}

pub fn nat_dec_le(a: &Value, b: &Value) -> Value {
    match (a, b) {
        (Value::Simple(x), Value::Simple(y)) => Value::Bool(x <= y),
        _ => {
            let (x, y) = (to_big(a), to_big(b));
            Value::Bool(x.as_ref() <= y.as_ref())
        }
    }
}

pub fn nat_dec_lt(a: &Value, b: &Value) -> Value {
    match (a, b) {
        (Value::Simple(x), Value::Simple(y)) => Value::Bool(x < y),
        _ => {
            let (x, y) = (to_big(a), to_big(b));
            Value::Bool(x.as_ref() < y.as_ref())
        }
    }
}

/// Render the exact decimal digits of a natural ("0" for zero).
pub fn nat_to_string(a: &Value) -> Value {
    match a {
        Value::Simple(n) => Value::String(n.to_string()),
        Value::Big(b) => Value::String(b.to_string()),
        other => panic!("nat builtin applied to a {} value", other.type_name()),
    }
}

/// Bounded fold: apply `acc = step(i, acc)` for `i` in `0..count`.
///
/// The first argument is the type witness the compiler passes for the
/// accumulator's type; it is erased at runtime. A count that needs the big
/// representation is walked with a `BigUint` counter, and the index is
/// re-canonicalized on every call so `step` sees the same values either
/// way.
pub fn nat_repeat(_ty: &Value, step: &Value, count: &Value, init: Value) -> Value {
    match count {
        Value::Simple(n) => {
            let mut acc = init;
            for i in 0..*n {
                acc = invoke(step, vec![Value::Simple(i), acc]);
            }
            acc
        }
        _ => {
            let count = to_big(count);
            let mut i = BigUint::zero();
            let mut acc = init;
            while i < *count {
                acc = invoke(step, vec![mk_nat_big(i.clone()), acc]);
                i += 1u32;
            }
            acc
        }
    }
}
