//! End-to-end coverage of the natural-number builtins through the
//! dispatch table, the way the interpreter reaches them.

use num_bigint::BigUint;
use quill_vm::builtins::builtins;
use quill_vm::error::VmError;
use quill_vm::nat::{mk_nat, mk_nat_big, try_to_u64, MAX_SMALL_NAT};
use quill_vm::values::Value;

/// Helper: dispatch a builtin that must succeed.
fn call(name: &str, args: &[Value]) -> Value {
    builtins().call(name, args).expect("builtin should dispatch")
}

fn nat(n: u64) -> Value {
    mk_nat(n)
}

/// A canonically big natural: threshold + offset.
fn big_nat(offset: u64) -> Value {
    mk_nat_big(BigUint::from(MAX_SMALL_NAT) + BigUint::from(offset))
}

#[test]
fn arithmetic_scenarios() {
    assert_eq!(call("nat.add", &[nat(5), nat(7)]), nat(12));
    assert_eq!(call("nat.sub", &[nat(3), nat(9)]), nat(0));
    assert_eq!(call("nat.div", &[nat(10), nat(0)]), nat(0));
    assert_eq!(call("nat.mod", &[nat(10), nat(0)]), nat(10));
    assert_eq!(call("nat.succ", &[nat(41)]), nat(42));
    assert_eq!(call("nat.gcd", &[nat(54), nat(24)]), nat(6));
}

#[test]
fn mul_promotes_past_the_threshold() {
    let product = call("nat.mul", &[nat(MAX_SMALL_NAT - 1), nat(2)]);
    assert!(!product.is_simple());
    assert_eq!(
        product,
        mk_nat_big(BigUint::from(MAX_SMALL_NAT - 1) * BigUint::from(2u32))
    );
}

#[test]
fn results_stay_canonical_across_the_threshold() {
    // Promotion on the way up.
    let up = call("nat.add", &[nat(MAX_SMALL_NAT - 1), nat(1)]);
    assert!(!up.is_simple());
    // Demotion on the way back down.
    let down = call("nat.sub", &[up.clone(), nat(1)]);
    assert_eq!(down, nat(MAX_SMALL_NAT - 1));
    assert_eq!(call("nat.div", &[up.clone(), up.clone()]), nat(1));
    assert_eq!(call("nat.mod", &[big_nat(3), up]), nat(3));
}

#[test]
fn comparisons_cross_representations() {
    assert_eq!(call("nat.dec_eq", &[nat(7), nat(7)]), Value::Bool(true));
    assert_eq!(call("nat.dec_eq", &[nat(7), big_nat(0)]), Value::Bool(false));
    assert_eq!(call("nat.dec_le", &[nat(7), big_nat(0)]), Value::Bool(true));
    assert_eq!(call("nat.dec_lt", &[big_nat(0), big_nat(1)]), Value::Bool(true));
    assert_eq!(call("nat.dec_lt", &[big_nat(1), big_nat(1)]), Value::Bool(false));
}

#[test]
fn to_string_matches_decimal_rendering() {
    assert_eq!(call("nat.to_string", &[nat(0)]), Value::String("0".into()));
    let expected = (BigUint::from(MAX_SMALL_NAT) + BigUint::from(5u32)).to_string();
    assert_eq!(call("nat.to_string", &[big_nat(5)]), Value::String(expected));
}

#[test]
fn repeat_folds_an_accumulator() {
    let step = Value::closure("sum", |mut args| {
        let acc = args.pop().unwrap();
        let i = args.pop().unwrap();
        builtins().call("nat.add", &[i, acc]).unwrap()
    });
    // 0 + 1 + 2 + 3 + 4 == 10
    let r = call("nat.repeat", &[nat(0), step.clone(), nat(5), nat(0)]);
    assert_eq!(r, nat(10));
    // Zero iterations leave the accumulator untouched.
    let r = call("nat.repeat", &[nat(0), step, nat(0), nat(99)]);
    assert_eq!(r, nat(99));
}

#[test]
fn repeat_passes_canonical_indices() {
    let step = Value::closure("check", |mut args| {
        let acc = args.pop().unwrap();
        let i = args.pop().unwrap();
        assert!(i.is_simple(), "small indices must arrive inline");
        builtins().call("nat.succ", &[acc]).unwrap()
    });
    let r = call("nat.repeat", &[nat(0), step, nat(4), nat(0)]);
    assert_eq!(r, nat(4));
}

#[test]
fn machine_width_conversion_is_checked() {
    assert_eq!(try_to_u64(&nat(17)), Some(17));
    assert_eq!(try_to_u64(&big_nat(2)), Some(MAX_SMALL_NAT + 2));
    let huge = mk_nat_big(BigUint::from(u64::MAX) * BigUint::from(u64::MAX));
    assert_eq!(try_to_u64(&huge), None);
}

#[test]
fn recursor_and_no_confusion_have_no_runtime_body() {
    for (name, arity) in [("nat.cases_on", 4), ("nat.rec_on", 4), ("nat.no_confusion", 5)] {
        let args = vec![nat(0); arity];
        assert_eq!(
            builtins().call(name, &args),
            Err(VmError::CompilerSubstituted(name.to_string()))
        );
    }
}
