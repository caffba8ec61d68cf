//! Builtin registration and dispatch for the natural-number primitives.
//!
//! The interpreter resolves a dotted name like `nat.add` against this table
//! and calls through [`BuiltinTable::call`]. Two families of entries carry
//! no body at all: the structural recursor (`nat.cases_on` / `nat.rec_on`)
//! and the no-confusion operations are generated by the compiler at each
//! call site, and their registrations exist only to reserve the name and
//! arity. Dispatching one is fatal.

use crate::error::VmError;
use crate::nat::*;
use crate::values::Value;
use once_cell::sync::Lazy;
use std::collections::HashMap;

type NativeBody = fn(&[Value]) -> Value;

/// How a registered builtin is implemented.
#[derive(Clone, Copy)]
pub enum BuiltinImpl {
    Native(NativeBody),
    /// Registered name/arity only; the body is substituted by the compiler.
    CompilerSubstituted,
}

#[derive(Clone, Copy)]
pub struct Builtin {
    pub arity: usize,
    pub body: BuiltinImpl,
}

#[derive(Default)]
pub struct BuiltinTable {
    entries: HashMap<&'static str, Builtin>,
}

impl BuiltinTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, name: &'static str, arity: usize, body: NativeBody) {
        self.entries.insert(name, Builtin { arity, body: BuiltinImpl::Native(body) });
    }

    pub fn register_deferred(&mut self, name: &'static str, arity: usize) {
        self.entries.insert(name, Builtin { arity, body: BuiltinImpl::CompilerSubstituted });
    }

    pub fn get(&self, name: &str) -> Option<&Builtin> {
        self.entries.get(name)
    }

    /// True when the name is registered but its body is supplied by the
    /// compiler rather than this table. Lets tooling verify that every
    /// registered name is either implemented or deliberately deferred.
    pub fn is_deferred(&self, name: &str) -> bool {
        matches!(self.get(name), Some(Builtin { body: BuiltinImpl::CompilerSubstituted, .. }))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &Builtin)> {
        self.entries.iter().map(|(name, b)| (*name, b))
    }

    /// Dispatch a builtin by name, checking arity before the body runs.
    pub fn call(&self, name: &str, args: &[Value]) -> Result<Value, VmError> {
        let builtin = self
            .get(name)
            .ok_or_else(|| VmError::UnknownBuiltin(name.to_string()))?;
        if args.len() != builtin.arity {
            return Err(VmError::ArityMismatch {
                name: name.to_string(),
                expected: builtin.arity,
                got: args.len(),
            });
        }
        match builtin.body {
            BuiltinImpl::Native(body) => Ok(body(args)),
            BuiltinImpl::CompilerSubstituted => {
                Err(VmError::CompilerSubstituted(name.to_string()))
            }
        }
    }
}

fn bi_succ(args: &[Value]) -> Value {
    nat_succ(&args[0])
}

fn bi_add(args: &[Value]) -> Value {
    nat_add(&args[0], &args[1])
}

fn bi_mul(args: &[Value]) -> Value {
    nat_mul(&args[0], &args[1])
}

fn bi_sub(args: &[Value]) -> Value {
    nat_sub(&args[0], &args[1])
}

fn bi_div(args: &[Value]) -> Value {
    nat_div(&args[0], &args[1])
}

fn bi_mod(args: &[Value]) -> Value {
    nat_mod(&args[0], &args[1])
}

fn bi_gcd(args: &[Value]) -> Value {
    nat_gcd(&args[0], &args[1])
}

fn bi_dec_eq(args: &[Value]) -> Value {
    nat_dec_eq(&args[0], &args[1])
}

fn bi_dec_le(args: &[Value]) -> Value {
    nat_dec_le(&args[0], &args[1])
}

fn bi_dec_lt(args: &[Value]) -> Value {
    nat_dec_lt(&args[0], &args[1])
}

fn bi_to_string(args: &[Value]) -> Value {
    nat_to_string(&args[0])
}

fn bi_repeat(args: &[Value]) -> Value {
    nat_repeat(&args[0], &args[1], &args[2], args[3].clone())
}

/// Register every natural-number builtin into `table`.
pub fn register_nat_builtins(table: &mut BuiltinTable) {
    table.register("nat.succ", 1, bi_succ);
    table.register("nat.add", 2, bi_add);
    table.register("nat.mul", 2, bi_mul);
    table.register("nat.sub", 2, bi_sub);
    table.register("nat.div", 2, bi_div);
    table.register("nat.mod", 2, bi_mod);
    table.register("nat.gcd", 2, bi_gcd);
    table.register("nat.dec_eq", 2, bi_dec_eq);
    table.register("nat.dec_le", 2, bi_dec_le);
    table.register("nat.dec_lt", 2, bi_dec_lt);
    table.register("nat.to_string", 1, bi_to_string);
    table.register("nat.repeat", 4, bi_repeat);

    table.register_deferred("nat.cases_on", 4);
    table.register_deferred("nat.rec_on", 4);
    table.register_deferred("nat.no_confusion", 5);
    table.register_deferred("nat.no_confusion_type", 3);
}

/// Process-wide builtin table, built once on first use.
pub fn builtins() -> &'static BuiltinTable {
    static TABLE: Lazy<BuiltinTable> = Lazy::new(|| {
        let mut table = BuiltinTable::new();
        register_nat_builtins(&mut table);
        table
    });
    &TABLE
}
