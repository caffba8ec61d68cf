//! Errors surfaced at the builtin dispatch boundary.
//!
//! The natural-number operations themselves are total and never fail; the
//! only failure modes live in dispatch, and every one of them indicates a
//! malformed or mis-compiled program rather than a user-facing condition.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum VmError {
    #[error("unknown builtin: {0}")]
    UnknownBuiltin(String),
    #[error("builtin {name} expects {expected} arguments, got {got}")]
    ArityMismatch { name: String, expected: usize, got: usize },
    /// The compiler emits specialized code for this builtin at every call
    /// site; reaching the registered stub means the program was
    /// mis-compiled. Fatal, not recoverable.
    #[error("builtin {0} has no runtime body; it is generated by the compiler at each call site")]
    CompilerSubstituted(String),
}
