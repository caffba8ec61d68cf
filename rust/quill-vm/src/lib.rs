//! Quill VM — natural-number primitives for the Quill virtual machine.
//!
//! Naturals are exact and unbounded, with a small-value fast path: anything
//! below `nat::MAX_SMALL_NAT` is carried inline, everything else in an
//! owned `BigUint`, and every constructor keeps the two variants canonical.

pub mod builtins;
pub mod error;
pub mod nat;
pub mod values;
