//! BLAKE2 cryptographic hash functions, implemented from scratch.
//!
//! This crate provides the BLAKE2 hash family (RFC 7693) as a low-level
//! building block: BLAKE2b and BLAKE2s, each with a one-shot entry point
//! and an incremental (streaming) hasher, supporting keyed hashing (MAC),
//! salting, and personalization.
//!
//! The focus is on **clarity, predictability, and auditability**, rather
//! than on providing a large or high-level cryptographic API. The
//! implementation is dependency-free, explicit in its semantics, and
//! suitable for security-critical code.
//!
//! # Module overview
//!
//! - `hash`
//!   The BLAKE2b and BLAKE2s compression engines, their parameter-block
//!   construction, their streaming hashers, and a constant-time digest
//!   verification helper.
//!
//! # Design goals
//!
//! - No heap allocations beyond the output digest buffer
//! - Minimal and explicit APIs
//! - Stable, well-defined semantics matching RFC 7693 byte-for-byte
//! - No tree-mode hashing, XOF mode, or parallel BLAKE2bp/BLAKE2sp variants
//!
//! This crate is not intended to replace full-featured, externally audited
//! cryptographic libraries, but to serve as a small, controlled foundation
//! for applications that need BLAKE2 without pulling in a larger dependency.

pub mod hash;
