//! Hash algorithms exposed by the crate.
//!
//! Implements the BLAKE2 hash family (RFC 7693): BLAKE2b, the 64-bit-word
//! variant producing 1..=64-byte digests, and BLAKE2s, the 32-bit-word
//! variant producing 1..=32-byte digests. Both support keyed hashing (MAC),
//! salting, and personalization.

pub mod blake2b;
pub mod blake2s;
pub mod error;
pub mod verify;

pub use blake2b::{blake2b, Blake2bHasher};
pub use blake2s::{blake2s, Blake2sHasher};
pub use error::Blake2Error;
pub use verify::{digests_match, hex_digests_match};
