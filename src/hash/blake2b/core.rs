//! BLAKE2b compression function and one-shot entry point.
//!
//! This module implements the core logic of the BLAKE2b cryptographic hash
//! function as defined in RFC 7693.
//!
//! It provides:
//! - the compression function operating on 128-byte blocks
//! - a complete one-shot BLAKE2b hashing function for arbitrary-length input
//!
//! The implementation is designed to be minimal, explicit, and suitable
//! for use as a low-level primitive within the Nebula ecosystem.

use crate::hash::blake2b::computations::all_rounds;
use crate::hash::blake2b::hasher::Blake2bHasher;
use crate::hash::blake2b::IV;
use crate::hash::error::Blake2Error;

/// Compresses a single 128-byte message block, updating the chaining
/// value `h` in place.
///
/// # Parameters
/// - `h`: the current chaining value (8 × 64-bit words)
/// - `block`: a 1024-bit (128-byte) message block
/// - `t`: total number of bytes committed to the hash so far, including
///   this block
/// - `is_final`: whether this is the last block of the message
///
/// # Notes
/// - Message words are interpreted as little-endian, as required by
///   BLAKE2b.
pub fn compress(h: &mut [u64; 8], block: &[u8; 128], t: u128, is_final: bool) {
    let mut v = [0u64; 16];
    v[..8].copy_from_slice(h);
    v[8..].copy_from_slice(&IV);

    v[12] ^= t as u64;
    v[13] ^= (t >> 64) as u64;

    if is_final {
        v[14] ^= !0u64;
    }

    let mut m = [0u64; 16];
    for (slot, chunk) in m.iter_mut().zip(block.chunks_exact(8)) {
        *slot = u64::from_le_bytes(chunk.try_into().unwrap());
    }

    all_rounds(&mut v, &m);

    for i in 0..8 {
        h[i] ^= v[i] ^ v[i + 8];
    }
}

/// Computes the BLAKE2b hash of `input` in one call.
///
/// Equivalent to constructing a [`Blake2bHasher`], feeding it `input`, and
/// finalizing it.
///
/// # Parameters
/// - `input`: arbitrary-length input message
/// - `digest_size`: output size in bytes, 1..=64
/// - `key`: optional key for keyed hashing (MAC), at most 64 bytes
/// - `salt`: optional salt, at most 16 bytes
/// - `person`: optional personalization tag, at most 16 bytes
///
/// # Errors
/// Returns [`Blake2Error::ParameterRange`] if any parameter is out of
/// bounds.
pub fn blake2b(
    input: &[u8],
    digest_size: usize,
    key: &[u8],
    salt: &[u8],
    person: &[u8],
) -> Result<Vec<u8>, Blake2Error> {
    let mut hasher = Blake2bHasher::new(digest_size, key, salt, person)?;
    hasher.update(input)?;
    Ok(hasher.finalize().to_vec())
}
