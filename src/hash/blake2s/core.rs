//! BLAKE2s compression function and one-shot entry point.
//!
//! This module implements the core logic of the BLAKE2s cryptographic hash
//! function as defined in RFC 7693.
//!
//! It provides:
//! - the compression function operating on 64-byte blocks
//! - a complete one-shot BLAKE2s hashing function for arbitrary-length input

use crate::hash::blake2s::computations::all_rounds;
use crate::hash::blake2s::hasher::Blake2sHasher;
use crate::hash::blake2s::IV;
use crate::hash::error::Blake2Error;

/// Compresses a single 64-byte message block, updating the chaining
/// value `h` in place.
///
/// # Parameters
/// - `h`: the current chaining value (8 × 32-bit words)
/// - `block`: a 512-bit (64-byte) message block
/// - `t`: total number of bytes committed to the hash so far, including
///   this block
/// - `is_final`: whether this is the last block of the message
///
/// # Notes
/// - Message words are interpreted as little-endian, as required by
///   BLAKE2s.
pub fn compress(h: &mut [u32; 8], block: &[u8; 64], t: u64, is_final: bool) {
    let mut v = [0u32; 16];
    v[..8].copy_from_slice(h);
    v[8..].copy_from_slice(&IV);

    v[12] ^= t as u32;
    v[13] ^= (t >> 32) as u32;

    if is_final {
        v[14] ^= !0u32;
    }

    let mut m = [0u32; 16];
    for (slot, chunk) in m.iter_mut().zip(block.chunks_exact(4)) {
        *slot = u32::from_le_bytes(chunk.try_into().unwrap());
    }

    all_rounds(&mut v, &m);

    for i in 0..8 {
        h[i] ^= v[i] ^ v[i + 8];
    }
}

/// Computes the BLAKE2s hash of `input` in one call.
///
/// Equivalent to constructing a [`Blake2sHasher`], feeding it `input`, and
/// finalizing it.
///
/// # Parameters
/// - `input`: arbitrary-length input message
/// - `digest_size`: output size in bytes, 1..=32
/// - `key`: optional key for keyed hashing (MAC), at most 32 bytes
/// - `salt`: optional salt, at most 8 bytes
/// - `person`: optional personalization tag, at most 8 bytes
///
/// # Errors
/// Returns [`Blake2Error::ParameterRange`] if any parameter is out of
/// bounds.
pub fn blake2s(
    input: &[u8],
    digest_size: usize,
    key: &[u8],
    salt: &[u8],
    person: &[u8],
) -> Result<Vec<u8>, Blake2Error> {
    let mut hasher = Blake2sHasher::new(digest_size, key, salt, person)?;
    hasher.update(input)?;
    Ok(hasher.finalize().to_vec())
}
