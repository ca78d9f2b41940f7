//! Parameter-block construction and validation for BLAKE2b.
//!
//! This module defines the bound checks for BLAKE2b's construction
//! parameters and builds the 64-byte parameter block that is XOR'd into
//! the IV to perturb the initial chaining value.

use crate::hash::blake2b::{MAX_DIGEST_SIZE, MAX_KEY_SIZE, MAX_PERSON_SIZE, MAX_SALT_SIZE};
use crate::hash::error::Blake2Error;

/// Validates BLAKE2b construction parameters.
///
/// # Errors
/// Returns [`Blake2Error::ParameterRange`] if `digest_size` is outside
/// `1..=64`, or if `key`, `salt`, or `person` exceed their respective
/// maximum lengths.
pub fn validate(digest_size: usize, key: &[u8], salt: &[u8], person: &[u8]) -> Result<(), Blake2Error> {
    if digest_size == 0 || digest_size > MAX_DIGEST_SIZE {
        return Err(Blake2Error::ParameterRange);
    }
    if key.len() > MAX_KEY_SIZE {
        return Err(Blake2Error::ParameterRange);
    }
    if salt.len() > MAX_SALT_SIZE {
        return Err(Blake2Error::ParameterRange);
    }
    if person.len() > MAX_PERSON_SIZE {
        return Err(Blake2Error::ParameterRange);
    }

    Ok(())
}

/// Builds the 64-byte BLAKE2b parameter block.
///
/// Caller must have already validated the inputs via [`validate`].
///
/// # Layout (little-endian, unspecified bytes zero)
/// - `[0]` digest length
/// - `[1]` key length
/// - `[2]` fanout (1, sequential mode)
/// - `[3]` depth (1, sequential mode)
/// - `[4..8]` leaf length (0)
/// - `[8..16]` node offset (0)
/// - `[16..24]` XOF length (0)
/// - `[24]` node depth (0)
/// - `[25]` inner length (0)
/// - `[26..32]` reserved (0)
/// - `[32..48]` salt, right-zero-padded
/// - `[48..64]` personalization, right-zero-padded
pub fn build(digest_size: usize, key_len: usize, salt: &[u8], person: &[u8]) -> [u8; 64] {
    let mut param = [0u8; 64];

    param[0] = digest_size as u8;
    param[1] = key_len as u8;
    param[2] = 1;
    param[3] = 1;

    param[32..32 + salt.len()].copy_from_slice(salt);
    param[48..48 + person.len()].copy_from_slice(person);

    param
}

/// Derives the initial chaining value from the IV XOR'd with the parameter
/// block, interpreted as 8 little-endian 64-bit words.
pub fn initial_chaining_value(param: &[u8; 64]) -> [u64; 8] {
    let mut h = crate::hash::blake2b::IV;

    for (word, chunk) in h.iter_mut().zip(param.chunks_exact(8)) {
        *word ^= u64::from_le_bytes(chunk.try_into().unwrap());
    }

    h
}
