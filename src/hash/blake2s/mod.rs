//! BLAKE2s core hashing functions
//!
//! This module implements the BLAKE2s cryptographic hash function as defined
//! in RFC 7693. It provides:
//! - the compression function operating on 64-byte blocks
//! - a parameter-block builder for digest size, key, salt and personalization
//! - an incremental (streaming) hasher, and a one-shot convenience function
//!
//! BLAKE2s is the 32-bit-word counterpart to BLAKE2b, intended for 8- to
//! 32-bit platforms or applications needing smaller digests.

pub mod computations;
pub mod core;
pub mod hasher;
pub mod params;

pub use core::blake2s;
pub use hasher::Blake2sHasher;

/// Block size in bytes (512 bits).
pub const BLOCK_SIZE: usize = 64;

/// Number of mixing rounds.
pub const ROUNDS: usize = 10;

/// Maximum digest size in bytes.
pub const MAX_DIGEST_SIZE: usize = 32;

/// Maximum key size in bytes.
pub const MAX_KEY_SIZE: usize = 32;

/// Maximum salt size in bytes.
pub const MAX_SALT_SIZE: usize = 8;

/// Maximum personalization size in bytes.
pub const MAX_PERSON_SIZE: usize = 8;

/// BLAKE2s initialization vector (upper 32 bits of the BLAKE2b IV words).
pub const IV: [u32; 8] = [
    0x6A09E667, 0xBB67AE85, 0x3C6EF372, 0xA54FF53A, 0x510E527F, 0x9B05688C, 0x1F83D9AB, 0x5BE0CD19,
];

/// Message-word permutation schedule, one row per round.
pub const SIGMA: [[u8; 16]; 10] = [
    [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15],
    [14, 10, 4, 8, 9, 15, 13, 6, 1, 12, 0, 2, 11, 7, 5, 3],
    [11, 8, 12, 0, 5, 2, 15, 13, 10, 14, 3, 6, 7, 1, 9, 4],
    [7, 9, 3, 1, 13, 12, 11, 14, 2, 6, 5, 10, 4, 0, 15, 8],
    [9, 0, 5, 7, 2, 4, 10, 15, 14, 1, 11, 12, 6, 8, 3, 13],
    [2, 12, 6, 10, 0, 11, 8, 3, 4, 13, 7, 5, 15, 14, 1, 9],
    [12, 5, 1, 15, 14, 13, 4, 10, 0, 7, 6, 3, 9, 2, 8, 11],
    [13, 11, 7, 14, 12, 1, 3, 9, 5, 0, 15, 4, 8, 6, 2, 10],
    [6, 15, 14, 9, 11, 3, 0, 8, 12, 2, 13, 7, 1, 4, 10, 5],
    [10, 2, 8, 4, 7, 6, 1, 5, 15, 11, 9, 14, 3, 12, 13, 0],
];
