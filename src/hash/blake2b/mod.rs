//! BLAKE2b core hashing functions
//!
//! This module implements the BLAKE2b cryptographic hash function as defined
//! in RFC 7693. It provides:
//! - the compression function operating on 128-byte blocks
//! - a parameter-block builder for digest size, key, salt and personalization
//! - an incremental (streaming) hasher, and a one-shot convenience function
//!
//! The implementation is designed to be minimal, explicit, and suitable
//! for use as a low-level primitive within the Nebula ecosystem.

pub mod computations;
pub mod core;
pub mod hasher;
pub mod params;

pub use core::blake2b;
pub use hasher::Blake2bHasher;

/// Block size in bytes (1024 bits).
pub const BLOCK_SIZE: usize = 128;

/// Number of mixing rounds.
pub const ROUNDS: usize = 12;

/// Maximum digest size in bytes.
pub const MAX_DIGEST_SIZE: usize = 64;

/// Maximum key size in bytes.
pub const MAX_KEY_SIZE: usize = 64;

/// Maximum salt size in bytes.
pub const MAX_SALT_SIZE: usize = 16;

/// Maximum personalization size in bytes.
pub const MAX_PERSON_SIZE: usize = 16;

/// BLAKE2b initialization vector (first 64 bits of the fractional parts of
/// the square roots of the first 8 primes).
pub const IV: [u64; 8] = [
    0x6A09E667F3BCC908,
    0xBB67AE8584CAA73B,
    0x3C6EF372FE94F82B,
    0xA54FF53A5F1D36F1,
    0x510E527FADE682D1,
    0x9B05688C2B3E6C1F,
    0x1F83D9ABFB41BD6B,
    0x5BE0CD19137E2179,
];

/// Message-word permutation schedule, one row per round. Rows 10 and 11
/// repeat rows 0 and 1.
pub const SIGMA: [[u8; 16]; 12] = [
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
    [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15],
    [14, 10, 4, 8, 9, 15, 13, 6, 1, 12, 0, 2, 11, 7, 5, 3],
];
