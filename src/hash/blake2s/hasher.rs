//! Incremental (streaming) BLAKE2s hasher.
//!
//! This is the state machine behind the one-shot [`super::blake2s`]
//! function: construct with parameters, feed arbitrary byte chunks via
//! [`Blake2sHasher::update`], and retrieve the digest via
//! [`Blake2sHasher::finalize`] or [`Blake2sHasher::hex_digest`].
//!
//! A single instance must not be mutated from more than one thread at a
//! time; distinct instances share no mutable state and may run fully in
//! parallel.

use std::fmt::Write as _;

use crate::hash::blake2s::core::compress;
use crate::hash::blake2s::params;
use crate::hash::blake2s::BLOCK_SIZE;
use crate::hash::error::Blake2Error;

/// An incremental BLAKE2s hasher.
#[derive(Debug)]
pub struct Blake2sHasher {
    h: [u32; 8],
    buffer: [u8; BLOCK_SIZE],
    buffer_len: usize,
    t: u64,
    digest_size: usize,
    finalized: bool,
    digest: Vec<u8>,
}

impl Blake2sHasher {
    /// Creates a new BLAKE2s hasher.
    ///
    /// # Parameters
    /// - `digest_size`: output size in bytes, 1..=32
    /// - `key`: optional key for keyed hashing (MAC), at most 32 bytes
    /// - `salt`: optional salt, at most 8 bytes
    /// - `person`: optional personalization tag, at most 8 bytes
    ///
    /// # Errors
    /// Returns [`Blake2Error::ParameterRange`] if any parameter is out of
    /// bounds.
    ///
    /// # Notes
    /// If `key` is non-empty, a zero-padded key block is committed to the
    /// compression function as the first block, even if no further input
    /// is ever supplied.
    pub fn new(digest_size: usize, key: &[u8], salt: &[u8], person: &[u8]) -> Result<Self, Blake2Error> {
        params::validate(digest_size, key, salt, person)?;

        let param = params::build(digest_size, key.len(), salt, person);
        let h = params::initial_chaining_value(&param);

        let mut hasher = Blake2sHasher {
            h,
            buffer: [0u8; BLOCK_SIZE],
            buffer_len: 0,
            t: 0,
            digest_size,
            finalized: false,
            digest: Vec::new(),
        };

        if !key.is_empty() {
            let mut key_block = [0u8; BLOCK_SIZE];
            key_block[..key.len()].copy_from_slice(key);
            hasher.t += BLOCK_SIZE as u64;
            compress(&mut hasher.h, &key_block, hasher.t, false);
        }

        Ok(hasher)
    }

    /// Appends `data` to the hasher's pending input.
    ///
    /// # Errors
    /// Returns [`Blake2Error::FinalizedHasher`] if called after
    /// [`Blake2sHasher::finalize`].
    pub fn update(&mut self, mut data: &[u8]) -> Result<(), Blake2Error> {
        if self.finalized {
            return Err(Blake2Error::FinalizedHasher);
        }

        if data.is_empty() {
            return Ok(());
        }

        if self.buffer_len > 0 {
            let need = BLOCK_SIZE - self.buffer_len;
            let take = need.min(data.len());
            self.buffer[self.buffer_len..self.buffer_len + take].copy_from_slice(&data[..take]);
            self.buffer_len += take;
            data = &data[take..];

            if data.is_empty() {
                // The buffer may now be exactly full; it stays pending
                // until the next update or finalize, per the strict-
                // inequality buffering rule.
                return Ok(());
            }

            self.t += BLOCK_SIZE as u64;
            let block = self.buffer;
            compress(&mut self.h, &block, self.t, false);
            self.buffer_len = 0;
        }

        while data.len() > BLOCK_SIZE {
            let (block, rest) = data.split_at(BLOCK_SIZE);
            self.t += BLOCK_SIZE as u64;
            compress(&mut self.h, block.try_into().unwrap(), self.t, false);
            data = rest;
        }

        self.buffer[..data.len()].copy_from_slice(data);
        self.buffer_len = data.len();

        Ok(())
    }

    /// Finalizes the hasher and returns the digest.
    ///
    /// Idempotent: calling this more than once returns the same bytes
    /// without recomputing anything.
    pub fn finalize(&mut self) -> &[u8] {
        if self.finalized {
            return &self.digest;
        }

        let r = self.buffer_len;
        let mut block = self.buffer;
        for b in block[r..].iter_mut() {
            *b = 0;
        }

        self.t += r as u64;
        compress(&mut self.h, &block, self.t, true);

        let mut out = [0u8; BLOCK_SIZE / 2];
        for (i, word) in self.h.iter().enumerate() {
            out[i * 4..(i + 1) * 4].copy_from_slice(&word.to_le_bytes());
        }

        self.digest = out[..self.digest_size].to_vec();
        self.finalized = true;

        &self.digest
    }

    /// Finalizes the hasher and returns the digest as a lower-case hex
    /// string.
    pub fn hex_digest(&mut self) -> String {
        let digest = self.finalize();
        let mut s = String::with_capacity(digest.len() * 2);
        for b in digest {
            let _ = write!(s, "{:02x}", b);
        }
        s
    }
}
