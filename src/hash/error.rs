//! Error types shared by the BLAKE2b and BLAKE2s hashers.

/// Errors that can occur while constructing or driving a BLAKE2 hasher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Blake2Error {
    /// `digest_size`, key length, salt length, or personalization length is
    /// outside the bounds allowed by the variant. Raised only at
    /// construction.
    ParameterRange,
    /// `update` was called on a hasher that has already been finalized.
    FinalizedHasher,
}
