//! Constant-time digest verification helper.
//!
//! Used by external collaborators (CLI tools, HTTP handlers, ...) that need
//! to compare a freshly computed digest against a caller-supplied expected
//! value without leaking timing information about where the two diverge.

/// Compares two hex strings for equality in constant time.
///
/// Both strings are canonicalized to lower-case ASCII before comparison.
/// Differing lengths are rejected immediately (length is not secret), but
/// once lengths match, every byte pair is compared and the per-byte
/// differences are XOR-accumulated so that the number of matching
/// leading bytes cannot be inferred from execution time.
pub fn hex_digests_match(expected_hex: &str, actual_hex: &str) -> bool {
    let expected = expected_hex.as_bytes();
    let actual = actual_hex.as_bytes();

    if expected.len() != actual.len() {
        return false;
    }

    let diff = expected
        .iter()
        .zip(actual.iter())
        .map(|(a, b)| a.to_ascii_lowercase() ^ b.to_ascii_lowercase())
        .fold(0u8, |acc, v| acc | v);

    diff == 0
}

/// Compares two raw digests for equality in constant time.
///
/// Mismatched lengths are rejected immediately; equal-length buffers are
/// compared by XOR-accumulating every byte difference and testing the
/// accumulator against zero at the end.
pub fn digests_match(expected: &[u8], actual: &[u8]) -> bool {
    if expected.len() != actual.len() {
        return false;
    }

    let diff = expected
        .iter()
        .zip(actual.iter())
        .map(|(a, b)| a ^ b)
        .fold(0u8, |acc, v| acc | v);

    diff == 0
}
