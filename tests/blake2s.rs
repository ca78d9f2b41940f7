use blake2_fromscratch::hash::blake2s::{blake2s, Blake2sHasher};
use blake2_fromscratch::hash::error::Blake2Error;

fn hash_hex(input: &[u8], digest_size: usize, key: &[u8]) -> String {
    let digest = blake2s(input, digest_size, key, &[], &[]).unwrap();
    digest.iter().map(|b| format!("{:02x}", b)).collect()
}

// -------------------------------------------------------
// RFC 7693 TEST VECTORS
// -------------------------------------------------------

#[test]
fn blake2s_empty_vector() {
    let expected = "69217a3079908094e11121d042354a7c1f55b6482ca1a51e1b250dfd1ed0eef9";
    assert_eq!(hash_hex(&[], 32, &[]), expected);
}

#[test]
fn blake2s_abc_vector() {
    let expected = "508c5e8c327c14e2e1a72ba34eeb452f37458b209ed63a294d999b4c86675982";
    assert_eq!(hash_hex(b"abc", 32, &[]), expected);
}

// -------------------------------------------------------
// ONE-SHOT VS INCREMENTAL / CHUNKING INDEPENDENCE
// -------------------------------------------------------

#[test]
fn one_shot_matches_construct_update_finalize() {
    let data = b"The quick brown fox jumps over the lazy dog";

    let mut hasher = Blake2sHasher::new(32, &[], &[], &[]).unwrap();
    hasher.update(data).unwrap();
    let incremental = hasher.finalize().to_vec();

    let one_shot = blake2s(data, 32, &[], &[], &[]).unwrap();

    assert_eq!(incremental, one_shot);
}

#[test]
fn block_boundary_streaming_129_bytes() {
    // 129 bytes over a 64-byte block size exercises the same strict-
    // inequality buffering rule as the BLAKE2b 257-byte case, scaled down
    // to BLAKE2s's smaller block.
    let data = vec![0x55u8; 129];

    let mut hasher = Blake2sHasher::new(16, &[], &[], &[]).unwrap();
    let mut pos = 0;
    for chunk_len in [1usize, 63, 1, 63, 1] {
        hasher.update(&data[pos..pos + chunk_len]).unwrap();
        pos += chunk_len;
    }
    assert_eq!(pos, data.len());
    let streamed = hasher.finalize().to_vec();

    let one_shot = blake2s(&data, 16, &[], &[], &[]).unwrap();

    assert_eq!(streamed, one_shot);
}

#[test]
fn chunking_independence_arbitrary_partitions() {
    let data: Vec<u8> = (0..300u32).map(|i| (i % 256) as u8).collect();
    let whole = blake2s(&data, 32, &[], &[], &[]).unwrap();

    for partition in [
        vec![300],
        vec![1, 299],
        vec![64, 64, 64, 64, 44],
        vec![1; 300],
        vec![63, 1, 63, 1, 63, 109],
    ] {
        let mut hasher = Blake2sHasher::new(32, &[], &[], &[]).unwrap();
        let mut pos = 0;
        for len in &partition {
            hasher.update(&data[pos..pos + len]).unwrap();
            pos += len;
        }
        assert_eq!(pos, data.len());
        assert_eq!(hasher.finalize(), whole.as_slice());
    }
}

// -------------------------------------------------------
// DETERMINISM / IDEMPOTENCE / FINALIZED-HASHER ERROR
// -------------------------------------------------------

#[test]
fn determinism() {
    let a = blake2s(b"determinism check", 24, &[], &[], &[]).unwrap();
    let b = blake2s(b"determinism check", 24, &[], &[], &[]).unwrap();
    assert_eq!(a, b);
}

#[test]
fn finalize_is_idempotent() {
    let mut hasher = Blake2sHasher::new(32, &[], &[], &[]).unwrap();
    hasher.update(b"idempotence").unwrap();
    let first = hasher.finalize().to_vec();
    let second = hasher.finalize().to_vec();
    assert_eq!(first, second);
}

#[test]
fn update_after_finalize_fails() {
    let mut hasher = Blake2sHasher::new(32, &[], &[], &[]).unwrap();
    hasher.update(b"data").unwrap();
    hasher.finalize();

    assert_eq!(hasher.update(b"more"), Err(Blake2Error::FinalizedHasher));
}

// -------------------------------------------------------
// TRUNCATION / DIGEST-SIZE SENSITIVITY
// -------------------------------------------------------

#[test]
fn digest_size_changes_whole_output_not_just_length() {
    let data = b"non-prefix check";
    let full = blake2s(data, 32, &[], &[], &[]).unwrap();
    let truncated = blake2s(data, 16, &[], &[], &[]).unwrap();

    assert_ne!(&full[..16], truncated.as_slice());
}

// -------------------------------------------------------
// KEYED HASHING / MAC
// -------------------------------------------------------

#[test]
fn keyed_mac_round_trip_is_deterministic() {
    let message = b"authenticate this";
    let key = b"short_secret_key_2024";

    let a = blake2s(message, 32, key, &[], &[]).unwrap();
    let b = blake2s(message, 32, key, &[], &[]).unwrap();
    assert_eq!(a, b);
}

#[test]
fn flipping_a_key_bit_changes_the_mac() {
    let message = b"authenticate this";
    let mut key = b"short_secret_key_2024".to_vec();

    let original = blake2s(message, 32, &key, &[], &[]).unwrap();

    key[0] ^= 0x01;
    let flipped = blake2s(message, 32, &key, &[], &[]).unwrap();

    assert_ne!(original, flipped);
}

#[test]
fn key_sensitivity_avalanche() {
    let message = b"avalanche test payload";
    let base_key = [0x3Cu8; 16];

    for bit in [0usize, 7, 31, 63, 127] {
        let mut flipped_key = base_key;
        flipped_key[bit / 8] ^= 1 << (bit % 8);

        let a = blake2s(message, 32, &base_key, &[], &[]).unwrap();
        let b = blake2s(message, 32, &flipped_key, &[], &[]).unwrap();

        let differing_bits: u32 = a.iter().zip(b.iter()).map(|(x, y)| (x ^ y).count_ones()).sum();
        assert!(
            (32..=224).contains(&differing_bits),
            "bit {bit}: {differing_bits} of 256 bits differ, expected roughly half"
        );
    }
}

// -------------------------------------------------------
// SALT / PERSONALIZATION
// -------------------------------------------------------

#[test]
fn salt_changes_the_digest() {
    let data = b"salted data";
    let unsalted = blake2s(data, 32, &[], &[], &[]).unwrap();
    let salted = blake2s(data, 32, &[], b"saltsalt", &[]).unwrap();
    assert_ne!(unsalted, salted);
}

#[test]
fn personalization_changes_the_digest() {
    let data = b"personalized data";
    let plain = blake2s(data, 32, &[], &[], &[]).unwrap();
    let personalized = blake2s(data, 32, &[], &[], b"app-v1-p").unwrap();
    assert_ne!(plain, personalized);
}

// -------------------------------------------------------
// ERROR PATHS
// -------------------------------------------------------

#[test]
fn digest_size_zero_is_rejected() {
    assert_eq!(Blake2sHasher::new(0, &[], &[], &[]).unwrap_err(), Blake2Error::ParameterRange);
}

#[test]
fn digest_size_33_is_rejected() {
    assert_eq!(Blake2sHasher::new(33, &[], &[], &[]).unwrap_err(), Blake2Error::ParameterRange);
}

#[test]
fn key_over_32_bytes_is_rejected() {
    let key = vec![0u8; 33];
    assert_eq!(Blake2sHasher::new(32, &key, &[], &[]).unwrap_err(), Blake2Error::ParameterRange);
}

#[test]
fn salt_over_8_bytes_is_rejected() {
    let salt = vec![0u8; 9];
    assert_eq!(Blake2sHasher::new(32, &[], &salt, &[]).unwrap_err(), Blake2Error::ParameterRange);
}

#[test]
fn person_over_8_bytes_is_rejected() {
    let person = vec![0u8; 9];
    assert_eq!(Blake2sHasher::new(32, &[], &[], &person).unwrap_err(), Blake2Error::ParameterRange);
}

// -------------------------------------------------------
// LARGE / MULTI-BLOCK INPUTS
// -------------------------------------------------------

#[test]
fn large_multiblock_input() {
    let buf: Vec<u8> = (0..5000u32).map(|i| (i % 256) as u8).collect();
    let _ = blake2s(&buf, 32, &[], &[], &[]).unwrap();
}

#[test]
fn one_mb_input() {
    let buf = vec![0xAAu8; 1_000_000];
    let _ = blake2s(&buf, 32, &[], &[], &[]).unwrap();
}

// -------------------------------------------------------
// EXACT BLOCK-SIZE MULTIPLES
// -------------------------------------------------------

#[test]
fn exact_block_multiple_matches_reference_crate() {
    use blake2::{Blake2s256, Digest};

    for blocks in [1usize, 2] {
        let data = vec![0x7eu8; blocks * 64];

        let mut reference = Blake2s256::new();
        reference.update(&data);
        let expected = reference.finalize();

        let got = blake2s(&data, 32, &[], &[], &[]).unwrap();

        assert_eq!(
            got.as_slice(),
            expected.as_slice(),
            "mismatch for {blocks} block(s) of exact-multiple input"
        );
    }
}

#[test]
fn hex_digest_matches_formatted_bytes() {
    let mut hasher = Blake2sHasher::new(16, &[], &[], &[]).unwrap();
    hasher.update(b"hex check").unwrap();
    let hex = hasher.hex_digest();

    let mut hasher = Blake2sHasher::new(16, &[], &[], &[]).unwrap();
    hasher.update(b"hex check").unwrap();
    let bytes = hasher.finalize();
    let expected: String = bytes.iter().map(|b| format!("{:02x}", b)).collect();

    assert_eq!(hex, expected);
}
