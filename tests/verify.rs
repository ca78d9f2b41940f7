use blake2_fromscratch::hash::blake2b::blake2b;
use blake2_fromscratch::hash::verify::{digests_match, hex_digests_match};

#[test]
fn hex_verify_matches_case_insensitively() {
    let digest = blake2b(b"verify me", 32, &[], &[], &[]).unwrap();
    let hex: String = digest.iter().map(|b| format!("{:02x}", b)).collect();
    let upper = hex.to_uppercase();

    assert!(hex_digests_match(&hex, &upper));
}

#[test]
fn hex_verify_rejects_mismatch() {
    let digest = blake2b(b"verify me", 32, &[], &[], &[]).unwrap();
    let mut hex: String = digest.iter().map(|b| format!("{:02x}", b)).collect();
    hex.replace_range(0..2, "ff");

    let actual: String = digest.iter().map(|b| format!("{:02x}", b)).collect();

    assert!(!hex_digests_match(&hex, &actual));
}

#[test]
fn hex_verify_rejects_different_lengths() {
    assert!(!hex_digests_match("abcd", "abcdef"));
}

#[test]
fn byte_verify_matches_and_rejects() {
    let a = blake2b(b"one", 32, &[], &[], &[]).unwrap();
    let b = blake2b(b"one", 32, &[], &[], &[]).unwrap();
    let c = blake2b(b"two", 32, &[], &[], &[]).unwrap();

    assert!(digests_match(&a, &b));
    assert!(!digests_match(&a, &c));
}

#[test]
fn byte_verify_rejects_different_lengths() {
    let short = blake2b(b"x", 16, &[], &[], &[]).unwrap();
    let long = blake2b(b"x", 32, &[], &[], &[]).unwrap();

    assert!(!digests_match(&short, &long));
}
