//! # Hashing Utilities
//!
//! SHA-256 is the only hash function the identity layer needs: network
//! identifiers are the SHA-256 digest of a network passphrase, and that
//! digest doubles as the seed of the canonical per-network master key.
//!
//! We keep both a `Vec<u8>` and a fixed-array variant because half the
//! callers immediately pass the digest to functions that want `&[u8]`,
//! and the other half want a `[u8; 32]` that propagates naturally as a
//! seed. The heap allocation is noise compared to the cost of the hash.

use sha2::{Digest, Sha256};

/// Compute the SHA-256 hash of the input data.
///
/// Returns a 32-byte digest as a `Vec<u8>`.
///
/// # Example
///
/// ```
/// use helio_protocol::crypto::sha256;
///
/// let hash = sha256(b"HELIO protocol");
/// assert_eq!(hash.len(), 32);
/// ```
pub fn sha256(data: &[u8]) -> Vec<u8> {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hasher.finalize().to_vec()
}

/// Compute the SHA-256 hash and return a fixed-size array.
///
/// Same as [`sha256`] but returns `[u8; 32]` for callers that want a
/// fixed-size type without the heap allocation. This is what network-id
/// derivation uses, since the digest feeds straight into seed material.
pub fn sha256_array(data: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(data);
    let result = hasher.finalize();
    let mut output = [0u8; 32];
    output.copy_from_slice(&result);
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sha256_empty_input() {
        // The well-known SHA-256 digest of the empty string.
        let hash = sha256(b"");
        assert_eq!(
            hex::encode(hash),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn test_sha256_known_vector() {
        // FIPS 180-2 test vector for "abc".
        let hash = sha256(b"abc");
        assert_eq!(
            hex::encode(hash),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn array_and_vec_variants_agree() {
        let data = b"settlement is a team sport";
        assert_eq!(sha256(data), sha256_array(data).to_vec());
    }
}
