//! # Legacy Base58Check Encoding — DEPRECATED
//!
//! The text encoding HELIO used before strkey: base58 over a custom
//! alphabet, with a version byte prefix and a 4-byte double-SHA-256
//! checksum suffix (the Bitcoin construction, different alphabet).
//!
//! This module exists for exactly one reason: people still hold seeds in
//! the old format and need to migrate. Nothing in the protocol produces
//! this encoding anymore, and the module will be deleted once the
//! migration window closes. Every public item is marked `#[deprecated]`
//! so reaching for it by accident is impossible.

#![allow(deprecated)]

use bs58::Alphabet;

use super::DecodeError;

/// The legacy alphabet. Note the leading `g` — legacy account IDs started
/// with `g`, the way strkey addresses start with `G`.
const LEGACY_ALPHABET: Alphabet =
    Alphabet::new_unwrap(b"gsphnaf39wBUDNEGHJKLM4PQRST7VWXYZ2bcdeCr65jkm8oFqi1tuvAxyz");

/// Payload type discriminator for the legacy encoding.
#[deprecated(note = "legacy base58 encoding; use encoding::strkey")]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum LegacyVersionByte {
    /// A 32-byte Ed25519 public key.
    AccountId = 0x00,
    /// A 32-byte secret seed.
    Seed = 0x21,
}

/// Decode a legacy base58check string, validating checksum and version byte.
#[deprecated(note = "legacy base58 encoding; use encoding::strkey")]
pub fn decode_check(version: LegacyVersionByte, encoded: &str) -> Result<Vec<u8>, DecodeError> {
    let raw = bs58::decode(encoded)
        .with_alphabet(&LEGACY_ALPHABET)
        .with_check(Some(version as u8))
        .into_vec()
        .map_err(|e| match e {
            bs58::decode::Error::InvalidChecksum { .. } => DecodeError::ChecksumMismatch,
            bs58::decode::Error::InvalidVersion { ver, expected_ver } => {
                DecodeError::VersionMismatch {
                    expected: expected_ver,
                    got: ver,
                }
            }
            bs58::decode::Error::NoChecksum => DecodeError::TooShort { got: 0 },
            _ => DecodeError::Malformed { alphabet: "base58" },
        })?;

    // `raw` still carries the version byte up front; the checksum has
    // already been stripped and verified by bs58.
    Ok(raw[1..].to_vec())
}

/// Encode a typed payload as a legacy base58check string.
///
/// Only tests and migration tooling should ever call this — the protocol
/// stopped emitting the legacy format when strkey shipped.
#[deprecated(note = "legacy base58 encoding; use encoding::strkey")]
pub fn encode_check(version: LegacyVersionByte, data: &[u8]) -> String {
    let mut payload = Vec::with_capacity(data.len() + 1);
    payload.push(version as u8);
    payload.extend_from_slice(data);

    bs58::encode(payload)
        .with_alphabet(&LEGACY_ALPHABET)
        .with_check()
        .into_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_roundtrip() {
        let data = [11u8; 32];
        let encoded = encode_check(LegacyVersionByte::Seed, &data);
        assert_eq!(decode_check(LegacyVersionByte::Seed, &encoded).unwrap(), data);
    }

    #[test]
    fn account_id_starts_with_g() {
        let encoded = encode_check(LegacyVersionByte::AccountId, &[5u8; 32]);
        assert!(encoded.starts_with('g'), "encoded was: {}", encoded);
    }

    #[test]
    fn corrupted_string_rejected() {
        let encoded = encode_check(LegacyVersionByte::Seed, &[8u8; 32]);
        let mut corrupted = encoded.into_bytes();
        let last = corrupted.len() - 1;
        corrupted[last] = if corrupted[last] == b'g' { b's' } else { b'g' };
        let corrupted = String::from_utf8(corrupted).unwrap();
        assert!(decode_check(LegacyVersionByte::Seed, &corrupted).is_err());
    }

    #[test]
    fn wrong_version_rejected() {
        let encoded = encode_check(LegacyVersionByte::Seed, &[8u8; 32]);
        assert_eq!(
            decode_check(LegacyVersionByte::AccountId, &encoded).unwrap_err(),
            DecodeError::VersionMismatch {
                expected: 0x00,
                got: 0x21
            }
        );
    }

    #[test]
    fn invalid_characters_rejected() {
        // '0', 'l', and 'O' are not in the legacy alphabet.
        assert!(decode_check(LegacyVersionByte::Seed, "0Ol0Ol0Ol").is_err());
    }
}
