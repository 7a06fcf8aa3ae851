//! # StrKey — Versioned, Checksummed Key Encoding
//!
//! The canonical human-readable encoding for HELIO key material:
//!
//! ```text
//! payload  = version_byte || data
//! checksum = CRC16-XModem(payload), appended little-endian
//! text     = base32(payload || checksum)        (RFC 4648, no padding)
//! ```
//!
//! The version byte does double duty: it discriminates payload types during
//! decoding, and its high bits are chosen so that the first character of the
//! encoded text telegraphs what you're holding — `G` for account IDs, `S`
//! for secret seeds. A seed pasted into an address field fails before any
//! cryptography runs.
//!
//! CRC16 is not a cryptographic check and doesn't need to be: it exists to
//! catch transcription errors, not adversaries. Adversaries are handled by
//! the fact that an address carries no secrets and a seed never leaves the
//! owner's hands.

use base32::Alphabet;

use super::DecodeError;

/// Base32 alphabet used by strkey: RFC 4648, upper-case, no padding.
const BASE32: Alphabet = Alphabet::Rfc4648 { padding: false };

/// Payload type discriminator embedded in every strkey string.
///
/// The numeric values are fixed protocol constants; changing one re-keys
/// every address on the network.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum VersionByte {
    /// A 32-byte Ed25519 public key. Encodes with a leading `G`.
    AccountId = 0x30,
    /// A 32-byte secret seed. Encodes with a leading `S`.
    Seed = 0x90,
}

/// Encode a typed payload as a checksummed strkey string.
pub fn encode(version: VersionByte, data: &[u8]) -> String {
    let mut payload = Vec::with_capacity(data.len() + 3);
    payload.push(version as u8);
    payload.extend_from_slice(data);

    let checksum = crc16_xmodem(&payload);
    payload.extend_from_slice(&checksum.to_le_bytes());

    base32::encode(BASE32, &payload)
}

/// Decode a strkey string, validating checksum and version byte.
///
/// Returns the raw payload data with version byte and checksum stripped.
/// Length validation of the payload itself is the caller's job — this codec
/// doesn't know how long a public key is supposed to be.
pub fn decode(version: VersionByte, encoded: &str) -> Result<Vec<u8>, DecodeError> {
    let raw = base32::decode(BASE32, encoded)
        .ok_or(DecodeError::Malformed { alphabet: "base32" })?;

    if raw.len() < 3 {
        return Err(DecodeError::TooShort { got: raw.len() });
    }

    let (payload, checksum_bytes) = raw.split_at(raw.len() - 2);
    let expected = crc16_xmodem(payload);
    let got = u16::from_le_bytes([checksum_bytes[0], checksum_bytes[1]]);
    if got != expected {
        return Err(DecodeError::ChecksumMismatch);
    }

    if payload[0] != version as u8 {
        return Err(DecodeError::VersionMismatch {
            expected: version as u8,
            got: payload[0],
        });
    }

    Ok(payload[1..].to_vec())
}

/// CRC16-XModem: polynomial 0x1021, initial value 0, no reflection.
///
/// Small enough that a table isn't worth the cache pressure — strkey inputs
/// are 33 bytes.
fn crc16_xmodem(data: &[u8]) -> u16 {
    let mut crc: u16 = 0;
    for &byte in data {
        crc ^= (byte as u16) << 8;
        for _ in 0..8 {
            if crc & 0x8000 != 0 {
                crc = (crc << 1) ^ 0x1021;
            } else {
                crc <<= 1;
            }
        }
    }
    crc
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crc16_check_value() {
        // The standard CRC16-XModem check value for "123456789".
        assert_eq!(crc16_xmodem(b"123456789"), 0x31C3);
    }

    #[test]
    fn account_id_roundtrip() {
        let data = [7u8; 32];
        let encoded = encode(VersionByte::AccountId, &data);
        assert!(encoded.starts_with('G'), "encoded was: {}", encoded);
        assert_eq!(decode(VersionByte::AccountId, &encoded).unwrap(), data);
    }

    #[test]
    fn seed_roundtrip() {
        let data = [42u8; 32];
        let encoded = encode(VersionByte::Seed, &data);
        assert!(encoded.starts_with('S'), "encoded was: {}", encoded);
        assert_eq!(decode(VersionByte::Seed, &encoded).unwrap(), data);
    }

    #[test]
    fn encoded_length_is_56_for_32_byte_payloads() {
        // 35 bytes -> ceil(35 * 8 / 5) = 56 base32 characters. Every address
        // and seed on the network is exactly this long.
        let encoded = encode(VersionByte::AccountId, &[0u8; 32]);
        assert_eq!(encoded.len(), 56);
    }

    #[test]
    fn corrupted_character_rejected() {
        let encoded = encode(VersionByte::AccountId, &[9u8; 32]);
        let mut corrupted = encoded.into_bytes();
        let mid = corrupted.len() / 2;
        corrupted[mid] = if corrupted[mid] == b'A' { b'B' } else { b'A' };
        let corrupted = String::from_utf8(corrupted).unwrap();
        assert_eq!(
            decode(VersionByte::AccountId, &corrupted),
            Err(DecodeError::ChecksumMismatch)
        );
    }

    #[test]
    fn wrong_version_rejected() {
        let encoded = encode(VersionByte::Seed, &[3u8; 32]);
        let err = decode(VersionByte::AccountId, &encoded).unwrap_err();
        assert_eq!(
            err,
            DecodeError::VersionMismatch {
                expected: 0x30,
                got: 0x90
            }
        );
    }

    #[test]
    fn garbage_text_rejected() {
        // Characters outside the RFC 4648 alphabet.
        let err = decode(VersionByte::AccountId, "not~a*valid$string!").unwrap_err();
        assert_eq!(err, DecodeError::Malformed { alphabet: "base32" });
    }

    #[test]
    fn too_short_rejected() {
        // "AA" decodes to a single byte — no room for version + checksum.
        let err = decode(VersionByte::AccountId, "AA").unwrap_err();
        assert!(matches!(err, DecodeError::TooShort { .. }));
    }
}
