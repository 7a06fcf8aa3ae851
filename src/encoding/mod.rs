//! # Text Encodings for Keys & Seeds
//!
//! Humans copy-paste key material. This module makes that survivable.
//!
//! Two codecs live here:
//!
//! 1. **strkey** — The current format. A version byte identifying the payload
//!    type (public key vs. secret seed), a CRC16 checksum, and base32 text.
//!    Addresses start with `G`, seeds with `S` — a mispasted seed is visually
//!    obvious and mechanically rejected.
//! 2. **base58** — The deprecated predecessor, kept only so holders of
//!    old-format seeds can migrate. Do not use it for anything new.
//!
//! Both codecs fail loudly and distinctly: a bad character, a failed
//! checksum, and a wrong version byte each get their own [`DecodeError`]
//! variant. Callers that don't care can treat them uniformly; callers that
//! do (wallet UIs, mostly) can tell the user *what* went wrong.

use thiserror::Error;

pub mod base58;
pub mod strkey;

/// Errors that can occur while decoding checksummed text.
///
/// Shared by the strkey and legacy base58 codecs — the failure modes are
/// the same even though the alphabets and checksums differ.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecodeError {
    /// The text contains characters outside the codec's alphabet, or is
    /// structurally not decodable.
    #[error("malformed text: not a valid {alphabet} string")]
    Malformed {
        /// Name of the alphabet that rejected the input.
        alphabet: &'static str,
    },

    /// The decoded payload is too short to contain a version byte and
    /// checksum.
    #[error("encoded payload too short: {got} bytes")]
    TooShort {
        /// Number of bytes actually decoded.
        got: usize,
    },

    /// The embedded checksum does not match the payload. The string was
    /// corrupted in transit (or by a fat finger).
    #[error("checksum mismatch: the encoded string is corrupted")]
    ChecksumMismatch,

    /// The version byte identifies a different payload type than the caller
    /// asked for — e.g. an address handed to a seed decoder.
    #[error("version byte mismatch: expected {expected:#04x}, got {got:#04x}")]
    VersionMismatch {
        /// The version byte the caller expected.
        expected: u8,
        /// The version byte actually present.
        got: u8,
    },
}
