//! # Public Keys & Signatures
//!
//! The two value types every verifier on the network handles: a 32-byte
//! Ed25519 public key and a 64-byte Ed25519 signature.
//!
//! The signing half of an identity lives in [`crate::identity::HelioKeypair`];
//! this module only knows about material that is safe to share. That split is
//! deliberate — code that merely *verifies* should never be able to touch a
//! secret by accident.
//!
//! ## Security considerations
//!
//! - Public key bytes are stored as-is and validated as a curve point lazily,
//!   at verification time. A key that is not a valid point simply never
//!   verifies anything.
//! - Key bytes are never logged. If you add logging to this module,
//!   you will be asked to leave.

use std::fmt;
use std::hash::{Hash, Hasher};

use ed25519_dalek::{Signature as DalekSignature, Verifier, VerifyingKey};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::{SIGNATURE_LENGTH, VERIFYING_KEY_LENGTH};
use crate::encoding::strkey::{self, VersionByte};

/// Errors that can occur when handling key or signature material.
///
/// Intentionally vague about *why* something failed — leaking details about
/// key material through error messages is a classic footgun.
#[derive(Debug, Error)]
pub enum KeyError {
    #[error("invalid public key bytes: wrong length or not a valid Ed25519 point")]
    InvalidPublicKey,

    #[error("invalid signature bytes: expected 64 bytes, got {got}")]
    InvalidSignature { got: usize },
}

/// The public half of a HELIO identity, safe to share with the world.
///
/// This is what you give to other people so they can verify your signatures
/// and send you money. It renders as a checksummed `G...` address string
/// (see [`to_address`](Self::to_address)).
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HelioPublicKey {
    bytes: [u8; VERIFYING_KEY_LENGTH],
}

/// An Ed25519 signature over a message.
///
/// 64 bytes. Deterministic for a given (key, message) pair — no nonce
/// management, no k-value disasters, no sleepless nights wondering if your
/// RNG was seeded properly during signing.
///
/// Stored as `Vec<u8>` for serde compatibility, but always exactly 64 bytes
/// when constructed through this crate. Foreign bytes of the wrong length
/// are rejected by [`try_from_slice`](Self::try_from_slice).
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HelioSignature {
    bytes: Vec<u8>,
}

impl HelioPublicKey {
    /// Create a `HelioPublicKey` from raw bytes.
    pub fn from_bytes(bytes: [u8; VERIFYING_KEY_LENGTH]) -> Self {
        Self { bytes }
    }

    /// Try to create a `HelioPublicKey` from a byte slice.
    ///
    /// Validates the length and that the bytes represent a valid Ed25519
    /// point. Use this when the bytes arrive off the wire; [`from_bytes`]
    /// is for material this crate derived itself.
    ///
    /// [`from_bytes`]: Self::from_bytes
    pub fn try_from_slice(slice: &[u8]) -> Result<Self, KeyError> {
        let bytes: [u8; VERIFYING_KEY_LENGTH] =
            slice.try_into().map_err(|_| KeyError::InvalidPublicKey)?;

        // Catches low-order points and other degenerate cases early instead
        // of at first verification.
        VerifyingKey::from_bytes(&bytes).map_err(|_| KeyError::InvalidPublicKey)?;

        Ok(Self { bytes })
    }

    /// Get the raw bytes.
    pub fn as_bytes(&self) -> &[u8; VERIFYING_KEY_LENGTH] {
        &self.bytes
    }

    /// Verify a signature against this public key.
    ///
    /// Returns `true` if the signature is valid, `false` otherwise. We use
    /// a boolean here (rather than `Result`) because the vast majority of
    /// callers just want a yes/no answer, and distinguishing "bad signature"
    /// from "bad key" hands attackers an oracle for free.
    pub fn verify(&self, message: &[u8], signature: &HelioSignature) -> bool {
        let Ok(verifying_key) = VerifyingKey::from_bytes(&self.bytes) else {
            return false;
        };
        let sig_bytes: [u8; SIGNATURE_LENGTH] = match signature.bytes.as_slice().try_into() {
            Ok(b) => b,
            Err(_) => return false,
        };
        let dalek_sig = DalekSignature::from_bytes(&sig_bytes);
        verifying_key.verify(message, &dalek_sig).is_ok()
    }

    /// Render this key as a checksummed address string (`G...`).
    pub fn to_address(&self) -> String {
        strkey::encode(VersionByte::AccountId, &self.bytes)
    }

    /// Hex-encoded representation. 64 characters for 32 bytes.
    pub fn to_hex(&self) -> String {
        hex::encode(self.bytes)
    }
}

impl Hash for HelioPublicKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.bytes.hash(state);
    }
}

impl fmt::Display for HelioPublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_address())
    }
}

impl fmt::Debug for HelioPublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HelioPublicKey({})", self.to_address())
    }
}

// ---------------------------------------------------------------------------
// HelioSignature
// ---------------------------------------------------------------------------

impl HelioSignature {
    /// Create a signature from its raw 64-byte representation.
    pub fn from_bytes(bytes: [u8; SIGNATURE_LENGTH]) -> Self {
        Self {
            bytes: bytes.to_vec(),
        }
    }

    /// Try to create a signature from a byte slice.
    ///
    /// This is the only place wrong-length signature material can be
    /// rejected — once a `HelioSignature` exists, verification treats it as
    /// structurally valid and answers true/false, never an error.
    pub fn try_from_slice(slice: &[u8]) -> Result<Self, KeyError> {
        if slice.len() != SIGNATURE_LENGTH {
            return Err(KeyError::InvalidSignature { got: slice.len() });
        }
        Ok(Self {
            bytes: slice.to_vec(),
        })
    }

    /// Returns the raw signature bytes (always 64 bytes).
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Returns the hex-encoded signature string. 128 characters.
    pub fn to_hex(&self) -> String {
        hex::encode(&self.bytes)
    }
}

impl fmt::Display for HelioSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl fmt::Debug for HelioSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hex_str = self.to_hex();
        if hex_str.len() >= 128 {
            write!(f, "HelioSignature({}...{})", &hex_str[..8], &hex_str[120..])
        } else {
            write!(f, "HelioSignature({})", hex_str)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identity::HelioKeypair;

    #[test]
    fn test_public_key_try_from_slice() {
        let kp = HelioKeypair::random();
        let pk = HelioPublicKey::try_from_slice(kp.raw_public_key()).unwrap();
        assert_eq!(pk.as_bytes(), kp.raw_public_key());
    }

    #[test]
    fn test_public_key_rejects_wrong_length() {
        let short = [0u8; 16];
        assert!(HelioPublicKey::try_from_slice(&short).is_err());
    }

    #[test]
    fn signature_rejects_wrong_length() {
        let err = HelioSignature::try_from_slice(&[0u8; 63]).unwrap_err();
        assert!(matches!(err, KeyError::InvalidSignature { got: 63 }));
    }

    #[test]
    fn verify_rejects_tampered_message() {
        let kp = HelioKeypair::random();
        let sig = kp.sign(b"correct message").unwrap();
        assert!(!kp.public_key().verify(b"wrong message", &sig));
    }

    #[test]
    fn verify_rejects_tampered_signature() {
        let kp = HelioKeypair::random();
        let sig = kp.sign(b"message").unwrap();
        let mut bytes: [u8; 64] = sig.as_bytes().try_into().unwrap();
        bytes[10] ^= 0x01;
        let tampered = HelioSignature::from_bytes(bytes);
        assert!(!kp.public_key().verify(b"message", &tampered));
    }

    #[test]
    fn display_is_checksummed_address() {
        let kp = HelioKeypair::random();
        let rendered = format!("{}", kp.public_key());
        assert!(rendered.starts_with('G'), "address was: {}", rendered);
        assert_eq!(rendered.len(), 56);
    }

    #[test]
    fn debug_never_prints_raw_bytes() {
        let kp = HelioKeypair::random();
        let debug_str = format!("{:?}", kp.public_key());
        assert!(debug_str.starts_with("HelioPublicKey(G"));
    }

    #[test]
    fn public_key_serde_roundtrip() {
        let kp = HelioKeypair::random();
        let pk = kp.public_key();
        let json = serde_json::to_string(&pk).unwrap();
        let recovered: HelioPublicKey = serde_json::from_str(&json).unwrap();
        assert_eq!(pk, recovered);
    }

    #[test]
    fn signature_serde_roundtrip() {
        let kp = HelioKeypair::random();
        let sig = kp.sign(b"serialize me").unwrap();
        let json = serde_json::to_string(&sig).unwrap();
        let recovered: HelioSignature = serde_json::from_str(&json).unwrap();
        assert_eq!(sig, recovered);
    }
}
