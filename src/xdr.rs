//! # Canonical XDR Fragments
//!
//! The ledger's wire format is XDR (RFC 4506). This crate is not a wire
//! codec — the full transaction schema lives with the transaction-building
//! layer — but the identity core needs exactly three typed encodings:
//!
//! - `PublicKey` / `AccountId`: a discriminated union over key algorithms.
//!   Today there is one arm (`Ed25519 = 0`), encoded as a 4-byte big-endian
//!   discriminant followed by 32 opaque bytes.
//! - `DecoratedSignature`: a 4-byte signature hint plus a variable-length
//!   opaque signature, the structure actually transmitted in envelopes.
//!
//! These encodings are a fixed external contract. The signature hint is
//! defined as the last 4 bytes of an account ID's encoding, so any drift
//! here silently breaks hint matching across implementations. If you touch
//! the byte layout, you are wrong.

use serde::{Deserialize, Serialize};

use crate::crypto::keys::HelioSignature;

/// XDR discriminant for the Ed25519 arm of the key unions.
const KEY_TYPE_ED25519: u32 = 0;

/// A typed public key, as the wire format represents it.
///
/// The union exists so a future key algorithm can be added without
/// re-keying the network; every arm carries its own discriminant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PublicKey {
    /// An Ed25519 verifying key.
    Ed25519([u8; 32]),
}

/// An account identifier. Identical to [`PublicKey`] on the wire — the
/// distinct name mirrors the protocol schema, where the two are separate
/// XDR typedefs with separate roles.
pub type AccountId = PublicKey;

impl PublicKey {
    /// Canonical XDR encoding: 4-byte big-endian discriminant, then the
    /// raw key bytes as fixed-length opaque data. 36 bytes total.
    pub fn to_xdr(&self) -> Vec<u8> {
        match self {
            PublicKey::Ed25519(key) => {
                let mut out = Vec::with_capacity(4 + key.len());
                out.extend_from_slice(&KEY_TYPE_ED25519.to_be_bytes());
                out.extend_from_slice(key);
                out
            }
        }
    }

    /// The raw key bytes, discriminant stripped.
    pub fn raw(&self) -> &[u8; 32] {
        match self {
            PublicKey::Ed25519(key) => key,
        }
    }
}

/// A signature paired with its signer's hint, as transmitted in the
/// protocol.
///
/// The hint lets a verifier skip signatures that obviously don't belong to
/// a candidate signer before paying for a full Ed25519 verification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecoratedSignature {
    /// Last 4 bytes of the signer's account ID encoding.
    pub hint: [u8; 4],
    /// The Ed25519 signature itself.
    pub signature: HelioSignature,
}

impl DecoratedSignature {
    /// Canonical XDR encoding: 4 fixed opaque hint bytes, then the
    /// signature as variable-length opaque data (4-byte big-endian length,
    /// bytes, zero-padded to a 4-byte boundary).
    pub fn to_xdr(&self) -> Vec<u8> {
        let sig = self.signature.as_bytes();
        let padding = (4 - sig.len() % 4) % 4;
        let mut out = Vec::with_capacity(4 + 4 + sig.len() + padding);
        out.extend_from_slice(&self.hint);
        out.extend_from_slice(&(sig.len() as u32).to_be_bytes());
        out.extend_from_slice(sig);
        out.extend(std::iter::repeat(0u8).take(padding));
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identity::HelioKeypair;

    #[test]
    fn public_key_xdr_layout() {
        let key = [0xAB; 32];
        let xdr = PublicKey::Ed25519(key).to_xdr();
        assert_eq!(xdr.len(), 36);
        assert_eq!(&xdr[..4], &[0, 0, 0, 0]);
        assert_eq!(&xdr[4..], &key);
    }

    #[test]
    fn account_id_last_four_bytes_are_key_tail() {
        // The signature-hint contract: hint == tail of the key itself,
        // because the discriminant sits at the front.
        let key = [0x5A; 32];
        let xdr = PublicKey::Ed25519(key).to_xdr();
        assert_eq!(&xdr[xdr.len() - 4..], &key[28..]);
    }

    #[test]
    fn decorated_signature_xdr_layout() {
        let kp = HelioKeypair::random();
        let decorated = kp.sign_decorated(b"payload").unwrap();
        let xdr = decorated.to_xdr();

        // hint (4) + length word (4) + signature (64, already 4-aligned).
        assert_eq!(xdr.len(), 72);
        assert_eq!(&xdr[..4], &decorated.hint);
        assert_eq!(&xdr[4..8], &64u32.to_be_bytes());
        assert_eq!(&xdr[8..], decorated.signature.as_bytes());
    }
}
