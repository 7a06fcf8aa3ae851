//! # Keypair — The Core Identity Value
//!
//! A [`HelioKeypair`] is an immutable identity: a 32-byte Ed25519 public
//! key, optionally paired with the secret seed it was derived from. The
//! keypair is the atomic unit of identity in the protocol — every address,
//! every signature, every authentication challenge ultimately traces back
//! to one of these.
//!
//! ## Invariants
//!
//! - Secret seed and derived signing key are either both present or both
//!   absent. The internal representation makes the half-states
//!   unrepresentable.
//! - When secret material is present, the public key is exactly the public
//!   half Ed25519 derives from the seed. The two are never independently
//!   settable: every signing-capable constructor funnels through
//!   [`HelioKeypair::from_raw_seed`].
//! - No field mutates after construction. Concurrent readers may sign,
//!   verify, and render addresses from the same instance without
//!   coordination.
//!
//! ## Security considerations
//!
//! - The stored seed is zeroized on drop; ed25519-dalek zeroizes the
//!   signing key itself.
//! - `Debug` prints the address, never secret material. Not even "partially."
//!   A partial leak is still a leak, and grepping logs for base32 is trivial.

use std::fmt;

use ed25519_dalek::{Signer, SigningKey};
use rand::rngs::OsRng;
use rand::RngCore;
use thiserror::Error;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::config::{SEED_LENGTH, SECRET_KEY_LENGTH, SIGNATURE_HINT_LENGTH, VERIFYING_KEY_LENGTH};
use crate::crypto::keys::{HelioPublicKey, HelioSignature};
use crate::encoding::strkey::{self, VersionByte};
use crate::encoding::{base58, DecodeError};
use crate::network::Network;
use crate::xdr;

/// Errors that can occur constructing or using a keypair.
#[derive(Debug, Error)]
pub enum KeypairError {
    /// Caller supplied bytes of the wrong length or shape.
    #[error("invalid {what} length: expected {expected} bytes, got {got}")]
    InvalidInput {
        /// What the bytes were supposed to be.
        what: &'static str,
        /// Expected number of bytes.
        expected: usize,
        /// Actual number of bytes.
        got: usize,
    },

    /// Text input failed validation in the codec layer.
    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),

    /// A secret-dependent operation was invoked on a public-key-only
    /// keypair. Check [`HelioKeypair::can_sign`] first.
    #[error("cannot sign: no secret key material available")]
    SigningUnavailable,
}

/// The secret seed, wiped from memory when the keypair is dropped.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
struct SecretSeed([u8; SEED_LENGTH]);

/// The two shapes an identity can take. Private — callers observe the
/// difference only through [`HelioKeypair::can_sign`] and the `Option` /
/// `Result` accessors.
#[derive(Clone)]
enum KeyMaterial {
    /// Verification and address rendering only.
    PublicOnly { public_key: HelioPublicKey },
    /// Full signing identity. `public_key` is always the key derived from
    /// `seed`; `signing_key` is the expanded form of the same seed.
    Signing {
        public_key: HelioPublicKey,
        seed: SecretSeed,
        signing_key: SigningKey,
    },
}

/// A HELIO identity keypair.
///
/// Obtained through the constructors below, never assembled from loose
/// fields. Cloning is allowed but should make you slightly uncomfortable —
/// every copy of a signing-capable keypair is another secret to protect.
///
/// # Examples
///
/// ```
/// use helio_protocol::identity::HelioKeypair;
///
/// let kp = HelioKeypair::random();
/// let sig = kp.sign(b"send 100 HLO to alice")?;
/// assert!(kp.verify(b"send 100 HLO to alice", &sig));
///
/// // A public-only keypair can verify but not sign.
/// let watcher = HelioKeypair::from_address(&kp.address())?;
/// assert!(!watcher.can_sign());
/// assert!(watcher.verify(b"send 100 HLO to alice", &sig));
/// # Ok::<(), helio_protocol::identity::KeypairError>(())
/// ```
#[derive(Clone)]
pub struct HelioKeypair {
    material: KeyMaterial,
}

impl HelioKeypair {
    // -----------------------------------------------------------------------
    // Constructors
    // -----------------------------------------------------------------------

    /// Construct a signing keypair from a checksummed seed string (`S...`).
    pub fn from_encoded_seed(seed: &str) -> Result<Self, KeypairError> {
        let raw = strkey::decode(VersionByte::Seed, seed)?;
        Self::from_raw_seed(&raw)
    }

    /// Construct a signing keypair from a legacy base58 seed string.
    ///
    /// Base58 seed encoding is **deprecated**. This constructor exists only
    /// so holders of pre-strkey seeds can migrate; it will be removed once
    /// the migration window closes.
    #[deprecated(note = "base58 seeds are transition-only; use from_encoded_seed")]
    #[allow(deprecated)]
    pub fn from_base58_seed(seed: &str) -> Result<Self, KeypairError> {
        tracing::warn!("decoding a legacy base58 seed; re-export it in strkey format");
        let raw = base58::decode_check(base58::LegacyVersionByte::Seed, seed)?;
        Self::from_raw_seed(&raw)
    }

    /// Construct a signing keypair from 32 raw seed bytes.
    ///
    /// This is the single funnel every signing-capable constructor goes
    /// through: the signing key and public key are derived here and nowhere
    /// else, so seed and public key cannot drift apart.
    ///
    /// **Warning**: if you call this with a weak seed, you get a weak key.
    /// Use a proper CSPRNG or KDF to produce the seed bytes.
    pub fn from_raw_seed(raw_seed: &[u8]) -> Result<Self, KeypairError> {
        let seed: [u8; SEED_LENGTH] =
            raw_seed
                .try_into()
                .map_err(|_| KeypairError::InvalidInput {
                    what: "seed",
                    expected: SEED_LENGTH,
                    got: raw_seed.len(),
                })?;

        let signing_key = SigningKey::from_bytes(&seed);
        let public_key = HelioPublicKey::from_bytes(signing_key.verifying_key().to_bytes());

        Ok(Self {
            material: KeyMaterial::Signing {
                public_key,
                seed: SecretSeed(seed),
                signing_key,
            },
        })
    }

    /// The canonical master keypair of a network.
    ///
    /// Derived by treating the network identifier as a raw seed. Everyone
    /// configured for the same network reproduces the same identity — that
    /// is the point. The passphrase is public, so this is a root reference
    /// for the network, not anybody's private key.
    pub fn master(network: &Network) -> Result<Self, KeypairError> {
        Self::from_raw_seed(&network.network_id())
    }

    /// Construct a public-key-only keypair from a checksummed address
    /// string (`G...`).
    ///
    /// The result can verify signatures and render its address, but
    /// [`can_sign`](Self::can_sign) is `false` and every secret-dependent
    /// operation fails with [`KeypairError::SigningUnavailable`].
    pub fn from_address(address: &str) -> Result<Self, KeypairError> {
        let decoded = strkey::decode(VersionByte::AccountId, address)?;
        let bytes: [u8; VERIFYING_KEY_LENGTH] =
            decoded
                .as_slice()
                .try_into()
                .map_err(|_| KeypairError::InvalidInput {
                    what: "public key",
                    expected: VERIFYING_KEY_LENGTH,
                    got: decoded.len(),
                })?;

        Ok(Self {
            material: KeyMaterial::PublicOnly {
                public_key: HelioPublicKey::from_bytes(bytes),
            },
        })
    }

    /// Generate a fresh signing keypair from the OS cryptographic RNG.
    ///
    /// Pulls from `/dev/urandom` on Unix and `BCryptGenRandom` on Windows.
    /// If either of those fails, the process has bigger problems than key
    /// generation, and we treat it as fatal rather than returning an error
    /// nobody can meaningfully handle.
    pub fn random() -> Self {
        let mut seed = [0u8; SEED_LENGTH];
        OsRng.fill_bytes(&mut seed);
        let kp = Self::from_raw_seed(&seed).expect("a 32-byte seed is always valid");
        seed.zeroize();
        kp
    }

    // -----------------------------------------------------------------------
    // Derived Values
    // -----------------------------------------------------------------------

    /// The public half of this identity.
    pub fn public_key(&self) -> HelioPublicKey {
        match &self.material {
            KeyMaterial::PublicOnly { public_key } | KeyMaterial::Signing { public_key, .. } => {
                public_key.clone()
            }
        }
    }

    /// The raw 32 public key bytes.
    pub fn raw_public_key(&self) -> &[u8; VERIFYING_KEY_LENGTH] {
        match &self.material {
            KeyMaterial::PublicOnly { public_key } | KeyMaterial::Signing { public_key, .. } => {
                public_key.as_bytes()
            }
        }
    }

    /// This identity as a typed XDR account ID.
    pub fn account_id(&self) -> xdr::AccountId {
        xdr::AccountId::Ed25519(*self.raw_public_key())
    }

    /// This identity's public key as a typed XDR public key.
    pub fn xdr_public_key(&self) -> xdr::PublicKey {
        xdr::PublicKey::Ed25519(*self.raw_public_key())
    }

    /// The checksummed address string (`G...`). Total function of the
    /// public key; works for every keypair.
    pub fn address(&self) -> String {
        strkey::encode(VersionByte::AccountId, self.raw_public_key())
    }

    /// The checksummed seed string (`S...`).
    ///
    /// Fails with [`KeypairError::SigningUnavailable`] on a public-key-only
    /// keypair — there is no seed to render.
    pub fn seed(&self) -> Result<String, KeypairError> {
        match &self.material {
            KeyMaterial::Signing { seed, .. } => Ok(strkey::encode(VersionByte::Seed, &seed.0)),
            KeyMaterial::PublicOnly { .. } => Err(KeypairError::SigningUnavailable),
        }
    }

    /// The raw 32-byte seed, or `None` for a public-key-only keypair.
    pub fn raw_seed(&self) -> Option<&[u8; SEED_LENGTH]> {
        match &self.material {
            KeyMaterial::Signing { seed, .. } => Some(&seed.0),
            KeyMaterial::PublicOnly { .. } => None,
        }
    }

    /// The expanded 64-byte secret key (seed followed by public key,
    /// NaCl-compatible), or `None` for a public-key-only keypair.
    ///
    /// **Handle with extreme care.** Don't log it, don't ship it over the
    /// network in plaintext, don't store it in a file called `my_keys.txt`.
    pub fn raw_secret_key(&self) -> Option<[u8; SECRET_KEY_LENGTH]> {
        match &self.material {
            KeyMaterial::Signing { signing_key, .. } => Some(signing_key.to_keypair_bytes()),
            KeyMaterial::PublicOnly { .. } => None,
        }
    }

    /// The signature hint: the last 4 bytes of this identity's canonical
    /// XDR account-ID encoding.
    ///
    /// Downstream multi-signature verification uses hints to match
    /// signatures to candidate signers without comparing full public keys.
    pub fn signature_hint(&self) -> [u8; SIGNATURE_HINT_LENGTH] {
        let encoded = self.account_id().to_xdr();
        let mut hint = [0u8; SIGNATURE_HINT_LENGTH];
        hint.copy_from_slice(&encoded[encoded.len() - SIGNATURE_HINT_LENGTH..]);
        hint
    }

    // -----------------------------------------------------------------------
    // Signing & Verification
    // -----------------------------------------------------------------------

    /// Whether this keypair holds secret material and can sign.
    ///
    /// This is a queryable capability, not a hint: when it returns `true`,
    /// [`sign`](Self::sign), [`seed`](Self::seed), and
    /// [`sign_decorated`](Self::sign_decorated) cannot fail.
    pub fn can_sign(&self) -> bool {
        matches!(self.material, KeyMaterial::Signing { .. })
    }

    /// Sign a message.
    ///
    /// Ed25519 signatures are deterministic — the same (key, message) pair
    /// always produces the same 64 bytes. Fails with
    /// [`KeypairError::SigningUnavailable`] on a public-key-only keypair.
    pub fn sign(&self, data: &[u8]) -> Result<HelioSignature, KeypairError> {
        match &self.material {
            KeyMaterial::Signing { signing_key, .. } => {
                Ok(HelioSignature::from_bytes(signing_key.sign(data).to_bytes()))
            }
            KeyMaterial::PublicOnly { .. } => Err(KeypairError::SigningUnavailable),
        }
    }

    /// Verify a signature against this keypair's public key.
    ///
    /// Returns `false` on mismatch — never an error, never a panic. Works
    /// for every keypair; no secret material is involved.
    pub fn verify(&self, data: &[u8], signature: &HelioSignature) -> bool {
        match &self.material {
            KeyMaterial::PublicOnly { public_key } | KeyMaterial::Signing { public_key, .. } => {
                public_key.verify(data, signature)
            }
        }
    }

    /// Sign a message and pair the signature with this identity's hint,
    /// producing the structure transmitted in transaction envelopes.
    ///
    /// Fails exactly when [`sign`](Self::sign) fails.
    pub fn sign_decorated(&self, data: &[u8]) -> Result<xdr::DecoratedSignature, KeypairError> {
        let signature = self.sign(data)?;
        Ok(xdr::DecoratedSignature {
            hint: self.signature_hint(),
            signature,
        })
    }
}

impl PartialEq for HelioKeypair {
    /// Two keypairs are equal if their public keys match. Comparing secret
    /// material in a non-constant-time way is a bad habit, and for identity
    /// purposes the public key is what matters.
    fn eq(&self, other: &Self) -> bool {
        self.raw_public_key() == other.raw_public_key()
    }
}

impl Eq for HelioKeypair {}

impl fmt::Debug for HelioKeypair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let capability = if self.can_sign() { "signing" } else { "public-only" };
        write!(f, "HelioKeypair({}, {})", self.address(), capability)
    }
}
