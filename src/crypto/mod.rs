//! # Cryptographic Primitives for HELIO
//!
//! The foundation of everything security-related in the identity layer.
//! Every signing operation and every network-identifier derivation flows
//! through here.
//!
//! We deliberately chose boring, well-audited cryptography:
//!
//! - **Ed25519** for signatures — fast, deterministic, and nobody has broken it.
//! - **SHA-256** for network identifiers — because interop beats novelty.
//!
//! ## A note on "rolling your own crypto"
//!
//! We don't. Everything here is a thin, type-safe wrapper around audited
//! implementations. If you're tempted to optimize these functions, please
//! reconsider. Then reconsider again. Then go read about timing attacks
//! and come back when you've lost the urge.

pub mod hash;
pub mod keys;

pub use hash::{sha256, sha256_array};
pub use keys::{HelioPublicKey, HelioSignature, KeyError};
