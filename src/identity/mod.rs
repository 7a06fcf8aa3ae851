//! # Identity Module
//!
//! Every participant on the HELIO network is a keypair. This module owns
//! the keypair's whole lifecycle: deterministic construction from seed
//! material, capability-gated signing, and the checksummed text renderings
//! users actually see.
//!
//! The identity stack is layered:
//!
//! 1. **Keypair** — [`HelioKeypair`], the core identity value. Holds a
//!    public key and, for signing-capable identities, the seed it was
//!    derived from. Public-key-only keypairs are first-class: they verify
//!    and render addresses, they just can't sign.
//! 2. **Addresses** — strkey renderings of the public key (`G...`) and
//!    seed (`S...`), produced by [`crate::encoding::strkey`].
//! 3. **Master key** — the canonical per-network identity derived from the
//!    network identifier. Public by construction, used as a root reference.
//!
//! ## Design Decisions
//!
//! - The public-only/signing split is a private tagged variant, not a pair
//!   of nullable fields. "Seed present but derived key missing" is
//!   unrepresentable, and every secret-dependent operation pattern-matches
//!   its way to the material or returns [`KeypairError::SigningUnavailable`].
//! - Every signing-capable constructor funnels through
//!   [`HelioKeypair::from_raw_seed`], so the seed/public-key correspondence
//!   is enforced in exactly one place.

pub mod keypair;

pub use keypair::{HelioKeypair, KeypairError};
