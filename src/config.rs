//! # Protocol Configuration & Constants
//!
//! Every magic number in the HELIO identity layer lives here. If you're
//! hardcoding a constant somewhere else, you're doing it wrong and you owe
//! the team coffee.
//!
//! These values define the shape of keys and addresses on the network.
//! Changing them after mainnet launch is somewhere between "difficult" and
//! "career-ending", so choose wisely during devnet.

// ---------------------------------------------------------------------------
// Key & Signature Sizes
// ---------------------------------------------------------------------------

/// Length of a raw secret seed in bytes. The seed is the 32 bytes of entropy
/// from which a full Ed25519 key pair is deterministically derived.
pub const SEED_LENGTH: usize = 32;

/// Public (verifying) key length in bytes.
pub const VERIFYING_KEY_LENGTH: usize = 32;

/// Expanded secret key length: seed followed by the derived public key,
/// NaCl-compatible. 64 bytes.
pub const SECRET_KEY_LENGTH: usize = 64;

/// Ed25519 signature length. Always 64 bytes. If yours isn't, something
/// has gone terribly wrong.
pub const SIGNATURE_LENGTH: usize = 64;

/// Length of a signature hint: the last 4 bytes of an account ID's canonical
/// XDR encoding. Used by multi-signature verification to match a signature
/// to a candidate signer without scanning full public keys.
pub const SIGNATURE_HINT_LENGTH: usize = 4;

// ---------------------------------------------------------------------------
// Network Passphrases
// ---------------------------------------------------------------------------
//
// A network identifier is the SHA-256 digest of its passphrase. Transactions
// signed for one network are meaningless on another, and the per-network
// master key is derived from this digest.

/// Mainnet — the real deal. Mistakes here cost real money.
pub const MAINNET_PASSPHRASE: &str = "HELIO Mainnet ; February 2026";

/// Testnet — where we break things on purpose and call it "testing."
pub const TESTNET_PASSPHRASE: &str = "HELIO Testnet ; February 2026";

/// Devnet — the wild west. Reset weekly, no promises, no survivors.
pub const DEVNET_PASSPHRASE: &str = "HELIO Devnet ; February 2026";
