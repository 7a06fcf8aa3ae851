//! # Network Identity
//!
//! A HELIO network is identified by a passphrase — a short, human-auditable
//! string that is hashed into the 32-byte network identifier. Signatures
//! bind to a network identifier, so a transaction signed for testnet is
//! gibberish on mainnet; no replay protection flag to forget, the math does
//! it for you.
//!
//! The network identifier has a second job: used as a raw seed, it derives
//! the canonical **master key** of the network
//! ([`HelioKeypair::master`](crate::identity::HelioKeypair::master)).
//! Because the passphrase is public, so is the master key's "secret" — it
//! is a network-wide root reference, not anyone's private key.

use serde::{Deserialize, Serialize};

use crate::config::{DEVNET_PASSPHRASE, MAINNET_PASSPHRASE, TESTNET_PASSPHRASE};
use crate::crypto::hash::sha256_array;

/// A configured network, identified by its passphrase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Network {
    passphrase: String,
}

impl Network {
    /// A network with a custom passphrase. Private test networks and
    /// ephemeral CI networks go through here.
    pub fn new(passphrase: impl Into<String>) -> Self {
        Self {
            passphrase: passphrase.into(),
        }
    }

    /// The public HELIO network.
    pub fn mainnet() -> Self {
        Self::new(MAINNET_PASSPHRASE)
    }

    /// The shared test network.
    pub fn testnet() -> Self {
        Self::new(TESTNET_PASSPHRASE)
    }

    /// The development network.
    pub fn devnet() -> Self {
        Self::new(DEVNET_PASSPHRASE)
    }

    /// The configured passphrase.
    pub fn passphrase(&self) -> &str {
        &self.passphrase
    }

    /// The 32-byte network identifier: `SHA-256(passphrase)`.
    pub fn network_id(&self) -> [u8; 32] {
        sha256_array(self.passphrase.as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn network_id_is_deterministic() {
        assert_eq!(
            Network::mainnet().network_id(),
            Network::mainnet().network_id()
        );
    }

    #[test]
    fn networks_have_distinct_ids() {
        let ids = [
            Network::mainnet().network_id(),
            Network::testnet().network_id(),
            Network::devnet().network_id(),
            Network::new("Standalone Network ; 2026").network_id(),
        ];
        for (i, a) in ids.iter().enumerate() {
            for b in &ids[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn custom_passphrase_is_preserved() {
        let net = Network::new("Integration Test Network ; 2026");
        assert_eq!(net.passphrase(), "Integration Test Network ; 2026");
    }
}
