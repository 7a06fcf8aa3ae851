// Copyright (c) 2026 Helio Labs. MIT License.
// See LICENSE for details.

//! # HELIO Protocol — Identity & Cryptography Library
//!
//! This crate is the identity layer of HELIO, an open settlement ledger.
//! Everything on the network that can hold value or sign a statement traces
//! back to the types defined here.
//!
//! HELIO takes a deliberately boring stance on cryptography: Ed25519 for
//! signatures (deterministic, fast, unbroken), SHA-256 for network-identifier
//! derivation (because the rest of the world already speaks it), and a
//! versioned, checksummed base32 text encoding for everything a human might
//! copy-paste.
//!
//! ## Architecture
//!
//! - **crypto** — Ed25519 key and signature types, hashing. Don't roll your own.
//! - **encoding** — The "strkey" checksummed text codec for addresses and
//!   seeds, plus the deprecated base58 predecessor kept only for migration.
//! - **identity** — [`identity::HelioKeypair`], the core identity value:
//!   construction from seeds, capability-gated signing, signature hints.
//! - **xdr** — Minimal canonical XDR fragments (typed public keys, decorated
//!   signatures) that the ledger's wire format expects.
//! - **network** — Network passphrases and identifiers, from which the
//!   canonical per-network master key is derived.
//! - **config** — Protocol constants. Every magic number lives there.
//!
//! ## Design Philosophy
//!
//! 1. Secret material is never fabricated silently and never mutated in place.
//! 2. A keypair without a secret is a first-class value, not an error state.
//! 3. Every fallible path returns a `Result`. No panics on untrusted input.
//! 4. If it guards money, it has tests. Plural.

pub mod config;
pub mod crypto;
pub mod encoding;
pub mod identity;
pub mod network;
pub mod xdr;
