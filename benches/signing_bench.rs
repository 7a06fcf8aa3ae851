// Signing & identity benchmarks for the HELIO protocol.
//
// Covers Ed25519 keypair generation, seed derivation, single-message signing
// and verification, and the strkey encode/decode paths that sit on every
// wallet interaction.

use criterion::{criterion_group, criterion_main, Criterion};

use helio_protocol::identity::HelioKeypair;

fn bench_keypair_generation(c: &mut Criterion) {
    c.bench_function("ed25519/keypair_random", |b| {
        b.iter(HelioKeypair::random);
    });
}

fn bench_from_raw_seed(c: &mut Criterion) {
    let seed = [7u8; 32];
    c.bench_function("ed25519/from_raw_seed", |b| {
        b.iter(|| HelioKeypair::from_raw_seed(&seed).unwrap());
    });
}

fn bench_sign_message(c: &mut Criterion) {
    let keypair = HelioKeypair::random();
    let message = b"transfer 500 HLO from alice to bob; nonce=42";

    c.bench_function("ed25519/sign_message", |b| {
        b.iter(|| keypair.sign(message).unwrap());
    });
}

fn bench_verify_signature(c: &mut Criterion) {
    let keypair = HelioKeypair::random();
    let message = b"transfer 500 HLO from alice to bob; nonce=42";
    let signature = keypair.sign(message).unwrap();

    c.bench_function("ed25519/verify_signature", |b| {
        b.iter(|| keypair.verify(message, &signature));
    });
}

fn bench_address_encode(c: &mut Criterion) {
    let keypair = HelioKeypair::random();

    c.bench_function("strkey/address_encode", |b| {
        b.iter(|| keypair.address());
    });
}

fn bench_address_decode(c: &mut Criterion) {
    let address = HelioKeypair::random().address();

    c.bench_function("strkey/address_decode", |b| {
        b.iter(|| HelioKeypair::from_address(&address).unwrap());
    });
}

fn bench_sign_decorated(c: &mut Criterion) {
    let keypair = HelioKeypair::random();
    let message = b"transfer 500 HLO from alice to bob; nonce=42";

    c.bench_function("ed25519/sign_decorated", |b| {
        b.iter(|| keypair.sign_decorated(message).unwrap());
    });
}

criterion_group!(
    benches,
    bench_keypair_generation,
    bench_from_raw_seed,
    bench_sign_message,
    bench_verify_signature,
    bench_address_encode,
    bench_address_decode,
    bench_sign_decorated,
);
criterion_main!(benches);
