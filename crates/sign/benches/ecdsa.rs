//! Benchmarks for ECDSA key generation, signing and verification
//!
//! Covers both registry curves across a range of message sizes.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use algorithms::ec::curve::{PRIME256V1, SECP256K1};
use ecrypt_sign::{sign, verify, PrivateKey};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

/// Message sizes to benchmark (in bytes)
const MESSAGE_SIZES: &[usize] = &[32, 256, 4096, 65536];

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("ecdsa_generate");

    // Fixed RNG for reproducibility
    let mut rng = ChaCha20Rng::from_seed([42u8; 32]);

    group.bench_function("secp256k1", |b| {
        b.iter(|| {
            let _ = black_box(PrivateKey::generate_with_rng(&mut rng, &SECP256K1));
        });
    });

    group.bench_function("prime256v1", |b| {
        b.iter(|| {
            let _ = black_box(PrivateKey::generate_with_rng(&mut rng, &PRIME256V1));
        });
    });

    group.finish();
}

fn bench_sign(c: &mut Criterion) {
    let mut group = c.benchmark_group("ecdsa_sign");
    let key = PrivateKey::generate(&SECP256K1);

    for &size in MESSAGE_SIZES {
        let message = vec![0xA5u8; size];
        group.bench_with_input(BenchmarkId::from_parameter(size), &message, |b, message| {
            b.iter(|| {
                let _ = black_box(sign(message, &key).unwrap());
            });
        });
    }

    group.finish();
}

fn bench_verify(c: &mut Criterion) {
    let mut group = c.benchmark_group("ecdsa_verify");
    let key = PrivateKey::generate(&SECP256K1);
    let public_key = key.public_key();

    for &size in MESSAGE_SIZES {
        let message = vec![0xA5u8; size];
        let signature = sign(&message, &key).unwrap();
        group.bench_with_input(
            BenchmarkId::from_parameter(size),
            &(message, signature),
            |b, (message, signature)| {
                b.iter(|| {
                    let _ = black_box(verify(message, signature, &public_key));
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_generate, bench_sign, bench_verify);
criterion_main!(benches);
