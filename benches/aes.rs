//! Benchmarks for the AES block cipher and CBC mode
//!
//! Covers key expansion, single-block encryption/decryption, and CBC
//! throughput for a range of message sizes across all three key lengths.

use blockcrypt::{Aes128, Aes192, Aes256, BlockCipher, Cbc, Iv, SecretBytes};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Benchmark AES key expansion
fn bench_key_expansion(c: &mut Criterion) {
    let mut group = c.benchmark_group("aes_key_expansion");
    let mut rng = ChaCha8Rng::seed_from_u64(42);

    group.bench_function("aes128", |b| {
        let mut key_bytes = [0u8; 16];
        rng.fill(&mut key_bytes);
        let key = SecretBytes::new(key_bytes);

        b.iter(|| {
            let cipher = Aes128::new(black_box(&key));
            black_box(cipher);
        });
    });

    group.bench_function("aes192", |b| {
        let mut key_bytes = [0u8; 24];
        rng.fill(&mut key_bytes);
        let key = SecretBytes::new(key_bytes);

        b.iter(|| {
            let cipher = Aes192::new(black_box(&key));
            black_box(cipher);
        });
    });

    group.bench_function("aes256", |b| {
        let mut key_bytes = [0u8; 32];
        rng.fill(&mut key_bytes);
        let key = SecretBytes::new(key_bytes);

        b.iter(|| {
            let cipher = Aes256::new(black_box(&key));
            black_box(cipher);
        });
    });

    group.finish();
}

/// Benchmark single block encryption
fn bench_block_encrypt(c: &mut Criterion) {
    let mut group = c.benchmark_group("aes_block_encrypt");
    group.throughput(Throughput::Bytes(16));

    let mut rng = ChaCha8Rng::seed_from_u64(42);

    {
        let cipher = Aes128::new(&Aes128::generate_key(&mut rng));

        group.bench_function("aes128", |b| {
            let mut block = [0u8; 16];
            rng.fill(&mut block);

            b.iter(|| {
                let mut data = block;
                cipher.encrypt_block(black_box(&mut data)).unwrap();
                black_box(data);
            });
        });
    }

    {
        let cipher = Aes192::new(&Aes192::generate_key(&mut rng));

        group.bench_function("aes192", |b| {
            let mut block = [0u8; 16];
            rng.fill(&mut block);

            b.iter(|| {
                let mut data = block;
                cipher.encrypt_block(black_box(&mut data)).unwrap();
                black_box(data);
            });
        });
    }

    {
        let cipher = Aes256::new(&Aes256::generate_key(&mut rng));

        group.bench_function("aes256", |b| {
            let mut block = [0u8; 16];
            rng.fill(&mut block);

            b.iter(|| {
                let mut data = block;
                cipher.encrypt_block(black_box(&mut data)).unwrap();
                black_box(data);
            });
        });
    }

    group.finish();
}

/// Benchmark single block decryption
fn bench_block_decrypt(c: &mut Criterion) {
    let mut group = c.benchmark_group("aes_block_decrypt");
    group.throughput(Throughput::Bytes(16));

    let mut rng = ChaCha8Rng::seed_from_u64(42);

    {
        let cipher = Aes128::new(&Aes128::generate_key(&mut rng));

        group.bench_function("aes128", |b| {
            let mut block = [0u8; 16];
            rng.fill(&mut block);
            cipher.encrypt_block(&mut block).unwrap(); // Pre-encrypt

            b.iter(|| {
                let mut data = block;
                cipher.decrypt_block(black_box(&mut data)).unwrap();
                black_box(data);
            });
        });
    }

    {
        let cipher = Aes256::new(&Aes256::generate_key(&mut rng));

        group.bench_function("aes256", |b| {
            let mut block = [0u8; 16];
            rng.fill(&mut block);
            cipher.encrypt_block(&mut block).unwrap(); // Pre-encrypt

            b.iter(|| {
                let mut data = block;
                cipher.decrypt_block(black_box(&mut data)).unwrap();
                black_box(data);
            });
        });
    }

    group.finish();
}

/// Benchmark CBC encryption throughput for various message sizes
fn bench_cbc_encrypt(c: &mut Criterion) {
    let mut group = c.benchmark_group("aes_cbc_encrypt");
    let mut rng = ChaCha8Rng::seed_from_u64(42);

    let sizes = [64, 256, 1024, 4096, 16384];

    for size in &sizes {
        group.throughput(Throughput::Bytes(*size as u64));

        {
            let iv = Iv::random(&mut rng);
            let cbc = Cbc::new(Aes128::new(&Aes128::generate_key(&mut rng)), &iv).unwrap();

            group.bench_with_input(BenchmarkId::new("aes128", size), size, |b, &size| {
                let mut data = vec![0u8; size];
                rng.fill(&mut data[..]);

                b.iter(|| {
                    let ciphertext = cbc.encrypt(black_box(&data)).unwrap();
                    black_box(ciphertext);
                });
            });
        }

        {
            let iv = Iv::random(&mut rng);
            let cbc = Cbc::new(Aes256::new(&Aes256::generate_key(&mut rng)), &iv).unwrap();

            group.bench_with_input(BenchmarkId::new("aes256", size), size, |b, &size| {
                let mut data = vec![0u8; size];
                rng.fill(&mut data[..]);

                b.iter(|| {
                    let ciphertext = cbc.encrypt(black_box(&data)).unwrap();
                    black_box(ciphertext);
                });
            });
        }
    }

    group.finish();
}

/// Benchmark CBC decryption (includes padding validation)
fn bench_cbc_decrypt(c: &mut Criterion) {
    let mut group = c.benchmark_group("aes_cbc_decrypt");
    let mut rng = ChaCha8Rng::seed_from_u64(42);

    let sizes = [256, 4096, 16384];

    for size in &sizes {
        group.throughput(Throughput::Bytes(*size as u64));

        let iv = Iv::random(&mut rng);
        let cbc = Cbc::new(Aes128::new(&Aes128::generate_key(&mut rng)), &iv).unwrap();

        group.bench_with_input(BenchmarkId::new("aes128", size), size, |b, &size| {
            let mut data = vec![0u8; size];
            rng.fill(&mut data[..]);
            let ciphertext = cbc.encrypt(&data).unwrap();

            b.iter(|| {
                let plaintext = cbc.decrypt(black_box(&ciphertext)).unwrap();
                black_box(plaintext);
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_key_expansion,
    bench_block_encrypt,
    bench_block_decrypt,
    bench_cbc_encrypt,
    bench_cbc_decrypt
);
criterion_main!(benches);
