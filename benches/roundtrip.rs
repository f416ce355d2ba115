// benches/roundtrip.rs
//! Round-trip (encrypt → decrypt) benchmarks over in-memory buffers

use cryp_rs::{decrypt, encrypt, Secret};

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;

// --- Size constants ---
const KB: usize = 1024;
const MB: usize = 1024 * 1024;

fn format_size(bytes: usize) -> String {
    if bytes >= MB {
        format!("{} MiB", bytes / MB)
    } else if bytes >= KB {
        format!("{} KiB", bytes / KB)
    } else {
        format!("{bytes} B")
    }
}

fn bench_roundtrip(c: &mut Criterion) {
    let mut group = c.benchmark_group("roundtrip");
    group.sample_size(20);

    let secret = Secret::new(b"benchmark-secret".to_vec());

    let sizes = [KB, 64 * KB, MB, 10 * MB];

    for &size in &sizes {
        let input = vec![0x41u8; size]; // repeating 'A'

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(
            BenchmarkId::new("size", format_size(size)),
            &size,
            |b, _| {
                b.iter(|| {
                    let (envelope, signature) = encrypt(black_box(&input), &secret).unwrap();
                    let plaintext = decrypt(&envelope, &signature, &secret).unwrap();
                    black_box(plaintext);
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_roundtrip);
criterion_main!(benches);
