use bitsieve_core::BloomFilter;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bench_add(c: &mut Criterion) {
    let keys: Vec<String> = (0..1000).map(|i| format!("key-{}", i)).collect();

    c.bench_function("add 1000 keys", |b| {
        b.iter(|| {
            let mut filter = BloomFilter::with_capacity(1000, 0.01).unwrap();
            for key in &keys {
                filter.add(black_box(key)).unwrap();
            }
            filter
        })
    });
}

fn bench_check(c: &mut Criterion) {
    let mut filter = BloomFilter::with_capacity(1000, 0.01).unwrap();
    for i in 0..1000 {
        filter.add(&format!("key-{}", i)).unwrap();
    }
    let probes: Vec<String> = (500..1500).map(|i| format!("key-{}", i)).collect();

    c.bench_function("check 1000 keys", |b| {
        b.iter(|| {
            probes
                .iter()
                .filter(|key| filter.check(black_box(*key)).unwrap())
                .count()
        })
    });
}

criterion_group!(benches, bench_add, bench_check);
criterion_main!(benches);
